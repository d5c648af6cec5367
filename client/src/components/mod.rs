//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap route views with access checks and shared session
//! controls. They take the session as a prop like pages do.

pub mod logout_button;
pub mod protected;
