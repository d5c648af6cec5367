//! Client-side state: who is logged in and what they may see.
//!
//! DESIGN
//! ======
//! `identity` holds the value types, `session` the single identity slot with
//! its storage mirror, and `access` the pure guard decision. None of these
//! depend on Leptos, so they are tested as plain Rust.

pub mod access;
pub mod identity;
pub mod session;
