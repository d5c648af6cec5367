//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared controls
//! to `components`. Pages receive the session handle as a prop.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod unauthorized;
