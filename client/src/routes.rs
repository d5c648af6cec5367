//! Route table: paths, their role requirements, and post-login targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` wires these paths into `leptos_router`; pages use them to navigate.
//! Keeping the table here lets the role requirements be checked without a
//! router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::access::{Access, RoleSet, decide};
use crate::state::identity::Role;
use crate::state::session::SessionStore;

/// Every screen the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Unauthorized,
    UserDashboard,
    AdminDashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Unauthorized,
        AppRoute::UserDashboard,
        AppRoute::AdminDashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Unauthorized => "/unauthorized",
            Self::UserDashboard => "/user-dashboard",
            Self::AdminDashboard => "/admin-dashboard",
        }
    }

    /// Path without the leading slash, as `StaticSegment` expects it.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Resolve an exact path. Trailing slashes are tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Roles a route is restricted to, or `None` for public routes.
    pub fn required_roles(self) -> Option<RoleSet> {
        match self {
            Self::Home | Self::Login | Self::Unauthorized => None,
            Self::UserDashboard => Some(RoleSet::USER),
            Self::AdminDashboard => Some(RoleSet::ADMIN),
        }
    }

    /// Where a fresh login with `role` lands.
    pub fn dashboard_for(role: &Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::User | Role::Unrecognized(_) => Self::UserDashboard,
        }
    }

    /// Guard decision for showing this route with the given session.
    pub fn check(self, session: &SessionStore) -> Access {
        match self.required_roles() {
            Some(required) => decide(required, session.get()),
            None => Access::Render,
        }
    }
}
