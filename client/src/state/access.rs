//! Access guard for role-gated views.
//!
//! DESIGN
//! ======
//! `decide` is a total, stateless function of the view's required roles and
//! the live identity. Nothing is cached: guarded views call it on every
//! render pass, so a logout from anywhere re-runs it and redirects.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::identity::{Identity, Role};

/// Roles a guarded view accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleSet {
    user: bool,
    admin: bool,
}

impl RoleSet {
    pub const USER: Self = Self { user: true, admin: false };
    pub const ADMIN: Self = Self { user: false, admin: true };
    pub const ANY: Self = Self { user: true, admin: true };

    /// Membership test. Unrecognized roles are never members.
    pub fn contains(self, role: &Role) -> bool {
        match role {
            Role::User => self.user,
            Role::Admin => self.admin,
            Role::Unrecognized(_) => false,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.user && !self.admin
    }

    /// Add `role` to the set. Unrecognized roles are ignored.
    #[must_use]
    pub fn with(mut self, role: &Role) -> Self {
        match role {
            Role::User => self.user = true,
            Role::Admin => self.admin = true,
            Role::Unrecognized(_) => {}
        }
        self
    }
}

impl<'a> FromIterator<&'a Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), RoleSet::with)
    }
}

/// Where a rejected navigation is sent instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// Nobody is logged in.
    Login,
    /// Someone is logged in but their role is not accepted.
    Unauthorized,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Unauthorized => "/unauthorized",
        }
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Render,
    RedirectTo(Redirect),
}

impl Access {
    pub fn is_render(self) -> bool {
        matches!(self, Self::Render)
    }

    /// Redirect target, or `None` when the view may render.
    pub fn redirect(self) -> Option<Redirect> {
        match self {
            Self::Render => None,
            Self::RedirectTo(target) => Some(target),
        }
    }
}

/// Decide whether a view requiring `required` may render for `current`.
pub fn decide(required: RoleSet, current: Option<&Identity>) -> Access {
    match current {
        None => Access::RedirectTo(Redirect::Login),
        Some(identity) if !required.contains(&identity.role) => Access::RedirectTo(Redirect::Unauthorized),
        Some(_) => Access::Render,
    }
}
