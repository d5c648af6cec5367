//! Logged-in identity and the closed role enumeration.
//!
//! DESIGN
//! ======
//! `Identity` is a plain value: a new login replaces it wholesale and nothing
//! mutates it in place. Roles serialize as bare strings (`"user"`,
//! `"admin"`) so the stored record stays readable. Any other string decodes
//! into `Role::Unrecognized` verbatim instead of failing; the access guard
//! never matches it, so such an identity is fail-closed at authorization
//! time rather than at storage time.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role attached to an identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    /// A role string outside the closed set, kept as-is.
    Unrecognized(String),
}

impl Role {
    /// Roles offered by the login form, in display order.
    pub const CHOICES: [Role; 2] = [Role::User, Role::Admin];

    /// Wire/storage spelling of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Human-facing label for the role picker.
    pub fn label(&self) -> &str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a role string. Never fails; unknown input is preserved.
    pub fn parse(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::User => "user".to_owned(),
            Role::Admin => "admin".to_owned(),
            Role::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is currently considered logged in.
///
/// The name is operator-supplied and deliberately unvalidated: empty and
/// whitespace-only names are stored exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub role: Role,
}

impl Identity {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self { name: name.into(), role }
    }
}
