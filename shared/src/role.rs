//! Role definitions
//!
//! The service has a fixed three-role model. Memberships are non-exclusive:
//! a user may hold several roles, and a superuser bypasses role checks
//! entirely.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three role groups recognized by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

/// All roles, in provisioning order
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Manager, Role::Employee];

impl Role {
    /// Canonical role name as stored in the database and carried in tokens
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Manager" => Ok(Self::Manager),
            "Employee" => Ok(Self::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn test_unknown_role() {
        assert!("Superuser".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err()); // case-sensitive
    }
}
