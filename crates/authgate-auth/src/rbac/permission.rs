//! Scoped permission grants.

use std::fmt;
use std::str::FromStr;

use authgate_core::error::AppError;

/// A scoped action grant, rendered as `scope:action` authority strings.
///
/// The permission set is closed: two scopes (admin, manager) crossed with
/// four CRUD actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    AdminCreate,
    AdminRead,
    AdminUpdate,
    AdminDelete,
    ManagerCreate,
    ManagerRead,
    ManagerUpdate,
    ManagerDelete,
}

impl Permission {
    /// All permissions, in scope-then-action order.
    pub const ALL: [Permission; 8] = [
        Self::AdminCreate,
        Self::AdminRead,
        Self::AdminUpdate,
        Self::AdminDelete,
        Self::ManagerCreate,
        Self::ManagerRead,
        Self::ManagerUpdate,
        Self::ManagerDelete,
    ];

    /// Returns the `scope:action` authority string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminCreate => "admin:create",
            Self::AdminRead => "admin:read",
            Self::AdminUpdate => "admin:update",
            Self::AdminDelete => "admin:delete",
            Self::ManagerCreate => "manager:create",
            Self::ManagerRead => "manager:read",
            Self::ManagerUpdate => "manager:update",
            Self::ManagerDelete => "manager:delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown permission: '{s}'")))
    }
}
