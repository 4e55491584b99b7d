//! The authenticated caller attached to each authorized request.

use std::collections::HashSet;

use uuid::Uuid;

use authgate_entity::user::{Role, User};

use crate::rbac::{Permission, RolePolicies};

/// Identity and grants of an authenticated caller.
///
/// Built by the request gate after token validation and subject lookup;
/// handlers and route requirements read from it, never from raw claims.
#[derive(Debug, Clone)]
pub struct Principal {
    /// The subject email from the token.
    pub subject: String,
    /// The user's primary key.
    pub user_id: Uuid,
    /// Current role from the credential store.
    pub role: Role,
    /// Permissions derived from the current role.
    pub permissions: HashSet<Permission>,
}

impl Principal {
    /// Builds a principal for a stored user, deriving permissions from the
    /// policy table.
    pub fn for_user(user: &User, policies: &RolePolicies) -> Self {
        Self {
            subject: user.email.clone(),
            user_id: user.id,
            role: user.role,
            permissions: policies.permissions_for(user.role),
        }
    }

    /// Checks whether this principal holds a specific permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
