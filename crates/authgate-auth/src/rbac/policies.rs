//! Fixed role-to-permission policy table.

use std::collections::{HashMap, HashSet};

use authgate_entity::user::Role;

use super::permission::Permission;

/// Maps each role to its granted permission set.
///
/// The table is built once at startup and never mutated: admins hold every
/// permission in both scopes, managers hold the manager scope, and regular
/// users hold none.
#[derive(Debug, Clone)]
pub struct RolePolicies {
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RolePolicies {
    /// Builds the default policy table.
    pub fn new() -> Self {
        let mut grants = HashMap::new();

        grants.insert(Role::Admin, Permission::ALL.into_iter().collect());
        grants.insert(
            Role::Manager,
            HashSet::from([
                Permission::ManagerCreate,
                Permission::ManagerRead,
                Permission::ManagerUpdate,
                Permission::ManagerDelete,
            ]),
        );
        grants.insert(Role::User, HashSet::new());

        Self { grants }
    }

    /// Returns the permission set granted to a role.
    pub fn permissions_for(&self, role: Role) -> HashSet<Permission> {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Returns the role's permissions as sorted authority strings, the
    /// form embedded in access tokens.
    pub fn authorities_for(&self, role: Role) -> Vec<String> {
        let mut authorities: Vec<Permission> =
            self.permissions_for(role).into_iter().collect();
        authorities.sort();
        authorities.into_iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Checks whether a role holds a specific permission.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(&permission))
    }
}

impl Default for RolePolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_both_scopes() {
        let policies = RolePolicies::new();
        assert_eq!(policies.permissions_for(Role::Admin).len(), 8);
        assert!(policies.has_permission(Role::Admin, Permission::AdminDelete));
        assert!(policies.has_permission(Role::Admin, Permission::ManagerRead));
    }

    #[test]
    fn test_manager_holds_manager_scope_only() {
        let policies = RolePolicies::new();
        assert!(policies.has_permission(Role::Manager, Permission::ManagerUpdate));
        assert!(!policies.has_permission(Role::Manager, Permission::AdminRead));
        assert_eq!(policies.permissions_for(Role::Manager).len(), 4);
    }

    #[test]
    fn test_user_holds_nothing() {
        let policies = RolePolicies::new();
        assert!(policies.permissions_for(Role::User).is_empty());
    }

    #[test]
    fn test_authorities_are_sorted_strings() {
        let policies = RolePolicies::new();
        let authorities = policies.authorities_for(Role::Manager);
        assert_eq!(
            authorities,
            vec![
                "manager:create",
                "manager:read",
                "manager:update",
                "manager:delete"
            ]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
        );
    }
}
