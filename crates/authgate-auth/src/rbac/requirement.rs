//! Per-route authorization requirements.

use authgate_core::error::AppError;
use authgate_entity::user::Role;

use super::permission::Permission;
use crate::principal::Principal;

/// What a route demands of an authenticated caller.
#[derive(Debug, Clone)]
pub enum RouteRequirement {
    /// Any authenticated caller is admitted.
    Authenticated,
    /// Caller must hold exactly this role.
    Role(Role),
    /// Caller must hold at least one of the listed permissions.
    AnyPermission(Vec<Permission>),
}

impl RouteRequirement {
    /// Evaluates the requirement against a principal.
    ///
    /// Returns `Forbidden` when an authenticated caller lacks the demanded
    /// role or permission; authentication itself was settled earlier by
    /// the gate.
    pub fn evaluate(&self, principal: &Principal) -> Result<(), AppError> {
        match self {
            Self::Authenticated => Ok(()),
            Self::Role(role) => {
                if principal.role == *role {
                    Ok(())
                } else {
                    Err(AppError::forbidden(format!(
                        "Requires role '{role}'"
                    )))
                }
            }
            Self::AnyPermission(permissions) => {
                if permissions.iter().any(|p| principal.has_permission(*p)) {
                    Ok(())
                } else {
                    Err(AppError::forbidden("Insufficient permissions"))
                }
            }
        }
    }

    /// Convenience for the common "role AND permission" admin routes:
    /// evaluates both requirements in order.
    pub fn role_with_permission(
        principal: &Principal,
        role: Role,
        permission: Permission,
    ) -> Result<(), AppError> {
        Self::Role(role).evaluate(principal)?;
        Self::AnyPermission(vec![permission]).evaluate(principal)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use crate::rbac::RolePolicies;

    use super::*;

    fn principal(role: Role) -> Principal {
        let policies = RolePolicies::new();
        Principal {
            subject: "someone@mail.com".to_string(),
            user_id: Uuid::new_v4(),
            role,
            permissions: policies.permissions_for(role),
        }
    }

    #[test]
    fn test_authenticated_admits_everyone() {
        for role in [Role::Admin, Role::Manager, Role::User] {
            assert!(RouteRequirement::Authenticated.evaluate(&principal(role)).is_ok());
        }
    }

    #[test]
    fn test_role_requirement_is_exact() {
        let requirement = RouteRequirement::Role(Role::Admin);
        assert!(requirement.evaluate(&principal(Role::Admin)).is_ok());
        assert!(requirement.evaluate(&principal(Role::Manager)).is_err());
        assert!(requirement.evaluate(&principal(Role::User)).is_err());
    }

    #[test]
    fn test_any_permission_admits_manager_on_shared_routes() {
        let requirement = RouteRequirement::AnyPermission(vec![
            Permission::AdminRead,
            Permission::ManagerRead,
        ]);
        assert!(requirement.evaluate(&principal(Role::Admin)).is_ok());
        assert!(requirement.evaluate(&principal(Role::Manager)).is_ok());
        assert!(requirement.evaluate(&principal(Role::User)).is_err());
    }

    #[test]
    fn test_role_with_permission_denies_manager_on_admin_routes() {
        let admin = principal(Role::Admin);
        let manager = principal(Role::Manager);

        assert!(
            RouteRequirement::role_with_permission(&admin, Role::Admin, Permission::AdminCreate)
                .is_ok()
        );
        assert!(
            RouteRequirement::role_with_permission(&manager, Role::Admin, Permission::AdminCreate)
                .is_err()
        );
    }

    #[test]
    fn test_empty_permission_set_denies() {
        let mut p = principal(Role::User);
        p.permissions = HashSet::new();
        let requirement = RouteRequirement::AnyPermission(vec![Permission::ManagerRead]);
        assert!(requirement.evaluate(&p).is_err());
    }
}
