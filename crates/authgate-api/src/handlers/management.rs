//! Management controller — open to anyone holding either the admin or
//! manager permission for the method.

use authgate_auth::rbac::{Permission, RouteRequirement};

use crate::error::ApiError;
use crate::extractors::AuthPrincipal;

/// GET /api/v1/management
pub async fn get(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::AnyPermission(vec![Permission::AdminRead, Permission::ManagerRead])
        .evaluate(&auth)?;
    Ok("GET:: management controller")
}

/// POST /api/v1/management
pub async fn post(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::AnyPermission(vec![Permission::AdminCreate, Permission::ManagerCreate])
        .evaluate(&auth)?;
    Ok("POST:: management controller")
}

/// PUT /api/v1/management
pub async fn put(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::AnyPermission(vec![Permission::AdminUpdate, Permission::ManagerUpdate])
        .evaluate(&auth)?;
    Ok("PUT:: management controller")
}

/// DELETE /api/v1/management
pub async fn delete(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::AnyPermission(vec![Permission::AdminDelete, Permission::ManagerDelete])
        .evaluate(&auth)?;
    Ok("DELETE:: management controller")
}
