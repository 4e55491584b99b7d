//! Admin controller — requires the admin role plus the matching
//! admin-scope permission for each method.

use authgate_auth::rbac::{Permission, RouteRequirement};
use authgate_entity::user::Role;

use crate::error::ApiError;
use crate::extractors::AuthPrincipal;

/// GET /api/v1/admin
pub async fn get(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::role_with_permission(&auth, Role::Admin, Permission::AdminRead)?;
    Ok("GET:: admin controller")
}

/// POST /api/v1/admin
pub async fn post(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::role_with_permission(&auth, Role::Admin, Permission::AdminCreate)?;
    Ok("POST:: admin controller")
}

/// PUT /api/v1/admin
pub async fn put(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::role_with_permission(&auth, Role::Admin, Permission::AdminUpdate)?;
    Ok("PUT:: admin controller")
}

/// DELETE /api/v1/admin
pub async fn delete(auth: AuthPrincipal) -> Result<&'static str, ApiError> {
    RouteRequirement::role_with_permission(&auth, Role::Admin, Permission::AdminDelete)?;
    Ok("DELETE:: admin controller")
}
