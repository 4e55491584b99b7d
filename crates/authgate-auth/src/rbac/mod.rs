//! Role-based access control: permissions, role policies, and per-route
//! requirements.

pub mod permission;
pub mod policies;
pub mod requirement;

pub use permission::Permission;
pub use policies::RolePolicies;
pub use requirement::RouteRequirement;
