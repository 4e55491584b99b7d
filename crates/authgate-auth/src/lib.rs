//! # authgate-auth
//!
//! The authentication and authorization core: JWT issuing and validation,
//! Argon2id password handling, the role/permission policy table, and the
//! `AuthService` orchestrating credential flows.

pub mod password;
pub mod principal;
pub mod rbac;
pub mod service;
pub mod token;

pub use principal::Principal;
pub use rbac::{Permission, RolePolicies, RouteRequirement};
pub use service::{AuthService, RegisterUser};
pub use token::{Claims, TokenDecoder, TokenEncoder, TokenKind, TokenPair};
