//! # authgate-store
//!
//! In-memory persistence for AuthGate: the credential store holding user
//! records, and the revocation registry tracking logged-out tokens.
//!
//! Both stores are trait-backed so the service layer never depends on a
//! concrete backend.

pub mod credentials;
pub mod revocation;

pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use revocation::{MemoryRevocationRegistry, RevocationRegistry};
