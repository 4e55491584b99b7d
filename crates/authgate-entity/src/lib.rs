//! # authgate-entity
//!
//! Domain entity models for AuthGate: the user record and its role enum.

pub mod user;

pub use user::{NewUser, Role, User};
