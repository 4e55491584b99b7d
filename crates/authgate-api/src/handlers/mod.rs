//! HTTP request handlers, organized by controller.

pub mod admin;
pub mod auth;
pub mod demo;
pub mod health;
pub mod management;
pub mod user;
