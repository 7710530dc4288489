//! Service layer for business logic
//!
//! Validation and target derivation live here so the HTTP handlers stay thin.

mod link_service;

pub use link_service::*;
