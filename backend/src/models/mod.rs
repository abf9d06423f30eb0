//! Database models for the WardrobeScan backend
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;
