//! Shared types and domain logic for WardrobeScan
//!
//! This crate contains the models and pure decision logic shared between the
//! backend, the frontend (via WASM), and other components of the system.

pub mod color;
pub mod labeling;
pub mod models;
pub mod suggestion;
pub mod types;
pub mod validation;

pub use color::*;
pub use labeling::*;
pub use models::*;
pub use suggestion::*;
pub use types::*;
pub use validation::*;
