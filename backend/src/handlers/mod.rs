//! HTTP handlers for the WardrobeScan backend

pub mod analysis;
pub mod health;
pub mod outfit;
pub mod wardrobe;
pub mod weather;

pub use analysis::*;
pub use health::*;
pub use outfit::*;
pub use wardrobe::*;
pub use weather::*;
