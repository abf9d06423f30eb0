//! Business logic services for the WardrobeScan backend

pub mod analysis;
pub mod outfit;
pub mod wardrobe;
pub mod weather;

pub use analysis::AnalysisService;
pub use outfit::OutfitService;
pub use wardrobe::WardrobeService;
pub use weather::WeatherService;
