//! Outfit models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed combination of wardrobe items produced by the suggestion engine.
///
/// Candidates are constructed fresh on each invocation and never persisted by
/// the engine itself; the caller owns them from there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitCandidate {
    /// Ordered item references: top+bottom or dress first, then layers
    pub item_ids: Vec<Uuid>,
    /// Lowercased occasion tag, e.g. "casual"
    pub occasion: String,
    /// E.g. "22°C, Clear"
    pub weather_summary: String,
}

/// The occasion an outfit is assembled for. Affects only the output label,
/// not the filtering rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    #[default]
    Casual,
    Work,
    GoingOut,
}

impl Occasion {
    /// Lowercase tag carried on outfit candidates
    pub fn tag(&self) -> &'static str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Work => "work",
            Occasion::GoingOut => "going_out",
        }
    }

    /// Case-insensitive parse, defaulting to [`Occasion::Casual`]
    pub fn from_str_or_default(value: &str) -> Occasion {
        match value.trim().to_lowercase().as_str() {
            "work" => Occasion::Work,
            "going_out" | "goingout" | "going out" => Occasion::GoingOut,
            _ => Occasion::Casual,
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
