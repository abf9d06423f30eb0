//! Weather data models

use serde::{Deserialize, Serialize};

/// Temperatures below this are treated as cold (°C)
pub const COLD_THRESHOLD_CELSIUS: f64 = 10.0;

/// Temperatures above this are treated as hot (°C)
pub const HOT_THRESHOLD_CELSIUS: f64 = 28.0;

/// A snapshot of current conditions at the user's location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Celsius
    pub temperature: f64,
    pub feels_like: f64,
    /// Condition keyword, e.g. "Rain", "Clear", "Clouds"
    pub condition: String,
    pub description: String,
    /// m/s
    pub wind_speed: f64,
    pub humidity: i32,
    pub icon: String,
    pub city: String,
}

impl WeatherSnapshot {
    pub fn is_rainy(&self) -> bool {
        matches!(
            self.condition.to_lowercase().as_str(),
            "rain" | "drizzle" | "thunderstorm"
        )
    }

    pub fn is_snowy(&self) -> bool {
        self.condition.eq_ignore_ascii_case("snow")
    }

    pub fn is_cold(&self) -> bool {
        self.temperature < COLD_THRESHOLD_CELSIUS
    }

    pub fn is_hot(&self) -> bool {
        self.temperature > HOT_THRESHOLD_CELSIUS
    }

    /// Informational only; no suggestion rule keys off wind
    pub fn is_windy(&self) -> bool {
        self.wind_speed > 10.0
    }

    pub fn temperature_fahrenheit(&self) -> f64 {
        self.temperature * 9.0 / 5.0 + 32.0
    }

    /// Human-readable summary carried on each outfit candidate,
    /// e.g. "22°C, Clear". The temperature is truncated toward zero.
    pub fn summary(&self) -> String {
        format!("{}°C, {}", self.temperature as i32, self.condition)
    }
}
