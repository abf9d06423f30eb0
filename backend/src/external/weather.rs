//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap API

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, WeatherSnapshot};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap current-conditions response (the sections we read)
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(
        &self,
        location: GpsCoordinates,
    ) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, location.latitude, location.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_current_response(data))
    }
}

/// Convert the OpenWeatherMap response to our snapshot format
fn convert_current_response(data: OwmCurrentResponse) -> WeatherSnapshot {
    let weather = data.weather.first();

    WeatherSnapshot {
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        condition: weather
            .map(|w| w.main.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        wind_speed: data.wind.speed,
        humidity: data.main.humidity,
        icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
        city: data.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_response_with_empty_weather_list() {
        let data = OwmCurrentResponse {
            main: OwmMain {
                temp: 21.4,
                feels_like: 20.9,
                humidity: 40,
            },
            weather: vec![],
            wind: OwmWind { speed: 2.5 },
            name: "Haifa".to_string(),
        };
        let snapshot = convert_current_response(data);
        assert_eq!(snapshot.condition, "Unknown");
        assert_eq!(snapshot.city, "Haifa");
        assert_eq!(snapshot.humidity, 40);
    }
}
