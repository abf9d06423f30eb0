//! Weather service with a short-lived cache over the upstream API
//!
//! Conditions change slowly relative to how often users open the outfit
//! screen, so fetched snapshots are reused for 30 minutes per location
//! before the upstream API is asked again.

use chrono::{DateTime, Duration, Utc};
use shared::{GpsCoordinates, WeatherSnapshot};
use sqlx::PgPool;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Fetched snapshots stay valid this long
pub const CACHE_VALIDITY_MINUTES: i64 = 30;

/// Weather service for current conditions
#[derive(Clone)]
pub struct WeatherService {
    db: PgPool,
    client: WeatherClient,
}

/// Cached weather snapshot row
#[derive(Debug, Clone, sqlx::FromRow)]
struct CachedWeatherRow {
    temperature: f64,
    feels_like: f64,
    condition: String,
    description: String,
    wind_speed: f64,
    humidity: i32,
    icon: String,
    city: String,
}

impl From<CachedWeatherRow> for WeatherSnapshot {
    fn from(row: CachedWeatherRow) -> Self {
        WeatherSnapshot {
            temperature: row.temperature,
            feels_like: row.feels_like,
            condition: row.condition,
            description: row.description,
            wind_speed: row.wind_speed,
            humidity: row.humidity,
            icon: row.icon,
            city: row.city,
        }
    }
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(db: PgPool, client: WeatherClient) -> Self {
        Self { db, client }
    }

    /// Create a WeatherService from application configuration
    pub fn from_config(db: PgPool, config: &Config) -> AppResult<Self> {
        if config.weather.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }
        Ok(Self::new(
            db,
            WeatherClient::new(
                config.weather.api_endpoint.clone(),
                config.weather.api_key.clone(),
            ),
        ))
    }

    /// Current conditions at the given coordinates. Returns a cached
    /// snapshot when one fresher than [`CACHE_VALIDITY_MINUTES`] exists for
    /// the location (coordinates matched to two decimal places, roughly a
    /// kilometer).
    pub async fn get_current(&self, location: GpsCoordinates) -> AppResult<WeatherSnapshot> {
        let fresh_after = Utc::now() - Duration::minutes(CACHE_VALIDITY_MINUTES);

        if let Some(cached) = self.lookup_cached(location, fresh_after).await? {
            tracing::debug!(
                "Weather cache hit for ({}, {})",
                location.latitude,
                location.longitude
            );
            return Ok(cached.into());
        }

        let snapshot = self.client.get_current_weather(location).await?;
        self.store_snapshot(location, &snapshot).await?;
        Ok(snapshot)
    }

    async fn lookup_cached(
        &self,
        location: GpsCoordinates,
        fresh_after: DateTime<Utc>,
    ) -> AppResult<Option<CachedWeatherRow>> {
        let row = sqlx::query_as::<_, CachedWeatherRow>(
            r#"
            SELECT temperature, feels_like, condition, description,
                   wind_speed, humidity, icon, city
            FROM weather_cache
            WHERE round(latitude::numeric, 2) = round($1::numeric, 2)
              AND round(longitude::numeric, 2) = round($2::numeric, 2)
              AND fetched_at > $3
            ORDER BY fetched_at DESC
            LIMIT 1
            "#,
        )
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(fresh_after)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn store_snapshot(
        &self,
        location: GpsCoordinates,
        snapshot: &WeatherSnapshot,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO weather_cache (
                latitude, longitude, temperature, feels_like, condition,
                description, wind_speed, humidity, icon, city
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(snapshot.temperature)
        .bind(snapshot.feels_like)
        .bind(&snapshot.condition)
        .bind(&snapshot.description)
        .bind(snapshot.wind_speed)
        .bind(snapshot.humidity)
        .bind(&snapshot.icon)
        .bind(&snapshot.city)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
