use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates of the resolved city, used to key the
/// air-quality lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions for a city. Replaced wholesale on each successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Primary condition code, e.g. "Clear" or "Rain".
    pub condition: String,
    /// Free-text description, localized by the API.
    pub description: String,
    pub icon: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Absent when the API did not resolve the city to coordinates;
    /// without them no air-quality reading can be fetched.
    pub coordinates: Option<Coordinates>,
}

/// One timestamped forecast observation. The API returns an ordered
/// sequence of these covering roughly 5 days at 3-hour resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
    /// Probability of precipitation, 0.0..=1.0.
    pub precipitation_probability: f64,
}

/// Pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pollutants {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub pm2_5: f64,
    pub pm10: f64,
}

/// Air-quality reading: a coarse 1..=5 severity index plus pollutant
/// concentrations. Optional end to end; a city without a resolvable
/// reading simply has none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub index: u8,
    pub pollutants: Pollutants,
}

/// Everything one fetch cycle produced. Current conditions and forecast
/// samples are always present together; air quality may be absent on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub samples: Vec<ForecastSample>,
    pub air_quality: Option<AirQualityReading>,
}
