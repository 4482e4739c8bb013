use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    AirQualityReading, Coordinates, CurrentConditions, ForecastSample, Pollutants, WeatherSnapshot,
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const UNITS: &str = "metric";
const LANG: &str = "pt_br";

/// Failure of one of the two mandatory requests. Aborts the fetch cycle and
/// surfaces a single user-visible message; previously displayed data is
/// never cleared by it.
///
/// The best-effort air-quality request deliberately does not use this type:
/// its failures are swallowed and the reading is simply absent.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status for the city.
    #[error("city '{0}' not found")]
    CityNotFound(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered 200 with a body we could not decode.
    #[error("malformed response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn current_conditions(&self, city: &str) -> Result<CurrentConditions, FetchError>;

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, FetchError>;

    /// Best-effort: any failure yields `None`, never an error.
    async fn air_quality(&self, latitude: f64, longitude: f64) -> Option<AirQualityReading>;
}

/// One full fetch cycle. The two mandatory requests are issued together and
/// both must succeed; air quality is fetched afterwards, only when the city
/// resolved to coordinates.
pub async fn fetch_snapshot<C>(client: &C, city: &str) -> Result<WeatherSnapshot, FetchError>
where
    C: WeatherClient + ?Sized,
{
    let (current, samples) =
        tokio::try_join!(client.current_conditions(city), client.forecast(city))?;

    let air_quality = match current.coordinates {
        Some(coords) => client.air_quality(coords.latitude, coords.longitude).await,
        None => None,
    };

    Ok(WeatherSnapshot { current, samples, air_quality })
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Point the client at a different host. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%city, "fetching current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            debug!(status = %res.status(), "current conditions request rejected");
            return Err(FetchError::CityNotFound(city.to_owned()));
        }

        let body = res.text().await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("current conditions: {e}")))?;

        let (condition, description, icon) = primary_weather(&parsed.weather);

        Ok(CurrentConditions {
            city: parsed.name,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition,
            description,
            icon,
            sunrise: unix_to_utc(parsed.sys.sunrise).unwrap_or_else(Utc::now),
            sunset: unix_to_utc(parsed.sys.sunset).unwrap_or_else(Utc::now),
            coordinates: parsed
                .coord
                .map(|c| Coordinates { latitude: c.lat, longitude: c.lon }),
        })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastSample>, FetchError> {
        let url = format!("{}/forecast", self.base_url);
        debug!(%city, "fetching forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            debug!(status = %res.status(), "forecast request rejected");
            return Err(FetchError::CityNotFound(city.to_owned()));
        }

        let body = res.text().await?;
        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("forecast: {e}")))?;

        let samples = parsed
            .list
            .into_iter()
            .map(|entry| {
                let (condition, description, icon) = primary_weather(&entry.weather);
                ForecastSample {
                    timestamp: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
                    temp_min_c: entry.main.temp_min,
                    temp_max_c: entry.main.temp_max,
                    condition,
                    description,
                    icon,
                    precipitation_probability: entry.pop,
                }
            })
            .collect();

        Ok(samples)
    }

    async fn fetch_air_quality(&self, latitude: f64, longitude: f64) -> Option<AirQualityReading> {
        let url = format!("{}/air_pollution", self.base_url);
        debug!(latitude, longitude, "fetching air quality");

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await;

        let res = match res {
            Ok(r) => r,
            Err(e) => {
                debug!("air quality request failed: {e}");
                return None;
            }
        };

        if !res.status().is_success() {
            debug!(status = %res.status(), "air quality request rejected");
            return None;
        }

        let parsed: OwAirResponse = match res.json().await {
            Ok(p) => p,
            Err(e) => {
                debug!("air quality parse error: {e}");
                return None;
            }
        };

        parsed.list.into_iter().next().map(|entry| AirQualityReading {
            index: entry.main.aqi,
            pollutants: Pollutants {
                co: entry.components.co,
                no2: entry.components.no2,
                o3: entry.components.o3,
                pm2_5: entry.components.pm2_5,
                pm10: entry.components.pm10,
            },
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn current_conditions(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        self.fetch_current(city).await
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, FetchError> {
        self.fetch_forecast(city).await
    }

    async fn air_quality(&self, latitude: f64, longitude: f64) -> Option<AirQualityReading> {
        self.fetch_air_quality(latitude, longitude).await
    }
}

fn primary_weather(entries: &[OwWeather]) -> (String, String, String) {
    entries.first().map_or_else(
        || ("Unknown".to_owned(), "Unknown".to_owned(), String::new()),
        |w| (w.main.clone(), w.description.clone(), w.icon.clone()),
    )
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: Option<OwCoord>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwAirMain {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct OwAirComponents {
    co: f64,
    no2: f64,
    o3: f64,
    pm2_5: f64,
    pm10: f64,
}

#[derive(Debug, Deserialize)]
struct OwAirEntry {
    main: OwAirMain,
    components: OwAirComponents,
}

#[derive(Debug, Deserialize)]
struct OwAirResponse {
    list: Vec<OwAirEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_response_decodes() {
        let body = r#"{
            "name": "São Paulo",
            "coord": {"lat": -23.55, "lon": -46.63},
            "main": {"temp": 24.3, "feels_like": 24.9, "humidity": 61},
            "weather": [{"main": "Rain", "description": "chuva leve", "icon": "10d"}],
            "wind": {"speed": 3.1},
            "sys": {"sunrise": 1722762000, "sunset": 1722802800}
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).expect("valid body");
        assert_eq!(parsed.name, "São Paulo");
        assert_eq!(parsed.weather[0].main, "Rain");
        assert!(parsed.coord.is_some());
    }

    #[test]
    fn forecast_entry_defaults_missing_pop_to_zero() {
        let body = r#"{
            "list": [{
                "dt": 1722762000,
                "main": {"temp_min": 18.0, "temp_max": 21.5},
                "weather": [{"main": "Clouds", "description": "nublado", "icon": "04d"}]
            }]
        }"#;

        let parsed: OwForecastResponse = serde_json::from_str(body).expect("valid body");
        assert_eq!(parsed.list[0].pop, 0.0);
    }

    #[test]
    fn primary_weather_falls_back_on_empty_list() {
        let (condition, description, icon) = primary_weather(&[]);
        assert_eq!(condition, "Unknown");
        assert_eq!(description, "Unknown");
        assert!(icon.is_empty());
    }

    #[test]
    fn city_not_found_names_the_city() {
        let err = FetchError::CityNotFound("Atlantis".to_owned());
        assert_eq!(err.to_string(), "city 'Atlantis' not found");
    }
}
