//! Core library for the `tempo` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client (current conditions, 5-day forecast, air quality)
//! - Shared domain models (snapshots, readings)
//! - The presentation derivations (backgrounds, daily buckets, air-quality
//!   labels, moon phase, sun events)
//!
//! It is used by `tempo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;
pub mod present;

pub use client::{FetchError, OpenWeatherClient, WeatherClient, fetch_snapshot};
pub use config::Config;
pub use model::{AirQualityReading, CurrentConditions, ForecastSample, WeatherSnapshot};
pub use present::Dashboard;
