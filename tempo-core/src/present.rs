//! Weather-to-presentation derivations.
//!
//! Everything in this module is a pure function of a [`WeatherSnapshot`] and
//! a point in time: no I/O, deterministic given its inputs. The submodules
//! hold the individual derivations; [`Dashboard::derive`] glues them into the
//! display model the presentation layer consumes.

pub mod air_quality;
pub mod astro;
pub mod background;
pub mod daily;

use chrono::{DateTime, TimeZone, Timelike};

use crate::model::{CurrentConditions, Pollutants, WeatherSnapshot};

pub use air_quality::{AirQualityInfo, InvalidAirQualityIndex, SeverityColor};
pub use astro::MoonPhase;
pub use background::{BackgroundTheme, Condition, Overlay};
pub use daily::DailyForecast;

/// Classified air quality together with the raw pollutant concentrations
/// the presentation layer prints.
#[derive(Debug, Clone, Copy)]
pub struct AirQualitySection {
    pub info: AirQualityInfo,
    pub pollutants: Pollutants,
}

/// The derived display model for one fetch cycle.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub current: CurrentConditions,
    /// Up to five upcoming days, keyed by localized weekday label,
    /// in chronological order. Excludes the current (partial) day.
    pub daily: Vec<(String, DailyForecast)>,
    pub air_quality: Option<AirQualitySection>,
    pub background: BackgroundTheme,
    pub moon: MoonPhase,
    pub sunrise: String,
    pub sunset: String,
}

impl Dashboard {
    /// Derive the display model from a snapshot, as seen at `now` in the
    /// viewer's time zone. `now` drives the day/night background variant,
    /// the moon phase, and the day bucketing of forecast samples.
    pub fn derive<Tz>(
        snapshot: &WeatherSnapshot,
        now: DateTime<Tz>,
    ) -> Result<Self, InvalidAirQualityIndex>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let tz = now.timezone();

        let air_quality = snapshot
            .air_quality
            .map(|reading| {
                air_quality::classify(reading.index)
                    .map(|info| AirQualitySection { info, pollutants: reading.pollutants })
            })
            .transpose()?;

        Ok(Self {
            current: snapshot.current.clone(),
            daily: daily::aggregate(&snapshot.samples, &tz),
            air_quality,
            background: background::select(Some(snapshot.current.condition.as_str()), now.hour()),
            moon: MoonPhase::for_date(now.date_naive()),
            sunrise: astro::format_sun_event(snapshot.current.sunrise, &tz),
            sunset: astro::format_sun_event(snapshot.current.sunset, &tz),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AirQualityReading, CurrentConditions, ForecastSample, WeatherSnapshot};
    use chrono::{TimeZone, Utc};

    fn rainy_current() -> CurrentConditions {
        CurrentConditions {
            city: "Recife".to_owned(),
            temperature_c: 24.0,
            feels_like_c: 25.1,
            humidity_pct: 80,
            wind_speed_mps: 4.2,
            condition: "Rain".to_owned(),
            description: "chuva leve".to_owned(),
            icon: "10d".to_owned(),
            sunrise: Utc.with_ymd_and_hms(2026, 8, 3, 8, 30, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(2026, 8, 3, 20, 45, 0).unwrap(),
            coordinates: None,
        }
    }

    fn sample_at(day: u32, hour: u32) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap(),
            temp_min_c: 17.0,
            temp_max_c: 23.0,
            condition: "Rain".to_owned(),
            description: "chuva leve".to_owned(),
            icon: "10d".to_owned(),
            precipitation_probability: 0.4,
        }
    }

    fn pollutants() -> crate::model::Pollutants {
        crate::model::Pollutants { co: 201.9, no2: 11.3, o3: 60.2, pm2_5: 12.5, pm10: 19.8 }
    }

    #[test]
    fn rainy_week_without_coordinates() {
        // Seven distinct days of samples, no resolvable coordinates.
        let samples: Vec<_> = (3..10).map(|day| sample_at(day, 9)).collect();
        let snapshot =
            WeatherSnapshot { current: rainy_current(), samples, air_quality: None };

        let now = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
        let dashboard = Dashboard::derive(&snapshot, now).expect("derivation succeeds");

        assert_eq!(dashboard.background.overlay, Some(Overlay::Rain));
        assert_eq!(dashboard.daily.len(), 5);
        // First displayed day is the day after the first sampled day.
        assert_eq!(dashboard.daily[0].0, "terça-feira");
        assert!(dashboard.air_quality.is_none());
    }

    #[test]
    fn air_quality_is_classified_when_present() {
        let snapshot = WeatherSnapshot {
            current: rainy_current(),
            samples: vec![sample_at(3, 9)],
            air_quality: Some(AirQualityReading { index: 2, pollutants: pollutants() }),
        };

        let now = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
        let dashboard = Dashboard::derive(&snapshot, now).expect("derivation succeeds");

        let section = dashboard.air_quality.expect("reading present");
        assert_eq!(section.info.label, "Moderada");
        assert_eq!(section.pollutants.pm10, 19.8);
    }

    #[test]
    fn out_of_range_index_fails_derivation() {
        let snapshot = WeatherSnapshot {
            current: rainy_current(),
            samples: vec![sample_at(3, 9)],
            air_quality: Some(AirQualityReading { index: 6, pollutants: pollutants() }),
        };

        let now = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
        let err = Dashboard::derive(&snapshot, now).unwrap_err();
        assert_eq!(err, InvalidAirQualityIndex(6));
    }

    #[test]
    fn sun_events_format_in_the_given_zone() {
        let snapshot = WeatherSnapshot {
            current: rainy_current(),
            samples: vec![sample_at(3, 9)],
            air_quality: None,
        };

        let offset = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
        let dashboard = Dashboard::derive(&snapshot, now).expect("derivation succeeds");

        // 08:30 / 20:45 UTC seen from UTC-3.
        assert_eq!(dashboard.sunrise, "05:30");
        assert_eq!(dashboard.sunset, "17:45");
    }
}
