//! Daily-forecast aggregation.
//!
//! The 3-hourly samples are bucketed into one representative entry per
//! calendar day, keyed by the localized weekday label. The first sample seen
//! for a day wins; later samples for the same day are ignored, so the shown
//! min/max/description reflect that day's first 3-hour window. That is the
//! intended behavior, not a reduction over the whole day.

use chrono::{DateTime, Locale, TimeZone, Utc};

use crate::model::ForecastSample;

/// Upper bound on displayed days.
pub const MAX_DAYS: usize = 5;

/// One representative forecast entry for a calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub description: String,
    pub icon: String,
    pub precipitation_probability: f64,
}

impl DailyForecast {
    fn from_sample(sample: &ForecastSample) -> Self {
        Self {
            temp_min_c: sample.temp_min_c,
            temp_max_c: sample.temp_max_c,
            description: sample.description.clone(),
            icon: sample.icon.clone(),
            precipitation_probability: sample.precipitation_probability,
        }
    }
}

fn day_label<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format_localized("%A", Locale::pt_BR).to_string()
}

/// Bucket samples into `(weekday label, forecast)` pairs, at most
/// [`MAX_DAYS`] entries, in chronological order.
///
/// The first entry produced by the iteration is the current, partial day; it
/// is dropped from the output. Fewer than two distinct days therefore yield
/// an empty result. Labels are an ordered association: a plain vector of
/// pairs keeps first-insertion order, which a hash map would not.
pub fn aggregate<Tz>(samples: &[ForecastSample], tz: &Tz) -> Vec<(String, DailyForecast)>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut by_day: Vec<(String, DailyForecast)> = Vec::new();

    for sample in samples {
        let label = day_label(sample.timestamp, tz);
        if by_day.iter().any(|(day, _)| *day == label) {
            continue;
        }
        by_day.push((label, DailyForecast::from_sample(sample)));
    }

    by_day.into_iter().skip(1).take(MAX_DAYS).collect()
}
