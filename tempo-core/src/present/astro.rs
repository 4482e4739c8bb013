//! Moon-phase approximation and sun-event formatting.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Approximate length of a synodic month in days.
const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Epoch constant of the approximation: offsets the simplified day count so
/// the phase fraction lines up with a known new moon.
const EPOCH_OFFSET_DAYS: f64 = 694_039.09;

/// The eight named phases, in waxing-to-waning order starting at new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const IN_ORDER: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Phase for a calendar date, via the classic approximation: a rough
    /// day count since the epoch, divided by the synodic period, with the
    /// fractional cycle bucketed eight ways (half-bucket shifted so each
    /// named phase is centered on its fraction). Approximate by design;
    /// off-by-a-day around the exact quarter instants is expected.
    pub fn for_date(date: NaiveDate) -> Self {
        let c = (f64::from(date.year() - 2000) * 365.25).floor();
        let e = 30.6 * f64::from(date.month());
        let days = c + e + f64::from(date.day()) - EPOCH_OFFSET_DAYS;

        let cycles = days / SYNODIC_MONTH_DAYS;
        let fraction = cycles - cycles.floor();
        let bucket = (fraction * 8.0 + 0.5).floor() as usize % 8;

        IN_ORDER[bucket]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::New => "Lua Nova",
            Self::WaxingCrescent => "Lua Crescente",
            Self::FirstQuarter => "Quarto Crescente",
            Self::WaxingGibbous => "Lua Gibosa Crescente",
            Self::Full => "Lua Cheia",
            Self::WaningGibbous => "Lua Gibosa Minguante",
            Self::LastQuarter => "Quarto Minguante",
            Self::WaningCrescent => "Lua Minguante",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

/// Render a sunrise/sunset instant as "HH:MM" in the given time zone.
pub fn format_sun_event<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%H:%M").to_string()
}
