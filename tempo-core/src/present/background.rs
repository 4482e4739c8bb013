//! Condition-to-background mapping.
//!
//! The theme is a pure function of (condition code, hour of day). Day/night
//! variants exist for clear and cloudy skies only; precipitation themes are
//! time-invariant.

/// Primary condition codes the dashboard distinguishes. Everything the API
/// may return beyond these collapses into [`Condition::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Other,
}

impl Condition {
    /// Case-insensitive parse; unrecognized or absent codes map to `Other`.
    pub fn parse(code: Option<&str>) -> Self {
        match code.map(str::to_lowercase).as_deref() {
            Some("clear") => Self::Clear,
            Some("clouds") => Self::Clouds,
            Some("rain") => Self::Rain,
            Some("thunderstorm") => Self::Thunderstorm,
            Some("snow") => Self::Snow,
            _ => Self::Other,
        }
    }
}

/// Animated effect layered over the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Rain,
}

/// Decorative background descriptor: a gradient (CSS utility stops), an
/// image reference, and an optional overlay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTheme {
    pub gradient: &'static str,
    pub image: &'static str,
    pub overlay: Option<Overlay>,
}

const IMG_DEFAULT: &str =
    "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?auto=format&fit=crop&q=80";
const IMG_CLEAR_DAY: &str =
    "https://images.unsplash.com/photo-1601297183305-6df142704ea2?auto=format&fit=crop&q=80";
const IMG_CLEAR_NIGHT: &str =
    "https://images.unsplash.com/photo-1532978879514-6cb2cac0c5c3?auto=format&fit=crop&q=80";
const IMG_CLOUDS: &str =
    "https://images.unsplash.com/photo-1534088568595-a066f410bcda?auto=format&fit=crop&q=80";
const IMG_RAIN: &str =
    "https://images.unsplash.com/photo-1519692933481-e162a57d6721?auto=format&fit=crop&q=80";
const IMG_THUNDERSTORM: &str =
    "https://images.unsplash.com/photo-1605727216801-e27ce1d0cc28?auto=format&fit=crop&q=80";
const IMG_SNOW: &str =
    "https://images.unsplash.com/photo-1478265409131-1f65c88f965c?auto=format&fit=crop&q=80";

const DEFAULT_THEME: BackgroundTheme = BackgroundTheme {
    gradient: "from-blue-500 to-purple-600",
    image: IMG_DEFAULT,
    overlay: None,
};

/// Daytime is the half-open range 6:00..18:00.
pub fn is_daytime(hour: u32) -> bool {
    (6..18).contains(&hour)
}

/// Select the background for a condition code at the given hour of day.
pub fn select(condition_code: Option<&str>, hour: u32) -> BackgroundTheme {
    let day = is_daytime(hour);

    match Condition::parse(condition_code) {
        Condition::Clear => BackgroundTheme {
            gradient: if day { "from-blue-400 to-blue-200" } else { "from-blue-900 to-purple-900" },
            image: if day { IMG_CLEAR_DAY } else { IMG_CLEAR_NIGHT },
            overlay: None,
        },
        Condition::Clouds => BackgroundTheme {
            gradient: if day { "from-gray-400 to-blue-300" } else { "from-gray-800 to-blue-900" },
            image: IMG_CLOUDS,
            overlay: None,
        },
        Condition::Rain => BackgroundTheme {
            gradient: "from-gray-700 to-blue-900",
            image: IMG_RAIN,
            overlay: Some(Overlay::Rain),
        },
        Condition::Thunderstorm => BackgroundTheme {
            gradient: "from-gray-900 to-blue-900",
            image: IMG_THUNDERSTORM,
            overlay: Some(Overlay::Rain),
        },
        Condition::Snow => BackgroundTheme {
            gradient: "from-blue-100 to-blue-200",
            image: IMG_SNOW,
            overlay: None,
        },
        Condition::Other => DEFAULT_THEME,
    }
}
