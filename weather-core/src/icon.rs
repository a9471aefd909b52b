use serde::{Deserialize, Serialize};

/// Display icon chosen for a sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Rainy,
    Cloudy,
    Snowy,
    Thunder,
    ClearDay,
}

/// Keyword rules, checked in order. First hit wins, so "rain" beats "thunder".
const RULES: &[(&str, IconId)] = &[
    ("rain", IconId::Rainy),
    ("cloud", IconId::Cloudy),
    ("snow", IconId::Snowy),
    ("thunder", IconId::Thunder),
    ("clear", IconId::ClearDay),
];

impl IconId {
    /// Case-insensitive substring match against the keyword rules.
    /// Anything unrecognized falls back to [`IconId::ClearDay`].
    pub fn resolve(condition: &str) -> Self {
        let lower = condition.to_lowercase();

        RULES
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(IconId::ClearDay)
    }

    /// Animated asset name used by the web frontend.
    pub fn file_name(&self) -> &'static str {
        match self {
            IconId::Rainy => "rainy-3.svg",
            IconId::Cloudy => "cloudy-day-2.svg",
            IconId::Snowy => "snowy-3.svg",
            IconId::Thunder => "thunder.svg",
            IconId::ClearDay => "day.svg",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Rainy => "🌧",
            IconId::Cloudy => "⛅",
            IconId::Snowy => "🌨",
            IconId::Thunder => "🌩",
            IconId::ClearDay => "☀",
        }
    }
}
