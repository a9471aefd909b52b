use serde::{Deserialize, Serialize};

use crate::model::round_half_up;

/// Mutually exclusive visual theme derived from a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTag {
    Rain,
    Cloudy,
    Cold,
    Normal,
    Hot,
}

impl ThemeTag {
    /// Condition keywords win over temperature. The temperature is rounded to
    /// whole degrees before the thresholds are applied.
    pub fn select(temperature_c: f64, condition: &str) -> Self {
        let condition = condition.to_lowercase();
        let temp = round_half_up(temperature_c);

        if condition.contains("rain") {
            ThemeTag::Rain
        } else if condition.contains("cloud") {
            ThemeTag::Cloudy
        } else if temp <= 15.0 {
            ThemeTag::Cold
        } else if temp < 30.0 {
            ThemeTag::Normal
        } else {
            ThemeTag::Hot
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeTag::Rain => "rain",
            ThemeTag::Cloudy => "cloudy",
            ThemeTag::Cold => "cold",
            ThemeTag::Normal => "normal",
            ThemeTag::Hot => "hot",
        }
    }
}

impl std::fmt::Display for ThemeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
