use serde::{Deserialize, Serialize};

/// Payload returned by the weather backend for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendWeather {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    /// Kilometers.
    pub visibility: f64,
    pub condition: String,
}

/// One successful lookup, as displayed and as kept in the recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: i64,
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub visibility_m: f64,
    pub condition: String,
}

impl WeatherRecord {
    /// Normalize a backend payload. `id` is taken as given and never recomputed.
    pub fn from_backend(payload: BackendWeather, id: i64) -> Self {
        Self {
            id,
            city_name: payload.city,
            country_code: payload.country,
            temperature_c: payload.temperature,
            humidity_pct: payload.humidity,
            pressure_hpa: payload.pressure,
            wind_speed_mps: payload.wind_speed,
            visibility_m: payload.visibility * 1000.0,
            condition: payload.condition,
        }
    }

    pub fn visibility_km(&self) -> f64 {
        self.visibility_m / 1000.0
    }

    /// Temperature rounded to whole degrees, the way it is shown to users.
    pub fn rounded_temperature(&self) -> i64 {
        round_half_up(self.temperature_c) as i64
    }
}

/// Nearest whole number with halves going up, so -2.5 becomes -2 and 2.5 becomes 3.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> BackendWeather {
        serde_json::from_value(serde_json::json!({
            "city": "Pune",
            "country": "IN",
            "temperature": 27.6,
            "humidity": 61,
            "pressure": 1009,
            "windSpeed": 3.4,
            "visibility": 6,
            "condition": "Haze"
        }))
        .expect("backend payload should parse")
    }

    #[test]
    fn from_backend_copies_fields_and_scales_visibility() {
        let rec = WeatherRecord::from_backend(payload(), 42);

        assert_eq!(rec.id, 42);
        assert_eq!(rec.city_name, "Pune");
        assert_eq!(rec.country_code, "IN");
        assert_eq!(rec.temperature_c, 27.6);
        assert_eq!(rec.humidity_pct, 61);
        assert_eq!(rec.pressure_hpa, 1009);
        assert_eq!(rec.wind_speed_mps, 3.4);
        assert_eq!(rec.visibility_m, 6000.0);
        assert_eq!(rec.visibility_km(), 6.0);
        assert_eq!(rec.condition, "Haze");
        assert_eq!(rec.rounded_temperature(), 28);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(14.4), 14.0);

        let mut rec = WeatherRecord::from_backend(payload(), 1);
        rec.temperature_c = -2.5;
        assert_eq!(rec.rounded_temperature(), -2);
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let rec = WeatherRecord::from_backend(payload(), 7);
        let value = serde_json::to_value(&rec).expect("record should serialize");

        assert_eq!(value["cityName"], "Pune");
        assert_eq!(value["countryCode"], "IN");
        assert_eq!(value["visibilityM"], 6000.0);
    }
}
