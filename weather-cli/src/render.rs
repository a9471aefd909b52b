//! Plain-text rendering of the view state.

use smartweather_core::{IconId, ViewState, WeatherRecord};

/// Error line first, then the current weather if any. Empty when idle.
pub fn view(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(err) = &state.error {
        out.push_str(&format!("error: {err}\n"));
    }

    if let Some(rec) = &state.current {
        let icon = IconId::resolve(&rec.condition);
        out.push_str(&format!(
            "{}  {}°C  {}, {}\n",
            icon.glyph(),
            rec.rounded_temperature(),
            rec.city_name,
            rec.country_code
        ));
        out.push_str(&format!("   {} ({})\n", rec.condition, icon.file_name()));
        for (label, value) in details(rec) {
            out.push_str(&format!("   {label:<11}{value}\n"));
        }
        if let Some(theme) = state.theme {
            out.push_str(&format!("   {:<11}{theme}\n", "Theme"));
        }
    }

    out
}

fn details(rec: &WeatherRecord) -> [(&'static str, String); 4] {
    [
        ("Humidity", format!("{}%", rec.humidity_pct)),
        ("Pressure", format!("{} hPa", rec.pressure_hpa)),
        ("Wind", format!("{} m/s", rec.wind_speed_mps)),
        ("Visibility", format!("{} km", rec.visibility_km())),
    ]
}

/// One line per entry for menus and listings.
pub fn recent_line(rec: &WeatherRecord) -> String {
    let icon = IconId::resolve(&rec.condition);
    format!(
        "{} {}  {}°C  {}",
        icon.glyph(),
        rec.city_name,
        rec.rounded_temperature(),
        rec.condition
    )
}

pub fn recent_list(entries: &[WeatherRecord]) -> String {
    if entries.is_empty() {
        return "No recent searches.\n".to_string();
    }

    let mut out = String::from("Recent searches:\n");
    for (i, rec) in entries.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, recent_line(rec)));
    }
    out
}

pub fn top_list(cities: &[String]) -> String {
    let glyph = IconId::ClearDay.glyph();
    let mut out = String::from("Top cities:\n");
    for city in cities {
        out.push_str(&format!("  {glyph} {city}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartweather_core::{LookupError, ThemeTag};

    fn rec() -> WeatherRecord {
        WeatherRecord {
            id: 1,
            city_name: "Tokyo".into(),
            country_code: "JP".into(),
            temperature_c: 18.6,
            humidity_pct: 64,
            pressure_hpa: 1015,
            wind_speed_mps: 3.5,
            visibility_m: 10_000.0,
            condition: "Few clouds".into(),
        }
    }

    #[test]
    fn idle_view_is_empty() {
        assert_eq!(view(&ViewState::default()), "");
    }

    #[test]
    fn view_shows_rounded_temperature_and_details() {
        let state = ViewState {
            current: Some(rec()),
            theme: Some(ThemeTag::Cloudy),
            ..ViewState::default()
        };
        let out = view(&state);

        assert!(out.contains("19°C  Tokyo, JP"));
        assert!(out.contains("cloudy-day-2.svg"));
        assert!(out.contains("64%"));
        assert!(out.contains("1015 hPa"));
        assert!(out.contains("3.5 m/s"));
        assert!(out.contains("10 km"));
        assert!(out.contains("cloudy"));
    }

    #[test]
    fn view_layout_is_one_field_per_line() {
        let state = ViewState {
            current: Some(WeatherRecord {
                temperature_c: -2.5,
                condition: "Snow".into(),
                ..rec()
            }),
            theme: Some(ThemeTag::Cold),
            ..ViewState::default()
        };

        assert_eq!(
            view(&state),
            "🌨  -2°C  Tokyo, JP\n   Snow (snowy-3.svg)\n   Humidity   64%\n   \
             Pressure   1015 hPa\n   Wind       3.5 m/s\n   Visibility 10 km\n   \
             Theme      cold\n"
        );
    }

    #[test]
    fn error_is_shown_next_to_stale_weather() {
        let state = ViewState {
            current: Some(rec()),
            error: Some(LookupError::CityNotFound),
            ..ViewState::default()
        };
        let out = view(&state);

        assert!(out.starts_with("error: City not found. Please enter a valid city name."));
        assert!(out.contains("Tokyo, JP"));
    }

    #[test]
    fn recent_list_is_numbered_from_one() {
        let out = recent_list(&[rec()]);
        assert!(out.contains(" 1. ⛅ Tokyo  19°C  Few clouds"));
        assert_eq!(recent_list(&[]), "No recent searches.\n");
    }

    #[test]
    fn top_list_lists_every_city() {
        let out = top_list(&["Paris".to_string(), "Dubai".to_string()]);
        assert!(out.contains("Paris"));
        assert!(out.contains("Dubai"));
    }
}
