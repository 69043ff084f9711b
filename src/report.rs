//! Plain-text rendering of the orchestrator state: the crate's observable
//! surface. Deterministic for a fixed state, so it snapshot-tests cleanly.

use std::fmt::Write as _;

use crate::{
    app::state::{AppMode, AppState},
    domain::{
        dates,
        units::{
            self, PrecipitationUnit, TemperatureUnit, UnitPreferences, WindSpeedUnit,
        },
        weather::{
            CurrentConditions, WeatherKind, WeatherSnapshot, weather_code_to_kind, weather_label,
        },
    },
};

#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "* {notice}");
    }
    if let Some(error) = &state.last_error {
        let _ = writeln!(out, "! {error}");
    }
    match state.mode {
        AppMode::Loading => {
            let _ = writeln!(out, "Fetching weather...");
        }
        AppMode::Idle => {
            let _ = writeln!(out, "Type a place name to begin.");
        }
        AppMode::Ready | AppMode::Error | AppMode::Quit => {}
    }

    if let Some(snapshot) = &state.weather {
        if !out.is_empty() {
            let _ = writeln!(out);
        }
        render_snapshot(&mut out, snapshot, state.units);
    }

    out
}

fn render_snapshot(out: &mut String, snapshot: &WeatherSnapshot, units: UnitPreferences) {
    let current = &snapshot.current;
    let _ = writeln!(out, "{}", snapshot.location.display_name());
    if let Some(date_time) = current.date_time {
        let _ = writeln!(out, "{}", dates::current_label(date_time));
    }

    let temp_suffix = temperature_suffix(current, units);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}  {}  {:.0}{}  (feels like {:.0}{})",
        condition_glyph(current),
        weather_label(current.weather_code),
        units::convert_temperature(current.temperature, units.temperature),
        temp_suffix,
        units::convert_temperature(current.feels_like, units.temperature),
        temp_suffix,
    );
    let _ = writeln!(
        out,
        "  Humidity {:.0}{}   Wind {:.1} {}   Precipitation {:.2} {}",
        current.humidity,
        current.humidity_unit,
        units::convert_wind_speed(current.wind_speed, units.wind),
        wind_suffix(current, units),
        units::convert_precipitation(current.precipitation, units.precipitation),
        precipitation_suffix(current, units),
    );

    if !snapshot.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Daily forecast");
        for day in &snapshot.daily {
            let _ = writeln!(
                out,
                "  {}  {:>4.0}° / {:>4.0}°  {}",
                day.date,
                units::convert_temperature(day.max_temp, units.temperature),
                units::convert_temperature(day.min_temp, units.temperature),
                weather_label(day.weather_code),
            );
        }
    }

    if let Some(first) = snapshot.daily.first() {
        let hours = snapshot.hours_for_day(&first.date);
        if !hours.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Hourly ({})", first.long_date);
            for hour in hours {
                let _ = writeln!(
                    out,
                    "  {:>5}  {:>4.0}°  {}",
                    hour.time,
                    units::convert_temperature(hour.temperature, units.temperature),
                    weather_label(hour.weather_code),
                );
            }
        }
    }
}

/// One glyph per coarse condition category, with a day/night split for
/// clear skies.
fn condition_glyph(current: &CurrentConditions) -> &'static str {
    match weather_code_to_kind(current.weather_code) {
        WeatherKind::Clear => {
            if current.is_day {
                "☀"
            } else {
                "☾"
            }
        }
        WeatherKind::Cloudy => "☁",
        WeatherKind::Fog => "≡",
        WeatherKind::Rain => "☂",
        WeatherKind::Snow => "❄",
        WeatherKind::Thunder => "⚡",
        WeatherKind::Unknown => "•",
    }
}

// Converted values get the converted suffix; unconverted ones keep the
// suffix the API declared for the data.
fn temperature_suffix<'a>(current: &'a CurrentConditions, units: UnitPreferences) -> &'a str {
    match units.temperature {
        TemperatureUnit::Celsius => &current.temperature_unit,
        TemperatureUnit::Fahrenheit => "°F",
    }
}

fn wind_suffix<'a>(current: &'a CurrentConditions, units: UnitPreferences) -> &'a str {
    match units.wind {
        WindSpeedUnit::Kmh => &current.wind_speed_unit,
        WindSpeedUnit::Mph => "mph",
    }
}

fn precipitation_suffix<'a>(current: &'a CurrentConditions, units: UnitPreferences) -> &'a str {
    match units.precipitation {
        PrecipitationUnit::Millimeters => &current.precipitation_unit,
        PrecipitationUnit::Inches => "in",
    }
}
