#![allow(dead_code)]

use chrono::Utc;
use clap::Parser;
use skycast::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::{
        dates,
        weather::{CurrentConditions, DailyEntry, HourlyEntry, Location, WeatherSnapshot},
    },
};

/// CLI with every endpoint pointed somewhere unroutable; for tests that
/// must never leave the state machine.
pub fn offline_cli() -> Cli {
    cli_with_endpoints(
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
    )
}

pub fn cli_with_endpoints(geocode: &str, reverse: &str, forecast: &str, geoip: &str) -> Cli {
    Cli::parse_from([
        "skycast",
        "--geocode-url",
        geocode,
        "--reverse-url",
        reverse,
        "--forecast-url",
        forecast,
        "--geoip-url",
        geoip,
    ])
}

pub fn stockholm_location() -> Location {
    Location {
        name: "Stockholm".to_string(),
        country: "Sweden".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
    }
}

/// Deterministic snapshot pinned to Thursday 2026-02-12.
pub fn fixture_snapshot(weather_code: u8) -> WeatherSnapshot {
    let base_date = dates::parse_date("2026-02-12").expect("valid fixed date");

    let daily = (0..7)
        .map(|idx| {
            let date = base_date + chrono::Duration::days(i64::from(idx));
            DailyEntry {
                date: dates::short_weekday(date),
                long_date: dates::long_weekday(date),
                min_temp: 1.0 + idx as f32,
                max_temp: 8.0 + idx as f32,
                weather_code,
            }
        })
        .collect();

    let hourly = (0..3)
        .map(|idx| {
            let time = dates::parse_datetime("2026-02-12T10:00").expect("valid fixed time")
                + chrono::Duration::hours(i64::from(idx));
            HourlyEntry {
                day: dates::long_weekday(time.date()),
                short_day: dates::short_weekday(time.date()),
                time: dates::hour_label(time),
                temperature: 5.0 + idx as f32,
                weather_code,
            }
        })
        .collect();

    WeatherSnapshot {
        location: stockholm_location(),
        current: CurrentConditions {
            date_time: dates::parse_datetime("2026-02-12T10:30"),
            weather_code,
            is_day: true,
            temperature: 7.2,
            feels_like: 5.8,
            humidity: 73.0,
            wind_speed: 12.0,
            precipitation: 0.4,
            snowfall: 0.0,
            rain: 0.4,
            showers: 0.0,
            temperature_unit: "°C".to_string(),
            wind_speed_unit: "km/h".to_string(),
            precipitation_unit: "mm".to_string(),
            humidity_unit: "%".to_string(),
        },
        daily,
        hourly,
        fetched_at: Utc::now(),
    }
}

pub fn ready_state_with_weather(cli: &Cli, snapshot: WeatherSnapshot) -> AppState {
    let mut state = AppState::new(cli);
    state.weather = Some(snapshot);
    state.mode = AppMode::Ready;
    state
}

/// Open-Meteo style forecast payload for wiremock servers.
pub fn forecast_payload() -> serde_json::Value {
    serde_json::json!({
        "current": {
            "time": "2026-02-12T10:30",
            "temperature_2m": 7.2,
            "apparent_temperature": 5.8,
            "relative_humidity_2m": 73.0,
            "is_day": 1,
            "precipitation": 0.4,
            "rain": 0.4,
            "showers": 0.0,
            "snowfall": 0.0,
            "wind_speed_10m": 12.0,
            "weather_code": 61
        },
        "current_units": {
            "temperature_2m": "°C",
            "wind_speed_10m": "km/h",
            "precipitation": "mm",
            "relative_humidity_2m": "%"
        },
        "daily": {
            "time": [
                "2026-02-12", "2026-02-13", "2026-02-14", "2026-02-15",
                "2026-02-16", "2026-02-17", "2026-02-18"
            ],
            "weather_code": [61, 61, 3, 3, 0, 0, 61],
            "temperature_2m_max": [8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0],
            "temperature_2m_min": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
        },
        "hourly": {
            "time": ["2026-02-12T10:00", "2026-02-12T11:00", "2026-02-13T10:00"],
            "temperature_2m": [5.0, 6.0, 4.0],
            "weather_code": [61, 61, 61]
        }
    })
}

pub fn geocode_payload(name: &str, country: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [
            { "name": name, "country": country, "latitude": latitude, "longitude": longitude },
            { "name": "Elsewhere", "country": "Nowhere", "latitude": 0.0, "longitude": 0.0 }
        ]
    })
}
