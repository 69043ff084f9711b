use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    dates,
    errors::LookupError,
    weather::{CurrentConditions, DailyEntry, HourlyEntry, Location, WeatherSnapshot},
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_VARS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,is_day,\
precipitation,rain,showers,snowfall,wind_speed_10m,weather_code";
const DAILY_VARS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const HOURLY_VARS: &str = "temperature_2m,weather_code";

/// One call fetches current, daily and hourly together so the snapshot is
/// always a single transaction.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, location: Location) -> Result<WeatherSnapshot, LookupError> {
        let coords = location.coordinates();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", CURRENT_VARS.to_string()),
                ("daily", DAILY_VARS.to_string()),
                ("hourly", HOURLY_VARS.to_string()),
                ("forecast_days", "7".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|err| LookupError::network("weather", err))?
            .error_for_status()
            .map_err(|err| LookupError::network("weather", err))?;

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|err| LookupError::network("weather", err))?;

        let Some(current) = payload.current else {
            return Err(LookupError::NoData);
        };

        let units = payload.current_units.unwrap_or_default();
        debug!(name = %location.name, "assembled weather snapshot");

        Ok(WeatherSnapshot {
            location,
            current: assemble_current(current, units),
            daily: assemble_daily(&payload.daily),
            hourly: assemble_hourly(&payload.hourly),
            fetched_at: Utc::now(),
        })
    }
}

fn assemble_current(current: CurrentBlock, units: CurrentUnits) -> CurrentConditions {
    CurrentConditions {
        date_time: dates::parse_datetime(&current.time),
        weather_code: current.weather_code,
        is_day: current.is_day == 1,
        temperature: current.temperature_2m,
        feels_like: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        precipitation: current.precipitation,
        snowfall: current.snowfall,
        rain: current.rain,
        showers: current.showers,
        temperature_unit: units.temperature_2m.unwrap_or_else(|| "°C".to_string()),
        wind_speed_unit: units.wind_speed_10m.unwrap_or_else(|| "km/h".to_string()),
        precipitation_unit: units.precipitation.unwrap_or_else(|| "mm".to_string()),
        humidity_unit: units.relative_humidity_2m.unwrap_or_else(|| "%".to_string()),
    }
}

/// Parallel index-mapping over `time[i]`; indexes with an unparseable
/// timestamp or a missing value are skipped, API order is preserved.
fn assemble_daily(daily: &DailyBlock) -> Vec<DailyEntry> {
    let mut out = Vec::new();
    for idx in 0..daily.time.len() {
        let Some(date) = dates::parse_date(&daily.time[idx]) else {
            continue;
        };
        let Some(weather_code) = daily.weather_code.get(idx).copied().flatten() else {
            continue;
        };
        let Some(max_temp) = daily.temperature_2m_max.get(idx).copied().flatten() else {
            continue;
        };
        let Some(min_temp) = daily.temperature_2m_min.get(idx).copied().flatten() else {
            continue;
        };

        out.push(DailyEntry {
            date: dates::short_weekday(date),
            long_date: dates::long_weekday(date),
            min_temp,
            max_temp,
            weather_code,
        });
    }
    out
}

fn assemble_hourly(hourly: &HourlyBlock) -> Vec<HourlyEntry> {
    let mut out = Vec::new();
    for idx in 0..hourly.time.len() {
        let Some(time) = dates::parse_datetime(&hourly.time[idx]) else {
            continue;
        };
        let Some(temperature) = hourly.temperature_2m.get(idx).copied().flatten() else {
            continue;
        };
        let Some(weather_code) = hourly.weather_code.get(idx).copied().flatten() else {
            continue;
        };

        out.push(HourlyEntry {
            day: dates::long_weekday(time.date()),
            short_day: dates::short_weekday(time.date()),
            time: dates::hour_label(time),
            temperature,
            weather_code,
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
    current_units: Option<CurrentUnits>,
    #[serde(default)]
    daily: DailyBlock,
    #[serde(default)]
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f32,
    apparent_temperature: f32,
    relative_humidity_2m: f32,
    is_day: u8,
    precipitation: f32,
    rain: f32,
    showers: f32,
    snowfall: f32,
    wind_speed_10m: f32,
    weather_code: u8,
}

#[derive(Debug, Deserialize, Default)]
struct CurrentUnits {
    temperature_2m: Option<String>,
    wind_speed_10m: Option<String>,
    precipitation: Option<String>,
    relative_humidity_2m: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<u8>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
}

#[derive(Debug, Deserialize, Default)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f32>>,
    weather_code: Vec<Option<u8>>,
}
