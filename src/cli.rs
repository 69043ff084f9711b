#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::units::{PrecipitationUnit, TemperatureUnit, UnitPreferences, WindSpeedUnit};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SystemArg {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TemperatureArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum WindArg {
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PrecipitationArg {
    Mm,
    In,
}

/// What happens to the last-good weather view when a search fails.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OnErrorArg {
    Keep,
    Clear,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "skycast", version, about = "Place-aware terminal weather lookup")]
pub struct Cli {
    /// Place name to look up (default: detect location, falling back to Texas)
    pub place: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long)]
    pub lon: Option<f64>,

    /// Unit system for all dimensions at once
    #[arg(long, value_enum)]
    pub units: Option<SystemArg>,

    /// Temperature unit override
    #[arg(long, value_enum)]
    pub temperature: Option<TemperatureArg>,

    /// Wind speed unit override
    #[arg(long, value_enum)]
    pub wind: Option<WindArg>,

    /// Precipitation unit override
    #[arg(long, value_enum)]
    pub precipitation: Option<PrecipitationArg>,

    /// Failure display policy
    #[arg(long, value_enum, default_value_t = OnErrorArg::Keep)]
    pub on_error: OnErrorArg,

    /// Keep running: stdin lines are searches, `:` lines are commands
    #[arg(long)]
    pub watch: bool,

    /// Refresh interval in seconds (watch mode)
    #[arg(long, default_value_t = 600)]
    pub refresh_interval: u64,

    /// Search debounce window in milliseconds (watch mode)
    #[arg(long, default_value_t = 1000)]
    pub debounce_ms: u64,

    /// Forward geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Reverse geocoding endpoint override
    #[arg(long)]
    pub reverse_url: Option<String>,

    /// Weather endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Location detection endpoint override
    #[arg(long)]
    pub geoip_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    /// Fallback place when location detection fails and no place was given.
    #[must_use]
    pub fn default_place(&self) -> String {
        "Texas".to_string()
    }

    #[must_use]
    pub fn unit_preferences(&self) -> UnitPreferences {
        let mut prefs = match self.units {
            Some(SystemArg::Imperial) => UnitPreferences::imperial(),
            Some(SystemArg::Metric) | None => UnitPreferences::metric(),
        };
        if let Some(temperature) = self.temperature {
            prefs.temperature = match temperature {
                TemperatureArg::Celsius => TemperatureUnit::Celsius,
                TemperatureArg::Fahrenheit => TemperatureUnit::Fahrenheit,
            };
        }
        if let Some(wind) = self.wind {
            prefs.wind = match wind {
                WindArg::Kmh => WindSpeedUnit::Kmh,
                WindArg::Mph => WindSpeedUnit::Mph,
            };
        }
        if let Some(precipitation) = self.precipitation {
            prefs.precipitation = match precipitation {
                PrecipitationArg::Mm => PrecipitationUnit::Millimeters,
                PrecipitationArg::In => PrecipitationUnit::Inches,
            };
        }
        prefs
    }
}
