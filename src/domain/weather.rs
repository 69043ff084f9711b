use chrono::{DateTime, NaiveDateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Canonical place record produced by the resolver. Immutable once built;
/// each search replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Placeholder when neither reverse-geocoding provider could name the
    /// coordinates. Keeps the coordinates so the weather fetch still works.
    #[must_use]
    pub fn unknown(coords: Coordinates) -> Self {
        Self {
            name: "Unknown Location".to_string(),
            country: String::new(),
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current conditions as returned by the API. Values stay in the API's
/// declared units; the unit suffixes travel alongside them so display can
/// never drift from the data.
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub date_time: Option<NaiveDateTime>,
    pub weather_code: u8,
    pub is_day: bool,
    pub temperature: f32,
    pub feels_like: f32,
    pub humidity: f32,
    pub wind_speed: f32,
    pub precipitation: f32,
    pub snowfall: f32,
    pub rain: f32,
    pub showers: f32,
    pub temperature_unit: String,
    pub wind_speed_unit: String,
    pub precipitation_unit: String,
    pub humidity_unit: String,
}

/// One forecast day, display-ready: labels are attached at assembly time.
#[derive(Debug, Clone)]
pub struct DailyEntry {
    /// Short weekday label ("Mon").
    pub date: String,
    /// Full weekday label ("Monday").
    pub long_date: String,
    pub min_temp: f32,
    pub max_temp: f32,
    pub weather_code: u8,
}

#[derive(Debug, Clone)]
pub struct HourlyEntry {
    pub day: String,
    pub short_day: String,
    pub time: String,
    pub temperature: f32,
    pub weather_code: u8,
}

/// The atomic view-model unit: location plus all three weather sections
/// from one fetch transaction. Replaced as a whole, never merged, so the
/// display can never pair one city's forecast with another's conditions.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: Vec<DailyEntry>,
    pub hourly: Vec<HourlyEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Hourly subset for one forecast day, in API order.
    #[must_use]
    pub fn hours_for_day(&self, short_day: &str) -> Vec<&HourlyEntry> {
        self.hourly
            .iter()
            .filter(|entry| entry.short_day == short_day)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunder,
    Unknown,
}

pub fn weather_code_to_kind(code: u8) -> WeatherKind {
    match code {
        0 | 1 => WeatherKind::Clear,
        2 | 3 => WeatherKind::Cloudy,
        45 | 48 => WeatherKind::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherKind::Rain,
        71..=77 | 85..=86 => WeatherKind::Snow,
        95 | 96 | 99 => WeatherKind::Thunder,
        _ => WeatherKind::Unknown,
    }
}

pub fn weather_label(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm + light hail",
        99 => "Thunderstorm + heavy hail",
        _ => "Unknown",
    }
}
