//! Unit preferences and the conversions between API-native metric values
//! and their display units. The API is always queried in metric; conversion
//! happens at render time so a preference flip never needs a refetch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeedUnit {
    Kmh,
    Mph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationUnit {
    Millimeters,
    Inches,
}

/// One unit choice per dimension. Mixed systems are allowed; `metric()`
/// and `imperial()` are just the two common bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPreferences {
    pub temperature: TemperatureUnit,
    pub wind: WindSpeedUnit,
    pub precipitation: PrecipitationUnit,
}

impl UnitPreferences {
    #[must_use]
    pub fn metric() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            wind: WindSpeedUnit::Kmh,
            precipitation: PrecipitationUnit::Millimeters,
        }
    }

    #[must_use]
    pub fn imperial() -> Self {
        Self {
            temperature: TemperatureUnit::Fahrenheit,
            wind: WindSpeedUnit::Mph,
            precipitation: PrecipitationUnit::Inches,
        }
    }

    #[must_use]
    pub fn is_metric(&self) -> bool {
        *self == Self::metric()
    }

    /// Flips between the two bundles, treating any mixed preference as
    /// metric for the purpose of deciding the direction.
    #[must_use]
    pub fn toggle_system(self) -> Self {
        if self.is_metric() {
            Self::imperial()
        } else {
            Self::metric()
        }
    }
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self::metric()
    }
}

/// Celsius to Fahrenheit, rounded to the nearest whole degree.
#[must_use]
pub fn to_fahrenheit(celsius: f32) -> f32 {
    (celsius * 9.0 / 5.0 + 32.0).round()
}

/// km/h to mph, one decimal place.
#[must_use]
pub fn to_mph(kmh: f32) -> f32 {
    round1(kmh * 0.621_371)
}

/// Millimeters to inches, two decimal places.
#[must_use]
pub fn to_inches(mm: f32) -> f32 {
    round2(mm / 25.4)
}

#[must_use]
pub fn convert_temperature(celsius: f32, unit: TemperatureUnit) -> f32 {
    match unit {
        TemperatureUnit::Celsius => celsius.round(),
        TemperatureUnit::Fahrenheit => to_fahrenheit(celsius),
    }
}

#[must_use]
pub fn convert_wind_speed(kmh: f32, unit: WindSpeedUnit) -> f32 {
    match unit {
        WindSpeedUnit::Kmh => round1(kmh),
        WindSpeedUnit::Mph => to_mph(kmh),
    }
}

#[must_use]
pub fn convert_precipitation(mm: f32, unit: PrecipitationUnit) -> f32 {
    match unit {
        PrecipitationUnit::Millimeters => round2(mm),
        PrecipitationUnit::Inches => to_inches(mm),
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
