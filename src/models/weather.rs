//! Weather condition, static record and current-conditions report

use std::fmt;

/// Sky/weather condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Clear,
    PartlyCloudy,
    Overcast,
    Windy,
    Cold,
}

impl Condition {
    /// Conditions drawn for cities missing from the static table
    pub const RANDOM_CURRENT: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Clear,
    ];

    /// Conditions drawn for forecast days
    pub const FORECAST: [Condition; 6] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Clear,
        Condition::PartlyCloudy,
        Condition::Overcast,
    ];

    /// Lowercase human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Clear => "clear",
            Condition::PartlyCloudy => "partly cloudy",
            Condition::Overcast => "overcast",
            Condition::Windy => "windy",
            Condition::Cold => "cold",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed weather entry for a known city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherRecord {
    /// City name as it appears in replies
    pub city: &'static str,
    /// Temperature in Celsius
    pub temperature: i32,
    pub condition: Condition,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
}

/// Current conditions for one city, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentWeather {
    pub city: String,
    /// Temperature in Celsius
    pub temperature: i32,
    pub condition: Condition,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed_kmh: u32,
}

impl CurrentWeather {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh)
    }

    /// Format humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity)
    }
}

impl fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current weather in {}:", self.city)?;
        writeln!(f, "🌡️ Temperature: {}", self.format_temperature())?;
        writeln!(f, "🌤️ Condition: {}", self.condition)?;
        writeln!(f, "💨 Wind Speed: {}", self.format_wind())?;
        writeln!(f, "💧 Humidity: {}", self.format_humidity())
    }
}
