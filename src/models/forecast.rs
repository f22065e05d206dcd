//! Multi-day forecast model

use std::fmt;

use super::weather::Condition;

/// One day of a simulated forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastEntry {
    /// 1-based day index
    pub day: u8,
    /// Temperature in Celsius
    pub temperature: i32,
    pub condition: Condition,
}

impl ForecastEntry {
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}

/// Forecast for a city, ordered by day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    pub city: String,
    pub days: Vec<ForecastEntry>,
}

impl Forecast {
    /// Number of days covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here's the {}-day forecast for {}:", self.len(), self.city)?;
        writeln!(f)?;
        for entry in &self.days {
            writeln!(
                f,
                "📅 Day {}: {}, {}",
                entry.day,
                entry.format_temperature(),
                entry.condition
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_rendering() {
        let forecast = Forecast {
            city: "London".to_string(),
            days: vec![
                ForecastEntry {
                    day: 1,
                    temperature: 14,
                    condition: Condition::Cloudy,
                },
                ForecastEntry {
                    day: 2,
                    temperature: 21,
                    condition: Condition::PartlyCloudy,
                },
            ],
        };

        assert_eq!(
            forecast.to_string(),
            "Here's the 2-day forecast for London:\n\n\
             📅 Day 1: 14°C, cloudy\n\
             📅 Day 2: 21°C, partly cloudy\n"
        );
    }
}
