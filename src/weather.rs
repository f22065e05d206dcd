//! Simulated weather source
//!
//! Serves current conditions and five-day forecasts from a static table of
//! known cities, falling back to random values for anything else. The random
//! source is always passed in so callers can seed it.

use rand::RngExt;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;

use crate::models::{Condition, CurrentWeather, Forecast, ForecastEntry, WeatherRecord};

/// Number of days produced by [`five_day_forecast`]
pub const FORECAST_DAYS: u8 = 5;

/// Temperature range (°C) for synthesized values
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 10..=30;
/// Humidity range (%) for synthesized values
pub const HUMIDITY_RANGE: RangeInclusive<u8> = 50..=90;
/// Wind speed range (km/h), drawn on every current-conditions request
pub const WIND_SPEED_RANGE: RangeInclusive<u32> = 5..=25;

/// Cities with fixed conditions, in lookup order
pub static KNOWN_WEATHER: [WeatherRecord; 8] = [
    WeatherRecord { city: "New York", temperature: 22, condition: Condition::Sunny, humidity: 65 },
    WeatherRecord { city: "London", temperature: 15, condition: Condition::Cloudy, humidity: 80 },
    WeatherRecord { city: "Tokyo", temperature: 28, condition: Condition::PartlyCloudy, humidity: 70 },
    WeatherRecord { city: "Paris", temperature: 18, condition: Condition::Rainy, humidity: 85 },
    WeatherRecord { city: "Sydney", temperature: 25, condition: Condition::Clear, humidity: 60 },
    WeatherRecord { city: "Toronto", temperature: 12, condition: Condition::Windy, humidity: 75 },
    WeatherRecord { city: "Berlin", temperature: 16, condition: Condition::Overcast, humidity: 78 },
    WeatherRecord { city: "Moscow", temperature: 8, condition: Condition::Cold, humidity: 82 },
];

/// Exact-name lookup in the static table
#[must_use]
pub fn lookup(city: &str) -> Option<&'static WeatherRecord> {
    KNOWN_WEATHER.iter().find(|record| record.city == city)
}

// choice sets are non-empty constants
fn pick<R: RngExt>(rng: &mut R, choices: &[Condition]) -> Condition {
    choices.choose(rng).copied().unwrap_or(Condition::Clear)
}

/// Current conditions for `city`.
///
/// Known cities keep their table values and only get a fresh wind speed;
/// unknown cities are synthesized entirely.
pub fn current_weather<R: RngExt>(city: &str, rng: &mut R) -> CurrentWeather {
    let wind_speed_kmh = rng.random_range(WIND_SPEED_RANGE);

    match lookup(city) {
        Some(record) => {
            tracing::debug!(city, "Serving static weather record");
            CurrentWeather {
                city: record.city.to_string(),
                temperature: record.temperature,
                condition: record.condition,
                humidity: record.humidity,
                wind_speed_kmh,
            }
        }
        None => {
            tracing::debug!(city, "No static record, synthesizing weather");
            CurrentWeather {
                city: city.to_string(),
                temperature: rng.random_range(TEMPERATURE_RANGE),
                condition: pick(rng, &Condition::RANDOM_CURRENT),
                humidity: rng.random_range(HUMIDITY_RANGE),
                wind_speed_kmh,
            }
        }
    }
}

/// Freshly generated five-day forecast; never cached.
pub fn five_day_forecast<R: RngExt>(city: &str, rng: &mut R) -> Forecast {
    let days = (1..=FORECAST_DAYS)
        .map(|day| ForecastEntry {
            day,
            temperature: rng.random_range(TEMPERATURE_RANGE),
            condition: pick(rng, &Condition::FORECAST),
        })
        .collect();

    Forecast {
        city: city.to_string(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const SAMPLES: u64 = 200;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("Tokyo").map(|r| r.humidity), Some(70));
        assert!(lookup("Chicago").is_none());
        // exact match only
        assert!(lookup("tokyo").is_none());
    }

    #[test]
    fn test_known_city_keeps_static_fields() {
        for seed in 0..SAMPLES {
            let mut rng = StdRng::seed_from_u64(seed);
            let weather = current_weather("Tokyo", &mut rng);

            assert_eq!(weather.city, "Tokyo");
            assert_eq!(weather.temperature, 28);
            assert_eq!(weather.condition, Condition::PartlyCloudy);
            assert_eq!(weather.humidity, 70);
            assert!(WIND_SPEED_RANGE.contains(&weather.wind_speed_kmh));
        }
    }

    #[test]
    fn test_known_city_wind_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let winds: std::collections::HashSet<u32> = (0..SAMPLES)
            .map(|_| current_weather("London", &mut rng).wind_speed_kmh)
            .collect();
        assert!(winds.len() > 1);
    }

    #[rstest]
    #[case("San Francisco")]
    #[case("Los Angeles")]
    #[case("Atlantis")]
    fn test_unknown_city_is_within_bounds(#[case] city: &str) {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SAMPLES {
            let weather = current_weather(city, &mut rng);

            assert_eq!(weather.city, city);
            assert!(TEMPERATURE_RANGE.contains(&weather.temperature));
            assert!(HUMIDITY_RANGE.contains(&weather.humidity));
            assert!(WIND_SPEED_RANGE.contains(&weather.wind_speed_kmh));
            assert!(Condition::RANDOM_CURRENT.contains(&weather.condition));
        }
    }

    #[test]
    fn test_forecast_has_five_bounded_days() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..SAMPLES {
            let forecast = five_day_forecast("London", &mut rng);

            assert_eq!(forecast.city, "London");
            assert_eq!(forecast.len(), 5);
            for (index, entry) in forecast.days.iter().enumerate() {
                assert_eq!(usize::from(entry.day), index + 1);
                assert!(TEMPERATURE_RANGE.contains(&entry.temperature));
                assert!(Condition::FORECAST.contains(&entry.condition));
            }
        }
    }

    #[test]
    fn test_forecast_draws_every_condition() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen: std::collections::HashSet<Condition> = (0..SAMPLES)
            .flat_map(|_| five_day_forecast("Oslo", &mut rng).days)
            .map(|entry| entry.condition)
            .collect();

        for condition in Condition::FORECAST {
            assert!(seen.contains(&condition), "{condition:?} never drawn");
        }
    }

    #[test]
    fn test_forecast_ignores_static_table() {
        // Moscow is cold in the table, but forecasts only draw from the forecast set
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..SAMPLES {
            let forecast = five_day_forecast("Moscow", &mut rng);
            assert!(forecast.days.iter().all(|d| d.condition != Condition::Cold));
        }
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let first = five_day_forecast("Paris", &mut StdRng::seed_from_u64(99));
        let second = five_day_forecast("Paris", &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
