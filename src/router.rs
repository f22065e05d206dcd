//! Query routing: keyword intent classification and city resolution
//!
//! Both checks are literal lowercase substring scans over fixed, ordered
//! lists. The first city in list order wins, regardless of where it appears
//! in the query.

use crate::weather::KNOWN_WEATHER;

/// Substrings that mark a query as weather-related
pub const WEATHER_KEYWORDS: [&str; 3] = ["weather", "temperature", "forecast"];

const FORECAST_KEYWORD: &str = "forecast";

/// Recognized cities without a static weather record
pub const EXTRA_CITIES: [&str; 4] = ["San Francisco", "Los Angeles", "Chicago", "Miami"];

/// City used when the query names none
pub const DEFAULT_CITY: &str = "New York";

/// What the agent should do with a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Report current conditions for a city
    CurrentWeather { city: &'static str },
    /// Report a five-day forecast for a city
    Forecast { city: &'static str },
    /// Not weather-related; hand the query to the language model
    General,
}

impl Intent {
    /// Classify a free-text query
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let lowered = query.to_lowercase();

        if !contains_weather_keyword(&lowered) {
            return Intent::General;
        }

        let city = resolve_city_lowered(&lowered);
        if lowered.contains(FORECAST_KEYWORD) {
            Intent::Forecast { city }
        } else {
            Intent::CurrentWeather { city }
        }
    }

    #[must_use]
    pub fn is_weather(&self) -> bool {
        !matches!(self, Intent::General)
    }
}

/// Every recognized city in match order: table cities first, then extras
pub fn known_cities() -> impl Iterator<Item = &'static str> {
    KNOWN_WEATHER
        .iter()
        .map(|record| record.city)
        .chain(EXTRA_CITIES)
}

/// True if the query mentions any weather keyword, case-insensitively
#[must_use]
pub fn is_weather_query(query: &str) -> bool {
    contains_weather_keyword(&query.to_lowercase())
}

/// First known city named in the query, or [`DEFAULT_CITY`]
#[must_use]
pub fn resolve_city(query: &str) -> &'static str {
    resolve_city_lowered(&query.to_lowercase())
}

fn contains_weather_keyword(lowered: &str) -> bool {
    WEATHER_KEYWORDS.iter().any(|word| lowered.contains(word))
}

fn resolve_city_lowered(lowered: &str) -> &'static str {
    known_cities()
        .find(|city| lowered.contains(&city.to_lowercase()))
        .unwrap_or(DEFAULT_CITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("What's the weather like in New York?", true)]
    #[case("WEATHER please", true)]
    #[case("What's the Temperature in Paris?", true)]
    #[case("Give me the forecast for Los Angeles", true)]
    #[case("what's the temperature of the sun?", true)]
    #[case("Hello! How are you?", false)]
    #[case("is it sunny in Tokyo?", false)]
    fn test_weather_classification(#[case] query: &str, #[case] expected: bool) {
        assert_eq!(is_weather_query(query), expected);
    }

    #[rstest]
    #[case("How's the weather in Tokyo?", "Tokyo")]
    #[case("weather in CHICAGO", "Chicago")]
    #[case("What's the weather in San Francisco?", "San Francisco")]
    #[case("weather in Reykjavik", "New York")]
    #[case("weather", "New York")]
    fn test_city_resolution(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(resolve_city(query), expected);
    }

    #[test]
    fn test_city_tie_break_follows_list_order() {
        assert_eq!(resolve_city("weather in London or New York"), "New York");
        assert_eq!(resolve_city("weather in New York or London"), "New York");
        // table cities are scanned before the extras
        assert_eq!(resolve_city("Miami vs Moscow weather"), "Moscow");
    }

    #[test]
    fn test_city_match_is_substring() {
        // "parish" contains "paris"
        assert_eq!(resolve_city("weather in my parish"), "Paris");
    }

    #[test]
    fn test_known_cities_order() {
        let cities: Vec<_> = known_cities().collect();
        assert_eq!(cities.len(), 12);
        assert_eq!(cities[0], "New York");
        assert_eq!(cities[7], "Moscow");
        assert_eq!(cities[8], "San Francisco");
        assert_eq!(cities[11], "Miami");
    }

    #[rstest]
    #[case("Tell me the forecast for London", Intent::Forecast { city: "London" })]
    #[case("FORECAST", Intent::Forecast { city: "New York" })]
    #[case("What's the temperature in Paris?", Intent::CurrentWeather { city: "Paris" })]
    #[case("Hello! How are you?", Intent::General)]
    #[case("Tell me about London", Intent::General)]
    fn test_intent_classification(#[case] query: &str, #[case] expected: Intent) {
        let intent = Intent::classify(query);
        assert_eq!(intent, expected);
        assert_eq!(intent.is_weather(), expected != Intent::General);
    }
}
