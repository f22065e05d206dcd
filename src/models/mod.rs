//! Data models for the weather agent
//!
//! This module contains the core domain models organized by concern:
//! - Weather: conditions, static city records and current reports
//! - Forecast: simulated multi-day forecasts
//! - Chat: messages and requests for the inference endpoints

pub mod chat;
pub mod forecast;
pub mod weather;

// Re-export all public types for convenient access
pub use chat::{ChatMessage, CompletionRequest, Role};
pub use forecast::{Forecast, ForecastEntry};
pub use weather::{Condition, CurrentWeather, WeatherRecord};
