//! External API integrations

pub mod weather;

pub use weather::{OpenWeatherMapClient, WeatherProvider};
