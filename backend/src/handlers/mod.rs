//! HTTP handlers for the Farm Weather Advisory Platform

pub mod health;
pub mod weather;

pub use health::health_check;
pub use weather::{generate_tips, get_weather_code, get_weather_report};
