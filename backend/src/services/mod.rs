//! Business logic services for the Farm Weather Advisory Platform

pub mod weather;

pub use weather::WeatherService;
