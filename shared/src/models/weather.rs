//! Weather data models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Tip;
use crate::types::GpsCoordinates;

/// The subset of current conditions the advisory rules look at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Degrees Celsius, rounded
    pub temperature: i32,
    /// Relative humidity, 0-100
    pub humidity: i32,
    /// Free-text description, e.g. "light rain"
    pub condition: String,
    pub weather_code: i32,
}

impl WeatherObservation {
    pub fn new(weather_code: i32, temperature: i32, humidity: i32, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            humidity,
            condition: condition.into(),
            weather_code,
        }
    }
}

/// Current conditions for a location, already converted to display units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// "City, CC"
    pub location: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: String,
    pub humidity: i32,
    /// km/h
    pub wind_speed: i32,
    /// Degrees
    pub wind_direction: i32,
    /// km, one decimal digit
    pub visibility: Decimal,
    pub uv_index: i32,
    pub icon: String,
    pub weather_code: i32,
    /// hPa
    pub pressure: i32,
    /// Percent cloud cover
    pub cloudiness: i32,
    /// Unix seconds
    pub sunrise: i64,
    /// Unix seconds
    pub sunset: i64,
    pub coordinates: GpsCoordinates,
}

impl CurrentWeather {
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation {
            temperature: self.temperature,
            humidity: self.humidity,
            condition: self.condition.clone(),
            weather_code: self.weather_code,
        }
    }
}

/// Daily forecast aggregated from the provider's 3-hour feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// "Today" for the first entry, weekday name afterwards
    pub day: String,
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub icon: String,
    /// Highest precipitation probability of the day, 0-100
    pub precipitation: i32,
    pub weather_code: i32,
    pub avg_humidity: i32,
    /// km/h
    pub avg_wind_speed: i32,
}

/// Everything the weather page renders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub farming_tips: Vec<Tip>,
}
