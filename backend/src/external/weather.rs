//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions, UV index and the
//! 5 day / 3 hour forecast, and shapes the responses for the advisory engine.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use reqwest::{Client, StatusCode};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::{weather_code_for_icon, CurrentWeather, ForecastDay, GpsCoordinates, Location};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Visibility assumed when the provider omits it, in metres
const DEFAULT_VISIBILITY_M: i64 = 10_000;

/// Source of current conditions and daily forecasts for a location
#[axum::async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, location: &Location) -> AppResult<CurrentWeather>;

    async fn forecast(&self, location: &Location) -> AppResult<Vec<ForecastDay>>;
}

/// OpenWeatherMap API client
#[derive(Clone)]
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: String,
    base_url: String,
    forecast_days: usize,
}

// ============================================================================
// OpenWeatherMap wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    coord: OWMCoord,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    main: OWMMain,
    visibility: Option<i64>,
    wind: OWMWind,
    #[serde(default)]
    clouds: OWMClouds,
    sys: OWMSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
    deg: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct OWMClouds {
    all: i32,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    #[serde(default)]
    country: String,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OWMUvResponse {
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    wind: OWMWind,
    pop: Option<f64>,
}

/// One 3-hour forecast entry, in provider units
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix seconds
    pub timestamp: i64,
    /// °C
    pub temperature: f64,
    pub humidity: i32,
    /// m/s
    pub wind_speed: f64,
    /// Probability of precipitation, 0-1
    pub pop: Option<f64>,
    pub description: String,
    pub icon: String,
}

impl From<OWMForecastItem> for ForecastSample {
    fn from(item: OWMForecastItem) -> Self {
        let weather = item.weather.into_iter().next();
        let (description, icon) = weather
            .map(|w| (w.description, w.icon))
            .unwrap_or_default();

        Self {
            timestamp: item.dt,
            temperature: item.main.temp,
            humidity: item.main.humidity,
            wind_speed: item.wind.speed,
            pop: item.pop,
            description,
            icon,
        }
    }
}

// ============================================================================
// Client
// ============================================================================

impl OpenWeatherMapClient {
    /// Create a client from the weather section of the configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            forecast_days: config.forecast_days,
        })
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }
        Ok(())
    }

    /// GET `{base_url}/{path}` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::LocationNotFound);
        }
        if !status.is_success() {
            return Err(AppError::WeatherApi {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch the UV index; failures are logged and reported as 0
    async fn uv_index(&self, coord: &OWMCoord) -> i32 {
        let query = [("lat", coord.lat.to_string()), ("lon", coord.lon.to_string())];

        match self.get_json::<OWMUvResponse>("uvi", &query).await {
            Ok(uv) => round_half_up(uv.value.unwrap_or(0.0)),
            Err(e) => {
                tracing::warn!("Error fetching UV index: {}", e);
                0
            }
        }
    }
}

#[axum::async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn current_weather(&self, location: &Location) -> AppResult<CurrentWeather> {
        self.ensure_configured()?;
        tracing::debug!("Fetching current weather for {}", location.query());

        let query = [("q", location.query()), ("units", "metric".to_string())];
        let data: OWMCurrentResponse = self.get_json("weather", &query).await?;
        let uv_index = self.uv_index(&data.coord).await;

        Ok(convert_current_response(data, uv_index))
    }

    async fn forecast(&self, location: &Location) -> AppResult<Vec<ForecastDay>> {
        self.ensure_configured()?;
        tracing::debug!("Fetching forecast for {}", location.query());

        let query = [("q", location.query()), ("units", "metric".to_string())];
        let data: OWMForecastResponse = self.get_json("forecast", &query).await?;

        let samples: Vec<ForecastSample> = data.list.into_iter().map(Into::into).collect();
        Ok(aggregate_daily_forecast(&samples, self.forecast_days))
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// m/s to km/h, rounded
pub fn wind_speed_kmh(speed_mps: f64) -> i32 {
    round_half_up(speed_mps * 3.6)
}

/// Metres to kilometres with one decimal digit
pub fn visibility_km(metres: i64) -> Decimal {
    Decimal::new(metres, 3).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn convert_current_response(data: OWMCurrentResponse, uv_index: i32) -> CurrentWeather {
    let weather = data.weather.into_iter().next();
    let (condition, icon) = weather
        .map(|w| (w.description, w.icon))
        .unwrap_or_default();

    CurrentWeather {
        location: format!("{}, {}", data.name, data.sys.country),
        temperature: round_half_up(data.main.temp),
        feels_like: round_half_up(data.main.feels_like),
        weather_code: weather_code_for_icon(&icon),
        condition,
        humidity: data.main.humidity,
        wind_speed: wind_speed_kmh(data.wind.speed),
        wind_direction: data.wind.deg.unwrap_or(0),
        visibility: visibility_km(data.visibility.unwrap_or(DEFAULT_VISIBILITY_M)),
        uv_index,
        icon,
        pressure: data.main.pressure,
        cloudiness: data.clouds.all,
        sunrise: data.sys.sunrise,
        sunset: data.sys.sunset,
        coordinates: GpsCoordinates::new(
            Decimal::from_f64(data.coord.lat).unwrap_or_default(),
            Decimal::from_f64(data.coord.lon).unwrap_or_default(),
        ),
    }
}

/// Fold 3-hour samples into at most `days` daily forecasts
///
/// Samples are grouped by UTC calendar date in chronological order. The
/// representative condition and icon are those of the sample in the middle
/// of each day's list.
pub fn aggregate_daily_forecast(samples: &[ForecastSample], days: usize) -> Vec<ForecastDay> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
    for sample in samples {
        match DateTime::from_timestamp(sample.timestamp, 0) {
            Some(at) => by_date.entry(at.date_naive()).or_default().push(sample),
            None => tracing::warn!("Skipping forecast entry with invalid timestamp {}", sample.timestamp),
        }
    }

    by_date
        .into_iter()
        .take(days)
        .enumerate()
        .map(|(index, (date, entries))| summarize_day(index, date, &entries))
        .collect()
}

fn summarize_day(index: usize, date: NaiveDate, entries: &[&ForecastSample]) -> ForecastDay {
    let count = entries.len() as f64;
    let high = entries.iter().map(|e| e.temperature).fold(f64::MIN, f64::max);
    let low = entries.iter().map(|e| e.temperature).fold(f64::MAX, f64::min);
    let precipitation = entries
        .iter()
        .filter_map(|e| e.pop)
        .map(|pop| round_half_up(pop * 100.0))
        .fold(0, i32::max);
    let avg_humidity = entries.iter().map(|e| e.humidity as f64).sum::<f64>() / count;
    let avg_wind = entries.iter().map(|e| e.wind_speed * 3.6).sum::<f64>() / count;

    let middle = entries[entries.len() / 2];

    ForecastDay {
        day: if index == 0 {
            "Today".to_string()
        } else {
            date.format("%A").to_string()
        },
        date,
        high: round_half_up(high),
        low: round_half_up(low),
        condition: middle.description.clone(),
        icon: middle.icon.clone(),
        precipitation,
        weather_code: weather_code_for_icon(&middle.icon),
        avg_humidity: round_half_up(avg_humidity),
        avg_wind_speed: round_half_up(avg_wind),
    }
}
