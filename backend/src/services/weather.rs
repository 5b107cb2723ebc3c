//! Weather service combining provider data with farming advice

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{generate_farming_tips, Location, WeatherReport};

use crate::error::AppResult;
use crate::external::WeatherProvider;

/// Weather service building reports for a farm location
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Fetch current conditions and forecast, then derive farming tips
    ///
    /// Both upstream requests run concurrently. When both fail, the
    /// current-conditions error is the one reported.
    pub async fn get_weather_report(&self, location: &Location, today: NaiveDate) -> AppResult<WeatherReport> {
        let (current, forecast) = tokio::join!(
            self.provider.current_weather(location),
            self.provider.forecast(location),
        );

        let current = current?;
        let forecast = forecast?;

        let farming_tips = generate_farming_tips(&current.observation(), &forecast, today);

        tracing::info!(
            location = %current.location,
            forecast_days = forecast.len(),
            tips = farming_tips.len(),
            "Built weather report"
        );

        Ok(WeatherReport {
            current,
            forecast,
            farming_tips,
        })
    }
}
