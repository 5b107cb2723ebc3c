//! HTTP handlers for weather and farming advice endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    generate_farming_tips, validate_location, validate_observation, weather_code_for_icon,
    ForecastDay, Location, Tip, WeatherObservation, WeatherReport,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for a farming tips calculation
#[derive(Debug, Deserialize)]
pub struct TipsRequest {
    pub observation: WeatherObservation,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    /// Reference date for seasonal advice; defaults to today (UTC)
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCodeResponse {
    pub icon: String,
    pub weather_code: i32,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))
}

/// Get current weather, forecast and farming tips for a location
pub async fn get_weather_report(
    State(state): State<AppState>,
    payload: Result<Json<Location>, JsonRejection>,
) -> AppResult<Json<WeatherReport>> {
    let location = body(payload)?;
    validate_location(&location).map_err(|(field, message)| AppError::validation(field, message))?;

    let report = state
        .weather
        .get_weather_report(&location, Utc::now().date_naive())
        .await?;
    Ok(Json(report))
}

/// Run the advisory engine over caller-supplied conditions
pub async fn generate_tips(
    payload: Result<Json<TipsRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Tip>>> {
    let request = body(payload)?;
    validate_observation(&request.observation)
        .map_err(|(field, message)| AppError::validation(field, message))?;

    let today = request.date.unwrap_or_else(|| Utc::now().date_naive());
    let tips = generate_farming_tips(&request.observation, &request.forecast, today);
    Ok(Json(tips))
}

/// Look up the numeric weather code for a provider icon
pub async fn get_weather_code(Path(icon): Path<String>) -> Json<WeatherCodeResponse> {
    let weather_code = weather_code_for_icon(&icon);
    Json(WeatherCodeResponse { icon, weather_code })
}
