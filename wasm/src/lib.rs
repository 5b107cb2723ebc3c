//! WebAssembly module for the Farm Weather Advisory Platform
//!
//! Lets the browser compute farming tips offline from weather data it
//! already holds, using the same rules as the server.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Reference date for the given zero-based month
fn reference_date(month0: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(2000, month0 + 1, 1)
        .ok_or_else(|| format!("Invalid month index: {} (expected 0-11)", month0))
}

fn tips_json(observation_json: &str, forecast_json: &str, month0: u32) -> Result<String, String> {
    let observation: WeatherObservation = serde_json::from_str(observation_json)
        .map_err(|e| format!("Invalid observation JSON: {}", e))?;

    // An empty string means no forecast is available
    let forecast: Vec<ForecastDay> = if forecast_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(forecast_json).map_err(|e| format!("Invalid forecast JSON: {}", e))?
    };

    let tips = shared::generate_farming_tips(&observation, &forecast, reference_date(month0)?);
    serde_json::to_string(&tips).map_err(|e| format!("Failed to serialize tips: {}", e))
}

/// Generate farming tips as a JSON array
///
/// `month0` is the zero-based month used for seasonal advice, as returned by
/// `Date.prototype.getMonth()`.
#[wasm_bindgen]
pub fn generate_farming_tips_json(
    observation_json: &str,
    forecast_json: &str,
    month0: u32,
) -> Result<String, JsValue> {
    tips_json(observation_json, forecast_json, month0).map_err(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&e));
        JsValue::from_str(&e)
    })
}

/// Generate farming tips for the browser's current month
#[wasm_bindgen]
pub fn generate_farming_tips_now(observation_json: &str, forecast_json: &str) -> Result<String, JsValue> {
    let month0 = js_sys::Date::new_0().get_month();
    generate_farming_tips_json(observation_json, forecast_json, month0)
}

/// Map an OpenWeatherMap icon code to its numeric weather code
#[wasm_bindgen]
pub fn weather_code_for_icon_code(icon: &str) -> i32 {
    weather_code_for_icon(icon)
}

/// Check a profile location before sending it to the server
///
/// Returns the problem as text, or `None` when the location is usable.
#[wasm_bindgen]
pub fn check_location(city: &str, country: &str) -> Option<String> {
    let location = shared::Location::new(city, country);
    validate_location(&location)
        .err()
        .map(|(_, message)| message.to_string())
}
