//! Route definitions for the Farm Weather Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
}

/// Weather and farming advice routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::get_weather_report))
        .route("/tips", post(handlers::generate_tips))
        .route("/codes/:icon", get(handlers::get_weather_code))
}
