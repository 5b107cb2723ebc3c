//! Farm Weather Advisory Platform - Backend Server
//!
//! Serves current conditions, a 5-day forecast and prioritized farming
//! advice for a farm's location.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::OpenWeatherMapClient;
use services::WeatherService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_weather_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Farm Weather Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    if !config.weather.is_configured() {
        tracing::warn!("Weather API key not configured; weather reports will fail until FARM_WEATHER__API_KEY is set");
    }

    let client = OpenWeatherMapClient::new(&config.weather)?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        weather: WeatherService::new(Arc::new(client)),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new().gzip(true))
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Weather Advisory Platform API v1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use crate::config::{ServerConfig, WeatherConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(weather: WeatherConfig) -> Router {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            weather,
        };
        let client = OpenWeatherMapClient::new(&config.weather).unwrap();

        create_app(AppState {
            config: Arc::new(config),
            weather: WeatherService::new(Arc::new(client)),
        })
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let (status, text) = send_to(app_with(WeatherConfig::default()), request).await;
        (status, serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["weather_api"], "not_configured");
    }

    #[tokio::test]
    async fn test_report_rejects_blank_city() {
        let (status, body) = send(post_json("/api/v1/weather", json!({"city": "  "}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "city");
    }

    #[tokio::test]
    async fn test_report_without_api_key() {
        let (status, body) = send(post_json("/api/v1/weather", json!({"city": "Nakuru", "country": "KE"}))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["message"], "Weather API key not configured");
    }

    #[tokio::test]
    async fn test_unreachable_provider_does_not_expose_api_key() {
        let app = app_with(WeatherConfig {
            api_endpoint: "http://127.0.0.1:1/data/2.5".to_string(),
            api_key: "SUPERSECRETKEY".to_string(),
            ..WeatherConfig::default()
        });

        let (status, text) = send_to(app, post_json("/api/v1/weather", json!({"city": "Nakuru"}))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!text.contains("SUPERSECRETKEY"), "response body: {}", text);
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
    }

    #[tokio::test]
    async fn test_tips_endpoint() {
        let request = post_json(
            "/api/v1/weather/tips",
            json!({
                "observation": {"weatherCode": 211, "temperature": 24, "humidity": 60, "condition": "thunderstorm"},
                "date": "2024-06-15"
            }),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let tips = body.as_array().unwrap();
        assert!(!tips.is_empty() && tips.len() <= 8);
        assert_eq!(tips[0]["title"], "⛈️ Severe Storm Emergency Response");
        assert_eq!(tips[0]["type"], "warning");
    }

    #[tokio::test]
    async fn test_tips_endpoint_rejects_bad_humidity() {
        let request = post_json(
            "/api/v1/weather/tips",
            json!({"observation": {"weatherCode": 800, "temperature": 20, "humidity": 140, "condition": ""}}),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "humidity");
    }

    #[tokio::test]
    async fn test_tips_endpoint_rejects_malformed_body() {
        let (status, body) = send(post_json("/api/v1/weather/tips", json!({"forecast": []}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_weather_code_lookup() {
        let request = Request::builder()
            .uri("/api/v1/weather/codes/11n")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"icon": "11n", "weatherCode": 211}));
    }
}
