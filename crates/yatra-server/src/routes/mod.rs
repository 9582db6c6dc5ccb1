//! Yatra API Routes
//!
//! - / - Liveness banner
//! - /health - Health check
//! - /api/weather - Current weather (OpenWeather)
//! - /api/ai - Temple guide chat (OpenAI)

pub mod ai;
pub mod swagger;
pub mod weather;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

pub const ROOT_BANNER: &str = "Yatra Backend Running";

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    weather_configured: bool,
}

async fn root() -> &'static str {
    ROOT_BANNER
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Yatra API is running - Radhe Radhe".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather_configured: state.weather.is_configured(),
    })
}

/// Full application router with shared state applied
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(weather::router())
        .merge(ai::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
