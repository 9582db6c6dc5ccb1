//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use yatra::WeatherReport;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::weather::get_weather,
        super::ai::chat,
    ),
    info(
        title = "Yatra API",
        version = "0.1.0",
        description = "Temple guide backend for Mathura and Vrindavan. \
                       Proxies weather and chat calls so provider keys stay on the server.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Weather", description = "Weather - Current conditions at a coordinate pair"),
        (name = "AI", description = "AI - Temple guide chat"),
    ),
    components(
        schemas(
            WeatherReport,
            ErrorResponse,
            ChatRequest,
            ChatResponse,
        )
    ),
)]
pub struct ApiDoc;
