//! Weather Routes - Current conditions via OpenWeather

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use yatra::{ProxyError, WeatherReport};

use crate::models::{ErrorResponse, WeatherQuery};
use crate::AppState;

/// Message for a query string that cannot be read at all (duplicate keys, bad encoding)
pub const MALFORMED_QUERY_MESSAGE: &str = "Invalid lat/lon";

fn weather_error(err: ProxyError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse { error: err.message }))
}

/// Current weather for a coordinate pair
#[utoipa::path(
    get,
    path = "/api/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Current weather", body = WeatherReport),
        (status = 400, description = "Missing or invalid lat/lon", body = ErrorResponse),
        (status = 502, description = "Weather provider failed", body = ErrorResponse),
        (status = 503, description = "Weather API key not configured", body = ErrorResponse)
    ),
    tag = "Weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<ErrorResponse>)> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Unreadable weather query: {}", rejection.body_text());
        weather_error(ProxyError::missing_params(MALFORMED_QUERY_MESSAGE))
    })?;

    let report = state
        .weather
        .current(query.lat.as_deref(), query.lon.as_deref())
        .await
        .map_err(weather_error)?;

    Ok(Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/weather", get(get_weather))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use yatra::{UpstreamError, WeatherProvider};

    use crate::application::fakes::{
        live_chat, live_weather as live, no_weather, FakeLlm, FakeWeather,
    };
    use crate::application::WeatherService;
    use crate::routes::app;
    use crate::AppState;

    fn state_with(weather: WeatherService) -> AppState {
        AppState {
            weather: Arc::new(weather),
            chat: Arc::new(live_chat(Arc::new(FakeLlm::replying("unused")))),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_weather_ok_camel_case() {
        let (status, body) = get(
            state_with(live(FakeWeather::ok())),
            "/api/weather?lat=27.58&lon=77.69",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locationName"], "Vrindavan");
        assert_eq!(body["temperatureC"], 33.1);
        assert_eq!(body["humidityPct"], 36);
        assert_eq!(body["conditionText"], "haze");
        assert_eq!(body["windSpeedMps"], 1.9);
    }

    #[tokio::test]
    async fn test_weather_missing_lon_is_400() {
        let state = state_with(live(FakeWeather::ok()));
        let (status, body) = get(state, "/api/weather?lat=27.58").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Missing lat/lon" }));
    }

    #[tokio::test]
    async fn test_weather_blank_values_are_400() {
        let state = state_with(live(FakeWeather::ok()));
        let (status, _) = get(state, "/api/weather?lat=&lon=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_weather_duplicate_param_is_json_400() {
        let fake = Arc::new(FakeWeather::ok());
        let provider: Arc<dyn WeatherProvider> = fake.clone();
        let state = state_with(WeatherService::new(provider));

        let (status, body) = get(state, "/api/weather?lat=1&lat=2&lon=3").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid lat/lon" }));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_weather_bad_percent_encoding_is_json_400() {
        let state = state_with(live(FakeWeather::ok()));
        let (status, body) = get(state, "/api/weather?lat=%ZZ&lon=77.69").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_weather_without_key_is_503() {
        let (status, body) = get(
            state_with(no_weather()),
            "/api/weather?lat=27.58&lon=77.69",
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Server missing OpenWeather API key");
    }

    #[tokio::test]
    async fn test_weather_upstream_failure_is_502() {
        let fake = FakeWeather::failing(UpstreamError::Transport("connection refused".to_string()));
        let state = state_with(live(fake));
        let (status, body) = get(state, "/api/weather?lat=27.58&lon=77.69").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, serde_json::json!({ "error": "Failed to fetch weather" }));
    }
}
