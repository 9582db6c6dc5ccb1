//! Yatra Proxy Client
//!
//! Talks only to the Yatra backend; provider keys never reach this side.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use yatra::{Location, WeatherReport};

/// Shown when the backend answers with an empty reply
pub const NO_REPLY: &str = "Sorry, no reply.";

/// API Client for the Yatra backend
pub struct YatraClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl YatraClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Yatra backend")?;
        Ok(resp.status().is_success())
    }

    /// Current weather at a location
    pub async fn weather(&self, location: &Location) -> Result<WeatherReport> {
        let url = format!("{}/api/weather", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
            ])
            .send()
            .await
            .context("Failed to connect to Yatra backend")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        let report: WeatherReport = resp.json().await.context("Failed to parse response")?;

        Ok(report)
    }

    /// Ask the guide; an empty reply is replaced with [`NO_REPLY`]
    pub async fn chat(&self, message: &str) -> Result<String> {
        let url = format!("{}/api/ai", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .context("Failed to connect to Yatra backend")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ChatResponse>(&body)
                .ok()
                .and_then(|r| r.reply)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        let chat: ChatResponse = resp.json().await.context("Failed to parse response")?;

        Ok(chat
            .reply
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| NO_REPLY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prem_mandir() -> Location {
        Location::new(27.5712, 77.6727).unwrap()
    }

    #[tokio::test]
    async fn test_weather_parses_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/weather"))
            .and(query_param("lat", "27.5712"))
            .and(query_param("lon", "77.6727"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "locationName": "Vrindavan",
                "temperatureC": 33.1,
                "humidityPct": 36,
                "conditionText": "haze",
                "windSpeedMps": 1.9
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YatraClient::new(&server.uri());
        let report = client.weather(&prem_mandir()).await.unwrap();

        assert_eq!(report.location_name, "Vrindavan");
        assert_eq!(report.humidity_pct, 36);
    }

    #[tokio::test]
    async fn test_weather_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(
                    serde_json::json!({ "error": "Server missing OpenWeather API key" }),
                ),
            )
            .mount(&server)
            .await;

        let client = YatraClient::new(&server.uri());
        let err = client.weather(&prem_mandir()).await.unwrap_err();

        assert!(err.to_string().contains("Server missing OpenWeather API key"));
    }

    #[tokio::test]
    async fn test_chat_sends_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/ai"))
            .and(body_json(serde_json::json!({ "message": "Where is Nidhivan?" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "reply": "Near Banke Bihari." })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = YatraClient::new(&server.uri());
        assert_eq!(
            client.chat("Where is Nidhivan?").await.unwrap(),
            "Near Banke Bihari."
        );
    }

    #[tokio::test]
    async fn test_chat_empty_reply_placeholder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "reply": "" })),
            )
            .mount(&server)
            .await;

        let client = YatraClient::new(&server.uri());
        assert_eq!(client.chat("Hi").await.unwrap(), NO_REPLY);
    }

    #[tokio::test]
    async fn test_chat_server_error_is_err() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(
                    serde_json::json!({ "reply": "Server error. Check backend logs." }),
                ),
            )
            .mount(&server)
            .await;

        let client = YatraClient::new(&server.uri());
        let err = client.chat("Hi").await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_health_unreachable_is_err() {
        let client = YatraClient::new("http://127.0.0.1:1");
        let err = client.health().await.unwrap_err();
        assert!(err.to_string().contains("Failed to connect to Yatra backend"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })),
            )
            .mount(&server)
            .await;

        let client = YatraClient::new(&format!("{}/", server.uri()));
        assert!(client.health().await.unwrap());
    }
}
