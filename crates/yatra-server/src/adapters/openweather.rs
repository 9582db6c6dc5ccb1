//! OpenWeather Implementation
//!
//! Current conditions from the OpenWeatherMap `data/2.5/weather` endpoint,
//! mapped into a [`WeatherReport`] at the boundary.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use yatra::{Location, UpstreamError, WeatherProvider, WeatherReport};

use super::without_url;
use crate::config::DEFAULT_OPENWEATHER_BASE_URL;

const FALLBACK_LOCATION_NAME: &str = "Nearby";

/// HTTP implementation of WeatherProvider
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (self-hosted mirror, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_weather(&self, location: &Location) -> Result<WeatherReport, UpstreamError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        tracing::debug!("OpenWeather request for {}", location);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(without_url(e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let payload: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(without_url(e)))?;

        Ok(payload.into())
    }

    fn provider_name(&self) -> &str {
        "openweathermap"
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    name: Option<String>,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: Option<f64>,
}

impl From<CurrentWeatherResponse> for WeatherReport {
    fn from(res: CurrentWeatherResponse) -> Self {
        let location_name = res
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_LOCATION_NAME.to_string());

        let condition_text = res
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .unwrap_or_default();

        let humidity_pct = res
            .main
            .humidity
            .map(|h| h.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(0);

        let wind_speed_mps = res.wind.and_then(|w| w.speed).unwrap_or(0.0);

        WeatherReport {
            location_name,
            temperature_c: res.main.temp,
            humidity_pct,
            condition_text,
            wind_speed_mps,
        }
    }
}
