//! Weather Application Service (Use Case)
//!
//! Validates the query, delegates to the configured provider, and reduces any
//! provider failure to the short public message.

use std::sync::Arc;

use yatra::{Location, ProxyError, WeatherProvider, WeatherReport};

pub const MISSING_KEY_MESSAGE: &str = "Server missing OpenWeather API key";
pub const UPSTREAM_FAILED_MESSAGE: &str = "Failed to fetch weather";

/// Application service for current-weather lookups
pub struct WeatherService<P: WeatherProvider + ?Sized = dyn WeatherProvider> {
    provider: Option<Arc<P>>,
}

impl<P: WeatherProvider + ?Sized> WeatherService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A service with no credential; every well-formed request is answered 503
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Current weather for raw `lat`/`lon` query values
    pub async fn current(
        &self,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> Result<WeatherReport, ProxyError> {
        let location = Location::parse(lat, lon)?;

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| ProxyError::misconfigured(MISSING_KEY_MESSAGE))?;

        match provider.fetch_weather(&location).await {
            Ok(report) => {
                tracing::info!(
                    "🌤️  Weather for {} -> {} ({:.1}°C)",
                    location,
                    report.location_name,
                    report.temperature_c
                );
                Ok(report)
            }
            Err(e) => {
                tracing::error!(
                    provider = provider.provider_name(),
                    kind = %e.kind(),
                    "Weather error for {}: {}",
                    location,
                    e
                );
                Err(ProxyError::upstream_rejected(UPSTREAM_FAILED_MESSAGE))
            }
        }
    }
}
