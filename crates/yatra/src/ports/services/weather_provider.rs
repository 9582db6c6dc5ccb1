//! Weather Provider Port
//!
//! Abstract interface for current-conditions lookups.

use async_trait::async_trait;

use crate::domain::entities::{Location, WeatherReport};
use crate::domain::errors::UpstreamError;

/// Weather provider interface
///
/// Implementations issue exactly one outbound request per call, without
/// retries or caching, and report any failure as an [`UpstreamError`].
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions at a location
    async fn fetch_weather(&self, location: &Location) -> Result<WeatherReport, UpstreamError>;

    /// Get the provider name (e.g., "openweathermap")
    fn provider_name(&self) -> &str;
}
