//! Weather DTOs
//!
//! The success body is `yatra::WeatherReport` itself; only the query and
//! the error body live here.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query for `GET /api/weather`.
///
/// Both values are kept as raw strings so that absence, blanks and garbage
/// are all reported through the proxy's own error contract.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// Latitude in decimal degrees
    pub lat: Option<String>,
    /// Longitude in decimal degrees
    pub lon: Option<String>,
}

/// Error body for weather failures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
