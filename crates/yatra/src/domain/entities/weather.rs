//! WeatherReport Entity
//!
//! Current conditions at a location, in the shape every consumer sees
//! regardless of whether it came from a provider or from demo mode.

use serde::{Deserialize, Serialize};

/// Current weather at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Display name of the place the provider resolved the coordinates to
    pub location_name: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity (0-100)
    pub humidity_pct: u8,
    /// Human-readable description of conditions
    pub condition_text: String,
    /// Wind speed in m/s
    pub wind_speed_mps: f64,
}

impl WeatherReport {
    pub fn new(
        location_name: impl Into<String>,
        temperature_c: f64,
        humidity_pct: u8,
        condition_text: impl Into<String>,
        wind_speed_mps: f64,
    ) -> Self {
        Self {
            location_name: location_name.into(),
            temperature_c,
            humidity_pct,
            condition_text: condition_text.into(),
            wind_speed_mps,
        }
    }

    /// Temperature rounded to whole degrees
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature_c.round())
    }

    /// One-line summary, e.g. `Temp: 29°C - Sunny | Humidity: 45% | Wind: 3.5 m/s`
    pub fn summary(&self) -> String {
        let mut line = format!("Temp: {}", self.format_temperature());
        if !self.condition_text.is_empty() {
            line.push_str(&format!(" - {}", self.condition_text));
        }
        line.push_str(&format!(
            " | Humidity: {}% | Wind: {:.1} m/s",
            self.humidity_pct, self.wind_speed_mps
        ));
        line
    }
}
