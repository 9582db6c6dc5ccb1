//! Location Entity
//!
//! A validated latitude/longitude pair.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, ProxyError};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a location, rejecting non-finite or out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::Validation(format!(
                "latitude must be within [-90, 90] (got {latitude})"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::Validation(format!(
                "longitude must be within [-180, 180] (got {longitude})"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse raw query values.
    ///
    /// Absent or blank values yield `MissingParams`. Values that are present but
    /// unusable (not a number, out of range) are reported the same way, since the
    /// proxy has no other kind for bad input.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, ProxyError> {
        let (lat, lon) = match (non_blank(lat), non_blank(lon)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(ProxyError::missing_params("Missing lat/lon")),
        };

        let invalid = || ProxyError::missing_params("Invalid lat/lon");
        let latitude: f64 = lat.parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.parse().map_err(|_| invalid())?;

        Self::new(latitude, longitude).map_err(|_| invalid())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProxyErrorKind;

    #[test]
    fn test_valid_location() {
        let loc = Location::new(27.5046, 77.6697).unwrap();
        assert_eq!(loc.latitude, 27.5046);
        assert_eq!(loc.longitude, 77.6697);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Location::new(91.0, 0.0).is_err());
        assert!(Location::new(0.0, -180.5).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
        assert!(Location::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Location::new(-90.0, 180.0).is_ok());
        assert!(Location::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn test_parse_missing_lon() {
        let err = Location::parse(Some("27.5"), None).unwrap_err();
        assert_eq!(err.kind, ProxyErrorKind::MissingParams);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message, "Missing lat/lon");
    }

    #[test]
    fn test_parse_blank_counts_as_missing() {
        let err = Location::parse(Some(""), Some("77.6")).unwrap_err();
        assert_eq!(err.message, "Missing lat/lon");
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        let err = Location::parse(Some("north"), Some("77.6")).unwrap_err();
        assert_eq!(err.kind, ProxyErrorKind::MissingParams);
        assert_eq!(err.message, "Invalid lat/lon");

        let err = Location::parse(Some("120"), Some("77.6")).unwrap_err();
        assert_eq!(err.message, "Invalid lat/lon");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let loc = Location::parse(Some(" 27.58 "), Some("77.69")).unwrap();
        assert_eq!(loc.latitude, 27.58);
    }
}
