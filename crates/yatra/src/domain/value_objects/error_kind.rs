//! ProxyErrorKind - Classification of proxy failures

use serde::{Deserialize, Serialize};

/// Fixed taxonomy of failures the proxy reports to its callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProxyErrorKind {
    /// Latitude or longitude absent (or unusable)
    MissingParams,
    /// An upstream provider could not be reached or answered with a failure
    UpstreamUnavailable,
    /// The proxy gave up on an upstream provider for this request
    UpstreamRejected,
    /// A required provider credential is not configured
    MisconfiguredServer,
    /// Generic server error
    Internal,
}

impl ProxyErrorKind {
    /// HTTP status equivalent for this kind
    pub fn status_code(self) -> u16 {
        match self {
            ProxyErrorKind::MissingParams => 400,
            ProxyErrorKind::UpstreamUnavailable | ProxyErrorKind::UpstreamRejected => 502,
            ProxyErrorKind::MisconfiguredServer => 503,
            ProxyErrorKind::Internal => 500,
        }
    }
}

impl std::fmt::Display for ProxyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProxyErrorKind::MissingParams => write!(f, "missing_params"),
            ProxyErrorKind::UpstreamUnavailable => write!(f, "upstream_unavailable"),
            ProxyErrorKind::UpstreamRejected => write!(f, "upstream_rejected"),
            ProxyErrorKind::MisconfiguredServer => write!(f, "misconfigured_server"),
            ProxyErrorKind::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProxyErrorKind::MissingParams.status_code(), 400);
        assert_eq!(ProxyErrorKind::UpstreamRejected.status_code(), 502);
        assert_eq!(ProxyErrorKind::MisconfiguredServer.status_code(), 503);
        assert_eq!(ProxyErrorKind::Internal.status_code(), 500);
    }

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(ProxyErrorKind::MisconfiguredServer.to_string(), "misconfigured_server");
    }
}
