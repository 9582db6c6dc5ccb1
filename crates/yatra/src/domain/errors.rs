//! Domain Errors
//!
//! Error types for domain operations, upstream calls and the proxy contract.

use thiserror::Error;

use super::value_objects::ProxyErrorKind;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Failure of a single outbound call to a third-party provider.
///
/// Every variant is reported to proxy callers as [`ProxyErrorKind::UpstreamUnavailable`];
/// the variants only exist so the server can log what actually happened.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode provider response: {0}")]
    Decode(String),

    #[error("No credential configured for {0}")]
    MissingCredential(&'static str),
}

impl UpstreamError {
    pub fn kind(&self) -> ProxyErrorKind {
        ProxyErrorKind::UpstreamUnavailable
    }
}

/// Error returned across the proxy boundary: a kind plus a short,
/// human-readable message that is safe to show to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProxyError {
    pub kind: ProxyErrorKind,
    pub message: String,
}

impl ProxyError {
    pub fn new(kind: ProxyErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_params(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorKind::MissingParams, message)
    }

    pub fn upstream_rejected(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorKind::UpstreamRejected, message)
    }

    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorKind::MisconfiguredServer, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ProxyErrorKind::Internal, message)
    }

    /// HTTP status equivalent
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}
