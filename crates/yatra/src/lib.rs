//! Yatra Domain Library
//!
//! Core types and interfaces for the Yatra temple guide: a small proxy that
//! shields provider credentials, and clients that degrade to a demo mode when
//! the proxy is unavailable.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure values and logic
//!   - `entities/`: Location, WeatherReport, ChatExchange
//!   - `value_objects/`: ProxyErrorKind
//!   - `errors/`: DomainError, UpstreamError, ProxyError
//!   - `services/`: demo-mode generators and the `Degrade` fallback combinator
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: WeatherProvider, LlmProvider
//!
//! # Usage
//!
//! ```rust,ignore
//! use yatra::{demo_weather_now, Degrade, Location};
//!
//! let report = proxy.weather(&location).await.or_mock(demo_weather_now);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    demo_reply, demo_weather, demo_weather_now, ChatExchange, Degrade, DomainError, Location,
    ProxyError, ProxyErrorKind, UpstreamError, WeatherReport, DEMO_CONDITION, DEMO_LOCATION_NAME,
    DEMO_PERSONA,
};
pub use ports::{ChatMessage, CompletionResponse, LlmProvider, MessageRole, WeatherProvider};
