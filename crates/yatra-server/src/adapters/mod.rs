//! Infrastructure Adapters
//!
//! Implementations of domain ports for third-party providers.

pub mod openai;
pub mod openweather;

// Re-exports
pub use openai::OpenAiChatClient;
pub use openweather::OpenWeatherClient;

/// Error text with the request URL stripped. Query strings can carry API keys.
fn without_url(err: reqwest::Error) -> String {
    err.without_url().to_string()
}
