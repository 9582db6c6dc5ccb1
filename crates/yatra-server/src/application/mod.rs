//! Application Layer (Use Cases)
//!
//! Coordinates between the proxy routes and the upstream providers, and
//! owns the mapping from provider failures to the public error contract.

mod chat_service;
mod weather_service;

pub use chat_service::*;
pub use weather_service::*;

#[cfg(test)]
pub(crate) mod fakes {
    //! In-memory providers for service and route tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use yatra::{
        ChatMessage, CompletionResponse, LlmProvider, Location, UpstreamError, WeatherProvider,
        WeatherReport,
    };

    use super::{ChatService, WeatherService};

    /// Weather service over a fake, typed the way `AppState` holds it
    pub fn live_weather(fake: FakeWeather) -> WeatherService {
        let provider: Arc<dyn WeatherProvider> = Arc::new(fake);
        WeatherService::new(provider)
    }

    pub fn no_weather() -> WeatherService {
        WeatherService::unconfigured()
    }

    pub fn live_chat(fake: Arc<FakeLlm>) -> ChatService {
        let provider: Arc<dyn LlmProvider> = fake;
        ChatService::new(provider)
    }

    pub struct FakeWeather {
        result: Result<WeatherReport, UpstreamError>,
        calls: AtomicUsize,
    }

    impl FakeWeather {
        pub fn report() -> WeatherReport {
            WeatherReport::new("Vrindavan", 33.1, 36, "haze", 1.9)
        }

        pub fn ok() -> Self {
            Self {
                result: Ok(Self::report()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(err: UpstreamError) -> Self {
            Self {
                result: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeWeather {
        async fn fetch_weather(
            &self,
            _location: &Location,
        ) -> Result<WeatherReport, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        fn provider_name(&self) -> &str {
            "fake"
        }
    }

    pub struct FakeLlm {
        result: Result<String, UpstreamError>,
        last: Mutex<Vec<ChatMessage>>,
    }

    impl FakeLlm {
        pub fn replying(reply: &str) -> Self {
            Self {
                result: Ok(reply.to_string()),
                last: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(err: UpstreamError) -> Self {
            Self {
                result: Err(err),
                last: Mutex::new(Vec::new()),
            }
        }

        pub fn last_messages(&self) -> Vec<ChatMessage> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for FakeLlm {
        async fn complete(
            &self,
            messages: &[ChatMessage],
        ) -> Result<CompletionResponse, UpstreamError> {
            *self.last.lock().unwrap() = messages.to_vec();
            self.result.clone().map(|content| CompletionResponse {
                content,
                model: "fake-model".to_string(),
                total_tokens: 17,
            })
        }

        fn provider_name(&self) -> &str {
            "fake"
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }
}
