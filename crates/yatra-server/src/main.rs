use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{OpenAiChatClient, OpenWeatherClient};
use application::{ChatService, WeatherService};
use config::ServerConfig;
use yatra::{LlmProvider, WeatherProvider};

const DEFAULT_LOG_FILTER: &str = "info,yatra_server=debug,tower_http=debug";

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService>,
    pub chat: Arc<ChatService>,
}

impl AppState {
    /// Wire providers from configuration. Missing keys degrade, never abort.
    pub fn from_config(config: &ServerConfig) -> Self {
        let weather = match &config.openweather_api_key {
            Some(key) => {
                let provider: Arc<dyn WeatherProvider> = Arc::new(
                    OpenWeatherClient::new(key.clone())
                        .with_base_url(&config.openweather_base_url),
                );
                tracing::info!("🌤️  Weather provider initialized (OpenWeather)");
                WeatherService::new(provider)
            }
            None => {
                tracing::warn!("⚠️  No OPENWEATHER_API_KEY set - /api/weather will answer 503");
                WeatherService::unconfigured()
            }
        };

        let openai = OpenAiChatClient::new(config.openai_api_key.clone())
            .with_base_url(&config.openai_base_url)
            .with_model(&config.openai_model);

        if openai.has_credential() {
            tracing::info!("💬 Guide chat initialized (OpenAI, {})", openai.model_id());
        } else {
            tracing::warn!(
                "⚠️  No OPENAI_API_KEY set - /api/ai will answer with a server error"
            );
        }

        let chat_provider: Arc<dyn LlmProvider> = Arc::new(openai);

        Self {
            weather: Arc::new(weather),
            chat: Arc::new(ChatService::new(chat_provider)),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("🛑 Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("🛕 Yatra API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let state = AppState::from_config(&config);
    let router = routes::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);
    tracing::info!("✅ Yatra backend running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
