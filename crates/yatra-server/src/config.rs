//! Server Configuration
//!
//! Read once at process start from the environment (a `.env` file is loaded
//! first if present). Provider credentials never leave this process.

use anyhow::{bail, Context, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Proxy server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Weather provider credential; without it `/api/weather` answers 503
    pub openweather_api_key: Option<String>,
    pub openweather_base_url: String,
    /// Language-model credential; checked lazily at call time
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openweather_api_key: None,
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("YATRA_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("YATRA_PORT must be a port number (got '{raw}')"))?,
            None => defaults.port,
        };

        let config = Self {
            host: get("YATRA_HOST").unwrap_or(defaults.host),
            port,
            openweather_api_key: get("OPENWEATHER_API_KEY"),
            openweather_base_url: get("OPENWEATHER_BASE_URL")
                .unwrap_or(defaults.openweather_base_url),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate URL settings
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("OPENWEATHER_BASE_URL", &self.openweather_base_url),
            ("OPENAI_BASE_URL", &self.openai_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("{name} must be an HTTP or HTTPS URL (got '{url}')");
            }
        }
        Ok(())
    }

    /// Address to bind, e.g. `127.0.0.1:5000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
