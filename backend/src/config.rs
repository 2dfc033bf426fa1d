//! Configuration management for the GrowIQ dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with GROWIQ_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_TELEMETRY_ENDPOINT: &str =
    "https://v2x0cl909j.execute-api.us-east-1.amazonaws.com/default/GrowIQ";
pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "http://127.0.0.1:3001/api/chat";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Field telemetry ingestion endpoint
    pub telemetry: TelemetryConfig,

    /// Chat answering endpoint
    pub assistant: AssistantConfig,

    /// Chat session settings
    pub chat: ChatConfig,

    /// Outbound HTTP settings
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    /// GET endpoint returning `{ message, timestamp, fields }`
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// POST endpoint returning `{ response }`
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// How many prior messages accompany each question
    pub history_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Upper bound on any single outbound request
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GROWIQ_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("telemetry.endpoint", DEFAULT_TELEMETRY_ENDPOINT)?
            .set_default("assistant.endpoint", DEFAULT_ASSISTANT_ENDPOINT)?
            .set_default("chat.history_limit", 10)?
            .set_default("http.request_timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GROWIQ_ prefix)
            .add_source(
                Environment::with_prefix("GROWIQ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig {
                endpoint: DEFAULT_TELEMETRY_ENDPOINT.to_string(),
            },
            assistant: AssistantConfig {
                endpoint: DEFAULT_ASSISTANT_ENDPOINT.to_string(),
            },
            chat: ChatConfig { history_limit: 10 },
            http: HttpConfig {
                request_timeout_secs: 30,
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.chat.history_limit, 10);
        assert_eq!(config.telemetry.endpoint, DEFAULT_TELEMETRY_ENDPOINT);
    }
}
