use config::{Config as Cfg, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    Missing(String),

    #[error("{0} is required in production but not set")]
    MissingInProduction(String),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: String, reason: String },

    #[error("Failed to load server settings: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub server: ServerConfig,
    pub groq: GroqConfig,
    pub telemetry: TelemetryConfig,
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Secret<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Unset means the outbound call has no explicit timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Reads `configuration.*` (optional) and `APP__` prefixed variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl GroqConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl PromptConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let server = ServerConfig::load()?;
        Self::from_lookup(server, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(server: ServerConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").as_deref() == Some("prod");
        let vars = Vars { lookup, is_prod };

        Ok(PromptConfig {
            server,
            groq: GroqConfig {
                api_key: Secret::new(vars.required("GROQ_API_KEY")?),
                api_url: vars.get("GROQ_API_URL", DEFAULT_GROQ_API_URL)?,
                model: vars.get("GROQ_MODEL", DEFAULT_GROQ_MODEL)?,
                temperature: vars.parsed("GROQ_TEMPERATURE", DEFAULT_TEMPERATURE)?,
                max_tokens: vars.parsed("GROQ_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
                timeout_secs: vars.optional_parsed("GROQ_TIMEOUT_SECS")?,
            },
            telemetry: TelemetryConfig {
                log_level: vars.get("LOG_LEVEL", "info")?,
                otlp_endpoint: vars.optional("OTLP_ENDPOINT"),
            },
            service_name: "prompt-service".to_string(),
        })
    }
}

struct Vars<F> {
    lookup: F,
    is_prod: bool,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    fn get(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        match self.optional(key) {
            Some(val) => Ok(val),
            None if self.is_prod => Err(ConfigError::MissingInProduction(key.to_string())),
            None => Ok(default.to_string()),
        }
    }

    fn parsed<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + ToString,
        T::Err: std::fmt::Display,
    {
        parse_value(key, &self.get(key, &default.to_string())?)
    }

    fn optional_parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key)
            .map(|raw| parse_value(key, &raw))
            .transpose()
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
