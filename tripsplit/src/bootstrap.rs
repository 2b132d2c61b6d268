use std::{env, str::FromStr};

const DEFAULT_CURRENCY: &str = "€";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedOutput(value.to_owned())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported TRIPSPLIT_OUTPUT value '{0}' (expected 'text' or 'json')")]
    UnsupportedOutput(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub currency: String,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency = lookup("TRIPSPLIT_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());
        let output = match lookup("TRIPSPLIT_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self { currency, output })
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
