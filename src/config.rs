use anyhow::Context;
use serde::Serialize;

pub const DEFAULT_SECRET_KEY: &str = "hardcoded-secret-123";
pub const DEFAULT_DATABASE_PATH: &str = "vulnerable.db";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Process configuration, built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_key: String,
    pub debug: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value {v:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            secret_key: std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.into()),
            debug: std::env::var("DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
        })
    }

    /// The view of the configuration rendered by `/settings`.
    pub fn exposed(&self) -> ExposedConfig {
        ExposedConfig {
            secret_key: self.secret_key.clone(),
            debug_mode: self.debug,
            database: self.database_path.clone(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.into(),
            debug: true,
            database_path: DEFAULT_DATABASE_PATH.into(),
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Configuration fields revealed to any caller of the settings page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExposedConfig {
    pub secret_key: String,
    pub debug_mode: bool,
    pub database: String,
    pub version: &'static str,
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
