//! Application settings sourced from the environment.
//!
//! Every knob has a development default and can be overridden via an
//! `APP_`-prefixed environment variable.

use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the catalog JSON document (`APP_DATA_FILE_PATH`).
    pub data_file_path: String,
    /// Bind host (`APP_HOST`).
    pub host: String,
    /// Bind port (`APP_PORT`).
    pub port: u16,
    /// Default log level when `RUST_LOG` is unset (`APP_LOG_LEVEL`).
    pub log_level: String,
    /// Allowed CORS origins, comma-separated; `*` means any (`APP_CORS_ORIGINS`).
    pub cors_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            data_file_path: env_or("APP_DATA_FILE_PATH", "data/products.json"),
            host: env_or("APP_HOST", "0.0.0.0"),
            port: env::var("APP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            log_level: env_or("APP_LOG_LEVEL", "info"),
            cors_origins: split_origins(&env_or("APP_CORS_ORIGINS", "*")),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
