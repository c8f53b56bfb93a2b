//! Configuration management for the client service
//!
//! Settings come from environment variables, with a `.env` file loaded in
//! development builds. Database pool settings are read separately through
//! `db_pool::DbConfig`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
}

impl Settings {
    pub fn load() -> Result<Self> {
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
        }

        Ok(Settings {
            server: ServerSettings::from_env()?,
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Comma-separated origin list; `*` allows any origin
    pub cors_allowed_origins: String,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the cases share process-wide environment state.
    #[test]
    fn server_settings_from_env() {
        env::remove_var("SERVER_HOST");
        env::remove_var("SERVER_PORT");
        env::remove_var("CORS_ALLOWED_ORIGINS");

        let settings = ServerSettings::from_env().unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.cors_allowed_origins, "*");

        env::set_var("SERVER_PORT", "not-a-port");
        assert!(ServerSettings::from_env().is_err());

        env::set_var("SERVER_PORT", "9090");
        env::set_var("CORS_ALLOWED_ORIGINS", "https://app.amara.dev");
        let settings = ServerSettings::from_env().unwrap();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.cors_allowed_origins, "https://app.amara.dev");

        env::remove_var("SERVER_PORT");
        env::remove_var("CORS_ALLOWED_ORIGINS");
    }
}
