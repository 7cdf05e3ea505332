// src/config.rs
use std::time::Duration;
use thiserror::Error;

pub const PROVIDER_ID_VAR: &str = "APIMO_PROVIDER_ID";
pub const API_TOKEN_VAR: &str = "APIMO_API_TOKEN";
pub const AGENCY_ID_VAR: &str = "APIMO_AGENCY_ID";
pub const API_URL_VAR: &str = "APIMO_API_URL";
pub const TIMEOUT_VAR: &str = "APIMO_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.apimo.pro";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Credentials and endpoint for the APIMO provider API.
///
/// Built once at startup; handlers receive either this or the
/// `ConfigError` explaining why it could not be built.
#[derive(Debug, Clone)]
pub struct ApimoConfig {
    pub provider_id: String,
    pub api_token: String,
    pub agency_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ApimoConfig {
    /// Load from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validate a configuration from any key/value lookup.
    ///
    /// All three credential values are checked before failing so the
    /// error names every missing variable at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str, missing: &mut Vec<&'static str>| {
            match lookup(key).map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() => v,
                _ => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let mut missing = Vec::new();
        let provider_id = required(PROVIDER_ID_VAR, &mut missing);
        let api_token = required(API_TOKEN_VAR, &mut missing);
        let agency_id = required(AGENCY_ID_VAR, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let base_url = lookup(API_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR).map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: v.clone(),
            })?,
            _ => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            provider_id,
            api_token,
            agency_id,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
