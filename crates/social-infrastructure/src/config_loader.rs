//! Client configuration file handling.
//!
//! Reads `config.toml` from the platform config directory. A missing file
//! yields the defaults; the `SOCIAL_API_BASE` environment variable overrides
//! the base URL either way, mirroring the web client's `VITE_API_BASE`.

use crate::paths::SocialPaths;
use social_core::config::ClientConfig;
use social_core::{Result, SocialError};
use std::fs;
use tracing::debug;

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "SOCIAL_API_BASE";

/// Loads the client configuration.
///
/// # Returns
///
/// - `Ok(ClientConfig)`: parsed file, or defaults when no file exists
/// - `Err(SocialError::Config)`: the file exists but cannot be read or parsed
pub fn load_config() -> Result<ClientConfig> {
    let mut config = match SocialPaths::config_file() {
        Ok(path) if path.exists() => {
            let content = fs::read_to_string(&path).map_err(|e| {
                SocialError::config(format!("failed to read {}: {}", path.display(), e))
            })?;
            toml::from_str(&content).map_err(|e| {
                SocialError::config(format!("failed to parse {}: {}", path.display(), e))
            })?
        }
        Ok(_) => ClientConfig::default(),
        Err(_) => {
            debug!("config dir unavailable, using default configuration");
            ClientConfig::default()
        }
    };

    if let Ok(base) = std::env::var(BASE_URL_ENV) {
        let base = base.trim();
        if !base.is_empty() {
            config.base_url = base.trim_end_matches('/').to_string();
        }
    }

    Ok(config)
}

/// Saves the client configuration, creating the config directory on demand.
pub fn save_config(config: &ClientConfig) -> Result<()> {
    let path = SocialPaths::config_file().map_err(|e| SocialError::config(e.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(config)
        .map_err(|e| SocialError::config(format!("failed to serialize configuration: {}", e)))?;
    fs::write(&path, toml_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_core::config::{EnvelopeConvention, PaginationStyle};

    #[test]
    fn test_config_toml_round_trip() {
        let config = ClientConfig {
            base_url: "https://api.example.com".to_string(),
            timeout_ms: 5_000,
            envelope: EnvelopeConvention::SuccessIsZero,
            pagination: PaginationStyle::CursorLimit,
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.timeout_ms, 5_000);
        assert_eq!(parsed.envelope, EnvelopeConvention::SuccessIsZero);
        assert_eq!(parsed.pagination, PaginationStyle::CursorLimit);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let parsed: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.base_url, social_core::config::DEFAULT_BASE_URL);
        assert_eq!(parsed.envelope, EnvelopeConvention::SuccessIs200);
    }
}
