//! Unified path management for GameSocial client files.
//!
//! All client-side state lives under the platform config directory:
//!
//! ```text
//! ~/.config/gamesocial/        # Config directory (XDG on Linux/macOS)
//! ├── config.toml              # Client configuration
//! ├── token                    # Bearer token (mode 600 on Unix)
//! └── user.json                # Cached user profile
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for the GameSocial client.
pub struct SocialPaths;

impl SocialPaths {
    /// Returns the client configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/gamesocial/`
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("gamesocial"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the client configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted bearer token.
    ///
    /// # Security Note
    ///
    /// The session store keeps this file at mode 600 on Unix.
    pub fn token_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("token"))
    }

    /// Returns the path to the cached user profile.
    pub fn user_cache_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("user.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = SocialPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("gamesocial"));
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let config_dir = SocialPaths::config_dir().unwrap();
        for path in [
            SocialPaths::config_file().unwrap(),
            SocialPaths::token_file().unwrap(),
            SocialPaths::user_cache_file().unwrap(),
        ] {
            assert!(path.starts_with(&config_dir));
        }
        assert!(SocialPaths::config_file().unwrap().ends_with("config.toml"));
    }
}
