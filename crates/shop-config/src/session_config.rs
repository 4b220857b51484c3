use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIRECTORY, DEFAULT_SESSION_STORAGE_KEY,
};

use serde::Deserialize;

/// Where the persisted session record lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name the record is stored under (`<dir>/<storage_key>.json`)
    pub storage_key: String,
    /// Directory relative to the config directory
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_SESSION_STORAGE_KEY),
            dir: String::from(DEFAULT_SESSION_DIRECTORY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::session("session.storage_key must not be empty"));
        }

        if self.storage_key.contains(['/', '\\']) || self.storage_key.contains("..") {
            return Err(ConfigError::session(format!(
                "session.storage_key cannot contain path separators or '..', got {}",
                self.storage_key
            )));
        }

        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
