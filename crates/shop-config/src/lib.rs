mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

/// Target of the storefront dev proxy (`/api` -> `localhost:8080`).
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_SESSION_STORAGE_KEY: &str = "user";
const DEFAULT_SESSION_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "SHOP_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".shop";
const CONFIG_FILENAME: &str = "config.toml";
