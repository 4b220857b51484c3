use std::panic::Location;

use error_location::ErrorLocation;
use shop_client::ClientError;
use shop_config::ConfigError;
use shop_session::{SessionError, StorageError};
use thiserror::Error;

/// Errors surfaced to the `shop` user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not logged in: {message} {location}")]
    NotLoggedIn {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Whether the server rejected the stored credentials.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Client(e) | Self::Session(SessionError::Client(e)) => e.is_unauthorized(),
            _ => false,
        }
    }

    #[track_caller]
    pub fn not_logged_in(message: impl Into<String>) -> Self {
        Self::NotLoggedIn {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
