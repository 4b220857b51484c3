use crate::StorageError;

use shop_client::ClientError;
use thiserror::Error;

/// Errors surfaced by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
