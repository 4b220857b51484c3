use crate::UserProfile;

use serde::Deserialize;

/// Body of a successful login or registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTokens {
    pub user: UserProfile,
    pub access: String,
    pub refresh: String,
}
