use shop_client::{AuthTokens, UserProfile};

use serde::{Deserialize, Serialize};

/// The session record: profile fields plus the token pair, stored flat.
///
/// `Default` is the anonymous (empty) session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl UserSession {
    pub fn is_empty(&self) -> bool {
        *self == UserSession::default()
    }

    /// Holds an access token. Tokens are not decoded, so expiry is unknown.
    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.profile.username.as_deref()
    }
}

impl From<AuthTokens> for UserSession {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            profile: tokens.user,
            access: Some(tokens.access),
            refresh: Some(tokens.refresh),
        }
    }
}
