use crate::UserId;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile as returned inside login and registration responses.
///
/// Only `id` and `username` are typed. Every other field is kept in `extra`
/// under the key and with the value the server sent, so the profile writes
/// back out exactly as it came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// No field set at all.
    pub fn is_empty(&self) -> bool {
        *self == UserProfile::default()
    }

    pub fn email(&self) -> Option<&str> {
        self.text(&["email"])
    }

    pub fn first_name(&self) -> Option<&str> {
        self.text(&["first_name", "firstName"])
    }

    pub fn last_name(&self) -> Option<&str> {
        self.text(&["last_name", "lastName"])
    }

    pub fn profile_picture(&self) -> Option<&str> {
        self.text(&["profile_picture", "profilePicture"])
    }

    /// First of `keys` holding a string.
    fn text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}
