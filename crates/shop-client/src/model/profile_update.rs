use serde::Serialize;

/// Profile edit for `PUT /user/{id}/`.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Picture reference (URL or upload key)
    pub profile: Option<String>,
}

/// Wire shape of a [`ProfileUpdate`]; the id travels in the path.
#[derive(Debug, Serialize)]
pub struct ProfileUpdateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(rename = "profilePicture", skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<&'a str>,
}

impl ProfileUpdate {
    pub fn body(&self) -> ProfileUpdateBody<'_> {
        ProfileUpdateBody {
            username: self.username.as_deref(),
            email: self.email.as_deref(),
            phone: self.phone.as_deref(),
            profile_picture: self.profile.as_deref(),
        }
    }
}
