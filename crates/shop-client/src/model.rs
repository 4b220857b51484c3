mod auth_tokens;
mod credentials;
mod profile_update;
mod registration;
mod user_id;
mod user_profile;

pub use auth_tokens::AuthTokens;
pub use credentials::Credentials;
pub use profile_update::{ProfileUpdate, ProfileUpdateBody};
pub use registration::Registration;
pub use user_id::UserId;
pub use user_profile::UserProfile;
