//! shop-client
//!
//! Thin async wrappers over the storefront REST API. Each method issues
//! exactly one HTTP request and hands the decoded body back to the caller.

pub(crate) mod auth_api;
pub(crate) mod client;
pub(crate) mod model;

#[cfg(test)]
mod tests;

pub use auth_api::AuthApi;
pub use client::{Client, ClientError, ClientResult};
pub use model::{
    AuthTokens, Credentials, ProfileUpdate, ProfileUpdateBody, Registration, UserId, UserProfile,
};
