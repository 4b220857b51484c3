use crate::{AuthTokens, Client, ClientResult, Credentials, Registration};

use async_trait::async_trait;

/// The slice of the API the session store needs.
///
/// Implemented by [`Client`]; tests substitute their own transport.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /user/login/`
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthTokens>;

    /// `POST /user/register/`
    async fn register(&self, registration: &Registration) -> ClientResult<AuthTokens>;
}

#[async_trait]
impl AuthApi for Client {
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthTokens> {
        Client::login(self, credentials).await
    }

    async fn register(&self, registration: &Registration) -> ClientResult<AuthTokens> {
        Client::register(self, registration).await
    }
}
