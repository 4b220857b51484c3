use shop_client::{AuthApi, AuthTokens, ClientError, ClientResult, Credentials, Registration};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

/// Answers every call with the same body, or fails when built with `failing()`.
pub(crate) struct FakeApi {
    response: Option<Value>,
    calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn returning(response: Value) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn alice() -> Self {
        Self::returning(json!({
            "user": {"username": "alice"},
            "access": "A1",
            "refresh": "R1"
        }))
    }

    pub(crate) fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> ClientResult<AuthTokens> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(ClientError::api(503, "Service Unavailable")),
        }
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> ClientResult<AuthTokens> {
        self.respond()
    }

    async fn register(&self, _registration: &Registration) -> ClientResult<AuthTokens> {
        self.respond()
    }
}

pub(crate) fn registration(username: &str) -> Registration {
    Registration {
        username: username.into(),
        email: format!("{username}@example.com"),
        first_name: "First".into(),
        last_name: "Last".into(),
        password: "pw".into(),
        confirm_password: "pw".into(),
    }
}
