use crate::{
    CorruptedRecord, SessionChange, SessionObserver, SessionResult, SessionStorage, UserSession,
};

use shop_client::{AuthApi, Credentials, Registration};

use log::{error, info, warn};

/// Owns the session record and every mutation of it.
///
/// Mutations take `&mut self`, so overlapping logins on one store are
/// sequenced by construction. Observers run after each change.
pub struct SessionStore<A> {
    api: A,
    session: UserSession,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<A: AuthApi> SessionStore<A> {
    /// Anonymous store.
    pub fn new(api: A) -> Self {
        Self::with_session(api, UserSession::default())
    }

    /// Store seeded with a previously persisted record.
    pub fn with_session(api: A, session: UserSession) -> Self {
        Self {
            api,
            session,
            observers: Vec::new(),
        }
    }

    /// Rehydrate from storage. Missing or corrupted records start anonymous.
    ///
    /// A corrupted record is set aside and handed to `on_corrupted`, along with
    /// any failure to set it aside. Neither stops the restore.
    pub fn restore<S, F>(api: A, storage: &S, on_corrupted: F) -> SessionResult<Self>
    where
        S: SessionStorage + ?Sized,
        F: FnOnce(&CorruptedRecord),
    {
        let loaded = storage.load()?;

        if let Some(reason) = loaded.corruption_error {
            warn!("Discarding unreadable session record: {reason}");

            let discard_error = storage.discard_corrupted().err();
            if let Some(e) = &discard_error {
                error!(
                    "Failed to set aside unreadable session record: {e} ({})",
                    e.recovery_hint()
                );
            }

            on_corrupted(&CorruptedRecord {
                reason,
                discard_error,
            });
        }

        Ok(Self::with_session(api, loaded.session.unwrap_or_default()))
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Log in and replace the whole record with the returned profile and tokens.
    ///
    /// On failure the record is left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> SessionResult<UserSession> {
        let credentials = Credentials::new(username, password);
        let tokens = self.api.login(&credentials).await?;

        self.session = UserSession::from(tokens);
        info!(
            "Logged in as {}",
            self.session.username().unwrap_or(username)
        );
        self.notify(SessionChange::LoggedIn);

        Ok(self.session.clone())
    }

    /// Reset to the anonymous record. No API call is made.
    pub fn logout(&mut self) {
        self.session = UserSession::default();
        info!("Logged out");
        self.notify(SessionChange::LoggedOut);
    }

    /// Create an account and return its profile and tokens.
    ///
    /// The live record is not touched; callers log in separately.
    pub async fn register(&self, registration: &Registration) -> SessionResult<UserSession> {
        let tokens = self.api.register(registration).await?;
        info!("Registered {}", registration.username);
        Ok(UserSession::from(tokens))
    }

    /// Swap in a refreshed access token, keeping every other field.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.session.access = Some(token.into());
        self.notify(SessionChange::AccessTokenReplaced);
    }

    fn notify(&self, change: SessionChange) {
        for observer in &self.observers {
            observer.on_change(change, &self.session);
        }
    }
}
