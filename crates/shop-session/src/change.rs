use crate::UserSession;

/// What just happened to the session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    LoggedIn,
    LoggedOut,
    AccessTokenReplaced,
}

/// Notified after every mutation, with the record as it now stands.
pub trait SessionObserver: Send + Sync {
    fn on_change(&self, change: SessionChange, session: &UserSession);
}

impl<F> SessionObserver for F
where
    F: Fn(SessionChange, &UserSession) + Send + Sync,
{
    fn on_change(&self, change: SessionChange, session: &UserSession) {
        self(change, session)
    }
}
