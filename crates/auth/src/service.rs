//! Impersonation as seen by the application: transitions plus persistence.

use chrono::{DateTime, Utc};

use crate::error::SessionError;
use crate::identity::Identity;
use crate::session::Session;
use crate::store::SessionStore;

/// Session operations backed by a [`SessionStore`].
#[derive(Debug)]
pub struct SessionService<S> {
    store: S,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Option<Session> {
        self.store.load()
    }

    pub fn sign_in(&self, identity: Identity) -> Session {
        let session = Session::sign_in(identity);
        tracing::info!(
            session_id = %session.session_id(),
            user_id = %session.identity().user_id,
            "signed in"
        );
        self.store.save(session.clone());
        session
    }

    pub fn sign_out(&self) {
        if let Some(session) = self.store.load() {
            tracing::info!(session_id = %session.session_id(), "signed out");
        }
        self.store.clear();
    }

    /// Swap the current admin session for one acting as `target`.
    pub fn begin_impersonation(
        &self,
        target: Identity,
        now: DateTime<Utc>,
    ) -> Result<Session, SessionError> {
        let current = self.store.load().ok_or(SessionError::NoSession)?;
        let next = current.begin_impersonation(target, now).inspect_err(|e| {
            tracing::warn!(
                user_id = %current.identity().user_id,
                error = %e,
                "impersonation refused"
            );
        })?;

        tracing::info!(
            admin_id = %current.identity().user_id,
            target_id = %next.identity().user_id,
            session_id = %next.session_id(),
            "impersonation started"
        );
        self.store.save(next.clone());
        Ok(next)
    }

    /// Return to the admin's own session.
    pub fn end_impersonation(&self) -> Result<Session, SessionError> {
        let current = self.store.load().ok_or(SessionError::NoSession)?;
        let restored = current.end_impersonation()?;

        tracing::info!(
            admin_id = %restored.identity().user_id,
            target_id = %current.identity().user_id,
            "impersonation ended"
        );
        self.store.save(restored.clone());
        Ok(restored)
    }

    /// Replace the current session with persisted client state.
    ///
    /// Corrupt or inconsistent state is rejected and the store is cleared.
    pub fn restore(&self, json: &str) -> Result<Session, SessionError> {
        match Session::from_json(json) {
            Ok(session) => {
                self.store.save(session.clone());
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding persisted session");
                self.store.clear();
                Err(e)
            }
        }
    }
}
