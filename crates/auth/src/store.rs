//! Where the current session lives between requests/renders.

use std::sync::{Arc, RwLock};

use crate::session::Session;

/// Holder of the single current session (one tab, one user).
///
/// Writes are last-writer-wins.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: Session);
    fn clear(&self);
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: Session) {
        (**self).save(session)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory session store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.read().ok()?.clone()
    }

    fn save(&self, session: Session) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(session);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Identity, UserRole};
    use greenline_core::RecordId;

    fn session(id: &str) -> Session {
        Session::sign_in(Identity::new(RecordId::new(id).unwrap(), id, UserRole::Rep))
    }

    #[test]
    fn empty_store_loads_nothing() {
        assert!(InMemorySessionStore::new().load().is_none());
    }

    #[test]
    fn last_writer_wins() {
        let store = InMemorySessionStore::new();
        store.save(session("a"));
        store.save(session("b"));
        assert_eq!(store.load().unwrap().identity().user_id.as_str(), "b");
    }

    #[test]
    fn clear_forgets_session() {
        let store = Arc::new(InMemorySessionStore::new());
        store.save(session("a"));
        store.clear();
        assert!(store.load().is_none());
    }
}
