//! In-memory session store. Sessions are ephemeral: they live for the
//! duration of one assessment run and die with the process. Nothing is
//! persisted or transmitted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assessment::session::AssessmentSession;

/// Shared handle to the live sessions of this process. Cloning is cheap;
/// all clones see the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, AssessmentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let session = AssessmentSession::new();
        let id = session.id;
        self.inner.write().await.insert(id, session);
        id
    }

    /// Runs `f` against the session under the write lock. Returns `None` if
    /// the session does not exist (expired with the process, completed, or
    /// never created).
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut AssessmentSession) -> T,
    ) -> Option<T> {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Removes a session, returning it if it existed. Called on the terminal
    /// transition: a completed session is handed to scoring and discarded.
    pub async fn remove(&self, id: Uuid) -> Option<AssessmentSession> {
        self.inner.write().await.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_lookup() {
        let store = SessionStore::new();
        let id = store.create().await;
        assert_eq!(store.len().await, 1);
        let found = store.with_session(id, |s| s.id).await;
        assert_eq!(found, Some(id));
    }

    #[tokio::test]
    async fn test_unknown_session_yields_none() {
        let store = SessionStore::new();
        let missing = store.with_session(Uuid::new_v4(), |_| ()).await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_mutations_are_visible_across_clones() {
        let catalog = crate::assessment::questions::futurefit_catalog().unwrap();
        let store = SessionStore::new();
        let id = store.create().await;

        let clone = store.clone();
        clone
            .with_session(id, |s| s.record_answer(&catalog, "expert").unwrap())
            .await
            .expect("session exists");

        let answered = store.with_session(id, |s| s.answers().len()).await;
        assert_eq!(answered, Some(1));
    }

    #[tokio::test]
    async fn test_remove_discards_session() {
        let store = SessionStore::new();
        let id = store.create().await;
        assert!(store.remove(id).await.is_some());
        assert!(store.remove(id).await.is_none());
        assert_eq!(store.len().await, 0);
    }
}
