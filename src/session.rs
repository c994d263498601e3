//! Per-client session bindings.
//!
//! A session is a snapshot of the user taken at login. It is never
//! re-validated against the database and only disappears on logout.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::LoginRow;

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

impl From<LoginRow> for Session {
    fn from(row: LoginRow) -> Self {
        Self {
            user_id: row.id,
            username: row.username,
            role: row.role.unwrap_or_default(),
        }
    }
}

/// Token -> session map shared by every request.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new session and return the token the client must present.
    pub async fn create(&self, session: Session) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.inner.read().await.get(token).cloned()
    }

    /// Drop every field bound to `token`.
    pub async fn clear(&self, token: &str) -> Option<Session> {
        self.inner.write().await.remove(token)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Session {
        Session {
            user_id: 7,
            username: "alice".into(),
            role: "user".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_snapshot() {
        let store = SessionStore::new();
        let token = store.create(alice()).await;
        assert_eq!(store.get(&token).await, Some(alice()));
        assert!(store.get("unknown").await.is_none());
    }

    #[tokio::test]
    async fn clear_discards_the_session() {
        let store = SessionStore::new();
        let token = store.create(alice()).await;
        assert_eq!(store.clear(&token).await, Some(alice()));
        assert!(store.get(&token).await.is_none());
        assert!(store.is_empty().await);
    }

    #[test]
    fn snapshot_keeps_any_role_text() {
        let session = Session::from(LoginRow {
            id: 99,
            username: "forged".into(),
            role: Some("superuser".into()),
        });
        assert_eq!(session.role, "superuser");

        let session = Session::from(LoginRow {
            id: 0,
            username: String::new(),
            role: None,
        });
        assert_eq!(session.role, "");
    }

    #[tokio::test]
    async fn each_login_gets_its_own_token() {
        let store = SessionStore::new();
        let a = store.create(alice()).await;
        let b = store.create(alice()).await;
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }
}
