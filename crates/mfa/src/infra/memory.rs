//! In-Memory Secret Store
//!
//! Reference `SecretStore` backed by a mutex-guarded map. Entries live
//! only as long as the process; session teardown clears a session's
//! entries via `clear_session`. Suits the single-writer-per-session model:
//! the mutex only protects the map shape, it is not the cross-request
//! lock the host may need around `issue`/`submit`.

use crate::domain::repository::SecretStore;
use crate::domain::value_object::SessionId;
use crate::error::{MfaError, MfaResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory, session-scoped secret store
#[derive(Default)]
pub struct InMemorySecretStore {
    sessions: Mutex<HashMap<SessionId, HashMap<String, String>>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MfaResult<std::sync::MutexGuard<'_, HashMap<SessionId, HashMap<String, String>>>> {
        self.sessions
            .lock()
            .map_err(|_| MfaError::Store("Secret store mutex poisoned".to_string()))
    }
}

impl SecretStore for InMemorySecretStore {
    async fn set(&self, session_id: &SessionId, key: &str, value: String) -> MfaResult<()> {
        let mut sessions = self.lock()?;
        sessions
            .entry(session_id.clone())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, session_id: &SessionId, key: &str) -> MfaResult<Option<String>> {
        let sessions = self.lock()?;
        Ok(sessions
            .get(session_id)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    async fn remove(&self, session_id: &SessionId, key: &str) -> MfaResult<()> {
        let mut sessions = self.lock()?;
        if let Some(entries) = sessions.get_mut(session_id) {
            entries.remove(key);
            if entries.is_empty() {
                sessions.remove(session_id);
            }
        }
        Ok(())
    }

    async fn clear_session(&self, session_id: &SessionId) -> MfaResult<()> {
        let mut sessions = self.lock()?;
        sessions.remove(session_id);
        Ok(())
    }
}
