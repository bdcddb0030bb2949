//! Secret Store Trait
//!
//! Interface for the ephemeral, session-scoped key/value store that holds
//! in-flight challenge state. Implementation is in the infrastructure
//! layer. The store enforces no TTL of its own; absence-after-remove is
//! the only hard guarantee it gives.
//!
//! Writes must be visible to the very next read on the same session. The
//! framework assumes a single writer per session; the store only has to
//! stay consistent under sequential same-session writes.

use crate::domain::value_object::SessionId;
use crate::error::MfaResult;

/// Ephemeral secret store trait
#[trait_variant::make(SecretStore: Send)]
pub trait LocalSecretStore {
    /// Write a value under (session, key), overwriting any previous value
    async fn set(&self, session_id: &SessionId, key: &str, value: String) -> MfaResult<()>;

    /// Read the value under (session, key)
    async fn get(&self, session_id: &SessionId, key: &str) -> MfaResult<Option<String>>;

    /// Remove the value under (session, key); removing an absent key is
    /// not an error
    async fn remove(&self, session_id: &SessionId, key: &str) -> MfaResult<()>;

    /// Drop every entry belonging to a session (session-lifecycle
    /// teardown: logout, timeout)
    async fn clear_session(&self, session_id: &SessionId) -> MfaResult<()>;
}
