//! Challenge State Entity
//!
//! The transient record behind one issued challenge. Lives only inside the
//! Secret Store (serialized as JSON), never in durable storage. One live
//! state exists per (session, factor) pair; re-issuing overwrites it.

use crate::domain::value_object::{FactorId, OneTimeCode, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// In-flight challenge state for one (session, factor) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeState {
    pub session_id: SessionId,
    pub factor_id: FactorId,
    pub code: OneTimeCode,
    pub issued_at: DateTime<Utc>,
}

impl ChallengeState {
    /// Create a new challenge state
    pub fn new(session_id: SessionId, factor_id: FactorId, code: OneTimeCode) -> Self {
        Self {
            session_id,
            factor_id,
            code,
            issued_at: Utc::now(),
        }
    }

    /// Check the configured TTL, if any. `ttl == None` never expires.
    pub fn is_expired(&self, ttl: Option<Duration>) -> bool {
        let Some(ttl) = ttl else {
            return false;
        };
        let age_ms = Utc::now()
            .signed_duration_since(self.issued_at)
            .num_milliseconds();
        age_ms >= ttl.as_millis() as i64
    }
}
