//! MFA Challenge Framework
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the `Factor` capability and its
//!   variants, the factor registry, port traits (secret store, delivery)
//! - `application/` - The per-attempt challenge orchestrator and config
//! - `infra/` - In-memory secret store implementation
//!
//! ## Security Model
//! - Challenge secrets are single-use: consumed atomically on success, so
//!   replay of a spent code fails
//! - One live challenge per (session, factor); re-issuing supersedes the
//!   prior secret
//! - Codes are compared exactly (case-normalized) and in constant time,
//!   and never appear in logs or responses
//! - Delivery failures surface as typed errors, never silently dropped

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::MfaConfig;
pub use application::orchestrator::{ChallengeOrchestrator, FlowStage};
pub use error::{MfaError, MfaResult};
pub use infra::memory::InMemorySecretStore;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod factors {
    pub use crate::domain::factor::*;
}

pub mod store {
    pub use crate::domain::repository::*;
    pub use crate::infra::memory::InMemorySecretStore;
}
