//! Application Layer
//!
//! The per-attempt orchestrator and framework configuration.

pub mod config;
pub mod orchestrator;

// Re-exports
pub use config::MfaConfig;
pub use orchestrator::{ChallengeOrchestrator, FlowStage};
