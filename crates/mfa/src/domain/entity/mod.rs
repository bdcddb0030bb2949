//! Domain Entities
//!
//! Core entities for the MFA domain.

pub mod account;
pub mod challenge;

pub use account::{Account, AccountId};
pub use challenge::ChallengeState;
