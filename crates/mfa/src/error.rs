//! MFA Error Types
//!
//! Hard failures of the challenge framework. A non-matching verification
//! code is not represented here - `verify`/`submit` report it as a plain
//! `Ok(false)` outcome.

use crate::domain::delivery::DeliveryError;
use crate::domain::value_object::factor_id::FactorId;
use thiserror::Error;

/// MFA-specific result type alias
pub type MfaResult<T> = Result<T, MfaError>;

/// MFA-specific error variants
#[derive(Debug, Error)]
pub enum MfaError {
    /// Factor id has no registered implementation
    #[error("Unknown factor: {0}")]
    UnknownFactor(FactorId),

    /// Factor is registered but not enabled for this account
    #[error("Factor not enabled for this account: {0}")]
    FactorNotEnabled(FactorId),

    /// Factor is enabled but the account is missing its configuration
    /// (e.g. no TOTP secret enrolled)
    #[error("Factor not configured for this account: {0}")]
    FactorNotConfigured(FactorId),

    /// Out-of-band delivery of the challenge failed
    #[error("Challenge delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    /// Orchestrator operation requires a selected factor
    #[error("No factor has been selected")]
    FactorNotSelected,

    /// Orchestrator operation requires an issued challenge
    #[error("No challenge has been issued")]
    ChallengeNotIssued,

    /// The authentication attempt already completed successfully
    #[error("Authentication attempt already verified")]
    AlreadyVerified,

    /// Value failed validation (e.g. malformed destination address)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Secret store backend error
    #[error("Secret store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MfaError {
    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            MfaError::Delivery(e) => {
                tracing::warn!(error = %e, "Challenge delivery failed");
            }
            MfaError::Store(msg) => {
                tracing::error!(message = %msg, "Secret store error");
            }
            MfaError::Internal(msg) => {
                tracing::error!(message = %msg, "MFA internal error");
            }
            MfaError::UnknownFactor(id) => {
                tracing::warn!(factor_id = %id, "Unknown factor requested");
            }
            _ => {
                tracing::debug!(error = %self, "MFA error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::DeliveryError;

    // The orchestrator logs every hard error on its way out; run each
    // variant through the leveled match so a new variant cannot silently
    // miss it
    #[test]
    fn test_log_handles_every_variant() {
        let errors = [
            MfaError::UnknownFactor(FactorId::new("sms")),
            MfaError::FactorNotEnabled(FactorId::new("totp")),
            MfaError::FactorNotConfigured(FactorId::new("totp")),
            MfaError::Delivery(DeliveryError::SendFailed("smtp unreachable".to_string())),
            MfaError::FactorNotSelected,
            MfaError::ChallengeNotIssued,
            MfaError::AlreadyVerified,
            MfaError::Validation("bad destination".to_string()),
            MfaError::Store("backend unavailable".to_string()),
            MfaError::Internal("corrupt state".to_string()),
        ];
        for err in errors {
            err.log();
            assert!(!err.to_string().is_empty());
        }
    }
}
