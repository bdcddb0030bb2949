//! Recovery Code Factor
//!
//! Fallback factor: compares the submitted code against the SHA-256
//! digests of the account's unspent recovery codes. Marking a spent code
//! as used is durable-storage work and belongs to the external account
//! store; this factor only answers whether the code is currently valid.

use crate::domain::entity::Account;
use crate::domain::factor::{
    ChallengeRenderData, Factor, FactorDescriptor, FieldDefinition, ResponseFields,
};
use crate::domain::value_object::{FactorId, SessionId};
use crate::error::MfaResult;
use async_trait::async_trait;
use platform::crypto::{constant_time_eq, sha256};

/// Stable id of this factor type
pub const RECOVERY_CODE_FACTOR_ID: &str = "recovery-code";

/// Field key the caller submits the code under
pub const FIELD_RECOVERY_CODE: &str = "recoveryCode";

/// Hash a recovery code the way this factor compares it (trimmed,
/// uppercased). Hosts use this when provisioning codes onto an account.
pub fn hash_recovery_code(code: &str) -> [u8; 32] {
    sha256(code.trim().to_uppercase().as_bytes())
}

/// Recovery-code factor
pub struct RecoveryCodeFactor {
    descriptor: FactorDescriptor,
}

impl RecoveryCodeFactor {
    pub fn new() -> Self {
        let descriptor = FactorDescriptor::new(
            FactorId::new(RECOVERY_CODE_FACTOR_ID),
            "Recovery Code",
            "Authenticate via one of your single-use recovery codes.",
            vec![FieldDefinition::new(FIELD_RECOVERY_CODE, "Recovery code")],
        );

        Self { descriptor }
    }
}

impl Default for RecoveryCodeFactor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Factor for RecoveryCodeFactor {
    fn descriptor(&self) -> &FactorDescriptor {
        &self.descriptor
    }

    async fn issue_challenge(
        &self,
        _session_id: &SessionId,
        _account: &Account,
    ) -> MfaResult<ChallengeRenderData> {
        // The codes were handed out at enrollment time; nothing to deliver
        Ok(self.descriptor.render_data())
    }

    async fn verify(
        &self,
        _session_id: &SessionId,
        account: &Account,
        response: &ResponseFields,
    ) -> MfaResult<bool> {
        let Some(submitted) = response.get(FIELD_RECOVERY_CODE) else {
            return Ok(false);
        };

        let digest = hash_recovery_code(submitted);

        // Scan the full list regardless of an early match to keep the
        // comparison time independent of the matching position
        let mut matched = false;
        for known in &account.recovery_code_hashes {
            matched |= constant_time_eq(known, &digest);
        }

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_normalizes_case_and_whitespace() {
        assert_eq!(hash_recovery_code(" abcd-efgh "), hash_recovery_code("ABCD-EFGH"));
        assert_ne!(hash_recovery_code("ABCD-EFGH"), hash_recovery_code("ABCD-EFGI"));
    }
}
