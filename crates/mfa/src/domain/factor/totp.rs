//! TOTP Factor
//!
//! Authenticator-app factor (RFC 6238). The shared secret lives on the
//! account, not in the Secret Store: issuing a challenge has no
//! out-of-band side effect because the code is generated on the user's
//! device.

use crate::application::config::MfaConfig;
use crate::domain::entity::Account;
use crate::domain::factor::{
    ChallengeRenderData, Factor, FactorDescriptor, FieldDefinition, ResponseFields,
};
use crate::domain::value_object::{FactorId, SessionId};
use crate::error::{MfaError, MfaResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Stable id of this factor type
pub const TOTP_FACTOR_ID: &str = "totp";

/// Field key the caller submits the code under
pub const FIELD_VERIFICATION_CODE: &str = "verificationCode";

/// Authenticator-app TOTP factor
pub struct TotpFactor {
    config: Arc<MfaConfig>,
    descriptor: FactorDescriptor,
}

impl TotpFactor {
    pub fn new(config: Arc<MfaConfig>) -> Self {
        let descriptor = FactorDescriptor::new(
            FactorId::new(TOTP_FACTOR_ID),
            "Authenticator App",
            "Authenticate via the six-digit code from your authenticator app.",
            vec![FieldDefinition::new(
                FIELD_VERIFICATION_CODE,
                "Authenticator code",
            )],
        );

        Self { config, descriptor }
    }
}

#[async_trait]
impl Factor for TotpFactor {
    fn descriptor(&self) -> &FactorDescriptor {
        &self.descriptor
    }

    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        account: &Account,
    ) -> MfaResult<ChallengeRenderData> {
        // Nothing to generate or deliver, but an unenrolled account is a
        // hard error here rather than a guaranteed-false verify later
        if account.totp_secret.is_none() {
            return Err(MfaError::FactorNotConfigured(self.descriptor.id.clone()));
        }

        tracing::info!(
            factor_id = %self.descriptor.id,
            session_id = %session_id,
            account_id = %account.account_id,
            "TOTP challenge ready"
        );

        Ok(self.descriptor.render_data())
    }

    async fn verify(
        &self,
        _session_id: &SessionId,
        account: &Account,
        response: &ResponseFields,
    ) -> MfaResult<bool> {
        let secret = account
            .totp_secret
            .as_ref()
            .ok_or_else(|| MfaError::FactorNotConfigured(self.descriptor.id.clone()))?;

        let Some(submitted) = response.get(FIELD_VERIFICATION_CODE) else {
            return Ok(false);
        };

        secret.verify(
            submitted.trim(),
            &self.config.totp_issuer,
            account.account_id.as_str(),
        )
    }
}
