//! Email Code Factor
//!
//! Authenticate via a single-use code sent to the account's registered
//! email address. The code is generated from a CSPRNG, stored
//! uppercase-normalized in the Secret Store and handed to the Delivery
//! Collaborator as template data; it is consumed on the first successful
//! verification.

use crate::application::config::MfaConfig;
use crate::domain::delivery::{Delivery, DeliveryError, TEMPLATE_MFA_CODE_EMAIL};
use crate::domain::entity::{Account, ChallengeState};
use crate::domain::factor::{
    ChallengeRenderData, Factor, FactorDescriptor, FieldDefinition, ResponseFields,
};
use crate::domain::repository::SecretStore;
use crate::domain::value_object::{FactorId, OneTimeCode, SessionId};
use crate::error::{MfaError, MfaResult};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Stable id of this factor type
pub const EMAIL_CODE_FACTOR_ID: &str = "email-code";

/// Field key the caller submits the code under
pub const FIELD_VERIFICATION_CODE: &str = "verificationCode";

/// Emailed one-time-code factor
pub struct EmailCodeFactor<S, D> {
    store: Arc<S>,
    delivery: Arc<D>,
    config: Arc<MfaConfig>,
    descriptor: FactorDescriptor,
}

impl<S, D> EmailCodeFactor<S, D>
where
    S: SecretStore + Send + Sync,
    D: Delivery + Send + Sync,
{
    pub fn new(store: Arc<S>, delivery: Arc<D>, config: Arc<MfaConfig>) -> Self {
        let descriptor = FactorDescriptor::new(
            FactorId::new(EMAIL_CODE_FACTOR_ID),
            "Email Code",
            "Authenticate via a single-use code sent to your email address.",
            vec![FieldDefinition::new(
                FIELD_VERIFICATION_CODE,
                "Emailed verification code",
            )],
        );

        Self {
            store,
            delivery,
            config,
            descriptor,
        }
    }

    /// Roll back the store write after a failed send so no partial state
    /// survives the error
    async fn rollback(&self, session_id: &SessionId, key: &str) {
        if let Err(e) = self.store.remove(session_id, key).await {
            tracing::error!(error = %e, "Failed to roll back challenge state after send failure");
        }
    }
}

#[async_trait]
impl<S, D> Factor for EmailCodeFactor<S, D>
where
    S: SecretStore + Send + Sync,
    D: Delivery + Send + Sync,
{
    fn descriptor(&self) -> &FactorDescriptor {
        &self.descriptor
    }

    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        account: &Account,
    ) -> MfaResult<ChallengeRenderData> {
        let code = OneTimeCode::generate(self.config.code_groups, self.config.code_group_len);
        let state = ChallengeState::new(
            session_id.clone(),
            self.descriptor.id.clone(),
            code.clone(),
        );

        let key = self.descriptor.storage_key();
        let serialized = serde_json::to_string(&state)
            .map_err(|e| MfaError::Internal(format!("Failed to serialize challenge: {}", e)))?;

        // Overwrites any prior challenge for this (session, factor) pair
        self.store.set(session_id, &key, serialized).await?;

        let send_result: Result<(), DeliveryError> = self
            .delivery
            .send(
                account.email.as_str(),
                TEMPLATE_MFA_CODE_EMAIL,
                json!({ "code": code.reveal() }),
            )
            .await;

        if let Err(e) = send_result {
            self.rollback(session_id, &key).await;
            return Err(MfaError::Delivery(e));
        }

        tracing::info!(
            factor_id = %self.descriptor.id,
            session_id = %session_id,
            account_id = %account.account_id,
            "Verification email sent"
        );

        Ok(self.descriptor.render_data())
    }

    async fn verify(
        &self,
        session_id: &SessionId,
        _account: &Account,
        response: &ResponseFields,
    ) -> MfaResult<bool> {
        let key = self.descriptor.storage_key();

        // Absent state (never issued, consumed, or session torn down) is a
        // normal mismatch, not an error
        let Some(serialized) = self.store.get(session_id, &key).await? else {
            return Ok(false);
        };

        let state: ChallengeState = serde_json::from_str(&serialized)
            .map_err(|e| MfaError::Internal(format!("Corrupt challenge state: {}", e)))?;

        if state.is_expired(self.config.code_ttl) {
            self.store.remove(session_id, &key).await?;
            tracing::debug!(
                factor_id = %self.descriptor.id,
                session_id = %session_id,
                "Challenge expired"
            );
            return Ok(false);
        }

        let Some(submitted) = response.get(FIELD_VERIFICATION_CODE) else {
            return Ok(false);
        };

        if !state.code.matches(submitted) {
            return Ok(false);
        }

        // Single use: consume the secret before reporting success so the
        // same code can never verify twice
        self.store.remove(session_id, &key).await?;
        Ok(true)
    }

    async fn cancel(&self, session_id: &SessionId) -> MfaResult<()> {
        self.store
            .remove(session_id, &self.descriptor.storage_key())
            .await
    }
}
