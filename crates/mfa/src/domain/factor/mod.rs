//! Factor Capability
//!
//! One pluggable verification strategy. Every variant implements the same
//! challenge/response contract; the registry hands them out as trait
//! objects, so the trait is object-safe (`async_trait`).

pub mod email_code;
pub mod recovery_code;
pub mod totp;

pub use email_code::EmailCodeFactor;
pub use recovery_code::RecoveryCodeFactor;
pub use totp::TotpFactor;

use crate::domain::entity::Account;
use crate::domain::value_object::{FactorId, SessionId};
use crate::error::MfaResult;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

/// Response fields submitted by the caller (field key -> submitted value)
pub type ResponseFields = HashMap<String, String>;

/// One input field the presentation layer must render for a factor
#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    /// Stable field key, matched against `ResponseFields`
    pub key: String,
    /// Human prompt label
    pub label: String,
}

impl FieldDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Immutable description of a factor type: one per type, not per instance
#[derive(Debug, Clone, Serialize)]
pub struct FactorDescriptor {
    pub id: FactorId,
    pub display_name: String,
    pub description: String,
    /// Ordered input field definitions
    pub fields: Vec<FieldDefinition>,
}

impl FactorDescriptor {
    pub fn new(
        id: FactorId,
        display_name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            description: description.into(),
            fields,
        }
    }

    /// Secret Store key for this factor's challenge state, namespaced per
    /// factor so concurrently configured factors on one session cannot
    /// collide
    pub fn storage_key(&self) -> String {
        format!("auth.{}.code", self.id)
    }

    /// What the presentation layer needs to render this factor's form
    pub fn render_data(&self) -> ChallengeRenderData {
        ChallengeRenderData {
            factor_id: self.id.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            fields: self.fields.clone(),
        }
    }
}

/// Value handed to the rendering boundary after a challenge is issued.
/// The framework never produces markup; the host turns this into a form.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeRenderData {
    pub factor_id: FactorId,
    pub display_name: String,
    pub description: String,
    pub fields: Vec<FieldDefinition>,
}

/// One pluggable authentication-verification strategy
#[async_trait]
pub trait Factor: Send + Sync {
    /// Static description of this factor type. Pure, no side effects.
    fn descriptor(&self) -> &FactorDescriptor;

    /// Issue (or re-issue) the challenge for this (session, factor) pair.
    /// Each call supersedes the prior challenge; a failed out-of-band send
    /// must leave no partial state behind.
    async fn issue_challenge(
        &self,
        session_id: &SessionId,
        account: &Account,
    ) -> MfaResult<ChallengeRenderData>;

    /// Check the caller's response against the live challenge. A
    /// non-matching or absent code is the normal `Ok(false)` outcome, not
    /// an error; a match consumes the stored secret before returning true.
    async fn verify(
        &self,
        session_id: &SessionId,
        account: &Account,
        response: &ResponseFields,
    ) -> MfaResult<bool>;

    /// Drop any live challenge state for this session (attempt abandoned)
    async fn cancel(&self, _session_id: &SessionId) -> MfaResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for dyn Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factor")
            .field("id", &self.descriptor().id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_is_namespaced_per_factor() {
        let descriptor = FactorDescriptor::new(
            FactorId::new("email-code"),
            "Email Code",
            "Single use code sent to your email address",
            vec![FieldDefinition::new("verificationCode", "Emailed verification code")],
        );

        assert_eq!(descriptor.storage_key(), "auth.email-code.code");
    }

    #[test]
    fn test_render_data_mirrors_descriptor() {
        let descriptor = FactorDescriptor::new(
            FactorId::new("totp"),
            "Authenticator App",
            "Six digit code from your authenticator app",
            vec![FieldDefinition::new("verificationCode", "Authenticator code")],
        );

        let render = descriptor.render_data();
        assert_eq!(render.factor_id, descriptor.id);
        assert_eq!(render.fields.len(), 1);
        assert_eq!(render.fields[0].key, "verificationCode");
    }
}
