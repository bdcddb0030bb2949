//! Challenge Orchestrator
//!
//! Drives one authentication attempt through its state machine:
//! `Idle -> FactorSelected -> ChallengeIssued -> Verified`. A rejected
//! submission is not a state of its own - the attempt stays in
//! `ChallengeIssued` and the still-valid secret may be retried until it is
//! consumed, re-issued, cancelled, or the session ends. The framework
//! deliberately caps neither attempts nor secret lifetime here.
//!
//! One orchestrator serves one (session, account) attempt and is driven
//! by one request at a time; hosts that allow concurrent requests on a
//! session must serialize `issue`/`submit` behind a session-keyed lock.

use crate::domain::entity::Account;
use crate::domain::factor::{ChallengeRenderData, Factor, FactorDescriptor, ResponseFields};
use crate::domain::registry::FactorRegistry;
use crate::domain::value_object::{FactorId, SessionId};
use crate::error::{MfaError, MfaResult};
use std::sync::Arc;

/// Observable position in the attempt state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    Idle,
    FactorSelected,
    ChallengeIssued,
    Verified,
}

enum FlowState {
    Idle,
    FactorSelected(Arc<dyn Factor>),
    ChallengeIssued(Arc<dyn Factor>),
    Verified,
}

/// State machine for one authentication attempt
pub struct ChallengeOrchestrator {
    registry: Arc<FactorRegistry>,
    session_id: SessionId,
    account: Account,
    state: FlowState,
}

impl ChallengeOrchestrator {
    /// Log a hard error at the point it leaves the state machine
    fn reject<T>(err: MfaError) -> MfaResult<T> {
        err.log();
        Err(err)
    }

    /// Start an attempt for one account on one session. Dependencies are
    /// injected; the orchestrator reaches into no ambient singletons.
    pub fn new(registry: Arc<FactorRegistry>, session_id: SessionId, account: Account) -> Self {
        Self {
            registry,
            session_id,
            account,
            state: FlowState::Idle,
        }
    }

    /// Factors the caller may offer for this account, in priority order
    pub fn available_factors(&self) -> Vec<FactorDescriptor> {
        self.registry.factors_for(&self.account)
    }

    /// Current observable stage
    pub fn stage(&self) -> FlowStage {
        match self.state {
            FlowState::Idle => FlowStage::Idle,
            FlowState::FactorSelected(_) => FlowStage::FactorSelected,
            FlowState::ChallengeIssued(_) => FlowStage::ChallengeIssued,
            FlowState::Verified => FlowStage::Verified,
        }
    }

    /// Whether the attempt completed successfully
    pub fn is_verified(&self) -> bool {
        matches!(self.state, FlowState::Verified)
    }

    /// Select the factor to authenticate with. Selecting a different
    /// factor mid-attempt invalidates any challenge the previous factor
    /// had issued.
    pub async fn select_factor(&mut self, factor_id: &FactorId) -> MfaResult<()> {
        if matches!(self.state, FlowState::Verified) {
            return Self::reject(MfaError::AlreadyVerified);
        }

        let factor = self.registry.resolve(factor_id).inspect_err(MfaError::log)?;

        if !self.account.has_factor(factor_id) {
            return Self::reject(MfaError::FactorNotEnabled(factor_id.clone()));
        }

        if let FlowState::ChallengeIssued(previous) = &self.state {
            previous
                .cancel(&self.session_id)
                .await
                .inspect_err(MfaError::log)?;
        }

        tracing::info!(
            factor_id = %factor_id,
            session_id = %self.session_id,
            account_id = %self.account.account_id,
            "Factor selected"
        );

        self.state = FlowState::FactorSelected(factor);
        Ok(())
    }

    /// Issue (or re-issue) the challenge for the selected factor and
    /// return what the presentation layer needs to render its form. On a
    /// delivery failure the attempt falls back to `FactorSelected` and the
    /// error is surfaced to the caller.
    pub async fn issue(&mut self) -> MfaResult<ChallengeRenderData> {
        let factor = match &self.state {
            FlowState::FactorSelected(f) | FlowState::ChallengeIssued(f) => Arc::clone(f),
            FlowState::Idle => return Self::reject(MfaError::FactorNotSelected),
            FlowState::Verified => return Self::reject(MfaError::AlreadyVerified),
        };

        match factor.issue_challenge(&self.session_id, &self.account).await {
            Ok(render) => {
                self.state = FlowState::ChallengeIssued(factor);
                Ok(render)
            }
            Err(e) => {
                // Any superseded secret is already gone; the caller may
                // retry issuance from the selected-factor stage
                self.state = FlowState::FactorSelected(factor);
                e.log();
                Err(e)
            }
        }
    }

    /// Submit the caller's response fields against the issued challenge.
    /// `Ok(false)` is the normal rejected outcome; the attempt stays in
    /// `ChallengeIssued` with the secret untouched.
    pub async fn submit(&mut self, response: &ResponseFields) -> MfaResult<bool> {
        let factor = match &self.state {
            FlowState::ChallengeIssued(f) => Arc::clone(f),
            FlowState::FactorSelected(_) => return Self::reject(MfaError::ChallengeNotIssued),
            FlowState::Idle => return Self::reject(MfaError::FactorNotSelected),
            FlowState::Verified => return Self::reject(MfaError::AlreadyVerified),
        };

        let verified = factor
            .verify(&self.session_id, &self.account, response)
            .await
            .inspect_err(MfaError::log)?;

        if verified {
            self.state = FlowState::Verified;
            tracing::info!(
                factor_id = %factor.descriptor().id,
                session_id = %self.session_id,
                account_id = %self.account.account_id,
                "Authentication attempt verified"
            );
        } else {
            tracing::warn!(
                factor_id = %factor.descriptor().id,
                session_id = %self.session_id,
                account_id = %self.account.account_id,
                "Verification attempt rejected"
            );
        }

        Ok(verified)
    }

    /// Abandon the attempt: drop any live challenge state and return to
    /// `Idle`
    pub async fn cancel(&mut self) -> MfaResult<()> {
        if let FlowState::FactorSelected(factor) | FlowState::ChallengeIssued(factor) = &self.state
        {
            factor
                .cancel(&self.session_id)
                .await
                .inspect_err(MfaError::log)?;
        }

        tracing::info!(
            session_id = %self.session_id,
            account_id = %self.account.account_id,
            "Authentication attempt cancelled"
        );

        self.state = FlowState::Idle;
        Ok(())
    }

    /// Session this attempt belongs to
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Account under authentication
    pub fn account(&self) -> &Account {
        &self.account
    }
}
