//! Account Entity
//!
//! Read-only snapshot of what the external account lookup returns for one
//! account: the delivery destination, the enabled factors (in configured
//! priority order) and any per-factor enrollment material. The framework
//! never writes this back.

use crate::domain::value_object::{Email, FactorId, TotpSecret};

/// Account-id newtype (opaque to the framework)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account under authentication
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Registered out-of-band destination
    pub email: Email,
    /// Enabled factor ids, in configured priority order
    pub enabled_factors: Vec<FactorId>,
    /// TOTP enrollment, if the account set one up
    pub totp_secret: Option<TotpSecret>,
    /// SHA-256 digests of the account's unspent recovery codes
    pub recovery_code_hashes: Vec<[u8; 32]>,
}

impl Account {
    /// Create an account snapshot with no factor enrollment material
    pub fn new(account_id: AccountId, email: Email, enabled_factors: Vec<FactorId>) -> Self {
        Self {
            account_id,
            email,
            enabled_factors,
            totp_secret: None,
            recovery_code_hashes: Vec::new(),
        }
    }

    /// Whether the given factor is enabled for this account
    pub fn has_factor(&self, factor_id: &FactorId) -> bool {
        self.enabled_factors.contains(factor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_factor() {
        let account = Account::new(
            AccountId::new("a-1"),
            Email::new("a@example.com").unwrap(),
            vec![FactorId::new("email-code"), FactorId::new("totp")],
        );

        assert!(account.has_factor(&FactorId::new("totp")));
        assert!(!account.has_factor(&FactorId::new("recovery-code")));
    }
}
