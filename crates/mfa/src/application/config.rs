//! Application Configuration
//!
//! Configuration for the MFA challenge framework.

use std::time::Duration;

/// MFA framework configuration
#[derive(Debug, Clone)]
pub struct MfaConfig {
    /// Number of groups in an emailed one-time code
    pub code_groups: usize,
    /// Characters per group
    pub code_group_len: usize,
    /// Optional challenge TTL checked at verification time. With `None`
    /// an issued code stays valid until consumed, re-issued, cancelled,
    /// or the session ends.
    pub code_ttl: Option<Duration>,
    /// Issuer label baked into TOTP provisioning and verification
    pub totp_issuer: String,
}

impl Default for MfaConfig {
    fn default() -> Self {
        Self {
            code_groups: 2,
            code_group_len: 4,
            code_ttl: None,
            totp_issuer: "mfa".to_string(),
        }
    }
}

impl MfaConfig {
    /// Config with a challenge TTL
    pub fn with_code_ttl(ttl: Duration) -> Self {
        Self {
            code_ttl: Some(ttl),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_code_format() {
        let config = MfaConfig::default();
        assert_eq!(config.code_groups, 2);
        assert_eq!(config.code_group_len, 4);
        assert!(config.code_ttl.is_none());
    }

    #[test]
    fn test_with_code_ttl() {
        let config = MfaConfig::with_code_ttl(Duration::from_secs(300));
        assert_eq!(config.code_ttl, Some(Duration::from_secs(300)));
    }
}
