//! One-Time Code Value Object
//!
//! The emailed challenge secret: uppercase alphanumeric groups joined by
//! a separator (e.g. `WXYZ-1234`). Two 4-character groups over a 36-symbol
//! alphabet carry ~41 bits of entropy.
//!
//! The code never appears in `Debug` output, so challenge state can be
//! traced without leaking the secret.

use platform::crypto::{constant_time_eq, random_alphanumeric};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between code groups
const GROUP_SEPARATOR: char = '-';

/// One-time verification code
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Generate a fresh code of `groups` groups of `group_len` characters
    pub fn generate(groups: usize, group_len: usize) -> Self {
        let parts: Vec<String> = (0..groups).map(|_| random_alphanumeric(group_len)).collect();
        Self(parts.join(&GROUP_SEPARATOR.to_string()))
    }

    /// Wrap an already-generated code, applying normalization
    pub fn from_submitted(raw: &str) -> Self {
        Self(Self::normalize(raw))
    }

    /// Uppercase-normalize a submitted code
    fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Compare against a submitted code: exact on the full token after
    /// case normalization, in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        let submitted = Self::normalize(submitted);
        constant_time_eq(self.0.as_bytes(), submitted.as_bytes())
    }

    /// Expose the code for out-of-band delivery. This is the only read
    /// path; keep it out of logs.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeCode(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format() {
        let code = OneTimeCode::generate(2, 4);
        let text = code.reveal();
        assert_eq!(text.len(), 9);
        assert_eq!(text.chars().nth(4), Some('-'));
        assert!(
            text.chars()
                .all(|c| c == '-' || c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_matches_case_insensitive() {
        let code = OneTimeCode::generate(2, 4);
        let lowered = code.reveal().to_lowercase();
        assert!(code.matches(&lowered));
        assert!(code.matches(&format!("  {}  ", code.reveal())));
    }

    #[test]
    fn test_no_prefix_match() {
        let code = OneTimeCode::from_submitted("WXYZ-1234");
        assert!(!code.matches("WXYZ"));
        assert!(!code.matches("WXYZ-123"));
        assert!(!code.matches("WXYZ-12345"));
        assert!(code.matches("wxyz-1234"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let code = OneTimeCode::from_submitted("WXYZ-1234");
        let debug = format!("{:?}", code);
        assert!(!debug.contains("WXYZ"));
        assert_eq!(debug, "OneTimeCode(****)");
    }
}
