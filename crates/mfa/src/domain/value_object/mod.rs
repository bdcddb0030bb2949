//! Domain Value Objects
//!
//! Immutable value types for the MFA domain.

pub mod email;
pub mod factor_id;
pub mod one_time_code;
pub mod session_id;
pub mod totp_secret;

pub use email::Email;
pub use factor_id::FactorId;
pub use one_time_code::OneTimeCode;
pub use session_id::SessionId;
pub use totp_secret::TotpSecret;
