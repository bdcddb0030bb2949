//! Delivery Collaborator Trait
//!
//! Contract for the external out-of-band channel (mail transport, SMS
//! gateway) that hands a challenge to the user. The framework supplies a
//! stable template key and the template data; rendering and transport are
//! not its business.

use serde_json::Value;
use thiserror::Error;

/// Template key for the one-time-code email
pub const TEMPLATE_MFA_CODE_EMAIL: &str = "mfa_code_email";

/// Out-of-band send failure. Surfaced to the caller so the attempt can
/// retry issuance; never silently dropped.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The channel does not know the requested template
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// The send itself failed
    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Delivery collaborator trait
#[trait_variant::make(Delivery: Send)]
pub trait LocalDelivery {
    /// Send `template_key` rendered with `template_data` to `destination`
    async fn send(
        &self,
        destination: &str,
        template_key: &str,
        template_data: Value,
    ) -> Result<(), DeliveryError>;
}
