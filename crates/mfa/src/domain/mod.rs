//! Domain Layer
//!
//! Entities, value objects, the factor capability and its variants, and
//! the port traits (secret store, delivery).

pub mod delivery;
pub mod entity;
pub mod factor;
pub mod registry;
pub mod repository;
pub mod value_object;

// Re-exports
pub use delivery::{Delivery, DeliveryError};
pub use entity::{Account, AccountId, ChallengeState};
pub use factor::{ChallengeRenderData, Factor, FactorDescriptor, FieldDefinition, ResponseFields};
pub use registry::FactorRegistry;
pub use repository::SecretStore;
