//! Infrastructure Layer
//!
//! Reference implementations of the domain port traits.

pub mod memory;

pub use memory::InMemorySecretStore;
