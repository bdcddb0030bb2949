//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, secure randomness)
//! - One-time-code material generation
//! - Constant-time comparison

pub mod crypto;
