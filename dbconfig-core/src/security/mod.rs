//! Security utilities for salt and credential protection.
//!
//! # Security Guarantees
//! - Secrets are stored in `Zeroizing` containers for automatic memory
//!   clearing (see the `config` module)
//! - Only a SHA-256 fingerprint of the de-identification salt is ever
//!   persisted, never the salt itself

mod salt;

pub use salt::{SaltGuard, salt_fingerprint};
