//! Database connection configuration resolution for host applications.
//!
//! This crate resolves the settings a host application needs at startup to
//! connect to its database: primary connection credentials, an optional
//! SSL/TLS bundle for the database link, the de-identification salt used by
//! data export hashing, and an optional secondary Data Transfer Services
//! (DTS) connection. Settings are read from an ordered chain of providers
//! (process environment, optional secrets file) and resolved into an
//! immutable [`DatabaseConfig`].
//!
//! # Security Guarantees
//! - Passwords and the salt live in zeroizing containers and are cleared
//!   from memory on drop
//! - No secret value is ever logged, serialized, or echoed in an error
//! - Only a fingerprint of the salt is persisted by the write-once guard
//!
//! # Architecture
//! - Layered provider pattern for settings lookup (later providers override
//!   earlier ones)
//! - Fail-fast resolution by default, with a lenient mode matching the
//!   historical empty-string behavior
//! - Comprehensive error handling with credential sanitization

pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod resolver;
pub mod security;
pub mod source;

// Re-export commonly used types
pub use config::{DatabaseConfig, DtsConfig, SslConfig};
pub use error::{ConfigError, Result};
pub use logging::init_logging;
pub use resolver::ConfigResolver;
pub use security::{SaltGuard, salt_fingerprint};
pub use source::{EnvSource, FileSource, Layered, SettingsSource};
