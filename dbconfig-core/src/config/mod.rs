//! Configuration records produced by the resolver.
//!
//! - `DatabaseConfig`: the immutable primary connection configuration
//! - `SslConfig`: optional SSL/TLS bundle for the database link
//! - `DtsConfig`: optional Data Transfer Services connection
//!
//! # Security
//! Secret fields (password, salt) are held in zeroizing containers and are
//! excluded from `Debug`, `Display`, and serialized output.

mod database;
mod dts;
mod ssl;

pub use database::DatabaseConfig;
pub use dts::DtsConfig;
pub use ssl::SslConfig;
