//! SSL/TLS bundle configuration for the database link.

use crate::error::{ConfigError, Result};
use crate::keys;
use serde::Serialize;

/// Optional SSL/TLS parameters for the database connection.
///
/// The key, certificate, and certificate-authority paths default to the
/// empty string; `ca_directory` and `cipher_list` default to absent. The
/// distinction matters to downstream connection factories, which pass
/// empty strings through but omit absent parameters entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SslConfig {
    /// Path to the client key file (e.g. `/etc/mysql/ssl/client-key.pem`).
    pub key_path: String,
    /// Path to the client certificate file.
    pub cert_path: String,
    /// Path to the certificate-authority file.
    pub ca_path: String,
    /// Directory of trusted CA certificates, if configured.
    pub ca_directory: Option<String>,
    /// Permitted cipher list, if configured.
    pub cipher_list: Option<String>,
}

impl SslConfig {
    /// Whether any part of the key/cert/CA bundle is configured.
    pub fn is_enabled(&self) -> bool {
        !self.key_path.is_empty() || !self.cert_path.is_empty() || !self.ca_path.is_empty()
    }

    /// Validates the all-or-nothing bundle rule.
    ///
    /// An encrypted, mutually-authenticated connection needs the key, the
    /// certificate, and the CA file together. A partial bundle is a
    /// configuration mistake, not a weaker connection.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidSslBundle` naming the unset members when
    /// some but not all of key/cert/CA are configured.
    pub fn validate(&self) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut missing = Vec::new();
        if self.key_path.is_empty() {
            missing.push(keys::DB_SSL_KEY.to_string());
        }
        if self.cert_path.is_empty() {
            missing.push(keys::DB_SSL_CERT.to_string());
        }
        if self.ca_path.is_empty() {
            missing.push(keys::DB_SSL_CA.to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::invalid_ssl_bundle(missing))
        }
    }
}
