//! Error types with credential sanitization.
//!
//! All error types in this module ensure that passwords, salts, and other
//! sensitive setting values are never exposed in error messages, logs, or
//! any output format. Errors carry setting *names*, never setting values.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration resolution.
///
/// # Security
/// Error messages name the offending setting but never include its value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting was absent or empty.
    #[error("required setting '{variable}' is missing or empty")]
    MissingConfiguration {
        /// Name of the absent setting (e.g. `DB_HOSTNAME`).
        variable: String,
    },

    /// A partial SSL bundle was supplied. The key, certificate, and
    /// certificate-authority paths must be configured together.
    #[error("incomplete SSL bundle: missing {missing:?} (key, certificate, and CA must be set together)")]
    InvalidSslBundle {
        /// Names of the unset bundle members.
        missing: Vec<String>,
    },

    /// Some but not all Data Transfer Services settings were supplied.
    #[error("incomplete DTS configuration: missing {missing:?} (all DTS settings must be set together)")]
    IncompleteDtsConfig {
        /// Names of the unset DTS settings.
        missing: Vec<String>,
    },

    /// The de-identification salt differs from the value first seen by this
    /// deployment. Changing the salt invalidates prior de-identified exports.
    #[error("de-identification salt does not match the fingerprint recorded at {}", path.display())]
    SaltChanged {
        /// Location of the persisted salt fingerprint.
        path: PathBuf,
    },

    /// Generic configuration failure (secrets-file parsing, logging setup).
    #[error("configuration error: {message}")]
    Configuration {
        /// Sanitized description of the failure.
        message: String,
    },

    /// I/O operation failed.
    #[error("I/O operation failed: {context}")]
    Io {
        /// What the operation was trying to do.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with `ConfigError`.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a missing-configuration error for the named setting.
    pub fn missing(variable: impl Into<String>) -> Self {
        Self::MissingConfiguration {
            variable: variable.into(),
        }
    }

    /// Creates an invalid-SSL-bundle error naming the unset members.
    pub fn invalid_ssl_bundle(missing: Vec<String>) -> Self {
        Self::InvalidSslBundle { missing }
    }

    /// Creates an incomplete-DTS error naming the unset settings.
    pub fn incomplete_dts(missing: Vec<String>) -> Self {
        Self::IncompleteDtsConfig { missing }
    }

    /// Creates a salt-changed error for the given fingerprint path.
    pub fn salt_changed(path: PathBuf) -> Self {
        Self::SaltChanged { path }
    }

    /// Creates a generic configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Name of the setting this error concerns, when the error is about a
    /// single setting.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::MissingConfiguration { variable } => Some(variable),
            _ => None,
        }
    }
}
