//! The resolved database configuration record.

use super::{DtsConfig, SslConfig};
use serde::Serialize;
use zeroize::Zeroizing;

/// Immutable database connection configuration, produced once at startup.
///
/// Constructed by [`ConfigResolver`](crate::ConfigResolver) and handed to the
/// host application's connection factory. The value never changes for the
/// lifetime of the process; reloading means resolving a fresh value.
///
/// # Security
/// The password and the de-identification salt live in `Zeroizing`
/// containers, are cleared from memory on drop, and are excluded from
/// `Debug`, `Display`, and serialized output.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use dbconfig_core::ConfigResolver;
///
/// let settings: HashMap<String, String> = [
///     ("DB_HOSTNAME", "db.example.com:3307"),
///     ("DB_NAME", "redcap"),
///     ("DB_USERNAME", "app"),
///     ("DB_PASSWORD", "secret"),
///     ("SALT", "ab12cd34"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let config = ConfigResolver::new(settings).resolve()?;
/// assert_eq!(config.host(), "db.example.com");
/// assert_eq!(config.port(), Some(3307));
/// # Ok::<(), dbconfig_core::ConfigError>(())
/// ```
#[derive(Clone, Serialize)]
pub struct DatabaseConfig {
    /// Database host, optionally `host:port` for a non-default port.
    pub hostname: String,
    /// Database name.
    pub database: String,
    /// Database username.
    pub username: String,
    /// Database password (redacted everywhere, zeroed on drop).
    #[serde(skip_serializing)]
    pub password: Zeroizing<String>,
    /// De-identification salt for data export hashing (redacted everywhere,
    /// zeroed on drop). Must never change once set for a deployment; see
    /// [`SaltGuard`](crate::security::SaltGuard).
    #[serde(skip_serializing)]
    pub salt: Zeroizing<String>,
    /// SSL/TLS bundle for the database link.
    pub ssl: SslConfig,
    /// Optional Data Transfer Services connection.
    pub dts: Option<DtsConfig>,
}

impl DatabaseConfig {
    /// The host portion of `hostname`, with any `:port` suffix removed.
    ///
    /// A suffix that does not parse as a port number is treated as part of
    /// the host. Bare IPv6 literals (`::1`) are taken whole; an IPv6 host
    /// with a port must use the bracketed form (`[::1]:3307`).
    pub fn host(&self) -> &str {
        self.split_host_port().0
    }

    /// The port encoded in `hostname`, when a `host:port` form was supplied.
    pub fn port(&self) -> Option<u16> {
        self.split_host_port().1
    }

    /// Splits `hostname` into host and port, both parses sharing one rule.
    fn split_host_port(&self) -> (&str, Option<u16>) {
        if let Some((host, port)) = self.hostname.rsplit_once(':') {
            let bracketed = host.starts_with('[') && host.ends_with(']');
            if !host.is_empty() && (bracketed || !host.contains(':')) {
                if let Ok(port) = port.parse() {
                    return (host, Some(port));
                }
            }
        }
        (&self.hostname, None)
    }

    /// The password value. Callers must not log or persist it.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The de-identification salt. Callers must not log or persist it; to
    /// enforce the write-once property, persist only its fingerprint via
    /// [`SaltGuard`](crate::security::SaltGuard).
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Whether the optional DTS connection is configured.
    pub fn dts_enabled(&self) -> bool {
        self.dts.is_some()
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"****")
            .field("salt", &"****")
            .field("ssl", &self.ssl)
            .field("dts", &self.dts)
            .finish()
    }
}

impl std::fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DatabaseConfig({}/{})", self.hostname, self.database)
        // Intentionally omit username and never include credentials
    }
}

impl PartialEq for DatabaseConfig {
    fn eq(&self, other: &Self) -> bool {
        self.hostname == other.hostname
            && self.database == other.database
            && self.username == other.username
            && *self.password == *other.password
            && *self.salt == *other.salt
            && self.ssl == other.ssl
            && self.dts == other.dts
    }
}

impl Eq for DatabaseConfig {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> DatabaseConfig {
        DatabaseConfig {
            hostname: "db.example.com:3307".into(),
            database: "redcap".into(),
            username: "app".into(),
            password: Zeroizing::new("secret".into()),
            salt: Zeroizing::new("ab12cd34".into()),
            ssl: SslConfig::default(),
            dts: None,
        }
    }

    #[test]
    fn test_host_and_port_split() {
        let config = sample();
        assert_eq!(config.host(), "db.example.com");
        assert_eq!(config.port(), Some(3307));
    }

    #[test]
    fn test_host_without_port() {
        let config = DatabaseConfig {
            hostname: "db.example.com".into(),
            ..sample()
        };
        assert_eq!(config.host(), "db.example.com");
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_bare_ipv6_literal_is_all_host() {
        let config = DatabaseConfig {
            hostname: "::1".into(),
            ..sample()
        };
        assert_eq!(config.host(), "::1");
        assert_eq!(config.port(), None);

        let config = DatabaseConfig {
            hostname: "2001:db8::7".into(),
            ..sample()
        };
        assert_eq!(config.host(), "2001:db8::7");
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_bracketed_ipv6_with_port_splits() {
        let config = DatabaseConfig {
            hostname: "[::1]:3307".into(),
            ..sample()
        };
        assert_eq!(config.host(), "[::1]");
        assert_eq!(config.port(), Some(3307));
    }

    #[test]
    fn test_non_numeric_suffix_stays_in_host() {
        let config = DatabaseConfig {
            hostname: "db.example.com:replica".into(),
            ..sample()
        };
        assert_eq!(config.host(), "db.example.com:replica");
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_debug_and_display_redact_secrets() {
        let config = sample();
        let debug = format!("{config:?}");
        let display = format!("{config}");
        assert!(debug.contains("db.example.com"));
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("ab12cd34"));
        assert!(display.contains("redcap"));
        assert!(!display.contains("secret"));
        assert!(!display.contains("app"));
    }

    #[test]
    fn test_serialized_output_omits_secrets() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("salt").is_none());
        assert_eq!(json["hostname"], "db.example.com:3307");
    }

    #[test]
    fn test_equality_covers_secret_fields() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);
        b.salt = Zeroizing::new("ff00ff00".into());
        assert_ne!(a, b);
    }
}
