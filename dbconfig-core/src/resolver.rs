//! Configuration resolution from layered settings providers.
//!
//! The resolver is a pure, single-shot transform: the same settings always
//! produce the same `DatabaseConfig`. It performs no network calls and no
//! file I/O of its own (a secrets file is loaded once when the resolver is
//! constructed), so it is safe to call repeatedly and from multiple threads.

use crate::config::{DatabaseConfig, DtsConfig, SslConfig};
use crate::error::{ConfigError, Result};
use crate::keys;
use crate::source::{EnvSource, FileSource, Layered, SettingsSource};
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

/// Resolves a [`DatabaseConfig`] from named settings.
///
/// Two variants are offered. [`resolve`](Self::resolve) fails fast with the
/// name of any required setting that is absent or empty, so a broken
/// deployment surfaces at startup instead of as a confusing connection
/// failure later. [`resolve_lenient`](Self::resolve_lenient) reproduces the
/// historical behavior of defaulting required fields to empty strings and
/// deferring failure to the downstream connection attempt.
pub struct ConfigResolver {
    source: Box<dyn SettingsSource + Send + Sync>,
}

impl ConfigResolver {
    /// Creates a resolver over an arbitrary settings provider.
    pub fn new(source: impl SettingsSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Creates a resolver over the process environment.
    pub fn from_env() -> Self {
        Self::new(Layered::new().with_source(EnvSource::new()))
    }

    /// Creates a resolver over the process environment plus a secrets file.
    ///
    /// The secrets file supplies the same setting names and overrides the
    /// environment for any key it defines, so deployments can keep
    /// credentials outside the web-served tree.
    ///
    /// # Errors
    /// Returns an error if the secrets file cannot be read or parsed.
    pub fn from_env_with_secrets_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = FileSource::load(path)?;
        Ok(Self::new(
            Layered::new()
                .with_source(EnvSource::new())
                .with_source(file),
        ))
    }

    /// Resolves a complete configuration, failing fast on missing or
    /// inconsistent settings.
    ///
    /// # Errors
    /// - `MissingConfiguration` naming the first required setting that is
    ///   absent or empty
    /// - `InvalidSslBundle` when some but not all of key/cert/CA are set
    /// - `IncompleteDtsConfig` when some but not all DTS settings are set
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        let hostname = self.required(keys::DB_HOSTNAME)?;
        let database = self.required(keys::DB_NAME)?;
        let username = self.required(keys::DB_USERNAME)?;
        let password = Zeroizing::new(self.required(keys::DB_PASSWORD)?);
        let salt = Zeroizing::new(self.required(keys::SALT)?);

        let ssl = self.resolve_ssl();
        ssl.validate()?;

        let dts = self.resolve_dts()?;

        let config = DatabaseConfig {
            hostname,
            database,
            username,
            password,
            salt,
            ssl,
            dts,
        };

        debug!(
            source = self.source.describe(),
            hostname = %config.hostname,
            database = %config.database,
            ssl_enabled = config.ssl.is_enabled(),
            dts_enabled = config.dts_enabled(),
            "database configuration resolved"
        );

        Ok(config)
    }

    /// Resolves a configuration in the historical lenient mode.
    ///
    /// Required settings that are absent resolve to empty strings, the SSL
    /// bundle is not validated, and DTS is configured only when all four of
    /// its settings are present and non-empty. The call never fails; a
    /// configuration with empty credentials will fail at the downstream
    /// connection attempt instead.
    pub fn resolve_lenient(&self) -> DatabaseConfig {
        let present = |key| self.source.get(key).unwrap_or_default();

        DatabaseConfig {
            hostname: present(keys::DB_HOSTNAME),
            database: present(keys::DB_NAME),
            username: present(keys::DB_USERNAME),
            password: Zeroizing::new(present(keys::DB_PASSWORD)),
            salt: Zeroizing::new(present(keys::SALT)),
            ssl: self.resolve_ssl(),
            dts: Self::build_dts(self.dts_settings()),
        }
    }

    /// Looks up a required setting, rejecting absent and empty values.
    fn required(&self, key: &str) -> Result<String> {
        match self.source.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::missing(key)),
        }
    }

    /// Assembles the SSL bundle without validating it.
    fn resolve_ssl(&self) -> SslConfig {
        SslConfig {
            key_path: self.source.get(keys::DB_SSL_KEY).unwrap_or_default(),
            cert_path: self.source.get(keys::DB_SSL_CERT).unwrap_or_default(),
            ca_path: self.source.get(keys::DB_SSL_CA).unwrap_or_default(),
            ca_directory: self.source.get(keys::DB_SSL_CAPATH),
            cipher_list: self.source.get(keys::DB_SSL_CIPHER),
        }
    }

    /// The four DTS settings with their values, empty treated as absent.
    fn dts_settings(&self) -> [(&'static str, Option<String>); 4] {
        let lookup = |key| self.source.get(key).filter(|value: &String| !value.is_empty());
        [
            (keys::DTS_HOSTNAME, lookup(keys::DTS_HOSTNAME)),
            (keys::DTS_DB, lookup(keys::DTS_DB)),
            (keys::DTS_USERNAME, lookup(keys::DTS_USERNAME)),
            (keys::DTS_PASSWORD, lookup(keys::DTS_PASSWORD)),
        ]
    }

    /// Builds a DTS configuration when all four settings are present.
    fn build_dts(settings: [(&'static str, Option<String>); 4]) -> Option<DtsConfig> {
        let [(_, hostname), (_, database), (_, username), (_, password)] = settings;
        match (hostname, database, username, password) {
            (Some(hostname), Some(database), Some(username), Some(password)) => Some(DtsConfig {
                hostname,
                database,
                username,
                password: Zeroizing::new(password),
            }),
            _ => None,
        }
    }

    /// Resolves the optional DTS connection, rejecting partial sets.
    fn resolve_dts(&self) -> Result<Option<DtsConfig>> {
        let settings = self.dts_settings();

        if settings.iter().all(|(_, value)| value.is_none()) {
            return Ok(None);
        }

        let missing: Vec<String> = settings
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| (*key).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::incomplete_dts(missing));
        }

        Ok(Self::build_dts(settings))
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("source", &self.source.describe())
            .finish()
    }
}
