//! Layered settings providers.
//!
//! Configuration is resolved from named key/value settings. Settings can come
//! from the process environment, from an optional secrets file kept outside
//! the web-served tree, or from an in-memory map. Providers are stacked in an
//! ordered chain where later providers override earlier ones for the same
//! key, so a deployment can supply baseline values in the environment and
//! override them from a secrets file.
//!
//! # Security
//! Providers return setting values only to the resolver. Parse errors for the
//! secrets file report line numbers, never line content, so malformed lines
//! cannot leak credentials into logs.

use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A named key/value settings provider.
///
/// Implementations must be pure lookups: no caching of stale values beyond
/// their own load time, no side effects on `get`.
pub trait SettingsSource {
    /// Returns the value for `key`, or `None` when the key is not present.
    ///
    /// An empty string is a present-but-empty value, distinct from `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Short human-readable description of the provider, used in log output.
    fn describe(&self) -> &str;
}

/// Settings provider backed by the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Creates a new environment-backed provider.
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        // A variable set to the empty string is Ok("") and stays distinct
        // from an unset variable. Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }

    fn describe(&self) -> &str {
        "process environment"
    }
}

/// Settings provider backed by a `KEY=VALUE` secrets file.
///
/// The file format is one assignment per line. Blank lines and lines starting
/// with `#` are ignored. Whitespace around the key and the value is trimmed.
/// The file is read once at load time; later changes on disk are not seen.
///
/// # Example
/// ```text
/// # /etc/app/db-secrets
/// DB_HOSTNAME=db.internal:3307
/// DB_PASSWORD=hunter2
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileSource {
    /// Loads a secrets file into memory.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Configuration` for a line without a `=` separator or
    /// with an empty key. Error messages name the line number only.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path)
            .map_err(|e| ConfigError::io(format!("reading secrets file {}", path.display()), e))?;

        let mut values = HashMap::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = index.saturating_add(1);
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::configuration(format!(
                    "secrets file {}: line {line_number} is not a KEY=VALUE assignment",
                    path.display()
                )));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::configuration(format!(
                    "secrets file {}: line {line_number} has an empty key",
                    path.display()
                )));
            }
            values.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self { path, values })
    }

    /// Path the secrets were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of settings loaded from the file.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the file supplied no settings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsSource for FileSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn describe(&self) -> &str {
        "secrets file"
    }
}

/// In-memory settings, mainly for programmatic construction and tests.
impl SettingsSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn describe(&self) -> &str {
        "in-memory map"
    }
}

/// Ordered chain of settings providers.
///
/// Lookup walks the chain from the most recently pushed provider to the
/// first, so later providers override earlier ones for the same key. A key
/// absent in a later provider falls through to earlier ones.
#[derive(Default)]
pub struct Layered {
    sources: Vec<Box<dyn SettingsSource + Send + Sync>>,
}

impl Layered {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider; it overrides every provider pushed before it.
    #[must_use]
    pub fn with_source(mut self, source: impl SettingsSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SettingsSource for Layered {
    fn get(&self, key: &str) -> Option<String> {
        self.sources.iter().rev().find_map(|source| source.get(key))
    }

    fn describe(&self) -> &str {
        "layered providers"
    }
}

impl std::fmt::Debug for Layered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layered")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.describe()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
