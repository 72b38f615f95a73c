//! Optional Data Transfer Services (DTS) connection configuration.

use serde::Serialize;
use zeroize::Zeroizing;

/// Connection parameters for the optional DTS database.
///
/// DTS keeps its own tables and may live on a different server than the
/// primary application database, even when the credentials happen to be the
/// same. Absent entirely when the feature is not configured.
///
/// # Security
/// The password lives in a `Zeroizing` container, is cleared from memory on
/// drop, and is never serialized or included in `Debug` output.
#[derive(Clone, Serialize)]
pub struct DtsConfig {
    /// DTS database host, optionally `host:port`.
    pub hostname: String,
    /// DTS database name.
    pub database: String,
    /// DTS database username.
    pub username: String,
    /// DTS database password (redacted everywhere, zeroed on drop).
    #[serde(skip_serializing)]
    pub password: Zeroizing<String>,
}

impl DtsConfig {
    /// The password value. Callers must not log or persist it.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for DtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtsConfig")
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

impl PartialEq for DtsConfig {
    fn eq(&self, other: &Self) -> bool {
        self.hostname == other.hostname
            && self.database == other.database
            && self.username == other.username
            && *self.password == *other.password
    }
}

impl Eq for DtsConfig {}
