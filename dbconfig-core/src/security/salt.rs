//! Write-once guard for the de-identification salt.
//!
//! The salt is mixed into the hash function when exporting de-identified
//! data. Changing it after exports have been produced silently invalidates
//! every prior export, so deployments must treat it as write-once. A
//! stateless resolver cannot enforce that on its own; this guard persists a
//! SHA-256 fingerprint of the first-seen value and compares it on every
//! subsequent startup, failing loudly on mismatch.
//!
//! # Security
//! Only the fingerprint is written to disk; the raw salt never leaves
//! process memory.

use crate::error::{ConfigError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Computes the lowercase-hex SHA-256 fingerprint of a salt value.
pub fn salt_fingerprint(salt: &str) -> String {
    format!("{:x}", Sha256::digest(salt.as_bytes()))
}

/// Persistent check that the salt has not changed since first use.
#[derive(Debug, Clone)]
pub struct SaltGuard {
    state_path: PathBuf,
}

impl SaltGuard {
    /// Creates a guard backed by the given fingerprint file.
    ///
    /// The file does not need to exist yet; the first successful
    /// [`verify`](Self::verify) creates it.
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    /// Location of the persisted fingerprint.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Verifies the salt against the recorded fingerprint.
    ///
    /// On the first run the fingerprint is recorded and the call succeeds.
    /// On later runs the salt must hash to the recorded fingerprint.
    ///
    /// # Errors
    /// - `SaltChanged` when the fingerprint does not match
    /// - `Io` when the fingerprint file cannot be read or written
    pub fn verify(&self, salt: &str) -> Result<()> {
        let fingerprint = salt_fingerprint(salt);

        match fs::read_to_string(&self.state_path) {
            Ok(recorded) => {
                if recorded.trim() == fingerprint {
                    Ok(())
                } else {
                    Err(ConfigError::salt_changed(self.state_path.clone()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => self.record(&fingerprint),
            Err(e) => Err(ConfigError::io(
                format!("reading salt fingerprint {}", self.state_path.display()),
                e,
            )),
        }
    }

    /// Records the fingerprint for the first-seen salt.
    fn record(&self, fingerprint: &str) -> Result<()> {
        fs::write(&self.state_path, format!("{fingerprint}\n")).map_err(|e| {
            ConfigError::io(
                format!("writing salt fingerprint {}", self.state_path.display()),
                e,
            )
        })
    }
}
