//! Integration tests for the secrets-file provider and layering.
//!
//! Tests that touch the process environment carry `env` in their name so
//! nextest keeps them sequential; the parser property tests run in
//! parallel against temporary files only.

#![allow(clippy::unwrap_used)]

use dbconfig_core::{ConfigResolver, FileSource, SettingsSource, keys};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt::Write as _;

fn write_secrets(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn test_env_secrets_file_supplies_whole_variable_set() {
    let file = write_secrets(
        "# database connection values kept outside the web-served tree\n\
         DB_HOSTNAME=db.internal\n\
         DB_NAME=redcap\n\
         DB_USERNAME=app\n\
         DB_PASSWORD=hunter2\n\
         SALT=ab12cd34\n",
    );

    temp_env::with_vars(
        [
            (keys::DB_HOSTNAME, None::<&str>),
            (keys::DB_NAME, None),
            (keys::DB_USERNAME, None),
            (keys::DB_PASSWORD, None),
            (keys::SALT, None),
        ],
        || {
            let resolver = ConfigResolver::from_env_with_secrets_file(file.path()).unwrap();
            let config = resolver.resolve().unwrap();
            assert_eq!(config.hostname, "db.internal");
            assert_eq!(config.password(), "hunter2");
        },
    );
}

#[test]
fn test_env_secrets_file_overrides_environment() {
    let file = write_secrets("DB_PASSWORD=from-file\n");

    temp_env::with_vars(
        [
            (keys::DB_HOSTNAME, Some("db.example.com")),
            (keys::DB_NAME, Some("redcap")),
            (keys::DB_USERNAME, Some("app")),
            (keys::DB_PASSWORD, Some("from-environment")),
            (keys::SALT, Some("ab12cd34")),
        ],
        || {
            let resolver = ConfigResolver::from_env_with_secrets_file(file.path()).unwrap();
            let config = resolver.resolve().unwrap();
            // The file wins for the key it defines...
            assert_eq!(config.password(), "from-file");
            // ...and the environment still supplies the rest.
            assert_eq!(config.hostname, "db.example.com");
            assert_eq!(config.username, "app");
        },
    );
}

#[test]
fn test_missing_secrets_file_fails_construction() {
    let result = ConfigResolver::from_env_with_secrets_file("/nonexistent/db-secrets");
    assert!(result.is_err());
}

proptest! {
    /// Round trip: any well-formed assignment set written to disk loads back
    /// exactly, key for key.
    #[test]
    fn prop_file_source_round_trips(
        entries in proptest::collection::hash_map(
            "[A-Z][A-Z0-9_]{0,14}",
            "[A-Za-z0-9:/\\._-]{0,24}",
            0..16,
        )
    ) {
        let mut contents = String::new();
        for (key, value) in &entries {
            writeln!(contents, "{key}={value}").unwrap();
        }
        let file = write_secrets(&contents);
        let source = FileSource::load(file.path()).unwrap();

        prop_assert_eq!(source.len(), entries.len());
        for (key, value) in &entries {
            let got = source.get(key);
            prop_assert_eq!(got.as_deref(), Some(value.as_str()));
        }
    }

    /// Surrounding whitespace around keys and values is insignificant.
    #[test]
    fn prop_file_source_trims_whitespace(
        key in "[A-Z][A-Z0-9_]{0,14}",
        value in "[A-Za-z0-9:/\\._-]{1,24}",
        pad in " {0,3}",
    ) {
        let file = write_secrets(&format!("{pad}{key}{pad}={pad}{value}{pad}\n"));
        let source = FileSource::load(file.path()).unwrap();
        let got = source.get(&key);
        prop_assert_eq!(got.as_deref(), Some(value.as_str()));
    }
}

#[test]
fn test_resolver_over_in_memory_map_matches_file_source() {
    let file = write_secrets(
        "DB_HOSTNAME=db.internal\nDB_NAME=redcap\nDB_USERNAME=app\nDB_PASSWORD=pw\nSALT=ab12cd34\n",
    );
    let from_file = ConfigResolver::new(FileSource::load(file.path()).unwrap())
        .resolve()
        .unwrap();

    let map: HashMap<String, String> = [
        (keys::DB_HOSTNAME, "db.internal"),
        (keys::DB_NAME, "redcap"),
        (keys::DB_USERNAME, "app"),
        (keys::DB_PASSWORD, "pw"),
        (keys::SALT, "ab12cd34"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let from_map = ConfigResolver::new(map).resolve().unwrap();

    assert_eq!(from_file, from_map);
}
