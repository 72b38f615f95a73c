//! Setting names consumed by the resolver.
//!
//! Names are exact and case-sensitive. The primary and salt settings match
//! the variables the host application has always read from the environment;
//! SSL and DTS settings use the same names when supplied through a secrets
//! file or any other provider.

/// Primary database host, optionally `host:port` for a non-default port.
pub const DB_HOSTNAME: &str = "DB_HOSTNAME";
/// Primary database name.
pub const DB_NAME: &str = "DB_NAME";
/// Primary database username.
pub const DB_USERNAME: &str = "DB_USERNAME";
/// Primary database password.
pub const DB_PASSWORD: &str = "DB_PASSWORD";
/// De-identification salt used for data export hashing. Must never change
/// once set for a deployment.
pub const SALT: &str = "SALT";

/// Path to the client SSL key file.
pub const DB_SSL_KEY: &str = "DB_SSL_KEY";
/// Path to the client SSL certificate file.
pub const DB_SSL_CERT: &str = "DB_SSL_CERT";
/// Path to the certificate-authority file.
pub const DB_SSL_CA: &str = "DB_SSL_CA";
/// Path to a directory of trusted CA certificates.
pub const DB_SSL_CAPATH: &str = "DB_SSL_CAPATH";
/// Permitted cipher list for the encrypted connection.
pub const DB_SSL_CIPHER: &str = "DB_SSL_CIPHER";

/// Data Transfer Services database host.
pub const DTS_HOSTNAME: &str = "DTS_HOSTNAME";
/// Data Transfer Services database name.
pub const DTS_DB: &str = "DTS_DB";
/// Data Transfer Services database username.
pub const DTS_USERNAME: &str = "DTS_USERNAME";
/// Data Transfer Services database password.
pub const DTS_PASSWORD: &str = "DTS_PASSWORD";

/// The settings that must be present and non-empty for a usable
/// configuration.
pub const REQUIRED: &[&str] = &[DB_HOSTNAME, DB_NAME, DB_USERNAME, DB_PASSWORD, SALT];
