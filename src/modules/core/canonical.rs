//! Canonical database configuration schema

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: i64 = 5432;
pub const DEFAULT_DATABASE: &str = "emaildb";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "";
pub const DEFAULT_SSLMODE: &str = "prefer";
pub const DEFAULT_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT: i64 = 30;

/// The one shape every recognized database config field is rewritten to.
///
/// The three tuning fields are optional so that connection-string inputs
/// can be normalized without inventing values for them (see
/// [`FieldPolicy`](crate::FieldPolicy)); the mapping-coercion path always
/// sets all eight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDbConfig {
    pub host: String,
    pub port: i64,
    pub database: String,
    pub user: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sslmode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<i64>,
}

impl CanonicalDbConfig {
    /// Connection parameters only, tuning fields unset
    pub fn sparse(
        host: impl Into<String>,
        port: i64,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            user: user.into(),
            password: password.into(),
            sslmode: None,
            max_connections: None,
            connect_timeout: None,
        }
    }

    /// Fill any unset tuning field with its default
    pub fn with_tuning_defaults(mut self) -> Self {
        self.sslmode.get_or_insert_with(|| DEFAULT_SSLMODE.to_string());
        self.max_connections.get_or_insert(DEFAULT_MAX_CONNECTIONS);
        self.connect_timeout.get_or_insert(DEFAULT_CONNECT_TIMEOUT);
        self
    }
}

impl Default for CanonicalDbConfig {
    fn default() -> Self {
        Self::sparse(
            DEFAULT_HOST,
            DEFAULT_PORT,
            DEFAULT_DATABASE,
            DEFAULT_USER,
            DEFAULT_PASSWORD,
        )
        .with_tuning_defaults()
    }
}
