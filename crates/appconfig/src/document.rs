//! Typed shape of the generated configuration document.
//!
//! Field names follow the keys the application reads at startup, so the
//! serialized form of [`GeneratedConfig`] is the document itself.

use std::collections::BTreeMap;

use serde::Serialize;

/// `PDO::MYSQL_ATTR_INIT_COMMAND`
pub const PDO_MYSQL_ATTR_INIT_COMMAND: u32 = 1002;

/// Init command forcing a UTF-8 connection charset on MySQL
pub const MYSQL_UTF8_INIT_COMMAND: &str = "SET NAMES utf8";

/// Location of the SQLite database, relative to the install root
pub const SQLITE_DATABASE_PATH: &str = "data/database.sqlite";

/// Root of the generated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConfig {
    pub app_options: AppOptions,
    pub entity_manager: EntityManager,
    pub translator: LocaleOptions,
    pub cli: LocaleOptions,
    pub url_shortener: UrlShortenerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppOptions {
    pub secret_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityManager {
    pub connection: Connection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub driver: String,
    #[serde(flatten)]
    pub target: ConnectionTarget,
}

/// Driver-dependent part of the connection block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConnectionTarget {
    /// Local database file (SQLite)
    File { path: String },
    /// Database server
    Server {
        user: String,
        password: String,
        dbname: String,
        host: String,
        port: String,
        #[serde(rename = "driverOptions", skip_serializing_if = "BTreeMap::is_empty")]
        driver_options: BTreeMap<u32, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOptions {
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlShortenerOptions {
    pub domain: ShortDomain,
    pub shortcode_chars: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortDomain {
    pub schema: String,
    pub hostname: String,
}
