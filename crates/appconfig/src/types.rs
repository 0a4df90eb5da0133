//! Answer model collected by the installer wizard.
//!
//! Each prompting phase produces one topic struct. The database topic is a
//! tagged variant over the driver so that the shape of the answers always
//! matches the driver that was picked.

use std::fmt;

/// Locales the application ships translations for. The first one is the default.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es"];

/// Schemas offered for generated short URLs. The first one is the default.
pub const URL_SCHEMAS: &[&str] = &["http", "https"];

// ============================================================================
// Database Driver
// ============================================================================

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseDriver {
    MySql,
    PostgreSql,
    Sqlite,
}

impl DatabaseDriver {
    /// All drivers, in the order they are offered. The first is the default.
    pub const ALL: [Self; 3] = [Self::MySql, Self::PostgreSql, Self::Sqlite];

    /// Human-readable label shown in the selection prompt
    pub fn label(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::Sqlite => "SQLite",
        }
    }

    /// Driver identifier written to `entity_manager.connection.driver`
    pub fn driver_id(self) -> &'static str {
        match self {
            Self::MySql => "pdo_mysql",
            Self::PostgreSql => "pdo_pgsql",
            Self::Sqlite => "pdo_sqlite",
        }
    }

    /// Whether the driver talks to a database server (host, port, credentials)
    /// rather than a local file.
    pub fn requires_server(self) -> bool {
        !matches!(self, Self::Sqlite)
    }

    /// Port offered when the operator leaves the port blank.
    ///
    /// Only meaningful for server drivers.
    pub fn default_port(self) -> Option<&'static str> {
        match self {
            Self::MySql => Some("3306"),
            Self::PostgreSql => Some("5432"),
            Self::Sqlite => None,
        }
    }

    /// Look a driver up by its prompt label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Labels for every driver, in prompt order
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.label()).collect()
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Answers
// ============================================================================

/// Connection settings for drivers backed by a database server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConnection {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    /// May be empty, in which case the driver's default port is used
    pub port: String,
}

/// Database topic answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseAnswers {
    MySql(ServerConnection),
    PostgreSql(ServerConnection),
    Sqlite,
}

impl DatabaseAnswers {
    /// Pair a driver with its connection settings.
    ///
    /// `server` is ignored for SQLite; for the other drivers a missing value
    /// yields empty connection fields.
    pub fn new(driver: DatabaseDriver, server: Option<ServerConnection>) -> Self {
        match driver {
            DatabaseDriver::MySql => Self::MySql(server.unwrap_or_default()),
            DatabaseDriver::PostgreSql => Self::PostgreSql(server.unwrap_or_default()),
            DatabaseDriver::Sqlite => Self::Sqlite,
        }
    }

    pub fn driver(&self) -> DatabaseDriver {
        match self {
            Self::MySql(_) => DatabaseDriver::MySql,
            Self::PostgreSql(_) => DatabaseDriver::PostgreSql,
            Self::Sqlite => DatabaseDriver::Sqlite,
        }
    }

    pub fn server(&self) -> Option<&ServerConnection> {
        match self {
            Self::MySql(conn) | Self::PostgreSql(conn) => Some(conn),
            Self::Sqlite => None,
        }
    }
}

/// URL shortener topic answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlShortenerAnswers {
    pub schema: String,
    pub hostname: String,
    /// Custom short-code alphabet. Empty means "generate one".
    pub chars: String,
}

/// Language topic answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAnswers {
    pub default: String,
    pub cli: String,
}

/// Application topic answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationAnswers {
    /// Secret used to sign API tokens. Empty means "generate one".
    pub secret: String,
}

/// Everything the operator answered during one wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub database: DatabaseAnswers,
    pub url_shortener: UrlShortenerAnswers,
    pub language: LanguageAnswers,
    pub application: ApplicationAnswers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_ids() {
        assert_eq!(DatabaseDriver::MySql.driver_id(), "pdo_mysql");
        assert_eq!(DatabaseDriver::PostgreSql.driver_id(), "pdo_pgsql");
        assert_eq!(DatabaseDriver::Sqlite.driver_id(), "pdo_sqlite");
    }

    #[test]
    fn test_driver_labels_round_trip_through_prompt() {
        for driver in DatabaseDriver::ALL {
            assert_eq!(DatabaseDriver::from_label(driver.label()), Some(driver));
        }
        assert_eq!(DatabaseDriver::from_label("Oracle"), None);
        assert_eq!(DatabaseDriver::labels(), vec!["MySQL", "PostgreSQL", "SQLite"]);
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(DatabaseDriver::MySql.default_port(), Some("3306"));
        assert_eq!(DatabaseDriver::PostgreSql.default_port(), Some("5432"));
        assert_eq!(DatabaseDriver::Sqlite.default_port(), None);
    }

    #[test]
    fn test_only_sqlite_skips_server() {
        assert!(DatabaseDriver::MySql.requires_server());
        assert!(DatabaseDriver::PostgreSql.requires_server());
        assert!(!DatabaseDriver::Sqlite.requires_server());
    }

    #[test]
    fn test_database_answers_drop_server_for_sqlite() {
        let conn = ServerConnection {
            host: "db".to_string(),
            ..Default::default()
        };
        let answers = DatabaseAnswers::new(DatabaseDriver::Sqlite, Some(conn.clone()));
        assert_eq!(answers, DatabaseAnswers::Sqlite);
        assert!(answers.server().is_none());

        let answers = DatabaseAnswers::new(DatabaseDriver::PostgreSql, Some(conn.clone()));
        assert_eq!(answers.driver(), DatabaseDriver::PostgreSql);
        assert_eq!(answers.server(), Some(&conn));
    }
}
