//! Maps collected [`Answers`] to a [`GeneratedConfig`].
//!
//! The builder does no I/O. Its only non-determinism is the random fallback
//! for the short-code alphabet and the application secret, and both draw from
//! the generator passed in by the caller.

use std::collections::BTreeMap;

use rand::Rng;

use crate::document::{
    AppOptions, Connection, ConnectionTarget, EntityManager, GeneratedConfig, LocaleOptions,
    MYSQL_UTF8_INIT_COMMAND, PDO_MYSQL_ATTR_INIT_COMMAND, SQLITE_DATABASE_PATH, ShortDomain,
    UrlShortenerOptions,
};
use crate::random;
use crate::types::{Answers, DatabaseAnswers, DatabaseDriver, ServerConnection};

/// Build the configuration document for a set of answers.
pub fn build_config<R: Rng>(answers: &Answers, rng: &mut R) -> GeneratedConfig {
    let url = &answers.url_shortener;

    GeneratedConfig {
        app_options: AppOptions {
            secret_key: resolve_secret(&answers.application.secret, rng),
        },
        entity_manager: EntityManager {
            connection: build_connection(&answers.database),
        },
        translator: LocaleOptions {
            locale: answers.language.default.clone(),
        },
        cli: LocaleOptions {
            locale: answers.language.cli.clone(),
        },
        url_shortener: UrlShortenerOptions {
            domain: ShortDomain {
                schema: url.schema.clone(),
                hostname: url.hostname.clone(),
            },
            shortcode_chars: resolve_shortcode_chars(&url.chars, rng),
        },
    }
}

/// Build the `entity_manager.connection` block for the chosen driver.
pub fn build_connection(database: &DatabaseAnswers) -> Connection {
    let driver = database.driver();
    let target = match database {
        DatabaseAnswers::Sqlite => ConnectionTarget::File {
            path: SQLITE_DATABASE_PATH.to_string(),
        },
        DatabaseAnswers::MySql(conn) => {
            let mut target = server_target(driver, conn);
            if let ConnectionTarget::Server { driver_options, .. } = &mut target {
                driver_options.insert(
                    PDO_MYSQL_ATTR_INIT_COMMAND,
                    MYSQL_UTF8_INIT_COMMAND.to_string(),
                );
            }
            target
        }
        DatabaseAnswers::PostgreSql(conn) => server_target(driver, conn),
    };

    Connection {
        driver: driver.driver_id().to_string(),
        target,
    }
}

fn server_target(driver: DatabaseDriver, conn: &ServerConnection) -> ConnectionTarget {
    ConnectionTarget::Server {
        user: conn.user.clone(),
        password: conn.password.clone(),
        dbname: conn.name.clone(),
        host: conn.host.clone(),
        port: resolve_port(driver, &conn.port),
        driver_options: BTreeMap::new(),
    }
}

/// Use the supplied port, or the driver default when it was left blank.
pub fn resolve_port(driver: DatabaseDriver, supplied: &str) -> String {
    if !supplied.is_empty() {
        return supplied.to_string();
    }
    // Every non-SQLite driver other than MySQL speaks the PostgreSQL default
    driver
        .default_port()
        .or(DatabaseDriver::PostgreSql.default_port())
        .unwrap_or_default()
        .to_string()
}

/// Use the supplied short-code alphabet, or a shuffled default one.
pub fn resolve_shortcode_chars<R: Rng>(supplied: &str, rng: &mut R) -> String {
    if supplied.is_empty() {
        random::generate_shortcode_chars(rng)
    } else {
        supplied.to_string()
    }
}

/// Use the supplied secret, or a freshly generated one.
pub fn resolve_secret<R: Rng>(supplied: &str, rng: &mut R) -> String {
    if supplied.is_empty() {
        random::generate_secret(rng)
    } else {
        supplied.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{DEFAULT_SHORTCODE_CHARS, SECRET_LENGTH};
    use crate::types::{ApplicationAnswers, LanguageAnswers, UrlShortenerAnswers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::{Value, json};

    fn server(port: &str) -> ServerConnection {
        ServerConnection {
            name: "shlink".to_string(),
            user: "root".to_string(),
            password: "s3cret".to_string(),
            host: "localhost".to_string(),
            port: port.to_string(),
        }
    }

    fn answers(database: DatabaseAnswers) -> Answers {
        Answers {
            database,
            url_shortener: UrlShortenerAnswers {
                schema: "https".to_string(),
                hostname: "s.test".to_string(),
                chars: "abc123".to_string(),
            },
            language: LanguageAnswers {
                default: "en".to_string(),
                cli: "es".to_string(),
            },
            application: ApplicationAnswers {
                secret: "fixed-secret".to_string(),
            },
        }
    }

    fn connection_json(database: DatabaseAnswers) -> Value {
        serde_json::to_value(build_connection(&database)).unwrap()
    }

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_sqlite_connection_has_only_driver_and_path() {
        assert_eq!(
            connection_json(DatabaseAnswers::Sqlite),
            json!({ "driver": "pdo_sqlite", "path": "data/database.sqlite" })
        );
    }

    #[test]
    fn test_postgres_connection_fields() {
        let value = connection_json(DatabaseAnswers::PostgreSql(server("6432")));
        assert_eq!(
            keys(&value),
            vec!["dbname", "driver", "host", "password", "port", "user"]
        );
        assert_eq!(value["driver"], "pdo_pgsql");
        assert_eq!(value["port"], "6432");
        assert_eq!(value["dbname"], "shlink");
        assert!(value.get("path").is_none());
        assert!(value.get("driverOptions").is_none());
    }

    #[test]
    fn test_mysql_adds_utf8_init_command() {
        let value = connection_json(DatabaseAnswers::MySql(server("")));
        assert_eq!(
            keys(&value),
            vec!["dbname", "driver", "driverOptions", "host", "password", "port", "user"]
        );
        assert_eq!(value["host"], "localhost");
        assert_eq!(value["port"], "3306");
        assert_eq!(value["driverOptions"], json!({ "1002": "SET NAMES utf8" }));
    }

    #[test]
    fn test_blank_port_defaults() {
        assert_eq!(resolve_port(DatabaseDriver::MySql, ""), "3306");
        assert_eq!(resolve_port(DatabaseDriver::PostgreSql, ""), "5432");
        assert_eq!(resolve_port(DatabaseDriver::MySql, "3307"), "3307");
    }

    #[test]
    fn test_top_level_sections() {
        let config = build_config(&answers(DatabaseAnswers::Sqlite), &mut rand::rng());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            keys(&value),
            vec!["app_options", "cli", "entity_manager", "translator", "url_shortener"]
        );
        assert_eq!(value["app_options"]["secret_key"], "fixed-secret");
        assert_eq!(value["translator"]["locale"], "en");
        assert_eq!(value["cli"]["locale"], "es");
        assert_eq!(value["url_shortener"]["domain"]["schema"], "https");
        assert_eq!(value["url_shortener"]["domain"]["hostname"], "s.test");
        assert_eq!(value["url_shortener"]["shortcode_chars"], "abc123");
    }

    #[test]
    fn test_fully_answered_build_is_deterministic() {
        let input = answers(DatabaseAnswers::MySql(server("3306")));
        let first = serde_json::to_string(&build_config(&input, &mut StdRng::seed_from_u64(1)));
        let second = serde_json::to_string(&build_config(&input, &mut StdRng::seed_from_u64(2)));
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_blank_chars_are_a_permuted_default_alphabet() {
        let mut rng = StdRng::seed_from_u64(99);
        let chars = resolve_shortcode_chars("", &mut rng);

        let mut got: Vec<char> = chars.chars().collect();
        let mut want: Vec<char> = DEFAULT_SHORTCODE_CHARS.chars().collect();
        got.sort_unstable();
        want.sort_unstable();
        assert!(!chars.is_empty());
        assert_eq!(got, want);
    }

    #[test]
    fn test_supplied_values_win_over_generation() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(resolve_shortcode_chars("xyz", &mut rng), "xyz");
        assert_eq!(resolve_secret("keep-me", &mut rng), "keep-me");
    }

    #[test]
    fn test_blank_secret_is_generated() {
        let mut input = answers(DatabaseAnswers::Sqlite);
        input.application.secret.clear();

        let a = build_config(&input, &mut StdRng::seed_from_u64(10));
        let b = build_config(&input, &mut StdRng::seed_from_u64(11));
        assert_eq!(a.app_options.secret_key.len(), SECRET_LENGTH);
        assert_ne!(a.app_options.secret_key, b.app_options.secret_key);
    }
}
