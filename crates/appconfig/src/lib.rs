//! # appconfig
//!
//! Answer model, config builder and document writers for the Shlink installer.
//!
//! The installer collects [`Answers`] from the operator, turns them into a
//! [`GeneratedConfig`] with [`build_config`], and persists it through a
//! [`DocumentWriter`]. Nothing in this crate prompts or spawns processes.
//!
//! ## Example
//!
//! ```no_run
//! use appconfig::{
//!     Answers, ApplicationAnswers, DatabaseAnswers, DocumentWriter, FileWriter, Format,
//!     LanguageAnswers, UrlShortenerAnswers, build_config,
//! };
//!
//! let answers = Answers {
//!     database: DatabaseAnswers::Sqlite,
//!     url_shortener: UrlShortenerAnswers {
//!         schema: "https".into(),
//!         hostname: "s.example.com".into(),
//!         chars: String::new(),
//!     },
//!     language: LanguageAnswers { default: "en".into(), cli: "en".into() },
//!     application: ApplicationAnswers { secret: String::new() },
//! };
//!
//! let config = build_config(&answers, &mut rand::rng());
//! FileWriter::new(Format::Php)
//!     .write(&config, "config/params/generated_config.php".as_ref())
//!     .expect("write config");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod builder;
pub mod document;
pub mod error;
pub mod random;
pub mod types;
pub mod writer;

pub use builder::build_config;
pub use document::GeneratedConfig;
pub use error::{Error, Result};
pub use types::{
    Answers, ApplicationAnswers, DatabaseAnswers, DatabaseDriver, LanguageAnswers,
    SUPPORTED_LANGUAGES, ServerConnection, URL_SCHEMAS, UrlShortenerAnswers,
};
pub use writer::{DocumentWriter, FileWriter, Format};
