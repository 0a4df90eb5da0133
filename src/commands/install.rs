//! Install command - the interactive installation wizard
//!
//! Drops any cached config, asks the operator about the database, URL
//! shortener, language and application, writes the generated config, then
//! provisions the database. Provisioning stops at the first failed step and
//! nothing already applied is rolled back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use appconfig::{
    Answers, ApplicationAnswers, DatabaseAnswers, DatabaseDriver, DocumentWriter, FileWriter,
    LanguageAnswers, SUPPORTED_LANGUAGES, ServerConnection, URL_SCHEMAS, UrlShortenerAnswers,
    build_config,
};
use rand::Rng;
use serde::Deserialize;

use crate::Context as AppContext;
use crate::cli::InstallArgs;
use crate::prompt::{Prompter, TerminalPrompter, ask, choose};
use crate::runner::{CommandOutput, ProcessRunner, ShellRunner};
use crate::settings::{SETTINGS_FILE, Settings};
use crate::ui;

/// Appended to a step's failure message when the detail is hidden
pub const VERBOSE_HINT: &str = "Run this command with -v to see specific error info.";

// ============================================================================
// Provisioning Steps
// ============================================================================

/// One external command needed to bring the database into a usable state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvisioningStep {
    /// Progress line printed before the command runs
    pub title: String,
    pub command: String,
    /// Shown when the command fails and verbose output is off
    pub failure_message: String,
}

impl ProvisioningStep {
    fn new(title: &str, command: &str, failure_message: &str) -> Self {
        Self {
            title: title.to_string(),
            command: command.to_string(),
            failure_message: failure_message.to_string(),
        }
    }
}

/// Schema creation, migrations, proxy generation.
pub fn default_steps() -> Vec<ProvisioningStep> {
    vec![
        ProvisioningStep::new(
            "Initializing database...",
            "php vendor/bin/doctrine.php orm:schema-tool:create",
            "Error generating database.",
        ),
        ProvisioningStep::new(
            "Updating database...",
            "php vendor/bin/doctrine-migrations migrations:migrate",
            "Error updating database.",
        ),
        ProvisioningStep::new(
            "Generating proxies...",
            "php vendor/bin/doctrine.php orm:generate-proxies",
            "Error generating proxies.",
        ),
    ]
}

// ============================================================================
// Entry Point
// ============================================================================

pub fn run(ctx: &AppContext, args: InstallArgs) -> Result<()> {
    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(|| args.root.join(SETTINGS_FILE));
    let mut settings = Settings::load(&settings_path)?;

    if let Some(output) = args.output {
        settings.config_file = output;
    }
    if let Some(format) = args.format {
        settings.format = Some(format.into());
    }
    if args.skip_provisioning {
        settings.steps.clear();
    }

    let writer = FileWriter::new(settings.resolve_format()?);
    let runner = ShellRunner::new(&args.root);
    log::debug!(
        "Installing into {} ({} config)",
        runner.dir().display(),
        writer.format()
    );

    let installer = Installer {
        prompter: &TerminalPrompter,
        writer: &writer,
        runner: &runner,
        cache_file: args.root.join(&settings.cache_file),
        config_file: args.root.join(&settings.config_file),
        steps: settings.steps,
        verbose: ctx.verbose > 0 && !ctx.quiet,
    };

    match installer.install(&mut rand::rng())? {
        InstallOutcome::Completed => Ok(()),
        InstallOutcome::Halted { step, message } => {
            anyhow::bail!("Installation halted at step {}: {}", step + 1, message)
        }
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// How an install run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Config written and every provisioning step succeeded
    Completed,
    /// Provisioning step `step` (zero-based) failed; later steps were not run
    Halted { step: usize, message: String },
}

/// Result of trying to drop the cached config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCleanup {
    Absent,
    Removed,
    Failed(String),
}

/// Everything one install run needs, threaded through each phase.
pub struct Installer<'a> {
    pub prompter: &'a dyn Prompter,
    pub writer: &'a dyn DocumentWriter,
    pub runner: &'a dyn ProcessRunner,
    pub cache_file: PathBuf,
    pub config_file: PathBuf,
    pub steps: Vec<ProvisioningStep>,
    pub verbose: bool,
}

impl Installer<'_> {
    pub fn install<R: Rng>(&self, rng: &mut R) -> Result<InstallOutcome> {
        ui::banner();

        if let CacheCleanup::Failed(reason) = remove_cached_config(&self.cache_file) {
            log::warn!("Could not delete {}: {}", self.cache_file.display(), reason);
        }

        let answers = self.collect_answers()?;
        log::debug!("Database driver: {}", answers.database.driver());

        let config = build_config(&answers, rng);
        self.writer
            .write(&config, &self.config_file)
            .with_context(|| format!("Could not write {}", self.config_file.display()))?;
        ui::success("Custom configuration properly generated!");
        println!();

        Ok(self.provision())
    }

    /// Run every prompting phase, in order.
    pub fn collect_answers(&self) -> Result<Answers> {
        Ok(Answers {
            database: ask_database(self.prompter)?,
            url_shortener: ask_url_shortener(self.prompter)?,
            language: ask_language(self.prompter)?,
            application: ask_application(self.prompter)?,
        })
    }

    /// Run the provisioning steps, stopping at the first failure.
    pub fn provision(&self) -> InstallOutcome {
        for (index, step) in self.steps.iter().enumerate() {
            ui::info(&step.title);
            let output = self.runner.run(&step.command);
            if output.success {
                ui::success("Success!");
                continue;
            }

            self.report_failure(step, &output);
            return InstallOutcome::Halted {
                step: index,
                message: step.failure_message.clone(),
            };
        }
        InstallOutcome::Completed
    }

    fn report_failure(&self, step: &ProvisioningStep, output: &CommandOutput) {
        let mut lines = failure_lines(step, output, self.verbose).into_iter();
        if let Some(headline) = lines.next() {
            ui::error(&headline);
        }
        for line in lines {
            ui::dim(&line);
        }
    }
}

/// Text reported for a failed step: a headline, then captured output when verbose.
pub fn failure_lines(
    step: &ProvisioningStep,
    output: &CommandOutput,
    verbose: bool,
) -> Vec<String> {
    if !verbose {
        return vec![format!("    {}  {}", step.failure_message, VERBOSE_HINT)];
    }

    let mut lines = vec![format!("    {} ({})", step.failure_message, step.command)];
    lines.extend(output.output.lines().map(ToString::to_string));
    lines
}

/// Delete the cached derived config if it exists. Never fatal.
pub fn remove_cached_config(path: &Path) -> CacheCleanup {
    if !path.exists() {
        return CacheCleanup::Absent;
    }

    ui::line("Deleting old cached config...");
    match fs::remove_file(path) {
        Ok(()) => {
            ui::success("Success");
            CacheCleanup::Removed
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => CacheCleanup::Absent,
        Err(e) => {
            ui::warn(&format!(
                "Failed! You will have to manually delete the {} file to get new config applied.",
                path.display()
            ));
            CacheCleanup::Failed(e.to_string())
        }
    }
}

// ============================================================================
// Prompting Phases
// ============================================================================

pub fn ask_database(prompter: &dyn Prompter) -> Result<DatabaseAnswers> {
    ui::title("DATABASE");

    let labels = DatabaseDriver::labels();
    let label = choose(prompter, "Select database type", &labels, 0)?;
    let driver = DatabaseDriver::from_label(label)
        .with_context(|| format!("Unknown database type: {label}"))?;

    // SQLite only needs a file, which lives at a fixed location
    let server = if driver.requires_server() {
        Some(ServerConnection {
            name: ask(prompter, "Database name", Some("shlink"), false)?,
            user: ask(prompter, "Database username", None, false)?,
            password: ask(prompter, "Database password", None, false)?,
            host: ask(prompter, "Database host", Some("localhost"), false)?,
            port: ask(prompter, "Database port", driver.default_port(), false)?,
        })
    } else {
        None
    };

    Ok(DatabaseAnswers::new(driver, server))
}

pub fn ask_url_shortener(prompter: &dyn Prompter) -> Result<UrlShortenerAnswers> {
    ui::title("URL SHORTENER");

    Ok(UrlShortenerAnswers {
        schema: choose(
            prompter,
            "Select schema for generated short URLs",
            URL_SCHEMAS,
            0,
        )?
        .to_string(),
        hostname: ask(prompter, "Hostname for generated URLs", None, false)?,
        chars: ask(
            prompter,
            "Character set for generated short codes (leave empty to autogenerate one)",
            None,
            true,
        )?,
    })
}

pub fn ask_language(prompter: &dyn Prompter) -> Result<LanguageAnswers> {
    ui::title("LANGUAGE");

    Ok(LanguageAnswers {
        default: choose(
            prompter,
            "Select default language for the application in general",
            SUPPORTED_LANGUAGES,
            0,
        )?
        .to_string(),
        cli: choose(
            prompter,
            "Select default language for CLI executions",
            SUPPORTED_LANGUAGES,
            0,
        )?
        .to_string(),
    })
}

pub fn ask_application(prompter: &dyn Prompter) -> Result<ApplicationAnswers> {
    ui::title("APPLICATION");

    Ok(ApplicationAnswers {
        secret: ask(
            prompter,
            "Define a secret string that will be used to sign API tokens (leave empty to autogenerate one)",
            None,
            true,
        )?,
    })
}
