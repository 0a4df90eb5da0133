use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Combined stdout and stderr
    pub output: String,
}

impl CommandOutput {
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Something that can run a shell command to completion.
pub trait ProcessRunner {
    fn run(&self, command: &str) -> CommandOutput;
}

/// Runs commands through the platform shell from a fixed working directory.
pub struct ShellRunner {
    dir: PathBuf,
}

impl ShellRunner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandOutput {
        log::debug!("Running `{}` in {}", command, self.dir.display());

        match shell(command).current_dir(&self.dir).output() {
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                log::debug!("`{}` exited with {}", command, output.status);
                CommandOutput {
                    success: output.status.success(),
                    output: combined.trim_end().to_string(),
                }
            }
            Err(e) => CommandOutput::failed(format!("Failed to execute: {command}: {e}")),
        }
    }
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
