//! A single git invocation and the runner that executes it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use crate::error::GitError;

/// Arguments and extra environment for one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
    env: Vec<(String, String)>,
    secret: Option<String>,
}

impl GitCommand {
    /// Creates a command from its arguments (without the program name).
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            secret: None,
        }
    }

    /// Adds an environment variable for this invocation only.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Marks a substring that must never appear in logs or errors.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secret = Some(secret);
        }
        self
    }

    /// Returns the arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the extra environment variables.
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }
}

/// Renders `git <args>` with the secret replaced by `***`.
impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("git {}", self.args.join(" "));
        match &self.secret {
            Some(secret) => f.write_str(&line.replace(secret.as_str(), "***")),
            None => f.write_str(&line),
        }
    }
}

/// Executes git commands inside a working directory.
pub trait GitRunner {
    /// Runs `command` with `dir` as the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when git exits unsuccessfully and
    /// [`GitError::Spawn`] when it cannot be started.
    fn run(&mut self, dir: &Path, command: &GitCommand) -> Result<(), GitError>;
}

/// Runs the git binary found on `PATH` (or at a configured location).
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    /// Creates a runner for the given git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    fn run(&mut self, dir: &Path, command: &GitCommand) -> Result<(), GitError> {
        debug!(dir = %dir.display(), command = %command, "running git");
        let output = Command::new(&self.program)
            .args(command.args())
            .envs(command.env().iter().map(|(k, v)| (k, v)))
            .current_dir(dir)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        trace!(stdout = %String::from_utf8_lossy(&output.stdout).trim_end(), "git output");
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = match &command.secret {
                Some(secret) => stderr.replace(secret.as_str(), "***"),
                None => stderr,
            };
            return Err(GitError::CommandFailed {
                command: command.to_string(),
                status: output.status.code(),
                stderr,
            });
        }
        Ok(())
    }
}
