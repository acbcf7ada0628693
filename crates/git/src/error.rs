//! Error types for chalkline-git.

use std::path::PathBuf;

/// Error type for all fallible operations in the chalkline-git crate.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// Returned when asked to commit an empty date set.
    #[error("no commit dates provided")]
    NoDates,

    /// Returned when a file or directory in the working tree cannot be
    /// written.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the git binary cannot be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was executed.
        program: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when git exits unsuccessfully.
    #[error("`{command}` failed ({}): {stderr}", describe_status(status))]
    CommandFailed {
        /// The command line, with secrets redacted.
        command: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "killed by signal".to_string(),
    }
}

impl GitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitError::Io {
            path: path.into(),
            source,
        }
    }
}
