//! Working tree setup and one commit per date.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chalkline_calendar::CommitDateSet;
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::command::{GitCommand, GitRunner};
use crate::error::GitError;

/// Name of the README created in a fresh working tree.
pub const README_FILE: &str = "README.md";

/// File that receives one line per commit.
pub const LOG_FILE: &str = "log.txt";

/// Settings for [`make_commits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitConfig {
    branch: String,
    commit_time: NaiveTime,
}

impl CommitConfig {
    /// Creates a configuration with the given branch name.
    ///
    /// Commits are pinned to 12:00:00 unless changed with
    /// [`with_commit_time`](Self::with_commit_time).
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            commit_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }

    /// Sets the time of day used for author and committer timestamps.
    pub fn with_commit_time(mut self, time: NaiveTime) -> Self {
        self.commit_time = time;
        self
    }

    /// Returns the primary branch name.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the pinned time of day.
    pub fn commit_time(&self) -> NaiveTime {
        self.commit_time
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self::new("main")
    }
}

/// What [`make_commits`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Number of commits created.
    pub commits: usize,
    /// Whether `git init` was run.
    pub initialised: bool,
    /// Whether the README was written.
    pub readme_created: bool,
    /// Name of the primary branch.
    pub branch: String,
}

/// README contents for a working tree targeting `year`.
pub fn readme_contents(year: i32) -> String {
    format!(
        "# Contribution Graph Text - {year}\n\n\
         This repository was created to display text on the GitHub contribution graph."
    )
}

/// Commit message for `date`.
pub fn commit_message(date: NaiveDate) -> String {
    format!("Commit on {}", date.format("%Y-%m-%d"))
}

/// Timestamp handed to git for `date`, as `YYYY-MM-DDTHH:MM:SS` with no
/// offset.
pub fn pinned_timestamp(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Creates one commit per date in `repo_dir`, in order.
///
/// The directory, git repository and README are created when missing. For
/// every date a line is appended to [`LOG_FILE`], all changes are staged and
/// a commit is made with both author and committer dates pinned to that day.
/// The current branch is then renamed to the configured primary branch.
///
/// # Errors
///
/// Returns [`GitError::NoDates`] for an empty date set, and stops at the
/// first failing file operation or git command. Commits made before the
/// failure are left in place.
pub fn make_commits<R: GitRunner>(
    runner: &mut R,
    repo_dir: &Path,
    dates: &CommitDateSet,
    config: &CommitConfig,
) -> Result<CommitSummary, GitError> {
    if dates.is_empty() {
        return Err(GitError::NoDates);
    }

    fs::create_dir_all(repo_dir).map_err(|e| GitError::io(repo_dir, e))?;

    let initialised = !repo_dir.join(".git").exists();
    if initialised {
        info!(dir = %repo_dir.display(), "initialising git repository");
        runner.run(repo_dir, &GitCommand::new(["init"]))?;
    }

    let readme = repo_dir.join(README_FILE);
    let readme_created = !readme.exists();
    if readme_created {
        fs::write(&readme, readme_contents(dates.year())).map_err(|e| GitError::io(&readme, e))?;
    }

    let log_path = repo_dir.join(LOG_FILE);
    for (i, &date) in dates.iter().enumerate() {
        let day = date.format("%Y-%m-%d");
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| GitError::io(&log_path, e))?;
        writeln!(log, "Commit for {day}").map_err(|e| GitError::io(&log_path, e))?;

        runner.run(repo_dir, &GitCommand::new(["add", "."]))?;

        let stamp = pinned_timestamp(date, config.commit_time());
        let message = commit_message(date);
        let commit = GitCommand::new(["commit", "-m", message.as_str()])
            .with_env("GIT_AUTHOR_DATE", stamp.clone())
            .with_env("GIT_COMMITTER_DATE", stamp);
        runner.run(repo_dir, &commit)?;
        debug!(n = i + 1, total = dates.len(), %date, "commit created");
    }

    runner.run(
        repo_dir,
        &GitCommand::new(["branch", "-M", config.branch()]),
    )?;
    debug!(branch = config.branch(), "branch renamed");

    Ok(CommitSummary {
        commits: dates.len(),
        initialised,
        readme_created,
        branch: config.branch().to_string(),
    })
}
