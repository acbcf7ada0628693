//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;

use chalkline_git::CommitConfig;

use crate::config::GitToml;

/// Parses an `HH:MM:SS` time of day.
pub fn parse_commit_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .with_context(|| format!("invalid commit_time {s:?}, expected HH:MM:SS"))
}

/// Builds a `CommitConfig` from the `[git]` section.
pub fn build_commit_config(git: &GitToml) -> Result<CommitConfig> {
    let branch = git.branch.trim();
    if branch.is_empty() {
        bail!("git.branch must not be empty");
    }
    Ok(CommitConfig::new(branch).with_commit_time(parse_commit_time(&git.commit_time)?))
}
