//! # chalkline-git
//!
//! Turns a [`CommitDateSet`](chalkline_calendar::CommitDateSet) into a
//! local git history and pushes it to a remote.
//!
//! All git invocations go through the [`GitRunner`] trait. [`SystemGit`]
//! runs the real binary; tests substitute a recorder.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | A single git invocation and the runner trait |
//! | `commits` | Working tree setup and one commit per date |
//! | `push` | Remote configuration and force push |
//! | `error` | Error types |

mod command;
mod commits;
mod error;
mod push;

pub use command::{GitCommand, GitRunner, SystemGit};
pub use commits::{
    CommitConfig, CommitSummary, LOG_FILE, README_FILE, commit_message, make_commits,
    pinned_timestamp, readme_contents,
};
pub use error::GitError;
pub use push::{RemoteSpec, push};
