//! # chalkline-hosting
//!
//! One authenticated call to a GitHub-compatible REST API that creates the
//! repository the commit history is pushed to.
//!
//! A non-success status is not an error: it comes back as
//! [`CreateOutcome::Rejected`] so the caller decides whether to continue.
//! Only transport-level failures are [`HostingError`]s.

mod client;
mod error;
mod request;

pub use client::{DEFAULT_API_BASE, GitHubClient, RepoHost};
pub use error::HostingError;
pub use request::{CreateOutcome, CreateRepo, STATUS_ALREADY_EXISTS, STATUS_CREATED};
