//! Remote configuration and force push.

use std::path::Path;

use tracing::{debug, info};

use crate::command::{GitCommand, GitRunner};
use crate::error::GitError;

/// Name of the remote the history is pushed to.
const REMOTE_NAME: &str = "origin";

/// Where to push: an HTTPS remote with the access token embedded.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    host: String,
    owner: String,
    repo: String,
    token: String,
}

impl RemoteSpec {
    /// Creates a remote for `host/owner/repo.git` authenticated by `token`.
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    /// Returns the push URL, including the token.
    pub fn url(&self) -> String {
        format!(
            "https://{}@{}/{}/{}.git",
            self.token, self.host, self.owner, self.repo
        )
    }

    /// Returns the push URL with the token masked.
    pub fn redacted_url(&self) -> String {
        format!("https://***@{}/{}/{}.git", self.host, self.owner, self.repo)
    }

    /// Returns the browser URL of the repository.
    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repo)
    }
}

impl std::fmt::Debug for RemoteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSpec")
            .field("host", &self.host)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"***")
            .finish()
    }
}

/// Points `origin` at `remote` and force-pushes `branch` with upstream
/// tracking.
///
/// If `origin` already exists its URL is replaced.
///
/// # Errors
///
/// Returns the first git failure. A failing `remote add` is only an error
/// if the follow-up `remote set-url` also fails.
pub fn push<R: GitRunner>(
    runner: &mut R,
    repo_dir: &Path,
    remote: &RemoteSpec,
    branch: &str,
) -> Result<(), GitError> {
    let url = remote.url();
    let add = GitCommand::new(["remote", "add", REMOTE_NAME, url.as_str()]).with_secret(&remote.token);
    match runner.run(repo_dir, &add) {
        Ok(()) => {}
        Err(GitError::CommandFailed { .. }) => {
            debug!("remote already present, updating its url");
            let set_url = GitCommand::new(["remote", "set-url", REMOTE_NAME, url.as_str()])
                .with_secret(&remote.token);
            runner.run(repo_dir, &set_url)?;
        }
        Err(e) => return Err(e),
    }

    info!(remote = %remote.redacted_url(), branch, "pushing");
    let push = GitCommand::new(["push", "-u", REMOTE_NAME, branch, "-f"]).with_secret(&remote.token);
    runner.run(repo_dir, &push)?;
    info!("push complete");
    Ok(())
}
