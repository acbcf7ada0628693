//! HTTP client for the repository host.

use tracing::{debug, info, warn};

use crate::error::HostingError;
use crate::request::{CreateOutcome, CreateRepo};

/// GitHub's public REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github.v3+json";

/// Something that can create a repository for the authenticated user.
pub trait RepoHost {
    /// Issues one repository-creation request.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError`] only when no response was obtained. A
    /// response with a non-success status is reported as
    /// [`CreateOutcome::Rejected`].
    fn create_repository(&self, request: &CreateRepo) -> Result<CreateOutcome, HostingError>;
}

/// Blocking GitHub REST client authenticated by a personal access token.
pub struct GitHubClient {
    api_base: String,
    token: String,
    agent: ureq::Agent,
}

impl GitHubClient {
    /// Creates a client for `api_base` (without trailing slash) using
    /// `token`.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.into(),
            agent: ureq::AgentBuilder::new()
                .user_agent(concat!("chalkline/", env!("CARGO_PKG_VERSION")))
                .build(),
        }
    }

    /// Returns the endpoint for creating repositories.
    pub fn create_url(&self) -> String {
        format!("{}/user/repos", self.api_base)
    }

    /// Returns the `Authorization` header value.
    pub fn authorization(&self) -> String {
        format!("token {}", self.token)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base", &self.api_base)
            .field("token", &"***")
            .finish()
    }
}

impl RepoHost for GitHubClient {
    fn create_repository(&self, request: &CreateRepo) -> Result<CreateOutcome, HostingError> {
        let url = self.create_url();
        let body = serde_json::to_value(request).map_err(|e| HostingError::Encode {
            reason: e.to_string(),
        })?;
        debug!(%url, name = %request.name, "creating repository");

        let outcome = match self
            .agent
            .post(&url)
            .set("Authorization", &self.authorization())
            .set("Accept", ACCEPT)
            .send_json(body)
        {
            Ok(response) => {
                let status = response.status();
                CreateOutcome::from_response(status, read_body(response))
            }
            Err(ureq::Error::Status(status, response)) => {
                CreateOutcome::from_response(status, read_body(response))
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(HostingError::Transport {
                    url,
                    reason: transport.to_string(),
                });
            }
        };

        match &outcome {
            CreateOutcome::Created => info!(name = %request.name, "repository created"),
            CreateOutcome::Rejected { status, body } => {
                warn!(name = %request.name, status, %body, "repository creation rejected");
            }
        }
        Ok(outcome)
    }
}

/// Returns the response body, or a placeholder naming the read error.
fn read_body(response: ureq::Response) -> String {
    response.into_string().unwrap_or_else(|e| {
        debug!(error = %e, "failed to read response body");
        format!("<unreadable response body: {e}>")
    })
}
