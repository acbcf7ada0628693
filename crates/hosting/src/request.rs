//! Repository creation request and its outcome.

use serde::Serialize;

/// Status returned when the repository was created.
pub const STATUS_CREATED: u16 = 201;

/// Status returned when the request is well-formed but unprocessable,
/// typically because the repository already exists.
pub const STATUS_ALREADY_EXISTS: u16 = 422;

/// JSON body of `POST /user/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepo {
    /// Repository name.
    pub name: String,
    /// Short description shown on the repository page.
    pub description: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether the host should create an initial commit.
    pub auto_init: bool,
}

impl CreateRepo {
    /// Request for a public, empty repository named after `year`.
    pub fn for_year(year: &str) -> Self {
        Self {
            name: year.to_string(),
            description: format!("Contribution Graph Text - {year}"),
            private: false,
            auto_init: false,
        }
    }

    /// Sets repository visibility.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

/// What the host answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The repository was created.
    Created,
    /// The host answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },
}

impl CreateOutcome {
    /// Classifies a response by status: only 201 counts as created.
    pub fn from_response(status: u16, body: String) -> Self {
        if status == STATUS_CREATED {
            CreateOutcome::Created
        } else {
            CreateOutcome::Rejected { status, body }
        }
    }

    /// Returns `true` for [`CreateOutcome::Created`].
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created)
    }

    /// Returns `true` if the host refused because the name is taken.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            CreateOutcome::Rejected {
                status: STATUS_ALREADY_EXISTS,
                ..
            }
        )
    }
}
