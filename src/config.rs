use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use chalkline_hosting::DEFAULT_API_BASE;

/// Top-level chalkline configuration. Every field is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChalklineConfig {
    /// Directory for the local repository. Defaults to the year.
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Local history settings.
    #[serde(default)]
    pub git: GitToml,

    /// Remote host settings.
    #[serde(default)]
    pub hosting: HostingToml,
}

impl ChalklineConfig {
    /// Reads a config file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitToml {
    #[serde(default = "default_program")]
    pub program: PathBuf,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_commit_time")]
    pub commit_time: String,
}

impl Default for GitToml {
    fn default() -> Self {
        Self {
            program: default_program(),
            branch: default_branch(),
            commit_time: default_commit_time(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("git")
}
fn default_branch() -> String {
    "main".to_string()
}
fn default_commit_time() -> String {
    "12:00:00".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostingToml {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_remote_host")]
    pub remote_host: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub allow_existing: bool,
}

impl Default for HostingToml {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            remote_host: default_remote_host(),
            private: false,
            allow_existing: false,
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_remote_host() -> String {
    "github.com".to_string()
}
