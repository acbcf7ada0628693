use std::path::PathBuf;

use clap::Parser;

/// Write short text onto a contribution calendar.
///
/// Any of year, username, token or text not given as a flag is asked for
/// interactively.
#[derive(Parser, Debug)]
#[command(
    name = "chalkline",
    version,
    about = "Write short text onto a contribution calendar with dated commits"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target year; also the name of the created repository.
    #[arg(short, long)]
    pub year: Option<String>,

    /// Account that will own the repository.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Personal access token used for the API call and the push.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Text to draw (at most 8 characters are rendered).
    #[arg(short, long)]
    pub text: Option<String>,

    /// Directory for the local repository (defaults to the year).
    #[arg(short, long)]
    pub workdir: Option<PathBuf>,

    /// Render and list the commit dates without touching git or the network.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going when the remote repository already exists.
    #[arg(long)]
    pub allow_existing_repo: bool,
}
