//! Paint command: render text, map it onto the calendar and publish the
//! resulting history.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use chalkline_calendar::{DateMapping, map_grid_for};
use chalkline_git::{CommitConfig, GitRunner, RemoteSpec, SystemGit, make_commits, push};
use chalkline_glyph::{Rendered, rasterize};
use chalkline_hosting::{CreateOutcome, CreateRepo, GitHubClient, RepoHost};

use crate::cli::Cli;
use crate::config::ChalklineConfig;
use crate::convert;
use crate::prompt::{self, Inputs, Mode, Provided};

/// Rendered text and the dates it maps to, computed before any side effect.
#[derive(Debug)]
pub struct Plan {
    year: i32,
    rendered: Rendered,
    mapping: DateMapping,
}

impl Plan {
    /// Repository name: the canonical year.
    pub fn repo_name(&self) -> String {
        self.year.to_string()
    }
}

/// Side-effecting settings resolved from flags and config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub workdir: PathBuf,
    pub commit: CommitConfig,
    pub remote_host: String,
    pub private: bool,
    pub allow_existing: bool,
}

/// The external steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Commit,
    CreateRemote,
    Push,
}

impl Step {
    pub const ORDER: [Step; 3] = [Step::Commit, Step::CreateRemote, Step::Push];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Commit => "commit",
            Step::CreateRemote => "create-remote",
            Step::Push => "push",
        })
    }
}

/// Run the paint pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("paint").entered();

    // 1. Configuration
    let config = ChalklineConfig::load(cli.config.as_deref())?;
    let commit = convert::build_commit_config(&config.git)?;

    // 2. Inputs: flags first, prompts for the rest
    let provided = Provided {
        year: cli.year,
        username: cli.username,
        token: cli.token,
        text: cli.text,
    };
    let mode = if cli.dry_run { Mode::Preview } else { Mode::Publish };
    let inputs = prompt::gather(provided, mode, &mut io::stdin().lock(), &mut io::stdout())?;

    // 3. Rasterize and map, no side effects yet
    let plan = plan(&inputs)?;
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Generated {} commits to create the text pattern",
        plan.mapping.dates().len()
    )?;

    if cli.dry_run {
        print_preview(&plan, &mut stdout)?;
        return Ok(());
    }

    // 4. External steps
    let settings = Settings {
        workdir: cli
            .workdir
            .or(config.workdir)
            .unwrap_or_else(|| PathBuf::from(plan.repo_name())),
        commit,
        remote_host: config.hosting.remote_host.clone(),
        private: config.hosting.private,
        allow_existing: cli.allow_existing_repo || config.hosting.allow_existing,
    };
    let mut git = SystemGit::new(&config.git.program);
    let host = GitHubClient::new(config.hosting.api_base.as_str(), inputs.token.as_str());
    let remote = execute(&plan, &inputs, &settings, &mut git, &host)?;

    writeln!(stdout, "Done! Check {}", remote.web_url())?;
    Ok(())
}

/// Renders the text and maps it onto the requested year.
///
/// Content warnings are logged and corrected. A bad year or a mapping with
/// no dates stops the run.
pub fn plan(inputs: &Inputs) -> Result<Plan> {
    info!(text = %inputs.text, "creating matrix");
    let rendered = rasterize(&inputs.text);
    for diagnostic in rendered.diagnostics() {
        warn!("{diagnostic}");
    }

    let mapping = map_grid_for(rendered.grid(), &inputs.year).context("invalid year")?;
    let year = mapping.dates().year();

    if mapping.is_empty() {
        let report = mapping.report();
        warn!(
            has_active_cells = report.has_active_cells(),
            active_cells = report.active_cells,
            dropped = report.dropped,
            rows = report.rows,
            cols = report.cols,
            "no dates generated"
        );
        bail!(
            "no valid commit dates generated for {year}: the text might be blank, \
             unsupported or too large (grid has {} active cells)",
            report.active_cells
        );
    }
    if let Some((first, last)) = mapping.dates().span() {
        info!(
            n = mapping.dates().len(),
            anchor = %mapping.anchor(),
            %first,
            %last,
            "commit dates generated"
        );
    }

    Ok(Plan {
        year,
        rendered,
        mapping,
    })
}

/// Creates the commits, the remote repository and pushes, stopping at the
/// first failure. Returns the remote that was pushed to.
pub fn execute<R: GitRunner, H: RepoHost>(
    plan: &Plan,
    inputs: &Inputs,
    settings: &Settings,
    git: &mut R,
    host: &H,
) -> Result<RemoteSpec> {
    let repo_name = plan.repo_name();
    let remote = RemoteSpec::new(
        settings.remote_host.as_str(),
        inputs.username.as_str(),
        repo_name.as_str(),
        inputs.token.as_str(),
    );

    for step in Step::ORDER {
        let _step = info_span!("step", %step).entered();
        match step {
            Step::Commit => {
                info!(dir = %settings.workdir.display(), "creating commits");
                let summary = make_commits(git, &settings.workdir, plan.mapping.dates(), &settings.commit)
                    .context("failed to create commits")?;
                info!(
                    commits = summary.commits,
                    initialised = summary.initialised,
                    readme_created = summary.readme_created,
                    branch = %summary.branch,
                    "commits created"
                );
            }
            Step::CreateRemote => {
                info!(owner = %inputs.username, name = %repo_name, "creating remote repository");
                let request = CreateRepo::for_year(&repo_name).with_private(settings.private);
                let outcome = host
                    .create_repository(&request)
                    .context("failed to reach repository host")?;
                match outcome {
                    CreateOutcome::Created => {
                        info!("repository {}/{repo_name} created", inputs.username);
                    }
                    rejected if settings.allow_existing && rejected.is_already_exists() => {
                        warn!("repository {}/{repo_name} already exists, continuing", inputs.username);
                    }
                    CreateOutcome::Rejected { status, body } => bail!(
                        "failed to create repository {}/{repo_name}: {status} - {body}; \
                         check your token permissions",
                        inputs.username
                    ),
                }
            }
            Step::Push => {
                push(git, &settings.workdir, &remote, settings.commit.branch())
                    .context("failed to push")?;
            }
        }
    }
    Ok(remote)
}

/// Writes the grid preview and the date list.
fn print_preview<W: Write>(plan: &Plan, out: &mut W) -> Result<()> {
    writeln!(out, "Text: {:?}", plan.rendered.text())?;
    writeln!(out, "{}", plan.rendered.grid())?;
    for date in plan.mapping.dates() {
        writeln!(out, "{date}")?;
    }
    Ok(())
}
