//! Integration tests driving the commit and push steps through a recording
//! runner instead of the git binary.

use std::fs;
use std::path::{Path, PathBuf};

use chalkline_calendar::CommitDateSet;
use chalkline_git::{
    CommitConfig, GitCommand, GitError, GitRunner, LOG_FILE, README_FILE, RemoteSpec,
    make_commits, push, readme_contents,
};
use chrono::{NaiveDate, NaiveTime};

/// Records every command and fails the ones matching `fail_on`.
#[derive(Default)]
struct Recorder {
    calls: Vec<(PathBuf, GitCommand)>,
    fail_on: Option<Box<dyn Fn(&GitCommand) -> bool>>,
}

impl Recorder {
    fn failing_on(pred: impl Fn(&GitCommand) -> bool + 'static) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(Box::new(pred)),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.calls.iter().map(|(_, c)| c.args().join(" ")).collect()
    }
}

impl GitRunner for Recorder {
    fn run(&mut self, dir: &Path, command: &GitCommand) -> Result<(), GitError> {
        self.calls.push((dir.to_path_buf(), command.clone()));
        if self.fail_on.as_ref().is_some_and(|f| f(command)) {
            return Err(GitError::CommandFailed {
                command: command.to_string(),
                status: Some(1),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn three_dates() -> CommitDateSet {
    CommitDateSet::new(2024, vec![ymd(2024, 1, 7), ymd(2024, 1, 8), ymd(2024, 1, 15)]).unwrap()
}

#[test]
fn fresh_directory_command_sequence() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = dir.path().join("2024");
    let mut git = Recorder::default();

    let summary = make_commits(&mut git, &repo, &three_dates(), &CommitConfig::default()).unwrap();

    assert_eq!(summary.commits, 3);
    assert!(summary.initialised);
    assert!(summary.readme_created);
    assert_eq!(summary.branch, "main");
    assert_eq!(
        git.lines(),
        vec![
            "init",
            "add .",
            "commit -m Commit on 2024-01-07",
            "add .",
            "commit -m Commit on 2024-01-08",
            "add .",
            "commit -m Commit on 2024-01-15",
            "branch -M main",
        ]
    );
    assert!(git.calls.iter().all(|(d, _)| d == &repo));
}

#[test]
fn commit_dates_are_pinned() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::default();
    make_commits(&mut git, dir.path(), &three_dates(), &CommitConfig::default()).unwrap();

    let commits: Vec<&GitCommand> = git
        .calls
        .iter()
        .map(|(_, c)| c)
        .filter(|c| c.args()[0] == "commit")
        .collect();
    assert_eq!(
        commits[0].env(),
        &[
            ("GIT_AUTHOR_DATE".to_string(), "2024-01-07T12:00:00".to_string()),
            ("GIT_COMMITTER_DATE".to_string(), "2024-01-07T12:00:00".to_string()),
        ]
    );
    assert!(git.calls.iter().filter(|(_, c)| c.args()[0] != "commit").all(|(_, c)| c.env().is_empty()));
}

#[test]
fn custom_time_and_branch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::default();
    let cfg = CommitConfig::new("trunk").with_commit_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    make_commits(&mut git, dir.path(), &three_dates(), &cfg).unwrap();

    let last = git.lines().pop().unwrap();
    assert_eq!(last, "branch -M trunk");
    let first_commit = git.calls.iter().find(|(_, c)| c.args()[0] == "commit").unwrap();
    assert_eq!(first_commit.1.env()[0].1, "2024-01-07T09:30:00");
}

#[test]
fn readme_and_log_contents() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::default();
    make_commits(&mut git, dir.path(), &three_dates(), &CommitConfig::default()).unwrap();

    let readme = fs::read_to_string(dir.path().join(README_FILE)).unwrap();
    assert_eq!(readme, readme_contents(2024));
    let log = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    assert_eq!(
        log,
        "Commit for 2024-01-07\nCommit for 2024-01-08\nCommit for 2024-01-15\n"
    );
}

#[test]
fn existing_repository_is_reused() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(README_FILE), "custom").unwrap();
    fs::write(dir.path().join(LOG_FILE), "old line\n").unwrap();

    let mut git = Recorder::default();
    let summary = make_commits(&mut git, dir.path(), &three_dates(), &CommitConfig::default()).unwrap();

    assert!(!summary.initialised);
    assert!(!summary.readme_created);
    assert_eq!(git.lines()[0], "add .");
    assert_eq!(fs::read_to_string(dir.path().join(README_FILE)).unwrap(), "custom");
    let log = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    assert!(log.starts_with("old line\nCommit for 2024-01-07\n"));
}

#[test]
fn empty_date_set_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = dir.path().join("never");
    let mut git = Recorder::default();
    let err = make_commits(&mut git, &repo, &CommitDateSet::empty(2024), &CommitConfig::default())
        .unwrap_err();
    assert!(matches!(err, GitError::NoDates));
    assert!(git.calls.is_empty());
    assert!(!repo.exists());
}

#[test]
fn failing_commit_aborts_remaining() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::failing_on(|c| c.args().iter().any(|a| a == "Commit on 2024-01-08"));
    let err = make_commits(&mut git, dir.path(), &three_dates(), &CommitConfig::default()).unwrap_err();

    assert!(matches!(err, GitError::CommandFailed { .. }));
    let lines = git.lines();
    assert_eq!(lines.last().unwrap(), "commit -m Commit on 2024-01-08");
    assert!(!lines.iter().any(|l| l.starts_with("branch")));
}

#[test]
fn push_adds_remote_then_pushes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::default();
    let remote = RemoteSpec::new("github.com", "octocat", "2024", "tok");
    push(&mut git, dir.path(), &remote, "main").unwrap();

    assert_eq!(
        git.lines(),
        vec![
            "remote add origin https://tok@github.com/octocat/2024.git",
            "push -u origin main -f",
        ]
    );
    assert!(git.calls.iter().all(|(_, c)| !c.to_string().contains("tok@")));
}

#[test]
fn push_falls_back_to_set_url() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::failing_on(|c| c.args().get(1).is_some_and(|a| a == "add"));
    let remote = RemoteSpec::new("github.com", "octocat", "2024", "tok");
    push(&mut git, dir.path(), &remote, "main").unwrap();

    assert_eq!(
        git.lines(),
        vec![
            "remote add origin https://tok@github.com/octocat/2024.git",
            "remote set-url origin https://tok@github.com/octocat/2024.git",
            "push -u origin main -f",
        ]
    );
}

#[test]
fn push_failure_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut git = Recorder::failing_on(|c| c.args()[0] == "push");
    let remote = RemoteSpec::new("github.com", "octocat", "2024", "tok");
    let err = push(&mut git, dir.path(), &remote, "main").unwrap_err();
    match err {
        GitError::CommandFailed { command, .. } => {
            assert_eq!(command, "git push -u origin main -f");
        }
        other => panic!("unexpected error: {other}"),
    }
}
