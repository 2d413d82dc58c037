use std::cell::Cell;
use std::fs;
use std::path::Path;

use aocgen::error::{Error, Result};
use aocgen::fetch::InputFetcher;
use aocgen::plan::{plan, GenerationRequest};
use aocgen::processor::{write_file, InputStatus, Scaffolder, WriteOutcome};
use aocgen::renderer::{render_template, MiniJinjaRenderer, TemplateKind};
use tempfile::TempDir;

/// Fetcher that counts calls and replays a fixed response.
struct MockFetcher {
    calls: Cell<usize>,
    status: Option<u16>,
    body: &'static str,
}

impl MockFetcher {
    fn ok(body: &'static str) -> Self {
        Self { calls: Cell::new(0), status: None, body }
    }

    fn failing(status: u16) -> Self {
        Self { calls: Cell::new(0), status: Some(status), body: "" }
    }
}

impl InputFetcher for MockFetcher {
    fn fetch(&self, year: u32, day: u32, credential: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(credential, "secret");
        match self.status {
            Some(status) => Err(Error::FetchError {
                url: format!("https://adventofcode.com/{year}/day/{day}/input"),
                reason: format!("server responded with HTTP {status}"),
            }),
            None => Ok(self.body.to_string()),
        }
    }
}

fn request(work_dir: &Path, credential: Option<&str>, overwrite: bool) -> GenerationRequest {
    GenerationRequest::new(7, 2024, work_dir, credential.map(str::to_string), overwrite).unwrap()
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn test_write_file_policy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/dir/file.txt");

    assert_eq!(write_file(&path, "first", false).unwrap(), WriteOutcome::Created);
    assert_eq!(write_file(&path, "second", false).unwrap(), WriteOutcome::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "first");

    assert_eq!(write_file(&path, "third", true).unwrap(), WriteOutcome::Overwritten);
    assert_eq!(fs::read_to_string(&path).unwrap(), "third");
}

#[test]
fn test_write_file_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    match write_file(blocker.join("file.txt"), "content", false) {
        Err(Error::WriteError { .. }) => (),
        other => panic!("Expected WriteError, got {other:?}"),
    }
}

#[test]
fn test_run_with_credential_writes_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("3   4\n4   3\n");

    let report = Scaffolder::new(&renderer, &fetcher)
        .run(request(temp_dir.path(), Some("secret"), false))
        .unwrap();

    let plan = plan(2024, 7, temp_dir.path()).unwrap();
    assert_eq!(report.dir, plan.dir);
    assert_eq!(report.input, InputStatus::Written);
    assert_eq!(report.files.len(), 3);
    assert!(report.files.iter().all(|f| f.outcome == WriteOutcome::Created));
    assert_eq!(fetcher.calls.get(), 1);

    assert_eq!(fs::read_to_string(&plan.input).unwrap(), "3   4\n4   3\n");
    assert_eq!(
        fs::read_to_string(&plan.solution).unwrap(),
        render_template(&renderer, TemplateKind::Solution, 2024, 7).unwrap()
    );
    assert!(plan.solution_test.is_file());
}

#[test]
fn test_run_without_credential() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("unused");

    let report =
        Scaffolder::new(&renderer, &fetcher).run(request(temp_dir.path(), None, false)).unwrap();

    let plan = plan(2024, 7, temp_dir.path()).unwrap();
    assert_eq!(report.input, InputStatus::NoCredential);
    assert_eq!(report.files.len(), 2);
    assert_eq!(fetcher.calls.get(), 0);
    assert!(plan.solution.is_file());
    assert!(plan.solution_test.is_file());
    assert!(!plan.input.exists());
}

#[test]
fn test_run_is_idempotent() {
    let once = TempDir::new().unwrap();
    let twice = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("input\n");
    let scaffolder = Scaffolder::new(&renderer, &fetcher);

    scaffolder.run(request(once.path(), Some("secret"), false)).unwrap();
    scaffolder.run(request(twice.path(), Some("secret"), false)).unwrap();
    let second = scaffolder.run(request(twice.path(), Some("secret"), false)).unwrap();

    assert_eq!(second.written().count(), 0);
    assert_eq!(second.skipped().count(), 3);
    assert_eq!(second.input, InputStatus::SkippedExisting);
    // The second run in `twice` did not download again.
    assert_eq!(fetcher.calls.get(), 2);
    assert!(!dir_diff::is_different(once.path(), twice.path()).unwrap());
}

#[test]
fn test_run_keeps_hand_edits() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("");
    let scaffolder = Scaffolder::new(&renderer, &fetcher);
    let plan = plan(2024, 7, temp_dir.path()).unwrap();

    scaffolder.run(request(temp_dir.path(), None, false)).unwrap();
    fs::write(&plan.solution, "// my solution\n").unwrap();
    let report = scaffolder.run(request(temp_dir.path(), None, false)).unwrap();

    assert_eq!(report.skipped().count(), 2);
    assert_eq!(fs::read_to_string(&plan.solution).unwrap(), "// my solution\n");
}

#[test]
fn test_run_overwrite_replaces_stale_content() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("fresh input\n");
    let plan = plan(2024, 7, temp_dir.path()).unwrap();
    fs::create_dir_all(&plan.dir).unwrap();
    fs::write(&plan.solution, "stale").unwrap();
    fs::write(&plan.input, "stale").unwrap();

    let report = Scaffolder::new(&renderer, &fetcher)
        .run(request(temp_dir.path(), Some("secret"), true))
        .unwrap();

    let outcomes: Vec<_> = report.files.iter().map(|f| f.outcome).collect();
    assert_eq!(
        outcomes,
        vec![WriteOutcome::Overwritten, WriteOutcome::Created, WriteOutcome::Overwritten]
    );
    assert_eq!(
        fs::read_to_string(&plan.solution).unwrap(),
        render_template(&renderer, TemplateKind::Solution, 2024, 7).unwrap()
    );
    assert_eq!(fs::read_to_string(&plan.input).unwrap(), "fresh input\n");
}

#[test]
fn test_run_fetch_failure_keeps_templates() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::failing(403);

    let result =
        Scaffolder::new(&renderer, &fetcher).run(request(temp_dir.path(), Some("secret"), false));

    match result {
        Err(Error::FetchError { reason, .. }) => assert!(reason.contains("403")),
        other => panic!("Expected FetchError, got {other:?}"),
    }
    let plan = plan(2024, 7, temp_dir.path()).unwrap();
    assert!(plan.solution.is_file());
    assert!(plan.solution_test.is_file());
    assert!(!plan.input.exists());
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn test_invalid_request_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();

    for (day, year) in [(0, 2024), (26, 2024), (1, 2014)] {
        match GenerationRequest::new(day, year, temp_dir.path(), Some("secret".to_string()), true) {
            Err(Error::InvalidInput(_)) => (),
            other => panic!("Expected InvalidInput for {year}/{day}, got {other:?}"),
        }
    }
    assert!(is_empty_dir(temp_dir.path()));
}

#[test]
fn test_write_error_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the year directory should go.
    fs::write(temp_dir.path().join("y2024"), "").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let fetcher = MockFetcher::ok("input");

    let result =
        Scaffolder::new(&renderer, &fetcher).run(request(temp_dir.path(), Some("secret"), false));

    assert!(matches!(result, Err(Error::WriteError { .. })));
    assert_eq!(fetcher.calls.get(), 0);
}
