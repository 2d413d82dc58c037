//! Scaffold generation for a single puzzle day.
//! Plans the target files, renders templates, downloads the input and writes
//! everything to disk. Existing files are left alone unless the request asks
//! for overwriting, so running the generator twice is harmless.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::fetch::{fetch_input, FetchResult, InputFetcher};
use crate::plan::{plan, GenerationRequest};
use crate::renderer::{render_template, TemplateKind, TemplateRenderer};

/// Per-file result of applying the write policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was created.
    Created,
    /// The file existed and was replaced because overwriting was requested.
    Overwritten,
    /// The file existed and was kept as is.
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Created => write!(f, "Created"),
            WriteOutcome::Overwritten => write!(f, "Overwritten"),
            WriteOutcome::Skipped => write!(f, "Skipped (already exists)"),
        }
    }
}

/// What happened to the raw input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    /// The input was downloaded and written (or overwritten).
    Written,
    /// `input.txt` already existed; nothing was downloaded.
    SkippedExisting,
    /// No credential was configured; nothing was downloaded or written.
    NoCredential,
}

/// A planned file and what the run did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Directory holding the day's files.
    pub dir: PathBuf,
    pub files: Vec<FileReport>,
    pub input: InputStatus,
}

impl ScaffoldReport {
    /// Files that were created or overwritten.
    pub fn written(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome != WriteOutcome::Skipped)
    }

    /// Files that were left untouched.
    pub fn skipped(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome == WriteOutcome::Skipped)
    }
}

/// Stages of a run, reported in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Planning,
    RenderingAndFetching,
    Writing,
    Done,
    Failed,
}

/// Writes `content` to `path` according to the write policy.
///
/// Without `overwrite` the file is opened with `create_new`, so an existing
/// file is detected and skipped atomically. Missing parent directories are
/// created.
///
/// # Errors
/// * `Error::WriteError` if the directory or file cannot be written
pub fn write_file<P: AsRef<Path>>(path: P, content: &str, overwrite: bool) -> Result<WriteOutcome> {
    let path = path.as_ref();
    let write_error = |source: io::Error| Error::WriteError { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    if overwrite {
        let existed = path.exists();
        fs::write(path, content).map_err(write_error)?;
        return Ok(if existed { WriteOutcome::Overwritten } else { WriteOutcome::Created });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            fill_new_file(file, path, content).map_err(write_error)?;
            Ok(WriteOutcome::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("Skipping '{}': file already exists.", path.display());
            Ok(WriteOutcome::Skipped)
        }
        Err(e) => Err(write_error(e)),
    }
}

/// Writes `content` into a freshly created file at `path`, removing the file
/// again if the write fails. A partial file would be skipped as existing on
/// the next run.
fn fill_new_file<W: Write>(mut file: W, path: &Path, content: &str) -> io::Result<()> {
    let result = file.write_all(content.as_bytes()).and_then(|()| file.flush());
    if result.is_err() {
        drop(file);
        let _ = fs::remove_file(path);
    }
    result
}

/// Orchestrates one scaffolding run.
pub struct Scaffolder<'a> {
    renderer: &'a dyn TemplateRenderer,
    fetcher: &'a dyn InputFetcher,
}

impl<'a> Scaffolder<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, fetcher: &'a dyn InputFetcher) -> Self {
        Self { renderer, fetcher }
    }

    /// Generates the scaffold for `request`.
    ///
    /// Templates are written before the input is downloaded; if the download
    /// fails the templates stay on disk and the error is returned. Nothing is
    /// rolled back after a failure.
    ///
    /// # Errors
    /// * `Error::InvalidInput` for an out-of-range request
    /// * `Error::FetchError` if the input download fails
    /// * `Error::WriteError` if a file cannot be written
    pub fn run(&self, request: GenerationRequest) -> Result<ScaffoldReport> {
        let result = self.generate(&request);
        match &result {
            Ok(_) => enter(Stage::Done),
            Err(e) => {
                enter(Stage::Failed);
                debug!("Run failed: {e}");
            }
        }
        result
    }

    fn generate(&self, request: &GenerationRequest) -> Result<ScaffoldReport> {
        let (year, day) = (request.year(), request.day());

        enter(Stage::Planning);
        let plan = plan(year, day, request.work_dir())?;
        debug!("Planned scaffold in '{}'.", plan.dir.display());

        enter(Stage::RenderingAndFetching);
        let rendered = TemplateKind::ALL
            .into_iter()
            .map(|kind| render_template(self.renderer, kind, year, day).map(|text| (kind, text)))
            .collect::<Result<Vec<_>>>()?;

        enter(Stage::Writing);
        let mut files = Vec::with_capacity(3);
        for (kind, content) in rendered {
            let target = plan.template_path(kind);
            let outcome = write_file(target, &content, request.overwrite())?;
            files.push(FileReport { path: target.to_path_buf(), outcome });
        }

        // An existing input is kept without spending a download on it.
        let keep_input =
            request.credential().is_some() && !request.overwrite() && plan.input.exists();

        let input = if keep_input {
            debug!("Skipping '{}': file already exists.", plan.input.display());
            files.push(FileReport { path: plan.input.clone(), outcome: WriteOutcome::Skipped });
            InputStatus::SkippedExisting
        } else {
            enter(Stage::RenderingAndFetching);
            match fetch_input(self.fetcher, year, day, request.credential())? {
                FetchResult::Fetched(text) => {
                    enter(Stage::Writing);
                    let outcome = write_file(&plan.input, &text, request.overwrite())?;
                    files.push(FileReport { path: plan.input.clone(), outcome });
                    InputStatus::Written
                }
                FetchResult::NoCredential => {
                    debug!("No credential supplied, not downloading the input.");
                    InputStatus::NoCredential
                }
            }
        };

        Ok(ScaffoldReport { dir: plan.dir, files, input })
    }
}

fn enter(stage: Stage) {
    debug!("Scaffold stage: {stage:?}");
}
