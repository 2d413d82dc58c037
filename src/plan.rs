//! Generation requests and path planning.
//! Turns a (year, day, work dir) triple into the deterministic set of files
//! a scaffolding run may create.

use std::path::{Path, PathBuf};

use crate::constants::{FIRST_YEAR, INPUT_FILE, LAST_DAY, SOLUTION_FILE, SOLUTION_TEST_FILE};
use crate::error::{Error, Result};
use crate::renderer::TemplateKind;

/// Checks that `year` and `day` name an existing puzzle and that the work dir is usable.
pub fn validate(year: u32, day: u32, work_dir: &Path) -> Result<()> {
    if !(1..=LAST_DAY).contains(&day) {
        return Err(Error::InvalidInput(format!("day must be between 1 and {LAST_DAY}, got {day}")));
    }
    if year < FIRST_YEAR {
        return Err(Error::InvalidInput(format!(
            "year must be {FIRST_YEAR} or later, got {year}"
        )));
    }
    if work_dir.as_os_str().is_empty() {
        return Err(Error::InvalidInput("working directory must not be empty".to_string()));
    }
    Ok(())
}

/// A validated request to scaffold one puzzle day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    day: u32,
    year: u32,
    work_dir: PathBuf,
    credential: Option<String>,
    overwrite: bool,
}

impl GenerationRequest {
    /// Creates a request, failing with [`Error::InvalidInput`] on out-of-range values.
    pub fn new<P: Into<PathBuf>>(
        day: u32,
        year: u32,
        work_dir: P,
        credential: Option<String>,
        overwrite: bool,
    ) -> Result<Self> {
        let work_dir = work_dir.into();
        validate(year, day, &work_dir)?;
        Ok(Self { day, year, work_dir, credential, overwrite })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

/// The files a run targets: `{work_dir}/y{year}/d{day:02}/{solution.rs,solution_test.rs,input.txt}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub dir: PathBuf,
    pub solution: PathBuf,
    pub solution_test: PathBuf,
    pub input: PathBuf,
}

impl ScaffoldPlan {
    /// Target path for a rendered template.
    pub fn template_path(&self, kind: TemplateKind) -> &Path {
        match kind {
            TemplateKind::Solution => &self.solution,
            TemplateKind::SolutionTest => &self.solution_test,
        }
    }
}

/// Computes the scaffold plan for a puzzle day. Performs no I/O.
pub fn plan<P: AsRef<Path>>(year: u32, day: u32, work_dir: P) -> Result<ScaffoldPlan> {
    let work_dir = work_dir.as_ref();
    validate(year, day, work_dir)?;

    let dir = work_dir.join(format!("y{year}")).join(format!("d{day:02}"));
    Ok(ScaffoldPlan {
        solution: dir.join(SOLUTION_FILE),
        solution_test: dir.join(SOLUTION_TEST_FILE),
        input: dir.join(INPUT_FILE),
        dir,
    })
}
