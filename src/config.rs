//! Configuration resolution for aocgen.
//! Merges command-line flags, the session environment variable and an
//! optional configuration file into a validated [`GenerationRequest`] plus
//! the settings of the input fetcher.

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, FIRST_YEAR};
use crate::error::{Error, Result};
use crate::plan::{validate, GenerationRequest};
use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of an `aocgen.{json,yml,yaml}` file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Session credential for downloading inputs
    pub session: Option<String>,
    /// Puzzle host, e.g. `https://adventofcode.com`
    pub host: Option<String>,
    /// Download timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub request: GenerationRequest,
    pub host: String,
    pub timeout: Duration,
}

/// Most recent puzzle year as of `today`: an event starts on December 1st,
/// so before December the latest one is last year's.
pub fn default_year(today: NaiveDate) -> u32 {
    let year = u32::try_from(today.year()).unwrap_or(FIRST_YEAR);
    if today.month() == 12 {
        year
    } else {
        year.saturating_sub(1).max(FIRST_YEAR)
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
///   for [`ConfigFile`]
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the configuration file.
///
/// An explicit `path` must exist. Otherwise the first of [`CONFIG_FILES`]
/// found in `work_dir` is used, and no file at all yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: Option<&Path>, work_dir: P) -> Result<ConfigFile> {
    let config_path: Option<PathBuf> = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::ConfigError(format!(
                    "Invalid configuration path: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => CONFIG_FILES
            .iter()
            .map(|file| work_dir.as_ref().join(file))
            .find(|candidate| candidate.is_file()),
    };

    match config_path {
        Some(config_path) => {
            debug!("Loading configuration from {}", config_path.display());
            parse_config(&std::fs::read_to_string(&config_path)?)
        }
        None => {
            debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
            Ok(ConfigFile::default())
        }
    }
}

/// Normalizes a credential: blank means absent and a copied `session=`
/// prefix is dropped.
pub fn normalize_credential(value: Option<String>) -> Option<String> {
    value
        .map(|v| {
            let v = v.trim();
            v.strip_prefix("session=").unwrap_or(v).trim().to_string()
        })
        .filter(|v| !v.is_empty())
}

/// Builds the run settings from parsed arguments.
///
/// # Arguments
/// * `args` - Parsed command line arguments
/// * `env_session` - Value of the session environment variable, if set
/// * `today` - Current date, used to default the year
///
/// The day, year and work dir are validated before the configuration file
/// is read. Credential precedence is flag, then environment, then
/// configuration file.
pub fn resolve(args: &Args, env_session: Option<String>, today: NaiveDate) -> Result<Settings> {
    let year = args.year.unwrap_or_else(|| default_year(today));
    validate(year, args.day, &args.workdir)?;

    let config = load_config(args.config.as_deref(), &args.workdir)?;
    let credential = normalize_credential(args.cookie.clone())
        .or_else(|| normalize_credential(env_session))
        .or_else(|| normalize_credential(config.session));

    debug!(
        "Resolved request: year {year}, day {}, workdir '{}', credential {}",
        args.day,
        args.workdir.display(),
        if credential.is_some() { "set" } else { "not set" }
    );

    let timeout_secs = config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(Error::ConfigError("timeout_secs must be greater than 0".to_string()));
    }

    let request =
        GenerationRequest::new(args.day, year, args.workdir.clone(), credential, args.force)?;

    Ok(Settings {
        request,
        host: config.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        timeout: Duration::from_secs(timeout_secs),
    })
}
