//! aocgen scaffolds Advent of Code solutions.
//! Given a puzzle year and day it renders a solution module and its test
//! module from templates, optionally downloads the personalized puzzle input,
//! and writes them to a working directory without clobbering existing work.

/// Command-line interface module for the aocgen application
pub mod cli;

/// Merges flags, environment and configuration file into one request
/// Supports JSON and YAML formats (aocgen.json, aocgen.yml, aocgen.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the aocgen application
pub mod error;

/// Puzzle input download
pub mod fetch;

pub mod logger;

/// Generation requests and target path planning
pub mod plan;

/// Core scaffolding orchestration
/// Combines all components to write the final files
pub mod processor;

/// Solution and test template rendering
pub mod renderer;
