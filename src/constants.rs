//! Common constants used throughout aocgen.

/// First year of the puzzle series.
pub const FIRST_YEAR: u32 = 2015;

/// Last puzzle day of an event.
pub const LAST_DAY: u32 = 25;

/// Puzzle host used when the configuration does not override it.
pub const DEFAULT_HOST: &str = "https://adventofcode.com";

/// Timeout for the input download, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the session credential.
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Supported configuration file names, looked up in the work dir.
pub const CONFIG_FILES: [&str; 3] = ["aocgen.json", "aocgen.yml", "aocgen.yaml"];

pub const SOLUTION_FILE: &str = "solution.rs";
pub const SOLUTION_TEST_FILE: &str = "solution_test.rs";
pub const INPUT_FILE: &str = "input.txt";

/// Sent with every input request so the puzzle host can identify the tool.
pub const USER_AGENT: &str = concat!("aocgen/", env!("CARGO_PKG_VERSION"));
