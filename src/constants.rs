//! Application-wide constants and configuration values
//!
//! This module centralizes the name-validation limits and default file
//! locations so they are defined in exactly one place.

/// Default name of the output file, written to the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "sorted-names-list.txt";

/// Default name of the log file inside the log directory.
pub const DEFAULT_LOG_FILE: &str = "namesort.log";

/// Minimum number of given names a full name must carry.
pub const MIN_GIVEN_NAMES: usize = 1;

/// Maximum number of given names a full name may carry.
pub const MAX_GIVEN_NAMES: usize = 3;

/// Minimum whitespace-separated parts in a valid name (given names + last name).
pub const MIN_PARTS_IN_NAME: usize = MIN_GIVEN_NAMES + 1;

/// Maximum whitespace-separated parts in a valid name (given names + last name).
pub const MAX_PARTS_IN_NAME: usize = MAX_GIVEN_NAMES + 1;

/// Timeout in seconds for the crates.io update check.
pub const VERSION_CHECK_TIMEOUT_SECONDS: u64 = 10;
