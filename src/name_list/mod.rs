//! Reading, validating and writing name list files.
//!
//! A name list file is plain text with one full name per line. Reading
//! validates every raw line before anything else happens, then trims
//! leading/trailing whitespace from each line; internal spacing is preserved.

use tokio::fs;
use tracing::debug;

use crate::error::AppError;

pub mod validation;

pub use validation::{count_parts, validate_names};

/// Reads a list of names from the given file path, validates them, and
/// sanitizes them by trimming edge whitespace.
///
/// Validation runs on the raw lines and is all-or-nothing: one invalid line
/// fails the whole read.
///
/// # Errors
/// * `AppError::FileRead` - the file cannot be read
/// * `AppError::TooFewNameParts` / `AppError::TooManyNameParts` - a line
///   failed part-count validation
pub async fn read_names_from_file(path: &str) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read(path, e))?;

    let names: Vec<String> = content.lines().map(str::to_string).collect();
    validate_names(&names)?;

    debug!("Read {} names from {path}", names.len());
    Ok(sanitize(names))
}

/// Writes the names to the given path, one per line, each terminated with a
/// newline. An empty list produces an empty file.
pub async fn write_names_to_file(names: &[String], path: &str) -> Result<(), AppError> {
    let content: String = names.iter().map(|name| format!("{name}\n")).collect();
    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write(path, e))?;

    debug!("Wrote {} names to {path}", names.len());
    Ok(())
}

fn sanitize(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect()
}
