use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Output file path cannot be empty
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(output_file_path: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if output_file_path.is_empty() {
        return Err(AppError::config_error("Output file path cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("sorted-names-list.txt", &None).is_ok());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let err = validate_config("", &None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let err = validate_config("out.txt", &Some(String::new())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_log_parent_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("namesort.log");
        let log_path = log_path.to_string_lossy().to_string();

        assert!(validate_config("out.txt", &Some(log_path)).is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }
}
