use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read input file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // The two validation messages are a verbatim contract; tests assert them.
    #[error("A Name must contain at least one given name along with the last name")]
    TooFewNameParts,

    #[error("A Name can only contain a maximum of 3 given names along with the last name")]
    TooManyNameParts,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    VersionParse(#[from] semver::Error),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a file read error carrying the offending path
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error carrying the offending path
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages_are_verbatim() {
        assert_eq!(
            AppError::TooFewNameParts.to_string(),
            "A Name must contain at least one given name along with the last name"
        );
        assert_eq!(
            AppError::TooManyNameParts.to_string(),
            "A Name can only contain a maximum of 3 given names along with the last name"
        );
    }

    #[test]
    fn test_file_errors_include_path() {
        let err = AppError::file_read(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.txt"));

        let err = AppError::file_write(
            "readonly.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("readonly.txt"));
    }
}
