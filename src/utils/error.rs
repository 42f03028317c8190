use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Malformed recipe file at line {line}: {reason}")]
    MalformedRecipeFile { line: usize, reason: String },

    #[error("Unknown dish: {dish}")]
    UnknownDish { dish: String },

    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Quantity overflow while aggregating ingredient: {ingredient}")]
    QuantityOverflow { ingredient: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    FileSystem,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MalformedRecipeFile { .. } => ErrorCategory::Input,
            EtlError::UnknownDish { .. } | EtlError::QuantityOverflow { .. } => {
                ErrorCategory::Data
            }
            EtlError::DirectoryNotFound { .. }
            | EtlError::FileReadError { .. }
            | EtlError::FileWriteError { .. } => ErrorCategory::FileSystem,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::SerializationError(_) | EtlError::CsvError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::FileSystem | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::MalformedRecipeFile { line, .. } => format!(
                "Check line {} of the recipe file: each dish needs a name, an ingredient count and that many 'name | quantity | measure' lines",
                line
            ),
            EtlError::UnknownDish { dish } => {
                format!("Add a recipe for '{}' or remove it from the dish list", dish)
            }
            EtlError::DirectoryNotFound { path } => {
                format!("Make sure '{}' exists and is a directory", path.display())
            }
            EtlError::FileReadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path.display())
            }
            EtlError::FileWriteError { path, .. } => format!(
                "Check write permissions and free space for '{}'",
                path.display()
            ),
            EtlError::QuantityOverflow { .. } => {
                "Reduce the person count or the recipe quantities".to_string()
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                "Review the configuration file or command line arguments".to_string()
            }
            EtlError::SerializationError(_) | EtlError::CsvError(_) => {
                "Re-run with --verbose and report the output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MalformedRecipeFile { line, reason } => {
                format!("The recipe file is malformed (line {}): {}", line, reason)
            }
            EtlError::UnknownDish { dish } => format!("No recipe found for dish '{}'", dish),
            EtlError::DirectoryNotFound { path } => {
                format!("Folder '{}' does not exist", path.display())
            }
            EtlError::FileReadError { path, .. } => {
                format!("Could not read file '{}'", path.display())
            }
            EtlError::FileWriteError { path, .. } => {
                format!("Could not write file '{}'", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
