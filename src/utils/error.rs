use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read or write: {}", e),
            CatalogError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {} ({})", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::ConfigError { .. } => {
                "Check the TOML syntax and that referenced environment variables are set"
            }
            CatalogError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the config file or command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
