use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Developer {id} not found")]
    NotFound { id: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl RegistryError {
    /// True for errors caused by a bad request body or config value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::MissingField { .. } | RegistryError::InvalidField { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::MissingField { field } => format!("'{}' is required", field),
            RegistryError::InvalidField { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            RegistryError::NotFound { id } => format!("No developer with id {}", id),
            RegistryError::ConfigError { message } => {
                format!("Please check the configuration: {}", message)
            }
            RegistryError::IoError(e) => format!("File system problem: {}", e),
            RegistryError::ServerError { message } => format!("Server failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
