use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Password too short: {actual} characters, at least {min_length} required")]
    TooShort { min_length: usize, actual: usize },

    #[error("Password must contain at least one of: {allowed}")]
    MissingSpecialChar { allowed: String },

    #[error("Password already in use by service '{existing_service}'")]
    DuplicatePassword { existing_service: String },

    #[error("Service not found: {service}")]
    ServiceNotFound { service: String },

    #[error("Unknown sort key: {value}")]
    UnknownSortKey { value: String },

    #[error("Unknown sort order: {value}")]
    UnknownSortOrder { value: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    /// Whether the error came from the password validity rules.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RegistryError::TooShort { .. }
                | RegistryError::MissingSpecialChar { .. }
                | RegistryError::DuplicatePassword { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RegistryError::TooShort { min_length, .. } => {
                format!("Use a password of at least {} characters", min_length)
            }
            RegistryError::MissingSpecialChar { allowed } => {
                format!("Include one of the special characters {}", allowed)
            }
            RegistryError::DuplicatePassword { .. } => {
                "Passwords may not be reused across services".to_string()
            }
            RegistryError::ServiceNotFound { .. } => {
                "Run `list` to see the stored services".to_string()
            }
            RegistryError::UnknownSortKey { .. } => {
                "Sort by `service` or `added_on`".to_string()
            }
            RegistryError::UnknownSortOrder { .. } => {
                "Order must be `normal` or `reverse`".to_string()
            }
            RegistryError::InvalidCommand { .. } => {
                "Commands: add, update, remove, get, list, sort".to_string()
            }
            RegistryError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RegistryError::ConfigParseError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            RegistryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
