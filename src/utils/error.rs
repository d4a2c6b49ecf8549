use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModError {
    #[error("Invalid module name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Module '{name}' already exists at {}", path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("Module '{module}' was created, but {} could not be updated: {source}", path.display())]
    ParentUpdateFailed {
        module: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Unknown visibility '{label}' (available: {})", available.join(", "))]
    UnknownVisibility { label: String, available: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Conflict,
    FileSystem,
    Configuration,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ModError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ModError::InvalidName { .. } | ModError::UnknownVisibility { .. } => {
                ErrorCategory::Input
            }
            ModError::AlreadyExists { .. } => ErrorCategory::Conflict,
            ModError::ParentUpdateFailed { .. }
            | ModError::IoError(_)
            | ModError::SerializationError(_) => ErrorCategory::FileSystem,
            ModError::TomlError(_)
            | ModError::ConfigError { .. }
            | ModError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ModError::Cancelled => ErrorCategory::Cancelled,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ModError::Cancelled => ErrorSeverity::Low,
            ModError::ParentUpdateFailed { .. } => ErrorSeverity::Medium,
            ModError::IoError(_) | ModError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// True when the module itself was written before the failure happened.
    pub fn is_partial_success(&self) -> bool {
        matches!(self, ModError::ParentUpdateFailed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ModError::InvalidName { name, .. } => {
                format!("'{}' is not a valid module name", name)
            }
            ModError::AlreadyExists { name, path } => {
                format!("Module '{}' already exists ({})", name, path.display())
            }
            ModError::ParentUpdateFailed { module, path, .. } => format!(
                "Module '{}' was created, but could not update {}",
                module,
                path.display()
            ),
            ModError::Cancelled => "Cancelled".to_string(),
            ModError::UnknownVisibility { label, .. } => {
                format!("'{}' is not a configured visibility", label)
            }
            ModError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ModError::InvalidName { .. } => {
                "Use a snake_case identifier, optionally followed by '/', '.' or '.rs'".to_string()
            }
            ModError::AlreadyExists { .. } => {
                "Pick another name or remove the existing module first".to_string()
            }
            ModError::ParentUpdateFailed { .. } => {
                "Add the mod declaration to the parent file by hand".to_string()
            }
            ModError::UnknownVisibility { available, .. } => {
                format!("Choose one of: {}", available.join(", "))
            }
            ModError::IoError(_) => "Check that the target directory is writable".to_string(),
            ModError::TomlError(_)
            | ModError::ConfigError { .. }
            | ModError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            ModError::Cancelled | ModError::SerializationError(_) => String::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModError>;
