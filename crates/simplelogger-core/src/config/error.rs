//! Configuration errors

/// Errors that can occur while loading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Global logger factory already initialized")]
    AlreadyInitialized,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
