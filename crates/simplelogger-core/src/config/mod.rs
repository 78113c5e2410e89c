//! Logger configuration
//!
//! Supports multiple configuration sources:
//! - Defaults (`LoggerConfig::default()`)
//! - YAML files (`LoggerConfig::load`)
//! - Environment overrides (`LoggerConfig::from_env`)

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{ConsoleTarget, LoggerConfig};
