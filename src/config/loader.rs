//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ShiftError, ShiftResult};
use crate::locale::Locale;
use crate::models::CompanyId;

use super::types::AppConfig;

/// Loads and provides access to the application configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_addr: "127.0.0.1:8080"
/// logging:
///   level: info
/// locale: en
/// company:
///   id: "6f1c2f0e-8d1a-4c55-9a0e-2b8a1d8c1f10"
///   name: "Main Company"
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_management::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shift_management.yaml")?;
/// println!("Binding to {}", loader.bind_addr());
/// # Ok::<(), shift_management::error::ShiftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`AppConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> ShiftResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ShiftError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> ShiftResult<Self> {
        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            ShiftError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> &str {
        &self.config.server.bind_addr
    }

    /// Default log filter directive.
    pub fn log_level(&self) -> &str {
        &self.config.logging.level
    }

    /// Language of derived shift names.
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Company stamped on new shifts.
    pub fn company_id(&self) -> CompanyId {
        self.config.company.id
    }

    /// Overrides the bind address.
    pub fn set_bind_addr(&mut self, bind_addr: impl Into<String>) {
        self.config.server.bind_addr = bind_addr.into();
    }
}
