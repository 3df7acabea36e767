//! Configuration loading and management.
//!
//! This module loads the application configuration from a YAML file:
//! server address, log level, label locale and the company stamped on new
//! shifts.
//!
//! # Example
//!
//! ```no_run
//! use shift_management::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shift_management.yaml").unwrap();
//! println!("Locale: {:?}", config.locale());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CompanyConfig, LoggingConfig, ServerConfig};
