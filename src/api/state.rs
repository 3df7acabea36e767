//! Application state for the shift management API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::repository::Repository;

/// Shared application state.
///
/// Holds the loaded configuration and the record store. Each request holds
/// the store lock for one repository call, so writes are serialized.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    repository: Arc<RwLock<Repository>>,
    today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with an empty repository.
    pub fn new(config: ConfigLoader) -> Self {
        let repository = Repository::new(config.locale());
        Self {
            config: Arc::new(config),
            repository: Arc::new(RwLock::new(repository)),
            today: None,
        }
    }

    /// Pins the date used as "today" for week and schedule computations.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared repository.
    pub fn repository(&self) -> &RwLock<Repository> {
        &self.repository
    }

    /// The current local date, unless pinned with [`AppState::with_today`].
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
