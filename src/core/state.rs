// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::FetchError;
use crate::listing::UserListView;
use crate::models::user::UserRecord;
use std::sync::Arc;
use tracing::{error, info};

/// Message shown when the seed load fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// Progress of the seed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// State owned by the single event loop
///
/// Holds the view-model plus the seed load status. Only the event loop
/// mutates it, so no locking is involved.
#[derive(Debug)]
pub struct AppState {
    /// View-model over the working list
    pub view: UserListView,

    /// Seed load status
    pub load: LoadStatus,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the state; the initial seed load is considered in flight
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            view: UserListView::new(&config.view),
            load: LoadStatus::Loading,
            config,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
    }

    /// Apply the outcome of a seed load in one step.
    ///
    /// On success the working list is replaced wholesale. On failure the
    /// current list is kept (empty on first load) and the error is recorded.
    pub fn finish_load(&mut self, result: Result<Vec<UserRecord>, FetchError>) {
        match result {
            Ok(users) => {
                self.view.set_seed(users);
                self.load = LoadStatus::Ready;
                info!(users = self.view.records().len(), "Seed load completed");
            }
            Err(e) => {
                error!(error = %e, "Seed load failed");
                self.load = LoadStatus::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }
}
