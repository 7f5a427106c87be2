//! Application State

use engine::Executor;

/// State shared by every handler; never mutated after startup
pub struct AppState {
    pub executor: Executor,
}

impl AppState {
    /// State over the sample catalog
    pub fn new() -> Self {
        Self {
            executor: Executor::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
