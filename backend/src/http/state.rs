//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::repository::ResultRepository;
use crate::services::validation::ValidationRules;

/// Default request body limit (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Result store, built once at start-up
    pub repository: Arc<dyn ResultRepository>,
    /// Limits applied by the validation gate
    pub rules: Arc<ValidationRules>,
    /// Maximum accepted request body size in bytes
    pub body_limit: usize,
}

impl AppState {
    /// Create a new application state with the given repository and default limits.
    pub fn new(repository: Arc<dyn ResultRepository>) -> Self {
        Self {
            repository,
            rules: Arc::new(ValidationRules::default()),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Create the state from loaded configuration.
    pub fn from_config(repository: Arc<dyn ResultRepository>, config: &AppConfig) -> Self {
        Self::new(repository)
            .with_rules(config.validation.rules())
            .with_body_limit(config.server.body_limit_bytes)
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}
