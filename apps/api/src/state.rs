use std::sync::Arc;

use crate::config::Config;
use crate::matching::requirement_matcher::{RequirementScorer, TokenOverlapScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable requirement scorer. Default: TokenOverlapScorer.
    pub requirement_scorer: Arc<dyn RequirementScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            requirement_scorer: Arc::new(TokenOverlapScorer),
        }
    }
}
