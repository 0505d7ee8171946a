use std::sync::Arc;

use crate::config::Config;
use crate::matching::fit_scoring::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable CV-to-job matcher. Default: KeywordFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
}
