use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extractor::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-shared; the matching subsystem itself
/// keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Kept on state for handlers that grow config knobs later; only startup
    /// reads it today.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable résumé extraction client. Default: HTTP parser service.
    pub extractor: Arc<dyn ResumeExtractor>,
}
