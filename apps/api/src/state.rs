use std::sync::Arc;

use crate::analysis::analyst::CareerAnalyst;
use crate::catalog::JobCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalog is read-only after startup, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    /// Pluggable analyst backend. Live Gemini by default; canned when the
    /// OFFLINE_MODE toggle is set.
    pub analyst: Arc<dyn CareerAnalyst>,
    pub config: Config,
}
