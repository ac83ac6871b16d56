use crate::config::Config;
use crate::jobs::aggregator::JobAggregator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Wraps the pluggable `JobSearch` backend. Default: `AdzunaClient`.
    pub aggregator: JobAggregator,
}
