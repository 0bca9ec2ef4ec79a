//! Shared application state.

use std::sync::Arc;

use chehum_core::{ChehumConfig, Result};
use chehum_deadline::{Clock, ReviewDeadlineEstimator, SitePatternTable, SystemClock};
use chehum_search::{KeywordTables, QueryParser};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ChehumConfig,
    pub parser: QueryParser,
    pub site_patterns: Arc<SitePatternTable>,
    pub estimator: ReviewDeadlineEstimator<Arc<dyn Clock>>,
}

impl AppState {
    pub fn new(config: ChehumConfig) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.utc_offset_hours));
        Self::with_clock(config, clock)
    }

    /// State with an explicit clock, for tests and replays.
    pub fn with_clock(config: ChehumConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let tables = Arc::new(KeywordTables::korean()?);
        let site_patterns = Arc::new(SitePatternTable::new());
        let estimator = ReviewDeadlineEstimator::new(site_patterns.clone(), clock)
            .with_defaults(config.default_review_days, config.default_selection_delay_days);

        Ok(Self {
            config,
            parser: QueryParser::new(tables),
            site_patterns,
            estimator,
        })
    }
}
