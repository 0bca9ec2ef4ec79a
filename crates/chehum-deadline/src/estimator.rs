//! Review-deadline estimation.
//!
//! The review window is chosen by an ordered list of tiers: the listing's own
//! crawled value, then the source site's pattern, then the global default.
//! The selection date, when unknown, is the application deadline plus the
//! site's average selection delay, anchored to today once the deadline has
//! passed.

use std::sync::Arc;

use chehum_core::{Campaign, ChehumConfig};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::site_patterns::{SitePattern, SitePatternTable};

pub const DEFAULT_REVIEW_DAYS: i64 = 7;
pub const DEFAULT_SELECTION_DELAY_DAYS: f64 = 1.0;

/// Which tier supplied the review window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewWindowSource {
    Crawled,
    SitePattern,
    Default,
}

/// A computed review deadline and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDeadline {
    pub selection_date: NaiveDate,
    pub review_deadline: NaiveDate,
    pub window_days: i64,
    pub window_source: ReviewWindowSource,
}

struct WindowInputs<'a> {
    campaign: &'a Campaign,
    pattern: Option<&'a SitePattern>,
    default_days: i64,
}

type WindowTier = (ReviewWindowSource, fn(&WindowInputs<'_>) -> Option<i64>);

const WINDOW_TIERS: &[WindowTier] = &[
    (ReviewWindowSource::Crawled, crawled_window),
    (ReviewWindowSource::SitePattern, site_pattern_window),
    (ReviewWindowSource::Default, default_window),
];

fn crawled_window(inputs: &WindowInputs<'_>) -> Option<i64> {
    inputs.campaign.review_deadline_days.filter(|d| *d > 0)
}

fn site_pattern_window(inputs: &WindowInputs<'_>) -> Option<i64> {
    inputs
        .pattern
        .and_then(|p| p.review_period_days)
        .filter(|d| *d > 0)
}

fn default_window(inputs: &WindowInputs<'_>) -> Option<i64> {
    Some(inputs.default_days)
}

/// `date + days`, or `None` when the result leaves chrono's date range.
fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|d| date.checked_add_signed(d))
}

/// Estimates selection dates and review deadlines for campaigns.
pub struct ReviewDeadlineEstimator<C: Clock = SystemClock> {
    patterns: Arc<SitePatternTable>,
    clock: C,
    default_review_days: i64,
    default_selection_delay_days: f64,
}

impl ReviewDeadlineEstimator<SystemClock> {
    /// Estimator on the wall clock with defaults taken from `config`.
    pub fn from_config(patterns: Arc<SitePatternTable>, config: &ChehumConfig) -> Self {
        Self::new(patterns, SystemClock::new(config.utc_offset_hours))
            .with_defaults(config.default_review_days, config.default_selection_delay_days)
    }
}

impl<C: Clock> ReviewDeadlineEstimator<C> {
    pub fn new(patterns: Arc<SitePatternTable>, clock: C) -> Self {
        Self {
            patterns,
            clock,
            default_review_days: DEFAULT_REVIEW_DAYS,
            default_selection_delay_days: DEFAULT_SELECTION_DELAY_DAYS,
        }
    }

    pub fn with_defaults(mut self, review_days: i64, selection_delay_days: f64) -> Self {
        self.default_review_days = review_days;
        self.default_selection_delay_days = selection_delay_days;
        self
    }

    pub fn patterns(&self) -> &SitePatternTable {
        &self.patterns
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Estimated selection date for `campaign`.
    ///
    /// Without an application deadline this is today. A malformed deadline is
    /// logged and treated the same way.
    pub fn estimate_selection_date(&self, campaign: &Campaign) -> NaiveDate {
        let today = self.clock.today();
        let deadline = match campaign.application_deadline_date() {
            Ok(Some(date)) => date,
            Ok(None) => return today,
            Err(e) => {
                warn!(
                    "Treating application deadline of campaign {:?} as absent: {}",
                    campaign.id, e
                );
                return today;
            }
        };

        let pattern = self.patterns.lookup(campaign.source_name());
        let delay = self.selection_delay_days(pattern.as_ref());

        // Once the window has closed, count the delay from today.
        let anchor = if deadline < today { today } else { deadline };
        if let Some(date) = add_days(anchor, delay) {
            return date;
        }
        warn!(
            "Selection delay of {} days for source {:?} overflows from {}, using default",
            delay,
            campaign.source_name(),
            anchor
        );
        add_days(anchor, whole_days(self.default_selection_delay_days)).unwrap_or(anchor)
    }

    /// Review deadline with the selection date and the tier that was used.
    pub fn resolve_review_deadline(
        &self,
        campaign: &Campaign,
        selection_date: Option<NaiveDate>,
    ) -> ReviewDeadline {
        let selection_date =
            selection_date.unwrap_or_else(|| self.estimate_selection_date(campaign));
        let pattern = self.patterns.lookup(campaign.source_name());
        let inputs = WindowInputs {
            campaign,
            pattern: pattern.as_ref(),
            default_days: self.default_review_days,
        };

        let resolved = WINDOW_TIERS.iter().find_map(|(source, tier)| {
            let days = tier(&inputs)?;
            match add_days(selection_date, days) {
                Some(deadline) => Some((*source, days, deadline)),
                None => {
                    warn!(
                        "Skipping {:?} review window of {} days for source {:?}: date overflow",
                        source,
                        days,
                        campaign.source_name()
                    );
                    None
                }
            }
        });
        // Only a default window that itself overflows gets here.
        let (window_source, window_days, review_deadline) = resolved.unwrap_or_else(|| {
            warn!(
                "Clamping review deadline from {} to the latest representable date",
                selection_date
            );
            (
                ReviewWindowSource::Default,
                self.default_review_days,
                NaiveDate::MAX,
            )
        });

        debug!(
            "Review window for source {:?}: {} days from {}",
            campaign.source_name(),
            window_days,
            selection_date
        );

        ReviewDeadline {
            selection_date,
            review_deadline,
            window_days,
            window_source,
        }
    }

    pub fn calculate_review_deadline(
        &self,
        campaign: &Campaign,
        selection_date: Option<NaiveDate>,
    ) -> NaiveDate {
        self.resolve_review_deadline(campaign, selection_date)
            .review_deadline
    }

    /// [`calculate_review_deadline`](Self::calculate_review_deadline) as `YYYY-MM-DD`.
    pub fn calculate_review_deadline_string(
        &self,
        campaign: &Campaign,
        selection_date: Option<NaiveDate>,
    ) -> String {
        self.calculate_review_deadline(campaign, selection_date)
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Whole days of selection delay. Fractional averages are truncated.
    fn selection_delay_days(&self, pattern: Option<&SitePattern>) -> i64 {
        let days = pattern
            .map(|p| p.average_selection_delay_days)
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(self.default_selection_delay_days);
        whole_days(days)
    }
}

/// Truncates to whole days. The cast saturates, and NaN becomes 0.
fn whole_days(days: f64) -> i64 {
    days.trunc() as i64
}

/// Days from `today` until `target`; negative once it has passed.
pub fn d_day(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn estimator(today: NaiveDate) -> ReviewDeadlineEstimator<FixedClock> {
        ReviewDeadlineEstimator::new(Arc::new(SitePatternTable::new()), FixedClock(today))
    }

    fn campaign(source: &str, deadline: Option<&str>, review_days: Option<i64>) -> Campaign {
        Campaign {
            source: Some(source.to_string()),
            application_deadline: deadline.map(str::to_string),
            review_deadline_days: review_days,
            ..Default::default()
        }
    }

    #[test]
    fn test_crawled_days_win() {
        let est = estimator(ymd(2024, 1, 1));
        let resolved = est.resolve_review_deadline(
            &campaign("dinnerqueen", None, Some(10)),
            Some(ymd(2024, 3, 1)),
        );
        assert_eq!(resolved.window_source, ReviewWindowSource::Crawled);
        assert_eq!(resolved.review_deadline, ymd(2024, 3, 11));

        let reviewnote = est.calculate_review_deadline(
            &campaign("reviewnote", None, Some(10)),
            Some(ymd(2024, 3, 1)),
        );
        assert_eq!(reviewnote, ymd(2024, 3, 11));
    }

    #[test]
    fn test_site_pattern_then_default() {
        let est = estimator(ymd(2024, 1, 1));
        let selection = Some(ymd(2024, 3, 1));

        let from_pattern = est.resolve_review_deadline(&campaign("reviewnote", None, None), selection);
        assert_eq!(from_pattern.window_source, ReviewWindowSource::SitePattern);
        assert_eq!(from_pattern.window_days, 7);

        let fallback = est.resolve_review_deadline(&campaign("unknown-site", None, None), selection);
        assert_eq!(fallback.window_source, ReviewWindowSource::Default);
        assert_eq!(fallback.review_deadline, ymd(2024, 3, 8));
    }

    #[test]
    fn test_zero_crawled_days_falls_through() {
        let est = estimator(ymd(2024, 1, 1));
        let resolved = est.resolve_review_deadline(
            &campaign("dinnerqueen", None, Some(0)),
            Some(ymd(2024, 1, 1)),
        );
        assert_eq!(resolved.window_source, ReviewWindowSource::SitePattern);
        assert_eq!(resolved.window_days, 10);
    }

    #[test]
    fn test_dinnerqueen_string() {
        let est = estimator(ymd(2030, 6, 1));
        let c = campaign("dinnerqueen", None, None);
        let first = est.calculate_review_deadline_string(&c, Some(ymd(2024, 1, 1)));
        assert_eq!(first, "2024-01-11");
        assert_eq!(est.calculate_review_deadline_string(&c, Some(ymd(2024, 1, 1))), first);
    }

    #[test]
    fn test_selection_date_without_deadline_is_today() {
        let today = ymd(2024, 5, 15);
        let est = estimator(today);
        assert_eq!(est.estimate_selection_date(&campaign("dinnerqueen", None, None)), today);
    }

    #[test]
    fn test_past_deadline_anchors_to_today() {
        let today = ymd(2024, 5, 15);
        let est = estimator(today);
        let c = campaign("dinnerqueen", Some("2024-05-01"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 17));
    }

    #[test]
    fn test_future_deadline_adds_delay() {
        let today = ymd(2024, 5, 15);
        let est = estimator(today);
        let c = campaign("dinnerqueen", Some("2024-05-20T23:59:00"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 22));

        // Deadline today counts as not yet passed.
        let c = campaign("pavlovu", Some("2024-05-15"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 16));
    }

    #[test]
    fn test_fractional_delay_truncates() {
        let est = estimator(ymd(2024, 5, 15));
        let c = campaign("reviewnote", Some("2024-05-20"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 21));
    }

    #[test]
    fn test_unknown_site_uses_default_delay() {
        let est = estimator(ymd(2024, 5, 15));
        let c = campaign("nowhere", Some("2024-05-20"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 21));
    }

    #[test]
    fn test_malformed_deadline_is_today() {
        let today = ymd(2024, 5, 15);
        let est = estimator(today);
        let c = campaign("dinnerqueen", Some("soon"), None);
        assert_eq!(est.estimate_selection_date(&c), today);
    }

    #[test]
    fn test_estimated_selection_feeds_deadline() {
        let est = estimator(ymd(2024, 5, 15));
        let c = campaign("dinnerqueen", Some("2024-05-20"), None);
        // 05-20 + 2 = 05-22, + 10 = 06-01
        assert_eq!(est.calculate_review_deadline_string(&c, None), "2024-06-01");
    }

    #[test]
    fn test_configured_defaults() {
        let est = estimator(ymd(2024, 5, 15)).with_defaults(14, 3.0);
        let c = campaign("nowhere", Some("2024-05-20"), None);
        let resolved = est.resolve_review_deadline(&c, None);
        assert_eq!(resolved.selection_date, ymd(2024, 5, 23));
        assert_eq!(resolved.review_deadline, ymd(2024, 6, 6));
    }

    #[test]
    fn test_known_site_without_review_period_uses_default() {
        let table = SitePatternTable::from_patterns([SitePattern {
            site_name: "quietsite".to_string(),
            average_selection_delay_days: 2.0,
            review_period_days: None,
            last_updated: String::new(),
            sample_size: 0,
        }]);
        let est = ReviewDeadlineEstimator::new(Arc::new(table), FixedClock(ymd(2024, 1, 1)));
        let resolved =
            est.resolve_review_deadline(&campaign("quietsite", None, None), Some(ymd(2024, 3, 1)));
        assert_eq!(resolved.window_source, ReviewWindowSource::Default);
        assert_eq!(resolved.window_days, DEFAULT_REVIEW_DAYS);
        assert_eq!(resolved.review_deadline, ymd(2024, 3, 8));
    }

    #[test]
    fn test_huge_crawled_days_fall_through() {
        let est = estimator(ymd(2024, 1, 1));
        let c = campaign("dinnerqueen", None, Some(100_000_000));
        let resolved = est.resolve_review_deadline(&c, Some(ymd(2024, 3, 1)));
        assert_eq!(resolved.window_source, ReviewWindowSource::SitePattern);
        assert_eq!(resolved.review_deadline, ymd(2024, 3, 11));
        assert_eq!(
            est.calculate_review_deadline_string(&c, Some(ymd(2024, 3, 1))),
            "2024-03-11"
        );

        let c = campaign("nowhere", None, Some(i64::MAX));
        assert_eq!(est.calculate_review_deadline_string(&c, Some(ymd(2024, 3, 1))), "2024-03-08");
    }

    #[test]
    fn test_overflowing_default_window_clamps() {
        let est = estimator(ymd(2024, 1, 1)).with_defaults(i64::MAX, 1.0);
        let resolved =
            est.resolve_review_deadline(&campaign("nowhere", None, None), Some(ymd(2024, 3, 1)));
        assert_eq!(resolved.window_source, ReviewWindowSource::Default);
        assert_eq!(resolved.review_deadline, NaiveDate::MAX);
    }

    #[test]
    fn test_huge_selection_delay_uses_default() {
        let table = SitePatternTable::from_patterns([SitePattern {
            site_name: "slowsite".to_string(),
            average_selection_delay_days: 1e12,
            review_period_days: Some(5),
            last_updated: String::new(),
            sample_size: 0,
        }]);
        let est = ReviewDeadlineEstimator::new(Arc::new(table), FixedClock(ymd(2024, 5, 15)));
        let c = campaign("slowsite", Some("2024-05-20"), None);
        assert_eq!(est.estimate_selection_date(&c), ymd(2024, 5, 21));
        assert_eq!(est.calculate_review_deadline_string(&c, None), "2024-05-26");
    }

    #[test]
    fn test_d_day() {
        assert_eq!(d_day(ymd(2024, 5, 20), ymd(2024, 5, 15)), 5);
        assert_eq!(d_day(ymd(2024, 5, 10), ymd(2024, 5, 15)), -5);
        assert_eq!(d_day(ymd(2024, 5, 15), ymd(2024, 5, 15)), 0);
    }
}
