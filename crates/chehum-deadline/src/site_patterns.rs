//! Per-site selection and review timing patterns.
//!
//! Seeded from a static table. Rows can be recalibrated through
//! [`SitePatternTable::update`], which is an administrative hook; nothing in
//! the estimator writes to the table.

use std::collections::HashMap;

use chehum_core::{Error, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Upper bound for any day count a pattern may carry.
pub const MAX_PATTERN_DAYS: i64 = 3650;

/// Timing statistics for one source site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePattern {
    pub site_name: String,
    /// Average days from application deadline to selection announcement.
    pub average_selection_delay_days: f64,
    /// Default review-writing window.
    pub review_period_days: Option<i64>,
    pub last_updated: String,
    /// Number of observations behind the averages.
    pub sample_size: u64,
}

/// Partial update; `None` fields keep their current value.
///
/// `review_period_days` distinguishes "absent" (`None`) from an explicit
/// JSON `null` (`Some(None)`), which clears the period.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitePatternUpdate {
    #[serde(default)]
    pub average_selection_delay_days: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub review_period_days: Option<Option<i64>>,
    #[serde(default)]
    pub sample_size: Option<u64>,
}

impl SitePatternUpdate {
    /// Reject day counts outside `0..=MAX_PATTERN_DAYS` and non-finite delays.
    pub fn validate(&self) -> Result<()> {
        if let Some(delay) = self.average_selection_delay_days {
            if !delay.is_finite() || !(0.0..=MAX_PATTERN_DAYS as f64).contains(&delay) {
                return Err(Error::InvalidInput(format!(
                    "average_selection_delay_days out of range: {delay}"
                )));
            }
        }
        if let Some(Some(days)) = self.review_period_days {
            if !(0..=MAX_PATTERN_DAYS).contains(&days) {
                return Err(Error::InvalidInput(format!(
                    "review_period_days out of range: {days}"
                )));
            }
        }
        Ok(())
    }
}

/// `(site, average selection delay, review period)`.
const SEED_PATTERNS: &[(&str, f64, Option<i64>)] = &[
    ("reviewnote", 1.5, Some(7)),
    ("dinnerqueen", 2.0, Some(10)),
    ("reviewplace", 1.0, Some(7)),
    ("seoulouba", 1.5, Some(7)),
    ("modooexperience", 2.0, Some(7)),
    ("pavlovu", 1.0, Some(7)),
    ("gangnam", 1.5, Some(7)),
];

const SITE_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("seoulouba", "서울오빠"),
    ("reviewplace", "리뷰플레이스"),
    ("reviewnote", "리뷰노트"),
    ("dinnerqueen", "디너의여왕"),
    ("modooexperience", "모두의체험단"),
    ("pavlovu", "파블로체험단"),
    ("gangnam", "강남맛집"),
];

/// Korean display name of a source site.
pub fn site_display_name(source: &str) -> Option<&'static str> {
    SITE_DISPLAY_NAMES
        .iter()
        .find(|(site, _)| *site == source)
        .map(|(_, name)| *name)
}

/// Site patterns keyed by site name.
pub struct SitePatternTable {
    patterns: RwLock<HashMap<String, SitePattern>>,
}

impl SitePatternTable {
    /// Table seeded with the built-in patterns.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self::from_patterns(SEED_PATTERNS.iter().map(|&(site, delay, review)| SitePattern {
            site_name: site.to_string(),
            average_selection_delay_days: delay,
            review_period_days: review,
            last_updated: now.clone(),
            sample_size: 0,
        }))
    }

    pub fn from_patterns(patterns: impl IntoIterator<Item = SitePattern>) -> Self {
        let patterns = patterns
            .into_iter()
            .map(|p| (p.site_name.clone(), p))
            .collect();
        Self {
            patterns: RwLock::new(patterns),
        }
    }

    /// Pattern for `site_name`, or `None` for an unknown site.
    pub fn lookup(&self, site_name: &str) -> Option<SitePattern> {
        self.patterns.read().get(site_name).cloned()
    }

    /// Merge `update` into an existing row and refresh `last_updated`.
    ///
    /// Returns `Ok(false)` and changes nothing when the site is unknown, and
    /// an error without touching the row when `update` fails validation.
    pub fn update(&self, site_name: &str, update: SitePatternUpdate) -> Result<bool> {
        update.validate()?;
        let mut patterns = self.patterns.write();
        let Some(pattern) = patterns.get_mut(site_name) else {
            debug!("Ignoring pattern update for unknown site: {}", site_name);
            return Ok(false);
        };
        if let Some(delay) = update.average_selection_delay_days {
            pattern.average_selection_delay_days = delay;
        }
        if let Some(days) = update.review_period_days {
            pattern.review_period_days = days;
        }
        if let Some(n) = update.sample_size {
            pattern.sample_size = n;
        }
        pattern.last_updated = chrono::Utc::now().to_rfc3339();
        info!("Site pattern updated: {}", site_name);
        Ok(true)
    }

    /// All patterns, sorted by site name.
    pub fn list(&self) -> Vec<SitePattern> {
        let mut all: Vec<SitePattern> = self.patterns.read().values().cloned().collect();
        all.sort_by(|a, b| a.site_name.cmp(&b.site_name));
        all
    }

    pub fn len(&self) -> usize {
        self.patterns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.read().is_empty()
    }
}

impl Default for SitePatternTable {
    fn default() -> Self {
        Self::new()
    }
}
