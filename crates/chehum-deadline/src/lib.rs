//! Chehum Deadline — per-site timing patterns and review-deadline estimation.

pub mod clock;
pub mod estimator;
pub mod site_patterns;

pub use clock::{Clock, FixedClock, SystemClock};
pub use estimator::{d_day, ReviewDeadline, ReviewDeadlineEstimator, ReviewWindowSource};
pub use site_patterns::{site_display_name, SitePattern, SitePatternTable, SitePatternUpdate};
