//! Campaign listing record as crawled from a source site.
//!
//! The search and deadline cores only read campaigns; persistence belongs to
//! the listings store.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A campaign listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Source site identifier (e.g. `"dinnerqueen"`).
    #[serde(default)]
    pub source: Option<String>,
    /// ISO date or date-time the application window closes.
    #[serde(default)]
    pub application_deadline: Option<String>,
    /// Review window in days taken from the listing text, when the crawler found one.
    #[serde(default)]
    pub review_deadline_days: Option<i64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

impl Campaign {
    /// Source identifier, empty when unknown.
    pub fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// Calendar date of the application deadline.
    ///
    /// `Ok(None)` when the campaign has no deadline, `Err` when the stored
    /// value is not a recognisable date.
    pub fn application_deadline_date(&self) -> Result<Option<NaiveDate>> {
        match self.application_deadline.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_calendar_date(raw).map(Some),
        }
    }
}

/// Parse `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS` into a
/// calendar date. Time of day is dropped.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt.date());
        }
    }
    Err(Error::InvalidDate(raw.to_string()))
}
