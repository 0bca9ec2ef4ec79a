//! Configuration from environment variables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level Chehum configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChehumConfig {
    /// HTTP server port.
    pub port: u16,
    /// Offset from UTC, in hours, that defines "today" (9 for KST).
    pub utc_offset_hours: i32,
    /// Review window used when neither the listing nor the site supplies one.
    pub default_review_days: i64,
    /// Selection delay used when the source site has no pattern.
    pub default_selection_delay_days: f64,
}

impl Default for ChehumConfig {
    fn default() -> Self {
        Self {
            port: 3010,
            utc_offset_hours: 9,
            default_review_days: 7,
            default_selection_delay_days: 1.0,
        }
    }
}

impl ChehumConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Missing variables fall back to [`ChehumConfig::default`]; present but
    /// unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            utc_offset_hours: parse_var(&lookup, "CHEHUM_UTC_OFFSET_HOURS")?
                .unwrap_or(defaults.utc_offset_hours),
            default_review_days: parse_var(&lookup, "CHEHUM_DEFAULT_REVIEW_DAYS")?
                .unwrap_or(defaults.default_review_days),
            default_selection_delay_days: parse_var(
                &lookup,
                "CHEHUM_DEFAULT_SELECTION_DELAY_DAYS",
            )?
            .unwrap_or(defaults.default_selection_delay_days),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(Error::Config(format!(
                "CHEHUM_UTC_OFFSET_HOURS out of range: {}",
                self.utc_offset_hours
            )));
        }
        if self.default_review_days <= 0 {
            return Err(Error::Config(format!(
                "CHEHUM_DEFAULT_REVIEW_DAYS must be positive, got {}",
                self.default_review_days
            )));
        }
        if !self.default_selection_delay_days.is_finite() || self.default_selection_delay_days < 0.0 {
            return Err(Error::Config(format!(
                "CHEHUM_DEFAULT_SELECTION_DELAY_DAYS must be a non-negative number, got {}",
                self.default_selection_delay_days
            )));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}"))),
    }
}
