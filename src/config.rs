//! Session configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::session::{SessionHours, TIME_FORMAT};

/// Configuration for the session clock and the wait loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Daily open and close
    pub hours: SessionHours,

    /// JSON list of holiday dates; no file means weekends only
    pub holidays_file: Option<PathBuf>,

    /// Slice length for the cancellable wait (seconds)
    pub poll_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hours: SessionHours::default(),
            holidays_file: None,
            poll_interval_secs: 1,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables (a `.env` file is loaded first if present):
    /// - MARKET_OPEN (HH:MM:SS, defaults to 09:15:00)
    /// - MARKET_CLOSE (HH:MM:SS, defaults to 15:30:00)
    /// - HOLIDAYS_FILE (optional)
    /// - WAIT_POLL_SECS (defaults to 1)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let open = match lookup("MARKET_OPEN") {
            Some(v) => parse_time(&v).context("Invalid MARKET_OPEN")?,
            None => defaults.hours.open,
        };
        let close = match lookup("MARKET_CLOSE") {
            Some(v) => parse_time(&v).context("Invalid MARKET_CLOSE")?,
            None => defaults.hours.close,
        };
        if close < open {
            anyhow::bail!("MARKET_CLOSE {} is before MARKET_OPEN {}", close, open);
        }

        let poll_interval_secs = match lookup("WAIT_POLL_SECS") {
            Some(v) => v.trim().parse().context("Invalid WAIT_POLL_SECS")?,
            None => defaults.poll_interval_secs,
        };

        Ok(Self {
            hours: SessionHours::new(open, close),
            holidays_file: lookup("HOLIDAYS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            poll_interval_secs,
        })
    }
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .with_context(|| format!("expected HH:MM:SS, got {:?}", value))
}
