//! Holiday calendars: read-only lookups of non-trading dates.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// Lookup of exchange holidays keyed by `YYYY-MM-DD` date strings.
///
/// Failures are passed through untouched by the session clock.
pub trait HolidayCalendar: Send + Sync {
    /// True if `date` is listed as a holiday.
    fn is_listed(&self, date: &str) -> Result<bool>;
}

impl<H: HolidayCalendar + ?Sized> HolidayCalendar for std::sync::Arc<H> {
    fn is_listed(&self, date: &str) -> Result<bool> {
        (**self).is_listed(date)
    }
}

/// In-memory holiday set.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<String>,
}

impl HolidaySet {
    pub fn new<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_listed(&self, date: &str) -> Result<bool> {
        Ok(self.dates.contains(date))
    }
}

/// Holiday list stored as a JSON array of date strings, e.g.
/// `["2024-01-26", "2024-03-08"]`.
///
/// The file is re-read on every query so edits take effect immediately.
#[derive(Debug, Clone)]
pub struct HolidayFile {
    path: PathBuf,
}

impl HolidayFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the whole list into memory.
    pub fn load(&self) -> Result<HolidaySet> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read holidays file {}", self.path.display()))?;
        let dates: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid holidays file {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = dates.len(), "Loaded holidays");
        Ok(HolidaySet::new(dates))
    }
}

impl HolidayCalendar for HolidayFile {
    fn is_listed(&self, date: &str) -> Result<bool> {
        self.load()?.is_listed(date)
    }
}
