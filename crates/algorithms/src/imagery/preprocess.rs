//! Scene preprocessing for orbit composites
//!
//! Before a temporal composite is evaluated, the orbit list can be narrowed
//! to an explicit allow-list of acquisition dates. Only the calendar date of
//! an orbit's `dateFrom` is compared; time of day and zone are discarded.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use evalpix_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One acquisition orbit as the engine describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    /// RFC 3339 start of the acquisition, e.g. `2023-08-01T10:12:00Z`
    pub date_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Orbit {
    pub fn new(date_from: impl Into<String>) -> Self {
        Self {
            date_from: date_from.into(),
            date_to: None,
        }
    }

    /// Calendar date of `date_from`.
    pub fn start_date(&self) -> Result<NaiveDate> {
        parse_date_part(&self.date_from)
    }
}

/// Parse the date part (before any `T`) of an ISO 8601 date or date-time.
pub fn parse_date_part(value: &str) -> Result<NaiveDate> {
    let day = value.split_once('T').map_or(value, |(day, _)| day);
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").map_err(|e| Error::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Allow-list of acquisition dates.
///
/// An empty allow-list retains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateFilter {
    allowed: BTreeSet<NaiveDate>,
}

impl DateFilter {
    /// Build from ISO date strings; a time part, if any, is ignored.
    pub fn new<I, S>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = dates
            .into_iter()
            .map(|d| parse_date_part(d.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { allowed })
    }

    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            allowed: dates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Allowed dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.allowed.iter().copied()
    }

    /// Whether the orbit started on an allowed date.
    pub fn allows(&self, orbit: &Orbit) -> Result<bool> {
        Ok(self.allowed.contains(&orbit.start_date()?))
    }

    /// Keep the orbits that started on an allowed date, in their original
    /// order.
    pub fn retain(&self, orbits: Vec<Orbit>) -> Result<Vec<Orbit>> {
        let total = orbits.len();
        let mut kept = Vec::with_capacity(total);
        for orbit in orbits {
            if self.allows(&orbit)? {
                kept.push(orbit);
            }
        }
        debug!(kept = kept.len(), total, allowed = self.len(), "date filter applied");
        Ok(kept)
    }

    /// Samples of the retained orbits.
    ///
    /// `samples[i]` belongs to `orbits[i]`; both slices must have the same
    /// length.
    pub fn select(&self, orbits: &[Orbit], samples: &[Sample]) -> Result<Vec<Sample>> {
        if orbits.len() != samples.len() {
            return Err(Error::ShapeMismatch {
                what: "orbit samples".into(),
                expected: orbits.len(),
                actual: samples.len(),
            });
        }
        let mut kept = Vec::with_capacity(samples.len());
        for (orbit, sample) in orbits.iter().zip(samples) {
            if self.allows(orbit)? {
                kept.push(*sample);
            }
        }
        Ok(kept)
    }
}
