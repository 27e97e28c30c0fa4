use crate::types::SalesRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earliest day considered when only an end bound is given.
pub const RANGE_FLOOR: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Latest day considered when only a start bound is given.
pub const RANGE_CEILING: NaiveDate = match NaiveDate::from_ymd_opt(2100, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MAX,
};

/// Inclusive window of calendar days.
///
/// Both bounds are whole days: `start` covers the day from midnight and
/// `end` covers the day up to its last instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Bounds with the missing side replaced by its sentinel.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (
            self.start.unwrap_or(RANGE_FLOOR),
            self.end.unwrap_or(RANGE_CEILING),
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let (start, end) = self.bounds();
        start <= date && date <= end
    }

    /// Records inside the window, in their original order.
    pub fn filter(&self, records: &[SalesRecord]) -> Vec<SalesRecord> {
        if self.is_unbounded() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|record| self.contains(record.date))
            .cloned()
            .collect()
    }
}
