//! Pure transformation stages from validated records to dashboard series.
//!
//! Each stage takes every input explicitly and returns a fresh value, so a
//! caller reacting to a new file, date range or interval simply runs
//! [`Dashboard::build`] again.

mod aggregate;
mod filter;
mod granularity;
mod ranking;
mod summary;

pub use aggregate::{AxisFormat, TimeBucket, aggregate};
pub use filter::{DateRange, RANGE_CEILING, RANGE_FLOOR};
pub use granularity::{Granularity, Interval, UnknownInterval, select_granularity, span_days};
pub use ranking::{DEFAULT_TOP_N, ItemSales, rank_items};
pub use summary::{Summary, summarize};

use crate::types::SalesRecord;
use chrono::{NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};

/// Shown instead of charts when the date range matches no record.
pub const EMPTY_RANGE_MESSAGE: &str = "No data found for selected date range";

/// Shown instead of charts when the upload failed to parse.
pub const PARSE_ERROR_MESSAGE: &str = "Fix CSV errors to view data";

/// Inputs chosen by the user on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub interval: Interval,
    pub top_n: usize,
    pub week_start: Weekday,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            interval: Interval::Auto,
            top_n: DEFAULT_TOP_N,
            week_start: Weekday::Mon,
        }
    }
}

impl DashboardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Everything the charts need for one set of filtered records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub granularity: Granularity,
    pub axis_format: AxisFormat,
    pub series: Vec<TimeBucket>,
    pub top_items: Vec<ItemSales>,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    /// No record falls inside the requested range.
    Empty,
    Ready(Dashboard),
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardView::Empty => None,
            DashboardView::Ready(dashboard) => Some(dashboard),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_RANGE_MESSAGE)
    }
}

impl Dashboard {
    /// Runs filter, granularity selection, aggregation, ranking and summary
    /// over `records`.
    pub fn build(records: &[SalesRecord], query: &DashboardQuery) -> DashboardView {
        let filtered = query.range().filter(records);
        debug!(
            "Filtered {} of {} records to range {:?}..={:?}",
            filtered.len(),
            records.len(),
            query.start,
            query.end
        );

        if filtered.is_empty() {
            return DashboardView::Empty;
        }

        Self::from_filtered(&filtered, query)
    }

    fn from_filtered(filtered: &[SalesRecord], query: &DashboardQuery) -> DashboardView {
        let granularity = select_granularity(filtered, query.interval);
        let series = aggregate(filtered, granularity, query.week_start);
        debug!("Aggregated into {} {} buckets", series.len(), granularity);

        DashboardView::Ready(Dashboard {
            granularity,
            axis_format: AxisFormat::for_buckets(&series),
            series,
            top_items: rank_items(filtered, query.top_n),
            summary: summarize(filtered),
        })
    }
}
