use super::granularity::Granularity;
use crate::types::SalesRecord;
use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one period of the profit/revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// First day of the period.
    pub date: NaiveDate,
    pub total_profit: Decimal,
    /// Sum of `payment - gst`.
    pub net_revenue: Decimal,
}

/// Groups `records` into periods of `granularity` and sums profit and net
/// revenue per period.
///
/// Only periods that contain at least one record are returned, oldest first.
/// Weeks start on `week_start`. Totals saturate at the `Decimal` range.
pub fn aggregate(
    records: &[SalesRecord],
    granularity: Granularity,
    week_start: Weekday,
) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<NaiveDate, TimeBucket> = BTreeMap::new();

    for record in records {
        let key = granularity.period_start(record.date, week_start);
        let bucket = buckets.entry(key).or_insert_with(|| TimeBucket {
            date: key,
            total_profit: Decimal::ZERO,
            net_revenue: Decimal::ZERO,
        });
        bucket.total_profit = bucket.total_profit.saturating_add(record.profit);
        bucket.net_revenue = bucket.net_revenue.saturating_add(record.net_revenue());
    }

    buckets.into_values().collect()
}

/// Tick label layout for the series' date axis, chosen from the distance
/// between the first and last bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisFormat {
    /// `Mar 05`
    MonthDay,
    /// `Mar 24`
    MonthShortYear,
    /// `Mar 2024`
    MonthYear,
    /// `2024`
    Year,
}

impl AxisFormat {
    pub fn for_buckets(buckets: &[TimeBucket]) -> Self {
        let span = match (buckets.first(), buckets.last()) {
            (Some(first), Some(last)) => (last.date - first.date).num_days(),
            _ => 0,
        };
        match span {
            ..=7 => AxisFormat::MonthDay,
            ..=90 => AxisFormat::MonthShortYear,
            ..=365 => AxisFormat::MonthYear,
            _ => AxisFormat::Year,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            AxisFormat::MonthDay => "%b %d",
            AxisFormat::MonthShortYear => "%b %y",
            AxisFormat::MonthYear => "%b %Y",
            AxisFormat::Year => "%Y",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}
