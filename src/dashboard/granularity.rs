use crate::types::SalesRecord;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of the time buckets of the profit/revenue series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// Bucket size for records spanning `span_days` days.
    pub fn for_span(span_days: i64) -> Self {
        match span_days {
            ..=7 => Granularity::Day,
            ..=90 => Granularity::Week,
            ..=365 => Granularity::Month,
            _ => Granularity::Year,
        }
    }

    /// First day of the period containing `date`.
    pub fn period_start(&self, date: NaiveDate, week_start: Weekday) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => date.week(week_start).first_day(),
            Granularity::Month => date - TimeDelta::days(i64::from(date.day0())),
            Granularity::Year => date - TimeDelta::days(i64::from(date.ordinal0())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        f.write_str(name)
    }
}

/// Interval picked by the user; `Auto` lets the data span decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Auto,
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    pub fn fixed(&self) -> Option<Granularity> {
        match self {
            Interval::Auto => None,
            Interval::Day => Some(Granularity::Day),
            Interval::Week => Some(Granularity::Week),
            Interval::Month => Some(Granularity::Month),
            Interval::Year => Some(Granularity::Year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown interval '{0}', expected auto, day, week, month or year")]
pub struct UnknownInterval(pub String);

impl FromStr for Interval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Interval::Auto),
            "day" | "daily" => Ok(Interval::Day),
            "week" | "weekly" => Ok(Interval::Week),
            "month" | "monthly" => Ok(Interval::Month),
            "year" | "yearly" => Ok(Interval::Year),
            _ => Err(UnknownInterval(s.to_string())),
        }
    }
}

/// Whole days between the earliest and latest record.
pub fn span_days(records: &[SalesRecord]) -> i64 {
    let mut dates = records.iter().map(|r| r.date);
    let Some(first) = dates.next() else {
        return 0;
    };
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    (max - min).num_days()
}

/// Resolves the bucket size: an explicit choice wins, otherwise the span of
/// `records` decides. Empty input resolves to `Day`.
pub fn select_granularity(records: &[SalesRecord], interval: Interval) -> Granularity {
    interval
        .fixed()
        .unwrap_or_else(|| Granularity::for_span(span_days(records)))
}
