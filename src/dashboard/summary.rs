use crate::types::SalesRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar totals over a set of records.
///
/// Returns and cancellations are counted as orders and their amounts are
/// summed as exported, signs untouched. Sums saturate at the `Decimal` range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub order_count: usize,
    pub returns_count: usize,
    pub gross_profit: Decimal,
    /// Revenue excluding GST.
    pub gross_revenue: Decimal,
}

pub fn summarize(records: &[SalesRecord]) -> Summary {
    records.iter().fold(
        Summary {
            order_count: records.len(),
            ..Summary::default()
        },
        |mut summary, record| {
            if record.is_return_or_cancel() {
                summary.returns_count += 1;
            }
            summary.gross_profit = summary.gross_profit.saturating_add(record.profit);
            summary.gross_revenue = summary.gross_revenue.saturating_add(record.net_revenue());
            summary
        },
    )
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Orders: {}", self.order_count)?;
        writeln!(f, "Returns/Cancellations: {}", self.returns_count)?;
        writeln!(f, "Gross Profit: {}", rupees(self.gross_profit))?;
        write!(f, "Total Revenue (Excl. GST): {}", rupees(self.gross_revenue))
    }
}

/// Indian-grouped rupee amount with at most two decimals: `₹12,34,567.5`.
pub fn rupees(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut text = String::from("₹");
    if rounded.is_sign_negative() && !rounded.is_zero() {
        text.push('-');
    }
    text.push_str(&group_indian(whole));
    if let Some(fraction) = fraction {
        text.push('.');
        text.push_str(fraction);
    }
    text
}

// Last three digits, then pairs.
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }
    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::str::FromStr;

    fn record(kind: &str, payment: &str, gst: &str, profit: &str) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            item: Some("Widget".to_string()),
            payment: Decimal::from_str(payment).unwrap(),
            gst: Decimal::from_str(gst).unwrap(),
            rate: Decimal::ZERO,
            profit: Decimal::from_str(profit).unwrap(),
            quantity: 1,
            transaction_type: kind.to_string(),
        }
    }

    #[test]
    fn test_summarize() {
        let records = vec![
            record("SALE", "100", "10", "20"),
            record("CANCEL", "50", "5", "-5"),
            record("RR", "30", "3", "0"),
            record("SALE", "19.99", "1.00", "4.50"),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.order_count, 4);
        assert_eq!(summary.returns_count, 2);
        assert_eq!(summary.gross_profit, Decimal::from_str("19.50").unwrap());
        assert_eq!(summary.gross_revenue, Decimal::from_str("180.99").unwrap());
    }

    #[test]
    fn test_summarize_saturates_huge_amounts() {
        let huge = "50000000000000000000000000000";
        let records = vec![record("SALE", huge, "0", huge), record("SALE", huge, "0", huge)];
        let summary = summarize(&records);

        assert_eq!(summary.gross_profit, Decimal::MAX);
        assert_eq!(summary.gross_revenue, Decimal::MAX);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(&[record("SALE", "100", "10", "20.125")]);
        let text = summary.to_string();
        assert!(text.contains("Total Orders: 1"));
        assert!(text.contains("Returns/Cancellations: 0"));
        assert!(text.contains("Gross Profit: ₹20.13"));
        assert!(text.contains("Total Revenue (Excl. GST): ₹90"));
    }

    #[rstest]
    #[case("0", "₹0")]
    #[case("0.001", "₹0")]
    #[case("999", "₹999")]
    #[case("1000", "₹1,000")]
    #[case("100000", "₹1,00,000")]
    #[case("1234567.5", "₹12,34,567.5")]
    #[case("12345678.905", "₹1,23,45,678.91")]
    #[case("-1500", "₹-1,500")]
    #[case("-0.004", "₹0")]
    fn test_rupees(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(rupees(Decimal::from_str(amount).unwrap()), expected);
    }
}
