use crate::{errors::SalesParseError, parsers::prelude::*};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label given to rows whose RETURN / CANCEL flag is empty.
pub const SALE: &str = "SALE";

/// Substrings of a transaction type that mark a return or cancellation.
pub const RETURN_MARKERS: [&str; 2] = ["CANCEL", "RR"];

/// A validated row of the sales export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub item: Option<String>,
    pub payment: Decimal,
    pub gst: Decimal,
    pub rate: Decimal,
    pub profit: Decimal,
    pub quantity: i64,
    pub transaction_type: String,
}

impl SalesRecord {
    /// Payment with the GST component taken out.
    pub fn net_revenue(&self) -> Decimal {
        self.payment.saturating_sub(self.gst)
    }

    pub fn is_return_or_cancel(&self) -> bool {
        let kind = self.transaction_type.to_uppercase();
        RETURN_MARKERS.iter().any(|marker| kind.contains(marker))
    }
}

impl TryFrom<CsvSalesRow> for SalesRecord {
    type Error = SalesParseError;

    fn try_from(row: CsvSalesRow) -> Result<Self, Self::Error> {
        let date = row
            .date
            .ok_or(SalesParseError::MissingDate { line: row.line })?
            .parse(row.line)?;

        let transaction_type = row
            .return_flag
            .map(|flag| flag.trim().to_uppercase())
            .filter(|flag| !flag.is_empty())
            .unwrap_or_else(|| SALE.to_string());

        Ok(SalesRecord {
            date,
            item: row.item,
            payment: row.payment.value(),
            gst: row.gst.value(),
            rate: row.rate.value(),
            profit: row.profit.value(),
            quantity: row.quantity.value(),
            transaction_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(date: Option<&str>, return_flag: Option<&str>) -> CsvSalesRow {
        CsvSalesRow {
            line: 2,
            date: date.map(CsvDate::from),
            item: Some("Widget".to_string()),
            payment: "100".into(),
            gst: "10".into(),
            rate: "50".into(),
            profit: "20".into(),
            quantity: "2".into(),
            return_flag: return_flag.map(str::to_string),
        }
    }

    #[test]
    fn test_record_from_row() {
        let record = SalesRecord::try_from(row(Some("15-03-2024"), None)).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.item.as_deref(), Some("Widget"));
        assert_eq!(record.payment, Decimal::from(100));
        assert_eq!(record.gst, Decimal::from(10));
        assert_eq!(record.rate, Decimal::from(50));
        assert_eq!(record.profit, Decimal::from(20));
        assert_eq!(record.quantity, 2);
        assert_eq!(record.net_revenue(), Decimal::from(90));
    }

    #[rstest]
    #[case(None, "SALE")]
    #[case(Some(""), "SALE")]
    #[case(Some("   "), "SALE")]
    #[case(Some("Cancel"), "CANCEL")]
    #[case(Some("rr"), "RR")]
    #[case(Some(" Return "), "RETURN")]
    fn test_transaction_type(#[case] flag: Option<&str>, #[case] expected: &str) {
        let record = SalesRecord::try_from(row(Some("01-01-2024"), flag)).unwrap();
        assert_eq!(record.transaction_type, expected);
    }

    #[rstest]
    #[case("SALE", false)]
    #[case("CANCEL", true)]
    #[case("CANCELLED", true)]
    #[case("RR", true)]
    #[case("CUSTOMER RR", true)]
    #[case("cancel", true)]
    #[case("RETURN", false)]
    fn test_is_return_or_cancel(#[case] kind: &str, #[case] expected: bool) {
        let mut record = SalesRecord::try_from(row(Some("01-01-2024"), None)).unwrap();
        record.transaction_type = kind.to_string();
        assert_eq!(record.is_return_or_cancel(), expected);
    }

    #[test]
    fn test_net_revenue_saturates() {
        let mut record = SalesRecord::try_from(row(Some("01-01-2024"), None)).unwrap();
        record.payment = Decimal::MIN;
        record.gst = Decimal::MAX;
        assert_eq!(record.net_revenue(), Decimal::MIN);
    }

    #[test]
    fn test_missing_date_is_an_error() {
        let result = SalesRecord::try_from(row(None, None));
        assert!(matches!(result, Err(SalesParseError::MissingDate { line: 2 })));
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let result = SalesRecord::try_from(row(Some("32-01-2024"), None));
        assert!(matches!(result, Err(SalesParseError::InvalidDate { line: 2, .. })));
    }

    #[test]
    fn test_record_serialization() {
        let record = SalesRecord::try_from(row(Some("01-01-2024"), Some("Cancel"))).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("2024-01-01"));
        assert!(json.contains("CANCEL"));

        let deserialized: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
