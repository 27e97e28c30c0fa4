use super::types::{CsvAmount, CsvDate, CsvQuantity};
use crate::errors::{SalesParseError, SalesResult};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Fallback header for the item column when the configured one is absent.
pub const ITEMS_FALLBACK_COLUMN: &str = "ITEMS";

/// Header names of the columns the pipeline reads.
///
/// The defaults match the marketplace seller export, including its
/// misspelled `ITEAMS` item column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub date: String,
    pub item: String,
    pub payment: String,
    pub gst: String,
    pub rate: String,
    pub profit: String,
    pub quantity: String,
    pub return_flag: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            item: "ITEAMS".to_string(),
            payment: "PAYMENT".to_string(),
            gst: "GST".to_string(),
            rate: "ITEM RATE".to_string(),
            profit: "PROFIT".to_string(),
            quantity: "QUANTITY".to_string(),
            return_flag: "RETURN / CANCEL".to_string(),
        }
    }
}

/// Column positions resolved against a concrete header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    date: usize,
    item: Option<usize>,
    payment: Option<usize>,
    gst: Option<usize>,
    rate: Option<usize>,
    profit: Option<usize>,
    quantity: Option<usize>,
    return_flag: Option<usize>,
}

impl ColumnIndex {
    pub(crate) fn resolve(headers: &StringRecord, columns: &ColumnMapping) -> SalesResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let date = find(&columns.date)
            .ok_or_else(|| SalesParseError::MissingColumn(columns.date.clone()))?;

        Ok(Self {
            date,
            item: find(&columns.item).or_else(|| find(ITEMS_FALLBACK_COLUMN)),
            payment: find(&columns.payment),
            gst: find(&columns.gst),
            rate: find(&columns.rate),
            profit: find(&columns.profit),
            quantity: find(&columns.quantity),
            return_flag: find(&columns.return_flag),
        })
    }

    pub(crate) fn read(&self, line: u64, record: &StringRecord) -> CsvSalesRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);

        CsvSalesRow {
            line,
            date: cell(Some(self.date)).map(CsvDate::from),
            item: cell(self.item),
            payment: cell(self.payment).into(),
            gst: cell(self.gst).into(),
            rate: cell(self.rate).into(),
            profit: cell(self.profit).into(),
            quantity: cell(self.quantity).into(),
            return_flag: cell(self.return_flag),
        }
    }
}

/// One data row of the export, cells kept as text.
///
/// `None` means the cell is absent (column missing or row too short), which
/// is distinct from an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvSalesRow {
    /// 1-based line of the row in the input, header included.
    pub line: u64,
    pub date: Option<CsvDate>,
    pub item: Option<String>,
    pub payment: CsvAmount,
    pub gst: CsvAmount,
    pub rate: CsvAmount,
    pub profit: CsvAmount,
    pub quantity: CsvQuantity,
    pub return_flag: Option<String>,
}
