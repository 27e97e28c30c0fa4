mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::{ColumnMapping, CsvSalesRow, ITEMS_FALLBACK_COLUMN};
    pub use super::parser::CsvParser;
    pub use super::types::{CsvAmount, CsvDate, CsvQuantity};
}
