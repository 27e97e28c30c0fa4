use super::dto::{ColumnIndex, ColumnMapping, CsvSalesRow};
use crate::errors::SalesResult;
use crate::parsers::traits::Parser;
use csv::ReaderBuilder;

#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    columns: ColumnMapping,
}

impl CsvParser {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    /// Splits raw export bytes into rows, in file order.
    ///
    /// Blank content yields no rows. Every other row is returned even when
    /// its cells are garbage or blank, validation happens when the row is
    /// converted into a record. Bytes that are not UTF-8 are a CSV error.
    pub fn parse_bytes(&self, content: &[u8]) -> SalesResult<Vec<CsvSalesRow>> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let index = ColumnIndex::resolve(reader.headers()?, &self.columns)?;

        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            rows.push(index.read(line, &record));
        }

        Ok(rows)
    }
}

impl Parser for CsvParser {
    type Output = CsvSalesRow;

    fn is_supported(filename: &str) -> bool {
        filename.to_lowercase().ends_with(".csv")
    }

    fn parse(&self, content: &str) -> SalesResult<Vec<Self::Output>> {
        self.parse_bytes(content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SalesParseError;
    use rstest::rstest;
    use rust_decimal::Decimal;

    const SAMPLE_CSV: &str = "Date,ITEAMS,PAYMENT,GST,ITEM RATE,PROFIT,QUANTITY,RETURN / CANCEL
01-01-2024,Widget,100,10,50,20,2,
02-01-2024,Gadget,250.50,25.05,250.50,40,1,Cancel
";

    #[rstest]
    #[case("sales.csv", true)]
    #[case("SALES.CSV", true)]
    #[case("export.2024.csv", true)]
    #[case("sales.xlsx", false)]
    #[case("sales", false)]
    fn test_is_supported(#[case] filename: &str, #[case] expected: bool) {
        assert_eq!(CsvParser::is_supported(filename), expected);
    }

    #[test]
    fn test_parse_valid_csv() {
        let rows = CsvParser::default().parse(SAMPLE_CSV).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].item.as_deref(), Some("Widget"));
        assert_eq!(rows[1].payment.value(), Decimal::new(25050, 2));
        assert_eq!(rows[1].return_flag.as_deref(), Some("Cancel"));
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let csv = "Date,ITEAMS\n05-01-2024,B\n01-01-2024,A\n03-01-2024,C\n";
        let rows = CsvParser::default().parse(csv).unwrap();
        let items: Vec<_> = rows.iter().map(|r| r.item.clone().unwrap()).collect();
        assert_eq!(items, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_skips_empty_lines_only() {
        let csv = "Date,ITEAMS\n\n01-01-2024,A\n,\n\n02-01-2024,B\n";
        let rows = CsvParser::default().parse(csv).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].date.is_some());
        assert_eq!(rows[1].item.as_deref(), Some(""));
        assert_eq!(rows[2].item.as_deref(), Some("B"));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let result = CsvParser::default().parse_bytes(b"Date,ITEAMS\n01-01-2024,\xff\xfe\n");
        assert!(matches!(result, Err(SalesParseError::Csv(_))));
    }

    #[test]
    fn test_parse_bytes_matches_parse() {
        let rows = CsvParser::default().parse_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].item.as_deref(), Some("Gadget"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "Date,ITEAMS,PAYMENT\n01-01-2024,\"Widget, large\",\"1200.00\"\n";
        let rows = CsvParser::default().parse(csv).unwrap();
        assert_eq!(rows[0].item.as_deref(), Some("Widget, large"));
        assert_eq!(rows[0].payment.value(), Decimal::new(1200, 0));
    }

    #[rstest]
    #[case("")]
    #[case("   \n\n")]
    fn test_parse_blank_content(#[case] content: &str) {
        assert!(CsvParser::default().parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_header_only() {
        assert!(CsvParser::default().parse("Date,ITEAMS\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_date_column() {
        let result = CsvParser::default().parse("Day,ITEAMS\n01-01-2024,A\n");
        assert!(matches!(result, Err(SalesParseError::MissingColumn(_))));
    }

    #[test]
    fn test_parse_custom_columns() {
        let columns = ColumnMapping {
            date: "Order Date".to_string(),
            item: "SKU".to_string(),
            ..ColumnMapping::default()
        };
        let rows = CsvParser::new(columns)
            .parse("Order Date,SKU\n01-01-2024,W-1\n")
            .unwrap();
        assert_eq!(rows[0].item.as_deref(), Some("W-1"));
    }
}
