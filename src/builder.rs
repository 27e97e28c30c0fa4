use std::fs;

use crate::{errors::SalesParseError, parsers::prelude::*, types::SalesRecord};
use log::{debug, warn};

#[derive(Default)]
pub struct ParserBuilder {
    content: Option<String>,
    filepath: Option<String>,
    columns: Option<ColumnMapping>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Parses the export into records, all or nothing: the first bad date
    /// rejects the whole file.
    pub fn parse(self) -> Result<Vec<SalesRecord>, SalesParseError> {
        self.parse_into::<SalesRecord>()
    }

    pub fn parse_into<T>(self) -> Result<Vec<T>, SalesParseError>
    where
        T: TryFrom<CsvSalesRow, Error = SalesParseError>,
    {
        let result: Result<Vec<T>, SalesParseError> = self
            .parse_rows()
            .and_then(|rows| rows.into_iter().map(T::try_from).collect());

        match &result {
            Ok(records) => debug!("Parsed {} sales records", records.len()),
            Err(e) => warn!("Rejected sales export: {}", e),
        }

        result
    }

    fn parse_rows(self) -> Result<Vec<CsvSalesRow>, SalesParseError> {
        if let Some(filename) = self.filepath.as_deref() {
            if !CsvParser::is_supported(filename) {
                return Err(SalesParseError::UnsupportedFormat);
            }
        }

        let content = self.content
            .map(|content| Ok(content.into_bytes()))
            .unwrap_or_else(|| {
                self.filepath
                    .ok_or(SalesParseError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
            })?;

        CsvParser::new(self.columns.unwrap_or_default()).parse_bytes(&content)
    }
}
