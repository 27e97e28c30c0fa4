use thiserror::Error;

/// Errors that can occur while turning a sales export into records.
#[derive(Error, Debug)]
pub enum SalesParseError {
    /// Date cell does not split into three numeric `-` separated parts
    #[error("Invalid date format '{value}' on line {line}, expected dd-mm-yyyy")]
    InvalidDateFormat { line: u64, value: String },

    /// Date cell has the right shape but is not a real calendar day
    #[error("Invalid date '{value}' on line {line}, expected dd-mm-yyyy")]
    InvalidDate { line: u64, value: String },

    /// Row ends before the Date cell
    #[error("Missing date on line {line}, expected dd-mm-yyyy")]
    MissingDate { line: u64 },

    /// Header row does not contain a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Tokenizer level failure (bad quoting, invalid UTF-8)
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// File name does not look like a CSV export
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// Error reading the file from disk
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called with neither content nor a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,
}

impl SalesParseError {
    /// Text shown in place of the dashboard when an upload is rejected.
    pub fn user_message(&self) -> String {
        format!(
            "Error parsing CSV: {}. Please check your date format (should be dd-mm-yyyy)",
            self
        )
    }
}

pub type SalesResult<T> = Result<T, SalesParseError>;
