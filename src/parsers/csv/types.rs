use crate::errors::{SalesParseError, SalesResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw `Date` cell of a sales export.
///
/// Exports write dates as `dd-mm-yyyy`. The cell is split on `-` and must
/// yield exactly three numeric parts (day, month, year, in that order) that
/// name a real calendar day. Anything else is rejected, there is no fallback
/// to other layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvDate(String);

impl CsvDate {
    /// Converts the cell into a `NaiveDate`, reporting `line` on failure.
    pub fn parse(&self, line: u64) -> SalesResult<NaiveDate> {
        let invalid_format = || SalesParseError::InvalidDateFormat {
            line,
            value: self.0.clone(),
        };

        let parts: Vec<&str> = self.0.trim().split('-').map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid_format());
        };

        let day: u32 = parse_digits(day).ok_or_else(invalid_format)?;
        let month: u32 = parse_digits(month).ok_or_else(invalid_format)?;
        let year: i32 = parse_digits(year).ok_or_else(invalid_format)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| SalesParseError::InvalidDate {
            line,
            value: self.0.clone(),
        })
    }
}

fn parse_digits<T: FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Largest magnitude an amount cell may hold; bigger values read as zero.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Lenient amount cell (PAYMENT, GST, ITEM RATE, PROFIT).
///
/// Uses the longest leading number of the cell, so `"12.50 INR"` reads as
/// 12.50. Missing, empty or non-numeric cells read as zero, and so do
/// numbers beyond [`MAX_AMOUNT`] in magnitude.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvAmount(Option<String>);

impl CsvAmount {
    pub fn value(&self) -> Decimal {
        self.0
            .as_deref()
            .and_then(leading_decimal)
            .filter(|amount| amount.abs() <= Decimal::from(MAX_AMOUNT))
            .unwrap_or(Decimal::ZERO)
    }
}

impl From<Option<String>> for CsvAmount {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvAmount {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

/// Lenient `QUANTITY` cell: leading integer, zero otherwise (including
/// integers that do not fit an `i64`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvQuantity(Option<String>);

impl CsvQuantity {
    pub fn value(&self) -> i64 {
        self.0.as_deref().and_then(leading_integer).unwrap_or(0)
    }
}

impl From<Option<String>> for CsvQuantity {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvQuantity {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

fn leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = sign_len(bytes);
    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    let mantissa_end = end;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digits_len(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    let mut mantissa = s[..mantissa_end].trim_start_matches('+').to_string();
    if mantissa.ends_with('.') {
        mantissa.pop();
    }
    if mantissa.starts_with('.') || mantissa.starts_with("-.") {
        mantissa = mantissa.replacen('.', "0.", 1);
    }

    if end > mantissa_end {
        let exponent = &s[mantissa_end + 1..end];
        Decimal::from_scientific(&format!("{}e{}", mantissa, exponent)).ok()
    } else {
        Decimal::from_str(&mantissa).ok()
    }
}
