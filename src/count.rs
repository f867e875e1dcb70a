use crate::error::{Error, Result};
use std::num::ParseIntError;

/// Parses the requested sequence length.
///
/// Any integer is accepted. Negative counts describe an empty range and
/// yield zero. Counts that overflow `usize` could never be allocated and are
/// reported as out of range.
pub fn parse_count(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let invalid = |source: ParseIntError| Error::InvalidCount {
        input: raw.to_string(),
        source,
    };

    if let Some(magnitude) = trimmed.strip_prefix('-') {
        if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(0);
        }
        return trimmed.parse::<i64>().map(|_| 0).map_err(invalid);
    }
    trimmed.parse::<usize>().map_err(invalid)
}
