//! String operations
//!
//! Strings are indexed by character, not by byte, matching the original
//! UTF-8 aware behavior.

use crate::value::error::{codes, RuntimeError};
use crate::value::util::{normalize_index, slice_indices};
use crate::value::Value;

/// Fetches a one-character string, resolving negative indices.
///
/// # Errors
///
/// Returns an error with code 902 when the index is out of range.
pub fn checked_char_at(s: &str, index: i64) -> Result<Value, RuntimeError> {
    let chars: Vec<char> = s.chars().collect();
    let index = normalize_index(index, chars.len() as i64)
        .ok_or(RuntimeError::new(codes::STR_INDEX))?;
    Ok(Value::str(&chars[index as usize].to_string()))
}

/// Extracts a substring by slice. Out-of-range bounds clamp; a zero step
/// selects nothing.
#[must_use]
pub fn slice(s: &str, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Value {
    let chars: Vec<char> = s.chars().collect();
    let selected: String = slice_indices(chars.len() as i64, start, stop, step)
        .into_iter()
        .map(|i| chars[i])
        .collect();
    Value::str(&selected)
}

/// Parses an integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an error with code 301 when the trimmed text is empty or is not
/// a base-10 integer.
pub fn checked_parse_int(s: &str) -> Result<i64, RuntimeError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(RuntimeError::new(codes::INT_PARSE));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| RuntimeError::new(codes::INT_PARSE))
}
