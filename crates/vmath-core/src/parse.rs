//! Delimited-string parsing shared by [`Vec2`](crate::Vec2) and
//! [`Vec3`](crate::Vec3).
//!
//! # Format
//!
//! ```text
//! <number><delim><number>[<delim><number>]
//! ```
//!
//! The delimiter is a single configurable character (callers default to a
//! comma). Whitespace around each number is tolerated; component count must
//! match the target type exactly. Anything else is a structured
//! [`Error`](crate::Error), and parsing never produces a partially-filled
//! vector.

use crate::error::{Error, Result};

/// Splits `s` on `delimiter` and parses exactly `expected` `f32` fields.
pub(crate) fn parse_fields(s: &str, delimiter: char, expected: usize) -> Result<Vec<f32>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::Empty);
    }

    let fields: Vec<&str> = s.split(delimiter).collect();
    if fields.len() != expected {
        return Err(Error::component_count(expected, fields.len()));
    }

    let mut values = Vec::with_capacity(expected);
    for (index, field) in fields.iter().enumerate() {
        let field = field.trim();
        let value = field
            .parse::<f32>()
            .map_err(|source| Error::invalid_component(index, field, source))?;
        values.push(value);
    }

    Ok(values)
}
