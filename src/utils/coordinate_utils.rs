//! Coordinate utility functions
//!
//! Helpers for turning user-supplied text ("x,y", "x y z", "minx,miny,maxx,maxy")
//! into numeric values.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{BoundsError, BoundsResult};

lazy_static! {
    // Commas, semicolons and whitespace all separate values
    static ref VALUE_SEPARATOR: Regex = Regex::new(r"[,;\s]+").unwrap();
}

/// Parse a list of numbers separated by commas and/or whitespace
///
/// # Arguments
/// * `text` - Input such as "12.5, 48.1" or "12.5 48.1 300"
/// * `min_count` - Fewest values accepted
/// * `max_count` - Most values accepted
///
/// # Returns
/// The parsed values or a parse error naming the offending token
pub fn parse_values(text: &str, min_count: usize, max_count: usize) -> BoundsResult<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BoundsError::ParseError("Empty coordinate string".to_string()));
    }

    let values = VALUE_SEPARATOR
        .split(trimmed)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>()
                .map_err(|_| BoundsError::ParseError(format!("Invalid number '{}' in '{}'", token, text)))
        })
        .collect::<BoundsResult<Vec<f64>>>()?;

    if values.len() < min_count || values.len() > max_count {
        let expected = if min_count == max_count {
            format!("{}", min_count)
        } else {
            format!("{} to {}", min_count, max_count)
        };
        return Err(BoundsError::ParseError(format!(
            "Expected {} values but found {} in '{}'", expected, values.len(), text)));
    }

    debug!("Parsed {} values from '{}'", values.len(), text);
    Ok(values)
}
