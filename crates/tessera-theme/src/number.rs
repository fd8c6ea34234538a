//! Strict numeric literals.
//!
//! The whole text must be the number: no sign prefix `+`, no trailing
//! garbage, no `inf`/`NaN`.

use crate::cursor::ThemeCursor;
use crate::error::ThemeError;

/// Inclusive `(min, max)` bounds.
pub(crate) type Bounds = (f64, f64);

pub(crate) const UNIT: Bounds = (0.0, 1.0);
pub(crate) const MILLIMETERS: Bounds = (-999.0, 999.0);
pub(crate) const RADIUS: Bounds = (0.0, 999.0);

pub(crate) fn parse_f64(text: &str, element: &str) -> Result<f64, ThemeError> {
    if text.starts_with('+') {
        return Err(ThemeError::malformed(element, text));
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ThemeError::malformed(element, text)),
    }
}

pub(crate) fn parse_u32(text: &str, element: &str) -> Result<u32, ThemeError> {
    if text.starts_with('+') {
        return Err(ThemeError::malformed(element, text));
    }
    text.parse::<u32>().map_err(|_| ThemeError::malformed(element, text))
}

pub(crate) fn parse_bounded(text: &str, element: &str, (min, max): Bounds) -> Result<f64, ThemeError> {
    let value = parse_f64(text, element)?;
    if value < min || value > max {
        return Err(ThemeError::OutOfRange { element: element.to_string(), value, min, max });
    }
    Ok(value)
}

/// Parses child `name` as a float, if present.
pub(crate) fn optional_f64(cursor: &ThemeCursor<'_>, name: &str) -> Result<Option<f64>, ThemeError> {
    cursor.child_text(name).map(|t| parse_f64(t, name)).transpose()
}

/// Parses child `name` as an unsigned integer, if present.
pub(crate) fn optional_u32(cursor: &ThemeCursor<'_>, name: &str) -> Result<Option<u32>, ThemeError> {
    cursor.child_text(name).map(|t| parse_u32(t, name)).transpose()
}

/// Overwrites `target` with child `name`, if present, after a range check.
pub(crate) fn read_bounded(
    cursor: &ThemeCursor<'_>,
    name: &str,
    bounds: Bounds,
    target: &mut f64,
) -> Result<(), ThemeError> {
    if let Some(text) = cursor.child_text(name) {
        *target = parse_bounded(text, name, bounds)?;
    }
    Ok(())
}
