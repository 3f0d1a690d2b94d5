//! Coercion of loosely-typed wire values into plain floats.

use crate::models::RawNumber;

/// Coerce a loosely-typed value into an `f64`.
///
/// * A number passes through unchanged.
/// * Text has thousands separators (commas) and all whitespace stripped, then
///   is parsed; anything unparsable yields NaN.
/// * Absent values yield NaN.
///
/// Never panics. Callers treat a non-finite result as "missing" and exclude
/// the record from aggregates and sorts according to their own rules.
pub fn coerce(value: &RawNumber) -> f64 {
    match value {
        RawNumber::Number(n) => *n,
        RawNumber::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                f64::NAN
            } else {
                cleaned.parse().unwrap_or(f64::NAN)
            }
        }
        RawNumber::Absent => f64::NAN,
    }
}
