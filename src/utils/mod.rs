//! Numeric coercion and formatting helpers shared by the query and insight
//! layers.
//!
//! Input JSON is pre-cleaned but not trusted: death counts may arrive as
//! numbers, numeric strings, booleans, or nulls. Everything funnels through
//! [`coerce_deaths`] so that downstream arithmetic only ever sees finite
//! values and a missing or malformed count reads as 0 rather than an error.

use serde_json::Value;

/// Coerce a raw JSON value to a finite death count.
///
/// # Arguments
/// * `value` - Any JSON value from a `Deaths` field
///
/// # Returns
/// The numeric interpretation of the value, or 0 when there is none:
/// numbers pass through when finite, strings are trimmed and parsed
/// (empty string is 0), booleans map to 1/0, and null, arrays, objects,
/// and non-finite input all map to 0. Never fails.
#[must_use]
pub fn coerce_deaths(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return 0.0;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(0.0)
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Percentage change from `from` to `to`.
///
/// Returns `None` when `from` is 0; callers must treat that as "not
/// displayed", never as zero change.
#[must_use]
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from * 100.0)
}

/// Ratio of `a` to `b`, or `None` when `b` is 0.
#[must_use]
pub fn ratio(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        return None;
    }
    Some(a / b)
}

/// Render a count with thousands grouping for insight sentences.
///
/// Matches the locale rendering the sentences were written against:
/// grouped integer digits, at most three fraction digits with trailing
/// zeros trimmed, and no sign on a value that rounds to zero.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(digits + digits / 3 + frac_part.len() + 2);

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    out
}
