//! Insight sentences for the national views.

use crate::models::NationalRecord;
use crate::utils::{format_count, percent_change, ratio};

/// Insight sentences for the national bar view.
///
/// Order is part of the contract: raw counts first, the signed comparison
/// second, the multiplicative ratio when defined and non-zero, guidance
/// last.
#[must_use]
pub fn gap_insight(us_deaths: f64, mx_deaths: f64, year: i32, cause: &str) -> Vec<String> {
    let diff = us_deaths - mx_deaths;
    let direction = if diff == 0.0 {
        "the same as"
    } else if diff > 0.0 {
        "higher than"
    } else {
        "lower than"
    };

    let mut sentences = vec![format!(
        "In {year}, the U.S. recorded {} deaths from {cause}; Mexico recorded {}.",
        format_count(us_deaths),
        format_count(mx_deaths)
    )];
    sentences.push(format!(
        "The U.S. total is {direction} Mexico by {} deaths.",
        format_count(diff.abs())
    ));
    if let Some(r) = ratio(us_deaths, mx_deaths) {
        if r.is_finite() && r != 0.0 {
            sentences.push(format!("That’s about {r:.2}× Mexico’s count."));
        }
    }
    sentences
        .push("Use the trend view to see whether this gap grows or shrinks over time.".to_string());

    sentences
}

/// Insight sentences for the trend view.
///
/// Each entity contributes one change sentence computed from the first and
/// last entries of its own (already year-sorted) series; an entity with no
/// rows contributes nothing. When neither entity has rows, the result is a
/// fixed guidance list instead of change sentences.
#[must_use]
pub fn trend_insight(
    us_series: &[&NationalRecord],
    mx_series: &[&NationalRecord],
    cause: &str,
) -> Vec<String> {
    let mut sentences = Vec::with_capacity(3);
    if let Some(sentence) = entity_trend_sentence(us_series, "U.S.", cause) {
        sentences.push(sentence);
    }
    if let Some(sentence) = entity_trend_sentence(mx_series, "Mexico", cause) {
        sentences.push(sentence);
    }

    if sentences.is_empty() {
        return vec![
            "No national rows found for this cause.".to_string(),
            "Try a different cause from the menu.".to_string(),
        ];
    }

    sentences.push(
        "Compare the two lines to see whether the gap widens, narrows, or stays stable over time."
            .to_string(),
    );

    sentences
}

/// Change sentence for one entity, or `None` when its series is empty.
///
/// The percent-change parenthetical only renders when the baseline is
/// non-zero; a flat "changed from X to Y" still reads correctly without it.
fn entity_trend_sentence(series: &[&NationalRecord], label: &str, cause: &str) -> Option<String> {
    let first = series.first()?;
    let last = series.last()?;
    let change = percent_change(first.deaths, last.deaths)
        .map_or_else(String::new, |pct| format!(" ({pct:.1}%)"));

    Some(format!(
        "From {} to {}, {label} {cause} deaths changed from {} to {}{change}.",
        first.year,
        last.year,
        format_count(first.deaths),
        format_count(last.deaths)
    ))
}
