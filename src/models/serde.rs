//! Field-level deserializers for the mortality dataset JSON.
//!
//! The source files are hand-assembled exports, so numeric fields show up
//! as numbers in one file and strings in another. These deserializers
//! absorb that variation at ingestion; records never carry raw JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::coerce_deaths;

/// Custom deserializer for the `Deaths` field.
///
/// Accepts any JSON value and coerces it with [`coerce_deaths`], so a
/// malformed count loads as 0 instead of failing the whole file.
pub fn deserialize_deaths<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_deaths(&raw))
}

/// Custom deserializer for the `Year` field.
///
/// Years arrive as integers, floats, or numeric strings depending on the
/// export; any scalar that does not parse as a number loads as year 0,
/// which no real query matches.
pub fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlexibleYearVisitor;

    impl serde::de::Visitor<'_> for FlexibleYearVisitor {
        type Value = i32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a string representing a calendar year")
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as i32)
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as i32)
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(if value.is_finite() { value as i32 } else { 0 })
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map_or(0, |f| f as i32))
        }

        fn visit_bool<E>(self, _value: bool) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(FlexibleYearVisitor)
}
