//! Tolerant field decoders for records coming from the data layer.
//!
//! Every decoder reads the raw value first and coalesces anything it cannot use to the
//! zero/empty default, so a single bad field never rejects the whole record.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::discipline::BanType;
use crate::models::game::GoalEntry;
use crate::models::player::{RecordId, RosterTeam};

/// Numeric view of a raw value: numbers as-is, numeric strings parsed, everything else `None`.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Non-negative counter. Negative, NaN, non-numeric and missing values become 0;
/// fractions truncate.
pub(crate) fn count_from_value(value: &Value) -> u32 {
    // `as` saturates: negatives and NaN land on 0, huge values on u32::MAX.
    number(value).map(|n| n as u32).unwrap_or(0)
}

pub(crate) fn text_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&Value::deserialize(deserializer)?))
}

pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value).filter(|n| n.is_finite()).unwrap_or(0.0))
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(&Value::deserialize(deserializer)?))
}

/// Record ids may be numeric or textual depending on the backend; both are kept as text.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = text_from_value(&Value::deserialize(deserializer)?);
    Ok(if raw.is_empty() { None } else { Some(raw) })
}

pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_date(&s),
        _ => None,
    })
}

/// Accepts `YYYY-MM-DD` or any timestamp that starts with it (`2024-01-05T18:30:00Z`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub(crate) fn roster_team<'de, D>(deserializer: D) -> Result<RosterTeam, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RosterTeam::from_label(&text_from_value(
        &Value::deserialize(deserializer)?,
    )))
}

pub(crate) fn ban_type<'de, D>(deserializer: D) -> Result<BanType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(BanType::from_label(&text_from_value(
        &Value::deserialize(deserializer)?,
    )))
}

pub(crate) fn goal_list<'de, D>(deserializer: D) -> Result<Vec<GoalEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(goal_list_from_value(Value::deserialize(deserializer)?))
}

/// Goal scorer lists arrive either as an array or as that array serialized into a string.
/// An unreadable string is an empty list.
pub fn goal_list_from_value(value: Value) -> Vec<GoalEntry> {
    match value {
        Value::Array(items) => items.iter().filter_map(GoalEntry::from_value).collect(),
        Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Vec::new();
            }
            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Array(items)) => {
                    items.iter().filter_map(GoalEntry::from_value).collect()
                }
                _ => {
                    log::warn!("Unreadable goal scorer list {:?}, treating as empty", raw);
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    }
}

pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(records_from_value(Value::deserialize(deserializer)?))
}

/// A collection of records: `null` is empty, and entries that are not objects are dropped.
pub(crate) fn records_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            log::warn!("Expected a list of records, got {}; treating as empty", other);
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                log::warn!("Dropping record {} that is not an object", item);
                return None;
            }
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Dropping unreadable record: {}", e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_coalesce_to_zero() {
        assert_eq!(count_from_value(&json!(3)), 3);
        assert_eq!(count_from_value(&json!("4")), 4);
        assert_eq!(count_from_value(&json!(" 2 ")), 2);
        assert_eq!(count_from_value(&json!(-1)), 0);
        assert_eq!(count_from_value(&json!(null)), 0);
        assert_eq!(count_from_value(&json!("two")), 0);
        assert_eq!(count_from_value(&json!(true)), 0);
    }

    #[test]
    fn dates_accept_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_date("2024-01-05"), expected);
        assert_eq!(parse_date("2024-01-05T18:30:00+00:00"), expected);
        assert_eq!(parse_date("05.01.2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn goal_list_accepts_serialized_arrays() {
        let list = goal_list_from_value(json!(r#"["Müller", {"player": "Kane", "count": 2}]"#));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], GoalEntry::new("Müller", 1));
        assert_eq!(list[1], GoalEntry::new("Kane", 2));
    }

    #[test]
    fn goal_list_unreadable_string_is_empty() {
        assert!(goal_list_from_value(json!("not json [")).is_empty());
        assert!(goal_list_from_value(json!("")).is_empty());
        assert!(goal_list_from_value(json!(null)).is_empty());
        assert!(goal_list_from_value(json!(42)).is_empty());
    }
}
