//! JSON decoding for record collections.
//!
//! The backend returns each collection either as a JSON array or as an object
//! keyed by record id. Both shapes decode to a `Vec` in a stable order (array
//! order, or ascending key order for objects). Malformed dates and amounts are
//! reported, never coerced to zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{Collection, RecordError};
use super::types::{Expense, MonthlyReport, Payment, UtilityBill};

/// Parses a calendar date from the formats the backend emits.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`
/// timestamp, or a bare `YYYY-MM` (first day of that month). Timestamps keep the
/// calendar date as written, without shifting time zones.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Ok(date);
    }

    Err(format!("invalid date '{raw}'"))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(D::Error::custom)
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).map_err(D::Error::custom),
    }
}

fn parse_collection<T: DeserializeOwned>(
    collection: Collection,
    json: &str,
) -> Result<Vec<T>, RecordError> {
    let malformed = |reason: String| RecordError::MalformedRecord { collection, reason };

    let value: Value = serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .map(|(key, mut item)| {
                if let Value::Object(fields) = &mut item {
                    fields.entry("id").or_insert(Value::String(key));
                }
                item
            })
            .collect(),
        Value::Null => Vec::new(),
        other => return Err(malformed(format!("expected array or object, got {other}"))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| malformed(format!("record {index}: {e}")))
        })
        .collect()
}

/// Decodes the payment collection.
pub fn parse_payments(json: &str) -> Result<Vec<Payment>, RecordError> {
    parse_collection(Collection::Payments, json)
}

/// Decodes the utility bill collection.
pub fn parse_utility_bills(json: &str) -> Result<Vec<UtilityBill>, RecordError> {
    parse_collection(Collection::UtilityBills, json)
}

/// Decodes the expense collection.
pub fn parse_expenses(json: &str) -> Result<Vec<Expense>, RecordError> {
    parse_collection(Collection::Expenses, json)
}

/// Decodes the monthly report collection.
pub fn parse_monthly_reports(json: &str) -> Result<Vec<MonthlyReport>, RecordError> {
    parse_collection(Collection::MonthlyReports, json)
}
