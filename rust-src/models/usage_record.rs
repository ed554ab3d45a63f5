//! Usage record model for one day of logged water.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;


/// Litres used on a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: NaiveDate,
    #[serde(
        default,
        serialize_with = "serialize_litres",
        deserialize_with = "deserialize_litres"
    )]
    pub amount: f64,
}


impl UsageRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Get date string in YYYY-MM-DD format.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}


/// Whole litres are written as JSON integers so the file stays `50`, not `50.0`.
fn serialize_litres<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && *amount >= 0.0 && *amount <= u64::MAX as f64 {
        serializer.serialize_u64(*amount as u64)
    } else {
        serializer.serialize_f64(*amount)
    }
}


fn deserialize_litres<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(litres_from_value(&value))
}


/// Read an amount leniently: numbers and numeric strings count, anything else is 0.
fn litres_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key() {
        let record = UsageRecord::new(day(2024, 1, 5), 40.0);
        assert_eq!(record.date_key(), "2024-01-05");
    }

    #[test]
    fn test_whole_amount_serializes_as_integer() {
        let record = UsageRecord::new(day(2024, 1, 8), 50.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-08","amount":50}"#);
    }

    #[test]
    fn test_fractional_amount_kept() {
        let record = UsageRecord::new(day(2024, 1, 8), 12.5);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-08","amount":12.5}"#);
    }

    #[test]
    fn test_lenient_amounts() {
        let missing: UsageRecord = serde_json::from_str(r#"{"date":"2024-01-08"}"#).unwrap();
        assert_eq!(missing.amount, 0.0);

        let junk: UsageRecord =
            serde_json::from_str(r#"{"date":"2024-01-08","amount":"lots"}"#).unwrap();
        assert_eq!(junk.amount, 0.0);

        let null: UsageRecord =
            serde_json::from_str(r#"{"date":"2024-01-08","amount":null}"#).unwrap();
        assert_eq!(null.amount, 0.0);

        let numeric_string: UsageRecord =
            serde_json::from_str(r#"{"date":"2024-01-08","amount":"75"}"#).unwrap();
        assert_eq!(numeric_string.amount, 75.0);
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = serde_json::from_str::<UsageRecord>(r#"{"date":"yesterday","amount":5}"#);
        assert!(result.is_err());
    }
}
