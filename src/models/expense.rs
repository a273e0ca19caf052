//! Expense model and record normalization
//!
//! Records loaded from disk may come from older versions of the ledger, which
//! stored the payer under `name` and sometimes wrote amounts as strings.
//! Normalization happens in two independent steps: field migration
//! ([`migrate_legacy_payer`]) and type coercion ([`coerce_amount`]), composed by
//! [`normalize_expense`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An expense record as it appears on disk, before normalization
pub type RawExpense = serde_json::Map<String, Value>;

/// A single payment made by one participant on behalf of the group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Name of the participant who paid
    pub payer: String,

    /// Amount paid
    pub amount: f64,

    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// When the expense was recorded (free-form text)
    #[serde(rename = "time", alias = "timestamp", default)]
    pub timestamp: String,
}

impl Expense {
    /// Create an expense with empty description and timestamp
    pub fn new(payer: impl Into<String>, amount: f64) -> Self {
        Self {
            payer: payer.into(),
            amount,
            description: String::new(),
            timestamp: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Convert back into the on-disk record shape
    pub fn to_raw(&self) -> RawExpense {
        let mut raw = RawExpense::new();
        raw.insert("payer".into(), Value::String(self.payer.clone()));
        raw.insert(
            "amount".into(),
            serde_json::Number::from_f64(self.amount)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        );
        raw.insert("description".into(), Value::String(self.description.clone()));
        raw.insert("time".into(), Value::String(self.timestamp.clone()));
        raw
    }
}

/// Move a legacy `name` field to `payer` when `payer` is absent
///
/// If both are present `payer` wins and `name` is left untouched.
pub fn migrate_legacy_payer(raw: &RawExpense) -> RawExpense {
    let mut migrated = raw.clone();
    if !migrated.contains_key("payer") {
        if let Some(name) = migrated.remove("name") {
            migrated.insert("payer".into(), name);
        }
    }
    migrated
}

/// Coerce a stored amount to `f64`, falling back to `0.0`
///
/// Numbers pass through, numeric strings are parsed after trimming (digit
/// groups may be separated by `_`, as in `1_000`), booleans count as 1 or 0.
/// Anything else, including a non-finite result, becomes 0.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let coerced = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            strip_digit_separators(s.trim()).and_then(|digits| digits.parse::<f64>().ok())
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match coerced {
        Some(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

/// Normalize a raw record into an [`Expense`]
///
/// Idempotent: `normalize_expense(&normalize_expense(r).to_raw())` equals
/// `normalize_expense(r)`.
pub fn normalize_expense(raw: &RawExpense) -> Expense {
    let migrated = migrate_legacy_payer(raw);

    Expense {
        payer: payer_field(migrated.get("payer")),
        amount: coerce_amount(migrated.get("amount")),
        description: text_field(migrated.get("description")),
        timestamp: text_field(migrated.get("time").or_else(|| migrated.get("timestamp"))),
    }
}

/// Normalize a JSON value that should hold an expense record
///
/// Values that are not objects normalize like an empty record.
pub fn normalize_value(value: &Value) -> Expense {
    match value {
        Value::Object(raw) => normalize_expense(raw),
        _ => normalize_expense(&RawExpense::new()),
    }
}

/// Drop `_` separators; each must sit between two ASCII digits
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut stripped = String::with_capacity(s.len());

    for (i, c) in s.char_indices() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(stripped)
}

/// Payers are names; a non-string payer can never match a participant
fn payer_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawExpense {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_migrate_legacy_name() {
        let migrated = migrate_legacy_payer(&raw(json!({"name": "Agnes", "amount": 10})));
        assert_eq!(migrated.get("payer"), Some(&json!("Agnes")));
        assert!(migrated.get("name").is_none());
    }

    #[test]
    fn test_payer_is_authoritative() {
        let migrated =
            migrate_legacy_payer(&raw(json!({"payer": "Brian", "name": "Agnes"})));
        assert_eq!(migrated.get("payer"), Some(&json!("Brian")));
        assert_eq!(migrated.get("name"), Some(&json!("Agnes")));
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount(Some(&json!(12.5))), 12.5);
        assert_eq!(coerce_amount(Some(&json!(7))), 7.0);
        assert_eq!(coerce_amount(Some(&json!(" 3.25 "))), 3.25);
        assert_eq!(coerce_amount(Some(&json!(true))), 1.0);
    }

    #[test]
    fn test_coerce_amount_fallback() {
        assert_eq!(coerce_amount(None), 0.0);
        assert_eq!(coerce_amount(Some(&Value::Null)), 0.0);
        assert_eq!(coerce_amount(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("nan"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!([1, 2]))), 0.0);
    }

    #[test]
    fn test_coerce_amount_digit_separators() {
        assert_eq!(coerce_amount(Some(&json!("1_000"))), 1000.0);
        assert_eq!(coerce_amount(Some(&json!("1_000.5_0"))), 1000.5);
        assert_eq!(coerce_amount(Some(&json!("_100"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("100_"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("1__0"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("1_.5"))), 0.0);
    }

    #[test]
    fn test_non_string_payer_matches_nobody() {
        let expense = normalize_expense(&raw(json!({"payer": 5, "amount": 10})));
        assert_eq!(expense.payer, "");

        let settlement = crate::engine::compute_balances(&["5", "6"], &[expense]);
        assert_eq!(settlement.balances.get("5"), Some(0.0));
        assert_eq!(settlement.balances.get("6"), Some(0.0));
    }

    #[test]
    fn test_normalize_defaults() {
        let expense = normalize_expense(&raw(json!({"name": "Agnes", "amount": "abc"})));
        assert_eq!(expense, Expense::new("Agnes", 0.0));
    }

    #[test]
    fn test_normalize_reads_time_and_timestamp() {
        let stored = normalize_expense(&raw(json!({
            "payer": "A", "amount": 5, "time": "2024-01-02 10:00:00"
        })));
        assert_eq!(stored.timestamp, "2024-01-02 10:00:00");

        let aliased = normalize_expense(&raw(json!({
            "payer": "A", "amount": 5, "timestamp": "yesterday"
        })));
        assert_eq!(aliased.timestamp, "yesterday");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let records = [
            json!({"name": "Agnes", "amount": "12.50", "description": "taxi"}),
            json!({"payer": "Brian", "amount": null}),
            json!({"amount": 3}),
            json!({"payer": "C", "amount": 1.1, "description": 5, "time": "t"}),
        ];

        for record in records {
            let once = normalize_expense(&raw(record));
            let twice = normalize_expense(&once.to_raw());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_value_non_object() {
        let expense = normalize_value(&json!(42));
        assert_eq!(expense, Expense::new("", 0.0));
    }

    #[test]
    fn test_serialized_field_names() {
        let expense = Expense::new("A", 10.0).with_timestamp("now");
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["time"], json!("now"));
        assert!(value.get("timestamp").is_none());
    }
}
