//! Record normalizer: arbitrary-shaped transaction entries into fixed-schema rows.
//!
//! Each output field is resolved by an ordered list of [`FieldRule`]s. The
//! first rule whose value is present (non-null and non-empty, see
//! [`is_present`]) wins, and that value is then coerced to the field type.
//! A failed coercion resolves to the field's sentinel; it does not fall
//! through to later rules.
//!
//! Normalization never fails for an individual record. Only a top-level
//! value that is neither an object nor an array is rejected.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::constants::UNKNOWN;
use crate::error::IngestError;
use crate::types::{NormalizedTransaction, RawTransaction};

/// Where a field value may be found in a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// A top-level key.
    Top(&'static str),
    /// A key inside the nested `params` object.
    Params(&'static str),
}

impl FieldRule {
    /// Look the rule's key up in `tx`. Pure; never allocates.
    pub fn lookup<'a>(&self, tx: &'a RawTransaction) -> Option<&'a Value> {
        match self {
            Self::Top(key) => tx.get(*key),
            Self::Params(key) => tx.get("params")?.as_object()?.get(*key),
        }
    }
}

pub const WALLET_RULES: [FieldRule; 4] = [
    FieldRule::Top("wallet"),
    FieldRule::Top("user"),
    FieldRule::Top("address"),
    FieldRule::Params("user"),
];

pub const ACTION_RULES: [FieldRule; 3] = [
    FieldRule::Top("action"),
    FieldRule::Top("type"),
    FieldRule::Top("method"),
];

pub const AMOUNT_RULES: [FieldRule; 3] = [
    FieldRule::Params("amount"),
    FieldRule::Params("value"),
    FieldRule::Top("amount"),
];

pub const TIMESTAMP_RULES: [FieldRule; 2] = [FieldRule::Top("timestamp"), FieldRule::Top("time")];

/// Whether a value counts as "set" for rule matching.
///
/// Null, `false`, numeric zero and empty strings/arrays/objects are unset.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// First present value among `rules`, in priority order.
pub fn first_match<'a>(rules: &[FieldRule], tx: &'a RawTransaction) -> Option<&'a Value> {
    rules
        .iter()
        .filter_map(|rule| rule.lookup(tx))
        .find(|value| is_present(value))
}

/// Coerce a value to a wallet key. Strings are kept byte-for-byte, numbers use their JSON text.
fn as_wallet(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a value to a non-empty action label. Strings are trimmed, numbers use their JSON text.
fn as_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a value to a finite magnitude.
fn as_amount(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        // Only `true` gets here: `false` is never selected by a rule.
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    raw.is_finite().then(|| raw.abs())
}

/// Coerce a value holding epoch seconds (integer or fractional) to a UTC datetime.
fn as_epoch(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(secs) => DateTime::from_timestamp(secs, 0),
            None => epoch_from_f64(n.as_f64()?),
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(secs) => DateTime::from_timestamp(secs, 0),
                Err(_) => epoch_from_f64(s.parse::<f64>().ok()?),
            }
        }
        _ => None,
    }
}

fn epoch_from_f64(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }
    let nanos = (((secs - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Normalize one raw transaction record.
pub fn normalize_transaction(tx: &RawTransaction) -> NormalizedTransaction {
    let wallet = first_match(&WALLET_RULES, tx).and_then(as_wallet);
    let action = first_match(&ACTION_RULES, tx).and_then(as_label);
    let amount = first_match(&AMOUNT_RULES, tx).and_then(as_amount);
    let timestamp = first_match(&TIMESTAMP_RULES, tx).and_then(as_epoch);

    if wallet.is_none() {
        trace!("normalize: no wallet field resolved");
    }

    NormalizedTransaction {
        wallet: wallet.unwrap_or_else(|| UNKNOWN.to_string()),
        action: action.map_or_else(|| UNKNOWN.to_string(), |a| a.to_lowercase()),
        amount: amount.unwrap_or(0.0),
        timestamp,
    }
}

/// Normalize one array element. Non-object elements become all-sentinel rows.
pub fn normalize_entry(entry: &Value) -> NormalizedTransaction {
    match entry.as_object() {
        Some(tx) => normalize_transaction(tx),
        None => {
            debug!(kind = json_kind(entry), "normalize: non-object entry, using sentinels");
            normalize_transaction(&RawTransaction::new())
        }
    }
}

/// Normalize a parsed input document.
///
/// An object is treated as a one-element collection. The output has the
/// same length and order as the input entries.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use walletscore_core::normalize::normalize;
///
/// let rows = normalize(&json!({"user": "0xA", "type": "Deposit", "amount": "12.5"})).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].wallet, "0xA");
/// assert_eq!(rows[0].action, "deposit");
/// assert_eq!(rows[0].amount, 12.5);
/// assert!(normalize(&json!("not a record")).is_err());
/// ```
pub fn normalize(input: &Value) -> Result<Vec<NormalizedTransaction>, IngestError> {
    let rows: Vec<NormalizedTransaction> = match input {
        Value::Object(tx) => vec![normalize_transaction(tx)],
        Value::Array(entries) => entries.iter().map(normalize_entry).collect(),
        other => return Err(IngestError::InvalidShape(json_kind(other))),
    };

    let unknown_wallets = rows.iter().filter(|r| r.wallet == UNKNOWN).count();
    info!(rows = rows.len(), unknown_wallets, "normalize: records normalized");
    Ok(rows)
}

/// JSON type name, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
