//! Read access to backend records
//!
//! Records are kept as the JSON the backend sent. Field readers return
//! `None` for a field that is missing, null, or of an unexpected type, so
//! an odd record never fails a whole response.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::types::EntityId;

pub(crate) fn int_field(record: &Value, key: &str) -> Option<EntityId> {
    record.get(key).and_then(Value::as_i64)
}

pub(crate) fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Decimal read from a JSON number or a numeric string.
pub(crate) fn decimal_field(record: &Value, key: &str) -> Option<Decimal> {
    let raw = match record.get(key)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

/// Common accessors and conversions of a record newtype over `Value`.
macro_rules! opaque_record {
    ($name:ident) => {
        impl $name {
            /// Raw field, as sent by the backend.
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }

            pub fn as_value(&self) -> &serde_json::Value {
                &self.0
            }

            pub fn into_value(self) -> serde_json::Value {
                self.0
            }
        }

        impl From<serde_json::Value> for $name {
            fn from(value: serde_json::Value) -> Self {
                Self(value)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(record: $name) -> Self {
                record.0
            }
        }
    };
}

pub(crate) use opaque_record;
