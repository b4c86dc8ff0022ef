// Field readers used by the entity constructors.
// A field absent from the record reads as null; the schema check runs first.
// Readers never fail: values that do not fit are kept for later stages to judge.

use super::{Amount, EntityId};
use crate::schema::Record;
use serde_json::Value;

fn get<'a>(record: &'a Record, field: &str) -> &'a Value {
    record.get(field).unwrap_or(&Value::Null)
}

/// Short description of a JSON value for error messages
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

/// Text field: strings as-is, null as empty text, anything else as its JSON text
pub fn text(record: &Record, field: &str) -> String {
    match get(record, field) {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flag field: null and false are false, anything else is true
pub fn flag(record: &Record, field: &str) -> bool {
    !matches!(get(record, field), Value::Null | Value::Bool(false))
}

/// Token amount, kept raw when it is not an integer
pub fn amount(record: &Record, field: &str) -> Amount {
    Amount::from_value(get(record, field))
}

/// Identifier; None when the value can never match another id
pub fn identifier(record: &Record, field: &str) -> Option<EntityId> {
    EntityId::from_value(get(record, field))
}
