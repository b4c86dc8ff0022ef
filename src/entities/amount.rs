// 🪙 Token amounts as read from input
//
// `tokens` and `top_up` keep whatever value the record carried. Only an
// associated user needs them as integers; the association step checks that.

use super::fields::describe;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),

    /// Present but not an integer in i64 range (null, text, float, ...)
    Invalid(Value),
}

impl Amount {
    pub fn from_value(value: &Value) -> Amount {
        match value.as_i64() {
            Some(n) => Amount::Integer(n),
            None => Amount::Invalid(value.clone()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Amount::Integer(n) => Some(*n),
            Amount::Invalid(_) => None,
        }
    }

    /// Short description for error messages
    pub fn describe(&self) -> String {
        match self {
            Amount::Integer(n) => format!("number {}", n),
            Amount::Invalid(value) => describe(value),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(n) => write!(f, "{}", n),
            Amount::Invalid(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Amount::Integer(n)
    }
}
