// 🔑 Entity identifiers
//
// Company ids and user company_id references arrive as JSON integers or
// JSON strings. Matching is by value and type, so 1 and "1" never match.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier shared by `Company::id` and `User::company_id`
///
/// Ordering puts every numeric id before every text id, each group ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Read an identifier out of a JSON value (integers and strings only)
    pub fn from_value(value: &Value) -> Option<EntityId> {
        match value {
            Value::Number(n) => n.as_i64().map(EntityId::Number),
            Value::String(s) => Some(EntityId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(EntityId::from_value(&json!(7)), Some(EntityId::Number(7)));
        assert_eq!(EntityId::from_value(&json!("c-7")), Some(EntityId::from("c-7")));
        assert_eq!(EntityId::from_value(&json!(7.5)), None);
        assert_eq!(EntityId::from_value(&json!(null)), None);
    }

    #[test]
    fn test_number_and_text_never_equal() {
        assert_ne!(EntityId::from(1), EntityId::from("1"));
    }

    #[test]
    fn test_ordering() {
        let mut ids = vec![
            EntityId::from("b"),
            EntityId::from(10),
            EntityId::from("a"),
            EntityId::from(2),
        ];
        ids.sort();

        assert_eq!(
            ids,
            vec![
                EntityId::from(2),
                EntityId::from(10),
                EntityId::from("a"),
                EntityId::from("b"),
            ]
        );
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(EntityId::from(42).to_string(), "42");
        assert_eq!(EntityId::from("acme-1").to_string(), "acme-1");
    }
}
