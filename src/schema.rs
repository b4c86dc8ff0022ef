// 📐 Shape Layer - Required-field validation
// A raw record is usable when every required key for its kind is present.
// Values are not inspected here: null, false and 0 all count as present.

use serde_json::{Map, Value};

/// A raw key-value record as decoded from the input JSON
pub type Record = Map<String, Value>;

// ============================================================================
// REQUIRED FIELDS
// ============================================================================

pub const COMPANY_FIELDS: &[&str] = &["id", "name", "email_status", "top_up"];

pub const USER_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "tokens",
    "email_status",
    "active_status",
    "company_id",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Company,
    User,
}

impl RecordKind {
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Company => "Company",
            RecordKind::User => "User",
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Company => COMPANY_FIELDS,
            RecordKind::User => USER_FIELDS,
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: RecordKind,
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] missing fields: {}", self.kind.name(), self.missing.join(", "))
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Required fields of `kind` that are not keys of `record`, in declared order
pub fn missing_fields(record: &Record, kind: RecordKind) -> Vec<&'static str> {
    kind.required_fields()
        .iter()
        .copied()
        .filter(|field| !record.contains_key(*field))
        .collect()
}

/// Returns the record unchanged when it carries every required field
pub fn validate(record: &Record, kind: RecordKind) -> Result<&Record, ValidationError> {
    let missing = missing_fields(record, kind);
    if missing.is_empty() {
        Ok(record)
    } else {
        Err(ValidationError { kind, missing })
    }
}

// ============================================================================
// TESTS
// ============================================================================
