// 🏗️ Parser - JSON input → validated entities
//
// Loading never fails the run: a missing, unreadable or malformed file is
// reported and treated as an empty collection. Records missing required
// fields are dropped silently. Present values are kept as they are; whether
// they are usable is only decided for users that get associated.

use crate::error::LoadError;
use crate::schema::{self, Record, RecordKind};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

// ============================================================================
// CORE TYPES
// ============================================================================

/// An entity that can be built from a validated record
///
/// `KIND` selects the required-field set checked before `from_record` runs.
pub trait FromRecord: Sized {
    const KIND: RecordKind;

    fn from_record(record: &Record) -> Self;
}

/// Entities built from one input collection
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCollection<T> {
    pub entities: Vec<T>,

    /// Raw records seen
    pub total: usize,

    /// Records dropped for missing fields or not being objects
    pub dropped: usize,
}

impl<T> ParsedCollection<T> {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Decode a JSON document whose root is an array of records
pub fn parse_records(content: &str) -> serde_json::Result<Vec<Value>> {
    serde_json::from_str(content)
}

/// Read and decode `path`, classifying every failure
pub fn try_load_records(path: &Path) -> Result<Vec<Value>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_records(&content).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and decode `path`; any failure is logged and yields no records
pub fn load_records(path: &Path) -> Vec<Value> {
    match try_load_records(path) {
        Ok(records) => {
            debug!(path = %path.display(), count = records.len(), "Loaded raw records");
            records
        }
        Err(e) => {
            warn!("Error: {}", e);
            Vec::new()
        }
    }
}

// ============================================================================
// VALIDATE AND CONSTRUCT
// ============================================================================

/// Validate every raw record against `T::KIND` and build the survivors
pub fn initialize_entities<T: FromRecord>(records: &[Value]) -> ParsedCollection<T> {
    let kind = T::KIND;
    let mut entities = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for (index, raw) in records.iter().enumerate() {
        let Some(record) = raw.as_object() else {
            debug!(kind = kind.name(), index, "Dropping non-object record");
            dropped += 1;
            continue;
        };

        let record = match schema::validate(record, kind) {
            Ok(record) => record,
            Err(e) => {
                debug!(index, "Dropping incomplete record: {}", e);
                dropped += 1;
                continue;
            }
        };

        entities.push(T::from_record(record));
    }

    ParsedCollection {
        entities,
        total: records.len(),
        dropped,
    }
}

/// Load `path` and build its entities
pub fn load_entities<T: FromRecord>(path: &Path) -> ParsedCollection<T> {
    let records = load_records(path);
    initialize_entities(&records)
}

// ============================================================================
// TESTS
// ============================================================================
