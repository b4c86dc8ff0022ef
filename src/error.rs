// ⚠️ Error types for the top-up run
//
// Input faults (LoadError) are recovered by the loader and degrade to an
// empty collection. Top-up faults only arise for associated users and stop
// the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File {} doesn't exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Parsing JSON file {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("While reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopUpError {
    #[error("{subject}: field `{field}` expected integer, got {found}")]
    InvalidAmount {
        subject: String,
        field: &'static str,
        found: String,
    },

    #[error("Token arithmetic overflow for company {company}: {detail}")]
    Overflow { company: String, detail: String },
}
