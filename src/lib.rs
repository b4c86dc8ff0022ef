// Token Top-up - Core Library
// Associates active users with their company, applies the company top-up
// and renders the per-company report. Used by the CLI and by tests.

pub mod aggregation;
pub mod association;
pub mod config;
pub mod entities;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use aggregation::{aggregate, grand_total, ReportEntry};
pub use association::{associate_users, Association, AssociationEngine, AssociationStats};
pub use config::RunConfig;
pub use entities::{Amount, Company, EntityId, User};
pub use error::{LoadError, TopUpError};
pub use parser::{
    initialize_entities, load_entities, load_records, parse_records, try_load_records,
    FromRecord, ParsedCollection,
};
pub use pipeline::{run, RunOutcome, RunSummary};
pub use report::{digest, render_company, render_report, write_report, write_report_file};
pub use schema::{validate, Record, RecordKind, ValidationError, COMPANY_FIELDS, USER_FIELDS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
