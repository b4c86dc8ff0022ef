// 🚚 Pipeline - one top-up run from input files to report
//
// users.json → Users ─┐
//                     ├→ associate → aggregate → render → output.txt
// companies.json → Companies ─┘
//
// If either collection is empty after validation the run stops cleanly
// and no output file is created.

use crate::aggregation::{aggregate, grand_total};
use crate::association::{associate_users, AssociationStats};
use crate::config::RunConfig;
use crate::entities::{Company, User};
use crate::parser::load_entities;
use crate::report::{digest, render_report, write_report_file};
use anyhow::Result;
use serde::Serialize;
use tracing::info;

// ============================================================================
// RUN SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub users_loaded: usize,
    pub users_dropped: usize,
    pub companies_loaded: usize,
    pub companies_dropped: usize,
    pub association: AssociationStats,
    pub companies_reported: usize,
    pub total_top_ups: i64,
    pub report_lines: usize,
    pub report_sha256: String,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        format!(
            "Users: {} loaded ({} dropped), {} associated | Companies: {} loaded ({} dropped), {} reported | Top-ups: {}",
            self.users_loaded,
            self.users_dropped,
            self.association.associated(),
            self.companies_loaded,
            self.companies_dropped,
            self.companies_reported,
            self.total_top_ups
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Report written to the output file
    Written(RunSummary),

    /// Nothing to report; no output file was touched
    Skipped { reason: String },
}

// ============================================================================
// RUN
// ============================================================================

pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let users = load_entities::<User>(&config.users_path);
    if users.is_empty() {
        return Ok(skipped(format!("no usable users in {:?}", config.users_path)));
    }

    let companies = load_entities::<Company>(&config.companies_path);
    if companies.is_empty() {
        return Ok(skipped(format!(
            "no usable companies in {:?}",
            config.companies_path
        )));
    }

    let users_loaded = users.entities.len();
    let companies_loaded = companies.entities.len();

    let (companies_associated, association) =
        associate_users(users.entities, companies.entities)?;
    let entries = aggregate(companies_associated)?;
    let lines = render_report(&entries);

    write_report_file(&lines, &config.output_path)?;
    info!(
        path = %config.output_path.display(),
        companies = entries.len(),
        "Report written"
    );

    Ok(RunOutcome::Written(RunSummary {
        users_loaded,
        users_dropped: users.dropped,
        companies_loaded,
        companies_dropped: companies.dropped,
        association,
        companies_reported: entries.len(),
        total_top_ups: grand_total(&entries),
        report_lines: lines.len(),
        report_sha256: digest(&lines),
    }))
}

fn skipped(reason: String) -> RunOutcome {
    info!("Nothing to report: {}", reason);
    RunOutcome::Skipped { reason }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn setup(dir: &Path, users: serde_json::Value, companies: serde_json::Value) -> RunConfig {
        let config = RunConfig::new(
            dir.join("users.json"),
            dir.join("companies.json"),
            dir.join("output.txt"),
        );
        fs::write(&config.users_path, users.to_string()).unwrap();
        fs::write(&config.companies_path, companies.to_string()).unwrap();
        config
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            json!([{
                "first_name": "Jo", "last_name": "Lee", "email": "j@x", "tokens": 5,
                "email_status": true, "active_status": true, "company_id": 1
            }]),
            json!([{ "id": 1, "name": "Acme", "email_status": true, "top_up": 10 }]),
        );

        let summary = match run(&config).unwrap() {
            RunOutcome::Written(summary) => summary,
            other => panic!("expected a written report, got {:?}", other),
        };
        assert_eq!(summary.users_loaded, 1);
        assert_eq!(summary.association.emailed, 1);
        assert_eq!(summary.companies_reported, 1);
        assert_eq!(summary.total_top_ups, 10);
        assert!(config.output_path.exists());
    }

    #[test]
    fn test_run_skips_without_users() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            json!([{ "first_name": "Incomplete" }]),
            json!([{ "id": 1, "name": "Acme", "email_status": true, "top_up": 10 }]),
        );

        let outcome = run(&config).unwrap();

        assert!(matches!(outcome, RunOutcome::Skipped { .. }));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_run_skips_without_companies_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            json!([{
                "first_name": "Jo", "last_name": "Lee", "email": "j@x", "tokens": 5,
                "email_status": true, "active_status": true, "company_id": 1
            }]),
            json!([]),
        );
        fs::remove_file(&config.companies_path).unwrap();

        let outcome = run(&config).unwrap();

        assert!(matches!(outcome, RunOutcome::Skipped { .. }));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_run_ignores_odd_tokens_on_skipped_users() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            json!([
                {
                    "first_name": "Jo", "last_name": "Lee", "email": "j@x", "tokens": 5,
                    "email_status": true, "active_status": true, "company_id": 1
                },
                {
                    "first_name": "Idle", "last_name": "User", "email": "i@x", "tokens": null,
                    "email_status": true, "active_status": false, "company_id": 1
                },
                {
                    "first_name": "Lost", "last_name": "User", "email": "l@x", "tokens": null,
                    "email_status": true, "active_status": true, "company_id": 42
                }
            ]),
            json!([{ "id": 1, "name": "Acme", "email_status": true, "top_up": 10 }]),
        );

        let summary = match run(&config).unwrap() {
            RunOutcome::Written(summary) => summary,
            other => panic!("expected a written report, got {:?}", other),
        };

        assert_eq!(summary.association.inactive, 1);
        assert_eq!(summary.association.no_company, 1);
        let written = fs::read_to_string(&config.output_path).unwrap();
        assert!(written.contains("\t\t  New Token Balance 15\n"));
        assert!(!written.contains("i@x"));
        assert!(!written.contains("l@x"));
    }

    #[test]
    fn test_run_fails_on_associated_user_bad_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            json!([{
                "first_name": "Jo", "last_name": "Lee", "email": "j@x", "tokens": "five",
                "email_status": true, "active_status": true, "company_id": 1
            }]),
            json!([{ "id": 1, "name": "Acme", "email_status": true, "top_up": 10 }]),
        );

        assert!(run(&config).is_err());
        assert!(!config.output_path.exists());
    }
}
