// 📝 Report Formatter
//
// Renders aggregated companies as text, one block per company:
//
//   Company Id: <id>
//   Company Name: <name>
//   Users Emailed:
//   \t\t<last>, <first>, <email>
//   \t\t  Previous Token Balance, <tokens>
//   \t\t  New Token Balance <new_balance>
//   Users Not Emailed:
//   ...
//   \t\tTotal amount of top ups for <name>: <total>
//   <blank>
//
// Existing consumers read this byte for byte; keep the layout as is.

use crate::aggregation::ReportEntry;
use crate::entities::User;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const INDENT: &str = "\t\t";

// ============================================================================
// RENDERING
// ============================================================================

fn render_users(lines: &mut Vec<String>, users: &[User]) {
    for user in users {
        lines.push(format!("{}{}, {}", INDENT, user.full_name(), user.email));
        lines.push(format!("{}  Previous Token Balance, {}", INDENT, user.tokens));
        lines.push(format!("{}  New Token Balance {}", INDENT, user.new_balance));
    }
}

/// Lines for a single company block, trailing blank line included
pub fn render_company(entry: &ReportEntry) -> Vec<String> {
    let company = &entry.company;
    let mut lines = Vec::with_capacity(6 + 3 * company.user_count());

    lines.push(format!("Company Id: {}", company.id_text()));
    lines.push(format!("Company Name: {}", company.name));

    lines.push("Users Emailed:".to_string());
    render_users(&mut lines, &company.emailed_users);

    lines.push("Users Not Emailed:".to_string());
    render_users(&mut lines, &company.not_emailed_users);

    lines.push(format!(
        "{}Total amount of top ups for {}: {}",
        INDENT, company.name, entry.total_top_ups
    ));
    lines.push(String::new());

    lines
}

/// Lines for the whole report, in entry order
pub fn render_report(entries: &[ReportEntry]) -> Vec<String> {
    entries.iter().flat_map(render_company).collect()
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Write each line followed by a newline
pub fn write_report<W: Write>(lines: &[String], mut writer: W) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the report into it
pub fn write_report_file(lines: &[String], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;

    write_report(lines, BufWriter::new(file))
        .with_context(|| format!("Failed to write output file: {:?}", path))
}

/// SHA-256 of the report bytes as written
pub fn digest(lines: &[String]) -> String {
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// TESTS
// ============================================================================
