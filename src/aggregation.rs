// 📊 Aggregation - totals, filtering and presentation order
//
// Runs after every user has been associated:
//   1. total_top_ups = (emailed + not emailed) * top_up
//   2. companies with a total of 0 or less are left out
//   3. both user groups sorted by last name (stable)
//   4. companies ordered by id ascending (stable on duplicate ids)

use crate::entities::Company;
use crate::error::TopUpError;
use serde::Serialize;

/// One company block of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub company: Company,
    pub total_top_ups: i64,
}

pub fn aggregate(companies: Vec<Company>) -> Result<Vec<ReportEntry>, TopUpError> {
    let mut entries = Vec::new();

    for mut company in companies {
        let total_top_ups = company.total_top_ups()?;
        if total_top_ups <= 0 {
            continue;
        }

        company.sort_users();
        entries.push(ReportEntry {
            company,
            total_top_ups,
        });
    }

    entries.sort_by(|a, b| a.company.id.cmp(&b.company.id));
    Ok(entries)
}

/// Sum of every reported company's total
pub fn grand_total(entries: &[ReportEntry]) -> i64 {
    entries
        .iter()
        .fold(0i64, |sum, entry| sum.saturating_add(entry.total_top_ups))
}
