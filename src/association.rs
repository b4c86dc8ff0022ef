// 🔗 Association Engine - link active users to their company
//
// For every user in input order:
//   inactive            → skipped
//   no company with id  → skipped
//   otherwise           → new_balance = tokens + top_up, appended to the
//                         emailed or not-emailed group of that company
//
// Skipped users are never inspected further, whatever their tokens hold.
// For an associated user, tokens and top_up must both be integers.
//
// Duplicate company ids resolve to the first company in input order.

use crate::entities::{Company, EntityId, User};
use crate::error::TopUpError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// ASSOCIATION RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Emailed,
    NotEmailed,
    Inactive,
    NoCompany,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssociationStats {
    pub emailed: usize,
    pub not_emailed: usize,
    pub inactive: usize,
    pub no_company: usize,
}

impl AssociationStats {
    pub fn associated(&self) -> usize {
        self.emailed + self.not_emailed
    }

    fn record(&mut self, outcome: Association) {
        match outcome {
            Association::Emailed => self.emailed += 1,
            Association::NotEmailed => self.not_emailed += 1,
            Association::Inactive => self.inactive += 1,
            Association::NoCompany => self.no_company += 1,
        }
    }
}

// ============================================================================
// ASSOCIATION ENGINE
// ============================================================================

pub struct AssociationEngine {
    companies: Vec<Company>,

    /// Company id → position of its first occurrence
    index: HashMap<EntityId, usize>,
}

impl AssociationEngine {
    pub fn new(companies: Vec<Company>) -> Self {
        let mut index = HashMap::with_capacity(companies.len());
        for (position, company) in companies.iter().enumerate() {
            if let Some(id) = &company.id {
                index.entry(id.clone()).or_insert(position);
            }
        }

        AssociationEngine { companies, index }
    }

    /// Position of the first company with this id
    fn find_company(&self, company_id: Option<&EntityId>) -> Option<usize> {
        company_id.and_then(|id| self.index.get(id).copied())
    }

    /// Associate one user, moving it into its company's group
    pub fn associate(&mut self, mut user: User) -> Result<Association, TopUpError> {
        if !user.active_status {
            return Ok(Association::Inactive);
        }

        let Some(position) = self.find_company(user.company_id.as_ref()) else {
            debug!("No company for user {}", user.email);
            return Ok(Association::NoCompany);
        };
        let company = &mut self.companies[position];

        let subject = || format!("User {} of company {}", user.email, company.id_text());
        if user.tokens.as_i64().is_none() {
            return Err(TopUpError::InvalidAmount {
                subject: subject(),
                field: "tokens",
                found: user.tokens.describe(),
            });
        }
        let Some(top_up) = company.top_up.as_i64() else {
            return Err(TopUpError::InvalidAmount {
                subject: subject(),
                field: "top_up",
                found: company.top_up.describe(),
            });
        };

        if user.apply_top_up(top_up).is_none() {
            return Err(TopUpError::Overflow {
                company: company.id_text(),
                detail: format!("{} tokens + top-up {}", user.tokens, top_up),
            });
        }

        let outcome = if company.emails(&user) {
            Association::Emailed
        } else {
            Association::NotEmailed
        };
        company.add_user(user);

        Ok(outcome)
    }

    /// Associate every user in input order
    pub fn associate_all(&mut self, users: Vec<User>) -> Result<AssociationStats, TopUpError> {
        let mut stats = AssociationStats::default();
        for user in users {
            stats.record(self.associate(user)?);
        }
        Ok(stats)
    }

    pub fn into_companies(self) -> Vec<Company> {
        self.companies
    }
}

/// Associate `users` with `companies` and hand back the decorated companies
pub fn associate_users(
    users: Vec<User>,
    companies: Vec<Company>,
) -> Result<(Vec<Company>, AssociationStats), TopUpError> {
    let mut engine = AssociationEngine::new(companies);
    let stats = engine.associate_all(users)?;
    Ok((engine.into_companies(), stats))
}

// ============================================================================
// TESTS
// ============================================================================
