// 🏢 Company Entity
//
// Built once from its record, then decorated in place: the association
// step appends users to one of the two groups, the aggregation step sorts
// them. Nothing is removed once added.

use super::{fields, Amount, EntityId, User};
use crate::error::TopUpError;
use crate::parser::FromRecord;
use crate::schema::{Record, RecordKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    /// None when the input id is not an integer or text; no user matches it
    pub id: Option<EntityId>,
    pub name: String,

    /// Whether this company permits emailing its users
    pub email_status: bool,

    /// Tokens granted to every associated user
    pub top_up: Amount,

    /// Users with email_status set on both sides
    pub emailed_users: Vec<User>,

    pub not_emailed_users: Vec<User>,
}

impl Company {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        email_status: bool,
        top_up: impl Into<Amount>,
    ) -> Self {
        Company {
            id: Some(id.into()),
            name: name.into(),
            email_status,
            top_up: top_up.into(),
            emailed_users: Vec::new(),
            not_emailed_users: Vec::new(),
        }
    }

    /// The id as printed in reports and errors
    pub fn id_text(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Whether `user` is emailed when associated with this company
    pub fn emails(&self, user: &User) -> bool {
        user.email_status && self.email_status
    }

    /// Append a user to the emailed or not-emailed group
    pub fn add_user(&mut self, user: User) {
        if self.emails(&user) {
            self.emailed_users.push(user);
        } else {
            self.not_emailed_users.push(user);
        }
    }

    pub fn user_count(&self) -> usize {
        self.emailed_users.len() + self.not_emailed_users.len()
    }

    /// (emailed + not emailed) * top_up
    ///
    /// A company without users totals 0 whatever its top_up holds.
    pub fn total_top_ups(&self) -> Result<i64, TopUpError> {
        let count = self.user_count();
        if count == 0 {
            return Ok(0);
        }

        let top_up = self.top_up.as_i64().ok_or_else(|| TopUpError::InvalidAmount {
            subject: format!("Company {}", self.id_text()),
            field: "top_up",
            found: self.top_up.describe(),
        })?;

        i64::try_from(count)
            .ok()
            .and_then(|count| count.checked_mul(top_up))
            .ok_or_else(|| TopUpError::Overflow {
                company: self.id_text(),
                detail: format!("{} users * top-up {}", count, top_up),
            })
    }

    /// Stable sort of both groups by last name
    pub fn sort_users(&mut self) {
        self.emailed_users.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        self.not_emailed_users.sort_by(|a, b| a.last_name.cmp(&b.last_name));
    }
}

impl FromRecord for Company {
    const KIND: RecordKind = RecordKind::Company;

    fn from_record(record: &Record) -> Self {
        Company {
            id: fields::identifier(record, "id"),
            name: fields::text(record, "name"),
            email_status: fields::flag(record, "email_status"),
            top_up: fields::amount(record, "top_up"),
            emailed_users: Vec::new(),
            not_emailed_users: Vec::new(),
        }
    }
}
