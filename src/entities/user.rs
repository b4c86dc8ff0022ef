// 👤 User Entity
//
// Input fields are copied from the record and never change. `new_balance`
// is the only derived value: it stays 0 until the user is associated with
// its company.

use super::{fields, Amount, EntityId};
use crate::parser::FromRecord;
use crate::schema::{Record, RecordKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// Prior token balance
    pub tokens: Amount,

    /// Opted in to email
    pub email_status: bool,

    /// Only active users are associated
    pub active_status: bool,

    /// Reference to `Company::id`; None never matches a company
    pub company_id: Option<EntityId>,

    /// Balance after the company top-up (0 until associated)
    pub new_balance: i64,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        tokens: impl Into<Amount>,
        email_status: bool,
        active_status: bool,
        company_id: impl Into<EntityId>,
    ) -> Self {
        User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            tokens: tokens.into(),
            email_status,
            active_status,
            company_id: Some(company_id.into()),
            new_balance: 0,
        }
    }

    /// "last_name, first_name"
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Set `new_balance = tokens + top_up`. Returns None when tokens is not
    /// an integer or the sum overflows; the balance is then left untouched.
    pub fn apply_top_up(&mut self, top_up: i64) -> Option<i64> {
        let balance = self.tokens.as_i64()?.checked_add(top_up)?;
        self.new_balance = balance;
        Some(balance)
    }
}

impl FromRecord for User {
    const KIND: RecordKind = RecordKind::User;

    fn from_record(record: &Record) -> Self {
        User {
            first_name: fields::text(record, "first_name"),
            last_name: fields::text(record, "last_name"),
            email: fields::text(record, "email"),
            tokens: fields::amount(record, "tokens"),
            email_status: fields::flag(record, "email_status"),
            active_status: fields::flag(record, "active_status"),
            company_id: fields::identifier(record, "company_id"),
            new_balance: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_record() {
        let record = json!({
            "id": 99,
            "first_name": "Jo",
            "last_name": "Lee",
            "email": "j@x",
            "tokens": 5,
            "email_status": true,
            "active_status": false,
            "company_id": 1
        });

        let user = User::from_record(record.as_object().unwrap());

        assert_eq!(user.first_name, "Jo");
        assert_eq!(user.last_name, "Lee");
        assert_eq!(user.email, "j@x");
        assert_eq!(user.tokens, Amount::Integer(5));
        assert!(user.email_status);
        assert!(!user.active_status);
        assert_eq!(user.company_id, Some(EntityId::from(1)));
        assert_eq!(user.new_balance, 0);
    }

    #[test]
    fn test_user_from_record_keeps_odd_values() {
        let record = json!({
            "first_name": "Jo",
            "last_name": "Lee",
            "email": "j@x",
            "tokens": null,
            "email_status": true,
            "active_status": false,
            "company_id": null
        });

        let user = User::from_record(record.as_object().unwrap());

        assert_eq!(user.tokens, Amount::Invalid(json!(null)));
        assert_eq!(user.company_id, None);
    }

    #[test]
    fn test_full_name() {
        let user = User::new("Jo", "Lee", "j@x", 5, true, true, 1);
        assert_eq!(user.full_name(), "Lee, Jo");
    }

    #[test]
    fn test_apply_top_up() {
        let mut user = User::new("Jo", "Lee", "j@x", 5, true, true, 1);

        assert_eq!(user.apply_top_up(10), Some(15));
        assert_eq!(user.new_balance, 15);
        assert_eq!(user.tokens, Amount::Integer(5));
    }

    #[test]
    fn test_apply_top_up_overflow() {
        let mut user = User::new("Jo", "Lee", "j@x", i64::MAX, true, true, 1);

        assert_eq!(user.apply_top_up(1), None);
        assert_eq!(user.new_balance, 0);
    }

    #[test]
    fn test_apply_top_up_without_integer_tokens() {
        let mut user = User::new("Jo", "Lee", "j@x", Amount::Invalid(json!("five")), true, true, 1);

        assert_eq!(user.apply_top_up(10), None);
        assert_eq!(user.new_balance, 0);
    }
}
