//! Row types bridging SQL results and domain aggregates
//!
//! Rows are plain data mirrors of the schema; conversion into domain types
//! happens in `TryFrom` impls so a corrupt row surfaces as a database
//! error instead of a panic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{ExpenseId, GroupId, MemberId, Money, ShareCode, Weight};
use domain_group::{Expense, ExpenseShare, Group, Member, MemberRole};

use crate::error::DatabaseError;

#[derive(Debug, FromRow)]
pub struct GroupRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<GroupRow> for Group {
    type Error = DatabaseError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        let code = ShareCode::parse(&row.code).map_err(|e| {
            DatabaseError::ConstraintViolation(format!("stored share code is invalid: {e}"))
        })?;
        Ok(Group {
            id: GroupId::from_uuid(row.id),
            code,
            name: row.name,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct MemberRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    pub role: String,
    pub default_weight: Decimal,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for Member {
    type Error = DatabaseError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let role: MemberRole = row.role.parse().map_err(|_| {
            DatabaseError::ConstraintViolation(format!("stored role is invalid: {}", row.role))
        })?;
        Ok(Member {
            id: MemberId::from_uuid(row.id),
            group_id: GroupId::from_uuid(row.group_id),
            name: row.name,
            role,
            default_weight: Weight::new(row.default_weight),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub group_id: Uuid,
    pub title: String,
    pub amount: i64,
    pub payer_member_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ExpenseRow {
    /// Assembles an expense from its row and its share rows
    pub fn into_expense(self, shares: Vec<ShareRow>) -> Expense {
        Expense {
            id: ExpenseId::from_uuid(self.id),
            group_id: GroupId::from_uuid(self.group_id),
            title: self.title,
            amount: Money::from_minor(self.amount),
            payer_member_id: MemberId::from_uuid(self.payer_member_id),
            shares: shares
                .into_iter()
                .map(|s| ExpenseShare {
                    member_id: MemberId::from_uuid(s.member_id),
                    weight: Weight::new(s.weight),
                })
                .collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ShareRow {
    pub expense_id: Uuid,
    pub member_id: Uuid,
    pub weight: Decimal,
}
