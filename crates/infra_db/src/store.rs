//! PostgreSQL adapter for the group storage port

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use core_kernel::{GroupId, PortError, ShareCode};
use domain_group::{Expense, Group, GroupStore, Member};

use crate::error::DatabaseError;
use crate::rows::{ExpenseRow, GroupRow, MemberRow, ShareRow};

/// How many fresh share codes to try before giving up on group creation
const CODE_RETRY_LIMIT: u32 = 5;

/// PostgreSQL implementation of [`GroupStore`]
#[derive(Debug, Clone)]
pub struct PgGroupStore {
    pool: PgPool,
}

impl PgGroupStore {
    /// Creates a store backed by the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool, used by health checks
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert_group(&self, group: &Group) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO groups (id, code, name, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::from(group.id))
        .bind(group.code.as_str())
        .bind(&group.name)
        .bind(group.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;
        Ok(())
    }
}

#[async_trait]
impl GroupStore for PgGroupStore {
    async fn ping(&self) -> Result<(), PortError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| PortError::from(DatabaseError::from(&e)))?;
        Ok(())
    }

    async fn create_group(&self, group: &Group) -> Result<Group, PortError> {
        let mut candidate = group.clone();
        for attempt in 0..CODE_RETRY_LIMIT {
            match self.insert_group(&candidate).await {
                Ok(()) => {
                    debug!(group = %candidate.id, code = %candidate.code, "group created");
                    return Ok(candidate);
                }
                Err(e) if e.is_duplicate() => {
                    warn!(attempt, code = %candidate.code, "share code collision, regenerating");
                    candidate.regenerate_code();
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(PortError::conflict(
            "could not allocate a unique share code",
        ))
    }

    async fn find_group_by_code(&self, code: &ShareCode) -> Result<Group, PortError> {
        let row = sqlx::query_as::<_, GroupRow>(
            "SELECT id, code, name, created_at FROM groups WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?
        .ok_or_else(|| PortError::not_found("group", code))?;

        Group::try_from(row).map_err(PortError::from)
    }

    async fn add_member(&self, member: &Member) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO members (id, group_id, name, role, default_weight, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::from(member.id))
        .bind(Uuid::from(member.group_id))
        .bind(&member.name)
        .bind(member.role.as_str())
        .bind(member.default_weight.value())
        .bind(member.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PortError::from(DatabaseError::from(&e)))?;
        Ok(())
    }

    async fn list_members(&self, group_id: GroupId) -> Result<Vec<Member>, PortError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT id, group_id, name, role, default_weight, created_at \
             FROM members WHERE group_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(Uuid::from(group_id))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter()
            .map(|row| Member::try_from(row).map_err(PortError::from))
            .collect()
    }

    async fn add_expense(&self, expense: &Expense) -> Result<(), PortError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| PortError::from(DatabaseError::from(&e)))?;

        sqlx::query(
            "INSERT INTO expenses (id, group_id, title, amount, payer_member_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::from(expense.id))
        .bind(Uuid::from(expense.group_id))
        .bind(&expense.title)
        .bind(expense.amount.minor_units())
        .bind(Uuid::from(expense.payer_member_id))
        .bind(expense.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| PortError::from(DatabaseError::from(&e)))?;

        for share in &expense.shares {
            sqlx::query(
                "INSERT INTO expense_shares (expense_id, member_id, weight) VALUES ($1, $2, $3)",
            )
            .bind(Uuid::from(expense.id))
            .bind(Uuid::from(share.member_id))
            .bind(share.weight.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| PortError::from(DatabaseError::from(&e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| PortError::from(DatabaseError::from(&e)))?;

        debug!(expense = %expense.id, shares = expense.shares.len(), "expense recorded");
        Ok(())
    }

    async fn list_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, PortError> {
        let expense_rows = sqlx::query_as::<_, ExpenseRow>(
            "SELECT id, group_id, title, amount, payer_member_id, created_at \
             FROM expenses WHERE group_id = $1 ORDER BY created_at DESC, id ASC",
        )
        .bind(Uuid::from(group_id))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let share_rows = sqlx::query_as::<_, ShareRow>(
            "SELECT es.expense_id, es.member_id, es.weight \
             FROM expense_shares es \
             JOIN expenses e ON e.id = es.expense_id \
             WHERE e.group_id = $1",
        )
        .bind(Uuid::from(group_id))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let mut shares_by_expense: std::collections::HashMap<Uuid, Vec<ShareRow>> =
            std::collections::HashMap::new();
        for share in share_rows {
            shares_by_expense
                .entry(share.expense_id)
                .or_default()
                .push(share);
        }

        Ok(expense_rows
            .into_iter()
            .map(|row| {
                let shares = shares_by_expense.remove(&row.id).unwrap_or_default();
                row.into_expense(shares)
            })
            .collect())
    }
}
