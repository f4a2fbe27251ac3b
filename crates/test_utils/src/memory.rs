//! In-memory storage adapter
//!
//! Implements the `GroupStore` port over process memory, playing the mock
//! adapter role so handler and workflow tests run without PostgreSQL. The
//! adapter enforces the same referential rules the database schema does
//! (payer and share members must exist) so tests cannot pass against
//! looser semantics than production.

use std::sync::RwLock;

use async_trait::async_trait;

use core_kernel::{GroupId, PortError, ShareCode};
use domain_group::{Expense, Group, GroupStore, Member};

#[derive(Default)]
struct Inner {
    groups: Vec<Group>,
    members: Vec<Member>,
    expenses: Vec<Expense>,
}

/// In-memory implementation of [`GroupStore`]
#[derive(Default)]
pub struct MemoryGroupStore {
    inner: RwLock<Inner>,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn ping(&self) -> Result<(), PortError> {
        Ok(())
    }

    async fn create_group(&self, group: &Group) -> Result<Group, PortError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        let mut candidate = group.clone();
        while inner.groups.iter().any(|g| g.code == candidate.code) {
            candidate.regenerate_code();
        }
        inner.groups.push(candidate.clone());
        Ok(candidate)
    }

    async fn find_group_by_code(&self, code: &ShareCode) -> Result<Group, PortError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        inner
            .groups
            .iter()
            .find(|g| &g.code == code)
            .cloned()
            .ok_or_else(|| PortError::not_found("group", code))
    }

    async fn add_member(&self, member: &Member) -> Result<(), PortError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        if !inner.groups.iter().any(|g| g.id == member.group_id) {
            return Err(PortError::not_found("group", member.group_id));
        }
        inner.members.push(member.clone());
        Ok(())
    }

    async fn list_members(&self, group_id: GroupId) -> Result<Vec<Member>, PortError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        // Insertion order is creation order
        Ok(inner
            .members
            .iter()
            .filter(|m| m.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn add_expense(&self, expense: &Expense) -> Result<(), PortError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        let member_exists = |id| {
            inner
                .members
                .iter()
                .any(|m| m.id == id && m.group_id == expense.group_id)
        };
        if !member_exists(expense.payer_member_id) {
            return Err(PortError::validation("payer does not reference a member"));
        }
        if let Some(share) = expense.shares.iter().find(|s| !member_exists(s.member_id)) {
            return Err(PortError::validation(format!(
                "share references unknown member {}",
                share.member_id
            )));
        }

        inner.expenses.push(expense.clone());
        Ok(())
    }

    async fn list_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, PortError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| PortError::internal("store lock poisoned"))?;

        // Newest first, matching the SQL adapter
        let mut expenses: Vec<Expense> = inner
            .expenses
            .iter()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        expenses.reverse();
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_group::{MemberRole, NewExpense, NewGroup, NewMember};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_round_trip_through_port() {
        let store = MemoryGroupStore::new();

        let group = store
            .create_group(&Group::create(NewGroup { name: "Flat".into() }).unwrap())
            .await
            .unwrap();

        let member = Member::create(
            group.id,
            NewMember {
                name: "A".into(),
                role: MemberRole::Adult,
                default_weight: dec!(1),
            },
        )
        .unwrap();
        store.add_member(&member).await.unwrap();

        let roster = store.list_members(group.id).await.unwrap();
        let expense = Expense::create(
            group.id,
            NewExpense {
                title: "Rent".into(),
                amount: 90000,
                payer_member_id: member.id,
                participant_ids: vec![member.id],
            },
            &roster,
        )
        .unwrap();
        store.add_expense(&expense).await.unwrap();

        let found = store.find_group_by_code(&group.code).await.unwrap();
        assert_eq!(found.id, group.id);
        assert_eq!(store.list_expenses(group.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_expense_against_unknown_group_member_is_rejected() {
        let store = MemoryGroupStore::new();

        let group = store
            .create_group(&Group::create(NewGroup { name: "Flat".into() }).unwrap())
            .await
            .unwrap();
        let member = Member::create(
            group.id,
            NewMember {
                name: "A".into(),
                role: MemberRole::Adult,
                default_weight: dec!(1),
            },
        )
        .unwrap();
        store.add_member(&member).await.unwrap();

        let mut expense = Expense::create(
            group.id,
            NewExpense {
                title: "Rent".into(),
                amount: 90000,
                payer_member_id: member.id,
                participant_ids: vec![member.id],
            },
            &[member],
        )
        .unwrap();
        // Simulate stale data referencing a member that never persisted
        expense.payer_member_id = core_kernel::MemberId::new();

        assert!(store.add_expense(&expense).await.is_err());
    }
}
