//! Expenses and participant shares
//!
//! An expense snapshots each participant's weight at creation time, so a
//! later change to a member's default weight never rewrites history. The
//! expense and its shares form one atomic unit: the storage port persists
//! them together or not at all.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, GroupId, MemberId, Money, Weight};

use crate::error::GroupError;
use crate::member::Member;

/// A participant's persisted share of one expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub member_id: MemberId,
    pub weight: Weight,
}

/// Input for recording an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub title: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub payer_member_id: MemberId,
    pub participant_ids: Vec<MemberId>,
}

/// A recorded purchase with its participant shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub group_id: GroupId,
    pub title: String,
    pub amount: Money,
    pub payer_member_id: MemberId,
    pub shares: Vec<ExpenseShare>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Validates and builds an expense against the group's member roster
    ///
    /// Participant ids are deduplicated (first occurrence wins the order).
    /// Each share snapshots the participant's default weight, falling back
    /// to [`Weight::DEFAULT`] if the stored value is somehow non-positive.
    ///
    /// # Errors
    ///
    /// - `GroupError::EmptyTitle` for a blank title
    /// - `GroupError::InvalidAmount` unless `amount >= 1`
    /// - `GroupError::EmptyParticipants` if no participants remain after
    ///   deduplication
    /// - `GroupError::PayerNotInGroup` / `GroupError::ParticipantNotInGroup`
    ///   for references outside the roster
    pub fn create(
        group_id: GroupId,
        new: NewExpense,
        roster: &[Member],
    ) -> Result<Self, GroupError> {
        let title = new.title.trim().to_string();
        if title.is_empty() {
            return Err(GroupError::EmptyTitle);
        }
        if new.amount <= 0 {
            return Err(GroupError::InvalidAmount(new.amount));
        }

        if !roster.iter().any(|m| m.id == new.payer_member_id) {
            return Err(GroupError::PayerNotInGroup(new.payer_member_id.to_string()));
        }

        let mut seen = Vec::with_capacity(new.participant_ids.len());
        for id in new.participant_ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        if seen.is_empty() {
            return Err(GroupError::EmptyParticipants);
        }

        let shares = seen
            .into_iter()
            .map(|id| {
                roster
                    .iter()
                    .find(|m| m.id == id)
                    .map(|m| ExpenseShare {
                        member_id: id,
                        weight: Weight::or_default(m.default_weight.value()),
                    })
                    .ok_or_else(|| GroupError::ParticipantNotInGroup(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: ExpenseId::new(),
            group_id,
            title,
            amount: Money::from_minor(new.amount),
            payer_member_id: new.payer_member_id,
            shares,
            created_at: Utc::now(),
        })
    }

    /// Per-participant share preview amounts for display
    ///
    /// Each participant's share is `amount * weight / total_weight`,
    /// rounded to minor units; with no usable weights everyone previews at
    /// zero. Previews are display-only and may not sum to the amount —
    /// only the settlement engine enforces a zero-sum total.
    pub fn share_amounts(&self) -> Vec<(MemberId, Money)> {
        let total: Decimal = self.shares.iter().map(|s| s.weight.effective()).sum();
        self.shares
            .iter()
            .map(|s| {
                let amount = if total > Decimal::ZERO {
                    Money::from_decimal_rounded_saturating(
                        self.amount.to_decimal() * s.weight.effective() / total,
                    )
                } else {
                    Money::ZERO
                };
                (s.member_id, amount)
            })
            .collect()
    }
}
