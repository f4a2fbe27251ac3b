//! Input snapshot types for the settlement engine
//!
//! The engine consumes plain value types rather than persisted aggregates,
//! so any caller able to assemble a member list and expense records can run
//! a settlement — the HTTP layer from database rows, tests from builders.

use core_kernel::{ExpenseId, MemberId, Money, Weight};
use serde::{Deserialize, Serialize};

/// A member as the engine sees it: identity plus display name
///
/// Slice order is significant: it is the canonical member order used for
/// rounding correction and for the deterministic ordering of balances and
/// transfers. Callers pass members in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub id: MemberId,
    pub name: String,
}

impl MemberSnapshot {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One participant's weighted share of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    /// The participating member; unknown ids are dropped during computation
    pub member_id: MemberId,
    /// Relative share weight; negative values count as zero
    pub weight: Weight,
}

impl ParticipantShare {
    pub fn new(member_id: MemberId, weight: Weight) -> Self {
        Self { member_id, weight }
    }
}

/// A recorded purchase: who paid, how much, and who took part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    /// The member who paid; an unknown payer causes the whole record to be
    /// skipped
    pub payer_id: MemberId,
    /// Amount in minor currency units, positive by construction upstream
    pub amount: Money,
    /// Participant shares; order carries no meaning
    pub shares: Vec<ParticipantShare>,
}

impl ExpenseRecord {
    pub fn new(
        id: ExpenseId,
        payer_id: MemberId,
        amount: Money,
        shares: Vec<ParticipantShare>,
    ) -> Self {
        Self {
            id,
            payer_id,
            amount,
            shares,
        }
    }
}
