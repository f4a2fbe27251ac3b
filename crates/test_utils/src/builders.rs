//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ExpenseId, MemberId, Money, Weight};
use domain_settlement::{ExpenseRecord, MemberSnapshot, ParticipantShare};

/// Builder for settlement engine member snapshots
pub struct TestRosterBuilder {
    members: Vec<MemberSnapshot>,
}

impl Default for TestRosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRosterBuilder {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Adds a member with the given name, returning its id
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.members
            .push(MemberSnapshot::new(MemberId::new(), name));
        self
    }

    /// Returns the built roster
    pub fn build(self) -> Vec<MemberSnapshot> {
        self.members
    }
}

/// Builder for constructing test expense records
pub struct TestExpenseBuilder {
    id: ExpenseId,
    payer_id: MemberId,
    amount: Money,
    shares: Vec<ParticipantShare>,
}

impl TestExpenseBuilder {
    /// Creates a builder for an expense paid by `payer`
    pub fn paid_by(payer: MemberId) -> Self {
        Self {
            id: ExpenseId::new(),
            payer_id: payer,
            amount: Money::from_minor(1000),
            shares: Vec::new(),
        }
    }

    /// Sets the amount in minor units
    pub fn amount(mut self, minor_units: i64) -> Self {
        self.amount = Money::from_minor(minor_units);
        self
    }

    /// Adds a participant with weight 1
    pub fn split_with(mut self, member: MemberId) -> Self {
        self.shares
            .push(ParticipantShare::new(member, Weight::new(dec!(1))));
        self
    }

    /// Adds a participant with an explicit weight
    pub fn split_with_weight(mut self, member: MemberId, weight: Decimal) -> Self {
        self.shares
            .push(ParticipantShare::new(member, Weight::new(weight)));
        self
    }

    /// Adds every roster member as an equal participant
    pub fn split_evenly(mut self, roster: &[MemberSnapshot]) -> Self {
        for member in roster {
            self.shares
                .push(ParticipantShare::new(member.id, Weight::DEFAULT));
        }
        self
    }

    /// Returns the built expense record
    pub fn build(self) -> ExpenseRecord {
        ExpenseRecord::new(self.id, self.payer_id, self.amount, self.shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_builder_defaults() {
        let roster = TestRosterBuilder::new()
            .with_member("A")
            .with_member("B")
            .build();

        let expense = TestExpenseBuilder::paid_by(roster[0].id)
            .amount(500)
            .split_evenly(&roster)
            .build();

        assert_eq!(expense.amount, Money::from_minor(500));
        assert_eq!(expense.shares.len(), 2);
        assert_eq!(expense.payer_id, roster[0].id);
    }
}
