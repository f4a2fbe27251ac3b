//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ExpenseId, MemberId, Money, Weight};
use domain_settlement::{ExpenseRecord, MemberSnapshot, ParticipantShare};

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating share weights, including zero
pub fn weight_strategy() -> impl Strategy<Value = Weight> {
    (0u32..500u32).prop_map(|n| Weight::new(Decimal::new(n as i64, 1)))
}

/// Strategy for generating a roster of 1-10 members
pub fn roster_strategy() -> impl Strategy<Value = Vec<MemberSnapshot>> {
    (1usize..=10).prop_map(|count| {
        (0..count)
            .map(|i| MemberSnapshot::new(MemberId::new(), format!("member-{i}")))
            .collect()
    })
}

/// Strategy for a full settlement scenario: a roster plus expenses whose
/// payer and participants are all drawn from the roster
pub fn scenario_strategy() -> impl Strategy<Value = (Vec<MemberSnapshot>, Vec<ExpenseRecord>)> {
    roster_strategy().prop_flat_map(|roster| {
        let count = roster.len();
        let ids: Vec<MemberId> = roster.iter().map(|m| m.id).collect();

        let expense = (
            0..count,
            1i64..1_000_000,
            proptest::collection::vec((0..count, 0u32..50), 1..=count),
        )
            .prop_map(move |(payer_idx, amount, raw_shares)| {
                ExpenseRecord::new(
                    ExpenseId::new(),
                    ids[payer_idx],
                    Money::from_minor(amount),
                    raw_shares
                        .into_iter()
                        .map(|(idx, w)| {
                            ParticipantShare::new(ids[idx], Weight::new(Decimal::from(w)))
                        })
                        .collect(),
                )
            });

        let roster_clone = roster.clone();
        proptest::collection::vec(expense, 0..15)
            .prop_map(move |expenses| (roster_clone.clone(), expenses))
    })
}
