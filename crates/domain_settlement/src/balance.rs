//! Balance computation
//!
//! Folds expense records into per-member signed balances using proportional
//! weight-based splitting, then rounds to integer currency units while
//! preserving a zero-sum total.

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

use core_kernel::{MemberId, Money};

use crate::snapshot::{ExpenseRecord, MemberSnapshot};

/// A member's net position after folding in all expenses
///
/// Positive means the member is owed money, negative means the member owes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Balance {
    pub member_id: MemberId,
    pub name: String,
    pub amount: Money,
}

/// The result of a balance computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSheet {
    /// Per-member balances in canonical member order
    pub balances: Vec<Balance>,
    /// Sum of all expense amounts, including records skipped for an
    /// unknown payer
    pub total_spent: Money,
}

/// Folds expense records into rounded, zero-sum member balances
///
/// # Fallback policy
///
/// The calculator never fails. Degenerate inputs degrade as follows:
///
/// - an expense whose payer is not in the member list is skipped entirely
///   (it still counts toward `total_spent`),
/// - participant shares referencing unknown members are dropped,
/// - an expense with no resolvable participants, or whose resolvable
///   weights sum to zero, is treated as the payer's own consumption: the
///   payer is credited the full amount and nobody is debited.
///
/// # Invariant
///
/// After rounding, balances sum to exactly zero whenever at least one
/// member's rounded balance is strictly positive; the residual introduced
/// by independent per-member rounding is absorbed by the first such member
/// in canonical order. When no member rounds positive the residual is left
/// in place and logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes rounded balances and the running total of spending
    pub fn compute(&self, members: &[MemberSnapshot], expenses: &[ExpenseRecord]) -> BalanceSheet {
        let mut running: HashMap<MemberId, Decimal> =
            members.iter().map(|m| (m.id, Decimal::ZERO)).collect();
        let mut total_spent = Money::ZERO;

        for expense in expenses {
            total_spent += expense.amount;

            if !running.contains_key(&expense.payer_id) {
                debug!(expense = %expense.id, payer = %expense.payer_id, "skipping expense with unknown payer");
                continue;
            }

            let amount = expense.amount.to_decimal();

            // Only shares that resolve to a known member take part in the
            // split; their effective weights floor negatives to zero.
            let total_weight: Decimal = expense
                .shares
                .iter()
                .filter(|s| running.contains_key(&s.member_id))
                .map(|s| s.weight.effective())
                .sum();

            if total_weight > Decimal::ZERO {
                for share in &expense.shares {
                    if let Some(balance) = running.get_mut(&share.member_id) {
                        *balance -= amount * share.weight.effective() / total_weight;
                    }
                }
            }
            // total_weight == 0 covers both the empty participant set and
            // the all-zero-weight set: the payer consumed alone.

            if let Some(balance) = running.get_mut(&expense.payer_id) {
                *balance += amount;
            }
        }

        let balances = Self::round_zero_sum(members, &running);

        BalanceSheet {
            balances,
            total_spent,
        }
    }

    /// Computes balances alone, discarding the spending total
    pub fn compute_balances(
        &self,
        members: &[MemberSnapshot],
        expenses: &[ExpenseRecord],
    ) -> Vec<Balance> {
        self.compute(members, expenses).balances
    }

    /// Rounds real balances to minor units and corrects the rounding drift
    ///
    /// Each balance rounds half-away-from-zero independently, which can
    /// leave the total off by a few units. The correction subtracts the
    /// whole residual from the first member with a strictly positive
    /// rounded balance, in canonical member order.
    fn round_zero_sum(
        members: &[MemberSnapshot],
        running: &HashMap<MemberId, Decimal>,
    ) -> Vec<Balance> {
        let mut balances: Vec<Balance> = members
            .iter()
            .map(|m| Balance {
                member_id: m.id,
                name: m.name.clone(),
                amount: Money::from_decimal_rounded_saturating(
                    running.get(&m.id).copied().unwrap_or_default(),
                ),
            })
            .collect();

        let residual: Money = balances.iter().map(|b| b.amount).sum();
        if !residual.is_zero() {
            match balances.iter_mut().find(|b| b.amount.is_positive()) {
                Some(creditor) => creditor.amount -= residual,
                None => {
                    debug!(%residual, "rounding residual left uncorrected: no member with positive balance");
                }
            }
        }

        balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ParticipantShare;
    use core_kernel::{ExpenseId, Weight};
    use rust_decimal_macros::dec;

    fn member(name: &str) -> MemberSnapshot {
        MemberSnapshot::new(MemberId::new(), name)
    }

    fn expense(payer: MemberId, amount: i64, shares: &[(MemberId, Decimal)]) -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::new(),
            payer,
            Money::from_minor(amount),
            shares
                .iter()
                .map(|(id, w)| ParticipantShare::new(*id, Weight::new(*w)))
                .collect(),
        )
    }

    #[test]
    fn test_equal_split_between_two_members() {
        let a = member("A");
        let b = member("B");
        let expenses = vec![expense(
            a.id,
            1000,
            &[(a.id, dec!(1)), (b.id, dec!(1))],
        )];

        let sheet = BalanceCalculator.compute(&[a.clone(), b.clone()], &expenses);

        assert_eq!(sheet.balances[0].amount, Money::from_minor(500));
        assert_eq!(sheet.balances[1].amount, Money::from_minor(-500));
        assert_eq!(sheet.total_spent, Money::from_minor(1000));
    }

    #[test]
    fn test_proportional_split_by_weight() {
        let a = member("A");
        let b = member("B");
        let c = member("C");
        let expenses = vec![expense(a.id, 300, &[(b.id, dec!(1)), (c.id, dec!(2))])];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone(), c.clone()], &expenses);

        assert_eq!(balances[0].amount, Money::from_minor(300));
        assert_eq!(balances[1].amount, Money::from_minor(-100));
        assert_eq!(balances[2].amount, Money::from_minor(-200));
    }

    #[test]
    fn test_unknown_payer_skips_expense_but_counts_spending() {
        let a = member("A");
        let stranger = MemberId::new();
        let expenses = vec![expense(stranger, 700, &[(a.id, dec!(1))])];

        let sheet = BalanceCalculator.compute(&[a.clone()], &expenses);

        assert_eq!(sheet.balances[0].amount, Money::ZERO);
        assert_eq!(sheet.total_spent, Money::from_minor(700));
    }

    #[test]
    fn test_unknown_participants_are_dropped_from_split() {
        let a = member("A");
        let b = member("B");
        let stranger = MemberId::new();
        let expenses = vec![expense(
            a.id,
            600,
            &[(b.id, dec!(1)), (stranger, dec!(1))],
        )];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone()], &expenses);

        // The stranger's weight does not dilute B's share
        assert_eq!(balances[0].amount, Money::from_minor(600));
        assert_eq!(balances[1].amount, Money::from_minor(-600));
    }

    #[test]
    fn test_empty_participant_set_is_self_consumption() {
        let a = member("A");
        let b = member("B");
        let expenses = vec![expense(a.id, 400, &[])];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone()], &expenses);

        assert_eq!(balances[0].amount, Money::from_minor(400));
        assert_eq!(balances[1].amount, Money::ZERO);
    }

    #[test]
    fn test_all_zero_weights_is_self_consumption() {
        let a = member("A");
        let b = member("B");
        let expenses = vec![expense(a.id, 400, &[(a.id, dec!(0)), (b.id, dec!(0))])];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone()], &expenses);

        assert_eq!(balances[0].amount, Money::from_minor(400));
        assert_eq!(balances[1].amount, Money::ZERO);
    }

    #[test]
    fn test_negative_weight_counts_as_zero() {
        let a = member("A");
        let b = member("B");
        let c = member("C");
        let expenses = vec![expense(
            a.id,
            300,
            &[(b.id, dec!(-5)), (c.id, dec!(1))],
        )];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone(), c.clone()], &expenses);

        assert_eq!(balances[1].amount, Money::ZERO);
        assert_eq!(balances[2].amount, Money::from_minor(-300));
    }

    #[test]
    fn test_three_way_split_rounds_and_corrects_to_zero_sum() {
        let a = member("A");
        let b = member("B");
        let c = member("C");
        let expenses = vec![expense(
            a.id,
            100,
            &[(a.id, dec!(1)), (b.id, dec!(1)), (c.id, dec!(1))],
        )];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone(), c.clone()], &expenses);

        // Unrounded: A=+66.67, B=-33.33, C=-33.33. Rounded then corrected,
        // the total must be zero and nobody may be off by more than a unit.
        let total: Money = balances.iter().map(|b| b.amount).sum();
        assert!(total.is_zero());
        assert!((balances[0].amount - Money::from_minor(67)).abs() <= Money::from_minor(1));
        assert_eq!(balances[1].amount, Money::from_minor(-33));
        assert_eq!(balances[2].amount, Money::from_minor(-33));
    }

    #[test]
    fn test_no_members_yields_empty_sheet() {
        let sheet = BalanceCalculator.compute(&[], &[]);
        assert!(sheet.balances.is_empty());
        assert!(sheet.total_spent.is_zero());
    }

    #[test]
    fn test_no_expenses_yields_zero_balances() {
        let a = member("A");
        let b = member("B");

        let sheet = BalanceCalculator.compute(&[a, b], &[]);

        assert!(sheet.balances.iter().all(|b| b.amount.is_zero()));
        assert!(sheet.total_spent.is_zero());
    }

    #[test]
    fn test_payer_participating_in_own_expense() {
        let a = member("A");
        let b = member("B");
        let expenses = vec![expense(
            a.id,
            1000,
            &[(a.id, dec!(1)), (b.id, dec!(1))],
        )];

        let balances = BalanceCalculator.compute_balances(&[a.clone(), b.clone()], &expenses);

        // A paid 1000 and consumed 500 of it
        assert_eq!(balances[0].amount, Money::from_minor(500));
        assert_eq!(balances[1].amount, Money::from_minor(-500));
    }

    #[test]
    fn test_determinism_over_repeated_runs() {
        let a = member("A");
        let b = member("B");
        let c = member("C");
        let members = [a.clone(), b.clone(), c.clone()];
        let expenses = vec![
            expense(a.id, 100, &[(a.id, dec!(1)), (b.id, dec!(1)), (c.id, dec!(1))]),
            expense(b.id, 250, &[(a.id, dec!(2)), (c.id, dec!(1))]),
        ];

        let first = BalanceCalculator.compute(&members, &expenses);
        for _ in 0..10 {
            assert_eq!(BalanceCalculator.compute(&members, &expenses), first);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::snapshot::ParticipantShare;
    use core_kernel::{ExpenseId, Weight};
    use proptest::prelude::*;

    fn arb_scenario() -> impl Strategy<Value = (Vec<MemberSnapshot>, Vec<ExpenseRecord>)> {
        (2usize..8).prop_flat_map(|member_count| {
            let members: Vec<MemberSnapshot> = (0..member_count)
                .map(|i| MemberSnapshot::new(MemberId::new(), format!("member-{i}")))
                .collect();
            let ids: Vec<MemberId> = members.iter().map(|m| m.id).collect();

            let expense = (
                0..member_count,
                1i64..1_000_000,
                proptest::collection::vec((0..member_count, 0u32..50), 1..member_count + 1),
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

            let members_clone = members.clone();
            proptest::collection::vec(expense, 0..12)
                .prop_map(move |expenses| (members_clone.clone(), expenses))
        })
    }

    proptest! {
        /// Whenever any member rounds strictly positive, the corrected
        /// balances sum to exactly zero.
        #[test]
        fn balances_sum_to_zero_when_a_creditor_exists((members, expenses) in arb_scenario()) {
            let balances = BalanceCalculator.compute_balances(&members, &expenses);
            if balances.iter().any(|b| b.amount.is_positive()) {
                let total: Money = balances.iter().map(|b| b.amount).sum();
                prop_assert!(total.is_zero());
            }
        }

        /// total_spent is simply the sum of amounts, independent of policy.
        #[test]
        fn total_spent_matches_input((members, expenses) in arb_scenario()) {
            let sheet = BalanceCalculator.compute(&members, &expenses);
            let expected: Money = expenses.iter().map(|e| e.amount).sum();
            prop_assert_eq!(sheet.total_spent, expected);
        }
    }
}
