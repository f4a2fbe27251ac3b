//! Transfer planning
//!
//! Turns a set of rounded balances into a short list of payer→receiver
//! transfers that settles everyone.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::balance::Balance;

/// A single settlement payment between two members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Display name of the member sending money
    pub from: String,
    /// Display name of the member receiving money
    pub to: String,
    /// Positive amount in minor currency units
    pub amount: Money,
}

/// Greedy two-pointer matching of debtors against creditors
///
/// Balances partition into debtors (negative) and creditors (positive),
/// both kept in canonical member order, which makes the resulting plan
/// deterministic. The current debtor pays the current creditor
/// `min(remaining debt, remaining credit)`; whoever reaches zero advances.
/// Amounts are exact integers, so pointer advancement uses equality rather
/// than an epsilon.
///
/// The plan has at most `debtors + creditors - 1` transfers. It is a fast
/// deterministic approximation, not a provably minimal plan; that trade-off
/// is deliberate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Produces the transfer plan for a set of balances
    ///
    /// An input with no debtors or no creditors (including the everyone-
    /// settled case of all zeroes) yields an empty plan. If the input does
    /// not sum to zero the plan drains whichever side runs out first and
    /// stops.
    pub fn compute_plan(&self, balances: &[Balance]) -> Vec<Transfer> {
        let mut debtors: Vec<(&str, Money)> = balances
            .iter()
            .filter(|b| b.amount.is_negative())
            .map(|b| (b.name.as_str(), b.amount.abs()))
            .collect();
        let mut creditors: Vec<(&str, Money)> = balances
            .iter()
            .filter(|b| b.amount.is_positive())
            .map(|b| (b.name.as_str(), b.amount))
            .collect();

        let mut transfers = Vec::with_capacity(debtors.len().saturating_add(creditors.len()));
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &mut debtors[debtor_idx];
            let creditor = &mut creditors[creditor_idx];

            let amount = debtor.1.min(creditor.1);
            transfers.push(Transfer {
                from: debtor.0.to_string(),
                to: creditor.0.to_string(),
                amount,
            });

            debtor.1 -= amount;
            creditor.1 -= amount;

            if debtors[debtor_idx].1.is_zero() {
                debtor_idx += 1;
            }
            if creditors[creditor_idx].1.is_zero() {
                creditor_idx += 1;
            }
        }

        transfers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MemberId;

    fn balance(name: &str, amount: i64) -> Balance {
        Balance {
            member_id: MemberId::new(),
            name: name.to_string(),
            amount: Money::from_minor(amount),
        }
    }

    /// Applies every transfer back to the balances and checks all end at zero.
    fn assert_settles(balances: &[Balance], transfers: &[Transfer]) {
        let mut remaining: std::collections::HashMap<&str, i64> = balances
            .iter()
            .map(|b| (b.name.as_str(), b.amount.minor_units()))
            .collect();
        for t in transfers {
            *remaining.get_mut(t.from.as_str()).unwrap() += t.amount.minor_units();
            *remaining.get_mut(t.to.as_str()).unwrap() -= t.amount.minor_units();
        }
        assert!(remaining.values().all(|&v| v == 0), "plan does not settle: {remaining:?}");
    }

    #[test]
    fn test_single_pair() {
        let balances = vec![balance("A", 500), balance("B", -500)];

        let transfers = SettlementPlanner.compute_plan(&balances);

        assert_eq!(
            transfers,
            vec![Transfer {
                from: "B".to_string(),
                to: "A".to_string(),
                amount: Money::from_minor(500),
            }]
        );
        assert_settles(&balances, &transfers);
    }

    #[test]
    fn test_one_debtor_pays_two_creditors() {
        let balances = vec![balance("A", 300), balance("B", 200), balance("C", -500)];

        let transfers = SettlementPlanner.compute_plan(&balances);

        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from, "C");
        assert_eq!(transfers[0].to, "A");
        assert_eq!(transfers[0].amount, Money::from_minor(300));
        assert_eq!(transfers[1].to, "B");
        assert_eq!(transfers[1].amount, Money::from_minor(200));
        assert_settles(&balances, &transfers);
    }

    #[test]
    fn test_transfer_count_bound() {
        let balances = vec![
            balance("A", 100),
            balance("B", 250),
            balance("C", 50),
            balance("D", -175),
            balance("E", -225),
        ];

        let transfers = SettlementPlanner.compute_plan(&balances);

        // 2 debtors + 3 creditors => at most 4 transfers
        assert!(transfers.len() <= 4);
        assert_settles(&balances, &transfers);
    }

    #[test]
    fn test_all_zero_balances_yield_empty_plan() {
        let balances = vec![balance("A", 0), balance("B", 0)];
        assert!(SettlementPlanner.compute_plan(&balances).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_plan() {
        assert!(SettlementPlanner.compute_plan(&[]).is_empty());
    }

    #[test]
    fn test_zero_balance_members_do_not_appear() {
        let balances = vec![balance("A", 500), balance("B", 0), balance("C", -500)];

        let transfers = SettlementPlanner.compute_plan(&balances);

        assert!(transfers
            .iter()
            .all(|t| t.from != "B" && t.to != "B"));
    }

    #[test]
    fn test_plan_order_is_deterministic() {
        let balances = vec![
            balance("A", 400),
            balance("B", -100),
            balance("C", 100),
            balance("D", -400),
        ];

        let first = SettlementPlanner.compute_plan(&balances);
        for _ in 0..10 {
            assert_eq!(SettlementPlanner.compute_plan(&balances), first);
        }
        assert_settles(&balances, &first);
    }

    #[test]
    fn test_imbalanced_input_drains_one_side_and_stops() {
        // Residual left uncorrected upstream: creditors outweigh debtors
        let balances = vec![balance("A", 300), balance("B", -200)];

        let transfers = SettlementPlanner.compute_plan(&balances);

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].amount, Money::from_minor(200));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::MemberId;
    use proptest::prelude::*;

    /// Generates balances that sum to zero by construction.
    fn arb_zero_sum_balances() -> impl Strategy<Value = Vec<Balance>> {
        proptest::collection::vec(-100_000i64..100_000, 1..12).prop_map(|mut amounts| {
            let total: i64 = amounts.iter().sum();
            amounts.push(-total);
            amounts
                .into_iter()
                .enumerate()
                .map(|(i, amount)| Balance {
                    member_id: MemberId::new(),
                    name: format!("member-{i}"),
                    amount: Money::from_minor(amount),
                })
                .collect()
        })
    }

    proptest! {
        /// Applying every transfer in the plan drives every balance to zero.
        #[test]
        fn plan_settles_all_balances(balances in arb_zero_sum_balances()) {
            let transfers = SettlementPlanner.compute_plan(&balances);

            let mut remaining: std::collections::HashMap<String, i64> = balances
                .iter()
                .map(|b| (b.name.clone(), b.amount.minor_units()))
                .collect();
            for t in &transfers {
                *remaining.get_mut(&t.from).unwrap() += t.amount.minor_units();
                *remaining.get_mut(&t.to).unwrap() -= t.amount.minor_units();
            }
            prop_assert!(remaining.values().all(|&v| v == 0));
        }

        /// Every transfer is strictly positive and the count respects the
        /// debtors + creditors - 1 bound.
        #[test]
        fn plan_is_positive_and_bounded(balances in arb_zero_sum_balances()) {
            let transfers = SettlementPlanner.compute_plan(&balances);

            prop_assert!(transfers.iter().all(|t| t.amount.is_positive()));

            let debtors = balances.iter().filter(|b| b.amount.is_negative()).count();
            let creditors = balances.iter().filter(|b| b.amount.is_positive()).count();
            if debtors + creditors > 0 {
                prop_assert!(transfers.len() <= debtors + creditors - 1);
            } else {
                prop_assert!(transfers.is_empty());
            }
        }
    }
}
