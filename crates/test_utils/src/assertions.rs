//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for settlement results that give
//! more meaningful error messages than standard assertions.

use std::collections::HashMap;

use core_kernel::Money;
use domain_settlement::{Balance, Transfer};

/// Asserts that a set of balances sums to exactly zero
///
/// # Panics
///
/// Panics with the offending total if the balances do not sum to zero
pub fn assert_balances_sum_zero(balances: &[Balance]) {
    let total: Money = balances.iter().map(|b| b.amount).sum();
    assert!(
        total.is_zero(),
        "balances do not sum to zero: total={}, balances={:?}",
        total,
        balances
            .iter()
            .map(|b| (b.name.as_str(), b.amount.minor_units()))
            .collect::<Vec<_>>()
    );
}

/// Asserts that applying every transfer in a plan drives every balance to
/// exactly zero
///
/// # Panics
///
/// Panics with the residual per member if any balance remains
pub fn assert_plan_settles(balances: &[Balance], transfers: &[Transfer]) {
    let mut remaining: HashMap<&str, i64> = balances
        .iter()
        .map(|b| (b.name.as_str(), b.amount.minor_units()))
        .collect();

    for transfer in transfers {
        if let Some(v) = remaining.get_mut(transfer.from.as_str()) {
            *v += transfer.amount.minor_units();
        }
        if let Some(v) = remaining.get_mut(transfer.to.as_str()) {
            *v -= transfer.amount.minor_units();
        }
    }

    let unsettled: Vec<(&&str, &i64)> =
        remaining.iter().filter(|(_, v)| **v != 0).collect();
    assert!(
        unsettled.is_empty(),
        "plan does not settle all balances, residuals: {unsettled:?}"
    );
}

/// Asserts that every transfer amount is strictly positive
pub fn assert_transfers_positive(transfers: &[Transfer]) {
    for transfer in transfers {
        assert!(
            transfer.amount.is_positive(),
            "transfer from {} to {} has non-positive amount {}",
            transfer.from,
            transfer.to,
            transfer.amount
        );
    }
}
