//! Combined settlement report
//!
//! Convenience entry point running the full pipeline: balances, then plan.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::balance::{Balance, BalanceCalculator};
use crate::plan::{SettlementPlanner, Transfer};
use crate::snapshot::{ExpenseRecord, MemberSnapshot};

/// Everything a caller needs to present a settlement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Per-member balances in canonical member order
    pub balances: Vec<Balance>,
    /// Transfers that zero the balances, in deterministic order
    pub transfers: Vec<Transfer>,
    /// Sum of all recorded expense amounts
    pub total_spent: Money,
}

impl SettlementReport {
    /// Runs balance computation and transfer planning over a snapshot
    pub fn compute(members: &[MemberSnapshot], expenses: &[ExpenseRecord]) -> Self {
        let sheet = BalanceCalculator.compute(members, expenses);
        let transfers = SettlementPlanner.compute_plan(&sheet.balances);

        Self {
            balances: sheet.balances,
            transfers,
            total_spent: sheet.total_spent,
        }
    }

    /// Returns true when nobody owes anything
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
