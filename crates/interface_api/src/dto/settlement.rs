//! Settlement DTOs
//!
//! The response shape is the contract consumed by the browser client:
//! `{ group, balances, settlements, total_spent }`.

use serde::Serialize;
use uuid::Uuid;

use domain_group::Group;
use domain_settlement::SettlementReport;

#[derive(Debug, Serialize)]
pub struct SettlementGroupResponse {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub id: Uuid,
    pub name: String,
    /// Positive: the member is owed money. Negative: the member owes.
    pub balance: i64,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub group: SettlementGroupResponse,
    pub balances: Vec<BalanceResponse>,
    pub settlements: Vec<TransferResponse>,
    pub total_spent: i64,
}

impl SettlementResponse {
    /// Assembles the wire shape from a group and its computed report
    pub fn from_report(group: &Group, report: &SettlementReport) -> Self {
        Self {
            group: SettlementGroupResponse {
                name: group.name.clone(),
                code: group.code.as_str().to_string(),
            },
            balances: report
                .balances
                .iter()
                .map(|b| BalanceResponse {
                    id: (*b.member_id.as_uuid()),
                    name: b.name.clone(),
                    balance: b.amount.minor_units(),
                })
                .collect(),
            settlements: report
                .transfers
                .iter()
                .map(|t| TransferResponse {
                    from: t.from.clone(),
                    to: t.to.clone(),
                    amount: t.amount.minor_units(),
                })
                .collect(),
            total_spent: report.total_spent.minor_units(),
        }
    }
}
