//! Settlement handler
//!
//! Loads the group snapshot, runs the settlement engine, and serializes
//! the report. The engine applies its own degradation policy to stale
//! references, so this handler never filters the snapshot.

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::ShareCode;
use domain_group::Expense;
use domain_settlement::{ExpenseRecord, MemberSnapshot, ParticipantShare, SettlementReport};

use crate::dto::settlement::SettlementResponse;
use crate::error::ApiError;
use crate::AppState;

/// Computes balances and the settlement plan for a group
pub async fn get_settlement(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let code = ShareCode::parse(&code)?;
    let group = state.store.find_group_by_code(&code).await?;
    let members = state.store.list_members(group.id).await?;
    let expenses = state.store.list_expenses(group.id).await?;

    let snapshot: Vec<MemberSnapshot> = members
        .iter()
        .map(|m| MemberSnapshot::new(m.id, m.name.clone()))
        .collect();
    let records: Vec<ExpenseRecord> = expenses.iter().map(to_record).collect();

    let report = SettlementReport::compute(&snapshot, &records);

    tracing::debug!(
        group = %group.id,
        transfers = report.transfers.len(),
        total_spent = %report.total_spent,
        "settlement computed"
    );
    Ok(Json(SettlementResponse::from_report(&group, &report)))
}

fn to_record(expense: &Expense) -> ExpenseRecord {
    ExpenseRecord::new(
        expense.id,
        expense.payer_member_id,
        expense.amount,
        expense
            .shares
            .iter()
            .map(|s| ParticipantShare::new(s.member_id, s.weight))
            .collect(),
    )
}
