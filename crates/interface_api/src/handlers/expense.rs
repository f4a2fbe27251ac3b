//! Expense handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use validator::Validate;

use core_kernel::{MemberId, ShareCode};
use domain_group::{Expense, NewExpense};

use crate::dto::expense::{
    AddExpenseRequest, ExpenseListResponse, ExpenseParticipantResponse, ExpenseRecordedResponse,
    ExpenseResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// Records an expense with its participant shares
pub async fn add_expense(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseRecordedResponse>), ApiError> {
    request.validate()?;

    let code = ShareCode::parse(&code)?;
    let group = state.store.find_group_by_code(&code).await?;
    let roster = state.store.list_members(group.id).await?;

    let expense = Expense::create(
        group.id,
        NewExpense {
            title: request.title,
            amount: request.amount,
            payer_member_id: MemberId::from_uuid(request.payer_member_id),
            participant_ids: request
                .participant_ids
                .into_iter()
                .map(MemberId::from_uuid)
                .collect(),
        },
        &roster,
    )?;
    state.store.add_expense(&expense).await?;

    tracing::info!(group = %group.id, expense = %expense.id, "expense recorded");
    Ok((
        StatusCode::CREATED,
        Json(ExpenseRecordedResponse {
            expense_id: (*expense.id.as_uuid()),
        }),
    ))
}

/// Lists a group's expenses with per-participant share previews
pub async fn list_expenses(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ExpenseListResponse>, ApiError> {
    let code = ShareCode::parse(&code)?;
    let group = state.store.find_group_by_code(&code).await?;
    let members = state.store.list_members(group.id).await?;
    let expenses = state.store.list_expenses(group.id).await?;

    let names: HashMap<MemberId, &str> =
        members.iter().map(|m| (m.id, m.name.as_str())).collect();

    let items = expenses
        .iter()
        .filter_map(|expense| to_response(expense, &names))
        .collect();

    Ok(Json(ExpenseListResponse { items }))
}

/// Builds the display row for one expense
///
/// An expense whose payer no longer resolves is omitted from the listing;
/// shares of departed participants are dropped. The settlement endpoint
/// applies its own (stricter) policy to the same data.
fn to_response(
    expense: &Expense,
    names: &HashMap<MemberId, &str>,
) -> Option<ExpenseResponse> {
    let payer_name = names.get(&expense.payer_member_id)?;

    let previews: HashMap<MemberId, i64> = expense
        .share_amounts()
        .into_iter()
        .map(|(id, amount)| (id, amount.minor_units()))
        .collect();

    let participants = expense
        .shares
        .iter()
        .filter_map(|share| {
            names.get(&share.member_id).map(|name| ExpenseParticipantResponse {
                member_id: (*share.member_id.as_uuid()),
                name: name.to_string(),
                weight: share.weight.value(),
                share_amount: previews.get(&share.member_id).copied().unwrap_or(0),
            })
        })
        .collect();

    Some(ExpenseResponse {
        id: (*expense.id.as_uuid()),
        title: expense.title.clone(),
        amount: expense.amount.minor_units(),
        created_at: expense.created_at,
        payer_member_id: (*expense.payer_member_id.as_uuid()),
        payer_name: payer_name.to_string(),
        participants,
    })
}
