//! Expense DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AddExpenseRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    /// Amount in minor currency units
    #[validate(range(min = 1, message = "amount must be at least 1"))]
    pub amount: i64,
    pub payer_member_id: Uuid,
    #[validate(length(min = 1, message = "at least one participant is required"))]
    pub participant_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseRecordedResponse {
    pub expense_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ExpenseParticipantResponse {
    pub member_id: Uuid,
    pub name: String,
    pub weight: Decimal,
    /// Display-only preview of this participant's share
    pub share_amount: i64,
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub title: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub payer_member_id: Uuid,
    pub payer_name: String,
    pub participants: Vec<ExpenseParticipantResponse>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub items: Vec<ExpenseResponse>,
}
