//! Group and member handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use validator::Validate;

use core_kernel::ShareCode;
use domain_group::{Group, Member, MemberRole, NewGroup, NewMember};

use crate::dto::group::{
    AddMemberRequest, CreateGroupRequest, GroupResponse, GroupWithMembersResponse, MemberResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// Creates a new group and returns its share code
pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    request.validate()?;

    let group = Group::create(NewGroup { name: request.name })?;
    let group = state.store.create_group(&group).await?;

    tracing::info!(group = %group.id, code = %group.code, "group created");
    Ok((StatusCode::CREATED, Json(GroupResponse::from(&group))))
}

/// Gets a group and its members by share code
pub async fn get_group(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<GroupWithMembersResponse>, ApiError> {
    let code = ShareCode::parse(&code)?;
    let group = state.store.find_group_by_code(&code).await?;
    let members = state.store.list_members(group.id).await?;

    Ok(Json(GroupWithMembersResponse {
        group: GroupResponse::from(&group),
        members: members.iter().map(MemberResponse::from).collect(),
    }))
}

/// Adds a member to a group
pub async fn add_member(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    request.validate()?;

    let code = ShareCode::parse(&code)?;
    let group = state.store.find_group_by_code(&code).await?;

    let role = match request.role.as_deref() {
        Some(label) => label.parse::<MemberRole>()?,
        None => MemberRole::default(),
    };
    let member = Member::create(
        group.id,
        NewMember {
            name: request.name,
            role,
            default_weight: request.default_weight.unwrap_or(Decimal::ONE),
        },
    )?;
    state.store.add_member(&member).await?;

    tracing::info!(group = %group.id, member = %member.id, "member added");
    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}
