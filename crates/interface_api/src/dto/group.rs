//! Group and member DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_group::{Group, Member};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    /// One of "adult", "student", "child"; defaults to "adult"
    pub role: Option<String>,
    /// Defaults to 1 when omitted
    pub default_weight: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: (*group.id.as_uuid()),
            code: group.code.as_str().to_string(),
            name: group.name.clone(),
            created_at: group.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub default_weight: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: (*member.id.as_uuid()),
            name: member.name.clone(),
            role: member.role.as_str().to_string(),
            default_weight: member.default_weight.value(),
            created_at: member.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupWithMembersResponse {
    pub group: GroupResponse,
    pub members: Vec<MemberResponse>,
}
