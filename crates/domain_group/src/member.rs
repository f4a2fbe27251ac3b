//! Group members
//!
//! Members carry a default cost-sharing weight that seeds each expense
//! share, and a coarse role used by clients to suggest typical weights
//! (an adult usually carries more of a bill than a child).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{GroupId, MemberId, Weight};

use crate::error::GroupError;

/// Coarse member category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[default]
    Adult,
    Student,
    Child,
}

impl MemberRole {
    /// Returns the wire label for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Adult => "adult",
            MemberRole::Student => "student",
            MemberRole::Child => "child",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adult" => Ok(MemberRole::Adult),
            "student" => Ok(MemberRole::Student),
            "child" => Ok(MemberRole::Child),
            other => Err(GroupError::InvalidRole(other.to_string())),
        }
    }
}

/// Input for enrolling a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub role: MemberRole,
    pub default_weight: Decimal,
}

/// A member of a group
///
/// Immutable once created, except through administrative edits out of
/// scope here. Creation order is the canonical member order used by the
/// settlement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub group_id: GroupId,
    pub name: String,
    pub role: MemberRole,
    /// Seed weight for expense shares; strictly positive by construction
    pub default_weight: Weight,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Creates a member in the given group
    ///
    /// # Errors
    ///
    /// - `GroupError::EmptyName` for a blank name
    /// - `GroupError::InvalidWeight` for a non-positive default weight
    pub fn create(group_id: GroupId, new: NewMember) -> Result<Self, GroupError> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if new.default_weight <= Decimal::ZERO {
            return Err(GroupError::invalid_weight(new.default_weight));
        }

        Ok(Self {
            id: MemberId::new(),
            group_id,
            name,
            role: new.role,
            default_weight: Weight::new(new.default_weight),
            created_at: Utc::now(),
        })
    }
}
