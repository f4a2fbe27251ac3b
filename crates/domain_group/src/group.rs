//! Group aggregate
//!
//! A group is an isolated collection of members and expenses, reachable
//! only through its share code. Groups never reference each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{GroupId, ShareCode};

use crate::error::GroupError;

/// Input for creating a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGroup {
    pub name: String,
}

/// An expense-sharing group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    /// Human-shareable access code, unique across all groups
    pub code: ShareCode,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a group with a fresh id and share code
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyName` if the name is blank after trimming.
    pub fn create(new: NewGroup) -> Result<Self, GroupError> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }

        Ok(Self {
            id: GroupId::new(),
            code: ShareCode::generate(),
            name,
            created_at: Utc::now(),
        })
    }

    /// Replaces the share code, used when the storage layer detects a
    /// collision with an existing group
    pub fn regenerate_code(&mut self) {
        self.code = ShareCode::generate();
    }
}
