//! Group domain errors
//!
//! Data-entry validation failures raised while constructing aggregates.
//! These are caller mistakes, reported before anything is persisted; the
//! settlement engine downstream never raises errors of its own.

use thiserror::Error;

/// Errors that can occur in the group domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// Group or member display name was empty after trimming
    #[error("Name must not be empty")]
    EmptyName,

    /// Expense title was empty after trimming
    #[error("Expense title must not be empty")]
    EmptyTitle,

    /// Expense amount must be at least one minor unit
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// A member's default weight must be strictly positive
    #[error("Default weight must be positive, got {0}")]
    InvalidWeight(String),

    /// Unknown member role label
    #[error("Unknown member role: {0}")]
    InvalidRole(String),

    /// The paying member does not belong to the group
    #[error("Payer {0} is not a member of the group")]
    PayerNotInGroup(String),

    /// A participant does not belong to the group
    #[error("Participant {0} is not a member of the group")]
    ParticipantNotInGroup(String),

    /// An expense needs at least one participant
    #[error("An expense needs at least one participant")]
    EmptyParticipants,
}

impl GroupError {
    /// Creates an InvalidWeight error from any displayable weight
    pub fn invalid_weight(weight: impl std::fmt::Display) -> Self {
        GroupError::InvalidWeight(weight.to_string())
    }
}
