//! Group Domain - Groups, Members, and Expenses
//!
//! This crate owns the mutable side of the system: creating groups,
//! enrolling members, and recording expenses with participant shares.
//! Everything here is data-entry validation and aggregate construction;
//! the settlement math lives in `domain_settlement` and consumes snapshots
//! of these aggregates.
//!
//! # Storage port
//!
//! Persistence is behind the [`GroupStore`] trait so the HTTP layer can run
//! against PostgreSQL in production and an in-memory store in tests.

pub mod group;
pub mod member;
pub mod expense;
pub mod ports;
pub mod error;

pub use group::{Group, NewGroup};
pub use member::{Member, MemberRole, NewMember};
pub use expense::{Expense, ExpenseShare, NewExpense};
pub use ports::GroupStore;
pub use error::GroupError;
