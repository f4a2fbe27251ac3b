//! Group domain storage port
//!
//! The `GroupStore` trait defines all persistence operations the group
//! domain needs. Adapters implement it for PostgreSQL (`infra_db`) and for
//! an in-memory map (`test_utils`), keeping handlers and tests identical
//! in shape.
//!
//! # Consistency contract
//!
//! Implementations must guarantee:
//!
//! - `add_expense` persists the expense and all of its shares atomically,
//! - `list_members` returns members in creation order (the canonical order
//!   the settlement engine depends on),
//! - `create_group` retries code generation on the rare share-code
//!   collision rather than surfacing it,
//! - a settlement snapshot (`list_members` + `list_expenses`) reflects a
//!   single consistent view of the group.
//!
//! Write serialization (at most one concurrent writer per group) is also
//! the adapter's concern; the domain and engine never lock anything.

use async_trait::async_trait;

use core_kernel::{GroupId, PortError, ShareCode};

use crate::expense::Expense;
use crate::group::Group;
use crate::member::Member;

/// Persistence operations for groups, members, and expenses
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Verifies the backing store is reachable, for readiness checks
    async fn ping(&self) -> Result<(), PortError>;

    /// Persists a new group; regenerates the share code on collision
    async fn create_group(&self, group: &Group) -> Result<Group, PortError>;

    /// Looks a group up by its share code
    async fn find_group_by_code(&self, code: &ShareCode) -> Result<Group, PortError>;

    /// Persists a new member
    async fn add_member(&self, member: &Member) -> Result<(), PortError>;

    /// Lists a group's members in creation order
    async fn list_members(&self, group_id: GroupId) -> Result<Vec<Member>, PortError>;

    /// Persists an expense together with its shares, atomically
    async fn add_expense(&self, expense: &Expense) -> Result<(), PortError>;

    /// Lists a group's expenses, newest first
    async fn list_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, PortError>;
}
