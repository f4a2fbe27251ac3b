//! Settlement Domain - Balance Computation and Transfer Planning
//!
//! This crate implements the computational core of the expense splitting
//! system: folding weighted expense records into per-member balances and
//! producing a short sequence of transfers that zeroes them.
//!
//! # Pipeline
//!
//! Data flows one way, with no feedback loop:
//!
//! ```text
//! expense records ──> BalanceCalculator ──> balances ──> SettlementPlanner ──> transfers
//! ```
//!
//! # Purity
//!
//! Everything here is a synchronous computation over an immutable snapshot
//! of members and expenses handed in by the caller. The crate performs no
//! I/O, owns no persistence, and never fails: degenerate inputs (unknown
//! member references, zero weights, empty participant sets) degrade to
//! documented fallback behavior instead of errors. It is safe to invoke
//! repeatedly and concurrently.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_settlement::{BalanceCalculator, SettlementPlanner};
//!
//! let sheet = BalanceCalculator.compute(&members, &expenses);
//! let transfers = SettlementPlanner.compute_plan(&sheet.balances);
//! ```

pub mod snapshot;
pub mod balance;
pub mod plan;
pub mod report;

pub use snapshot::{MemberSnapshot, ExpenseRecord, ParticipantShare};
pub use balance::{Balance, BalanceSheet, BalanceCalculator};
pub use plan::{Transfer, SettlementPlanner};
pub use report::SettlementReport;
