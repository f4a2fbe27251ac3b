//! Core Kernel - Foundational types and utilities for the expense splitting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money as integer minor currency units with precise decimal bridging
//! - Weight values for proportional cost sharing
//! - Common identifiers and value objects
//! - Share codes for human-shareable group access

pub mod money;
pub mod weight;
pub mod identifiers;
pub mod sharecode;
pub mod ports;
pub mod error;

pub use money::{Money, MoneyError};
pub use weight::Weight;
pub use identifiers::{GroupId, MemberId, ExpenseId, ShareId};
pub use sharecode::{ShareCode, ShareCodeError};
pub use ports::PortError;
pub use error::CoreError;
