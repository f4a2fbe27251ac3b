//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the expense splitting
//! system, implementing the `domain_group::GroupStore` port with SQLx.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern: `PgGroupStore` is the
//! internal adapter behind the storage port, so nothing above this layer
//! knows it is talking to PostgreSQL.
//!
//! # Consistency
//!
//! An expense and its participant shares are written in one transaction —
//! partial expenses can never be observed. Reads for a settlement snapshot
//! happen over single statements per table against MVCC snapshots, which
//! is consistent enough for append-only data.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PgGroupStore};
//!
//! let pool = create_pool(DatabaseConfig::new(url)).await?;
//! infra_db::MIGRATOR.run(&pool).await?;
//! let store = PgGroupStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod rows;
pub mod store;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig};
pub use error::DatabaseError;
pub use store::PgGroupStore;

/// Embedded migrations, applied by the server binary at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
