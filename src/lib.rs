//! # SuperMaids - Cleaning Company Database
//!
//! Scheduling database for a cleaning company, backed by SQLite.
//!
//! SuperMaids provides:
//! - A fixed relational schema (clients, employees, equipment, requirements
//!   and the two link tables between them)
//! - A fixed sample dataset loaded in dependency order
//! - Five canned report queries ("transactions") with typed results
//! - Terminal rendering of the results as fixed-width tables

pub mod model;
pub mod storage;
pub mod seed;
pub mod query;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use model::{AssignedTo, Client, Employee, Equipment, Requirement, Requires};
pub use query::{QueryRunner, Transaction, TransactionResult};
pub use storage::SqliteStore;

/// Result type alias for SuperMaids operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SuperMaids operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Unknown transaction: {0} (expected 1-5)")]
    UnknownTransaction(u8),
}
