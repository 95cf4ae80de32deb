//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - CLIENT(clientNo, fName, lName, address, telephoneNo)
//! - EMPLOYEE(employeeNo, fName, lName, address, salary, telephoneNo)
//! - EQUIPMENT(equipmentNo, description, usage, cost)
//! - REQUIREMENT(requirementNo, clientNo, sDate, sTime, duration, comments)
//! - REQUIRES(requirementNo, equipmentNo, quantity)
//! - ASSIGNED_TO(requirementNo, employeeNo)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, DbStats, ForeignKeyViolation};
