//! Query Layer - canned report queries over the loaded schema

pub mod transactions;

pub use transactions::{
    AssignedEmployeeRow, ClientRequirementRow, EquipmentNeedRow, QueryRunner, ResourceKind,
    ResourceRow, ScheduleRow, Transaction, TransactionResult, CANNED_CLIENT_NO,
    CANNED_REQUIREMENT_NO,
};
