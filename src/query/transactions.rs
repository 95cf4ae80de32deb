//! The five canned report queries
//!
//! Each query is a plain join (or union of joins) over the loaded schema.
//! Rows come back typed; rendering is left to `ui`.

use serde::Serialize;
use std::str::FromStr;
use crate::{Error, Result};
use crate::storage::SqliteStore;

/// Requirement used by the canned equipment/employee reports
pub const CANNED_REQUIREMENT_NO: u32 = 1;
/// Client used by the canned schedule report
pub const CANNED_CLIENT_NO: u32 = 4;

/// One of the five canned reports, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transaction {
    /// All clients joined to their requirements
    ClientRequirements,
    /// Equipment needed for a requirement
    RequirementEquipment,
    /// Employees assigned to a requirement
    RequirementEmployees,
    /// All requirements for one client
    ClientSchedule,
    /// Employees and equipment for a requirement, tagged by type
    RequirementResources,
}

impl Transaction {
    /// All transactions in execution order
    pub fn all() -> &'static [Transaction] {
        &[
            Transaction::ClientRequirements,
            Transaction::RequirementEquipment,
            Transaction::RequirementEmployees,
            Transaction::ClientSchedule,
            Transaction::RequirementResources,
        ]
    }

    /// 1-based position in the report sequence
    pub fn number(&self) -> u8 {
        match self {
            Transaction::ClientRequirements => 1,
            Transaction::RequirementEquipment => 2,
            Transaction::RequirementEmployees => 3,
            Transaction::ClientSchedule => 4,
            Transaction::RequirementResources => 5,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Transaction::ClientRequirements => "List all clients and their requirements".to_string(),
            Transaction::RequirementEquipment => {
                format!("Equipment needed for requirement #{}", CANNED_REQUIREMENT_NO)
            }
            Transaction::RequirementEmployees => {
                format!("Employees assigned to requirement #{}", CANNED_REQUIREMENT_NO)
            }
            Transaction::ClientSchedule => {
                format!("All requirements for client #{}", CANNED_CLIENT_NO)
            }
            Transaction::RequirementResources => {
                format!("Employees AND equipment for requirement #{}", CANNED_REQUIREMENT_NO)
            }
        }
    }
}

impl TryFrom<u8> for Transaction {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Transaction::all()
            .iter()
            .copied()
            .find(|t| t.number() == n)
            .ok_or(Error::UnknownTransaction(n))
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transaction {}: {}", self.number(), self.title())
    }
}

/// Query 1 row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRequirementRow {
    pub f_name: String,
    pub l_name: String,
    pub requirement_no: u32,
    pub s_date: String,
    pub s_time: String,
}

impl ClientRequirementRow {
    pub fn client_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name)
    }
}

/// Query 2 row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentNeedRow {
    pub description: String,
    pub quantity: u32,
}

/// Query 3 row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedEmployeeRow {
    pub f_name: String,
    pub l_name: String,
}

impl AssignedEmployeeRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name)
    }
}

/// Query 4 row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub requirement_no: u32,
    pub s_date: String,
    pub s_time: String,
    /// Minutes
    pub duration: u32,
}

/// Tag on a query 5 row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceKind {
    Employee,
    Equipment,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Employee => "EMPLOYEE",
            ResourceKind::Equipment => "EQUIPMENT",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EMPLOYEE" => Ok(ResourceKind::Employee),
            "EQUIPMENT" => Ok(ResourceKind::Equipment),
            _ => Err(Error::Integrity(format!("Unknown resource type: {}", s))),
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query 5 row: employee (first name, last name) or equipment (description, quantity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRow {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    pub detail: String,
}

/// Typed rows of one transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransactionResult {
    ClientRequirements(Vec<ClientRequirementRow>),
    RequirementEquipment(Vec<EquipmentNeedRow>),
    RequirementEmployees(Vec<AssignedEmployeeRow>),
    ClientSchedule(Vec<ScheduleRow>),
    RequirementResources(Vec<ResourceRow>),
}

impl TransactionResult {
    pub fn transaction(&self) -> Transaction {
        match self {
            TransactionResult::ClientRequirements(_) => Transaction::ClientRequirements,
            TransactionResult::RequirementEquipment(_) => Transaction::RequirementEquipment,
            TransactionResult::RequirementEmployees(_) => Transaction::RequirementEmployees,
            TransactionResult::ClientSchedule(_) => Transaction::ClientSchedule,
            TransactionResult::RequirementResources(_) => Transaction::RequirementResources,
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            TransactionResult::ClientRequirements(rows) => rows.len(),
            TransactionResult::RequirementEquipment(rows) => rows.len(),
            TransactionResult::RequirementEmployees(rows) => rows.len(),
            TransactionResult::ClientSchedule(rows) => rows.len(),
            TransactionResult::RequirementResources(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the canned reports against a loaded store
pub struct QueryRunner<'a> {
    store: &'a SqliteStore,
}

impl<'a> QueryRunner<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Run one transaction with its canned parameters
    pub fn run(&self, transaction: Transaction) -> Result<TransactionResult> {
        tracing::debug!("Running {}", transaction);
        let result = match transaction {
            Transaction::ClientRequirements => {
                TransactionResult::ClientRequirements(self.clients_with_requirements()?)
            }
            Transaction::RequirementEquipment => TransactionResult::RequirementEquipment(
                self.equipment_for_requirement(CANNED_REQUIREMENT_NO)?,
            ),
            Transaction::RequirementEmployees => TransactionResult::RequirementEmployees(
                self.employees_for_requirement(CANNED_REQUIREMENT_NO)?,
            ),
            Transaction::ClientSchedule => {
                TransactionResult::ClientSchedule(self.requirements_for_client(CANNED_CLIENT_NO)?)
            }
            Transaction::RequirementResources => TransactionResult::RequirementResources(
                self.resources_for_requirement(CANNED_REQUIREMENT_NO)?,
            ),
        };
        tracing::debug!("{} returned {} rows", transaction, result.len());
        Ok(result)
    }

    /// Run all five transactions in order
    pub fn run_all(&self) -> Result<Vec<TransactionResult>> {
        Transaction::all().iter().map(|t| self.run(*t)).collect()
    }

    /// Every client that has a requirement, ordered by surname then date
    pub fn clients_with_requirements(&self) -> Result<Vec<ClientRequirementRow>> {
        let mut stmt = self.store.connection().prepare(
            r#"
            SELECT C.fName, C.lName, R.requirementNo, R.sDate, strftime('%H:%M', R.sTime) AS sTime
            FROM CLIENT C
            JOIN REQUIREMENT R ON C.clientNo = R.clientNo
            ORDER BY C.lName, R.sDate
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ClientRequirementRow {
                    f_name: row.get(0)?,
                    l_name: row.get(1)?,
                    requirement_no: row.get(2)?,
                    s_date: row.get(3)?,
                    s_time: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Equipment (and quantity) needed by a requirement
    pub fn equipment_for_requirement(&self, requirement_no: u32) -> Result<Vec<EquipmentNeedRow>> {
        let mut stmt = self.store.connection().prepare(
            r#"
            SELECT E.description, REQ.quantity
            FROM REQUIRES REQ
            JOIN EQUIPMENT E ON REQ.equipmentNo = E.equipmentNo
            WHERE REQ.requirementNo = ?1
            ORDER BY E.equipmentNo
            "#,
        )?;

        let rows = stmt
            .query_map([requirement_no], |row| {
                Ok(EquipmentNeedRow {
                    description: row.get(0)?,
                    quantity: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Employees assigned to a requirement
    pub fn employees_for_requirement(&self, requirement_no: u32) -> Result<Vec<AssignedEmployeeRow>> {
        let mut stmt = self.store.connection().prepare(
            r#"
            SELECT EM.fName, EM.lName
            FROM ASSIGNED_TO A
            JOIN EMPLOYEE EM ON A.employeeNo = EM.employeeNo
            WHERE A.requirementNo = ?1
            ORDER BY EM.employeeNo
            "#,
        )?;

        let rows = stmt
            .query_map([requirement_no], |row| {
                Ok(AssignedEmployeeRow {
                    f_name: row.get(0)?,
                    l_name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// All requirements of a client, ordered by date then start time
    pub fn requirements_for_client(&self, client_no: u32) -> Result<Vec<ScheduleRow>> {
        let mut stmt = self.store.connection().prepare(
            r#"
            SELECT requirementNo, sDate, strftime('%H:%M', sTime) AS sTime, duration
            FROM REQUIREMENT
            WHERE clientNo = ?1
            ORDER BY sDate, sTime
            "#,
        )?;

        let rows = stmt
            .query_map([client_no], |row| {
                Ok(ScheduleRow {
                    requirement_no: row.get(0)?,
                    s_date: row.get(1)?,
                    s_time: row.get(2)?,
                    duration: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Employees then equipment for a requirement, as one tagged list
    pub fn resources_for_requirement(&self, requirement_no: u32) -> Result<Vec<ResourceRow>> {
        let mut stmt = self.store.connection().prepare(
            r#"
            SELECT type, name, detail FROM (
                SELECT 'EMPLOYEE' AS type, fName AS name, lName AS detail,
                       0 AS grp, employeeNo AS seq
                FROM ASSIGNED_TO
                JOIN EMPLOYEE USING (employeeNo)
                WHERE requirementNo = ?1
                UNION ALL
                SELECT 'EQUIPMENT', description, CAST(quantity AS TEXT),
                       1, equipmentNo
                FROM REQUIRES
                JOIN EQUIPMENT USING (equipmentNo)
                WHERE requirementNo = ?1
            )
            ORDER BY grp, seq
            "#,
        )?;

        let rows = stmt
            .query_map([requirement_no], |row| {
                let kind_str: String = row.get(0)?;
                let kind: ResourceKind = kind_str.parse().map_err(|e: Error| {
                    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
                })?;
                Ok(ResourceRow {
                    kind,
                    name: row.get(1)?,
                    detail: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }
}
