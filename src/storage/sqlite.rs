//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::model::{AssignedTo, Client, Employee, Equipment, Requirement, Requires};
use super::schema;

/// SQLite-backed storage for the cleaning company database
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened database {}", path.display());
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // SQLite leaves foreign key enforcement off per connection
        conn.pragma_update(None, "foreign_keys", true)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Drop every table and recreate the empty schema
    pub fn reset(&self) -> Result<()> {
        tracing::info!("Resetting schema ({} tables)", schema::TABLES.len());
        for stmt in schema::drop_statements() {
            self.conn.execute(&stmt, [])?;
        }
        self.initialize_schema()
    }

    /// Borrow the underlying connection for read queries
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Insert Operations ==========

    /// Insert a client. Fails on a duplicate clientNo.
    pub fn insert_client(&self, client: &Client) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO CLIENT (clientNo, fName, lName, address, telephoneNo)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                client.client_no,
                client.f_name,
                client.l_name,
                client.address,
                client.telephone_no,
            ],
        )?;
        Ok(())
    }

    /// Insert an employee. Fails on a duplicate employeeNo or negative salary.
    pub fn insert_employee(&self, employee: &Employee) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO EMPLOYEE (employeeNo, fName, lName, address, salary, telephoneNo)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                employee.employee_no,
                employee.f_name,
                employee.l_name,
                employee.address,
                employee.salary,
                employee.telephone_no,
            ],
        )?;
        Ok(())
    }

    /// Insert an equipment item. Fails on a duplicate equipmentNo or negative cost.
    pub fn insert_equipment(&self, equipment: &Equipment) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO EQUIPMENT (equipmentNo, description, usage, cost)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                equipment.equipment_no,
                equipment.description,
                equipment.usage,
                equipment.cost,
            ],
        )?;
        Ok(())
    }

    /// Insert a requirement. The client must already exist.
    pub fn insert_requirement(&self, requirement: &Requirement) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO REQUIREMENT (requirementNo, clientNo, sDate, sTime, duration, comments)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                requirement.requirement_no,
                requirement.client_no,
                requirement.s_date,
                requirement.s_time,
                requirement.duration,
                requirement.comments,
            ],
        )?;
        Ok(())
    }

    /// Link equipment to a requirement
    pub fn insert_requires(&self, requires: &Requires) -> Result<()> {
        self.conn.execute(
            "INSERT INTO REQUIRES (requirementNo, equipmentNo, quantity) VALUES (?1, ?2, ?3)",
            params![requires.requirement_no, requires.equipment_no, requires.quantity],
        )?;
        Ok(())
    }

    /// Assign an employee to a requirement
    pub fn insert_assignment(&self, assignment: &AssignedTo) -> Result<()> {
        self.conn.execute(
            "INSERT INTO ASSIGNED_TO (requirementNo, employeeNo) VALUES (?1, ?2)",
            params![assignment.requirement_no, assignment.employee_no],
        )?;
        Ok(())
    }

    /// Count rows in one of the schema tables
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        if !schema::TABLES.iter().any(|t| *t == table) {
            return Err(crate::Error::Integrity(format!("unknown table {}", table)));
        }
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Transaction Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    // ========== Integrity ==========

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            clients: self.count_rows("CLIENT")?,
            employees: self.count_rows("EMPLOYEE")?,
            equipment: self.count_rows("EQUIPMENT")?,
            requirements: self.count_rows("REQUIREMENT")?,
            requires: self.count_rows("REQUIRES")?,
            assignments: self.count_rows("ASSIGNED_TO")?,
        })
    }

    /// Run `PRAGMA foreign_key_check` over the whole database
    pub fn check_integrity(&self) -> Result<Vec<ForeignKeyViolation>> {
        let mut stmt = self.conn.prepare("PRAGMA foreign_key_check")?;
        let violations = stmt
            .query_map([], |row| {
                Ok(ForeignKeyViolation {
                    table: row.get(0)?,
                    rowid: row.get(1)?,
                    parent: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(violations)
    }
}

/// A row whose foreign key has no matching parent
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ForeignKeyViolation {
    pub table: String,
    pub rowid: Option<i64>,
    pub parent: String,
}

impl std::fmt::Display for ForeignKeyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rowid {
            Some(rowid) => write!(f, "{} row {} -> missing {}", self.table, rowid, self.parent),
            None => write!(f, "{} -> missing {}", self.table, self.parent),
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DbStats {
    pub clients: usize,
    pub employees: usize,
    pub equipment: usize,
    pub requirements: usize,
    pub requires: usize,
    pub assignments: usize,
}

impl DbStats {
    /// (table, row count) pairs in dependency order
    pub fn rows(&self) -> [(&'static str, usize); 6] {
        [
            ("CLIENT", self.clients),
            ("EMPLOYEE", self.employees),
            ("EQUIPMENT", self.equipment),
            ("REQUIREMENT", self.requirements),
            ("REQUIRES", self.requires),
            ("ASSIGNED_TO", self.assignments),
        ]
    }
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        for (table, count) in self.rows() {
            writeln!(f, "  {}: {}", table, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample_client(no: u32) -> Client {
        Client {
            client_no: no,
            f_name: "Test".into(),
            l_name: "Client".into(),
            address: "1 Main St".into(),
            telephone_no: "555-0000".into(),
        }
    }

    fn sample_requirement(no: u32, client_no: u32) -> Requirement {
        Requirement {
            requirement_no: no,
            client_no,
            s_date: "2025-12-10".into(),
            s_time: "09:00".into(),
            duration: 60,
            comments: Some("test".into()),
        }
    }

    fn is_constraint(err: &Error) -> bool {
        matches!(
            err,
            Error::Storage(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }

    #[test]
    fn test_client_insert() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();
        store.insert_client(&sample_client(2)).unwrap();
        assert_eq!(store.count_rows("CLIENT").unwrap(), 2);
    }

    #[test]
    fn test_duplicate_primary_key_fails() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();

        let err = store.insert_client(&sample_client(1)).unwrap_err();
        assert!(is_constraint(&err));
    }

    #[test]
    fn test_requirement_needs_existing_client() {
        let store = SqliteStore::open_in_memory().unwrap();

        let err = store.insert_requirement(&sample_requirement(1, 99)).unwrap_err();
        assert!(is_constraint(&err));

        store.insert_client(&sample_client(99)).unwrap();
        store.insert_requirement(&sample_requirement(1, 99)).unwrap();
        assert_eq!(store.count_rows("REQUIREMENT").unwrap(), 1);
    }

    #[test]
    fn test_requirement_rejects_bad_values() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();

        let mut zero = sample_requirement(1, 1);
        zero.duration = 0;
        assert!(is_constraint(&store.insert_requirement(&zero).unwrap_err()));

        let mut bad_date = sample_requirement(2, 1);
        bad_date.s_date = "10/12/2025".into();
        assert!(is_constraint(&store.insert_requirement(&bad_date).unwrap_err()));

        let mut bad_time = sample_requirement(3, 1);
        bad_time.s_time = "9am".into();
        assert!(is_constraint(&store.insert_requirement(&bad_time).unwrap_err()));
    }

    #[test]
    fn test_link_constraints() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();
        store.insert_requirement(&sample_requirement(1, 1)).unwrap();
        store
            .insert_equipment(&Equipment {
                equipment_no: 1,
                description: "Mop".into(),
                usage: "Floors".into(),
                cost: 15.0,
            })
            .unwrap();

        let zero_qty = Requires { requirement_no: 1, equipment_no: 1, quantity: 0 };
        assert!(is_constraint(&store.insert_requires(&zero_qty).unwrap_err()));

        let missing_employee = AssignedTo { requirement_no: 1, employee_no: 42 };
        assert!(is_constraint(&store.insert_assignment(&missing_employee).unwrap_err()));

        store
            .insert_requires(&Requires { requirement_no: 1, equipment_no: 1, quantity: 2 })
            .unwrap();
        assert_eq!(store.count_rows("REQUIRES").unwrap(), 1);
    }

    #[test]
    fn test_negative_cost_and_salary_fail() {
        let store = SqliteStore::open_in_memory().unwrap();
        let equipment = Equipment {
            equipment_no: 1,
            description: "Mop".into(),
            usage: "Floors".into(),
            cost: -1.0,
        };
        assert!(is_constraint(&store.insert_equipment(&equipment).unwrap_err()));

        let employee = Employee {
            employee_no: 1,
            f_name: "A".into(),
            l_name: "B".into(),
            address: "C".into(),
            salary: -5.0,
            telephone_no: "D".into(),
        };
        assert!(is_constraint(&store.insert_employee(&employee).unwrap_err()));
    }

    #[test]
    fn test_reset_empties_tables() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();
        store.insert_requirement(&sample_requirement(1, 1)).unwrap();

        store.reset().unwrap();
        let stats = store.stats().unwrap();
        assert!(stats.rows().iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_count_rows_rejects_unknown_table() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(store.count_rows("symbols"), Err(Error::Integrity(_))));
    }

    #[test]
    fn test_integrity_clean_and_dirty() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_client(&sample_client(1)).unwrap();
        store.insert_requirement(&sample_requirement(1, 1)).unwrap();
        assert!(store.check_integrity().unwrap().is_empty());

        store.connection().pragma_update(None, "foreign_keys", false).unwrap();
        store.insert_requirement(&sample_requirement(2, 77)).unwrap();

        let violations = store.check_integrity().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].table, "REQUIREMENT");
        assert_eq!(violations[0].parent, "CLIENT");
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermaids.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert_client(&sample_client(3)).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count_rows("CLIENT").unwrap(), 1);
    }
}
