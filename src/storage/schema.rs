//! Database schema definitions
//!
//! Tables are listed in dependency order: every table appears after the
//! tables its foreign keys reference.

/// SQL to create the CLIENT table
pub const CREATE_CLIENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS CLIENT (
    clientNo INTEGER PRIMARY KEY,
    fName TEXT NOT NULL,
    lName TEXT NOT NULL,
    address TEXT NOT NULL,
    telephoneNo TEXT NOT NULL
)
"#;

/// SQL to create the EMPLOYEE table
pub const CREATE_EMPLOYEE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS EMPLOYEE (
    employeeNo INTEGER PRIMARY KEY,
    fName TEXT NOT NULL,
    lName TEXT NOT NULL,
    address TEXT NOT NULL,
    salary REAL NOT NULL CHECK (salary >= 0),
    telephoneNo TEXT NOT NULL
)
"#;

/// SQL to create the EQUIPMENT table
pub const CREATE_EQUIPMENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS EQUIPMENT (
    equipmentNo INTEGER PRIMARY KEY,
    description TEXT NOT NULL,
    usage TEXT NOT NULL,
    cost REAL NOT NULL CHECK (cost >= 0)
)
"#;

/// SQL to create the REQUIREMENT table
/// sDate is `YYYY-MM-DD`, sTime is `HH:MM`
pub const CREATE_REQUIREMENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS REQUIREMENT (
    requirementNo INTEGER PRIMARY KEY,
    clientNo INTEGER NOT NULL,
    sDate TEXT NOT NULL CHECK (sDate IS date(sDate)),
    sTime TEXT NOT NULL CHECK (sTime IS strftime('%H:%M', sTime)),
    duration INTEGER NOT NULL CHECK (duration > 0),
    comments TEXT,
    FOREIGN KEY (clientNo) REFERENCES CLIENT(clientNo)
)
"#;

/// SQL to create the REQUIRES link table
pub const CREATE_REQUIRES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS REQUIRES (
    requirementNo INTEGER NOT NULL,
    equipmentNo INTEGER NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity > 0),
    PRIMARY KEY (requirementNo, equipmentNo),
    FOREIGN KEY (requirementNo) REFERENCES REQUIREMENT(requirementNo),
    FOREIGN KEY (equipmentNo) REFERENCES EQUIPMENT(equipmentNo)
)
"#;

/// SQL to create the ASSIGNED_TO link table
pub const CREATE_ASSIGNED_TO_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ASSIGNED_TO (
    requirementNo INTEGER NOT NULL,
    employeeNo INTEGER NOT NULL,
    PRIMARY KEY (requirementNo, employeeNo),
    FOREIGN KEY (requirementNo) REFERENCES REQUIREMENT(requirementNo),
    FOREIGN KEY (employeeNo) REFERENCES EMPLOYEE(employeeNo)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_client_lname ON CLIENT(lName)",
    "CREATE INDEX IF NOT EXISTS idx_requirement_client ON REQUIREMENT(clientNo)",
    "CREATE INDEX IF NOT EXISTS idx_requires_equipment ON REQUIRES(equipmentNo)",
    "CREATE INDEX IF NOT EXISTS idx_assigned_employee ON ASSIGNED_TO(employeeNo)",
];

/// Table names in dependency order
pub const TABLES: &[&str] = &[
    "CLIENT",
    "EMPLOYEE",
    "EQUIPMENT",
    "REQUIREMENT",
    "REQUIRES",
    "ASSIGNED_TO",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_CLIENT_TABLE,
        CREATE_EMPLOYEE_TABLE,
        CREATE_EQUIPMENT_TABLE,
        CREATE_REQUIREMENT_TABLE,
        CREATE_REQUIRES_TABLE,
        CREATE_ASSIGNED_TO_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

/// DROP statements, referencing tables first
pub fn drop_statements() -> Vec<String> {
    TABLES
        .iter()
        .rev()
        .map(|table| format!("DROP TABLE IF EXISTS {}", table))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_order_is_reverse_of_create_order() {
        let drops = drop_statements();
        assert_eq!(drops.len(), TABLES.len());
        assert_eq!(drops[0], "DROP TABLE IF EXISTS ASSIGNED_TO");
        assert_eq!(drops[5], "DROP TABLE IF EXISTS CLIENT");
    }

    #[test]
    fn test_create_order_matches_table_list() {
        let stmts = all_schema_statements();
        for (stmt, table) in stmts.iter().zip(TABLES) {
            assert!(stmt.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)));
        }
    }
}
