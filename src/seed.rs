//! Sample dataset
//!
//! Five rows per table, inserted in dependency order inside a single
//! transaction. Any constraint failure rolls the load back and is returned
//! to the caller.

use crate::Result;
use crate::model::{AssignedTo, Client, Employee, Equipment, Requirement, Requires};
use crate::storage::SqliteStore;

/// The full sample dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    pub clients: Vec<Client>,
    pub employees: Vec<Employee>,
    pub equipment: Vec<Equipment>,
    pub requirements: Vec<Requirement>,
    pub requires: Vec<Requires>,
    pub assignments: Vec<AssignedTo>,
}

fn client(no: u32, f_name: &str, l_name: &str, address: &str, phone: &str) -> Client {
    Client {
        client_no: no,
        f_name: f_name.to_string(),
        l_name: l_name.to_string(),
        address: address.to_string(),
        telephone_no: phone.to_string(),
    }
}

fn employee(no: u32, f_name: &str, l_name: &str, address: &str, salary: f64, phone: &str) -> Employee {
    Employee {
        employee_no: no,
        f_name: f_name.to_string(),
        l_name: l_name.to_string(),
        address: address.to_string(),
        salary,
        telephone_no: phone.to_string(),
    }
}

fn equipment(no: u32, description: &str, usage: &str, cost: f64) -> Equipment {
    Equipment {
        equipment_no: no,
        description: description.to_string(),
        usage: usage.to_string(),
        cost,
    }
}

fn requirement(no: u32, client_no: u32, date: &str, time: &str, duration: u32, comments: &str) -> Requirement {
    Requirement {
        requirement_no: no,
        client_no,
        s_date: date.to_string(),
        s_time: time.to_string(),
        duration,
        comments: Some(comments.to_string()),
    }
}

/// Build the fixed sample dataset
pub fn dataset() -> Dataset {
    Dataset {
        clients: vec![
            client(1, "John", "Davis", "12 Oak St, Miami, FL", "305-555-0101"),
            client(2, "Maria", "Garcia", "48 Palm Ave, Coral Gables, FL", "305-555-0102"),
            client(3, "Robert", "Wilson", "901 Bay Rd, Miami Beach, FL", "305-555-0103"),
            client(4, "Linda", "Martinez", "77 Brickell Ave, Miami, FL", "305-555-0104"),
            client(5, "James", "Anderson", "3 Cypress Ln, Doral, FL", "305-555-0105"),
        ],
        employees: vec![
            employee(1, "Sarah", "Johnson", "210 Coral Way, Miami, FL", 42000.00, "305-555-0201"),
            employee(2, "Mike", "Brown", "15 Flagler St, Miami, FL", 38500.00, "305-555-0202"),
            employee(3, "Emily", "Clark", "600 Biscayne Blvd, Miami, FL", 40250.00, "305-555-0203"),
            employee(4, "David", "Lee", "88 Sunset Dr, South Miami, FL", 36000.00, "305-555-0204"),
            employee(5, "Jessica", "Taylor", "5 Ponce de Leon Blvd, Coral Gables, FL", 44750.00, "305-555-0205"),
        ],
        equipment: vec![
            equipment(1, "Industrial Floor Cleaner", "Hard floor scrubbing", 1250.00),
            equipment(2, "Vacuum", "Carpet and rug cleaning", 320.00),
            equipment(3, "Window Squeegee Kit", "Interior and exterior glass", 85.50),
            equipment(4, "Steam Cleaner", "Upholstery and tile sanitising", 540.00),
            equipment(5, "Pressure Washer", "Patios, driveways and exterior walls", 699.99),
        ],
        requirements: vec![
            requirement(1, 4, "2025-12-10", "09:00", 120, "Deep clean of office lobby"),
            requirement(2, 4, "2025-12-17", "09:00", 90, "Weekly office clean"),
            requirement(3, 1, "2025-12-11", "13:30", 60, "Apartment move-out clean"),
            requirement(4, 2, "2025-12-12", "08:00", 180, "Restaurant kitchen clean"),
            requirement(5, 3, "2025-12-15", "10:00", 240, "Exterior wash before holiday party"),
        ],
        requires: vec![
            Requires { requirement_no: 1, equipment_no: 1, quantity: 3 },
            Requires { requirement_no: 1, equipment_no: 2, quantity: 2 },
            Requires { requirement_no: 2, equipment_no: 2, quantity: 1 },
            Requires { requirement_no: 3, equipment_no: 3, quantity: 2 },
            Requires { requirement_no: 5, equipment_no: 5, quantity: 1 },
        ],
        assignments: vec![
            AssignedTo { requirement_no: 1, employee_no: 1 },
            AssignedTo { requirement_no: 1, employee_no: 2 },
            AssignedTo { requirement_no: 2, employee_no: 3 },
            AssignedTo { requirement_no: 3, employee_no: 4 },
            AssignedTo { requirement_no: 4, employee_no: 5 },
        ],
    }
}

/// Insert the sample dataset into `store`.
///
/// The schema must already exist and be empty.
pub fn load(store: &mut SqliteStore) -> Result<()> {
    load_dataset(store, &dataset())
}

/// Insert `data` atomically: either every row lands or none do.
pub fn load_dataset(store: &mut SqliteStore, data: &Dataset) -> Result<()> {
    store.begin_transaction()?;
    match insert_all(store, data) {
        Ok(()) => {
            store.commit()?;
            tracing::info!(
                "Loaded {} clients, {} employees, {} equipment, {} requirements, {} requires, {} assignments",
                data.clients.len(),
                data.employees.len(),
                data.equipment.len(),
                data.requirements.len(),
                data.requires.len(),
                data.assignments.len()
            );
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Seed load failed, rolling back: {}", e);
            if let Err(rollback_err) = store.rollback() {
                tracing::warn!("Rollback after failed seed load also failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

fn insert_all(store: &SqliteStore, data: &Dataset) -> Result<()> {
    for c in &data.clients {
        store.insert_client(c)?;
    }
    for e in &data.employees {
        store.insert_employee(e)?;
    }
    for e in &data.equipment {
        store.insert_equipment(e)?;
    }
    for r in &data.requirements {
        store.insert_requirement(r)?;
    }
    for r in &data.requires {
        store.insert_requires(r)?;
    }
    for a in &data.assignments {
        store.insert_assignment(a)?;
    }
    Ok(())
}
