//! Domain types - one struct per table
//!
//! - `Client`: a customer of the company
//! - `Employee`: a member of the cleaning staff
//! - `Equipment`: an item of cleaning equipment
//! - `Requirement`: a scheduled cleaning job for a client
//! - `Requires`: equipment (and how many) a requirement needs
//! - `AssignedTo`: an employee working a requirement

use serde::{Deserialize, Serialize};

/// A customer of the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_no: u32,
    pub f_name: String,
    pub l_name: String,
    pub address: String,
    pub telephone_no: String,
}

/// A member of the cleaning staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_no: u32,
    pub f_name: String,
    pub l_name: String,
    pub address: String,
    /// Annual salary, never negative
    pub salary: f64,
    pub telephone_no: String,
}

/// An item of cleaning equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_no: u32,
    pub description: String,
    pub usage: String,
    /// Unit cost, never negative
    pub cost: f64,
}

/// A scheduled cleaning job.
///
/// `s_date` is an ISO-8601 date (`YYYY-MM-DD`) and `s_time` a 24-hour
/// start time (`HH:MM`); both are validated by the schema on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub requirement_no: u32,
    pub client_no: u32,
    pub s_date: String,
    pub s_time: String,
    /// Duration in minutes, strictly positive
    pub duration: u32,
    pub comments: Option<String>,
}

/// Equipment needed by a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requires {
    pub requirement_no: u32,
    pub equipment_no: u32,
    /// Strictly positive
    pub quantity: u32,
}

/// An employee assigned to a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTo {
    pub requirement_no: u32,
    pub employee_no: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_serializes_optional_comments() {
        let req = Requirement {
            requirement_no: 7,
            client_no: 2,
            s_date: "2025-12-10".into(),
            s_time: "09:00".into(),
            duration: 60,
            comments: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["requirement_no"], 7);
        assert!(json["comments"].is_null());
    }
}
