use crate::query::TransactionResult;
use crate::storage::{DbStats, ForeignKeyViolation};
use crate::ui::theme;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ClientRequirementLine {
    #[tabled(rename = "Client Name")]
    client_name: String,
    #[tabled(rename = "Req#")]
    requirement_no: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
}

#[derive(Tabled)]
struct EquipmentLine {
    #[tabled(rename = "Equipment")]
    description: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
}

#[derive(Tabled)]
struct EmployeeLine {
    #[tabled(rename = "Employee Name")]
    name: String,
}

#[derive(Tabled)]
struct ScheduleLine {
    #[tabled(rename = "Req#")]
    requirement_no: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Duration (min)")]
    duration: u32,
}

#[derive(Tabled)]
struct ResourceLine {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

#[derive(Tabled)]
struct MetricLine {
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Rows")]
    rows: usize,
}

#[derive(Tabled)]
struct ViolationLine {
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Row")]
    rowid: String,
    #[tabled(rename = "Missing Parent")]
    parent: String,
}

fn fixed_width<T: Tabled>(rows: Vec<T>) -> String {
    if rows.is_empty() {
        return "(no rows)".to_string();
    }

    Table::new(rows).with(Style::psql()).to_string()
}

/// Render one transaction's rows as a fixed-width table
pub fn render_result(result: &TransactionResult) -> String {
    match result {
        TransactionResult::ClientRequirements(rows) => fixed_width(
            rows.iter()
                .map(|r| ClientRequirementLine {
                    client_name: r.client_name(),
                    requirement_no: r.requirement_no,
                    date: r.s_date.clone(),
                    time: r.s_time.clone(),
                })
                .collect(),
        ),
        TransactionResult::RequirementEquipment(rows) => fixed_width(
            rows.iter()
                .map(|r| EquipmentLine {
                    description: r.description.clone(),
                    quantity: r.quantity,
                })
                .collect(),
        ),
        TransactionResult::RequirementEmployees(rows) => fixed_width(
            rows.iter()
                .map(|r| EmployeeLine {
                    name: r.full_name(),
                })
                .collect(),
        ),
        TransactionResult::ClientSchedule(rows) => fixed_width(
            rows.iter()
                .map(|r| ScheduleLine {
                    requirement_no: r.requirement_no,
                    date: r.s_date.clone(),
                    time: r.s_time.clone(),
                    duration: r.duration,
                })
                .collect(),
        ),
        TransactionResult::RequirementResources(rows) => fixed_width(
            rows.iter()
                .map(|r| ResourceLine {
                    kind: theme().tag(r.kind),
                    name: r.name.clone(),
                    detail: r.detail.clone(),
                })
                .collect(),
        ),
    }
}

pub fn stats_table(stats: &DbStats) -> String {
    fixed_width(
        stats
            .rows()
            .iter()
            .map(|(table, rows)| MetricLine {
                table: table.to_string(),
                rows: *rows,
            })
            .collect(),
    )
}

pub fn violations_table(violations: &[ForeignKeyViolation]) -> String {
    fixed_width(
        violations
            .iter()
            .map(|v| ViolationLine {
                table: v.table.clone(),
                rowid: v.rowid.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                parent: v.parent.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{EquipmentNeedRow, QueryRunner, Transaction};
    use crate::{seed, SqliteStore};

    #[test]
    fn test_render_equipment_table() {
        let result = TransactionResult::RequirementEquipment(vec![
            EquipmentNeedRow { description: "Industrial Floor Cleaner".into(), quantity: 3 },
            EquipmentNeedRow { description: "Vacuum".into(), quantity: 2 },
        ]);
        let table = render_result(&result);
        assert!(table.contains("Equipment"));
        assert!(table.contains("Quantity"));
        assert!(table.contains("Industrial Floor Cleaner"));
        assert!(table.contains("Vacuum"));
    }

    #[test]
    fn test_render_empty_result() {
        let result = TransactionResult::ClientSchedule(Vec::new());
        assert_eq!(render_result(&result), "(no rows)");
    }

    #[test]
    fn test_render_all_seeded_results() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        seed::load(&mut store).unwrap();
        let runner = QueryRunner::new(&store);

        let clients = render_result(&runner.run(Transaction::ClientRequirements).unwrap());
        assert!(clients.contains("Client Name"));
        assert!(clients.contains("Linda Martinez"));

        let resources = render_result(&runner.run(Transaction::RequirementResources).unwrap());
        assert!(resources.contains("EMPLOYEE"));
        assert!(resources.contains("EQUIPMENT"));
        assert!(resources.contains("Sarah"));
    }

    #[test]
    fn test_stats_table_lists_every_table() {
        let store = SqliteStore::open_in_memory().unwrap();
        let table = stats_table(&store.stats().unwrap());
        for name in crate::storage::schema::TABLES {
            assert!(table.contains(name));
        }
    }
}
