use crate::OutputMode;
use std::path::{Path, PathBuf};
use supermaids::config::{self, SupermaidsConfig};
use supermaids::query::{QueryRunner, Transaction, TransactionResult};
use supermaids::storage::SqliteStore;
use supermaids::ui::{self, Icons};
use supermaids::seed;
use supermaids::Error;

/// Open the database, creating its directory if needed.
///
/// Every failure is reported as `Error::Connection` so `main` can single it
/// out: message on stdout, exit status 1.
pub fn connect(database: &Path) -> supermaids::Result<SqliteStore> {
    let opened = config::ensure_db_dir(database).and_then(|_| SqliteStore::open(database));
    match opened {
        Ok(store) => {
            tracing::info!("Connected to {}", database.display());
            Ok(store)
        }
        Err(e) => Err(Error::Connection {
            path: database.display().to_string(),
            source: Box::new(e),
        }),
    }
}

fn emit_json(results: &[TransactionResult]) -> anyhow::Result<()> {
    let data: Vec<_> = results
        .iter()
        .map(|r| {
            let t = r.transaction();
            serde_json::json!({
                "transaction": t.number(),
                "title": t.title(),
                "rows": r,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn print_result(result: &TransactionResult) {
    ui::section(&result.transaction().to_string());
    println!("{}", ui::render_result(result));
}

fn load(store: &mut SqliteStore, reset: bool) -> anyhow::Result<()> {
    if reset {
        store.reset()?;
    }
    seed::load(store)?;
    Ok(())
}

pub fn run_all(database: &Path, reset: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::header("SuperMaids Cleaning Company Database");
        ui::status(Icons::DATABASE, "Database", &database.display().to_string());
    }

    let mut store = connect(database)?;
    if output_mode.is_human() {
        ui::success("Successfully connected to database");
        println!();
    }

    load(&mut store, reset)?;

    let results = QueryRunner::new(&store).run_all()?;

    if output_mode.is_human() {
        ui::banner("SUPERMAIDS TRANSACTIONS");
        for result in &results {
            print_result(result);
        }
    } else {
        emit_json(&results)?;
    }

    drop(store);
    tracing::debug!("Connection closed");

    if output_mode.is_human() {
        println!();
        ui::banner("Database connection closed successfully");
    }
    Ok(())
}

pub fn run_load(database: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut store = connect(database)?;
    load(&mut store, true)?;
    let stats = store.stats()?;

    if output_mode.is_human() {
        ui::success(&format!("Sample data loaded into {}", database.display()));
        println!("{}", ui::stats_table(&stats));
    } else {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

pub fn run_query(database: &Path, number: u8, output_mode: OutputMode) -> anyhow::Result<()> {
    let transaction = Transaction::try_from(number)?;
    let store = connect(database)?;

    if store.stats()?.requirements == 0 {
        ui::warn("No requirements found - run `supermaids load` first");
    }

    let result = QueryRunner::new(&store).run(transaction)?;
    if output_mode.is_human() {
        print_result(&result);
    } else {
        emit_json(std::slice::from_ref(&result))?;
    }
    Ok(())
}

pub fn run_stats(database: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let store = connect(database)?;
    let stats = store.stats()?;
    let violations = store.check_integrity()?;

    if output_mode.is_human() {
        println!("{} SuperMaids Statistics ({})", Icons::STATS, database.display());
        println!("{}", ui::stats_table(&stats));
        if violations.is_empty() {
            ui::success("Referential integrity OK");
        } else {
            ui::error(&format!("{} foreign key violation(s)", violations.len()));
            println!("{}", ui::violations_table(&violations));
        }
    } else {
        let data = serde_json::json!({
            "stats": stats,
            "violations": violations,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    if !violations.is_empty() {
        anyhow::bail!(supermaids::Error::Integrity(format!(
            "{} foreign key violation(s)",
            violations.len()
        )));
    }
    Ok(())
}

pub fn run_init(path: &Path, database: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let settings = SupermaidsConfig {
        database: Some(
            database
                .unwrap_or_else(config::default_database_path)
                .display()
                .to_string(),
        ),
        reset: Some(true),
    };
    config::write_config(path, &settings, force)?;
    ui::success(&format!("Wrote config to {}", path.display()));
    Ok(())
}
