//! Inspect command - Print a schema report.

use crate::cli::args::InspectArgs;
use crate::config::{Config, OWNED_TABLES};
use crate::errors::{AppError, AppResult};
use crate::infra::db::{TableReport, TableStatus};
use crate::infra::{Database, SchemaInspector};

/// Execute the inspect command
pub async fn execute(args: InspectArgs, config: Config) -> AppResult<()> {
    let tables: Vec<String> = if args.tables.is_empty() {
        OWNED_TABLES.iter().map(|t| t.to_string()).collect()
    } else {
        args.tables
    };

    let reports = Database::scoped(&config.database, |db| {
        Box::pin(async move { SchemaInspector::new(db.connection()).inspect(&tables).await })
    })
    .await?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| AppError::internal(format!("Failed to encode report: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render(&reports));
    }

    Ok(())
}

/// Plain-text report, one block per table.
fn render(reports: &[TableReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match &report.status {
            TableStatus::Missing => out.push_str(&format!("{}: missing\n", report.table)),
            TableStatus::Present(columns) => {
                out.push_str(&format!("{}:\n", report.table));
                let width = columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
                for column in columns {
                    let null = if column.nullable { "null" } else { "not null" };
                    out.push_str(&format!(
                        "  {:<width$}  {}  {}\n",
                        column.name,
                        column.data_type,
                        null,
                        width = width
                    ));
                }
            }
        }
    }
    out
}
