//! Migrate command - Schema script execution.

use sea_orm_migration::MigrationTrait;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seeds::bootstrap;
use crate::infra::db::SqlFile;
use crate::infra::{Database, Direction, ScriptRunner, StepMode};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    match args.action {
        MigrateAction::Run { transactional } => {
            tracing::info!("Running bootstrap scripts...");
            let executed = run_scripts(&config, Direction::Apply, step_mode(transactional)).await?;
            tracing::info!(executed, "Migrations completed successfully");
        }
        MigrateAction::RunSpecific { path } => {
            // Checked before connecting
            let path = path.ok_or_else(|| {
                AppError::usage("calmtunes migrate run-specific <path-to-sql-file>")
            })?;
            let script = SqlFile::new(path);
            tracing::info!(file = %script.path().display(), "Running SQL file...");

            let scripts: Vec<Box<dyn MigrationTrait>> = vec![Box::new(script)];
            Database::scoped(&config.database, |db| {
                Box::pin(async move { ScriptRunner::new(db).run(&scripts).await })
            })
            .await?;
            tracing::info!("SQL file executed successfully");
        }
        MigrateAction::Revert => {
            tracing::warn!("Reverting bootstrap scripts...");
            let executed = run_scripts(&config, Direction::Revert, StepMode::Direct).await?;
            tracing::info!(executed, "Revert completed successfully");
        }
    }

    Ok(())
}

pub(crate) fn step_mode(transactional: bool) -> StepMode {
    if transactional {
        StepMode::Transactional
    } else {
        StepMode::Direct
    }
}

async fn run_scripts(config: &Config, direction: Direction, mode: StepMode) -> AppResult<usize> {
    Database::scoped(&config.database, |db| {
        Box::pin(async move {
            ScriptRunner::new(db)
                .direction(direction)
                .mode(mode)
                .run(&bootstrap())
                .await
        })
    })
    .await
}
