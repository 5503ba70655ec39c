//! Ordered script execution.
//!
//! The runner walks a caller-supplied list of scripts one at a time and
//! stops at the first failure. Nothing is recorded in the database about
//! which scripts ran and earlier scripts are never rolled back, so a later
//! invocation starts again from the first script.

use sea_orm::{DatabaseTransaction, TransactionTrait};
use sea_orm_migration::{MigrationName, MigrationTrait, SchemaManager};

use super::Database;
use crate::errors::{AppError, AppResult};

/// Which half of each script to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `up`, in list order
    #[default]
    Apply,
    /// `down`, in reverse list order
    Revert,
}

/// How statements of a single script reach the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Every statement autocommits
    #[default]
    Direct,
    /// Each script runs inside its own transaction
    Transactional,
}

/// Runner progress. Positions are 1-based in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Running(usize),
    Succeeded,
    Failed(usize),
}

/// Executes scripts sequentially against one connection.
pub struct ScriptRunner<'a> {
    db: &'a Database,
    direction: Direction,
    mode: StepMode,
    state: RunState,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            direction: Direction::Apply,
            mode: StepMode::Direct,
            state: RunState::Pending,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run every script, halting on the first error.
    ///
    /// Returns the number of scripts executed.
    ///
    /// # Errors
    /// `AppError::Statement` naming the script that failed. Scripts before
    /// it stay applied; scripts after it are never started.
    pub async fn run(&mut self, scripts: &[Box<dyn MigrationTrait>]) -> AppResult<usize> {
        let ordered: Vec<&dyn MigrationTrait> = match self.direction {
            Direction::Apply => scripts.iter().map(|s| s.as_ref()).collect(),
            Direction::Revert => scripts.iter().rev().map(|s| s.as_ref()).collect(),
        };
        let total = ordered.len();

        for (index, script) in ordered.into_iter().enumerate() {
            let position = index + 1;
            self.state = RunState::Running(position);
            tracing::debug!(
                script = script.name(),
                position,
                total,
                direction = ?self.direction,
                "Executing script"
            );

            if let Err(e) = self.step(script).await {
                self.state = RunState::Failed(position);
                tracing::error!(script = script.name(), position, "Script failed: {}", e);
                return Err(AppError::statement(script.name(), e));
            }

            match self.direction {
                Direction::Apply => tracing::info!("Applied {}", script.name()),
                Direction::Revert => tracing::info!("Reverted {}", script.name()),
            }
        }

        self.state = RunState::Succeeded;
        Ok(total)
    }

    async fn step(&self, script: &dyn MigrationTrait) -> Result<(), sea_orm::DbErr> {
        match self.mode {
            StepMode::Direct => {
                let manager = SchemaManager::new(self.db.connection());
                self.execute(script, &manager).await
            }
            StepMode::Transactional => {
                let txn = self.db.connection().begin().await?;
                match self.execute_in(script, &txn).await {
                    Ok(()) => txn.commit().await,
                    Err(e) => {
                        if let Err(rollback_err) = txn.rollback().await {
                            tracing::error!("Transaction rollback failed: {}", rollback_err);
                        }
                        Err(e)
                    }
                }
            }
        }
    }

    async fn execute_in(
        &self,
        script: &dyn MigrationTrait,
        txn: &DatabaseTransaction,
    ) -> Result<(), sea_orm::DbErr> {
        let manager = SchemaManager::new(txn);
        self.execute(script, &manager).await
    }

    async fn execute(
        &self,
        script: &dyn MigrationTrait,
        manager: &SchemaManager<'_>,
    ) -> Result<(), sea_orm::DbErr> {
        match self.direction {
            Direction::Apply => script.up(manager).await,
            Direction::Revert => script.down(manager).await,
        }
    }
}
