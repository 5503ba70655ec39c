//! Script backed by a SQL file on disk.

use std::path::{Path, PathBuf};

use sea_orm::{ConnectionTrait, DbErr};
use sea_orm_migration::{MigrationName, MigrationTrait, SchemaManager};

/// Raw SQL file executed as a single unprepared batch.
///
/// The file is read when the script is applied, not when it is built, so a
/// missing file surfaces as a script failure inside the runner.
#[derive(Debug, Clone)]
pub struct SqlFile {
    name: String,
    path: PathBuf,
}

impl SqlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MigrationName for SqlFile {
    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait::async_trait]
impl MigrationTrait for SqlFile {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DbErr::Custom(format!("cannot read {}: {}", self.path.display(), e)))?;

        if sql.trim().is_empty() {
            tracing::warn!(file = %self.path.display(), "SQL file is empty, nothing to execute");
            return Ok(());
        }

        manager.get_connection().execute_unprepared(&sql).await?;
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Migration(format!("{} has no revert", self.name)))
    }
}
