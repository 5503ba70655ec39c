//! Read-only schema inspection.
//!
//! Reads `information_schema` for the current schema and returns typed
//! reports. Formatting is left to the caller.

use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement};
use serde::Serialize;

use crate::errors::AppResult;

/// One column as declared in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "columns", rename_all = "snake_case")]
pub enum TableStatus {
    Missing,
    /// Columns in ordinal order
    Present(Vec<ColumnInfo>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: String,
    #[serde(flatten)]
    pub status: TableStatus,
}

impl TableReport {
    pub fn exists(&self) -> bool {
        matches!(self.status, TableStatus::Present(_))
    }
}

#[derive(Debug, FromQueryResult)]
struct TablePresence {
    present: bool,
}

#[derive(Debug, FromQueryResult)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
}

impl From<ColumnRow> for ColumnInfo {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.column_name,
            data_type: row.data_type,
            nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
        }
    }
}

pub struct SchemaInspector<'c, C: ConnectionTrait> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> SchemaInspector<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Report on every table, in the order given.
    ///
    /// A missing table is reported as such. The first read error aborts the
    /// remaining checks.
    pub async fn inspect<S: AsRef<str>>(&self, tables: &[S]) -> AppResult<Vec<TableReport>> {
        let mut reports = Vec::with_capacity(tables.len());
        for table in tables {
            reports.push(self.inspect_table(table.as_ref()).await?);
        }
        Ok(reports)
    }

    pub async fn inspect_table(&self, table: &str) -> AppResult<TableReport> {
        let presence = TablePresence::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
            ) AS present"#,
            [table.into()],
        ))
        .one(self.conn)
        .await?;

        if !presence.map(|p| p.present).unwrap_or(false) {
            tracing::debug!(table, "Table not found");
            return Ok(TableReport {
                table: table.to_string(),
                status: TableStatus::Missing,
            });
        }

        let columns = ColumnRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"SELECT column_name::text AS column_name,
                      data_type::text AS data_type,
                      is_nullable::text AS is_nullable
               FROM information_schema.columns
               WHERE table_schema = current_schema() AND table_name = $1
               ORDER BY ordinal_position"#,
            [table.into()],
        ))
        .all(self.conn)
        .await?;

        Ok(TableReport {
            table: table.to_string(),
            status: TableStatus::Present(columns.into_iter().map(ColumnInfo::from).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    use super::*;
    use crate::errors::AppError;

    fn presence(present: bool) -> Vec<BTreeMap<&'static str, Value>> {
        vec![BTreeMap::from([("present", Value::from(present))])]
    }

    fn column(name: &str, data_type: &str, nullable: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("column_name", Value::from(name)),
            ("data_type", Value::from(data_type)),
            ("is_nullable", Value::from(nullable)),
        ])
    }

    #[tokio::test]
    async fn test_present_table_lists_columns_in_order() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([presence(true)])
            .append_query_results([vec![
                column("id", "uuid", "NO"),
                column("email", "character varying", "NO"),
                column("password_hash", "character varying", "YES"),
            ]])
            .into_connection();

        let report = SchemaInspector::new(&connection)
            .inspect_table("users")
            .await
            .unwrap();

        let TableStatus::Present(columns) = report.status else {
            panic!("expected users to be present");
        };
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].name, "id");
        assert!(!columns[1].nullable);
        assert!(columns[2].nullable);
    }

    #[tokio::test]
    async fn test_missing_table_is_reported_not_raised() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([presence(false)])
            .into_connection();

        let reports = SchemaInspector::new(&connection)
            .inspect(&["drawing_sessions"])
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert!(!reports[0].exists());
        assert_eq!(reports[0].status, TableStatus::Missing);
    }

    #[tokio::test]
    async fn test_read_error_aborts_remaining_checks() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("permission denied".into())])
            .into_connection();

        let result = SchemaInspector::new(&connection)
            .inspect(&["users", "mood_entries"])
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(connection.into_transaction_log().len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let missing = TableReport {
            table: "user_contacts".into(),
            status: TableStatus::Missing,
        };
        let present = TableReport {
            table: "users".into(),
            status: TableStatus::Present(vec![ColumnInfo {
                name: "id".into(),
                data_type: "uuid".into(),
                nullable: false,
            }]),
        };

        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!({ "table": "user_contacts", "status": "missing" })
        );
        assert_eq!(
            serde_json::to_value(&present).unwrap(),
            serde_json::json!({
                "table": "users",
                "status": "present",
                "columns": [{ "name": "id", "data_type": "uuid", "nullable": false }]
            })
        );
    }
}
