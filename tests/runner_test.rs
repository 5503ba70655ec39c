//! Integration tests for the script runner over the shipped scripts.

use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

use calmtunes::errors::AppError;
use calmtunes::infra::db::seeds::{bootstrap, setup, teardown, Feature};
use calmtunes::infra::{Database, Direction, RunState, ScriptRunner};

fn accepted(count: usize) -> Vec<MockExecResult> {
    (0..count)
        .map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        })
        .collect()
}

fn has_table(present: bool) -> Vec<BTreeMap<&'static str, Value>> {
    vec![BTreeMap::from([("has_table", Value::from(present))])]
}

#[tokio::test]
async fn test_bootstrap_applies_users_then_profile_image() {
    // users: enum, table, index; profile image: alter, backfill
    let db = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(accepted(5))
            .into_connection(),
    );
    let mut runner = ScriptRunner::new(&db);

    let executed = runner.run(&bootstrap()).await.unwrap();

    assert_eq!(executed, 2);
    assert_eq!(runner.state(), RunState::Succeeded);
    let log = db.into_connection().into_transaction_log();
    assert_eq!(log.len(), 5);
    assert!(format!("{:?}", log[1]).contains("CREATE TABLE IF NOT EXISTS"));
    assert!(format!("{:?}", log[4]).contains("UPDATE"));
}

#[tokio::test]
async fn test_first_statement_failure_stops_everything() {
    let db = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("permission denied for schema public".into())])
            .into_connection(),
    );
    let mut runner = ScriptRunner::new(&db);

    let err = runner.run(&setup(Feature::Contacts)).await.unwrap_err();

    assert_eq!(runner.state(), RunState::Failed(1));
    match err {
        AppError::Statement { script, .. } => {
            assert_eq!(script, "m20240101_000001_create_users_table")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(db.into_connection().into_transaction_log().len(), 1);
}

#[tokio::test]
async fn test_bootstrap_revert_drops_column_before_table() {
    // profile image: drop column; users: drop table, drop enum
    let db = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(accepted(3))
            .into_connection(),
    );
    let mut runner = ScriptRunner::new(&db).direction(Direction::Revert);

    runner.run(&bootstrap()).await.unwrap();

    let log = db.into_connection().into_transaction_log();
    assert!(format!("{:?}", log[0]).contains("DROP COLUMN"));
    assert!(format!("{:?}", log[1]).contains("DROP TABLE IF EXISTS"));
}

#[tokio::test]
async fn test_bootstrap_revert_can_be_repeated() {
    let db = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(accepted(6))
            .into_connection(),
    );

    for _ in 0..2 {
        let mut runner = ScriptRunner::new(&db).direction(Direction::Revert);
        runner.run(&bootstrap()).await.unwrap();
        assert_eq!(runner.state(), RunState::Succeeded);
    }

    let log = db.into_connection().into_transaction_log();
    assert_eq!(log.len(), 6);
    assert!(format!("{:?}", log[3]).contains("DROP COLUMN IF EXISTS"));
}

#[tokio::test]
async fn test_feature_teardown_can_be_repeated() {
    // first pass: table check, delete, drop table; second: table check, drop table
    let db = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([has_table(true), has_table(false)])
            .append_exec_results(accepted(3))
            .into_connection(),
    );

    for _ in 0..2 {
        let mut runner = ScriptRunner::new(&db).direction(Direction::Revert);
        assert_eq!(runner.run(&teardown(Feature::Contacts)).await.unwrap(), 2);
    }

    let rendered = format!("{:?}", db.into_connection().into_transaction_log());
    assert_eq!(rendered.matches(r#"DELETE FROM \"user_contacts\""#).count(), 1);
    assert_eq!(rendered.matches(r#"DROP TABLE IF EXISTS \"user_contacts\""#).count(), 2);
}
