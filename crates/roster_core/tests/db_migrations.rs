use roster_core::db::migrations::{apply_migrations, latest_version};
use roster_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("user_version should be readable")
}

#[test]
fn fresh_database_lands_on_latest_version() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    assert_eq!(user_version(&conn), latest_version());

    // The key-value table exists and is usable.
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('probe', '[]');",
        [],
    )
    .expect("kv_store should accept writes");
}

#[test]
fn reopening_an_up_to_date_database_is_a_no_op() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let db_path = dir.path().join("roster.db");

    {
        let conn = open_db(&db_path).expect("first open should migrate");
        assert_eq!(user_version(&conn), latest_version());
    }

    let conn = open_db(&db_path).expect("second open should succeed");
    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn newer_schema_than_this_binary_is_rejected() {
    let mut conn = Connection::open_in_memory().expect("raw connection should open");
    conn.execute_batch("PRAGMA user_version = 9999;")
        .expect("user_version should be settable");

    let err = apply_migrations(&mut conn).expect_err("future schema must be rejected");
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 9999,
            ..
        }
    ));
}
