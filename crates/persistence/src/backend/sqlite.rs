// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup, migrations and the few raw-SQL helpers.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::diesel_schema::employee_number_sequence;
use crate::error::PersistenceError;

/// Embedded schema migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a writer waits for a competing write transaction, in
/// milliseconds.
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

/// How the database is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Shared-cache in-memory database. WAL is not available.
    Memory,
    /// File on disk, opened in WAL mode so readers do not block the writer.
    File,
}

impl OpenMode {
    fn pragmas(self) -> Vec<String> {
        let mut pragmas: Vec<String> = vec![
            String::from("PRAGMA foreign_keys = ON"),
            format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"),
        ];
        if self == Self::File {
            pragmas.push(String::from("PRAGMA journal_mode = WAL"));
        }
        pragmas
    }
}

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens the database, applies the connection PRAGMAs and runs pending
/// migrations.
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA, or a migration fails.
pub fn open_database(
    database_url: &str,
    mode: OpenMode,
) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, ?mode, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    for pragma in mode.pragmas() {
        diesel::sql_query(&pragma)
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("{pragma}: {e}")))?;
    }

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    info!(migrations = applied.len(), "Applied pending migrations");

    Ok(conn)
}

pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: ForeignKeysPragma = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    if row.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Increments the sequence row and returns the value it held.
///
/// The increment and the read are one statement, so two writers can never
/// be handed the same number.
pub fn next_employee_number(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let next_value: i64 = diesel::update(
        employee_number_sequence::table.filter(employee_number_sequence::id.eq(1)),
    )
    .set(employee_number_sequence::next_value.eq(employee_number_sequence::next_value + 1))
    .returning(employee_number_sequence::next_value)
    .get_result(conn)?;
    Ok(next_value - 1)
}
