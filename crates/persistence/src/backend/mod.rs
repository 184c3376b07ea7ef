// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations Diesel has no portable DSL for.
//!
//! Entity reads and writes live in `queries/` and `mutations/`; anything
//! that depends on `SQLite` behaviour (row ids, PRAGMAs, `RETURNING` on the
//! employee number sequence) goes through [`PersistenceBackend`].

pub mod sqlite;

use diesel::{Connection, SqliteConnection};

use crate::error::PersistenceError;

pub use sqlite::{OpenMode, open_database};

/// Backend hooks used by the mutation layer.
pub trait PersistenceBackend: Connection {
    /// Row id of the most recent insert on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Checks that foreign keys are enforced on this connection.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` if they
    /// are not.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Takes the next employee number from the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence row is missing or the update fails.
    fn next_employee_number(&mut self) -> Result<i64, PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn next_employee_number(&mut self) -> Result<i64, PersistenceError> {
        sqlite::next_employee_number(self)
    }
}
