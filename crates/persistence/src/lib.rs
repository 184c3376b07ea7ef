// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Haken dispatch lifecycle.
//!
//! This crate stores candidates, applications, joining notices, employees
//! and the audit trail in `SQLite` through Diesel. It persists the results
//! produced by the core crate's transition functions and never decides
//! business rules itself.
//!
//! ## Consistency
//!
//! - Every state-changing write is conditional on the row version (and,
//!   where it matters, the status) that was read. A write that matches no
//!   row fails with [`PersistenceError::StaleVersion`].
//! - Each transition is stored in one `BEGIN IMMEDIATE` transaction
//!   together with its audit events.
//! - Employee numbers come from a single sequence row that is incremented
//!   and read in one statement.
//!
//! ## Testing Philosophy
//!
//! - Tests run against in-memory `SQLite` databases, one per test
//! - Concurrency tests use two connections to a temporary database file
//! - No external infrastructure is required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use haken::{
    ApplicationResult, ApprovalResult, CandidateResult, MaterializationResult, NoticeCreation,
    NoticeResult, PresentationResult, RegistrationResult, TerminationResult,
};
use haken_audit::{AuditEvent, EntityType};
use haken_domain::{
    Application, Candidate, Employee, EmployeeSummary, JoiningNotice, JoiningNoticeStatus,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod rows;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::{
    PersistedApplicationResult, PersistedApproval, PersistedNoticeCreation, PersistedPresentation,
};
pub use queries::{ApplicationFilter, CandidateFilter, EmployeeFilter, JoiningNoticeFilter};

use backend::PersistenceBackend;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own shared-cache database, named from an
    /// atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection =
            backend::open_database(&shared_memory_url, backend::OpenMode::Memory)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// Several adapters may open the same file; writers are serialized by
    /// `SQLite` and wait on each other up to the busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::open_database(path_str, backend::OpenMode::File)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Stores a candidate registration.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn persist_registration(
        &mut self,
        result: &RegistrationResult,
    ) -> Result<Candidate, PersistenceError> {
        mutations::persist_registration(&mut self.conn, result)
    }

    /// Stores a candidate profile update.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` on a concurrent change.
    pub fn persist_candidate_update(
        &mut self,
        result: &CandidateResult,
    ) -> Result<Candidate, PersistenceError> {
        mutations::persist_candidate_update(&mut self.conn, result)
    }

    /// Stores a presentation to a client company.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` on a concurrent change.
    pub fn persist_presentation(
        &mut self,
        result: &PresentationResult,
    ) -> Result<PersistedPresentation, PersistenceError> {
        mutations::persist_presentation(&mut self.conn, result)
    }

    /// Stores an application result.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` on a concurrent change.
    pub fn persist_application_result(
        &mut self,
        result: &ApplicationResult,
    ) -> Result<PersistedApplicationResult, PersistenceError> {
        mutations::persist_application_result(&mut self.conn, result)
    }

    /// Stores a new joining notice.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the candidate already has an
    /// open notice.
    pub fn persist_notice_creation(
        &mut self,
        result: &NoticeCreation,
    ) -> Result<PersistedNoticeCreation, PersistenceError> {
        mutations::persist_notice_creation(&mut self.conn, result)
    }

    /// Stores a draft edit, submission or rejection of a notice that was
    /// read in status `from`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` on a concurrent change.
    pub fn persist_notice_update(
        &mut self,
        result: &NoticeResult,
        from: JoiningNoticeStatus,
    ) -> Result<JoiningNotice, PersistenceError> {
        mutations::persist_notice_update(&mut self.conn, result, from)
    }

    /// Stores an approval and the employee it materializes, atomically.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` if another approval won, or
    /// `PersistenceError::Conflict` if the notice already produced an
    /// employee.
    pub fn persist_approval(
        &mut self,
        result: &ApprovalResult,
    ) -> Result<PersistedApproval, PersistenceError> {
        mutations::persist_approval(&mut self.conn, result)
    }

    /// Stores a standalone materialization.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the notice already produced
    /// an employee.
    pub fn persist_materialization(
        &mut self,
        result: &MaterializationResult,
        recorded_at: OffsetDateTime,
    ) -> Result<Employee, PersistenceError> {
        mutations::persist_materialization(&mut self.conn, result, recorded_at)
    }

    /// Stores a termination.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StaleVersion` on a concurrent change.
    pub fn persist_termination(
        &mut self,
        result: &TerminationResult,
    ) -> Result<Employee, PersistenceError> {
        mutations::persist_termination(&mut self.conn, result)
    }

    // ========================================================================
    // Candidates & Applications
    // ========================================================================

    /// Finds a candidate by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_candidate(
        &mut self,
        candidate_id: i64,
    ) -> Result<Option<Candidate>, PersistenceError> {
        queries::candidates::find_candidate(&mut self.conn, candidate_id)
    }

    /// Lists candidates matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_candidates(
        &mut self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, PersistenceError> {
        queries::candidates::list_candidates(&mut self.conn, filter)
    }

    /// Counts all candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_candidates(&mut self) -> Result<i64, PersistenceError> {
        queries::candidates::count_candidates(&mut self.conn)
    }

    /// Finds an application by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_application(
        &mut self,
        application_id: i64,
    ) -> Result<Option<Application>, PersistenceError> {
        queries::candidates::find_application(&mut self.conn, application_id)
    }

    /// Lists applications matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_applications(
        &mut self,
        filter: ApplicationFilter,
    ) -> Result<Vec<Application>, PersistenceError> {
        queries::candidates::list_applications(&mut self.conn, filter)
    }

    // ========================================================================
    // Joining Notices
    // ========================================================================

    /// Finds a joining notice by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored notice is
    /// inconsistent.
    pub fn find_joining_notice(
        &mut self,
        joining_notice_id: i64,
    ) -> Result<Option<JoiningNotice>, PersistenceError> {
        queries::joining_notices::find_joining_notice(&mut self.conn, joining_notice_id)
    }

    /// Lists joining notices matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_joining_notices(
        &mut self,
        filter: JoiningNoticeFilter,
    ) -> Result<Vec<JoiningNotice>, PersistenceError> {
        queries::joining_notices::list_joining_notices(&mut self.conn, filter)
    }

    /// Returns the id of the candidate's open (draft or pending) notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_open_notice_id(
        &mut self,
        candidate_id: i64,
    ) -> Result<Option<i64>, PersistenceError> {
        queries::joining_notices::find_open_notice_id(&mut self.conn, candidate_id)
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Finds an employee, with its assignment, by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_employee(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::find_employee(&mut self.conn, employee_id)
    }

    /// Returns the id of the employee created from a joining notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_employee_id_for_notice(
        &mut self,
        joining_notice_id: i64,
    ) -> Result<Option<i64>, PersistenceError> {
        queries::employees::find_employee_id_for_notice(&mut self.conn, joining_notice_id)
    }

    /// Lists employees matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(
        &mut self,
        filter: EmployeeFilter,
    ) -> Result<Vec<Employee>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn, filter)
    }

    /// Computes headcount statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_summary(&mut self) -> Result<EmployeeSummary, PersistenceError> {
        queries::employees::employee_summary(&mut self.conn)
    }

    // ========================================================================
    // Audit Events
    // ========================================================================

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be deserialized.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Retrieves the audit timeline of one entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn audit_timeline(
        &mut self,
        entity_type: EntityType,
        entity_id: i64,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::audit_timeline(&mut self.conn, entity_type, entity_id)
    }
}
