// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional persistence of lifecycle transition results.
//!
//! Each function stores one result produced by the core crate: entity
//! writes first, then the audit events, all inside a single
//! `BEGIN IMMEDIATE` transaction. Any failure rolls the whole transition
//! back. The stored entities are read back before the transaction commits
//! and returned to the caller.

use diesel::SqliteConnection;
use haken::{
    ApplicationResult, ApprovalResult, CandidateResult, MaterializationResult, NoticeCreation,
    NoticeResult, PresentationResult, RegistrationResult, TerminationResult,
};
use haken_audit::EntityType;
use haken_domain::{Application, Candidate, Employee, JoiningNotice, JoiningNoticeStatus};
use time::OffsetDateTime;
use tracing::info;

use crate::error::PersistenceError;
use crate::mutations::audit::{CreatedIds, persist_audit_events};
use crate::mutations::candidates::{
    insert_application, insert_candidate, update_application, update_candidate,
};
use crate::mutations::employees::{insert_employee, update_terminated_employee};
use crate::mutations::joining_notices::{insert_joining_notice, update_joining_notice};
use crate::queries::candidates::{load_application, load_candidate};
use crate::queries::employees::{find_employee_id_for_notice, load_employee};
use crate::queries::joining_notices::load_joining_notice;

/// A stored presentation: the new application and the presented candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedPresentation {
    pub application: Application,
    pub candidate: Candidate,
}

/// A stored application result and the candidate it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedApplicationResult {
    pub application: Application,
    pub candidate: Candidate,
}

/// A stored joining notice creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedNoticeCreation {
    pub notice: JoiningNotice,
    pub candidate: Candidate,
}

/// A stored approval: the approved notice, the employee it produced and
/// the hired candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedApproval {
    pub notice: JoiningNotice,
    pub employee: Employee,
    pub candidate: Candidate,
}

/// Persists a candidate registration.
///
/// # Errors
///
/// Returns an error if any write fails; nothing is stored in that case.
pub fn persist_registration(
    conn: &mut SqliteConnection,
    result: &RegistrationResult,
) -> Result<Candidate, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let candidate_id: i64 = insert_candidate(conn, &result.new_candidate)?;
        let mut created: CreatedIds = CreatedIds::new();
        created.push(EntityType::Candidate, candidate_id);
        persist_audit_events(conn, &result.audit_events, &created)?;

        info!(candidate_id, "Registered candidate");
        load_candidate(conn, candidate_id)
    })
}

/// Persists a candidate profile update.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the candidate changed since
/// it was read, or another error if a write fails.
pub fn persist_candidate_update(
    conn: &mut SqliteConnection,
    result: &CandidateResult,
) -> Result<Candidate, PersistenceError> {
    conn.immediate_transaction(|conn| {
        update_candidate(conn, &result.candidate)?;
        persist_audit_events(conn, &result.audit_events, &CreatedIds::new())?;

        info!(
            candidate_id = result.candidate.candidate_id,
            "Updated candidate"
        );
        load_candidate(conn, result.candidate.candidate_id)
    })
}

/// Persists a presentation to a client company.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the candidate changed since
/// it was read, or another error if a write fails.
pub fn persist_presentation(
    conn: &mut SqliteConnection,
    result: &PresentationResult,
) -> Result<PersistedPresentation, PersistenceError> {
    conn.immediate_transaction(|conn| {
        update_candidate(conn, &result.candidate)?;
        let application_id: i64 = insert_application(conn, &result.new_application)?;
        let mut created: CreatedIds = CreatedIds::new();
        created.push(EntityType::Application, application_id);
        persist_audit_events(conn, &result.audit_events, &created)?;

        info!(
            application_id,
            candidate_id = result.candidate.candidate_id,
            "Presented candidate"
        );
        Ok(PersistedPresentation {
            application: load_application(conn, application_id)?,
            candidate: load_candidate(conn, result.candidate.candidate_id)?,
        })
    })
}

/// Persists an application result and, when it moved, the candidate.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if either entity changed since
/// it was read, or another error if a write fails.
pub fn persist_application_result(
    conn: &mut SqliteConnection,
    result: &ApplicationResult,
) -> Result<PersistedApplicationResult, PersistenceError> {
    conn.immediate_transaction(|conn| {
        update_application(conn, &result.application)?;
        if let Some(candidate) = &result.candidate {
            update_candidate(conn, candidate)?;
        }
        persist_audit_events(conn, &result.audit_events, &CreatedIds::new())?;

        info!(
            application_id = result.application.application_id,
            status = result.application.status.as_str(),
            candidate_moved = result.candidate.is_some(),
            "Recorded application result"
        );
        Ok(PersistedApplicationResult {
            application: load_application(conn, result.application.application_id)?,
            candidate: load_candidate(conn, result.application.candidate_id)?,
        })
    })
}

/// Persists a new draft joining notice and, when it moved, the candidate.
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if the candidate already has an
/// open notice, `PersistenceError::StaleVersion` if the candidate changed
/// since it was read, or another error if a write fails.
pub fn persist_notice_creation(
    conn: &mut SqliteConnection,
    result: &NoticeCreation,
) -> Result<PersistedNoticeCreation, PersistenceError> {
    conn.immediate_transaction(|conn| {
        if let Some(candidate) = &result.candidate {
            update_candidate(conn, candidate)?;
        }
        let joining_notice_id: i64 = insert_joining_notice(conn, &result.new_notice)?;
        let mut created: CreatedIds = CreatedIds::new();
        created.push(EntityType::JoiningNotice, joining_notice_id);
        persist_audit_events(conn, &result.audit_events, &created)?;

        info!(
            joining_notice_id,
            candidate_id = result.new_notice.candidate_id,
            "Created joining notice"
        );
        Ok(PersistedNoticeCreation {
            notice: load_joining_notice(conn, joining_notice_id)?,
            candidate: load_candidate(conn, result.new_notice.candidate_id)?,
        })
    })
}

/// Persists a draft edit, a submission or a rejection.
///
/// `from` is the status the notice had when it was read.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the notice changed since it
/// was read, or another error if a write fails.
pub fn persist_notice_update(
    conn: &mut SqliteConnection,
    result: &NoticeResult,
    from: JoiningNoticeStatus,
) -> Result<JoiningNotice, PersistenceError> {
    conn.immediate_transaction(|conn| {
        update_joining_notice(conn, &result.notice, from)?;
        persist_audit_events(conn, &result.audit_events, &CreatedIds::new())?;

        info!(
            joining_notice_id = result.notice.joining_notice_id,
            from = from.as_str(),
            to = result.notice.status.as_str(),
            "Persisted joining notice"
        );
        load_joining_notice(conn, result.notice.joining_notice_id)
    })
}

/// Persists an approval together with the employee it materializes.
///
/// The notice leaves `pending`, the employee number is drawn, the
/// employee and its assignment are inserted, the candidate becomes hired
/// and the audit events are written, all or nothing.
///
/// # Errors
///
/// Returns:
/// - `PersistenceError::StaleVersion` if the notice is no longer pending at
///   the version read (a concurrent approval won), or the candidate changed
/// - `PersistenceError::Conflict` if an employee already exists for the
///   notice
/// - Another error if a write fails
pub fn persist_approval(
    conn: &mut SqliteConnection,
    result: &ApprovalResult,
) -> Result<PersistedApproval, PersistenceError> {
    let joining_notice_id: i64 = result.notice.joining_notice_id;
    let approved_at: OffsetDateTime = result.notice.approved_at.unwrap_or(result.notice.updated_at);

    conn.immediate_transaction(|conn| {
        update_joining_notice(conn, &result.notice, JoiningNoticeStatus::Pending)?;

        if let Some(employee_id) = find_employee_id_for_notice(conn, joining_notice_id)? {
            return Err(PersistenceError::Conflict(format!(
                "joining notice {joining_notice_id} already produced employee {employee_id}"
            )));
        }

        let (employee_id, employee_number) =
            insert_employee(conn, &result.new_employee, approved_at)?;
        update_candidate(conn, &result.candidate)?;

        let mut created: CreatedIds = CreatedIds::new();
        created.push(EntityType::Employee, employee_id);
        persist_audit_events(conn, &result.audit_events, &created)?;

        info!(
            joining_notice_id,
            employee_id, employee_number, "Approved joining notice"
        );
        Ok(PersistedApproval {
            notice: load_joining_notice(conn, joining_notice_id)?,
            employee: load_employee(conn, employee_id)?,
            candidate: load_candidate(conn, result.candidate.candidate_id)?,
        })
    })
}

/// Persists a standalone materialization of an approved notice.
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if an employee already exists for
/// the notice, or another error if a write fails.
pub fn persist_materialization(
    conn: &mut SqliteConnection,
    result: &MaterializationResult,
    recorded_at: OffsetDateTime,
) -> Result<Employee, PersistenceError> {
    let joining_notice_id: i64 = result.new_employee.joining_notice_id;

    conn.immediate_transaction(|conn| {
        if let Some(employee_id) = find_employee_id_for_notice(conn, joining_notice_id)? {
            return Err(PersistenceError::Conflict(format!(
                "joining notice {joining_notice_id} already produced employee {employee_id}"
            )));
        }

        let (employee_id, employee_number) =
            insert_employee(conn, &result.new_employee, recorded_at)?;
        let mut created: CreatedIds = CreatedIds::new();
        created.push(EntityType::Employee, employee_id);
        persist_audit_events(conn, &result.audit_events, &created)?;

        info!(
            joining_notice_id,
            employee_id, employee_number, "Materialized employee"
        );
        load_employee(conn, employee_id)
    })
}

/// Persists a termination.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the employee changed since
/// it was read, or another error if a write fails.
pub fn persist_termination(
    conn: &mut SqliteConnection,
    result: &TerminationResult,
) -> Result<Employee, PersistenceError> {
    conn.immediate_transaction(|conn| {
        update_terminated_employee(conn, &result.employee)?;
        persist_audit_events(conn, &result.audit_events, &CreatedIds::new())?;

        info!(
            employee_id = result.employee.employee_id,
            "Terminated employee"
        );
        load_employee(conn, result.employee.employee_id)
    })
}
