// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate and application writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{Application, ApplicationStatus, Candidate, NewApplication, NewCandidate};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{applications, candidates};
use crate::error::PersistenceError;
use crate::rows::{ApplicationValues, CandidateValues};

/// Inserts a new candidate and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_candidate(
    conn: &mut SqliteConnection,
    candidate: &NewCandidate,
) -> Result<i64, PersistenceError> {
    let values: CandidateValues = CandidateValues::for_insert(candidate)?;
    diesel::insert_into(candidates::table)
        .values(&values)
        .execute(conn)?;
    let candidate_id: i64 = conn.get_last_insert_rowid()?;
    debug!(candidate_id, "Inserted candidate");
    Ok(candidate_id)
}

/// Writes `candidate` back if the stored version still matches.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the row changed since it
/// was read.
pub fn update_candidate(
    conn: &mut SqliteConnection,
    candidate: &Candidate,
) -> Result<(), PersistenceError> {
    let values: CandidateValues = CandidateValues::for_update(candidate)?;
    let updated: usize = diesel::update(
        candidates::table
            .filter(candidates::candidate_id.eq(candidate.candidate_id))
            .filter(candidates::version.eq(candidate.version)),
    )
    .set(&values)
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaleVersion {
            entity: "candidate",
            id: candidate.candidate_id,
            expected_version: candidate.version,
        });
    }

    debug!(
        candidate_id = candidate.candidate_id,
        status = candidate.status.as_str(),
        "Updated candidate"
    );
    Ok(())
}

/// Inserts a new application and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_application(
    conn: &mut SqliteConnection,
    application: &NewApplication,
) -> Result<i64, PersistenceError> {
    let values: ApplicationValues = ApplicationValues::for_insert(application)?;
    diesel::insert_into(applications::table)
        .values(&values)
        .execute(conn)?;
    let application_id: i64 = conn.get_last_insert_rowid()?;
    debug!(
        application_id,
        candidate_id = application.candidate_id,
        "Inserted application"
    );
    Ok(application_id)
}

/// Writes `application` back if it is still pending at the version read.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the row changed since it
/// was read.
pub fn update_application(
    conn: &mut SqliteConnection,
    application: &Application,
) -> Result<(), PersistenceError> {
    let values: ApplicationValues = ApplicationValues::for_update(application)?;
    let updated: usize = diesel::update(
        applications::table
            .filter(applications::application_id.eq(application.application_id))
            .filter(applications::version.eq(application.version))
            .filter(applications::status.eq(ApplicationStatus::Pending.as_str())),
    )
    .set(&values)
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaleVersion {
            entity: "application",
            id: application.application_id,
            expected_version: application.version,
        });
    }

    debug!(
        application_id = application.application_id,
        status = application.status.as_str(),
        "Recorded application result"
    );
    Ok(())
}
