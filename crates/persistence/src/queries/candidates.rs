// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate and application queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{Application, Candidate};

use crate::diesel_schema::{applications, candidates};
use crate::error::PersistenceError;
use crate::queries::{ApplicationFilter, CandidateFilter};
use crate::rows::{ApplicationRow, CandidateRow};

/// Finds a candidate by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_candidate(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<Option<Candidate>, PersistenceError> {
    candidates::table
        .find(candidate_id)
        .select(CandidateRow::as_select())
        .first::<CandidateRow>(conn)
        .optional()?
        .map(CandidateRow::into_candidate)
        .transpose()
}

/// Loads a candidate that must exist.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if there is no such candidate.
pub fn load_candidate(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<Candidate, PersistenceError> {
    find_candidate(conn, candidate_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("candidate {candidate_id}")))
}

/// Lists candidates matching the filter, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_candidates(
    conn: &mut SqliteConnection,
    filter: &CandidateFilter,
) -> Result<Vec<Candidate>, PersistenceError> {
    let mut query = candidates::table
        .order(candidates::candidate_id.asc())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(candidates::status.eq(status.as_str()));
    }
    if let Some(name) = filter.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        let pattern: String = format!("%{name}%");
        query = query.filter(
            candidates::full_name
                .like(pattern.clone())
                .or(candidates::name_kana.like(pattern)),
        );
    }

    query
        .select(CandidateRow::as_select())
        .load::<CandidateRow>(conn)?
        .into_iter()
        .map(CandidateRow::into_candidate)
        .collect()
}

/// Counts every candidate ever registered.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_candidates(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(candidates::table.count().get_result::<i64>(conn)?)
}

/// Finds an application by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<Option<Application>, PersistenceError> {
    applications::table
        .find(application_id)
        .select(ApplicationRow::as_select())
        .first::<ApplicationRow>(conn)
        .optional()?
        .map(ApplicationRow::into_application)
        .transpose()
}

/// Loads an application that must exist.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if there is no such application.
pub fn load_application(
    conn: &mut SqliteConnection,
    application_id: i64,
) -> Result<Application, PersistenceError> {
    find_application(conn, application_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("application {application_id}")))
}

/// Lists applications matching the filter, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_applications(
    conn: &mut SqliteConnection,
    filter: ApplicationFilter,
) -> Result<Vec<Application>, PersistenceError> {
    let mut query = applications::table
        .order(applications::application_id.asc())
        .into_boxed();

    if let Some(candidate_id) = filter.candidate_id {
        query = query.filter(applications::candidate_id.eq(candidate_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(applications::status.eq(status.as_str()));
    }

    query
        .select(ApplicationRow::as_select())
        .load::<ApplicationRow>(conn)?
        .into_iter()
        .map(ApplicationRow::into_application)
        .collect()
}
