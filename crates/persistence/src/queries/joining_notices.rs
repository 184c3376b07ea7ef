// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Joining notice queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{JoiningNotice, JoiningNoticeStatus};

use crate::diesel_schema::joining_notices;
use crate::error::PersistenceError;
use crate::queries::JoiningNoticeFilter;
use crate::rows::JoiningNoticeRow;

/// Finds a joining notice by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored notice is
/// inconsistent.
pub fn find_joining_notice(
    conn: &mut SqliteConnection,
    joining_notice_id: i64,
) -> Result<Option<JoiningNotice>, PersistenceError> {
    joining_notices::table
        .find(joining_notice_id)
        .select(JoiningNoticeRow::as_select())
        .first::<JoiningNoticeRow>(conn)
        .optional()?
        .map(JoiningNoticeRow::into_notice)
        .transpose()
}

/// Loads a joining notice that must exist.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if there is no such notice.
pub fn load_joining_notice(
    conn: &mut SqliteConnection,
    joining_notice_id: i64,
) -> Result<JoiningNotice, PersistenceError> {
    find_joining_notice(conn, joining_notice_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("joining notice {joining_notice_id}")))
}

/// Lists joining notices matching the filter, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored notice is inconsistent.
pub fn list_joining_notices(
    conn: &mut SqliteConnection,
    filter: JoiningNoticeFilter,
) -> Result<Vec<JoiningNotice>, PersistenceError> {
    let mut query = joining_notices::table
        .order(joining_notices::joining_notice_id.asc())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(joining_notices::status.eq(status.as_str()));
    }
    if let Some(candidate_id) = filter.candidate_id {
        query = query.filter(joining_notices::candidate_id.eq(candidate_id));
    }

    query
        .select(JoiningNoticeRow::as_select())
        .load::<JoiningNoticeRow>(conn)?
        .into_iter()
        .map(JoiningNoticeRow::into_notice)
        .collect()
}

/// Returns the id of the candidate's draft or pending notice, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_open_notice_id(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    Ok(joining_notices::table
        .filter(joining_notices::candidate_id.eq(candidate_id))
        .filter(joining_notices::status.eq_any([
            JoiningNoticeStatus::Draft.as_str(),
            JoiningNoticeStatus::Pending.as_str(),
        ]))
        .select(joining_notices::joining_notice_id)
        .first::<i64>(conn)
        .optional()?)
}
