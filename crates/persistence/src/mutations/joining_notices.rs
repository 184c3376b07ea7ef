// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Joining notice writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{JoiningNotice, JoiningNoticeStatus, NewJoiningNotice};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::joining_notices;
use crate::error::PersistenceError;
use crate::rows::JoiningNoticeValues;

/// Inserts a new draft notice and returns its id.
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if the candidate already has an
/// open notice, or another error if the insert fails.
pub fn insert_joining_notice(
    conn: &mut SqliteConnection,
    notice: &NewJoiningNotice,
) -> Result<i64, PersistenceError> {
    let values: JoiningNoticeValues = JoiningNoticeValues::for_insert(notice)?;
    diesel::insert_into(joining_notices::table)
        .values(&values)
        .execute(conn)?;
    let joining_notice_id: i64 = conn.get_last_insert_rowid()?;
    debug!(
        joining_notice_id,
        candidate_id = notice.candidate_id,
        employment_type = notice.terms.employment_type().as_str(),
        "Inserted joining notice"
    );
    Ok(joining_notice_id)
}

/// Writes `notice` back if the stored row is still in status `from` at the
/// version read.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the row changed since it
/// was read.
pub fn update_joining_notice(
    conn: &mut SqliteConnection,
    notice: &JoiningNotice,
    from: JoiningNoticeStatus,
) -> Result<(), PersistenceError> {
    let values: JoiningNoticeValues = JoiningNoticeValues::for_update(notice)?;
    let updated: usize = diesel::update(
        joining_notices::table
            .filter(joining_notices::joining_notice_id.eq(notice.joining_notice_id))
            .filter(joining_notices::version.eq(notice.version))
            .filter(joining_notices::status.eq(from.as_str())),
    )
    .set(&values)
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaleVersion {
            entity: "joining_notice",
            id: notice.joining_notice_id,
            expected_version: notice.version,
        });
    }

    debug!(
        joining_notice_id = notice.joining_notice_id,
        from = from.as_str(),
        to = notice.status.as_str(),
        "Updated joining notice"
    );
    Ok(())
}
