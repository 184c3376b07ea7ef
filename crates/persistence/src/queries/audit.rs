// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event queries.
//!
//! Audit events are read back either one at a time or as the ordered
//! timeline of a single entity.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_audit::{Action, Actor, AuditEvent, Cause, EntityRef, EntityType, StateSnapshot};
use std::str::FromStr;

use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::rows::parse_timestamp;

/// Diesel Queryable struct for full audit event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = audit_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct AuditEventRow {
    event_id: i64,
    entity_type: String,
    entity_id: i64,
    actor_json: String,
    cause_json: String,
    action_json: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
    occurred_at: String,
}

impl AuditEventRow {
    fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        let entity_type: EntityType = EntityType::from_str(&self.entity_type)
            .map_err(PersistenceError::ReconstructionError)?;

        let actor_data: ActorData = serde_json::from_str(&self.actor_json)?;
        let cause_data: CauseData = serde_json::from_str(&self.cause_json)?;
        let action_data: ActionData = serde_json::from_str(&self.action_json)?;
        let before_data: StateSnapshotData = serde_json::from_str(&self.before_snapshot_json)?;
        let after_data: StateSnapshotData = serde_json::from_str(&self.after_snapshot_json)?;

        Ok(AuditEvent::with_id(
            self.event_id,
            Actor::from(actor_data),
            Cause::from(cause_data),
            Action::from(action_data),
            EntityRef::existing(entity_type, self.entity_id),
            StateSnapshot::from(before_data),
            StateSnapshot::from(after_data),
            parse_timestamp(&self.occurred_at)?,
        ))
    }
}

/// Retrieves an audit event by ID.
///
/// # Errors
///
/// Returns `PersistenceError::EventNotFound` if there is no such event, or
/// an error if the event cannot be deserialized.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<AuditEvent, PersistenceError> {
    let result = audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .select(AuditEventRow::as_select())
        .first::<AuditEventRow>(conn);

    let row: AuditEventRow = match result {
        Ok(r) => r,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::EventNotFound(event_id));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    row.into_event()
}

/// Retrieves every audit event recorded for one entity, in the order they
/// were written.
///
/// # Errors
///
/// Returns an error if the query fails or an event cannot be deserialized.
pub fn audit_timeline(
    conn: &mut SqliteConnection,
    entity_type: EntityType,
    entity_id: i64,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    audit_events::table
        .filter(audit_events::entity_type.eq(entity_type.as_str()))
        .filter(audit_events::entity_id.eq(entity_id))
        .order(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load::<AuditEventRow>(conn)?
        .into_iter()
        .map(AuditEventRow::into_event)
        .collect()
}
