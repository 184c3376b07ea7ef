// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.
//!
//! Audit events are always written inside the transaction that applied the
//! state change they describe.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_audit::{AuditEvent, EntityType};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::{ActionData, ActorData, CauseData, StateSnapshotData};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::rows::format_timestamp;

#[derive(Insertable)]
#[diesel(table_name = audit_events)]
struct NewAuditEventRow {
    entity_type: String,
    entity_id: i64,
    actor_json: String,
    cause_json: String,
    action_json: String,
    before_snapshot_json: String,
    after_snapshot_json: String,
    occurred_at: String,
}

/// Ids assigned to entities inserted by the transition being persisted.
///
/// Audit events about a freshly created entity carry no id; they are
/// resolved against this list by entity type.
#[derive(Debug, Default)]
pub struct CreatedIds {
    ids: Vec<(EntityType, i64)>,
}

impl CreatedIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity_type: EntityType, id: i64) {
        self.ids.push((entity_type, id));
    }

    fn lookup(&self, entity_type: EntityType) -> Option<i64> {
        self.ids
            .iter()
            .find(|(t, _)| *t == entity_type)
            .map(|(_, id)| *id)
    }
}

/// Persists a single audit event.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the entity id cannot be resolved, or if
/// serialization or the insert fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
    created: &CreatedIds,
) -> Result<i64, PersistenceError> {
    let entity_type: EntityType = event.entity.entity_type;
    let entity_id: i64 = event
        .entity
        .entity_id
        .or_else(|| created.lookup(entity_type))
        .ok_or_else(|| {
            PersistenceError::DatabaseError(format!(
                "audit event '{}' refers to a {entity_type} that was never inserted",
                event.action.name
            ))
        })?;

    let row: NewAuditEventRow = NewAuditEventRow {
        entity_type: entity_type.as_str().to_string(),
        entity_id,
        actor_json: serde_json::to_string(&ActorData::from(&event.actor))?,
        cause_json: serde_json::to_string(&CauseData::from(&event.cause))?,
        action_json: serde_json::to_string(&ActionData::from(&event.action))?,
        before_snapshot_json: serde_json::to_string(&StateSnapshotData::from(&event.before))?,
        after_snapshot_json: serde_json::to_string(&StateSnapshotData::from(&event.after))?,
        occurred_at: format_timestamp(event.occurred_at)?,
    };

    diesel::insert_into(audit_events::table)
        .values(&row)
        .execute(conn)?;
    let event_id: i64 = conn.get_last_insert_rowid()?;

    debug!(
        event_id,
        entity_type = entity_type.as_str(),
        entity_id,
        action = %event.action.name,
        "Persisted audit event"
    );
    Ok(event_id)
}

/// Persists every audit event of a transition, in order.
///
/// # Errors
///
/// Returns the first failure from [`persist_audit_event`].
pub fn persist_audit_events(
    conn: &mut SqliteConnection,
    events: &[AuditEvent],
    created: &CreatedIds,
) -> Result<Vec<i64>, PersistenceError> {
    events
        .iter()
        .map(|event| persist_audit_event(conn, event, created))
        .collect()
}
