// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::str::FromStr;
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// This could be a user, a system process, or an automated trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "manager", "staff", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`ApproveJoiningNotice`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact rendering of the audited entity's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Snapshot of an entity that did not exist before the action.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            data: String::from("absent"),
        }
    }
}

/// The kind of entity an audit event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Candidate,
    Application,
    JoiningNotice,
    Employee,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Application => "application",
            Self::JoiningNotice => "joining_notice",
            Self::Employee => "employee",
        }
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(Self::Candidate),
            "application" => Ok(Self::Application),
            "joining_notice" => Ok(Self::JoiningNotice),
            "employee" => Ok(Self::Employee),
            _ => Err(format!("Unknown entity type: '{s}'")),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The entity an audit event is scoped to.
///
/// `entity_id` is `None` for an entity created by the same transition;
/// storage resolves it to the id assigned on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: Option<i64>,
}

impl EntityRef {
    /// References an entity that already has an id.
    #[must_use]
    pub const fn existing(entity_type: EntityType, entity_id: i64) -> Self {
        Self {
            entity_type,
            entity_id: Some(entity_id),
        }
    }

    /// References the entity created by the transition being audited.
    #[must_use]
    pub const fn created(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            entity_id: None,
        }
    }

    /// Returns a copy with the entity id filled in if it was pending.
    #[must_use]
    pub const fn resolved(self, entity_id: i64) -> Self {
        match self.entity_id {
            Some(_) => self,
            None => Self {
                entity_type: self.entity_type,
                entity_id: Some(entity_id),
            },
        }
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change produces exactly one audit event per
/// entity it touches. Audit events capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - Which entity it applies to (entity)
/// - The state before and after the transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The event ID assigned by storage. `None` until persisted.
    pub event_id: Option<i64>,
    pub actor: Actor,
    pub cause: Cause,
    pub action: Action,
    pub entity: EntityRef,
    pub before: StateSnapshot,
    pub after: StateSnapshot,
    /// When the transition took effect.
    pub occurred_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent` that has not been persisted.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        entity: EntityRef,
        before: StateSnapshot,
        after: StateSnapshot,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            entity,
            before,
            after,
            occurred_at,
        }
    }

    /// Creates an `AuditEvent` read back from storage.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        event_id: i64,
        actor: Actor,
        cause: Cause,
        action: Action,
        entity: EntityRef,
        before: StateSnapshot,
        after: StateSnapshot,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            actor,
            cause,
            action,
            entity,
            before,
            after,
            occurred_at,
        }
    }
}
