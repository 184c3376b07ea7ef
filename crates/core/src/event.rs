// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed lifecycle events.
//!
//! Each transition emits one event per entity it changes, including the
//! cross-entity side effects (a result mirrored onto the candidate, an
//! employee materialized on approval). Every event is paired with exactly
//! one audit event.

use haken_audit::{Action, Actor, AuditEvent, Cause, EntityRef, EntityType, StateSnapshot};
use haken_domain::{ApplicationOutcome, CandidateStatus, EmploymentType, JoiningNoticeStatus};
use time::{Date, OffsetDateTime};

/// Something that happened to one entity in the lifecycle.
///
/// Ids are `None` when the entity is created by the same transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    CandidateRegistered {
        full_name: String,
    },
    CandidateUpdated {
        candidate_id: i64,
    },
    CandidateStatusChanged {
        candidate_id: i64,
        from: CandidateStatus,
        to: CandidateStatus,
    },
    ApplicationCreated {
        candidate_id: i64,
        client_company_id: i64,
    },
    ApplicationResultRecorded {
        application_id: i64,
        candidate_id: i64,
        outcome: ApplicationOutcome,
    },
    JoiningNoticeCreated {
        candidate_id: i64,
        employment_type: EmploymentType,
    },
    JoiningNoticeUpdated {
        joining_notice_id: i64,
    },
    JoiningNoticeStatusChanged {
        joining_notice_id: i64,
        from: JoiningNoticeStatus,
        to: JoiningNoticeStatus,
    },
    EmployeeMaterialized {
        joining_notice_id: i64,
        candidate_id: i64,
        employment_type: EmploymentType,
        hire_date: Date,
    },
    EmployeeTerminated {
        employee_id: i64,
        termination_date: Date,
    },
}

impl LifecycleEvent {
    /// Returns the entity this event belongs to.
    #[must_use]
    pub const fn entity(&self) -> EntityRef {
        match self {
            Self::CandidateRegistered { .. } => EntityRef::created(EntityType::Candidate),
            Self::CandidateUpdated { candidate_id }
            | Self::CandidateStatusChanged { candidate_id, .. } => {
                EntityRef::existing(EntityType::Candidate, *candidate_id)
            }
            Self::ApplicationCreated { .. } => EntityRef::created(EntityType::Application),
            Self::ApplicationResultRecorded { application_id, .. } => {
                EntityRef::existing(EntityType::Application, *application_id)
            }
            Self::JoiningNoticeCreated { .. } => EntityRef::created(EntityType::JoiningNotice),
            Self::JoiningNoticeUpdated { joining_notice_id }
            | Self::JoiningNoticeStatusChanged {
                joining_notice_id, ..
            } => EntityRef::existing(EntityType::JoiningNotice, *joining_notice_id),
            Self::EmployeeMaterialized { .. } => EntityRef::created(EntityType::Employee),
            Self::EmployeeTerminated { employee_id, .. } => {
                EntityRef::existing(EntityType::Employee, *employee_id)
            }
        }
    }

    /// Returns the audit action name.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::CandidateRegistered { .. } => "RegisterCandidate",
            Self::CandidateUpdated { .. } => "UpdateCandidate",
            Self::CandidateStatusChanged { .. } => "ChangeCandidateStatus",
            Self::ApplicationCreated { .. } => "PresentCandidate",
            Self::ApplicationResultRecorded { .. } => "RecordApplicationResult",
            Self::JoiningNoticeCreated { .. } => "CreateJoiningNotice",
            Self::JoiningNoticeUpdated { .. } => "UpdateJoiningNotice",
            Self::JoiningNoticeStatusChanged { to, .. } => match to {
                JoiningNoticeStatus::Draft | JoiningNoticeStatus::Pending => {
                    "SubmitJoiningNotice"
                }
                JoiningNoticeStatus::Approved => "ApproveJoiningNotice",
                JoiningNoticeStatus::Rejected => "RejectJoiningNotice",
            },
            Self::EmployeeMaterialized { .. } => "MaterializeEmployee",
            Self::EmployeeTerminated { .. } => "TerminateEmployee",
        }
    }

    /// Returns a human-readable description for the audit trail.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::CandidateRegistered { full_name } => {
                format!("Registered candidate '{full_name}'")
            }
            Self::CandidateUpdated { candidate_id } => {
                format!("Updated profile of candidate {candidate_id}")
            }
            Self::CandidateStatusChanged {
                candidate_id,
                from,
                to,
            } => format!("Candidate {candidate_id} moved from '{from}' to '{to}'"),
            Self::ApplicationCreated {
                candidate_id,
                client_company_id,
            } => format!("Presented candidate {candidate_id} to company {client_company_id}"),
            Self::ApplicationResultRecorded {
                application_id,
                outcome,
                ..
            } => format!(
                "Application {application_id} {}",
                outcome.status().as_str()
            ),
            Self::JoiningNoticeCreated {
                candidate_id,
                employment_type,
            } => format!("Created {employment_type} joining notice for candidate {candidate_id}"),
            Self::JoiningNoticeUpdated { joining_notice_id } => {
                format!("Updated draft joining notice {joining_notice_id}")
            }
            Self::JoiningNoticeStatusChanged {
                joining_notice_id,
                from,
                to,
            } => format!("Joining notice {joining_notice_id} moved from '{from}' to '{to}'"),
            Self::EmployeeMaterialized {
                joining_notice_id,
                employment_type,
                hire_date,
                ..
            } => format!(
                "Materialized {employment_type} employee from joining notice {joining_notice_id}, hired {hire_date}"
            ),
            Self::EmployeeTerminated {
                employee_id,
                termination_date,
            } => format!("Terminated employee {employee_id} effective {termination_date}"),
        }
    }
}

/// Collects the events of one transition together with their audit events.
pub(crate) struct EventLog {
    actor: Actor,
    cause: Cause,
    at: OffsetDateTime,
    events: Vec<LifecycleEvent>,
    audit_events: Vec<AuditEvent>,
}

impl EventLog {
    pub(crate) const fn new(actor: Actor, cause: Cause, at: OffsetDateTime) -> Self {
        Self {
            actor,
            cause,
            at,
            events: Vec::new(),
            audit_events: Vec::new(),
        }
    }

    pub(crate) fn record(
        &mut self,
        event: LifecycleEvent,
        before: StateSnapshot,
        after: StateSnapshot,
    ) {
        let action: Action = Action::new(event.action_name().to_string(), Some(event.details()));
        self.audit_events.push(AuditEvent::new(
            self.actor.clone(),
            self.cause.clone(),
            action,
            event.entity(),
            before,
            after,
            self.at,
        ));
        self.events.push(event);
    }

    pub(crate) fn finish(self) -> (Vec<LifecycleEvent>, Vec<AuditEvent>) {
        (self.events, self.audit_events)
    }
}

/// Snapshot of a status-bearing entity.
pub(crate) fn status_snapshot(status: &str) -> StateSnapshot {
    StateSnapshot::new(format!("status={status}"))
}
