// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::event::{EventLog, LifecycleEvent, status_snapshot};
use haken_audit::{Actor, AuditEvent, Cause, StateSnapshot};
use haken_domain::{
    Candidate, CandidatePatch, CandidateProfile, CandidateStatus, DomainError, NewCandidate,
    validate_candidate_profile,
};
use time::OffsetDateTime;

/// The result of registering a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationResult {
    /// The candidate to insert.
    pub new_candidate: NewCandidate,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// The result of a transition that changes a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateResult {
    /// The candidate after the change. `version` is still the version the
    /// change was computed from; storage bumps it on write.
    pub candidate: Candidate,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// Registers a new candidate with status `registered`.
///
/// # Errors
///
/// Returns an error if the profile fails validation (blank full name,
/// non-positive measurements, malformed email).
pub fn register_candidate(
    profile: CandidateProfile,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<RegistrationResult, CoreError> {
    validate_candidate_profile(&profile)?;

    let created_by: String = actor.id.clone();
    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::CandidateRegistered {
            full_name: profile.personal.full_name.clone(),
        },
        StateSnapshot::absent(),
        status_snapshot(CandidateStatus::Registered.as_str()),
    );
    let (events, audit_events) = log.finish();

    Ok(RegistrationResult {
        new_candidate: NewCandidate {
            profile,
            status: CandidateStatus::Registered,
            created_by,
            created_at: now,
        },
        events,
        audit_events,
    })
}

/// Applies a profile patch to a candidate. Status is never touched.
///
/// # Errors
///
/// Returns an error if the patch is empty or the resulting profile fails
/// validation.
pub fn update_candidate(
    candidate: &Candidate,
    patch: CandidatePatch,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<CandidateResult, CoreError> {
    if patch.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::InvalidField {
            field: "patch",
            reason: String::from("no fields to update"),
        }));
    }

    let profile: CandidateProfile = patch.apply_to(&candidate.profile);
    validate_candidate_profile(&profile)?;

    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::CandidateUpdated {
            candidate_id: candidate.candidate_id,
        },
        StateSnapshot::new(format!("version={}", candidate.version)),
        StateSnapshot::new(format!("version={}", candidate.version + 1)),
    );
    let (events, audit_events) = log.finish();

    Ok(CandidateResult {
        candidate: Candidate {
            profile,
            updated_at: now,
            ..candidate.clone()
        },
        events,
        audit_events,
    })
}

/// Moves a candidate to `next`, recording the change in `log`.
pub(crate) fn advance_candidate(
    candidate: &Candidate,
    next: CandidateStatus,
    log: &mut EventLog,
    now: OffsetDateTime,
) -> Result<Candidate, DomainError> {
    candidate.ensure_transition(next)?;
    log.record(
        LifecycleEvent::CandidateStatusChanged {
            candidate_id: candidate.candidate_id,
            from: candidate.status,
            to: next,
        },
        status_snapshot(candidate.status.as_str()),
        status_snapshot(next.as_str()),
    );
    Ok(Candidate {
        status: next,
        updated_at: now,
        ..candidate.clone()
    })
}
