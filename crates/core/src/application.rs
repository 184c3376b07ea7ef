// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::candidate::advance_candidate;
use crate::error::CoreError;
use crate::event::{EventLog, LifecycleEvent, status_snapshot};
use haken_audit::{Actor, AuditEvent, Cause, StateSnapshot};
use haken_domain::{
    Application, ApplicationOutcome, ApplicationStatus, Candidate, CandidateStatus, DomainError,
    NewApplication, validate_client_company,
};
use time::OffsetDateTime;

/// The result of presenting a candidate to a client company.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationResult {
    pub new_application: NewApplication,
    /// The candidate, now `presented`.
    pub candidate: Candidate,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// The result of recording a client company's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationResult {
    pub application: Application,
    /// The candidate, if its status mirrored the outcome.
    pub candidate: Option<Candidate>,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// Presents a candidate to a client company, opening a new application.
///
/// # Errors
///
/// Returns an error if:
/// - The company id is not positive
/// - The candidate is not `registered` or `rejected`
pub fn present_candidate(
    candidate: &Candidate,
    client_company_id: i64,
    client_company_name: Option<String>,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<PresentationResult, CoreError> {
    validate_client_company(client_company_id)?;

    if !candidate.status.is_presentable() {
        return Err(CoreError::DomainViolation(
            DomainError::CandidateNotPresentable {
                candidate_id: candidate.candidate_id,
                status: candidate.status.as_str().to_string(),
            },
        ));
    }

    let created_by: String = actor.id.clone();
    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::ApplicationCreated {
            candidate_id: candidate.candidate_id,
            client_company_id,
        },
        StateSnapshot::absent(),
        status_snapshot(ApplicationStatus::Pending.as_str()),
    );
    let presented: Candidate =
        advance_candidate(candidate, CandidateStatus::Presented, &mut log, now)?;
    let (events, audit_events) = log.finish();

    Ok(PresentationResult {
        new_application: NewApplication {
            candidate_id: candidate.candidate_id,
            client_company_id,
            client_company_name,
            presented_at: now,
            created_by,
        },
        candidate: presented,
        events,
        audit_events,
    })
}

/// Records the outcome of a presentation.
///
/// The application's status is write-once. The candidate mirrors the
/// outcome while it is still `presented`; a candidate that has since moved
/// on keeps its status.
///
/// # Errors
///
/// Returns an error if:
/// - The application does not belong to the candidate
/// - The application already has a result
pub fn record_application_result(
    application: &Application,
    candidate: &Candidate,
    outcome: ApplicationOutcome,
    notes: Option<String>,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ApplicationResult, CoreError> {
    if application.candidate_id != candidate.candidate_id {
        return Err(CoreError::DomainViolation(
            DomainError::ApplicationCandidateMismatch {
                application_id: application.application_id,
                candidate_id: candidate.candidate_id,
            },
        ));
    }

    let next: ApplicationStatus = outcome.status();
    if application.status.is_terminal() {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                entity: "application",
                id: application.application_id,
                from: application.status.as_str().to_string(),
                to: next.as_str().to_string(),
            },
        ));
    }

    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::ApplicationResultRecorded {
            application_id: application.application_id,
            candidate_id: candidate.candidate_id,
            outcome,
        },
        status_snapshot(application.status.as_str()),
        status_snapshot(next.as_str()),
    );

    let mirrored: Option<Candidate> = if candidate.status == CandidateStatus::Presented {
        let candidate_status: CandidateStatus = match outcome {
            ApplicationOutcome::Accepted => CandidateStatus::Accepted,
            ApplicationOutcome::Rejected => CandidateStatus::Rejected,
        };
        Some(advance_candidate(
            candidate,
            candidate_status,
            &mut log,
            now,
        )?)
    } else {
        None
    };
    let (events, audit_events) = log.finish();

    Ok(ApplicationResult {
        application: Application {
            status: next,
            result_at: Some(now),
            result_notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            ..application.clone()
        },
        candidate: mirrored,
        events,
        audit_events,
    })
}
