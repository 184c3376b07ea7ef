// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Joining notice workflow: `draft -> pending -> approved | rejected`.

use crate::candidate::advance_candidate;
use crate::context::ActorContext;
use crate::employee::build_employee;
use crate::error::CoreError;
use crate::event::{EventLog, LifecycleEvent, status_snapshot};
use haken_audit::{Actor, AuditEvent, Cause, StateSnapshot};
use haken_domain::{
    Application, ApplicationStatus, Candidate, CandidateStatus, DomainError, EmploymentTerms,
    Housing, JoiningNotice, JoiningNoticeStatus, NewEmployee, NewJoiningNotice, PersonalDetails,
    validate_notice_for_submission, validate_rejection_reason, validate_terms,
};
use time::{Date, OffsetDateTime};

/// The caller-supplied content of a new joining notice.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeDraft {
    pub candidate_id: i64,
    pub application_id: Option<i64>,
    /// Defaults to the candidate's personal details.
    pub personal: Option<PersonalDetails>,
    pub housing: Housing,
    pub terms: EmploymentTerms,
}

/// A change to a draft notice. `None` leaves the group untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticePatch {
    pub personal: Option<PersonalDetails>,
    pub housing: Option<Housing>,
    pub terms: Option<EmploymentTerms>,
}

impl NoticePatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.personal.is_none() && self.housing.is_none() && self.terms.is_none()
    }
}

/// What the store already knows that bears on creating a notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoticeContext<'a> {
    /// The referenced candidate, or `None` if it does not exist.
    pub candidate: Option<&'a Candidate>,
    /// The referenced application, or `None` if absent or missing.
    pub application: Option<&'a Application>,
    /// The id of the candidate's current draft or pending notice.
    pub open_notice_id: Option<i64>,
}

/// The result of creating a joining notice.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeCreation {
    pub new_notice: NewJoiningNotice,
    /// The candidate if it moved to `processing`.
    pub candidate: Option<Candidate>,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// The result of a transition that changes only the notice.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeResult {
    pub notice: JoiningNotice,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// The result of approving a joining notice.
///
/// The notice, the new employee and the hired candidate must be stored
/// together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalResult {
    pub notice: JoiningNotice,
    pub new_employee: NewEmployee,
    pub candidate: Candidate,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// Creates a draft joining notice for a candidate.
///
/// # Errors
///
/// Returns an error if:
/// - The candidate does not exist, has already been hired, or is still
///   awaiting an application result
/// - The candidate already has an open notice
/// - The referenced application is missing, belongs to another candidate,
///   or has not been accepted
/// - Any rate in the terms is negative
pub fn create_joining_notice(
    draft: NoticeDraft,
    context: NoticeContext<'_>,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<NoticeCreation, CoreError> {
    let candidate: &Candidate = context
        .candidate
        .filter(|c| c.candidate_id == draft.candidate_id)
        .ok_or(DomainError::UnknownCandidateReference(draft.candidate_id))?;

    match candidate.status {
        CandidateStatus::Hired => {
            return Err(DomainError::CandidateAlreadyHired(candidate.candidate_id).into());
        }
        // The pending application's result must land on the candidate first.
        CandidateStatus::Presented => {
            return Err(DomainError::CandidateAwaitingResult(candidate.candidate_id).into());
        }
        _ => {}
    }

    if let Some(joining_notice_id) = context.open_notice_id {
        return Err(DomainError::OpenJoiningNoticeExists {
            candidate_id: candidate.candidate_id,
            joining_notice_id,
        }
        .into());
    }

    if let Some(application_id) = draft.application_id {
        let application: &Application = context
            .application
            .filter(|a| a.application_id == application_id)
            .ok_or(DomainError::UnknownApplicationReference(application_id))?;
        if application.candidate_id != candidate.candidate_id {
            return Err(DomainError::ApplicationCandidateMismatch {
                application_id,
                candidate_id: candidate.candidate_id,
            }
            .into());
        }
        if application.status != ApplicationStatus::Accepted {
            return Err(DomainError::ApplicationNotAccepted {
                application_id,
                status: application.status.as_str().to_string(),
            }
            .into());
        }
    }

    validate_terms(&draft.terms)?;

    let created_by: String = actor.id.clone();
    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::JoiningNoticeCreated {
            candidate_id: candidate.candidate_id,
            employment_type: draft.terms.employment_type(),
        },
        StateSnapshot::absent(),
        status_snapshot(JoiningNoticeStatus::Draft.as_str()),
    );

    let processing: Option<Candidate> = if candidate.status == CandidateStatus::Processing {
        None
    } else {
        Some(advance_candidate(
            candidate,
            CandidateStatus::Processing,
            &mut log,
            now,
        )?)
    };
    let (events, audit_events) = log.finish();

    Ok(NoticeCreation {
        new_notice: NewJoiningNotice {
            candidate_id: candidate.candidate_id,
            application_id: draft.application_id,
            personal: draft
                .personal
                .unwrap_or_else(|| candidate.profile.personal.clone()),
            housing: draft.housing,
            terms: draft.terms,
            created_by,
            created_at: now,
        },
        candidate: processing,
        events,
        audit_events,
    })
}

/// Edits a draft notice.
///
/// # Errors
///
/// Returns an error if the notice is not a draft, the patch is empty, or
/// the new terms contain a negative rate.
pub fn update_joining_notice_draft(
    notice: &JoiningNotice,
    patch: NoticePatch,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<NoticeResult, CoreError> {
    if notice.status != JoiningNoticeStatus::Draft {
        return Err(DomainError::NoticeNotEditable {
            joining_notice_id: notice.joining_notice_id,
            status: notice.status.as_str().to_string(),
        }
        .into());
    }
    if patch.is_empty() {
        return Err(DomainError::InvalidField {
            field: "patch",
            reason: String::from("no fields to update"),
        }
        .into());
    }

    let updated: JoiningNotice = JoiningNotice {
        personal: patch.personal.unwrap_or_else(|| notice.personal.clone()),
        housing: patch.housing.unwrap_or_else(|| notice.housing.clone()),
        terms: patch.terms.unwrap_or_else(|| notice.terms.clone()),
        updated_at: now,
        ..notice.clone()
    };
    validate_terms(&updated.terms)?;

    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::JoiningNoticeUpdated {
            joining_notice_id: notice.joining_notice_id,
        },
        StateSnapshot::new(format!("employment_type={}", notice.employment_type())),
        StateSnapshot::new(format!("employment_type={}", updated.employment_type())),
    );
    let (events, audit_events) = log.finish();

    Ok(NoticeResult {
        notice: updated,
        events,
        audit_events,
    })
}

fn notice_status_event(notice: &JoiningNotice, next: JoiningNoticeStatus, log: &mut EventLog) {
    log.record(
        LifecycleEvent::JoiningNoticeStatusChanged {
            joining_notice_id: notice.joining_notice_id,
            from: notice.status,
            to: next,
        },
        status_snapshot(notice.status.as_str()),
        status_snapshot(next.as_str()),
    );
}

/// Submits a draft notice for approval.
///
/// # Errors
///
/// Returns an error if the notice is not a draft or is incomplete.
pub fn submit_joining_notice(
    notice: &JoiningNotice,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<NoticeResult, CoreError> {
    notice.ensure_transition(JoiningNoticeStatus::Pending)?;
    validate_notice_for_submission(notice)?;

    let mut log: EventLog = EventLog::new(actor, cause, now);
    notice_status_event(notice, JoiningNoticeStatus::Pending, &mut log);
    let (events, audit_events) = log.finish();

    Ok(NoticeResult {
        notice: JoiningNotice {
            status: JoiningNoticeStatus::Pending,
            submitted_at: Some(now),
            updated_at: now,
            ..notice.clone()
        },
        events,
        audit_events,
    })
}

/// Approves a pending notice, materializing the employee and hiring the
/// candidate in the same transition.
///
/// `existing_employee_id` is the employee already created from this
/// notice, if any.
///
/// # Errors
///
/// Returns an error if:
/// - The approver's role may not approve
/// - The notice is not pending
/// - The candidate does not belong to the notice or cannot be hired
/// - An employee already exists for the notice
pub fn approve_joining_notice(
    notice: &JoiningNotice,
    candidate: &Candidate,
    existing_employee_id: Option<i64>,
    approver: &ActorContext,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<ApprovalResult, CoreError> {
    approver.ensure_can_decide("approve joining notices")?;
    notice.ensure_transition(JoiningNoticeStatus::Approved)?;

    if candidate.candidate_id != notice.candidate_id {
        return Err(DomainError::CandidateNotFound(notice.candidate_id).into());
    }
    if let Some(employee_id) = existing_employee_id {
        return Err(DomainError::EmployeeAlreadyMaterialized {
            joining_notice_id: notice.joining_notice_id,
            employee_id,
        }
        .into());
    }

    let approved: JoiningNotice = JoiningNotice {
        status: JoiningNoticeStatus::Approved,
        approved_at: Some(now),
        approved_by: Some(approver.user_id.clone()),
        updated_at: now,
        ..notice.clone()
    };

    let hire_date: Date = approved.housing.move_in_date.unwrap_or_else(|| now.date());

    let mut log: EventLog = EventLog::new(approver.to_actor(), cause, now);
    notice_status_event(notice, JoiningNoticeStatus::Approved, &mut log);
    let new_employee: NewEmployee = build_employee(&approved, hire_date, &mut log);
    let hired: Candidate = advance_candidate(candidate, CandidateStatus::Hired, &mut log, now)?;
    let (events, audit_events) = log.finish();

    Ok(ApprovalResult {
        notice: approved,
        new_employee,
        candidate: hired,
        events,
        audit_events,
    })
}

/// Rejects a pending notice.
///
/// # Errors
///
/// Returns an error if:
/// - The actor's role may not reject
/// - The notice is not pending
/// - The reason is blank
pub fn reject_joining_notice(
    notice: &JoiningNotice,
    reason: &str,
    approver: &ActorContext,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<NoticeResult, CoreError> {
    approver.ensure_can_decide("reject joining notices")?;
    notice.ensure_transition(JoiningNoticeStatus::Rejected)?;
    let reason: String = validate_rejection_reason(reason)?;

    let mut log: EventLog = EventLog::new(approver.to_actor(), cause, now);
    notice_status_event(notice, JoiningNoticeStatus::Rejected, &mut log);
    let (events, audit_events) = log.finish();

    Ok(NoticeResult {
        notice: JoiningNotice {
            status: JoiningNoticeStatus::Rejected,
            rejection_reason: Some(reason),
            updated_at: now,
            ..notice.clone()
        },
        events,
        audit_events,
    })
}
