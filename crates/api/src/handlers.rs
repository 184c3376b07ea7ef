// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every write handler follows the same shape: authorize, load the current
//! entities, run the pure core transition, then hand the result to
//! persistence, which stores it atomically.

use haken::{
    ApplicationResult, ApprovalResult, CandidateResult, MaterializationResult, NoticeContext,
    NoticeCreation, NoticeDraft, NoticePatch, NoticeResult, PresentationResult,
    RegistrationResult, TerminationResult,
};
use haken_audit::{AuditEvent, Cause, EntityType};
use haken_domain::{
    Application, ApplicationOutcome, Candidate, CandidatePatch, CandidateProfile, DomainError,
    Employee, JoiningNotice, PersonalDetails, parse_date,
};
use haken_persistence::{
    ApplicationFilter, CandidateFilter, EmployeeFilter, JoiningNoticeFilter, Persistence,
    PersistedApplicationResult, PersistedApproval, PersistedNoticeCreation,
    PersistedPresentation,
};
use std::str::FromStr;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ApplicationInfo, ApplicationResponse, ApproveJoiningNoticeResponse, AuditEventInfo,
    AuditTimelineResponse, CandidateInfo, CreateJoiningNoticeRequest,
    CreateJoiningNoticeResponse, EmployeeInfo, EmployeeSummaryResponse, HousingInfo,
    JoiningNoticeInfo, ListApplicationsRequest, ListApplicationsResponse, ListCandidatesRequest,
    ListCandidatesResponse, ListEmployeesRequest, ListEmployeesResponse,
    ListJoiningNoticesRequest, ListJoiningNoticesResponse, PersonalDetailsInfo,
    PresentCandidateRequest,
    RecordApplicationResultRequest, RegisterCandidateRequest, RejectJoiningNoticeRequest,
    TerminateEmployeeRequest, UpdateCandidateRequest, UpdateJoiningNoticeRequest,
};

// ============================================================================
// Loading helpers
// ============================================================================

fn load_candidate(persistence: &mut Persistence, candidate_id: i64) -> Result<Candidate, ApiError> {
    persistence
        .find_candidate(candidate_id)?
        .ok_or_else(|| translate_domain_error(DomainError::CandidateNotFound(candidate_id)))
}

fn load_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<Application, ApiError> {
    persistence
        .find_application(application_id)?
        .ok_or_else(|| translate_domain_error(DomainError::ApplicationNotFound(application_id)))
}

fn load_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
) -> Result<JoiningNotice, ApiError> {
    persistence
        .find_joining_notice(joining_notice_id)?
        .ok_or_else(|| {
            translate_domain_error(DomainError::JoiningNoticeNotFound(joining_notice_id))
        })
}

fn load_employee(persistence: &mut Persistence, employee_id: i64) -> Result<Employee, ApiError> {
    persistence
        .find_employee(employee_id)?
        .ok_or_else(|| translate_domain_error(DomainError::EmployeeNotFound(employee_id)))
}

/// Parses an optional list filter value.
fn parse_filter<T: FromStr<Err = DomainError>>(value: Option<&str>) -> Result<Option<T>, ApiError> {
    value
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_personal(
    personal: Option<&PersonalDetailsInfo>,
) -> Result<Option<PersonalDetails>, ApiError> {
    personal
        .map(PersonalDetailsInfo::to_domain)
        .transpose()
        .map_err(translate_domain_error)
}

// ============================================================================
// Candidates
// ============================================================================

/// Registers a new candidate.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - A date is malformed or the profile fails validation
pub fn register_candidate(
    persistence: &mut Persistence,
    request: RegisterCandidateRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CandidateInfo, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "register_candidate")?;

    let profile: CandidateProfile = request.into_profile().map_err(translate_domain_error)?;
    let result: RegistrationResult = haken::register_candidate(
        profile,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let candidate: Candidate = persistence.persist_registration(&result)?;
    info!(
        candidate_id = candidate.candidate_id,
        actor_id = %authenticated_actor.id,
        "Registered candidate"
    );

    Ok(CandidateInfo::from(&candidate))
}

/// Edits a candidate's profile.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The request names `status`
/// - The candidate does not exist
/// - The patch is empty or the resulting profile fails validation
/// - The candidate changed since it was read
pub fn update_candidate(
    persistence: &mut Persistence,
    candidate_id: i64,
    request: UpdateCandidateRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CandidateInfo, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "update_candidate")?;

    if request.status.is_some() {
        return Err(ApiError::InvalidInput {
            field: String::from("status"),
            message: String::from(
                "Candidate status cannot be edited; it follows the presentation and joining notice workflow",
            ),
        });
    }

    let patch: CandidatePatch = CandidatePatch {
        personal: parse_personal(request.personal.as_ref())?,
        contact: request.contact.map(Into::into),
        physical: request.physical.map(Into::into),
        name_romanji: request.name_romanji,
        residence_card_number: request.residence_card_number,
        japanese_level: request.japanese_level,
        notes: request.notes,
    };

    let candidate: Candidate = load_candidate(persistence, candidate_id)?;
    let result: CandidateResult = haken::update_candidate(
        &candidate,
        patch,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let updated: Candidate = persistence.persist_candidate_update(&result)?;
    info!(
        candidate_id,
        version = updated.version,
        "Updated candidate"
    );

    Ok(CandidateInfo::from(&updated))
}

/// Returns a single candidate.
///
/// # Errors
///
/// Returns an error if the candidate does not exist.
pub fn get_candidate(
    persistence: &mut Persistence,
    candidate_id: i64,
) -> Result<CandidateInfo, ApiError> {
    let candidate: Candidate = load_candidate(persistence, candidate_id)?;
    Ok(CandidateInfo::from(&candidate))
}

/// Lists candidates, optionally filtered by status and name.
///
/// # Errors
///
/// Returns an error if the status filter is unknown.
pub fn list_candidates(
    persistence: &mut Persistence,
    request: &ListCandidatesRequest,
) -> Result<ListCandidatesResponse, ApiError> {
    let filter: CandidateFilter = CandidateFilter {
        status: parse_filter(request.status.as_deref())?,
        name: request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from),
    };

    let candidates: Vec<Candidate> = persistence.list_candidates(&filter)?;
    Ok(ListCandidatesResponse {
        candidates: candidates.iter().map(CandidateInfo::from).collect(),
    })
}

// ============================================================================
// Applications
// ============================================================================

/// Presents a candidate to a client company.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The candidate does not exist or is not presentable
/// - The company id is not positive
pub fn present_candidate(
    persistence: &mut Persistence,
    request: PresentCandidateRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApplicationResponse, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "present_candidate")?;

    let candidate: Candidate = load_candidate(persistence, request.candidate_id)?;
    let result: PresentationResult = haken::present_candidate(
        &candidate,
        request.client_company_id,
        request.client_company_name,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let stored: PersistedPresentation = persistence.persist_presentation(&result)?;
    info!(
        application_id = stored.application.application_id,
        candidate_id = stored.candidate.candidate_id,
        client_company_id = stored.application.client_company_id,
        "Presented candidate"
    );

    Ok(ApplicationResponse {
        application: ApplicationInfo::from(&stored.application),
        candidate: CandidateInfo::from(&stored.candidate),
    })
}

/// Records the outcome of a presentation.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The outcome is not `accepted` or `rejected`
/// - The application does not exist or already has a result
pub fn record_application_result(
    persistence: &mut Persistence,
    application_id: i64,
    request: RecordApplicationResultRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApplicationResponse, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "record_application_result")?;

    let outcome: ApplicationOutcome = request
        .outcome
        .parse()
        .map_err(translate_domain_error)?;

    let application: Application = load_application(persistence, application_id)?;
    let candidate: Candidate = load_candidate(persistence, application.candidate_id)?;
    let result: ApplicationResult = haken::record_application_result(
        &application,
        &candidate,
        outcome,
        request.notes,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let stored: PersistedApplicationResult = persistence.persist_application_result(&result)?;
    info!(
        application_id,
        status = %stored.application.status,
        candidate_status = %stored.candidate.status,
        "Recorded application result"
    );

    Ok(ApplicationResponse {
        application: ApplicationInfo::from(&stored.application),
        candidate: CandidateInfo::from(&stored.candidate),
    })
}

/// Returns a single application.
///
/// # Errors
///
/// Returns an error if the application does not exist.
pub fn get_application(
    persistence: &mut Persistence,
    application_id: i64,
) -> Result<ApplicationInfo, ApiError> {
    let application: Application = load_application(persistence, application_id)?;
    Ok(ApplicationInfo::from(&application))
}

/// Lists applications, optionally filtered by candidate and status.
///
/// # Errors
///
/// Returns an error if the status filter is unknown.
pub fn list_applications(
    persistence: &mut Persistence,
    request: &ListApplicationsRequest,
) -> Result<ListApplicationsResponse, ApiError> {
    let filter: ApplicationFilter = ApplicationFilter {
        candidate_id: request.candidate_id,
        status: parse_filter(request.status.as_deref())?,
    };

    let applications: Vec<Application> = persistence.list_applications(filter)?;
    Ok(ListApplicationsResponse {
        applications: applications.iter().map(ApplicationInfo::from).collect(),
    })
}

// ============================================================================
// Joining notices
// ============================================================================

/// Opens a draft joining notice for a candidate.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The candidate or referenced application does not exist
/// - The application belongs to another candidate or is not accepted
/// - The candidate is hired or already has an open notice
/// - The housing type, a date or a rate is invalid
pub fn create_joining_notice(
    persistence: &mut Persistence,
    request: CreateJoiningNoticeRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CreateJoiningNoticeResponse, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "create_joining_notice")?;

    let draft: NoticeDraft = NoticeDraft {
        candidate_id: request.candidate_id,
        application_id: request.application_id,
        personal: parse_personal(request.personal.as_ref())?,
        housing: request.housing.to_domain().map_err(translate_domain_error)?,
        terms: request.terms.into(),
    };

    let candidate: Option<Candidate> = persistence.find_candidate(draft.candidate_id)?;
    let application: Option<Application> = match draft.application_id {
        Some(application_id) => persistence.find_application(application_id)?,
        None => None,
    };
    let open_notice_id: Option<i64> = persistence.find_open_notice_id(draft.candidate_id)?;

    let context: NoticeContext<'_> = NoticeContext {
        candidate: candidate.as_ref(),
        application: application.as_ref(),
        open_notice_id,
    };
    let result: NoticeCreation = haken::create_joining_notice(
        draft,
        context,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let stored: PersistedNoticeCreation = persistence.persist_notice_creation(&result)?;
    info!(
        joining_notice_id = stored.notice.joining_notice_id,
        candidate_id = stored.candidate.candidate_id,
        employment_type = %stored.notice.employment_type(),
        "Created joining notice"
    );

    Ok(CreateJoiningNoticeResponse {
        joining_notice: JoiningNoticeInfo::from(&stored.notice),
        candidate: CandidateInfo::from(&stored.candidate),
    })
}

/// Edits a draft joining notice.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The notice does not exist or is not a draft
/// - The patch is empty or invalid
/// - The notice changed since it was read
pub fn update_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
    request: UpdateJoiningNoticeRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<JoiningNoticeInfo, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "update_joining_notice")?;

    let patch: NoticePatch = NoticePatch {
        personal: parse_personal(request.personal.as_ref())?,
        housing: request
            .housing
            .as_ref()
            .map(HousingInfo::to_domain)
            .transpose()
            .map_err(translate_domain_error)?,
        terms: request.terms.map(Into::into),
    };

    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    let result: NoticeResult = haken::update_joining_notice_draft(
        &notice,
        patch,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let updated: JoiningNotice = persistence.persist_notice_update(&result, notice.status)?;
    info!(joining_notice_id, "Updated joining notice draft");

    Ok(JoiningNoticeInfo::from(&updated))
}

/// Submits a draft notice for approval.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The notice does not exist, is not a draft, or is incomplete
pub fn submit_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<JoiningNoticeInfo, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "submit_joining_notice")?;

    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    let result: NoticeResult = haken::submit_joining_notice(
        &notice,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let submitted: JoiningNotice = persistence.persist_notice_update(&result, notice.status)?;
    info!(joining_notice_id, "Submitted joining notice");

    Ok(JoiningNoticeInfo::from(&submitted))
}

/// Approves a pending notice, materializing the employee and hiring the
/// candidate in one transaction.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not approve
/// - The notice does not exist or is not pending
/// - An employee already exists for the notice
/// - The notice or candidate changed since it was read
pub fn approve_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApproveJoiningNoticeResponse, ApiError> {
    AuthorizationService::authorize_decision(authenticated_actor, "approve_joining_notice")?;

    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    let candidate: Candidate = load_candidate(persistence, notice.candidate_id)?;
    let existing_employee_id: Option<i64> =
        persistence.find_employee_id_for_notice(joining_notice_id)?;

    let result: ApprovalResult = haken::approve_joining_notice(
        &notice,
        &candidate,
        existing_employee_id,
        &authenticated_actor.to_context(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let stored: PersistedApproval = persistence.persist_approval(&result)?;
    info!(
        joining_notice_id,
        employee_id = stored.employee.employee_id,
        employee_number = stored.employee.employee_number,
        approved_by = %authenticated_actor.id,
        "Approved joining notice"
    );

    Ok(ApproveJoiningNoticeResponse {
        joining_notice: JoiningNoticeInfo::from(&stored.notice),
        employee: EmployeeInfo::from(&stored.employee),
        candidate: CandidateInfo::from(&stored.candidate),
    })
}

/// Rejects a pending notice.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not reject
/// - The notice does not exist or is not pending
/// - The reason is blank
pub fn reject_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
    request: &RejectJoiningNoticeRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<JoiningNoticeInfo, ApiError> {
    AuthorizationService::authorize_decision(authenticated_actor, "reject_joining_notice")?;

    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    let result: NoticeResult = haken::reject_joining_notice(
        &notice,
        &request.reason,
        &authenticated_actor.to_context(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let rejected: JoiningNotice = persistence.persist_notice_update(&result, notice.status)?;
    info!(joining_notice_id, "Rejected joining notice");

    Ok(JoiningNoticeInfo::from(&rejected))
}

/// Materializes the employee for an approved notice that has none.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not approve
/// - The notice does not exist or is not approved
/// - An employee already exists for the notice
pub fn materialize_employee(
    persistence: &mut Persistence,
    joining_notice_id: i64,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<EmployeeInfo, ApiError> {
    AuthorizationService::authorize_decision(authenticated_actor, "materialize_employee")?;

    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    let existing_employee_id: Option<i64> =
        persistence.find_employee_id_for_notice(joining_notice_id)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let result: MaterializationResult = haken::materialize_employee(
        &notice,
        existing_employee_id,
        authenticated_actor.to_audit_actor(),
        cause,
        now,
    )
    .map_err(translate_core_error)?;

    let employee: Employee = persistence.persist_materialization(&result, now)?;
    info!(
        joining_notice_id,
        employee_id = employee.employee_id,
        employee_number = employee.employee_number,
        "Materialized employee"
    );

    Ok(EmployeeInfo::from(&employee))
}

/// Returns a single joining notice.
///
/// # Errors
///
/// Returns an error if the notice does not exist.
pub fn get_joining_notice(
    persistence: &mut Persistence,
    joining_notice_id: i64,
) -> Result<JoiningNoticeInfo, ApiError> {
    let notice: JoiningNotice = load_joining_notice(persistence, joining_notice_id)?;
    Ok(JoiningNoticeInfo::from(&notice))
}

/// Lists joining notices, optionally filtered by status and candidate.
///
/// # Errors
///
/// Returns an error if the status filter is unknown.
pub fn list_joining_notices(
    persistence: &mut Persistence,
    request: &ListJoiningNoticesRequest,
) -> Result<ListJoiningNoticesResponse, ApiError> {
    let filter: JoiningNoticeFilter = JoiningNoticeFilter {
        status: parse_filter(request.status.as_deref())?,
        candidate_id: request.candidate_id,
    };

    let notices: Vec<JoiningNotice> = persistence.list_joining_notices(filter)?;
    Ok(ListJoiningNoticesResponse {
        joining_notices: notices.iter().map(JoiningNoticeInfo::from).collect(),
    })
}

// ============================================================================
// Employees
// ============================================================================

/// Terminates an active employee.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not write
/// - The date is malformed or precedes the hire date
/// - The employee does not exist or is not active
pub fn terminate_employee(
    persistence: &mut Persistence,
    employee_id: i64,
    request: &TerminateEmployeeRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<EmployeeInfo, ApiError> {
    AuthorizationService::authorize_write(authenticated_actor, "terminate_employee")?;

    let termination_date: Date =
        parse_date(&request.termination_date).map_err(translate_domain_error)?;

    let employee: Employee = load_employee(persistence, employee_id)?;
    let result: TerminationResult = haken::terminate_employee(
        &employee,
        termination_date,
        authenticated_actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    let terminated: Employee = persistence.persist_termination(&result)?;
    info!(
        employee_id,
        termination_date = %request.termination_date,
        "Terminated employee"
    );

    Ok(EmployeeInfo::from(&terminated))
}

/// Returns a single employee with its assignment.
///
/// # Errors
///
/// Returns an error if the employee does not exist.
pub fn get_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeInfo, ApiError> {
    let employee: Employee = load_employee(persistence, employee_id)?;
    Ok(EmployeeInfo::from(&employee))
}

/// Lists employees, optionally filtered by status and employment type.
///
/// # Errors
///
/// Returns an error if a filter value is unknown.
pub fn list_employees(
    persistence: &mut Persistence,
    request: &ListEmployeesRequest,
) -> Result<ListEmployeesResponse, ApiError> {
    let filter: EmployeeFilter = EmployeeFilter {
        status: parse_filter(request.status.as_deref())?,
        employment_type: parse_filter(request.employment_type.as_deref())?,
    };

    let employees: Vec<Employee> = persistence.list_employees(filter)?;
    Ok(ListEmployeesResponse {
        employees: employees.iter().map(EmployeeInfo::from).collect(),
    })
}

/// Returns head counts of active and terminated employees.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub fn get_employee_summary(
    persistence: &mut Persistence,
) -> Result<EmployeeSummaryResponse, ApiError> {
    Ok(persistence.employee_summary()?.into())
}

// ============================================================================
// Audit
// ============================================================================

/// Returns the audit timeline of one entity, oldest first.
///
/// # Errors
///
/// Returns an error if the entity type is unknown.
pub fn get_audit_timeline(
    persistence: &mut Persistence,
    entity_type: &str,
    entity_id: i64,
) -> Result<AuditTimelineResponse, ApiError> {
    let entity_type: EntityType =
        entity_type
            .parse()
            .map_err(|message: String| ApiError::InvalidInput {
                field: String::from("entity_type"),
                message,
            })?;

    let events: Vec<AuditEvent> = persistence.audit_timeline(entity_type, entity_id)?;
    Ok(AuditTimelineResponse {
        events: events.iter().map(AuditEventInfo::from).collect(),
    })
}

/// Returns a single audit event.
///
/// # Errors
///
/// Returns an error if the event does not exist.
pub fn get_audit_event(
    persistence: &mut Persistence,
    event_id: i64,
) -> Result<AuditEventInfo, ApiError> {
    let event: AuditEvent = persistence.get_audit_event(event_id)?;
    Ok(AuditEventInfo::from(&event))
}
