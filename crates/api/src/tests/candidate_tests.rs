// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haken_persistence::Persistence;

use crate::{
    ApiError, ApplicationResponse, CandidateInfo, ListApplicationsRequest,
    ListApplicationsResponse, ListCandidatesRequest, ListCandidatesResponse,
    PresentCandidateRequest, RecordApplicationResultRequest, UpdateCandidateRequest,
    get_application, get_candidate, list_applications, list_candidates, present_candidate,
    record_application_result, register_candidate, update_candidate,
};

use super::helpers::{
    create_persistence, create_test_cause, create_test_staff, create_test_viewer, register,
    register_request,
};

fn present(persistence: &mut Persistence, candidate_id: i64) -> ApplicationResponse {
    present_candidate(
        persistence,
        PresentCandidateRequest {
            candidate_id,
            client_company_id: 7,
            client_company_name: Some(String::from("Yamaha Motor")),
        },
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap()
}

fn record(
    persistence: &mut Persistence,
    application_id: i64,
    outcome: &str,
) -> Result<ApplicationResponse, ApiError> {
    record_application_result(
        persistence,
        application_id,
        RecordApplicationResultRequest {
            outcome: outcome.to_string(),
            notes: None,
        },
        &create_test_staff(),
        create_test_cause(),
    )
}

// ============================================================================
// Registration and editing
// ============================================================================

#[test]
fn test_register_candidate_starts_registered() {
    let mut persistence: Persistence = create_persistence();

    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");

    assert_eq!(candidate.status, "registered");
    assert_eq!(candidate.personal.full_name, "Ana Silva");
    assert_eq!(candidate.personal.birth_date.as_deref(), Some("1995-07-14"));
    assert_eq!(candidate.created_by, "staff-1");
    assert_eq!(candidate.version, 1);
}

#[test]
fn test_register_candidate_as_viewer_fails() {
    let mut persistence: Persistence = create_persistence();

    let err: ApiError = register_candidate(
        &mut persistence,
        register_request("Ana Silva"),
        &create_test_viewer(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(persistence.count_candidates().unwrap(), 0);
}

#[test]
fn test_register_candidate_with_blank_name_fails() {
    let mut persistence: Persistence = create_persistence();

    let err: ApiError = register_candidate(
        &mut persistence,
        register_request("  "),
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "full_name"));
}

#[test]
fn test_register_candidate_with_malformed_date_fails() {
    let mut persistence: Persistence = create_persistence();
    let mut request = register_request("Ana Silva");
    request.personal.birth_date = Some(String::from("14/07/1995"));

    let err: ApiError = register_candidate(
        &mut persistence,
        request,
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date"));
}

#[test]
fn test_update_candidate_bumps_version() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");

    let updated: CandidateInfo = update_candidate(
        &mut persistence,
        candidate.candidate_id,
        UpdateCandidateRequest {
            notes: Some(Some(String::from("Forklift licence"))),
            ..UpdateCandidateRequest::default()
        },
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(updated.notes.as_deref(), Some("Forklift licence"));
    assert_eq!(updated.version, candidate.version + 1);
    assert_eq!(updated.status, "registered");
}

#[test]
fn test_update_candidate_refuses_status() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");

    let err: ApiError = update_candidate(
        &mut persistence,
        candidate.candidate_id,
        UpdateCandidateRequest {
            status: Some(Some(String::from("hired"))),
            ..UpdateCandidateRequest::default()
        },
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));
    let stored: CandidateInfo = get_candidate(&mut persistence, candidate.candidate_id).unwrap();
    assert_eq!(stored.status, "registered");
    assert_eq!(stored.version, 1);
}

#[test]
fn test_update_candidate_refuses_null_status() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    let request: UpdateCandidateRequest = serde_json::from_value(serde_json::json!({
        "notes": "Forklift licence",
        "status": null
    }))
    .unwrap();

    let err: ApiError = update_candidate(
        &mut persistence,
        candidate.candidate_id,
        request,
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));
    let stored: CandidateInfo = get_candidate(&mut persistence, candidate.candidate_id).unwrap();
    assert_eq!(stored.notes, None);
    assert_eq!(stored.version, 1);
}

#[test]
fn test_update_candidate_null_clears_field() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    update_candidate(
        &mut persistence,
        candidate.candidate_id,
        UpdateCandidateRequest {
            notes: Some(Some(String::from("Forklift licence"))),
            japanese_level: Some(Some(String::from("N2"))),
            ..UpdateCandidateRequest::default()
        },
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap();

    let request: UpdateCandidateRequest =
        serde_json::from_value(serde_json::json!({ "notes": null })).unwrap();
    let cleared: CandidateInfo = update_candidate(
        &mut persistence,
        candidate.candidate_id,
        request,
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(cleared.notes, None);
    assert_eq!(cleared.japanese_level.as_deref(), Some("N2"));
    assert_eq!(cleared.version, 3);
}

#[test]
fn test_update_candidate_with_empty_patch_fails() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");

    let err: ApiError = update_candidate(
        &mut persistence,
        candidate.candidate_id,
        UpdateCandidateRequest::default(),
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_get_missing_candidate_is_not_found() {
    let mut persistence: Persistence = create_persistence();

    let err: ApiError = get_candidate(&mut persistence, 404).unwrap_err();

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Candidate"
    ));
}

#[test]
fn test_list_candidates_filters_by_status_and_name() {
    let mut persistence: Persistence = create_persistence();
    let ana: CandidateInfo = register(&mut persistence, "Ana Silva");
    register(&mut persistence, "Bruno Costa");
    present(&mut persistence, ana.candidate_id);

    let presented: ListCandidatesResponse = list_candidates(
        &mut persistence,
        &ListCandidatesRequest {
            status: Some(String::from("presented")),
            name: None,
        },
    )
    .unwrap();
    assert_eq!(presented.candidates.len(), 1);
    assert_eq!(presented.candidates[0].candidate_id, ana.candidate_id);

    let by_name: ListCandidatesResponse = list_candidates(
        &mut persistence,
        &ListCandidatesRequest {
            status: None,
            name: Some(String::from("Costa")),
        },
    )
    .unwrap();
    assert_eq!(by_name.candidates.len(), 1);
    assert_eq!(by_name.candidates[0].personal.full_name, "Bruno Costa");
}

#[test]
fn test_list_candidates_with_unknown_status_fails() {
    let mut persistence: Persistence = create_persistence();

    let err: ApiError = list_candidates(
        &mut persistence,
        &ListCandidatesRequest {
            status: Some(String::from("sleeping")),
            name: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));
}

// ============================================================================
// Presentations and results
// ============================================================================

#[test]
fn test_present_candidate_opens_pending_application() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");

    let response: ApplicationResponse = present(&mut persistence, candidate.candidate_id);

    assert_eq!(response.application.status, "pending");
    assert_eq!(response.application.client_company_id, 7);
    assert!(response.application.result_at.is_none());
    assert_eq!(response.candidate.status, "presented");
}

#[test]
fn test_present_candidate_twice_fails() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    present(&mut persistence, candidate.candidate_id);

    let err: ApiError = present_candidate(
        &mut persistence,
        PresentCandidateRequest {
            candidate_id: candidate.candidate_id,
            client_company_id: 8,
            client_company_name: None,
        },
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidState { .. }));
}

#[test]
fn test_accepted_result_moves_candidate_to_accepted() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    let presented: ApplicationResponse = present(&mut persistence, candidate.candidate_id);

    let response: ApplicationResponse = record(
        &mut persistence,
        presented.application.application_id,
        "accepted",
    )
    .unwrap();

    assert_eq!(response.application.status, "accepted");
    assert!(response.application.result_at.is_some());
    assert_eq!(response.candidate.status, "accepted");
}

#[test]
fn test_rejected_candidate_can_be_presented_again() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    let first: ApplicationResponse = present(&mut persistence, candidate.candidate_id);
    record(&mut persistence, first.application.application_id, "rejected").unwrap();

    let second: ApplicationResponse = present(&mut persistence, candidate.candidate_id);

    assert_ne!(
        second.application.application_id,
        first.application.application_id
    );
    assert_eq!(second.candidate.status, "presented");
}

#[test]
fn test_result_is_write_once() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    let presented: ApplicationResponse = present(&mut persistence, candidate.candidate_id);
    let application_id: i64 = presented.application.application_id;
    record(&mut persistence, application_id, "accepted").unwrap();

    let err: ApiError = record(&mut persistence, application_id, "rejected").unwrap_err();

    assert!(matches!(err, ApiError::InvalidState { .. }));
    assert_eq!(
        get_application(&mut persistence, application_id)
            .unwrap()
            .status,
        "accepted"
    );
}

#[test]
fn test_pending_is_not_an_outcome() {
    let mut persistence: Persistence = create_persistence();
    let candidate: CandidateInfo = register(&mut persistence, "Ana Silva");
    let presented: ApplicationResponse = present(&mut persistence, candidate.candidate_id);

    let err: ApiError = record(
        &mut persistence,
        presented.application.application_id,
        "pending",
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "outcome"));
}

#[test]
fn test_list_applications_by_candidate() {
    let mut persistence: Persistence = create_persistence();
    let ana: CandidateInfo = register(&mut persistence, "Ana Silva");
    let bruno: CandidateInfo = register(&mut persistence, "Bruno Costa");
    present(&mut persistence, ana.candidate_id);
    present(&mut persistence, bruno.candidate_id);

    let response: ListApplicationsResponse = list_applications(
        &mut persistence,
        &ListApplicationsRequest {
            candidate_id: Some(bruno.candidate_id),
            status: Some(String::from("pending")),
        },
    )
    .unwrap();

    assert_eq!(response.applications.len(), 1);
    assert_eq!(response.applications[0].candidate_id, bruno.candidate_id);
}
