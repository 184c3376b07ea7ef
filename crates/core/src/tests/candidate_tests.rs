// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_actor, create_test_candidate, create_test_cause, create_test_profile, test_now,
};
use crate::{
    CandidateResult, CoreError, LifecycleEvent, RegistrationResult, register_candidate,
    update_candidate,
};
use haken_audit::EntityType;
use haken_domain::{
    CandidatePatch, CandidateStatus, ContactDetails, DomainError, ErrorKind, PersonalDetails,
};

#[test]
fn test_register_sets_registered_status() {
    let result: RegistrationResult = register_candidate(
        create_test_profile("Juan Perez"),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_candidate.status, CandidateStatus::Registered);
    assert_eq!(result.new_candidate.created_by, "staff-123");
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.audit_events.len(), 1);

    let audit = &result.audit_events[0];
    assert_eq!(audit.action.name, "RegisterCandidate");
    assert_eq!(audit.entity.entity_type, EntityType::Candidate);
    assert_eq!(audit.entity.entity_id, None);
    assert_eq!(audit.after.data, "status=registered");
}

#[test]
fn test_register_requires_full_name() {
    let result = register_candidate(
        create_test_profile(""),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    let err: CoreError = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::MissingField {
            field: "full_name",
            ..
        })
    ));
}

#[test]
fn test_update_preserves_status_and_version() {
    let candidate = create_test_candidate(7, CandidateStatus::Presented);
    let patch: CandidatePatch = CandidatePatch {
        contact: Some(ContactDetails {
            mobile: Some(String::from("090-1234-5678")),
            ..ContactDetails::default()
        }),
        ..CandidatePatch::default()
    };

    let result: CandidateResult = update_candidate(
        &candidate,
        patch,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.candidate.status, CandidateStatus::Presented);
    assert_eq!(result.candidate.version, candidate.version);
    assert_eq!(
        result.candidate.profile.contact.mobile.as_deref(),
        Some("090-1234-5678")
    );
    // Untouched groups survive
    assert_eq!(result.candidate.full_name(), "Juan Perez");
    assert_eq!(
        result.events,
        vec![LifecycleEvent::CandidateUpdated { candidate_id: 7 }]
    );
}

#[test]
fn test_update_can_clear_single_value_fields() {
    let mut candidate = create_test_candidate(7, CandidateStatus::Registered);
    candidate.profile.notes = Some(String::from("Prefers night shift"));
    candidate.profile.japanese_level = Some(String::from("N3"));
    let patch: CandidatePatch = CandidatePatch {
        notes: Some(None),
        ..CandidatePatch::default()
    };

    let result: CandidateResult = update_candidate(
        &candidate,
        patch,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.candidate.profile.notes, None);
    assert_eq!(
        result.candidate.profile.japanese_level.as_deref(),
        Some("N3")
    );
}

#[test]
fn test_update_rejects_blank_name() {
    let candidate = create_test_candidate(7, CandidateStatus::Registered);
    let patch: CandidatePatch = CandidatePatch {
        personal: Some(PersonalDetails::named(" ")),
        ..CandidatePatch::default()
    };

    let result = update_candidate(
        &candidate,
        patch,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(result.is_err());
}

#[test]
fn test_empty_update_is_rejected() {
    let candidate = create_test_candidate(7, CandidateStatus::Registered);

    let result = update_candidate(
        &candidate,
        CandidatePatch::default(),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
}
