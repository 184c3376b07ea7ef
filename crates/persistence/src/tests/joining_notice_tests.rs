// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haken::{
    NoticeContext, NoticeCreation, NoticeDraft, NoticePatch, NoticeResult, create_joining_notice,
    reject_joining_notice, update_joining_notice_draft,
};
use haken_domain::{
    ApplicationOutcome, Candidate, CandidateStatus, EmploymentTerms, EmploymentType, Housing,
    HousingType, JoiningNotice, JoiningNoticeStatus,
};
use time::macros::date;

use super::helpers::{
    create_haken_terms, create_notice, create_test_actor, create_test_cause, create_test_manager,
    create_ukeoi_terms, present, record_result, register, submit, test_now,
};
use crate::error::PersistenceError;
use crate::{JoiningNoticeFilter, Persistence, PersistedNoticeCreation};

#[test]
fn test_creation_stores_draft_and_moves_candidate_to_processing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");

    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());

    assert_eq!(created.notice.status, JoiningNoticeStatus::Draft);
    assert_eq!(created.notice.employment_type(), EmploymentType::Haken);
    assert_eq!(created.notice.terms, create_haken_terms());
    assert_eq!(created.notice.personal.full_name, "Juan Perez");
    assert!(created.notice.submitted_at.is_none());
    assert_eq!(created.candidate.status, CandidateStatus::Processing);
}

#[test]
fn test_creation_from_accepted_application_links_it() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let presented = present(&mut persistence, &candidate);
    let accepted = record_result(
        &mut persistence,
        &presented.application,
        &presented.candidate,
        ApplicationOutcome::Accepted,
    );

    let result: NoticeCreation = create_joining_notice(
        NoticeDraft {
            candidate_id: candidate.candidate_id,
            application_id: Some(accepted.application.application_id),
            personal: None,
            housing: Housing::of_type(HousingType::Own),
            terms: create_haken_terms(),
        },
        NoticeContext {
            candidate: Some(&accepted.candidate),
            application: Some(&accepted.application),
            open_notice_id: None,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let created: PersistedNoticeCreation = persistence.persist_notice_creation(&result).unwrap();

    assert_eq!(
        created.notice.application_id,
        Some(accepted.application.application_id)
    );
    assert_eq!(created.candidate.status, CandidateStatus::Processing);
}

#[test]
fn test_second_open_notice_is_refused_by_storage() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());

    // Build a second creation without telling the core about the open notice.
    let result: NoticeCreation = create_joining_notice(
        NoticeDraft {
            candidate_id: candidate.candidate_id,
            application_id: None,
            personal: None,
            housing: Housing::of_type(HousingType::Own),
            terms: create_ukeoi_terms(),
        },
        NoticeContext {
            candidate: Some(&created.candidate),
            application: None,
            open_notice_id: None,
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let err: PersistenceError = persistence.persist_notice_creation(&result).unwrap_err();

    assert!(matches!(err, PersistenceError::Conflict(_)));
    assert_eq!(
        persistence
            .find_open_notice_id(candidate.candidate_id)
            .unwrap(),
        Some(created.notice.joining_notice_id)
    );
    let notices: Vec<JoiningNotice> = persistence
        .list_joining_notices(JoiningNoticeFilter::default())
        .unwrap();
    assert_eq!(notices.len(), 1);
}

#[test]
fn test_draft_update_can_switch_employment_type() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());

    let patch: NoticePatch = NoticePatch {
        housing: Some(Housing {
            housing_type: HousingType::Shataku,
            apartment_id: Some(12),
            move_in_date: Some(date!(2026 - 04 - 01)),
        }),
        terms: Some(create_ukeoi_terms()),
        ..NoticePatch::default()
    };
    let result: NoticeResult = update_joining_notice_draft(
        &created.notice,
        patch,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let updated: JoiningNotice = persistence
        .persist_notice_update(&result, JoiningNoticeStatus::Draft)
        .unwrap();

    assert_eq!(updated.employment_type(), EmploymentType::Ukeoi);
    assert_eq!(updated.terms, create_ukeoi_terms());
    assert_eq!(updated.housing.apartment_id, Some(12));
    assert_eq!(updated.housing.move_in_date, Some(date!(2026 - 04 - 01)));
    assert_eq!(updated.version, created.notice.version + 1);
}

#[test]
fn test_switching_type_clears_the_other_variant_columns() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_ukeoi_terms());

    let result: NoticeResult = update_joining_notice_draft(
        &created.notice,
        NoticePatch {
            terms: Some(create_haken_terms()),
            ..NoticePatch::default()
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    persistence
        .persist_notice_update(&result, JoiningNoticeStatus::Draft)
        .unwrap();

    let stored: JoiningNotice = persistence
        .find_joining_notice(created.notice.joining_notice_id)
        .unwrap()
        .unwrap();
    assert!(matches!(stored.terms, EmploymentTerms::Haken(_)));
    assert_eq!(stored.terms, create_haken_terms());
}

#[test]
fn test_submit_records_submission_time() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());

    let pending: JoiningNotice = submit(&mut persistence, &created.notice);

    assert_eq!(pending.status, JoiningNoticeStatus::Pending);
    assert_eq!(pending.submitted_at, Some(test_now()));
}

#[test]
fn test_rejection_stores_reason_and_closes_notice() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());
    let pending: JoiningNotice = submit(&mut persistence, &created.notice);

    let result: NoticeResult = reject_joining_notice(
        &pending,
        "insufficient experience",
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let rejected: JoiningNotice = persistence
        .persist_notice_update(&result, JoiningNoticeStatus::Pending)
        .unwrap();

    assert_eq!(rejected.status, JoiningNoticeStatus::Rejected);
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("insufficient experience")
    );
    assert!(rejected.approved_at.is_none());
    assert!(
        persistence
            .find_open_notice_id(candidate.candidate_id)
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .find_employee_id_for_notice(rejected.joining_notice_id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_update_with_wrong_prior_status_is_stale() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let candidate: Candidate = register(&mut persistence, "Juan Perez");
    let created: PersistedNoticeCreation =
        create_notice(&mut persistence, &candidate, create_haken_terms());
    let pending: JoiningNotice = submit(&mut persistence, &created.notice);

    // A draft edit prepared before the submission landed.
    let result: NoticeResult = update_joining_notice_draft(
        &created.notice,
        NoticePatch {
            terms: Some(create_ukeoi_terms()),
            ..NoticePatch::default()
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let err: PersistenceError = persistence
        .persist_notice_update(&result, JoiningNoticeStatus::Draft)
        .unwrap_err();

    assert!(matches!(
        err,
        PersistenceError::StaleVersion {
            entity: "joining_notice",
            ..
        }
    ));
    let stored: JoiningNotice = persistence
        .find_joining_notice(pending.joining_notice_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, JoiningNoticeStatus::Pending);
    assert_eq!(stored.terms, create_haken_terms());
}

#[test]
fn test_list_notices_filters_by_status_and_candidate() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let juan: Candidate = register(&mut persistence, "Juan Perez");
    let maria: Candidate = register(&mut persistence, "Maria Santos");
    let juan_notice: PersistedNoticeCreation =
        create_notice(&mut persistence, &juan, create_haken_terms());
    create_notice(&mut persistence, &maria, create_ukeoi_terms());
    submit(&mut persistence, &juan_notice.notice);

    let pending: Vec<JoiningNotice> = persistence
        .list_joining_notices(JoiningNoticeFilter {
            status: Some(JoiningNoticeStatus::Pending),
            candidate_id: None,
        })
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].candidate_id, juan.candidate_id);

    let marias: Vec<JoiningNotice> = persistence
        .list_joining_notices(JoiningNoticeFilter {
            status: None,
            candidate_id: Some(maria.candidate_id),
        })
        .unwrap();
    assert_eq!(marias.len(), 1);
    assert_eq!(marias[0].status, JoiningNoticeStatus::Draft);
}
