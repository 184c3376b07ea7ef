// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haken::{
    ApprovalResult, CandidateResult, MaterializationResult, NoticeResult, approve_joining_notice,
    materialize_employee, update_candidate,
};
use haken_domain::{
    Candidate, CandidatePatch, CandidateStatus, Employee, EmployeeStatus, EmployeeSummary,
    EmploymentType, JoiningNotice, JoiningNoticeStatus,
};
use time::macros::date;

use super::helpers::{
    approve, create_haken_terms, create_notice, create_test_actor, create_test_cause,
    create_test_manager, create_ukeoi_terms, hire, register, submit, test_now,
};
use crate::error::PersistenceError;
use crate::{Persistence, PersistedApproval, PersistedNoticeCreation};

fn pending_notice(persistence: &mut Persistence, full_name: &str) -> (JoiningNotice, Candidate) {
    let candidate: Candidate = register(persistence, full_name);
    let created: PersistedNoticeCreation =
        create_notice(persistence, &candidate, create_haken_terms());
    let pending: JoiningNotice = submit(persistence, &created.notice);
    (pending, created.candidate)
}

// ============================================================================
// Approval
// ============================================================================

#[test]
fn test_haken_approval_materializes_employee_and_hires_candidate() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let approved: PersistedApproval = hire(&mut persistence, "Juan Perez", create_haken_terms());

    assert_eq!(approved.notice.status, JoiningNoticeStatus::Approved);
    assert_eq!(approved.notice.approved_by.as_deref(), Some("manager-1"));
    assert_eq!(approved.notice.approved_at, Some(test_now()));
    assert_eq!(approved.candidate.status, CandidateStatus::Hired);

    let employee: &Employee = &approved.employee;
    assert_eq!(employee.employment_type(), EmploymentType::Haken);
    assert_eq!(employee.status, EmployeeStatus::Active);
    assert_eq!(employee.joining_notice_id, approved.notice.joining_notice_id);
    assert_eq!(employee.employee_number, 1);
    assert_eq!(employee.hire_date, date!(2026 - 03 - 01));
    assert_eq!(employee.personal.full_name, "Juan Perez");

    let assignment = employee.assignment.as_haken().unwrap();
    assert_eq!(assignment.profit_margin, Some(500));
    assert_eq!(assignment.start_date, employee.hire_date);
    assert_eq!(assignment.status, EmployeeStatus::Active);
    assert!(employee.assignment.as_ukeoi().is_none());
}

#[test]
fn test_ukeoi_approval_writes_ukeoi_assignment_only() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let approved: PersistedApproval = hire(&mut persistence, "Ana Lima", create_ukeoi_terms());

    let employee: Employee = persistence
        .find_employee(approved.employee.employee_id)
        .unwrap()
        .unwrap();
    assert_eq!(employee.employment_type(), EmploymentType::Ukeoi);
    assert!(employee.assignment.as_haken().is_none());
    let assignment = employee.assignment.as_ukeoi().unwrap();
    assert_eq!(assignment.terms.bank.account_number.as_deref(), Some("1234567"));
    assert_eq!(assignment.terms.commute_distance_km, Some(4.5));
    assert_eq!(assignment.insurance.standard_salary, None);
}

#[test]
fn test_second_approval_from_same_read_is_stale_and_creates_nothing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let (pending, candidate) = pending_notice(&mut persistence, "Juan Perez");

    let first: ApprovalResult = approve_joining_notice(
        &pending,
        &candidate,
        None,
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let second: ApprovalResult = first.clone();

    persistence.persist_approval(&first).unwrap();
    let err: PersistenceError = persistence.persist_approval(&second).unwrap_err();

    assert!(matches!(
        err,
        PersistenceError::StaleVersion {
            entity: "joining_notice",
            ..
        }
    ));
    let summary: EmployeeSummary = persistence.employee_summary().unwrap();
    assert_eq!(summary.active_total, 1);
}

#[test]
fn test_failed_approval_rolls_back_notice_and_employee() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let (pending, candidate) = pending_notice(&mut persistence, "Juan Perez");

    // The candidate changes after the approver read it.
    let edit: CandidateResult = update_candidate(
        &candidate,
        CandidatePatch {
            notes: Some(Some(String::from("Prefers night shift"))),
            ..CandidatePatch::default()
        },
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let fresh_candidate: Candidate = persistence.persist_candidate_update(&edit).unwrap();

    let stale: ApprovalResult = approve_joining_notice(
        &pending,
        &candidate,
        None,
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let err: PersistenceError = persistence.persist_approval(&stale).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::StaleVersion {
            entity: "candidate",
            ..
        }
    ));

    let stored: JoiningNotice = persistence
        .find_joining_notice(pending.joining_notice_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, JoiningNoticeStatus::Pending);
    assert!(stored.approved_by.is_none());
    assert!(
        persistence
            .find_employee_id_for_notice(pending.joining_notice_id)
            .unwrap()
            .is_none()
    );

    // Retrying against fresh state succeeds and the number was not consumed.
    let approved: PersistedApproval = approve(&mut persistence, &stored, &fresh_candidate);
    assert_eq!(approved.employee.employee_number, 1);
}

#[test]
fn test_employee_numbers_are_unique_and_increasing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let numbers: Vec<i64> = ["Juan Perez", "Maria Santos", "Ana Lima", "Kenji Sato"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let terms = if i % 2 == 0 {
                create_haken_terms()
            } else {
                create_ukeoi_terms()
            };
            hire(&mut persistence, name, terms).employee.employee_number
        })
        .collect();

    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

// ============================================================================
// Standalone materialization
// ============================================================================

/// Stores an approved notice without an employee, as happens when the
/// notice was approved outside the normal approval path.
fn approved_without_employee(persistence: &mut Persistence) -> JoiningNotice {
    let (pending, candidate) = pending_notice(persistence, "Juan Perez");
    let approval: ApprovalResult = approve_joining_notice(
        &pending,
        &candidate,
        None,
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let notice_only: NoticeResult = NoticeResult {
        notice: approval.notice,
        events: Vec::new(),
        audit_events: Vec::new(),
    };
    persistence
        .persist_notice_update(&notice_only, JoiningNoticeStatus::Pending)
        .unwrap()
}

#[test]
fn test_standalone_materialization_creates_one_employee() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let approved: JoiningNotice = approved_without_employee(&mut persistence);

    let result: MaterializationResult = materialize_employee(
        &approved,
        None,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let employee: Employee = persistence
        .persist_materialization(&result, test_now())
        .unwrap();

    assert_eq!(employee.joining_notice_id, approved.joining_notice_id);
    assert_eq!(employee.employee_number, 1);
    assert_eq!(
        persistence
            .find_employee_id_for_notice(approved.joining_notice_id)
            .unwrap(),
        Some(employee.employee_id)
    );
}

#[test]
fn test_repeated_materialization_is_a_conflict() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let approved: PersistedApproval = hire(&mut persistence, "Juan Perez", create_haken_terms());

    // The core is not told about the existing employee; storage still refuses.
    let result: MaterializationResult = materialize_employee(
        &approved.notice,
        None,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    let err: PersistenceError = persistence
        .persist_materialization(&result, test_now())
        .unwrap_err();

    assert!(matches!(err, PersistenceError::Conflict(_)));
    let summary: EmployeeSummary = persistence.employee_summary().unwrap();
    assert_eq!(summary.active_total, 1);
}
