// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_haken_terms, create_test_actor, create_test_cause, create_test_notice,
    create_ukeoi_terms, test_now,
};
use crate::{
    CoreError, MaterializationResult, TerminationResult, materialize_employee, terminate_employee,
};
use haken_domain::{
    Assignment, DomainError, Employee, EmployeeStatus, EmploymentTerms, ErrorKind, Housing,
    HousingType, Insurance, JoiningNotice, JoiningNoticeStatus, PersonalDetails, UkeoiAssignment,
};
use time::macros::{date, datetime};

fn create_approved_notice() -> JoiningNotice {
    let mut notice: JoiningNotice =
        create_test_notice(3, 1, JoiningNoticeStatus::Approved, create_ukeoi_terms());
    notice.approved_at = Some(datetime!(2026-03-05 10:00 UTC));
    notice.approved_by = Some(String::from("manager-1"));
    notice
}

fn create_active_employee() -> Employee {
    let hire_date = date!(2026 - 04 - 01);
    let EmploymentTerms::Ukeoi(terms) = create_ukeoi_terms() else {
        unreachable!()
    };
    Employee {
        employee_id: 9,
        employee_number: 1,
        joining_notice_id: 3,
        candidate_id: 1,
        personal: PersonalDetails::named("Juan Perez"),
        housing: Housing::of_type(HousingType::Own),
        hire_date,
        termination_date: None,
        status: EmployeeStatus::Active,
        assignment: Assignment::Ukeoi(UkeoiAssignment {
            terms,
            insurance: Insurance::default(),
            status: EmployeeStatus::Active,
            start_date: hire_date,
            end_date: None,
        }),
        created_at: test_now(),
        updated_at: test_now(),
        version: 1,
    }
}

// ============================================================================
// Standalone materialization
// ============================================================================

#[test]
fn test_materialize_approved_notice() {
    let notice: JoiningNotice = create_approved_notice();

    let result: MaterializationResult = materialize_employee(
        &notice,
        None,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.new_employee.joining_notice_id, 3);
    assert_eq!(result.new_employee.candidate_id, 1);
    assert_eq!(result.new_employee.personal.full_name, "Juan Perez");
    // Falls back to the approval date
    assert_eq!(result.new_employee.hire_date, date!(2026 - 03 - 05));
    assert_eq!(
        result.new_employee.assignment.status(),
        EmployeeStatus::Active
    );
    assert_eq!(result.events.len(), 1);
}

#[test]
fn test_materialize_rechecks_approval() {
    let notice = create_test_notice(3, 1, JoiningNoticeStatus::Pending, create_haken_terms());

    let err: CoreError = materialize_employee(
        &notice,
        None,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::NoticeNotApproved { .. })
    ));
}

#[test]
fn test_materialize_twice_is_conflict() {
    let notice: JoiningNotice = create_approved_notice();

    let err: CoreError = materialize_employee(
        &notice,
        Some(9),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::EmployeeAlreadyMaterialized {
            joining_notice_id: 3,
            employee_id: 9,
        })
    );
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_terminate_closes_employee_and_assignment() {
    let employee: Employee = create_active_employee();

    let result: TerminationResult = terminate_employee(
        &employee,
        date!(2026 - 09 - 30),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    assert_eq!(result.employee.status, EmployeeStatus::Terminated);
    assert_eq!(result.employee.termination_date, Some(date!(2026 - 09 - 30)));
    assert_eq!(
        result.employee.assignment.status(),
        EmployeeStatus::Terminated
    );
    assert_eq!(
        result.employee.assignment.end_date(),
        Some(date!(2026 - 09 - 30))
    );
    assert_eq!(result.employee.employee_number, employee.employee_number);
}

#[test]
fn test_terminate_on_hire_date_is_allowed() {
    let employee: Employee = create_active_employee();

    let result = terminate_employee(
        &employee,
        employee.hire_date,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(result.is_ok());
}

#[test]
fn test_terminate_before_hire_fails() {
    let employee: Employee = create_active_employee();

    let err: CoreError = terminate_employee(
        &employee,
        date!(2026 - 03 - 31),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::TerminationBeforeHire { .. })
    ));
}

#[test]
fn test_terminate_twice_fails() {
    let employee: Employee = create_active_employee();
    let terminated: Employee = terminate_employee(
        &employee,
        date!(2026 - 09 - 30),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap()
    .employee;

    let err: CoreError = terminate_employee(
        &terminated,
        date!(2026 - 10 - 31),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::EmployeeNotActive { employee_id: 9, .. })
    ));
}
