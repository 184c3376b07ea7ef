// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee materialization and termination.

use crate::error::CoreError;
use crate::event::{EventLog, LifecycleEvent, status_snapshot};
use haken_audit::{Actor, AuditEvent, Cause, StateSnapshot};
use haken_domain::{
    Assignment, DomainError, Employee, EmployeeStatus, EmploymentTerms, HakenAssignment,
    Insurance, JoiningNotice, JoiningNoticeStatus, NewEmployee, UkeoiAssignment,
};
use time::{Date, OffsetDateTime};

/// The result of materializing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializationResult {
    /// The employee to insert. The employee number is allocated on insert.
    pub new_employee: NewEmployee,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// The result of terminating an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminationResult {
    pub employee: Employee,
    pub events: Vec<LifecycleEvent>,
    pub audit_events: Vec<AuditEvent>,
}

/// Builds the employee and its single assignment from an approved notice.
pub(crate) fn build_employee(
    notice: &JoiningNotice,
    hire_date: Date,
    log: &mut EventLog,
) -> NewEmployee {
    let assignment: Assignment = match &notice.terms {
        EmploymentTerms::Haken(terms) => Assignment::Haken(HakenAssignment {
            profit_margin: terms.profit_margin(),
            terms: terms.clone(),
            insurance: Insurance::default(),
            status: EmployeeStatus::Active,
            start_date: hire_date,
            end_date: None,
        }),
        EmploymentTerms::Ukeoi(terms) => Assignment::Ukeoi(UkeoiAssignment {
            terms: terms.clone(),
            insurance: Insurance::default(),
            status: EmployeeStatus::Active,
            start_date: hire_date,
            end_date: None,
        }),
    };

    log.record(
        LifecycleEvent::EmployeeMaterialized {
            joining_notice_id: notice.joining_notice_id,
            candidate_id: notice.candidate_id,
            employment_type: assignment.employment_type(),
            hire_date,
        },
        StateSnapshot::absent(),
        status_snapshot(EmployeeStatus::Active.as_str()),
    );

    NewEmployee {
        joining_notice_id: notice.joining_notice_id,
        candidate_id: notice.candidate_id,
        personal: notice.personal.clone(),
        housing: notice.housing.clone(),
        hire_date,
        assignment,
    }
}

/// Materializes the employee for an already approved notice.
///
/// The hire date is the move-in date, then the approval date, then the
/// current date. The candidate is not touched.
///
/// # Errors
///
/// Returns an error if the notice is not approved, or an employee already
/// exists for it.
pub fn materialize_employee(
    notice: &JoiningNotice,
    existing_employee_id: Option<i64>,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<MaterializationResult, CoreError> {
    if notice.status != JoiningNoticeStatus::Approved {
        return Err(DomainError::NoticeNotApproved {
            joining_notice_id: notice.joining_notice_id,
            status: notice.status.as_str().to_string(),
        }
        .into());
    }
    if let Some(employee_id) = existing_employee_id {
        return Err(DomainError::EmployeeAlreadyMaterialized {
            joining_notice_id: notice.joining_notice_id,
            employee_id,
        }
        .into());
    }

    let hire_date: Date = notice
        .housing
        .move_in_date
        .or_else(|| notice.approved_at.map(OffsetDateTime::date))
        .unwrap_or_else(|| now.date());

    let mut log: EventLog = EventLog::new(actor, cause, now);
    let new_employee: NewEmployee = build_employee(notice, hire_date, &mut log);
    let (events, audit_events) = log.finish();

    Ok(MaterializationResult {
        new_employee,
        events,
        audit_events,
    })
}

/// Terminates an active employee. No row is deleted.
///
/// # Errors
///
/// Returns an error if the employee is not active, or the termination date
/// precedes the hire date.
pub fn terminate_employee(
    employee: &Employee,
    termination_date: Date,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TerminationResult, CoreError> {
    if employee.status != EmployeeStatus::Active {
        return Err(DomainError::EmployeeNotActive {
            employee_id: employee.employee_id,
            status: employee.status.as_str().to_string(),
        }
        .into());
    }
    if termination_date < employee.hire_date {
        return Err(DomainError::TerminationBeforeHire {
            employee_id: employee.employee_id,
            hire_date: employee.hire_date,
            termination_date,
        }
        .into());
    }

    let mut log: EventLog = EventLog::new(actor, cause, now);
    log.record(
        LifecycleEvent::EmployeeTerminated {
            employee_id: employee.employee_id,
            termination_date,
        },
        status_snapshot(employee.status.as_str()),
        status_snapshot(EmployeeStatus::Terminated.as_str()),
    );
    let (events, audit_events) = log.finish();

    Ok(TerminationResult {
        employee: Employee {
            status: EmployeeStatus::Terminated,
            termination_date: Some(termination_date),
            assignment: employee.assignment.clone().terminated(termination_date),
            updated_at: now,
            ..employee.clone()
        },
        events,
        audit_events,
    })
}
