// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{Assignment, Employee, EmployeeStatus, EmployeeSummary, EmploymentType};
use num_traits::ToPrimitive;

use crate::diesel_schema::{employees, haken_assignments, ukeoi_assignments};
use crate::error::PersistenceError;
use crate::queries::EmployeeFilter;
use crate::rows::{EmployeeRow, HakenAssignmentRow, UkeoiAssignmentRow, parse_stored};

/// Loads the assignment belonging to an employee row.
///
/// The employee's stored employment type decides which table is read.
fn load_assignment(
    conn: &mut SqliteConnection,
    row: &EmployeeRow,
) -> Result<Assignment, PersistenceError> {
    let missing = || {
        PersistenceError::ReconstructionError(format!(
            "employee {} has no {} assignment",
            row.employee_id, row.employment_type
        ))
    };

    match parse_stored::<EmploymentType>(&row.employment_type)? {
        EmploymentType::Haken => haken_assignments::table
            .filter(haken_assignments::employee_id.eq(row.employee_id))
            .select(HakenAssignmentRow::as_select())
            .first::<HakenAssignmentRow>(conn)
            .optional()?
            .ok_or_else(missing)?
            .into_assignment(),
        EmploymentType::Ukeoi => ukeoi_assignments::table
            .filter(ukeoi_assignments::employee_id.eq(row.employee_id))
            .select(UkeoiAssignmentRow::as_select())
            .first::<UkeoiAssignmentRow>(conn)
            .optional()?
            .ok_or_else(missing)?
            .into_assignment(),
    }
}

fn assemble(conn: &mut SqliteConnection, row: EmployeeRow) -> Result<Employee, PersistenceError> {
    let assignment: Assignment = load_assignment(conn, &row)?;
    row.into_employee(assignment)
}

/// Finds an employee by id, together with its assignment.
///
/// # Errors
///
/// Returns an error if the query fails or the employee has no matching
/// assignment.
pub fn find_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .find(employee_id)
        .select(EmployeeRow::as_select())
        .first::<EmployeeRow>(conn)
        .optional()?;

    row.map(|row| assemble(conn, row)).transpose()
}

/// Loads an employee that must exist.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if there is no such employee.
pub fn load_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Employee, PersistenceError> {
    find_employee(conn, employee_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("employee {employee_id}")))
}

/// Returns the id of the employee created from a joining notice, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_employee_id_for_notice(
    conn: &mut SqliteConnection,
    joining_notice_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    Ok(employees::table
        .filter(employees::joining_notice_id.eq(joining_notice_id))
        .select(employees::employee_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Lists employees matching the filter in employee number order.
///
/// # Errors
///
/// Returns an error if the query fails or an employee cannot be
/// reconstructed.
pub fn list_employees(
    conn: &mut SqliteConnection,
    filter: EmployeeFilter,
) -> Result<Vec<Employee>, PersistenceError> {
    let mut query = employees::table
        .order(employees::employee_number.asc())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(employees::status.eq(status.as_str()));
    }
    if let Some(employment_type) = filter.employment_type {
        query = query.filter(employees::employment_type.eq(employment_type.as_str()));
    }

    let rows: Vec<EmployeeRow> = query
        .select(EmployeeRow::as_select())
        .load::<EmployeeRow>(conn)?;

    rows.into_iter().map(|row| assemble(conn, row)).collect()
}

fn count_employees(
    conn: &mut SqliteConnection,
    status: EmployeeStatus,
    employment_type: Option<EmploymentType>,
) -> Result<u64, PersistenceError> {
    let mut query = employees::table
        .filter(employees::status.eq(status.as_str()))
        .into_boxed();
    if let Some(employment_type) = employment_type {
        query = query.filter(employees::employment_type.eq(employment_type.as_str()));
    }

    let count: i64 = query.count().get_result::<i64>(conn)?;
    count.to_u64().ok_or_else(|| {
        PersistenceError::ReconstructionError(format!("negative employee count {count}"))
    })
}

/// Computes headcount statistics.
///
/// # Errors
///
/// Returns an error if a count query fails.
pub fn employee_summary(conn: &mut SqliteConnection) -> Result<EmployeeSummary, PersistenceError> {
    Ok(EmployeeSummary {
        active_total: count_employees(conn, EmployeeStatus::Active, None)?,
        active_haken: count_employees(conn, EmployeeStatus::Active, Some(EmploymentType::Haken))?,
        active_ukeoi: count_employees(conn, EmployeeStatus::Active, Some(EmploymentType::Ukeoi))?,
        terminated: count_employees(conn, EmployeeStatus::Terminated, None)?,
    })
}
