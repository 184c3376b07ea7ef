// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee and assignment writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use haken_domain::{Assignment, Employee, EmployeeStatus, NewEmployee};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{employees, haken_assignments, ukeoi_assignments};
use crate::error::PersistenceError;
use crate::rows::{EmployeeValues, HakenAssignmentValues, UkeoiAssignmentValues};

/// Inserts an employee and the assignment row matching its employment
/// type.
///
/// # Returns
///
/// The new employee's id and employee number.
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if an employee already exists for
/// the notice, or another error if an insert fails.
pub fn insert_employee(
    conn: &mut SqliteConnection,
    employee: &NewEmployee,
    created_at: OffsetDateTime,
) -> Result<(i64, i64), PersistenceError> {
    let employee_number: i64 = conn.next_employee_number()?;
    let values: EmployeeValues = EmployeeValues::for_insert(employee, employee_number, created_at)?;
    diesel::insert_into(employees::table)
        .values(&values)
        .execute(conn)?;
    let employee_id: i64 = conn.get_last_insert_rowid()?;

    match &employee.assignment {
        Assignment::Haken(assignment) => {
            diesel::insert_into(haken_assignments::table)
                .values(&HakenAssignmentValues::new(employee_id, assignment))
                .execute(conn)?;
        }
        Assignment::Ukeoi(assignment) => {
            diesel::insert_into(ukeoi_assignments::table)
                .values(&UkeoiAssignmentValues::new(employee_id, assignment))
                .execute(conn)?;
        }
    }

    info!(
        employee_id,
        employee_number,
        joining_notice_id = employee.joining_notice_id,
        employment_type = employee.employment_type().as_str(),
        "Inserted employee"
    );
    Ok((employee_id, employee_number))
}

/// Writes a terminated employee and its assignment back.
///
/// The employee row must still be active at the version read.
///
/// # Errors
///
/// Returns `PersistenceError::StaleVersion` if the employee changed since
/// it was read.
pub fn update_terminated_employee(
    conn: &mut SqliteConnection,
    employee: &Employee,
) -> Result<(), PersistenceError> {
    let values: EmployeeValues = EmployeeValues::for_update(employee)?;
    let updated: usize = diesel::update(
        employees::table
            .filter(employees::employee_id.eq(employee.employee_id))
            .filter(employees::version.eq(employee.version))
            .filter(employees::status.eq(EmployeeStatus::Active.as_str())),
    )
    .set(&values)
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::StaleVersion {
            entity: "employee",
            id: employee.employee_id,
            expected_version: employee.version,
        });
    }

    let assignment_rows: usize = match &employee.assignment {
        Assignment::Haken(assignment) => diesel::update(
            haken_assignments::table
                .filter(haken_assignments::employee_id.eq(employee.employee_id)),
        )
        .set(&HakenAssignmentValues::new(employee.employee_id, assignment))
        .execute(conn)?,
        Assignment::Ukeoi(assignment) => diesel::update(
            ukeoi_assignments::table
                .filter(ukeoi_assignments::employee_id.eq(employee.employee_id)),
        )
        .set(&UkeoiAssignmentValues::new(employee.employee_id, assignment))
        .execute(conn)?,
    };

    if assignment_rows != 1 {
        return Err(PersistenceError::ReconstructionError(format!(
            "employee {} has no {} assignment",
            employee.employee_id,
            employee.employment_type()
        )));
    }

    debug!(
        employee_id = employee.employee_id,
        status = employee.status.as_str(),
        "Updated employee"
    );
    Ok(())
}
