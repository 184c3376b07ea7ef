// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employees and their assignments.
//!
//! Every employee owns exactly one assignment, and the assignment's variant
//! fixes the employment type for the life of the record.

use crate::employment::{EmploymentType, HakenTerms, Housing, UkeoiTerms};
use crate::error::DomainError;
use crate::person::PersonalDetails;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Terminated,
}

impl EmployeeStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Terminated => "terminated",
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "terminated" => Ok(Self::Terminated),
            _ => Err(DomainError::InvalidStatus {
                entity: "employee",
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social insurance figures (monthly, yen).
///
/// Filled in by payroll after hire; empty at materialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Insurance {
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
}

/// Dispatch assignment details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HakenAssignment {
    pub terms: HakenTerms,
    /// Billing rate minus hourly rate.
    pub profit_margin: Option<i64>,
    pub insurance: Insurance,
    pub status: EmployeeStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

/// Contract assignment details.
#[derive(Debug, Clone, PartialEq)]
pub struct UkeoiAssignment {
    pub terms: UkeoiTerms,
    pub insurance: Insurance,
    pub status: EmployeeStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

/// The single assignment an employee owns.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    Haken(HakenAssignment),
    Ukeoi(UkeoiAssignment),
}

impl Assignment {
    /// Returns the employment type of the assignment.
    #[must_use]
    pub const fn employment_type(&self) -> EmploymentType {
        match self {
            Self::Haken(_) => EmploymentType::Haken,
            Self::Ukeoi(_) => EmploymentType::Ukeoi,
        }
    }

    #[must_use]
    pub const fn status(&self) -> EmployeeStatus {
        match self {
            Self::Haken(assignment) => assignment.status,
            Self::Ukeoi(assignment) => assignment.status,
        }
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<Date> {
        match self {
            Self::Haken(assignment) => assignment.end_date,
            Self::Ukeoi(assignment) => assignment.end_date,
        }
    }

    /// Returns the haken assignment, if this is one.
    #[must_use]
    pub const fn as_haken(&self) -> Option<&HakenAssignment> {
        match self {
            Self::Haken(assignment) => Some(assignment),
            Self::Ukeoi(_) => None,
        }
    }

    /// Returns the ukeoi assignment, if this is one.
    #[must_use]
    pub const fn as_ukeoi(&self) -> Option<&UkeoiAssignment> {
        match self {
            Self::Haken(_) => None,
            Self::Ukeoi(assignment) => Some(assignment),
        }
    }

    /// Closes the assignment on the given date.
    #[must_use]
    pub fn terminated(self, end_date: Date) -> Self {
        match self {
            Self::Haken(assignment) => Self::Haken(HakenAssignment {
                status: EmployeeStatus::Terminated,
                end_date: Some(end_date),
                ..assignment
            }),
            Self::Ukeoi(assignment) => Self::Ukeoi(UkeoiAssignment {
                status: EmployeeStatus::Terminated,
                end_date: Some(end_date),
                ..assignment
            }),
        }
    }
}

/// An employee produced by the materializer and not yet stored.
///
/// The employee number is allocated by storage at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub personal: PersonalDetails,
    pub housing: Housing,
    pub hire_date: Date,
    pub assignment: Assignment,
}

impl NewEmployee {
    #[must_use]
    pub const fn employment_type(&self) -> EmploymentType {
        self.assignment.employment_type()
    }
}

/// A stored employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: i64,
    /// Stable, unique, never reused.
    pub employee_number: i64,
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub personal: PersonalDetails,
    pub housing: Housing,
    pub hire_date: Date,
    pub termination_date: Option<Date>,
    pub status: EmployeeStatus,
    pub assignment: Assignment,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub version: i64,
}

impl Employee {
    #[must_use]
    pub const fn employment_type(&self) -> EmploymentType {
        self.assignment.employment_type()
    }
}

/// Headcount statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub active_total: u64,
    pub active_haken: u64,
    pub active_ukeoi: u64,
    pub terminated: u64,
}
