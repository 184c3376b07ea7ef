// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read queries.
//!
//! ## Module Organization
//!
//! - `audit`: Audit event lookup and per-entity timelines
//! - `candidates`: Candidates and applications
//! - `joining_notices`: Joining notices and the open-notice check
//! - `employees`: Employees with their assignment, and headcount summary

pub mod audit;
pub mod candidates;
pub mod employees;
pub mod joining_notices;

use haken_domain::{
    ApplicationStatus, CandidateStatus, EmployeeStatus, EmploymentType, JoiningNoticeStatus,
};

/// Filter for listing candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub status: Option<CandidateStatus>,
    /// Substring matched against the full name and the kana reading.
    pub name: Option<String>,
}

/// Filter for listing applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub candidate_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

/// Filter for listing joining notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoiningNoticeFilter {
    pub status: Option<JoiningNoticeStatus>,
    pub candidate_id: Option<i64>,
}

/// Filter for listing employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub status: Option<EmployeeStatus>,
    pub employment_type: Option<EmploymentType>,
}
