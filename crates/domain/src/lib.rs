// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod application;
mod candidate;
mod employee;
mod employment;
mod error;
mod joining_notice;
mod person;
mod role;
mod validation;

#[cfg(test)]
mod tests;

pub use application::{Application, ApplicationOutcome, ApplicationStatus, NewApplication};
pub use candidate::{Candidate, CandidatePatch, CandidateProfile, CandidateStatus, NewCandidate};
pub use employee::{
    Assignment, Employee, EmployeeStatus, EmployeeSummary, HakenAssignment, Insurance,
    NewEmployee, UkeoiAssignment,
};
pub use employment::{
    BankAccount, EmploymentTerms, EmploymentType, HakenTerms, Housing, HousingType, UkeoiTerms,
};
pub use error::{DomainError, ErrorKind};
pub use joining_notice::{JoiningNotice, JoiningNoticeStatus, NewJoiningNotice};
pub use person::{ContactDetails, PersonalDetails, PhysicalDetails};
pub use role::Role;
pub use validation::{
    DATE_FORMAT, format_date, parse_date, validate_candidate_profile, validate_client_company,
    validate_notice_for_submission, validate_personal_details, validate_rejection_reason,
    validate_terms,
};
