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
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the dispatch lifecycle.
//!
//! Translates requests into domain types, enforces roles, drives the core
//! transitions and persistence, and turns every lower-layer error into an
//! `ApiError`.

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    approve_joining_notice, create_joining_notice, get_application, get_audit_event,
    get_audit_timeline, get_candidate, get_employee, get_employee_summary, get_joining_notice,
    list_applications, list_candidates, list_employees, list_joining_notices,
    materialize_employee, present_candidate, record_application_result, register_candidate,
    reject_joining_notice, submit_joining_notice, terminate_employee, update_candidate,
    update_joining_notice,
};
pub use request_response::{
    ApplicationInfo, ApplicationResponse, ApproveJoiningNoticeResponse, AssignmentInfo,
    AuditEventInfo, AuditTimelineResponse, BankAccountInfo, CandidateInfo, ContactDetailsInfo,
    CreateJoiningNoticeRequest, CreateJoiningNoticeResponse, EmployeeInfo,
    EmployeeSummaryResponse, EmploymentTermsInfo, HakenTermsInfo, HousingInfo, InsuranceInfo,
    JoiningNoticeInfo, ListApplicationsRequest, ListApplicationsResponse, ListCandidatesRequest,
    ListCandidatesResponse, ListEmployeesRequest, ListEmployeesResponse,
    ListJoiningNoticesRequest, ListJoiningNoticesResponse, PersonalDetailsInfo,
    PhysicalDetailsInfo, PresentCandidateRequest, RecordApplicationResultRequest,
    RegisterCandidateRequest, RejectJoiningNoticeRequest, TerminateEmployeeRequest,
    UkeoiTermsInfo, UpdateCandidateRequest, UpdateJoiningNoticeRequest,
};
