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

//! Lifecycle transitions for candidates, applications, joining notices and
//! employees.
//!
//! Every function here is pure: it receives the current entities, checks
//! the rules, and returns the new entity state along with the lifecycle
//! events and audit events it produced. Nothing is written until the
//! caller stores the result.

mod application;
mod candidate;
mod context;
mod employee;
mod error;
mod event;
mod joining_notice;

#[cfg(test)]
mod tests;

pub use application::{
    ApplicationResult, PresentationResult, present_candidate, record_application_result,
};
pub use candidate::{CandidateResult, RegistrationResult, register_candidate, update_candidate};
pub use context::ActorContext;
pub use employee::{
    MaterializationResult, TerminationResult, materialize_employee, terminate_employee,
};
pub use error::CoreError;
pub use event::LifecycleEvent;
pub use joining_notice::{
    ApprovalResult, NoticeContext, NoticeCreation, NoticeDraft, NoticePatch, NoticeResult,
    approve_joining_notice, create_joining_notice, reject_joining_notice, submit_joining_notice,
    update_joining_notice_draft,
};
