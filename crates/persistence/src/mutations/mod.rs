// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `audit`: Audit event persistence
//! - `candidates`: Candidate and application rows
//! - `joining_notices`: Joining notice rows
//! - `employees`: Employee and assignment rows
//! - `lifecycle`: Orchestration (`persist_registration`, `persist_approval`, ...)
//!
//! Every write to an existing row is conditional on the version that was
//! read. A write that matches no row fails with
//! `PersistenceError::StaleVersion`.

pub mod audit;
pub mod candidates;
pub mod employees;
pub mod joining_notices;
pub mod lifecycle;

pub use lifecycle::{
    PersistedApplicationResult, PersistedApproval, PersistedNoticeCreation, PersistedPresentation,
    persist_application_result, persist_approval, persist_candidate_update,
    persist_materialization, persist_notice_creation, persist_notice_update,
    persist_presentation, persist_registration, persist_termination,
};
