// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::Role;

/// Broad classification of a domain error.
///
/// Every `DomainError` maps to exactly one kind. Callers at the boundary
/// use the kind to pick a response status without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// The operation is not allowed from the entity's current state.
    InvalidState,
    /// The actor's role does not permit the operation.
    Permission,
    /// The operation collides with existing data.
    Conflict,
}

impl ErrorKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
            Self::Permission => "permission",
            Self::Conflict => "conflict",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation and lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or blank.
    MissingField {
        /// The entity the field belongs to.
        entity: &'static str,
        /// The field name.
        field: &'static str,
    },
    /// A field value violates a rule.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A status string could not be parsed.
    InvalidStatus {
        /// The status family (e.g. `candidate`).
        entity: &'static str,
        /// The rejected value.
        status: String,
    },
    /// Employment type is not `haken` or `ukeoi`.
    InvalidEmploymentType(String),
    /// Housing type is not one of the known kinds.
    InvalidHousingType(String),
    /// Role string is not a known role.
    InvalidRole(String),
    /// Application outcome is not `accepted` or `rejected`.
    InvalidOutcome(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Candidate does not exist.
    CandidateNotFound(i64),
    /// Application does not exist.
    ApplicationNotFound(i64),
    /// Joining notice does not exist.
    JoiningNoticeNotFound(i64),
    /// Employee does not exist.
    EmployeeNotFound(i64),
    /// A new record references a candidate that does not exist.
    UnknownCandidateReference(i64),
    /// A new record references an application that does not exist.
    UnknownApplicationReference(i64),
    /// The referenced application belongs to a different candidate.
    ApplicationCandidateMismatch {
        /// The application.
        application_id: i64,
        /// The candidate the caller supplied.
        candidate_id: i64,
    },
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The entity family.
        entity: &'static str,
        /// The entity id.
        id: i64,
        /// The current status.
        from: String,
        /// The attempted status.
        to: String,
    },
    /// The candidate cannot be presented from its current status.
    CandidateNotPresentable {
        /// The candidate.
        candidate_id: i64,
        /// The candidate's current status.
        status: String,
    },
    /// The candidate has already been hired.
    CandidateAlreadyHired(i64),
    /// The candidate is presented and the client company has not answered.
    CandidateAwaitingResult(i64),
    /// The referenced application has not been accepted.
    ApplicationNotAccepted {
        /// The application.
        application_id: i64,
        /// The application's current status.
        status: String,
    },
    /// The joining notice can only be edited while in draft.
    NoticeNotEditable {
        /// The joining notice.
        joining_notice_id: i64,
        /// The notice's current status.
        status: String,
    },
    /// The joining notice has not been approved.
    NoticeNotApproved {
        /// The joining notice.
        joining_notice_id: i64,
        /// The notice's current status.
        status: String,
    },
    /// Workflow fields on a joining notice disagree with its status.
    InconsistentNotice {
        /// The joining notice.
        joining_notice_id: i64,
        /// Description of the inconsistency.
        reason: String,
    },
    /// A rejection requires a non-empty reason.
    EmptyRejectionReason,
    /// The employee is not active.
    EmployeeNotActive {
        /// The employee.
        employee_id: i64,
        /// The employee's current status.
        status: String,
    },
    /// Termination date precedes hire date.
    TerminationBeforeHire {
        /// The employee.
        employee_id: i64,
        /// The employee's hire date.
        hire_date: time::Date,
        /// The requested termination date.
        termination_date: time::Date,
    },
    /// The actor's role does not allow the action.
    InsufficientRole {
        /// The action that was attempted.
        action: &'static str,
        /// The actor's role.
        role: Role,
    },
    /// The candidate already has an open joining notice.
    OpenJoiningNoticeExists {
        /// The candidate.
        candidate_id: i64,
        /// The open notice.
        joining_notice_id: i64,
    },
    /// An employee has already been materialized from the joining notice.
    EmployeeAlreadyMaterialized {
        /// The joining notice.
        joining_notice_id: i64,
        /// The existing employee.
        employee_id: i64,
    },
}

impl DomainError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::InvalidField { .. }
            | Self::InvalidStatus { .. }
            | Self::InvalidEmploymentType(_)
            | Self::InvalidHousingType(_)
            | Self::InvalidRole(_)
            | Self::InvalidOutcome(_)
            | Self::DateParseError { .. }
            | Self::UnknownCandidateReference(_)
            | Self::UnknownApplicationReference(_)
            | Self::ApplicationCandidateMismatch { .. }
            | Self::EmptyRejectionReason => ErrorKind::Validation,
            Self::CandidateNotFound(_)
            | Self::ApplicationNotFound(_)
            | Self::JoiningNoticeNotFound(_)
            | Self::EmployeeNotFound(_) => ErrorKind::NotFound,
            Self::InvalidStatusTransition { .. }
            | Self::CandidateNotPresentable { .. }
            | Self::CandidateAlreadyHired(_)
            | Self::CandidateAwaitingResult(_)
            | Self::ApplicationNotAccepted { .. }
            | Self::NoticeNotEditable { .. }
            | Self::NoticeNotApproved { .. }
            | Self::InconsistentNotice { .. }
            | Self::EmployeeNotActive { .. }
            | Self::TerminationBeforeHire { .. } => ErrorKind::InvalidState,
            Self::InsufficientRole { .. } => ErrorKind::Permission,
            Self::OpenJoiningNoticeExists { .. } | Self::EmployeeAlreadyMaterialized { .. } => {
                ErrorKind::Conflict
            }
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "Missing required field '{field}' on {entity}")
            }
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
            Self::InvalidStatus { entity, status } => {
                write!(f, "Invalid {entity} status: '{status}'")
            }
            Self::InvalidEmploymentType(value) => write!(
                f,
                "Invalid employment type: '{value}'. Must be 'haken' or 'ukeoi'"
            ),
            Self::InvalidHousingType(value) => write!(f, "Invalid housing type: '{value}'"),
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::InvalidOutcome(value) => write!(
                f,
                "Invalid application outcome: '{value}'. Must be 'accepted' or 'rejected'"
            ),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::CandidateNotFound(id) => write!(f, "Candidate {id} not found"),
            Self::ApplicationNotFound(id) => write!(f, "Application {id} not found"),
            Self::JoiningNoticeNotFound(id) => write!(f, "Joining notice {id} not found"),
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::UnknownCandidateReference(id) => {
                write!(f, "Referenced candidate {id} does not exist")
            }
            Self::UnknownApplicationReference(id) => {
                write!(f, "Referenced application {id} does not exist")
            }
            Self::ApplicationCandidateMismatch {
                application_id,
                candidate_id,
            } => write!(
                f,
                "Application {application_id} does not belong to candidate {candidate_id}"
            ),
            Self::InvalidStatusTransition {
                entity,
                id,
                from,
                to,
            } => write!(
                f,
                "Cannot transition {entity} {id} from '{from}' to '{to}'"
            ),
            Self::CandidateNotPresentable {
                candidate_id,
                status,
            } => write!(
                f,
                "Candidate {candidate_id} cannot be presented while '{status}'"
            ),
            Self::CandidateAlreadyHired(id) => write!(f, "Candidate {id} has already been hired"),
            Self::CandidateAwaitingResult(id) => write!(
                f,
                "Candidate {id} is awaiting an application result from the client company"
            ),
            Self::ApplicationNotAccepted {
                application_id,
                status,
            } => write!(
                f,
                "Application {application_id} is '{status}', expected 'accepted'"
            ),
            Self::NoticeNotEditable {
                joining_notice_id,
                status,
            } => write!(
                f,
                "Joining notice {joining_notice_id} is '{status}'; only draft notices can be edited"
            ),
            Self::NoticeNotApproved {
                joining_notice_id,
                status,
            } => write!(
                f,
                "Joining notice {joining_notice_id} is '{status}', expected 'approved'"
            ),
            Self::InconsistentNotice {
                joining_notice_id,
                reason,
            } => write!(f, "Joining notice {joining_notice_id} is inconsistent: {reason}"),
            Self::EmptyRejectionReason => write!(f, "A rejection reason is required"),
            Self::EmployeeNotActive {
                employee_id,
                status,
            } => write!(f, "Employee {employee_id} is '{status}', expected 'active'"),
            Self::TerminationBeforeHire {
                employee_id,
                hire_date,
                termination_date,
            } => write!(
                f,
                "Termination date {termination_date} precedes hire date {hire_date} for employee {employee_id}"
            ),
            Self::InsufficientRole { action, role } => write!(
                f,
                "Role '{}' is not permitted to {action}",
                role.as_str()
            ),
            Self::OpenJoiningNoticeExists {
                candidate_id,
                joining_notice_id,
            } => write!(
                f,
                "Candidate {candidate_id} already has open joining notice {joining_notice_id}"
            ),
            Self::EmployeeAlreadyMaterialized {
                joining_notice_id,
                employee_id,
            } => write!(
                f,
                "Joining notice {joining_notice_id} already produced employee {employee_id}"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
