// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use haken::CoreError;
use haken_domain::{DomainError, ErrorKind};
use haken_persistence::PersistenceError;
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The roles that may perform the action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The roles that may perform the action.
        required_role: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not allowed from the resource's current state.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// A human-readable description of the state problem.
        message: String,
    },
    /// The operation collides with existing data or a concurrent change.
    #[error("Conflict: {message}")]
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Names the field a validation error refers to.
fn validation_field(err: &DomainError) -> String {
    match err {
        DomainError::MissingField { field, .. } | DomainError::InvalidField { field, .. } => {
            (*field).to_string()
        }
        DomainError::InvalidStatus { .. } => String::from("status"),
        DomainError::InvalidEmploymentType(_) => String::from("employment_type"),
        DomainError::InvalidHousingType(_) => String::from("housing_type"),
        DomainError::InvalidRole(_) => String::from("actor_role"),
        DomainError::InvalidOutcome(_) => String::from("outcome"),
        DomainError::DateParseError { .. } => String::from("date"),
        DomainError::UnknownCandidateReference(_) => String::from("candidate_id"),
        DomainError::UnknownApplicationReference(_)
        | DomainError::ApplicationCandidateMismatch { .. } => String::from("application_id"),
        DomainError::EmptyRejectionReason => String::from("reason"),
        _ => String::from("request"),
    }
}

/// Names the resource a not-found error refers to.
const fn resource_type(err: &DomainError) -> &'static str {
    match err {
        DomainError::ApplicationNotFound(_) => "Application",
        DomainError::JoiningNoticeNotFound(_) => "Joining notice",
        DomainError::EmployeeNotFound(_) => "Employee",
        _ => "Candidate",
    }
}

/// Translates a domain error into an API error.
///
/// The error kind decides the API variant; the message is the domain
/// error's own description.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err.kind() {
        ErrorKind::Validation => ApiError::InvalidInput {
            field: validation_field(&err),
            message,
        },
        ErrorKind::NotFound => ApiError::ResourceNotFound {
            resource_type: resource_type(&err).to_string(),
            message,
        },
        ErrorKind::InvalidState => ApiError::InvalidState { message },
        ErrorKind::Permission => match err {
            DomainError::InsufficientRole { action, .. } => ApiError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("manager, admin or super_admin"),
            },
            _ => ApiError::Unauthorized {
                action: String::from("unknown"),
                required_role: String::from("manager, admin or super_admin"),
            },
        },
        ErrorKind::Conflict => ApiError::Conflict { message },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Optimistic-concurrency misses and uniqueness violations surface as
/// conflicts; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::StaleVersion { .. } | PersistenceError::Conflict(_) => {
            ApiError::Conflict {
                message: err.to_string(),
            }
        }
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::EventNotFound(event_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Audit event"),
            message: format!("Audit event {event_id} does not exist"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}
