// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Joining notices: the approval document that precedes employment.
//!
//! A notice moves `draft -> pending -> approved | rejected`. Only draft
//! and pending notices have outward transitions; approved and rejected
//! are terminal. Approval is the only route to creating an employee.

use crate::employment::{EmploymentTerms, EmploymentType, Housing};
use crate::error::DomainError;
use crate::person::PersonalDetails;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Status of a joining notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoiningNoticeStatus {
    /// Being prepared; editable.
    Draft,
    /// Submitted and awaiting a manager's decision.
    Pending,
    Approved,
    Rejected,
}

impl JoiningNoticeStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if this status has no outward transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Returns true for statuses that count as an open notice.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Returns true if the workflow permits moving to `next`.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        match self {
            Self::Draft => matches!(next, Self::Pending),
            Self::Pending => matches!(next, Self::Approved | Self::Rejected),
            Self::Approved | Self::Rejected => false,
        }
    }
}

impl FromStr for JoiningNoticeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus {
                entity: "joining_notice",
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for JoiningNoticeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A joining notice that has not yet been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJoiningNotice {
    pub candidate_id: i64,
    pub application_id: Option<i64>,
    pub personal: PersonalDetails,
    pub housing: Housing,
    pub terms: EmploymentTerms,
    pub created_by: String,
    pub created_at: OffsetDateTime,
}

/// A stored joining notice.
#[derive(Debug, Clone, PartialEq)]
pub struct JoiningNotice {
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    /// Absent when the candidate was presented informally.
    pub application_id: Option<i64>,
    pub personal: PersonalDetails,
    pub housing: Housing,
    pub terms: EmploymentTerms,
    pub status: JoiningNoticeStatus,
    pub submitted_at: Option<OffsetDateTime>,
    pub approved_at: Option<OffsetDateTime>,
    /// User id of the approving manager.
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_by: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub version: i64,
}

impl JoiningNotice {
    /// Returns the employment type of the offer.
    #[must_use]
    pub const fn employment_type(&self) -> EmploymentType {
        self.terms.employment_type()
    }

    /// Checks that moving to `next` is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the workflow does
    /// not allow the move.
    pub fn ensure_transition(&self, next: JoiningNoticeStatus) -> Result<(), DomainError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                entity: "joining_notice",
                id: self.joining_notice_id,
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }

    /// Checks that the workflow fields agree with the status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InconsistentNotice` describing the first
    /// disagreement found.
    pub fn validate_workflow_fields(&self) -> Result<(), DomainError> {
        let inconsistent = |reason: &str| DomainError::InconsistentNotice {
            joining_notice_id: self.joining_notice_id,
            reason: reason.to_string(),
        };

        let decided_by_approval: bool = self.approved_at.is_some() || self.approved_by.is_some();

        match self.status {
            JoiningNoticeStatus::Draft => {
                if self.submitted_at.is_some() {
                    return Err(inconsistent("draft notice has a submission time"));
                }
                if decided_by_approval || self.rejection_reason.is_some() {
                    return Err(inconsistent("draft notice carries a decision"));
                }
            }
            JoiningNoticeStatus::Pending => {
                if self.submitted_at.is_none() {
                    return Err(inconsistent("pending notice has no submission time"));
                }
                if decided_by_approval || self.rejection_reason.is_some() {
                    return Err(inconsistent("pending notice carries a decision"));
                }
            }
            JoiningNoticeStatus::Approved => {
                if self.approved_at.is_none() || self.approved_by.is_none() {
                    return Err(inconsistent("approved notice lacks approver or time"));
                }
                if self.rejection_reason.is_some() {
                    return Err(inconsistent("approved notice has a rejection reason"));
                }
            }
            JoiningNoticeStatus::Rejected => {
                if self
                    .rejection_reason
                    .as_deref()
                    .is_none_or(|reason| reason.trim().is_empty())
                {
                    return Err(inconsistent("rejected notice has no reason"));
                }
                if decided_by_approval {
                    return Err(inconsistent("rejected notice has approval fields"));
                }
            }
        }

        Ok(())
    }
}
