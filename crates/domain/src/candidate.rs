// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate records and their workflow status.
//!
//! Candidates are never deleted. Their status is advanced only by the
//! presentation, result, joining notice and approval transitions.

use crate::error::DomainError;
use crate::person::{ContactDetails, PersonalDetails, PhysicalDetails};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Workflow status of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// Registered, not yet presented to a client company.
    Registered,
    /// Presented to a client company, awaiting the result.
    Presented,
    /// Accepted by the client company.
    Accepted,
    /// Rejected by the client company. May be presented again.
    Rejected,
    /// A joining notice is in progress.
    Processing,
    /// Converted to an employee.
    Hired,
}

impl CandidateStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Presented => "presented",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Processing => "processing",
            Self::Hired => "hired",
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Hired)
    }

    /// Returns true if a candidate in this status may be presented.
    #[must_use]
    pub const fn is_presentable(&self) -> bool {
        matches!(self, Self::Registered | Self::Rejected)
    }

    /// Returns true if the lifecycle permits moving to `next`.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        match self {
            Self::Registered => matches!(next, Self::Presented | Self::Processing),
            Self::Presented => matches!(next, Self::Accepted | Self::Rejected | Self::Processing),
            Self::Accepted => matches!(next, Self::Processing),
            Self::Rejected => matches!(next, Self::Presented | Self::Processing),
            Self::Processing => matches!(next, Self::Hired),
            Self::Hired => false,
        }
    }
}

impl FromStr for CandidateStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(Self::Registered),
            "presented" => Ok(Self::Presented),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "processing" => Ok(Self::Processing),
            "hired" => Ok(Self::Hired),
            _ => Err(DomainError::InvalidStatus {
                entity: "candidate",
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything recorded about a candidate apart from workflow state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateProfile {
    pub personal: PersonalDetails,
    pub contact: ContactDetails,
    pub physical: PhysicalDetails,
    /// Name in latin script.
    pub name_romanji: Option<String>,
    pub residence_card_number: Option<String>,
    /// Japanese proficiency level (e.g. `N3`).
    pub japanese_level: Option<String>,
    pub notes: Option<String>,
}

/// A change to a candidate's profile.
///
/// Groups that are `None` are left untouched. The single-value fields are
/// doubly optional: `None` leaves the value alone, `Some(None)` clears it.
/// There is no status field; status moves only through workflow
/// transitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidatePatch {
    pub personal: Option<PersonalDetails>,
    pub contact: Option<ContactDetails>,
    pub physical: Option<PhysicalDetails>,
    pub name_romanji: Option<Option<String>>,
    pub residence_card_number: Option<Option<String>>,
    pub japanese_level: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl CandidatePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.personal.is_none()
            && self.contact.is_none()
            && self.physical.is_none()
            && self.name_romanji.is_none()
            && self.residence_card_number.is_none()
            && self.japanese_level.is_none()
            && self.notes.is_none()
    }

    /// Applies this patch to a profile, producing the updated profile.
    #[must_use]
    pub fn apply_to(self, profile: &CandidateProfile) -> CandidateProfile {
        CandidateProfile {
            personal: self.personal.unwrap_or_else(|| profile.personal.clone()),
            contact: self.contact.unwrap_or_else(|| profile.contact.clone()),
            physical: self.physical.unwrap_or_else(|| profile.physical.clone()),
            name_romanji: self
                .name_romanji
                .unwrap_or_else(|| profile.name_romanji.clone()),
            residence_card_number: self
                .residence_card_number
                .unwrap_or_else(|| profile.residence_card_number.clone()),
            japanese_level: self
                .japanese_level
                .unwrap_or_else(|| profile.japanese_level.clone()),
            notes: self.notes.unwrap_or_else(|| profile.notes.clone()),
        }
    }
}

/// A candidate that has not yet been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub profile: CandidateProfile,
    pub status: CandidateStatus,
    pub created_by: String,
    pub created_at: OffsetDateTime,
}

/// A stored candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub candidate_id: i64,
    pub profile: CandidateProfile,
    pub status: CandidateStatus,
    pub created_by: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// Row version used for optimistic concurrency.
    pub version: i64,
}

impl Candidate {
    /// Returns the candidate's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.profile.personal.full_name
    }

    /// Checks that moving to `next` is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the lifecycle does
    /// not allow the move.
    pub fn ensure_transition(&self, next: CandidateStatus) -> Result<(), DomainError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                entity: "candidate",
                id: self.candidate_id,
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}
