// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentations of a candidate to a client company.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Status of an application. Write-once after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting the client company's answer.
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true once a result has been recorded.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus {
                entity: "application",
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The client company's answer to a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationOutcome {
    Accepted,
    Rejected,
}

impl ApplicationOutcome {
    /// Returns the application status this outcome produces.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        match self {
            Self::Accepted => ApplicationStatus::Accepted,
            Self::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl FromStr for ApplicationOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidOutcome(s.to_string())),
        }
    }
}

/// An application that has not yet been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub candidate_id: i64,
    pub client_company_id: i64,
    /// Company name at presentation time, kept for history.
    pub client_company_name: Option<String>,
    pub presented_at: OffsetDateTime,
    pub created_by: String,
}

/// A stored application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub application_id: i64,
    pub candidate_id: i64,
    pub client_company_id: i64,
    pub client_company_name: Option<String>,
    pub presented_at: OffsetDateTime,
    pub status: ApplicationStatus,
    /// Set only once the status leaves `pending`.
    pub result_at: Option<OffsetDateTime>,
    pub result_notes: Option<String>,
    pub created_by: String,
    pub version: i64,
}
