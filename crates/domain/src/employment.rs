// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employment offer terms.
//!
//! An offer is either dispatch (haken) or contract (ukeoi). The two carry
//! different fields, so they are modelled as separate structs joined by
//! `EmploymentTerms`; the employment type is derived from the variant
//! rather than stored alongside it.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Kind of employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Dispatch worker placed at a client company.
    Haken,
    /// Contract worker on an outsourced job.
    Ukeoi,
}

impl EmploymentType {
    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Haken => "haken",
            Self::Ukeoi => "ukeoi",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haken" => Ok(Self::Haken),
            "ukeoi" => Ok(Self::Ukeoi),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of housing the worker will live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    /// Company-provided apartment. Requires an apartment id on submission.
    Shataku,
    Own,
    Rental,
    Other,
}

impl HousingType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shataku => "shataku",
            Self::Own => "own",
            Self::Rental => "rental",
            Self::Other => "other",
        }
    }
}

impl FromStr for HousingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shataku" => Ok(Self::Shataku),
            "own" => Ok(Self::Own),
            "rental" => Ok(Self::Rental),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidHousingType(s.to_string())),
        }
    }
}

impl std::fmt::Display for HousingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Housing arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Housing {
    pub housing_type: HousingType,
    /// Company apartment, required for `shataku`.
    pub apartment_id: Option<i64>,
    pub move_in_date: Option<Date>,
}

impl Housing {
    /// Creates housing of the given type with no apartment or date.
    #[must_use]
    pub const fn of_type(housing_type: HousingType) -> Self {
        Self {
            housing_type,
            apartment_id: None,
            move_in_date: None,
        }
    }
}

/// Dispatch placement terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HakenTerms {
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    /// Department the worker is placed in.
    pub assignment_location: Option<String>,
    /// Production line.
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    /// Hourly wage paid to the worker (yen).
    pub hourly_rate: Option<i64>,
    /// Hourly rate billed to the client company (yen).
    pub billing_rate: Option<i64>,
}

impl HakenTerms {
    /// Margin between billing and pay, when both are known.
    #[must_use]
    pub fn profit_margin(&self) -> Option<i64> {
        match (self.billing_rate, self.hourly_rate) {
            (Some(billing), Some(hourly)) => billing.checked_sub(hourly),
            _ => None,
        }
    }
}

/// Bank account wages are paid into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankAccount {
    pub account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
}

/// Contract job terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UkeoiTerms {
    pub job_type: Option<String>,
    /// Hourly wage (yen).
    pub hourly_rate: Option<i64>,
    pub commute_distance_km: Option<f64>,
    /// Monthly transport allowance (yen).
    pub transport_allowance: Option<i64>,
    pub bank: BankAccount,
}

/// Offer terms for one of the two employment types.
#[derive(Debug, Clone, PartialEq)]
pub enum EmploymentTerms {
    Haken(HakenTerms),
    Ukeoi(UkeoiTerms),
}

impl EmploymentTerms {
    /// Returns empty terms for the given employment type.
    #[must_use]
    pub fn empty(employment_type: EmploymentType) -> Self {
        match employment_type {
            EmploymentType::Haken => Self::Haken(HakenTerms::default()),
            EmploymentType::Ukeoi => Self::Ukeoi(UkeoiTerms::default()),
        }
    }

    /// Returns the employment type these terms describe.
    #[must_use]
    pub const fn employment_type(&self) -> EmploymentType {
        match self {
            Self::Haken(_) => EmploymentType::Haken,
            Self::Ukeoi(_) => EmploymentType::Ukeoi,
        }
    }

    /// Returns the worker's hourly rate.
    #[must_use]
    pub const fn hourly_rate(&self) -> Option<i64> {
        match self {
            Self::Haken(terms) => terms.hourly_rate,
            Self::Ukeoi(terms) => terms.hourly_rate,
        }
    }
}
