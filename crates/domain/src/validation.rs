// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::candidate::CandidateProfile;
use crate::employment::{EmploymentTerms, HousingType};
use crate::error::DomainError;
use crate::joining_notice::JoiningNotice;
use crate::person::{PersonalDetails, PhysicalDetails};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used at every boundary (`YYYY-MM-DD`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Validates the personal details block.
///
/// # Errors
///
/// Returns an error if:
/// - The full name is blank
/// - The visa expires before the person was born
pub fn validate_personal_details(
    entity: &'static str,
    personal: &PersonalDetails,
) -> Result<(), DomainError> {
    // Rule: full name is required
    if personal.full_name.trim().is_empty() {
        return Err(DomainError::MissingField {
            entity,
            field: "full_name",
        });
    }

    if let (Some(birth), Some(expiry)) = (personal.birth_date, personal.visa_expiry) {
        if expiry < birth {
            return Err(DomainError::InvalidField {
                field: "visa_expiry",
                reason: format!("visa expiry {expiry} precedes birth date {birth}"),
            });
        }
    }

    Ok(())
}

fn validate_positive_measure(field: &'static str, value: Option<f64>) -> Result<(), DomainError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(DomainError::InvalidField {
            field,
            reason: format!("must be a positive number, got {v}"),
        }),
        _ => Ok(()),
    }
}

fn validate_physical_details(physical: &PhysicalDetails) -> Result<(), DomainError> {
    validate_positive_measure("height_cm", physical.height_cm)?;
    validate_positive_measure("weight_kg", physical.weight_kg)?;
    validate_positive_measure("shoe_size_cm", physical.shoe_size_cm)?;
    Ok(())
}

/// Validates a candidate profile.
///
/// # Errors
///
/// Returns an error if:
/// - The personal details are invalid
/// - Any physical measurement is not positive
/// - The email address has no `@`
pub fn validate_candidate_profile(profile: &CandidateProfile) -> Result<(), DomainError> {
    validate_personal_details("candidate", &profile.personal)?;
    validate_physical_details(&profile.physical)?;

    if let Some(email) = profile.contact.email.as_deref().filter(|e| !e.contains('@')) {
        return Err(DomainError::InvalidField {
            field: "email",
            reason: format!("'{email}' is not an email address"),
        });
    }

    Ok(())
}

/// Validates the client company a candidate is presented to.
///
/// # Errors
///
/// Returns an error if the company id is not positive.
pub fn validate_client_company(client_company_id: i64) -> Result<(), DomainError> {
    if client_company_id <= 0 {
        return Err(DomainError::InvalidField {
            field: "client_company_id",
            reason: format!("must be positive, got {client_company_id}"),
        });
    }
    Ok(())
}

/// Validates and normalizes a rejection reason.
///
/// # Errors
///
/// Returns `DomainError::EmptyRejectionReason` if the reason is blank.
pub fn validate_rejection_reason(reason: &str) -> Result<String, DomainError> {
    let trimmed: &str = reason.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyRejectionReason);
    }
    Ok(trimmed.to_string())
}

fn validate_rate(field: &'static str, value: Option<i64>) -> Result<(), DomainError> {
    match value {
        Some(v) if v < 0 => Err(DomainError::InvalidField {
            field,
            reason: format!("must not be negative, got {v}"),
        }),
        _ => Ok(()),
    }
}

/// Validates numeric fields of the offer terms.
///
/// # Errors
///
/// Returns an error if any rate or allowance is negative, or the commute
/// distance is negative.
pub fn validate_terms(terms: &EmploymentTerms) -> Result<(), DomainError> {
    match terms {
        EmploymentTerms::Haken(haken) => {
            validate_rate("hourly_rate", haken.hourly_rate)?;
            validate_rate("billing_rate", haken.billing_rate)?;
        }
        EmploymentTerms::Ukeoi(ukeoi) => {
            validate_rate("hourly_rate", ukeoi.hourly_rate)?;
            validate_rate("transport_allowance", ukeoi.transport_allowance)?;
            if let Some(distance) = ukeoi
                .commute_distance_km
                .filter(|d| !d.is_finite() || *d < 0.0)
            {
                return Err(DomainError::InvalidField {
                    field: "commute_distance_km",
                    reason: format!("must not be negative, got {distance}"),
                });
            }
        }
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validates that a joining notice is complete enough to be submitted.
///
/// # Errors
///
/// Returns an error if:
/// - The full name is missing
/// - Company housing is selected without an apartment
/// - A contract offer lacks the bank account name or number
/// - Any rate is negative
pub fn validate_notice_for_submission(notice: &JoiningNotice) -> Result<(), DomainError> {
    validate_personal_details("joining_notice", &notice.personal)?;

    // Rule: company housing must name the apartment
    if notice.housing.housing_type == HousingType::Shataku && notice.housing.apartment_id.is_none()
    {
        return Err(DomainError::MissingField {
            entity: "joining_notice",
            field: "apartment_id",
        });
    }

    // Rule: contract workers are paid by transfer
    if let EmploymentTerms::Ukeoi(ukeoi) = &notice.terms {
        if is_blank(ukeoi.bank.account_name.as_deref()) {
            return Err(DomainError::MissingField {
                entity: "joining_notice",
                field: "bank_account_name",
            });
        }
        if is_blank(ukeoi.bank.account_number.as_deref()) {
            return Err(DomainError::MissingField {
                entity: "joining_notice",
                field: "account_number",
            });
        }
    }

    validate_terms(&notice.terms)
}
