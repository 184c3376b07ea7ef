// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row shapes and their conversions to and from domain values.
//!
//! `*Row` structs are read with `as_select()`. `*Values` structs carry every
//! column except the primary key and serve both as the insert shape and as
//! the changeset for conditional updates.
//!
//! Timestamps are stored as RFC 3339 text and dates as `YYYY-MM-DD` text.

use diesel::prelude::*;
use haken_domain::{
    Application, ApplicationStatus, Assignment, BankAccount, Candidate, CandidateProfile,
    CandidateStatus, ContactDetails, DomainError, EmployeeStatus, EmploymentTerms,
    EmploymentType, HakenAssignment, HakenTerms, Housing, HousingType, Insurance, JoiningNotice,
    JoiningNoticeStatus, NewApplication, NewCandidate, NewEmployee, NewJoiningNotice,
    PersonalDetails, PhysicalDetails, UkeoiAssignment, UkeoiTerms, format_date, parse_date,
};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use crate::diesel_schema::{
    applications, candidates, employees, haken_assignments, joining_notices, ukeoi_assignments,
};
use crate::error::PersistenceError;

// ============================================================================
// Scalar conversions
// ============================================================================

pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn format_optional_timestamp(
    value: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    value.map(format_timestamp).transpose()
}

pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!("invalid timestamp '{value}': {e}"))
    })
}

fn parse_optional_timestamp(
    value: Option<&str>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    value.map(parse_timestamp).transpose()
}

fn parse_stored_date(value: &str) -> Result<Date, PersistenceError> {
    parse_date(value).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, PersistenceError> {
    value.map(parse_stored_date).transpose()
}

fn optional_date_text(value: Option<Date>) -> Option<String> {
    value.map(format_date)
}

pub fn parse_stored<T>(value: &str) -> Result<T, PersistenceError>
where
    T: FromStr<Err = DomainError>,
{
    T::from_str(value).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// The personal detail columns shared by candidates, notices and employees.
struct PersonalColumns {
    full_name: String,
    name_kana: Option<String>,
    gender: Option<String>,
    nationality: Option<String>,
    birth_date: Option<String>,
    visa_type: Option<String>,
    visa_expiry: Option<String>,
    postal_code: Option<String>,
    address: Option<String>,
    building_name: Option<String>,
}

impl PersonalColumns {
    fn from_details(personal: &PersonalDetails) -> Self {
        Self {
            full_name: personal.full_name.clone(),
            name_kana: personal.name_kana.clone(),
            gender: personal.gender.clone(),
            nationality: personal.nationality.clone(),
            birth_date: optional_date_text(personal.birth_date),
            visa_type: personal.visa_type.clone(),
            visa_expiry: optional_date_text(personal.visa_expiry),
            postal_code: personal.postal_code.clone(),
            address: personal.address.clone(),
            building_name: personal.building_name.clone(),
        }
    }

    fn into_details(self) -> Result<PersonalDetails, PersistenceError> {
        Ok(PersonalDetails {
            full_name: self.full_name,
            name_kana: self.name_kana,
            gender: self.gender,
            nationality: self.nationality,
            birth_date: parse_optional_date(self.birth_date.as_deref())?,
            visa_type: self.visa_type,
            visa_expiry: parse_optional_date(self.visa_expiry.as_deref())?,
            postal_code: self.postal_code,
            address: self.address,
            building_name: self.building_name,
        })
    }
}

fn housing_from_columns(
    housing_type: &str,
    apartment_id: Option<i64>,
    move_in_date: Option<&str>,
) -> Result<Housing, PersistenceError> {
    Ok(Housing {
        housing_type: parse_stored::<HousingType>(housing_type)?,
        apartment_id,
        move_in_date: parse_optional_date(move_in_date)?,
    })
}

// ============================================================================
// Candidates
// ============================================================================

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = candidates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CandidateRow {
    pub candidate_id: i64,
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub shoe_size_cm: Option<f64>,
    pub blood_type: Option<String>,
    pub wears_glasses: Option<bool>,
    pub name_romanji: Option<String>,
    pub residence_card_number: Option<String>,
    pub japanese_level: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl CandidateRow {
    pub fn into_candidate(self) -> Result<Candidate, PersistenceError> {
        let personal: PersonalDetails = PersonalColumns {
            full_name: self.full_name,
            name_kana: self.name_kana,
            gender: self.gender,
            nationality: self.nationality,
            birth_date: self.birth_date,
            visa_type: self.visa_type,
            visa_expiry: self.visa_expiry,
            postal_code: self.postal_code,
            address: self.address,
            building_name: self.building_name,
        }
        .into_details()?;

        Ok(Candidate {
            candidate_id: self.candidate_id,
            profile: CandidateProfile {
                personal,
                contact: ContactDetails {
                    phone: self.phone,
                    mobile: self.mobile,
                    email: self.email,
                    emergency_contact_name: self.emergency_contact_name,
                    emergency_contact_phone: self.emergency_contact_phone,
                },
                physical: PhysicalDetails {
                    height_cm: self.height_cm,
                    weight_kg: self.weight_kg,
                    shoe_size_cm: self.shoe_size_cm,
                    blood_type: self.blood_type,
                    wears_glasses: self.wears_glasses,
                },
                name_romanji: self.name_romanji,
                residence_card_number: self.residence_card_number,
                japanese_level: self.japanese_level,
                notes: self.notes,
            },
            status: parse_stored::<CandidateStatus>(&self.status)?,
            created_by: self.created_by,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            version: self.version,
        })
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = candidates, treat_none_as_null = true)]
pub struct CandidateValues {
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub shoe_size_cm: Option<f64>,
    pub blood_type: Option<String>,
    pub wears_glasses: Option<bool>,
    pub name_romanji: Option<String>,
    pub residence_card_number: Option<String>,
    pub japanese_level: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl CandidateValues {
    fn build(
        profile: &CandidateProfile,
        status: CandidateStatus,
        created_by: &str,
        created_at: OffsetDateTime,
        updated_at: OffsetDateTime,
        version: i64,
    ) -> Result<Self, PersistenceError> {
        let personal: PersonalColumns = PersonalColumns::from_details(&profile.personal);
        Ok(Self {
            full_name: personal.full_name,
            name_kana: personal.name_kana,
            gender: personal.gender,
            nationality: personal.nationality,
            birth_date: personal.birth_date,
            visa_type: personal.visa_type,
            visa_expiry: personal.visa_expiry,
            postal_code: personal.postal_code,
            address: personal.address,
            building_name: personal.building_name,
            phone: profile.contact.phone.clone(),
            mobile: profile.contact.mobile.clone(),
            email: profile.contact.email.clone(),
            emergency_contact_name: profile.contact.emergency_contact_name.clone(),
            emergency_contact_phone: profile.contact.emergency_contact_phone.clone(),
            height_cm: profile.physical.height_cm,
            weight_kg: profile.physical.weight_kg,
            shoe_size_cm: profile.physical.shoe_size_cm,
            blood_type: profile.physical.blood_type.clone(),
            wears_glasses: profile.physical.wears_glasses,
            name_romanji: profile.name_romanji.clone(),
            residence_card_number: profile.residence_card_number.clone(),
            japanese_level: profile.japanese_level.clone(),
            notes: profile.notes.clone(),
            status: status.as_str().to_string(),
            created_by: created_by.to_string(),
            created_at: format_timestamp(created_at)?,
            updated_at: format_timestamp(updated_at)?,
            version,
        })
    }

    pub fn for_insert(candidate: &NewCandidate) -> Result<Self, PersistenceError> {
        Self::build(
            &candidate.profile,
            candidate.status,
            &candidate.created_by,
            candidate.created_at,
            candidate.created_at,
            1,
        )
    }

    /// Values for writing back `candidate`, with the version bumped.
    pub fn for_update(candidate: &Candidate) -> Result<Self, PersistenceError> {
        Self::build(
            &candidate.profile,
            candidate.status,
            &candidate.created_by,
            candidate.created_at,
            candidate.updated_at,
            candidate.version + 1,
        )
    }
}

// ============================================================================
// Applications
// ============================================================================

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ApplicationRow {
    pub application_id: i64,
    pub candidate_id: i64,
    pub client_company_id: i64,
    pub client_company_name: Option<String>,
    pub presented_at: String,
    pub status: String,
    pub result_at: Option<String>,
    pub result_notes: Option<String>,
    pub created_by: String,
    pub version: i64,
}

impl ApplicationRow {
    pub fn into_application(self) -> Result<Application, PersistenceError> {
        Ok(Application {
            application_id: self.application_id,
            candidate_id: self.candidate_id,
            client_company_id: self.client_company_id,
            client_company_name: self.client_company_name,
            presented_at: parse_timestamp(&self.presented_at)?,
            status: parse_stored::<ApplicationStatus>(&self.status)?,
            result_at: parse_optional_timestamp(self.result_at.as_deref())?,
            result_notes: self.result_notes,
            created_by: self.created_by,
            version: self.version,
        })
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = applications, treat_none_as_null = true)]
pub struct ApplicationValues {
    pub candidate_id: i64,
    pub client_company_id: i64,
    pub client_company_name: Option<String>,
    pub presented_at: String,
    pub status: String,
    pub result_at: Option<String>,
    pub result_notes: Option<String>,
    pub created_by: String,
    pub version: i64,
}

impl ApplicationValues {
    pub fn for_insert(application: &NewApplication) -> Result<Self, PersistenceError> {
        Ok(Self {
            candidate_id: application.candidate_id,
            client_company_id: application.client_company_id,
            client_company_name: application.client_company_name.clone(),
            presented_at: format_timestamp(application.presented_at)?,
            status: ApplicationStatus::Pending.as_str().to_string(),
            result_at: None,
            result_notes: None,
            created_by: application.created_by.clone(),
            version: 1,
        })
    }

    /// Values for writing back `application`, with the version bumped.
    pub fn for_update(application: &Application) -> Result<Self, PersistenceError> {
        Ok(Self {
            candidate_id: application.candidate_id,
            client_company_id: application.client_company_id,
            client_company_name: application.client_company_name.clone(),
            presented_at: format_timestamp(application.presented_at)?,
            status: application.status.as_str().to_string(),
            result_at: format_optional_timestamp(application.result_at)?,
            result_notes: application.result_notes.clone(),
            created_by: application.created_by.clone(),
            version: application.version + 1,
        })
    }
}

// ============================================================================
// Joining notices
// ============================================================================

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = joining_notices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JoiningNoticeRow {
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub application_id: Option<i64>,
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub housing_type: String,
    pub apartment_id: Option<i64>,
    pub move_in_date: Option<String>,
    pub employment_type: String,
    pub hourly_rate: Option<i64>,
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    pub assignment_location: Option<String>,
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    pub billing_rate: Option<i64>,
    pub job_type: Option<String>,
    pub commute_distance_km: Option<f64>,
    pub transport_allowance: Option<i64>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
    pub status: String,
    pub submitted_at: Option<String>,
    pub approved_at: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl JoiningNoticeRow {
    /// Rebuilds the notice and checks its workflow fields agree with its
    /// status.
    pub fn into_notice(self) -> Result<JoiningNotice, PersistenceError> {
        let terms: EmploymentTerms = match parse_stored::<EmploymentType>(&self.employment_type)?
        {
            EmploymentType::Haken => EmploymentTerms::Haken(HakenTerms {
                client_company_id: self.client_company_id,
                client_company_name: self.client_company_name,
                assignment_location: self.assignment_location,
                assignment_line: self.assignment_line,
                job_description: self.job_description,
                hourly_rate: self.hourly_rate,
                billing_rate: self.billing_rate,
            }),
            EmploymentType::Ukeoi => EmploymentTerms::Ukeoi(UkeoiTerms {
                job_type: self.job_type,
                hourly_rate: self.hourly_rate,
                commute_distance_km: self.commute_distance_km,
                transport_allowance: self.transport_allowance,
                bank: BankAccount {
                    account_name: self.bank_account_name,
                    bank_name: self.bank_name,
                    branch_number: self.branch_number,
                    branch_name: self.branch_name,
                    account_number: self.account_number,
                },
            }),
        };

        let notice: JoiningNotice = JoiningNotice {
            joining_notice_id: self.joining_notice_id,
            candidate_id: self.candidate_id,
            application_id: self.application_id,
            personal: PersonalColumns {
                full_name: self.full_name,
                name_kana: self.name_kana,
                gender: self.gender,
                nationality: self.nationality,
                birth_date: self.birth_date,
                visa_type: self.visa_type,
                visa_expiry: self.visa_expiry,
                postal_code: self.postal_code,
                address: self.address,
                building_name: self.building_name,
            }
            .into_details()?,
            housing: housing_from_columns(
                &self.housing_type,
                self.apartment_id,
                self.move_in_date.as_deref(),
            )?,
            terms,
            status: parse_stored::<JoiningNoticeStatus>(&self.status)?,
            submitted_at: parse_optional_timestamp(self.submitted_at.as_deref())?,
            approved_at: parse_optional_timestamp(self.approved_at.as_deref())?,
            approved_by: self.approved_by,
            rejection_reason: self.rejection_reason,
            created_by: self.created_by,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            version: self.version,
        };

        notice
            .validate_workflow_fields()
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
        Ok(notice)
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = joining_notices, treat_none_as_null = true)]
pub struct JoiningNoticeValues {
    pub candidate_id: i64,
    pub application_id: Option<i64>,
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub housing_type: String,
    pub apartment_id: Option<i64>,
    pub move_in_date: Option<String>,
    pub employment_type: String,
    pub hourly_rate: Option<i64>,
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    pub assignment_location: Option<String>,
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    pub billing_rate: Option<i64>,
    pub job_type: Option<String>,
    pub commute_distance_km: Option<f64>,
    pub transport_allowance: Option<i64>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
    pub status: String,
    pub submitted_at: Option<String>,
    pub approved_at: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl JoiningNoticeValues {
    /// Builds the values with the offer columns filled from `terms`.
    ///
    /// Columns belonging to the other employment type are left null.
    #[allow(clippy::too_many_lines)]
    fn with_content(
        candidate_id: i64,
        application_id: Option<i64>,
        personal: &PersonalDetails,
        housing: &Housing,
        terms: &EmploymentTerms,
        created_by: &str,
        created_at: OffsetDateTime,
    ) -> Result<Self, PersistenceError> {
        let personal: PersonalColumns = PersonalColumns::from_details(personal);
        let created_at_text: String = format_timestamp(created_at)?;
        let mut values: Self = Self {
            candidate_id,
            application_id,
            full_name: personal.full_name,
            name_kana: personal.name_kana,
            gender: personal.gender,
            nationality: personal.nationality,
            birth_date: personal.birth_date,
            visa_type: personal.visa_type,
            visa_expiry: personal.visa_expiry,
            postal_code: personal.postal_code,
            address: personal.address,
            building_name: personal.building_name,
            housing_type: housing.housing_type.as_str().to_string(),
            apartment_id: housing.apartment_id,
            move_in_date: optional_date_text(housing.move_in_date),
            employment_type: terms.employment_type().as_str().to_string(),
            hourly_rate: terms.hourly_rate(),
            client_company_id: None,
            client_company_name: None,
            assignment_location: None,
            assignment_line: None,
            job_description: None,
            billing_rate: None,
            job_type: None,
            commute_distance_km: None,
            transport_allowance: None,
            bank_account_name: None,
            bank_name: None,
            branch_number: None,
            branch_name: None,
            account_number: None,
            status: JoiningNoticeStatus::Draft.as_str().to_string(),
            submitted_at: None,
            approved_at: None,
            approved_by: None,
            rejection_reason: None,
            created_by: created_by.to_string(),
            created_at: created_at_text.clone(),
            updated_at: created_at_text,
            version: 1,
        };

        match terms {
            EmploymentTerms::Haken(haken) => {
                values.client_company_id = haken.client_company_id;
                values.client_company_name.clone_from(&haken.client_company_name);
                values.assignment_location.clone_from(&haken.assignment_location);
                values.assignment_line.clone_from(&haken.assignment_line);
                values.job_description.clone_from(&haken.job_description);
                values.billing_rate = haken.billing_rate;
            }
            EmploymentTerms::Ukeoi(ukeoi) => {
                values.job_type.clone_from(&ukeoi.job_type);
                values.commute_distance_km = ukeoi.commute_distance_km;
                values.transport_allowance = ukeoi.transport_allowance;
                values.bank_account_name.clone_from(&ukeoi.bank.account_name);
                values.bank_name.clone_from(&ukeoi.bank.bank_name);
                values.branch_number.clone_from(&ukeoi.bank.branch_number);
                values.branch_name.clone_from(&ukeoi.bank.branch_name);
                values.account_number.clone_from(&ukeoi.bank.account_number);
            }
        }

        Ok(values)
    }

    pub fn for_insert(notice: &NewJoiningNotice) -> Result<Self, PersistenceError> {
        Self::with_content(
            notice.candidate_id,
            notice.application_id,
            &notice.personal,
            &notice.housing,
            &notice.terms,
            &notice.created_by,
            notice.created_at,
        )
    }

    /// Values for writing back `notice`, with the version bumped.
    pub fn for_update(notice: &JoiningNotice) -> Result<Self, PersistenceError> {
        let mut values: Self = Self::with_content(
            notice.candidate_id,
            notice.application_id,
            &notice.personal,
            &notice.housing,
            &notice.terms,
            &notice.created_by,
            notice.created_at,
        )?;
        values.status = notice.status.as_str().to_string();
        values.submitted_at = format_optional_timestamp(notice.submitted_at)?;
        values.approved_at = format_optional_timestamp(notice.approved_at)?;
        values.approved_by.clone_from(&notice.approved_by);
        values.rejection_reason.clone_from(&notice.rejection_reason);
        values.updated_at = format_timestamp(notice.updated_at)?;
        values.version = notice.version + 1;
        Ok(values)
    }
}

// ============================================================================
// Employees and assignments
// ============================================================================

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub employee_number: i64,
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub employment_type: String,
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub housing_type: String,
    pub apartment_id: Option<i64>,
    pub move_in_date: Option<String>,
    pub hire_date: String,
    pub termination_date: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl EmployeeRow {
    pub fn into_employee(
        self,
        assignment: Assignment,
    ) -> Result<haken_domain::Employee, PersistenceError> {
        let employment_type: EmploymentType = parse_stored(&self.employment_type)?;
        if employment_type != assignment.employment_type() {
            return Err(PersistenceError::ReconstructionError(format!(
                "employee {} is {employment_type} but has a {} assignment",
                self.employee_id,
                assignment.employment_type()
            )));
        }

        Ok(haken_domain::Employee {
            employee_id: self.employee_id,
            employee_number: self.employee_number,
            joining_notice_id: self.joining_notice_id,
            candidate_id: self.candidate_id,
            personal: PersonalColumns {
                full_name: self.full_name,
                name_kana: self.name_kana,
                gender: self.gender,
                nationality: self.nationality,
                birth_date: self.birth_date,
                visa_type: self.visa_type,
                visa_expiry: self.visa_expiry,
                postal_code: self.postal_code,
                address: self.address,
                building_name: self.building_name,
            }
            .into_details()?,
            housing: housing_from_columns(
                &self.housing_type,
                self.apartment_id,
                self.move_in_date.as_deref(),
            )?,
            hire_date: parse_stored_date(&self.hire_date)?,
            termination_date: parse_optional_date(self.termination_date.as_deref())?,
            status: parse_stored::<EmployeeStatus>(&self.status)?,
            assignment,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            version: self.version,
        })
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = employees, treat_none_as_null = true)]
pub struct EmployeeValues {
    pub employee_number: i64,
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub employment_type: String,
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
    pub housing_type: String,
    pub apartment_id: Option<i64>,
    pub move_in_date: Option<String>,
    pub hire_date: String,
    pub termination_date: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl EmployeeValues {
    #[allow(clippy::too_many_arguments)]
    fn with_content(
        employee_number: i64,
        joining_notice_id: i64,
        candidate_id: i64,
        employment_type: EmploymentType,
        personal: &PersonalDetails,
        housing: &Housing,
        hire_date: Date,
        created_at: OffsetDateTime,
    ) -> Result<Self, PersistenceError> {
        let personal: PersonalColumns = PersonalColumns::from_details(personal);
        let created_at_text: String = format_timestamp(created_at)?;
        Ok(Self {
            employee_number,
            joining_notice_id,
            candidate_id,
            employment_type: employment_type.as_str().to_string(),
            full_name: personal.full_name,
            name_kana: personal.name_kana,
            gender: personal.gender,
            nationality: personal.nationality,
            birth_date: personal.birth_date,
            visa_type: personal.visa_type,
            visa_expiry: personal.visa_expiry,
            postal_code: personal.postal_code,
            address: personal.address,
            building_name: personal.building_name,
            housing_type: housing.housing_type.as_str().to_string(),
            apartment_id: housing.apartment_id,
            move_in_date: optional_date_text(housing.move_in_date),
            hire_date: format_date(hire_date),
            termination_date: None,
            status: EmployeeStatus::Active.as_str().to_string(),
            created_at: created_at_text.clone(),
            updated_at: created_at_text,
            version: 1,
        })
    }

    pub fn for_insert(
        employee: &NewEmployee,
        employee_number: i64,
        created_at: OffsetDateTime,
    ) -> Result<Self, PersistenceError> {
        Self::with_content(
            employee_number,
            employee.joining_notice_id,
            employee.candidate_id,
            employee.employment_type(),
            &employee.personal,
            &employee.housing,
            employee.hire_date,
            created_at,
        )
    }

    /// Values for writing back `employee`, with the version bumped.
    pub fn for_update(employee: &haken_domain::Employee) -> Result<Self, PersistenceError> {
        let mut values: Self = Self::with_content(
            employee.employee_number,
            employee.joining_notice_id,
            employee.candidate_id,
            employee.employment_type(),
            &employee.personal,
            &employee.housing,
            employee.hire_date,
            employee.created_at,
        )?;
        values.termination_date = optional_date_text(employee.termination_date);
        values.status = employee.status.as_str().to_string();
        values.updated_at = format_timestamp(employee.updated_at)?;
        values.version = employee.version + 1;
        Ok(values)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = haken_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HakenAssignmentRow {
    pub haken_assignment_id: i64,
    pub employee_id: i64,
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    pub assignment_location: Option<String>,
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    pub hourly_rate: Option<i64>,
    pub billing_rate: Option<i64>,
    pub profit_margin: Option<i64>,
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl HakenAssignmentRow {
    pub fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        Ok(Assignment::Haken(HakenAssignment {
            terms: HakenTerms {
                client_company_id: self.client_company_id,
                client_company_name: self.client_company_name,
                assignment_location: self.assignment_location,
                assignment_line: self.assignment_line,
                job_description: self.job_description,
                hourly_rate: self.hourly_rate,
                billing_rate: self.billing_rate,
            },
            profit_margin: self.profit_margin,
            insurance: Insurance {
                standard_salary: self.standard_salary,
                health_insurance: self.health_insurance,
                nursing_insurance: self.nursing_insurance,
                pension: self.pension,
                social_insurance_enrolled: self.social_insurance_enrolled,
            },
            status: parse_stored::<EmployeeStatus>(&self.status)?,
            start_date: parse_stored_date(&self.start_date)?,
            end_date: parse_optional_date(self.end_date.as_deref())?,
        }))
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = haken_assignments, treat_none_as_null = true)]
pub struct HakenAssignmentValues {
    pub employee_id: i64,
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    pub assignment_location: Option<String>,
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    pub hourly_rate: Option<i64>,
    pub billing_rate: Option<i64>,
    pub profit_margin: Option<i64>,
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl HakenAssignmentValues {
    pub fn new(employee_id: i64, assignment: &HakenAssignment) -> Self {
        Self {
            employee_id,
            client_company_id: assignment.terms.client_company_id,
            client_company_name: assignment.terms.client_company_name.clone(),
            assignment_location: assignment.terms.assignment_location.clone(),
            assignment_line: assignment.terms.assignment_line.clone(),
            job_description: assignment.terms.job_description.clone(),
            hourly_rate: assignment.terms.hourly_rate,
            billing_rate: assignment.terms.billing_rate,
            profit_margin: assignment.profit_margin,
            standard_salary: assignment.insurance.standard_salary,
            health_insurance: assignment.insurance.health_insurance,
            nursing_insurance: assignment.insurance.nursing_insurance,
            pension: assignment.insurance.pension,
            social_insurance_enrolled: assignment.insurance.social_insurance_enrolled,
            status: assignment.status.as_str().to_string(),
            start_date: format_date(assignment.start_date),
            end_date: optional_date_text(assignment.end_date),
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = ukeoi_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UkeoiAssignmentRow {
    pub ukeoi_assignment_id: i64,
    pub employee_id: i64,
    pub job_type: Option<String>,
    pub hourly_rate: Option<i64>,
    pub commute_distance_km: Option<f64>,
    pub transport_allowance: Option<i64>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl UkeoiAssignmentRow {
    pub fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        Ok(Assignment::Ukeoi(UkeoiAssignment {
            terms: UkeoiTerms {
                job_type: self.job_type,
                hourly_rate: self.hourly_rate,
                commute_distance_km: self.commute_distance_km,
                transport_allowance: self.transport_allowance,
                bank: BankAccount {
                    account_name: self.bank_account_name,
                    bank_name: self.bank_name,
                    branch_number: self.branch_number,
                    branch_name: self.branch_name,
                    account_number: self.account_number,
                },
            },
            insurance: Insurance {
                standard_salary: self.standard_salary,
                health_insurance: self.health_insurance,
                nursing_insurance: self.nursing_insurance,
                pension: self.pension,
                social_insurance_enrolled: self.social_insurance_enrolled,
            },
            status: parse_stored::<EmployeeStatus>(&self.status)?,
            start_date: parse_stored_date(&self.start_date)?,
            end_date: parse_optional_date(self.end_date.as_deref())?,
        }))
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = ukeoi_assignments, treat_none_as_null = true)]
pub struct UkeoiAssignmentValues {
    pub employee_id: i64,
    pub job_type: Option<String>,
    pub hourly_rate: Option<i64>,
    pub commute_distance_km: Option<f64>,
    pub transport_allowance: Option<i64>,
    pub bank_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl UkeoiAssignmentValues {
    pub fn new(employee_id: i64, assignment: &UkeoiAssignment) -> Self {
        Self {
            employee_id,
            job_type: assignment.terms.job_type.clone(),
            hourly_rate: assignment.terms.hourly_rate,
            commute_distance_km: assignment.terms.commute_distance_km,
            transport_allowance: assignment.terms.transport_allowance,
            bank_account_name: assignment.terms.bank.account_name.clone(),
            bank_name: assignment.terms.bank.bank_name.clone(),
            branch_number: assignment.terms.bank.branch_number.clone(),
            branch_name: assignment.terms.bank.branch_name.clone(),
            account_number: assignment.terms.bank.account_number.clone(),
            standard_salary: assignment.insurance.standard_salary,
            health_insurance: assignment.insurance.health_insurance,
            nursing_insurance: assignment.insurance.nursing_insurance,
            pension: assignment.insurance.pension,
            social_insurance_enrolled: assignment.insurance.social_insurance_enrolled,
            status: assignment.status.as_str().to_string(),
            start_date: format_date(assignment.start_date),
            end_date: optional_date_text(assignment.end_date),
        }
    }
}
