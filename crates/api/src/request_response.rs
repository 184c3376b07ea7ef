// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and timestamps as
//! RFC 3339. The shared detail blocks (`*Info`) are used in both
//! directions.

use haken_audit::AuditEvent;
use haken_domain::{
    Application, Assignment, BankAccount, Candidate, CandidateProfile, ContactDetails,
    DomainError, Employee, EmployeeSummary, EmploymentTerms, HakenTerms, Housing, Insurance,
    JoiningNotice, PersonalDetails, PhysicalDetails, UkeoiTerms, format_date, parse_date,
};
use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, OffsetDateTime};

/// Decodes a field whose key matters on its own.
///
/// Paired with `#[serde(default)]`: a missing key stays `None` and an
/// explicit `null` becomes `Some(None)`.
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, DomainError> {
    value.map(parse_date).transpose()
}

fn format_optional_date(value: Option<Date>) -> Option<String> {
    value.map(format_date)
}

// ============================================================================
// Shared detail blocks
// ============================================================================

/// Personal details of a candidate, notice snapshot or employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetailsInfo {
    pub full_name: String,
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    /// `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    pub visa_type: Option<String>,
    /// `YYYY-MM-DD`.
    pub visa_expiry: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
}

impl PersonalDetailsInfo {
    /// Converts into the domain type, parsing dates.
    ///
    /// # Errors
    ///
    /// Returns an error if a date is not `YYYY-MM-DD`.
    pub fn to_domain(&self) -> Result<PersonalDetails, DomainError> {
        Ok(PersonalDetails {
            full_name: self.full_name.clone(),
            name_kana: self.name_kana.clone(),
            gender: self.gender.clone(),
            nationality: self.nationality.clone(),
            birth_date: parse_optional_date(self.birth_date.as_deref())?,
            visa_type: self.visa_type.clone(),
            visa_expiry: parse_optional_date(self.visa_expiry.as_deref())?,
            postal_code: self.postal_code.clone(),
            address: self.address.clone(),
            building_name: self.building_name.clone(),
        })
    }
}

impl From<&PersonalDetails> for PersonalDetailsInfo {
    fn from(details: &PersonalDetails) -> Self {
        Self {
            full_name: details.full_name.clone(),
            name_kana: details.name_kana.clone(),
            gender: details.gender.clone(),
            nationality: details.nationality.clone(),
            birth_date: format_optional_date(details.birth_date),
            visa_type: details.visa_type.clone(),
            visa_expiry: format_optional_date(details.visa_expiry),
            postal_code: details.postal_code.clone(),
            address: details.address.clone(),
            building_name: details.building_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetailsInfo {
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

impl From<ContactDetailsInfo> for ContactDetails {
    fn from(info: ContactDetailsInfo) -> Self {
        Self {
            phone: info.phone,
            mobile: info.mobile,
            email: info.email,
            emergency_contact_name: info.emergency_contact_name,
            emergency_contact_phone: info.emergency_contact_phone,
        }
    }
}

impl From<&ContactDetails> for ContactDetailsInfo {
    fn from(details: &ContactDetails) -> Self {
        Self {
            phone: details.phone.clone(),
            mobile: details.mobile.clone(),
            email: details.email.clone(),
            emergency_contact_name: details.emergency_contact_name.clone(),
            emergency_contact_phone: details.emergency_contact_phone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalDetailsInfo {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub shoe_size_cm: Option<f64>,
    pub blood_type: Option<String>,
    pub wears_glasses: Option<bool>,
}

impl From<PhysicalDetailsInfo> for PhysicalDetails {
    fn from(info: PhysicalDetailsInfo) -> Self {
        Self {
            height_cm: info.height_cm,
            weight_kg: info.weight_kg,
            shoe_size_cm: info.shoe_size_cm,
            blood_type: info.blood_type,
            wears_glasses: info.wears_glasses,
        }
    }
}

impl From<&PhysicalDetails> for PhysicalDetailsInfo {
    fn from(details: &PhysicalDetails) -> Self {
        Self {
            height_cm: details.height_cm,
            weight_kg: details.weight_kg,
            shoe_size_cm: details.shoe_size_cm,
            blood_type: details.blood_type.clone(),
            wears_glasses: details.wears_glasses,
        }
    }
}

/// Housing arrangement on a notice or employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingInfo {
    /// One of `shataku`, `own`, `rental`, `other`.
    pub housing_type: String,
    #[serde(default)]
    pub apartment_id: Option<i64>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub move_in_date: Option<String>,
}

impl HousingInfo {
    /// Converts into the domain type.
    ///
    /// # Errors
    ///
    /// Returns an error if the housing type is unknown or the move-in date
    /// is malformed.
    pub fn to_domain(&self) -> Result<Housing, DomainError> {
        Ok(Housing {
            housing_type: self.housing_type.parse()?,
            apartment_id: self.apartment_id,
            move_in_date: parse_optional_date(self.move_in_date.as_deref())?,
        })
    }
}

impl From<&Housing> for HousingInfo {
    fn from(housing: &Housing) -> Self {
        Self {
            housing_type: housing.housing_type.as_str().to_string(),
            apartment_id: housing.apartment_id,
            move_in_date: format_optional_date(housing.move_in_date),
        }
    }
}

/// Dispatch terms. Contract-only fields are refused.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HakenTermsInfo {
    pub client_company_id: Option<i64>,
    pub client_company_name: Option<String>,
    pub assignment_location: Option<String>,
    pub assignment_line: Option<String>,
    pub job_description: Option<String>,
    pub hourly_rate: Option<i64>,
    pub billing_rate: Option<i64>,
}

impl From<HakenTermsInfo> for HakenTerms {
    fn from(info: HakenTermsInfo) -> Self {
        Self {
            client_company_id: info.client_company_id,
            client_company_name: info.client_company_name,
            assignment_location: info.assignment_location,
            assignment_line: info.assignment_line,
            job_description: info.job_description,
            hourly_rate: info.hourly_rate,
            billing_rate: info.billing_rate,
        }
    }
}

impl From<&HakenTerms> for HakenTermsInfo {
    fn from(terms: &HakenTerms) -> Self {
        Self {
            client_company_id: terms.client_company_id,
            client_company_name: terms.client_company_name.clone(),
            assignment_location: terms.assignment_location.clone(),
            assignment_line: terms.assignment_line.clone(),
            job_description: terms.job_description.clone(),
            hourly_rate: terms.hourly_rate,
            billing_rate: terms.billing_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BankAccountInfo {
    pub account_name: Option<String>,
    pub bank_name: Option<String>,
    pub branch_number: Option<String>,
    pub branch_name: Option<String>,
    pub account_number: Option<String>,
}

/// Contract terms. Dispatch-only fields are refused.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UkeoiTermsInfo {
    pub job_type: Option<String>,
    pub hourly_rate: Option<i64>,
    pub commute_distance_km: Option<f64>,
    pub transport_allowance: Option<i64>,
    pub bank: BankAccountInfo,
}

impl From<UkeoiTermsInfo> for UkeoiTerms {
    fn from(info: UkeoiTermsInfo) -> Self {
        Self {
            job_type: info.job_type,
            hourly_rate: info.hourly_rate,
            commute_distance_km: info.commute_distance_km,
            transport_allowance: info.transport_allowance,
            bank: BankAccount {
                account_name: info.bank.account_name,
                bank_name: info.bank.bank_name,
                branch_number: info.bank.branch_number,
                branch_name: info.bank.branch_name,
                account_number: info.bank.account_number,
            },
        }
    }
}

impl From<&UkeoiTerms> for UkeoiTermsInfo {
    fn from(terms: &UkeoiTerms) -> Self {
        Self {
            job_type: terms.job_type.clone(),
            hourly_rate: terms.hourly_rate,
            commute_distance_km: terms.commute_distance_km,
            transport_allowance: terms.transport_allowance,
            bank: BankAccountInfo {
                account_name: terms.bank.account_name.clone(),
                bank_name: terms.bank.bank_name.clone(),
                branch_number: terms.bank.branch_number.clone(),
                branch_name: terms.bank.branch_name.clone(),
                account_number: terms.bank.account_number.clone(),
            },
        }
    }
}

/// Employment terms, tagged by `employment_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum EmploymentTermsInfo {
    Haken(HakenTermsInfo),
    Ukeoi(UkeoiTermsInfo),
}

impl From<EmploymentTermsInfo> for EmploymentTerms {
    fn from(info: EmploymentTermsInfo) -> Self {
        match info {
            EmploymentTermsInfo::Haken(terms) => Self::Haken(terms.into()),
            EmploymentTermsInfo::Ukeoi(terms) => Self::Ukeoi(terms.into()),
        }
    }
}

impl From<&EmploymentTerms> for EmploymentTermsInfo {
    fn from(terms: &EmploymentTerms) -> Self {
        match terms {
            EmploymentTerms::Haken(terms) => Self::Haken(terms.into()),
            EmploymentTerms::Ukeoi(terms) => Self::Ukeoi(terms.into()),
        }
    }
}

// ============================================================================
// Candidates
// ============================================================================

/// API request to register a new candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterCandidateRequest {
    pub personal: PersonalDetailsInfo,
    #[serde(default)]
    pub contact: ContactDetailsInfo,
    #[serde(default)]
    pub physical: PhysicalDetailsInfo,
    #[serde(default)]
    pub name_romanji: Option<String>,
    #[serde(default)]
    pub residence_card_number: Option<String>,
    #[serde(default)]
    pub japanese_level: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RegisterCandidateRequest {
    /// Converts into a candidate profile.
    ///
    /// # Errors
    ///
    /// Returns an error if a date is malformed.
    pub fn into_profile(self) -> Result<CandidateProfile, DomainError> {
        Ok(CandidateProfile {
            personal: self.personal.to_domain()?,
            contact: self.contact.into(),
            physical: self.physical.into(),
            name_romanji: self.name_romanji,
            residence_card_number: self.residence_card_number,
            japanese_level: self.japanese_level,
            notes: self.notes,
        })
    }
}

/// API request to edit a candidate's profile.
///
/// Omitted keys are left unchanged; a `null` single-value field clears it.
/// `status` is decoded only so that it can be refused, even when `null`:
/// candidate status moves through the workflow operations, never through
/// an edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCandidateRequest {
    pub personal: Option<PersonalDetailsInfo>,
    pub contact: Option<ContactDetailsInfo>,
    pub physical: Option<PhysicalDetailsInfo>,
    #[serde(deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub name_romanji: Option<Option<String>>,
    #[serde(deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub residence_card_number: Option<Option<String>>,
    #[serde(deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub japanese_level: Option<Option<String>>,
    #[serde(deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
}

/// API request to list candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCandidatesRequest {
    pub status: Option<String>,
    /// Substring of the full name or kana reading.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub candidate_id: i64,
    pub status: String,
    pub personal: PersonalDetailsInfo,
    pub contact: ContactDetailsInfo,
    pub physical: PhysicalDetailsInfo,
    pub name_romanji: Option<String>,
    pub residence_card_number: Option<String>,
    pub japanese_level: Option<String>,
    pub notes: Option<String>,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub version: i64,
}

impl From<&Candidate> for CandidateInfo {
    fn from(candidate: &Candidate) -> Self {
        let profile: &CandidateProfile = &candidate.profile;
        Self {
            candidate_id: candidate.candidate_id,
            status: candidate.status.as_str().to_string(),
            personal: (&profile.personal).into(),
            contact: (&profile.contact).into(),
            physical: (&profile.physical).into(),
            name_romanji: profile.name_romanji.clone(),
            residence_card_number: profile.residence_card_number.clone(),
            japanese_level: profile.japanese_level.clone(),
            notes: profile.notes.clone(),
            created_by: candidate.created_by.clone(),
            created_at: candidate.created_at,
            updated_at: candidate.updated_at,
            version: candidate.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCandidatesResponse {
    pub candidates: Vec<CandidateInfo>,
}

// ============================================================================
// Applications
// ============================================================================

/// API request to present a candidate to a client company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentCandidateRequest {
    pub candidate_id: i64,
    pub client_company_id: i64,
    #[serde(default)]
    pub client_company_name: Option<String>,
}

/// API request to record a presentation's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordApplicationResultRequest {
    /// `accepted` or `rejected`.
    pub outcome: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to list applications.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListApplicationsRequest {
    pub candidate_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub application_id: i64,
    pub candidate_id: i64,
    pub client_company_id: i64,
    pub client_company_name: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub presented_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub result_at: Option<OffsetDateTime>,
    pub result_notes: Option<String>,
    pub created_by: String,
    pub version: i64,
}

impl From<&Application> for ApplicationInfo {
    fn from(application: &Application) -> Self {
        Self {
            application_id: application.application_id,
            candidate_id: application.candidate_id,
            client_company_id: application.client_company_id,
            client_company_name: application.client_company_name.clone(),
            status: application.status.as_str().to_string(),
            presented_at: application.presented_at,
            result_at: application.result_at,
            result_notes: application.result_notes.clone(),
            created_by: application.created_by.clone(),
            version: application.version,
        }
    }
}

/// API response for presentations and recorded results, with the
/// candidate as stored afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub application: ApplicationInfo,
    pub candidate: CandidateInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListApplicationsResponse {
    pub applications: Vec<ApplicationInfo>,
}

// ============================================================================
// Joining notices
// ============================================================================

/// API request to open a draft joining notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJoiningNoticeRequest {
    pub candidate_id: i64,
    #[serde(default)]
    pub application_id: Option<i64>,
    /// Defaults to the candidate's personal details.
    #[serde(default)]
    pub personal: Option<PersonalDetailsInfo>,
    pub housing: HousingInfo,
    pub terms: EmploymentTermsInfo,
}

/// API request to edit a draft joining notice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateJoiningNoticeRequest {
    pub personal: Option<PersonalDetailsInfo>,
    pub housing: Option<HousingInfo>,
    pub terms: Option<EmploymentTermsInfo>,
}

/// API request to reject a pending joining notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectJoiningNoticeRequest {
    pub reason: String,
}

/// API request to list joining notices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListJoiningNoticesRequest {
    pub status: Option<String>,
    pub candidate_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoiningNoticeInfo {
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub application_id: Option<i64>,
    pub status: String,
    pub personal: PersonalDetailsInfo,
    pub housing: HousingInfo,
    pub terms: EmploymentTermsInfo,
    #[serde(with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub approved_at: Option<OffsetDateTime>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub version: i64,
}

impl From<&JoiningNotice> for JoiningNoticeInfo {
    fn from(notice: &JoiningNotice) -> Self {
        Self {
            joining_notice_id: notice.joining_notice_id,
            candidate_id: notice.candidate_id,
            application_id: notice.application_id,
            status: notice.status.as_str().to_string(),
            personal: (&notice.personal).into(),
            housing: (&notice.housing).into(),
            terms: (&notice.terms).into(),
            submitted_at: notice.submitted_at,
            approved_at: notice.approved_at,
            approved_by: notice.approved_by.clone(),
            rejection_reason: notice.rejection_reason.clone(),
            created_by: notice.created_by.clone(),
            created_at: notice.created_at,
            updated_at: notice.updated_at,
            version: notice.version,
        }
    }
}

/// API response for notice creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJoiningNoticeResponse {
    pub joining_notice: JoiningNoticeInfo,
    pub candidate: CandidateInfo,
}

/// API response for an approval: the notice, the employee it produced and
/// the hired candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveJoiningNoticeResponse {
    pub joining_notice: JoiningNoticeInfo,
    pub employee: EmployeeInfo,
    pub candidate: CandidateInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListJoiningNoticesResponse {
    pub joining_notices: Vec<JoiningNoticeInfo>,
}

// ============================================================================
// Employees
// ============================================================================

/// API request to terminate an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminateEmployeeRequest {
    /// `YYYY-MM-DD`.
    pub termination_date: String,
}

/// API request to list employees.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListEmployeesRequest {
    pub status: Option<String>,
    pub employment_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsuranceInfo {
    pub standard_salary: Option<i64>,
    pub health_insurance: Option<i64>,
    pub nursing_insurance: Option<i64>,
    pub pension: Option<i64>,
    pub social_insurance_enrolled: Option<bool>,
}

impl From<&Insurance> for InsuranceInfo {
    fn from(insurance: &Insurance) -> Self {
        Self {
            standard_salary: insurance.standard_salary,
            health_insurance: insurance.health_insurance,
            nursing_insurance: insurance.nursing_insurance,
            pension: insurance.pension,
            social_insurance_enrolled: insurance.social_insurance_enrolled,
        }
    }
}

/// The employee's assignment, tagged by `employment_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum AssignmentInfo {
    Haken {
        terms: HakenTermsInfo,
        profit_margin: Option<i64>,
        insurance: InsuranceInfo,
        status: String,
        start_date: String,
        end_date: Option<String>,
    },
    Ukeoi {
        terms: UkeoiTermsInfo,
        insurance: InsuranceInfo,
        status: String,
        start_date: String,
        end_date: Option<String>,
    },
}

impl From<&Assignment> for AssignmentInfo {
    fn from(assignment: &Assignment) -> Self {
        match assignment {
            Assignment::Haken(haken) => Self::Haken {
                terms: (&haken.terms).into(),
                profit_margin: haken.profit_margin,
                insurance: (&haken.insurance).into(),
                status: haken.status.as_str().to_string(),
                start_date: format_date(haken.start_date),
                end_date: format_optional_date(haken.end_date),
            },
            Assignment::Ukeoi(ukeoi) => Self::Ukeoi {
                terms: (&ukeoi.terms).into(),
                insurance: (&ukeoi.insurance).into(),
                status: ukeoi.status.as_str().to_string(),
                start_date: format_date(ukeoi.start_date),
                end_date: format_optional_date(ukeoi.end_date),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: i64,
    pub employee_number: i64,
    pub joining_notice_id: i64,
    pub candidate_id: i64,
    pub status: String,
    pub personal: PersonalDetailsInfo,
    pub housing: HousingInfo,
    pub hire_date: String,
    pub termination_date: Option<String>,
    pub assignment: AssignmentInfo,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub version: i64,
}

impl From<&Employee> for EmployeeInfo {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            employee_number: employee.employee_number,
            joining_notice_id: employee.joining_notice_id,
            candidate_id: employee.candidate_id,
            status: employee.status.as_str().to_string(),
            personal: (&employee.personal).into(),
            housing: (&employee.housing).into(),
            hire_date: format_date(employee.hire_date),
            termination_date: format_optional_date(employee.termination_date),
            assignment: (&employee.assignment).into(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
            version: employee.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummaryResponse {
    pub active_total: u64,
    pub active_haken: u64,
    pub active_ukeoi: u64,
    pub terminated: u64,
}

impl From<EmployeeSummary> for EmployeeSummaryResponse {
    fn from(summary: EmployeeSummary) -> Self {
        Self {
            active_total: summary.active_total,
            active_haken: summary.active_haken,
            active_ukeoi: summary.active_ukeoi,
            terminated: summary.terminated,
        }
    }
}

// ============================================================================
// Audit
// ============================================================================

/// A single audit event as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    pub event_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before_snapshot: String,
    pub after_snapshot: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl From<&AuditEvent> for AuditEventInfo {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action_name: event.action.name.clone(),
            action_details: event.action.details.clone(),
            before_snapshot: event.before.data.clone(),
            after_snapshot: event.after.data.clone(),
            entity_type: event.entity.entity_type.as_str().to_string(),
            entity_id: event.entity.entity_id,
            occurred_at: event.occurred_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTimelineResponse {
    pub events: Vec<AuditEventInfo>,
}
