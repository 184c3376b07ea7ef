// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ActorContext;
use haken_audit::{Actor, Cause};
use haken_domain::{
    Application, ApplicationStatus, BankAccount, Candidate, CandidateProfile, CandidateStatus,
    EmploymentTerms, HakenTerms, Housing, HousingType, JoiningNotice, JoiningNoticeStatus,
    PersonalDetails, Role, UkeoiTerms,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-123"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Office request"))
}

pub fn create_test_manager() -> ActorContext {
    ActorContext::new(String::from("manager-1"), Role::Manager)
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 09:00 UTC)
}

pub fn create_test_profile(full_name: &str) -> CandidateProfile {
    CandidateProfile {
        personal: PersonalDetails::named(full_name),
        ..CandidateProfile::default()
    }
}

pub fn create_test_candidate(candidate_id: i64, status: CandidateStatus) -> Candidate {
    Candidate {
        candidate_id,
        profile: create_test_profile("Juan Perez"),
        status,
        created_by: String::from("staff-123"),
        created_at: test_now(),
        updated_at: test_now(),
        version: 1,
    }
}

pub fn create_test_application(
    application_id: i64,
    candidate_id: i64,
    status: ApplicationStatus,
) -> Application {
    Application {
        application_id,
        candidate_id,
        client_company_id: 1,
        client_company_name: Some(String::from("Toyota Boshoku")),
        presented_at: test_now(),
        status,
        result_at: None,
        result_notes: None,
        created_by: String::from("staff-123"),
        version: 1,
    }
}

pub fn create_haken_terms() -> EmploymentTerms {
    EmploymentTerms::Haken(HakenTerms {
        client_company_id: Some(1),
        client_company_name: Some(String::from("Toyota Boshoku")),
        assignment_location: Some(String::from("Assembly")),
        assignment_line: Some(String::from("Line 3")),
        job_description: Some(String::from("Seat assembly")),
        hourly_rate: Some(1_200),
        billing_rate: Some(1_700),
    })
}

pub fn create_ukeoi_terms() -> EmploymentTerms {
    EmploymentTerms::Ukeoi(UkeoiTerms {
        job_type: Some(String::from("Painting")),
        hourly_rate: Some(1_150),
        commute_distance_km: Some(4.5),
        transport_allowance: Some(5_000),
        bank: BankAccount {
            account_name: Some(String::from("PEREZ JUAN")),
            bank_name: Some(String::from("Hamamatsu Shinkin")),
            branch_number: Some(String::from("012")),
            branch_name: Some(String::from("Ekimae")),
            account_number: Some(String::from("1234567")),
        },
    })
}

pub fn create_test_notice(
    joining_notice_id: i64,
    candidate_id: i64,
    status: JoiningNoticeStatus,
    terms: EmploymentTerms,
) -> JoiningNotice {
    let submitted_at: Option<OffsetDateTime> = match status {
        JoiningNoticeStatus::Draft => None,
        _ => Some(test_now()),
    };
    JoiningNotice {
        joining_notice_id,
        candidate_id,
        application_id: None,
        personal: PersonalDetails::named("Juan Perez"),
        housing: Housing::of_type(HousingType::Own),
        terms,
        status,
        submitted_at,
        approved_at: None,
        approved_by: None,
        rejection_reason: None,
        created_by: String::from("staff-123"),
        created_at: test_now(),
        updated_at: test_now(),
        version: 1,
    }
}
