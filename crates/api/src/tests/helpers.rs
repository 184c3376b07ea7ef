// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use haken_audit::Cause;
use haken_domain::Role;
use haken_persistence::Persistence;

use crate::{
    ApproveJoiningNoticeResponse, AuthenticatedActor, BankAccountInfo, CandidateInfo,
    CreateJoiningNoticeRequest, EmploymentTermsInfo, HakenTermsInfo, HousingInfo,
    JoiningNoticeInfo, PersonalDetailsInfo, RegisterCandidateRequest, UkeoiTermsInfo,
    approve_joining_notice, create_joining_notice, register_candidate, submit_joining_notice,
};

pub fn create_test_staff() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("staff-1"), Role::Staff)
}

pub fn create_test_manager() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("manager-1"), Role::Manager)
}

pub fn create_test_viewer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("viewer-1"), Role::Viewer)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-1"), String::from("API request"))
}

pub fn create_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn register_request(full_name: &str) -> RegisterCandidateRequest {
    RegisterCandidateRequest {
        personal: PersonalDetailsInfo {
            full_name: full_name.to_string(),
            nationality: Some(String::from("Brazil")),
            birth_date: Some(String::from("1995-07-14")),
            ..PersonalDetailsInfo::default()
        },
        ..RegisterCandidateRequest::default()
    }
}

pub fn haken_terms() -> EmploymentTermsInfo {
    EmploymentTermsInfo::Haken(HakenTermsInfo {
        client_company_id: Some(7),
        client_company_name: Some(String::from("Yamaha Motor")),
        assignment_location: Some(String::from("Iwata plant")),
        hourly_rate: Some(1_250),
        billing_rate: Some(1_800),
        ..HakenTermsInfo::default()
    })
}

pub fn ukeoi_terms() -> EmploymentTermsInfo {
    EmploymentTermsInfo::Ukeoi(UkeoiTermsInfo {
        job_type: Some(String::from("Welding")),
        hourly_rate: Some(1_300),
        bank: BankAccountInfo {
            account_name: Some(String::from("SILVA ANA")),
            bank_name: Some(String::from("Shizuoka Bank")),
            account_number: Some(String::from("7654321")),
            ..BankAccountInfo::default()
        },
        ..UkeoiTermsInfo::default()
    })
}

pub fn own_housing() -> HousingInfo {
    HousingInfo {
        housing_type: String::from("own"),
        apartment_id: None,
        move_in_date: Some(String::from("2026-04-01")),
    }
}

pub fn notice_request(candidate_id: i64, terms: EmploymentTermsInfo) -> CreateJoiningNoticeRequest {
    CreateJoiningNoticeRequest {
        candidate_id,
        application_id: None,
        personal: None,
        housing: own_housing(),
        terms,
    }
}

pub fn register(persistence: &mut Persistence, full_name: &str) -> CandidateInfo {
    register_candidate(
        persistence,
        register_request(full_name),
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap()
}

pub fn pending_notice(
    persistence: &mut Persistence,
    full_name: &str,
    terms: EmploymentTermsInfo,
) -> JoiningNoticeInfo {
    let candidate: CandidateInfo = register(persistence, full_name);
    let created = create_joining_notice(
        persistence,
        notice_request(candidate.candidate_id, terms),
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap();
    submit_joining_notice(
        persistence,
        created.joining_notice.joining_notice_id,
        &create_test_staff(),
        create_test_cause(),
    )
    .unwrap()
}

pub fn hire(
    persistence: &mut Persistence,
    full_name: &str,
    terms: EmploymentTermsInfo,
) -> ApproveJoiningNoticeResponse {
    let pending: JoiningNoticeInfo = pending_notice(persistence, full_name, terms);
    approve_joining_notice(
        persistence,
        pending.joining_notice_id,
        &create_test_manager(),
        create_test_cause(),
    )
    .unwrap()
}
