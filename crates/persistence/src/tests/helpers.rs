// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haken::{
    ActorContext, NoticeContext, NoticeDraft, approve_joining_notice, create_joining_notice,
    present_candidate, record_application_result, register_candidate, submit_joining_notice,
};
use haken_audit::{Actor, Cause};
use haken_domain::{
    Application, ApplicationOutcome, BankAccount, Candidate, CandidateProfile, EmploymentTerms,
    HakenTerms, Housing, HousingType, JoiningNotice, PersonalDetails, Role, UkeoiTerms,
};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{
    Persistence, PersistedApplicationResult, PersistedApproval, PersistedNoticeCreation,
    PersistedPresentation,
};

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

pub fn register(persistence: &mut Persistence, full_name: &str) -> Candidate {
    let profile: CandidateProfile = CandidateProfile {
        personal: PersonalDetails::named(full_name),
        ..CandidateProfile::default()
    };
    let result = register_candidate(profile, create_test_actor(), create_test_cause(), test_now())
        .unwrap();
    persistence.persist_registration(&result).unwrap()
}

pub fn present(persistence: &mut Persistence, candidate: &Candidate) -> PersistedPresentation {
    let result = present_candidate(
        candidate,
        1,
        Some(String::from("Toyota Boshoku")),
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    persistence.persist_presentation(&result).unwrap()
}

pub fn record_result(
    persistence: &mut Persistence,
    application: &Application,
    candidate: &Candidate,
    outcome: ApplicationOutcome,
) -> PersistedApplicationResult {
    let result = record_application_result(
        application,
        candidate,
        outcome,
        None,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    persistence.persist_application_result(&result).unwrap()
}

pub fn create_notice(
    persistence: &mut Persistence,
    candidate: &Candidate,
    terms: EmploymentTerms,
) -> PersistedNoticeCreation {
    let draft: NoticeDraft = NoticeDraft {
        candidate_id: candidate.candidate_id,
        application_id: None,
        personal: None,
        housing: Housing::of_type(HousingType::Own),
        terms,
    };
    let context: NoticeContext<'_> = NoticeContext {
        candidate: Some(candidate),
        application: None,
        open_notice_id: None,
    };
    let result = create_joining_notice(
        draft,
        context,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    persistence.persist_notice_creation(&result).unwrap()
}

pub fn submit(persistence: &mut Persistence, notice: &JoiningNotice) -> JoiningNotice {
    let result =
        submit_joining_notice(notice, create_test_actor(), create_test_cause(), test_now())
            .unwrap();
    persistence
        .persist_notice_update(&result, notice.status)
        .unwrap()
}

pub fn approve(
    persistence: &mut Persistence,
    notice: &JoiningNotice,
    candidate: &Candidate,
) -> PersistedApproval {
    let result = approve_joining_notice(
        notice,
        candidate,
        None,
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    persistence.persist_approval(&result).unwrap()
}

/// Registers a candidate and walks them all the way to an approved notice.
pub fn hire(
    persistence: &mut Persistence,
    full_name: &str,
    terms: EmploymentTerms,
) -> PersistedApproval {
    let candidate: Candidate = register(persistence, full_name);
    let created: PersistedNoticeCreation = create_notice(persistence, &candidate, terms);
    let pending: JoiningNotice = submit(persistence, &created.notice);
    approve(persistence, &pending, &created.candidate)
}
