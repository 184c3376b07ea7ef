// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Two connections racing on one database file.

use haken::{ApprovalResult, approve_joining_notice};
use haken_domain::{Candidate, EmployeeSummary, JoiningNotice, JoiningNoticeStatus};
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

use super::helpers::{
    create_haken_terms, create_notice, create_test_cause, create_test_manager, register, submit,
    test_now,
};
use crate::error::PersistenceError;
use crate::{Persistence, PersistedApproval};

/// A database file that is removed, with its WAL companions, on drop.
struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    fn new(label: &str) -> Self {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "haken_{label}_{}_{}.db",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        Self { path }
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

#[test]
fn test_concurrent_approvals_produce_exactly_one_employee() {
    let db: TempDatabase = TempDatabase::new("approve_race");
    let mut setup: Persistence = Persistence::new_with_file(&db.path).unwrap();

    let candidate: Candidate = register(&mut setup, "Juan Perez");
    let created = create_notice(&mut setup, &candidate, create_haken_terms());
    let pending: JoiningNotice = submit(&mut setup, &created.notice);

    // Both approvers read the same pending notice and candidate.
    let approval: ApprovalResult = approve_joining_notice(
        &pending,
        &created.candidate,
        None,
        &create_test_manager(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();

    let connections: Vec<Persistence> = (0..2)
        .map(|_| Persistence::new_with_file(&db.path).unwrap())
        .collect();
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(2));

    let handles: Vec<thread::JoinHandle<Result<PersistedApproval, PersistenceError>>> =
        connections
            .into_iter()
            .map(|mut persistence| {
                let barrier: Arc<Barrier> = Arc::clone(&barrier);
                let approval: ApprovalResult = approval.clone();
                thread::spawn(move || {
                    barrier.wait();
                    persistence.persist_approval(&approval)
                })
            })
            .collect();

    let outcomes: Vec<Result<PersistedApproval, PersistenceError>> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    let winners: usize = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(winners, 1, "exactly one approval must win: {outcomes:?}");
    assert!(outcomes.iter().any(|o| matches!(
        o,
        Err(PersistenceError::StaleVersion {
            entity: "joining_notice",
            ..
        })
    )));

    let summary: EmployeeSummary = setup.employee_summary().unwrap();
    assert_eq!(summary.active_total, 1);
    let stored: JoiningNotice = setup
        .find_joining_notice(pending.joining_notice_id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, JoiningNoticeStatus::Approved);
}

#[test]
fn test_concurrent_hires_draw_distinct_employee_numbers() {
    let db: TempDatabase = TempDatabase::new("number_race");
    let mut setup: Persistence = Persistence::new_with_file(&db.path).unwrap();

    let approvals: Vec<ApprovalResult> = ["Juan Perez", "Maria Santos"]
        .iter()
        .map(|name| {
            let candidate: Candidate = register(&mut setup, name);
            let created = create_notice(&mut setup, &candidate, create_haken_terms());
            let pending: JoiningNotice = submit(&mut setup, &created.notice);
            approve_joining_notice(
                &pending,
                &created.candidate,
                None,
                &create_test_manager(),
                create_test_cause(),
                test_now(),
            )
            .unwrap()
        })
        .collect();

    let barrier: Arc<Barrier> = Arc::new(Barrier::new(2));
    let workers: Vec<(Persistence, ApprovalResult)> = approvals
        .into_iter()
        .map(|approval| (Persistence::new_with_file(&db.path).unwrap(), approval))
        .collect();

    let handles: Vec<thread::JoinHandle<PersistedApproval>> = workers
        .into_iter()
        .map(|(mut persistence, approval)| {
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                persistence.persist_approval(&approval).unwrap()
            })
        })
        .collect();

    let mut numbers: Vec<i64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().employee.employee_number)
        .collect();
    numbers.sort_unstable();

    assert_eq!(numbers, vec![1, 2]);
}
