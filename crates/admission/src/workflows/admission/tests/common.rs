use crate::workflows::admission::{
    AdmissionOffice, Applicant, ApplicantDraft, BranchLedger, Category, CategoryTable,
    HostelPool, Institution, MessPool, RankWindow, RollSequence,
};

pub(super) fn draft(name: &str, rank: i64, preferences: &[&str]) -> ApplicantDraft {
    ApplicantDraft {
        name: name.to_string(),
        income: 300_000,
        rank,
        preferences: preferences.iter().map(|name| name.to_string()).collect(),
        contact: "9991110000".to_string(),
        percentage_12th: 85,
        age: 18,
        gender: "Male".to_string(),
        category: "General".to_string(),
    }
}

pub(super) fn applicant(rolls: &mut RollSequence, draft: ApplicantDraft) -> Applicant {
    Applicant::new(draft, rolls)
}

pub(super) fn ledger(
    name: &str,
    general: u32,
    reserved: &[(Category, u32)],
    window: (u32, u32),
) -> BranchLedger {
    let reserved: CategoryTable<u32> = reserved.iter().copied().collect();
    BranchLedger::new(name, general, reserved, RankWindow::new(window.0, window.1))
}

pub(super) fn institution(
    name: &str,
    window: (u32, u32),
    branches: Vec<BranchLedger>,
) -> Institution {
    let mut institution = Institution::new(name, RankWindow::new(window.0, window.1));
    for branch in branches {
        institution.add_branch(branch).expect("unique branch names");
    }
    institution
}

pub(super) fn office(boys_rooms: u32, girls_rooms: u32, mess_capacity: u32) -> AdmissionOffice {
    AdmissionOffice::new(
        HostelPool::boys("Boys Hostel A", boys_rooms),
        HostelPool::girls("Girls Hostel B", girls_rooms),
        MessPool::new("Main Campus Mess", mess_capacity),
    )
}

pub(super) fn branch_remaining_total(institution: &Institution) -> u32 {
    institution
        .branches()
        .filter_map(BranchLedger::seats_total)
        .sum()
}
