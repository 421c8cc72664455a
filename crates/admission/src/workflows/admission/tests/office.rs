use super::common::*;
use crate::workflows::admission::{
    ApplicantDraft, ApplicantOutcome, Category, EligibilityCriteria, IneligibilityReason, MessPlan,
    RollNumber, RollSequence, SeatQuota, SetupError,
};

#[test]
fn lower_rank_claims_the_scarce_seat_first() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Computer Science", 1, &[], (1, 150))],
        ))
        .expect("register institution");

    let mut applicants = vec![
        applicant(&mut rolls, draft("Second", 200, &["Computer Science"])),
        applicant(&mut rolls, draft("First", 100, &["Computer Science"])),
    ];

    let summary = office.process(&mut applicants);

    assert_eq!(applicants[0].name(), "First");
    assert_eq!(applicants[0].assigned_branch(), Some("Computer Science"));
    assert!(!applicants[1].is_admitted());
    assert_eq!(summary.admitted(), 1);
    assert_eq!(summary.not_admitted(), 1);
    assert_eq!(
        summary.outcome_for(applicants[1].roll()),
        Some(&ApplicantOutcome::NotAdmitted)
    );
    assert_eq!(office.total_admitted(), 1);
}

#[test]
fn rank_ties_keep_submission_order() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Electronics", 1, &[], (1, 8_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![
        applicant(&mut rolls, draft("Late", 900, &["Electronics"])),
        applicant(&mut rolls, draft("TieA", 500, &["Electronics"])),
        applicant(&mut rolls, draft("TieB", 500, &["Electronics"])),
    ];

    office.process(&mut applicants);

    let order: Vec<&str> = applicants.iter().map(|a| a.name()).collect();
    assert_eq!(order, vec!["TieA", "TieB", "Late"]);
    assert!(applicants[0].is_admitted());
    assert!(!applicants[1].is_admitted());
}

#[test]
fn ineligible_applicants_never_reach_an_institution() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Computer Science", 1, &[], (1, 5_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![applicant(
        &mut rolls,
        ApplicantDraft {
            percentage_12th: 55,
            ..draft("Low", 1, &["Computer Science"])
        },
    )];

    let summary = office.process(&mut applicants);

    assert_eq!(
        summary.outcome_for(RollNumber(1)),
        Some(&ApplicantOutcome::Ineligible {
            reasons: vec![IneligibilityReason::PercentageBelow { minimum: 60 }],
        })
    );
    let techville = office.institution("TechVille").expect("registered");
    assert_eq!(techville.remaining_seats(), 1);
    assert_eq!(techville.admitted_count(), 0);
}

#[test]
fn institutions_are_tried_in_registration_order() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Computer Science", 1, &[], (1, 5_000))],
        ))
        .expect("register first");
    office
        .add_institution(institution(
            "Global",
            (1, 75_000),
            vec![ledger("Computer Science", 1, &[], (1, 3_000))],
        ))
        .expect("register second");

    let mut applicants = vec![
        applicant(&mut rolls, draft("Anita", 1_200, &["Computer Science"])),
        applicant(&mut rolls, draft("Sonal", 700, &["Computer Science"])),
        applicant(&mut rolls, draft("Priya", 2_500, &["Computer Science"])),
    ];

    let summary = office.process(&mut applicants);

    let placed_at = |name: &str| {
        summary
            .processed
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| match &entry.outcome {
                ApplicantOutcome::Admitted { institution, .. } => Some(institution.as_str()),
                _ => None,
            })
    };
    assert_eq!(placed_at("Sonal"), Some("TechVille"));
    assert_eq!(placed_at("Anita"), Some("Global"));
    assert_eq!(placed_at("Priya"), None);

    let techville_students = office.admitted_students("TechVille", &applicants);
    assert_eq!(techville_students.len(), 1);
    assert_eq!(techville_students[0].name(), "Sonal");
    assert!(office.admitted_students("Nowhere", &applicants).is_empty());
}

#[test]
fn admission_cascades_into_hostel_and_mess() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger(
                "Computer Science",
                5,
                &[(Category::Sc, 1)],
                (1, 5_000),
            )],
        ))
        .expect("register institution");

    let mut applicants = vec![
        applicant(
            &mut rolls,
            ApplicantDraft {
                gender: "Female".to_string(),
                category: "SC".to_string(),
                income: 800_000,
                ..draft("Priya", 2_500, &["Computer Science"])
            },
        ),
        applicant(
            &mut rolls,
            ApplicantDraft {
                income: 600_000,
                ..draft("Aman", 3_000, &["Computer Science"])
            },
        ),
    ];

    let summary = office.process(&mut applicants);

    match summary.outcome_for(RollNumber(1)) {
        Some(ApplicantOutcome::Admitted {
            quota,
            hostel,
            mess_plan,
            ..
        }) => {
            assert_eq!(*quota, SeatQuota::Reserved(Category::Sc));
            assert!(*hostel);
            assert_eq!(*mess_plan, Some(MessPlan::Basic));
        }
        other => panic!("expected admission, got {other:?}"),
    }
    assert_eq!(applicants[1].mess_plan(), Some(MessPlan::Premium));

    let [boys, girls] = office.hostels();
    assert_eq!(boys.allocated(), 1);
    assert_eq!(girls.allocated(), 1);
    assert_eq!(office.mess().allocated(), 2);
}

#[test]
fn hostel_shortfall_keeps_the_branch_seat() {
    let mut rolls = RollSequence::new();
    let mut office = office(0, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Mechanical", 2, &[], (1, 15_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![applicant(&mut rolls, draft("Aman", 6_000, &["Mechanical"]))];
    let summary = office.process(&mut applicants);

    assert_eq!(applicants[0].assigned_branch(), Some("Mechanical"));
    assert!(!applicants[0].has_hostel());
    assert!(!applicants[0].has_mess());
    assert_eq!(office.mess().allocated(), 0);
    assert!(matches!(
        summary.outcome_for(applicants[0].roll()),
        Some(ApplicantOutcome::Admitted {
            hostel: false,
            mess_plan: None,
            ..
        })
    ));
}

#[test]
fn full_mess_is_reported_but_not_fatal() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 0);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Mechanical", 2, &[], (1, 15_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![applicant(&mut rolls, draft("Aman", 6_000, &["Mechanical"]))];
    let summary = office.process(&mut applicants);

    assert!(applicants[0].has_hostel());
    assert!(!applicants[0].has_mess());
    match summary.outcome_for(applicants[0].roll()) {
        Some(ApplicantOutcome::Admitted { mess_refusal, .. }) => {
            assert_eq!(mess_refusal.as_deref(), Some("mess is full"));
        }
        other => panic!("expected admission, got {other:?}"),
    }
}

#[test]
fn reprocessing_does_not_readmit() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10);
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Mechanical", 5, &[], (1, 15_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![applicant(&mut rolls, draft("Aman", 6_000, &["Mechanical"]))];
    office.process(&mut applicants);
    let summary = office.process(&mut applicants);

    assert_eq!(
        summary.outcome_for(applicants[0].roll()),
        Some(&ApplicantOutcome::AlreadyAdmitted)
    );
    assert_eq!(office.total_admitted(), 1);
    let techville = office.institution("TechVille").expect("registered");
    assert_eq!(techville.remaining_seats(), 4);
    assert_eq!(office.hostels()[0].allocated(), 1);
    assert_eq!(office.mess().allocated(), 1);
}

#[test]
fn custom_criteria_change_the_gate() {
    let mut rolls = RollSequence::new();
    let mut office = office(10, 10, 10).with_criteria(EligibilityCriteria {
        min_percentage: 90,
        min_age: 18,
    });
    office
        .add_institution(institution(
            "TechVille",
            (1, 50_000),
            vec![ledger("Mechanical", 5, &[], (1, 15_000))],
        ))
        .expect("register institution");

    let mut applicants = vec![applicant(&mut rolls, draft("Aman", 6_000, &["Mechanical"]))];
    let summary = office.process(&mut applicants);

    assert_eq!(summary.ineligible(), 1);
    assert!(!applicants[0].is_admitted());
}

#[test]
fn duplicate_institution_names_are_rejected() {
    let mut office = office(1, 1, 1);
    office
        .add_institution(institution("TechVille", (1, 10), Vec::new()))
        .expect("first registration");

    assert_eq!(
        office.add_institution(institution("TechVille", (1, 20), Vec::new())),
        Err(SetupError::DuplicateInstitution("TechVille".to_string()))
    );
    assert_eq!(office.institutions().len(), 1);
}
