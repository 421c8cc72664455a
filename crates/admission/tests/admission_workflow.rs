use admission::workflows::admission::{
    AdmissionOffice, AdmissionReport, Applicant, ApplicantDraft, ApplicantOutcome,
    CampusBlueprint, Category, HostelPool, MessPlan, MessPool, RollNumber, RollSequence,
    SeatQuota,
};

const TECHVILLE: &str = "TechVille Institute of Technology";

#[allow(clippy::too_many_arguments)]
fn draft(
    name: &str,
    income: i64,
    rank: i64,
    preferences: &[&str],
    percentage: i64,
    age: i64,
    gender: &str,
    category: &str,
) -> ApplicantDraft {
    ApplicantDraft {
        name: name.to_string(),
        income,
        rank,
        preferences: preferences.iter().map(|name| name.to_string()).collect(),
        contact: "9991110000".to_string(),
        percentage_12th: percentage,
        age,
        gender: gender.to_string(),
        category: category.to_string(),
    }
}

#[rustfmt::skip]
fn sample_applicants() -> Vec<Applicant> {
    let mut rolls = RollSequence::new();
    vec![
        draft("Anita Sharma", 200_000, 1200, &["Computer Science", "Electronics"], 92, 18, "Female", "General"),
        draft("Ravi Kumar", 80_000, 4200, &["Electronics", "Computer Science"], 88, 18, "Male", "OBC"),
        draft("Priya Singh", 50_000, 2500, &["Computer Science", "Information Technology"], 94, 18, "Female", "SC"),
        draft("Aman Verma", 150_000, 6000, &["Mechanical", "Civil Engineering"], 82, 19, "Male", "General"),
        draft("Sonal Gupta", 70_000, 700, &["Computer Science", "Electronics"], 96, 17, "Female", "General"),
        draft("Karan Mehta", 30_000, 1500, &["Information Technology", "Computer Science"], 90, 18, "Male", "EWS"),
    ]
    .into_iter()
    .map(|draft| Applicant::new(draft, &mut rolls))
    .collect()
}

fn sample_office(boys_rooms: u32, girls_rooms: u32, mess_capacity: u32) -> AdmissionOffice {
    let mut office = AdmissionOffice::new(
        HostelPool::boys("Boys Hostel A", boys_rooms),
        HostelPool::girls("Girls Hostel B", girls_rooms),
        MessPool::new("Main Campus Mess", mess_capacity),
    );
    for institution in CampusBlueprint::sample().build().expect("sample campus builds") {
        office
            .add_institution(institution)
            .expect("sample institutions are unique");
    }
    office
}

fn find<'a>(applicants: &'a [Applicant], name: &str) -> &'a Applicant {
    applicants
        .iter()
        .find(|applicant| applicant.name() == name)
        .expect("applicant present")
}

#[test]
fn sample_pass_places_everyone_at_the_first_institution() {
    let mut office = sample_office(40, 40, 60);
    let mut applicants = sample_applicants();

    let summary = office.process(&mut applicants);

    assert_eq!(summary.admitted(), 6);
    assert_eq!(summary.ineligible(), 0);
    assert_eq!(office.total_admitted(), 6);

    let ranks: Vec<u32> = applicants.iter().map(Applicant::rank).collect();
    assert_eq!(ranks, vec![700, 1200, 1500, 2500, 4200, 6000]);

    let techville = office.institution(TECHVILLE).expect("techville registered");
    assert_eq!(
        techville.admitted_rolls(),
        [
            RollNumber(5),
            RollNumber(1),
            RollNumber(6),
            RollNumber(3),
            RollNumber(2),
            RollNumber(4)
        ]
    );
    assert_eq!(techville.remaining_seats(), 63 - 6);

    let cse = techville.branch("Computer Science").expect("cse present");
    assert_eq!(cse.general_remaining(), 13);
    assert_eq!(cse.reserved_remaining(Category::Sc), 2);
    assert_eq!(cse.reserved_remaining(Category::Ews), 1);

    let global = office
        .institution("Global Engineering College")
        .expect("global registered");
    assert_eq!(global.admitted_count(), 0);
    assert_eq!(global.remaining_seats(), 49);

    assert_eq!(
        find(&applicants, "Aman Verma").assigned_branch(),
        Some("Mechanical")
    );
    assert_eq!(
        find(&applicants, "Ravi Kumar").assigned_branch(),
        Some("Electronics")
    );
}

#[test]
fn reserved_quota_and_mess_plan_follow_category_and_income() {
    let mut office = sample_office(40, 40, 60);
    let mut applicants = sample_applicants();

    let summary = office.process(&mut applicants);

    let karan = find(&applicants, "Karan Mehta");
    assert_eq!(
        summary.outcome_for(karan.roll()),
        Some(&ApplicantOutcome::Admitted {
            institution: TECHVILLE.to_string(),
            branch: "Computer Science".to_string(),
            quota: SeatQuota::Reserved(Category::Ews),
            hostel: true,
            mess_plan: Some(MessPlan::Basic),
            mess_refusal: None,
        })
    );

    assert_eq!(find(&applicants, "Anita Sharma").mess_plan(), Some(MessPlan::Standard));
    assert_eq!(find(&applicants, "Priya Singh").mess_plan(), Some(MessPlan::Basic));
    assert_eq!(find(&applicants, "Aman Verma").mess_plan(), Some(MessPlan::Standard));

    let [boys, girls] = office.hostels();
    assert_eq!(boys.allocated(), 3);
    assert_eq!(girls.allocated(), 3);
    assert_eq!(office.mess().allocated(), 6);
}

#[test]
fn scarce_hostel_and_mess_degrade_without_undoing_admission() {
    let mut office = sample_office(40, 2, 3);
    let mut applicants = sample_applicants();

    let summary = office.process(&mut applicants);

    assert_eq!(summary.admitted(), 6);

    // Girls by rank: Sonal, Anita, Priya. The third finds no room.
    let priya = find(&applicants, "Priya Singh");
    assert!(priya.is_admitted());
    assert!(!priya.has_hostel());
    assert!(!priya.has_mess());

    // Housed by rank: Sonal, Anita, Karan, Ravi, Aman. Mess fills after three.
    let ravi = find(&applicants, "Ravi Kumar");
    assert!(ravi.has_hostel());
    assert!(!ravi.has_mess());
    match summary.outcome_for(ravi.roll()) {
        Some(ApplicantOutcome::Admitted { mess_refusal, .. }) => {
            assert_eq!(mess_refusal.as_deref(), Some("mess is full"));
        }
        other => panic!("expected admitted outcome, got {other:?}"),
    }
    assert_eq!(office.mess().available(), 0);
}

#[test]
fn ineligible_applicants_are_reported_and_never_placed() {
    let mut office = sample_office(40, 40, 60);
    let mut rolls = RollSequence::new();
    let mut applicants = vec![
        Applicant::new(
            draft("Young Scholar", 90_000, 10, &["Computer Science"], 95, 16, "Male", "General"),
            &mut rolls,
        ),
        Applicant::new(
            draft("Low Marks", 90_000, 20, &["Computer Science"], 59, 18, "f", "General"),
            &mut rolls,
        ),
        Applicant::new(
            draft("Regular", 90_000, 30, &["Computer Science"], 60, 17, "Male", "General"),
            &mut rolls,
        ),
    ];

    let summary = office.process(&mut applicants);

    assert_eq!(summary.ineligible(), 2);
    assert_eq!(summary.admitted(), 1);

    let report = AdmissionReport::build(&office, &applicants);
    let reasons: Vec<String> = report
        .eligibility
        .iter()
        .map(|entry| {
            entry
                .reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    assert_eq!(reasons, vec!["Age < 17", "12th% < 60", ""]);
    assert_eq!(report.eligibility[2].status.label(), "Admitted");
    assert_eq!(report.eligibility[0].status.label(), "NOT ELIGIBLE");
}

#[test]
fn report_serializes_office_state() {
    let mut office = sample_office(40, 40, 60);
    let mut applicants = sample_applicants();
    office.process(&mut applicants);

    let report = AdmissionReport::build(&office, &applicants);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["total_admitted"], 6);
    assert_eq!(json["institutions"][0]["name"], TECHVILLE);
    assert_eq!(
        json["institutions"][0]["admitted"]
            .as_array()
            .map(Vec::len),
        Some(6)
    );
    assert_eq!(json["institutions"][1]["remaining_seats"], 49);
    assert_eq!(json["hostels"][1]["allocated"], 3);
    assert_eq!(json["mess"]["allocated"], 6);
    assert_eq!(json["mess"]["capacity"], 60);
    assert_eq!(json["mess"]["plan_prices"][2]["plan"], "Premium");
    assert_eq!(json["mess"]["plan_prices"][2]["price"], 4500);
    assert_eq!(json["students"][0]["name"], "Sonal Gupta");
    assert_eq!(json["students"][0]["mess_plan"], "Basic");
}
