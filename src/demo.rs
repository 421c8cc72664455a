use crate::render::{
    AdmissionSummary, DetailedReport, EligibilityTable, ProcessingLog, ScholarshipList,
    StudentCards,
};
use admission::config::AppConfig;
use admission::error::AppError;
use admission::telemetry;
use admission::workflows::admission::report::eligibility_entries;
use admission::workflows::admission::{
    AdmissionOffice, AdmissionReport, Applicant, ApplicantDraft, CampusBlueprint, Category,
    HostelPool, MessPool, ProcessingSummary, RollSequence,
};
use admission::workflows::roster::{export_results_to_path, import_applicants_from_path};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct CapacityArgs {
    /// Rooms in the boys hostel (overrides ADMISSION_BOYS_HOSTEL_ROOMS)
    #[arg(long)]
    pub(crate) boys_rooms: Option<u32>,
    /// Rooms in the girls hostel (overrides ADMISSION_GIRLS_HOSTEL_ROOMS)
    #[arg(long)]
    pub(crate) girls_rooms: Option<u32>,
    /// Seats in the mess (overrides ADMISSION_MESS_CAPACITY)
    #[arg(long)]
    pub(crate) mess_capacity: Option<u32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) capacity: CapacityArgs,
    /// Print a detail card for every applicant
    #[arg(long)]
    pub(crate) details: bool,
    /// Emit the processing outcomes and report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProcessArgs {
    /// JSON campus blueprint. Defaults to the two sample universities.
    #[arg(long)]
    pub(crate) campus: Option<PathBuf>,
    /// Applicant roster CSV
    #[arg(long, required_unless_present = "demo_applicants")]
    pub(crate) applicants: Option<PathBuf>,
    /// Append the built-in demo applicants after the roster
    #[arg(long)]
    pub(crate) demo_applicants: bool,
    #[command(flatten)]
    pub(crate) capacity: CapacityArgs,
    /// Write per-applicant results to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Emit the processing outcomes and report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Print a detail card for every applicant
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Applicant roster CSV
    #[arg(long, required_unless_present = "demo_applicants")]
    pub(crate) applicants: Option<PathBuf>,
    /// Append the built-in demo applicants after the roster
    #[arg(long)]
    pub(crate) demo_applicants: bool,
    /// Also list applicants with annual income at or below this amount (text output only)
    #[arg(long)]
    pub(crate) scholarship_income: Option<u64>,
    /// Category that qualifies for the scholarship regardless of income
    #[arg(long, value_parser = parse_category, default_value = "SC")]
    pub(crate) scholarship_category: Category,
    /// Emit the eligibility rows as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    outcomes: &'a ProcessingSummary,
    report: &'a AdmissionReport,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        capacity,
        details,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let office = build_office(&config, None, capacity)?;
    let applicants = load_applicants(None, true)?;
    if !json {
        println!("University admission demo");
        println!(
            "Sample campus with {} auto-generated applicants",
            applicants.len()
        );
    }

    process_and_render(office, applicants, json, details)?;
    Ok(())
}

pub(crate) fn run_process(args: ProcessArgs) -> Result<(), AppError> {
    let ProcessArgs {
        campus,
        applicants,
        demo_applicants,
        capacity,
        export,
        json,
        details,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let office = build_office(&config, campus.as_deref(), capacity)?;
    let applicants = load_applicants(applicants.as_deref(), demo_applicants)?;
    let applicants = process_and_render(office, applicants, json, details)?;

    if let Some(path) = export {
        let written = export_results_to_path(&path, &applicants)?;
        info!(path = %path.display(), rows = written, "results exported");
        if !json {
            println!("\nExported {} applicants to {}", written, path.display());
        }
    }

    Ok(())
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let EligibilityArgs {
        applicants,
        demo_applicants,
        scholarship_income,
        scholarship_category,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let applicants = load_applicants(applicants.as_deref(), demo_applicants)?;
    let entries = eligibility_entries(&applicants, &config.policy.criteria());

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    print!("{}", EligibilityTable(&entries));

    if let Some(threshold) = scholarship_income {
        let qualified: Vec<&Applicant> = applicants
            .iter()
            .filter(|applicant| applicant.scholarship_eligible(threshold, scholarship_category))
            .collect();
        let list = ScholarshipList {
            qualified: &qualified,
            income_threshold: threshold,
            category: scholarship_category,
        };
        print!("{list}");
    }

    Ok(())
}

fn process_and_render(
    mut office: AdmissionOffice,
    mut applicants: Vec<Applicant>,
    json: bool,
    details: bool,
) -> Result<Vec<Applicant>, AppError> {
    let summary = office.process(&mut applicants);
    let report = AdmissionReport::build(&office, &applicants);

    if json {
        let output = RunOutput {
            outcomes: &summary,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(applicants);
    }

    print!("{}", ProcessingLog(&summary));
    print!("{}", EligibilityTable(&report.eligibility));
    print!("{}", AdmissionSummary(&report));
    print!("{}", DetailedReport(&report));
    if details {
        print!("{}", StudentCards(&report.students));
    }

    Ok(applicants)
}

pub(crate) fn build_office(
    config: &AppConfig,
    campus: Option<&Path>,
    capacity: CapacityArgs,
) -> Result<AdmissionOffice, AppError> {
    let blueprint = match campus {
        Some(path) => CampusBlueprint::from_path(path)?,
        None => CampusBlueprint::sample(),
    };

    let boys_rooms = capacity
        .boys_rooms
        .unwrap_or(config.campus.boys_hostel_rooms);
    let girls_rooms = capacity
        .girls_rooms
        .unwrap_or(config.campus.girls_hostel_rooms);
    let mess_capacity = capacity.mess_capacity.unwrap_or(config.campus.mess_capacity);

    let mut office = AdmissionOffice::new(
        HostelPool::boys("Boys Hostel A", boys_rooms),
        HostelPool::girls("Girls Hostel B", girls_rooms),
        MessPool::new("Main Campus Mess", mess_capacity),
    )
    .with_criteria(config.policy.criteria())
    .with_mess_policy(config.policy.mess_policy());

    for institution in blueprint.build()? {
        office.add_institution(institution)?;
    }

    info!(
        environment = ?config.environment,
        institutions = office.institutions().len(),
        boys_rooms,
        girls_rooms,
        mess_capacity,
        "campus ready"
    );
    Ok(office)
}

pub(crate) fn load_applicants(
    roster: Option<&Path>,
    include_demo: bool,
) -> Result<Vec<Applicant>, AppError> {
    let mut rolls = RollSequence::new();
    let mut applicants = match roster {
        Some(path) => import_applicants_from_path(path, &mut rolls)?,
        None => Vec::new(),
    };
    if include_demo {
        applicants.extend(
            demo_drafts()
                .into_iter()
                .map(|draft| Applicant::new(draft, &mut rolls)),
        );
    }
    info!(applicants = applicants.len(), "applicants loaded");
    Ok(applicants)
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_label(raw).ok_or_else(|| {
        format!("unknown category '{raw}' (expected General, OBC, SC, ST or EWS)")
    })
}

pub(crate) fn demo_drafts() -> Vec<ApplicantDraft> {
    vec![
        demo_draft(
            "Anita Sharma",
            200_000,
            1200,
            &["Computer Science", "Electronics"],
            "9991110001",
            92,
            18,
            "Female",
            "General",
        ),
        demo_draft(
            "Ravi Kumar",
            80_000,
            4200,
            &["Electronics", "Computer Science"],
            "9991110002",
            88,
            18,
            "Male",
            "OBC",
        ),
        demo_draft(
            "Priya Singh",
            50_000,
            2500,
            &["Computer Science", "Information Technology"],
            "9991110003",
            94,
            18,
            "Female",
            "SC",
        ),
        demo_draft(
            "Aman Verma",
            150_000,
            6000,
            &["Mechanical", "Civil Engineering"],
            "9991110004",
            82,
            19,
            "Male",
            "General",
        ),
        demo_draft(
            "Sonal Gupta",
            70_000,
            700,
            &["Computer Science", "Electronics"],
            "9991110005",
            96,
            17,
            "Female",
            "General",
        ),
        demo_draft(
            "Karan Mehta",
            30_000,
            1500,
            &["Information Technology", "Computer Science"],
            "9991110006",
            90,
            18,
            "Male",
            "EWS",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_draft(
    name: &str,
    income: i64,
    rank: i64,
    preferences: &[&str],
    contact: &str,
    percentage_12th: i64,
    age: i64,
    gender: &str,
    category: &str,
) -> ApplicantDraft {
    ApplicantDraft {
        name: name.to_string(),
        income,
        rank,
        preferences: preferences.iter().map(|branch| branch.to_string()).collect(),
        contact: contact.to_string(),
        percentage_12th,
        age,
        gender: gender.to_string(),
        category: category.to_string(),
    }
}
