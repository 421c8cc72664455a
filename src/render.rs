use admission::workflows::admission::report::{
    AdmissionReport, EligibilityEntry, EligibilityStatus, StudentDetailView,
};
use admission::workflows::admission::{
    Applicant, ApplicantOutcome, Category, ProcessingSummary, SeatQuota,
};
use chrono::Local;
use std::fmt;

fn header(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(60);
    writeln!(f, "\n{rule}")?;
    writeln!(f, " {title}")?;
    writeln!(f, "{rule}")
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "-".repeat(40);
    writeln!(f, "\n{rule}")?;
    writeln!(f, " {title}")?;
    writeln!(f, "{rule}")
}

fn quota_note(quota: SeatQuota) -> String {
    match quota {
        SeatQuota::General => "general seat".to_string(),
        SeatQuota::Reserved(category) => format!("{category} reserved seat"),
    }
}

/// One line per applicant in processing (rank) order.
pub(crate) struct ProcessingLog<'a>(pub(crate) &'a ProcessingSummary);

impl fmt::Display for ProcessingLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(
            f,
            "\nProcessing {} applications...",
            summary.processed.len()
        )?;

        for entry in &summary.processed {
            write!(
                f,
                "- {} (roll {}, rank {}): {}",
                entry.name,
                entry.roll.0,
                entry.rank,
                entry.outcome.summary()
            )?;
            if let ApplicantOutcome::Admitted {
                quota,
                hostel,
                mess_plan,
                mess_refusal,
                ..
            } = &entry.outcome
            {
                write!(f, " ({})", quota_note(*quota))?;
                write!(f, " | hostel: {}", if *hostel { "yes" } else { "no" })?;
                match (mess_plan, mess_refusal) {
                    (Some(plan), _) => write!(f, " | mess: {}", plan.label())?,
                    (None, Some(refusal)) => write!(f, " | mess: refused ({refusal})")?,
                    (None, None) => write!(f, " | mess: no")?,
                }
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "Application processing completed: {} admitted, {} not eligible, {} not admitted",
            summary.admitted(),
            summary.ineligible(),
            summary.not_admitted()
        )
    }
}

pub(crate) struct EligibilityTable<'a>(pub(crate) &'a [EligibilityEntry]);

impl fmt::Display for EligibilityTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header(f, "ELIGIBILITY REPORT")?;
        let rule = "+-------+----------------------+--------+--------+------+--------+----------+------------------------------------+";
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "| {:<5} | {:<20} | {:<6} | {:<6} | {:<4} | {:<6} | {:<8} | {:<34} |",
            "Roll", "Name", "JEE", "12th%", "Age", "Gender", "Category", "Status"
        )?;
        writeln!(f, "{rule}")?;

        for entry in self.0 {
            let status = match entry.status {
                EligibilityStatus::NotEligible => {
                    let reasons: Vec<String> =
                        entry.reasons.iter().map(ToString::to_string).collect();
                    format!("{} ({})", entry.status.label(), reasons.join(", "))
                }
                other => other.label().to_string(),
            };
            writeln!(
                f,
                "| {:>5} | {:<20.20} | {:>6} | {:>5}% | {:>4} | {:<6} | {:<8} | {:<34} |",
                entry.roll.0,
                entry.name,
                entry.rank,
                entry.percentage_12th,
                entry.age,
                entry.gender.label(),
                entry.category.label(),
                status
            )?;
        }

        writeln!(f, "{rule}")
    }
}

pub(crate) struct AdmissionSummary<'a>(pub(crate) &'a AdmissionReport);

impl fmt::Display for AdmissionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        header(f, "ADMISSIONS SUMMARY")?;
        writeln!(
            f,
            "Generated {}",
            report
                .generated_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        )?;

        for institution in &report.institutions {
            writeln!(f, "\nUniversity: {}", institution.name)?;
            writeln!(
                f,
                "Rank range: {} - {} | Admitted students: {}",
                institution.opening_rank,
                institution.closing_rank,
                institution.admitted.len()
            )?;
            if institution.admitted.is_empty() {
                writeln!(f, "  No students admitted")?;
            }
            for student in &institution.admitted {
                writeln!(
                    f,
                    "  > Roll {} | {} | Rank {} | {}",
                    student.roll, student.name, student.rank, student.branch
                )?;
            }
        }

        writeln!(f, "\nTOTAL STUDENTS ADMITTED: {}", report.total_admitted)
    }
}

pub(crate) struct DetailedReport<'a>(pub(crate) &'a AdmissionReport);

impl fmt::Display for DetailedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        header(f, "DETAILED ADMISSION REPORT")?;

        for institution in &report.institutions {
            writeln!(f, "\nBranch status - {}", institution.name)?;
            for branch in &institution.branches {
                let reserved = if branch.reserved_remaining.is_empty() {
                    "no reserved seats left".to_string()
                } else {
                    branch
                        .reserved_remaining
                        .iter()
                        .map(|entry| format!("{} {}", entry.category, entry.remaining))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                writeln!(
                    f,
                    "- {} | general {} | {} | ranks {}-{}",
                    branch.name,
                    branch.general_remaining,
                    reserved,
                    branch.opening_rank,
                    branch.closing_rank
                )?;
            }
        }

        section(f, "HOSTEL STATUS")?;
        for hostel in &report.hostels {
            writeln!(
                f,
                "- {}: {}/{} allocated, {} available",
                hostel.name, hostel.allocated, hostel.capacity, hostel.available
            )?;
        }

        section(f, "MESS STATUS")?;
        let mess = &report.mess;
        writeln!(
            f,
            "- {}: {}/{} allocated, {} available",
            mess.pool.name, mess.pool.allocated, mess.pool.capacity, mess.pool.available
        )?;
        let prices: Vec<String> = mess
            .plan_prices
            .iter()
            .map(|entry| format!("{} Rs{}", entry.plan.label(), entry.price))
            .collect();
        writeln!(f, "- Plan prices: {}", prices.join(", "))
    }
}

pub(crate) struct StudentCards<'a>(pub(crate) &'a [StudentDetailView]);

impl fmt::Display for StudentCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header(f, "STUDENT DETAILS")?;
        for student in self.0 {
            writeln!(f, "\nRoll {} | {}", student.roll, student.name)?;
            writeln!(
                f,
                "  JEE rank: {} | 12th: {}% | Age: {} | Gender: {} | Category: {}",
                student.rank,
                student.percentage_12th,
                student.age,
                student.gender.label(),
                student.category.label()
            )?;
            writeln!(
                f,
                "  Contact: {} | Annual income: Rs{}",
                student.contact, student.income
            )?;
            writeln!(
                f,
                "  Eligibility: {}",
                if student.eligible {
                    "ELIGIBLE"
                } else {
                    "NOT ELIGIBLE"
                }
            )?;
            match &student.branch {
                Some(branch) => writeln!(f, "  Admission: ADMITTED - {branch}")?,
                None => writeln!(f, "  Admission: Not Admitted")?,
            }
            writeln!(
                f,
                "  Branch preferences: {}",
                student.preferences.join(", ")
            )?;
            writeln!(
                f,
                "  Hostel: {}",
                if student.hostel {
                    "Allocated"
                } else {
                    "Not Allocated"
                }
            )?;
            match student.mess_plan {
                Some(plan) => writeln!(f, "  Mess: {} Plan", plan.label())?,
                None => writeln!(f, "  Mess: Not Allocated")?,
            }
        }
        Ok(())
    }
}

pub(crate) struct ScholarshipList<'a> {
    pub(crate) qualified: &'a [&'a Applicant],
    pub(crate) income_threshold: u64,
    pub(crate) category: Category,
}

impl fmt::Display for ScholarshipList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "SCHOLARSHIP CHECK")?;
        writeln!(
            f,
            "Income <= Rs{} or category {}: {} applicants",
            self.income_threshold,
            self.category,
            self.qualified.len()
        )?;
        for applicant in self.qualified {
            writeln!(
                f,
                "- Roll {} | {} | {} | Rs{}",
                applicant.roll(),
                applicant.name(),
                applicant.category(),
                applicant.income()
            )?;
        }
        Ok(())
    }
}
