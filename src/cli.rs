use crate::demo::{
    run_demo, run_eligibility, run_process, DemoArgs, EligibilityArgs, ProcessArgs,
};
use admission::error::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admission Desk",
    about = "Run rank-ordered university admissions with hostel and mess allocation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process the demo applicants against the sample campus (default command)
    Demo(DemoArgs),
    /// Process an applicant roster and print or export the results
    Process(ProcessArgs),
    /// Check a roster against the eligibility thresholds without admitting anyone
    Eligibility(EligibilityArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Process(args) => run_process(args),
        Command::Eligibility(args) => run_eligibility(args),
    }
}
