use crate::simulate::{run_simulation, show_roster};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hiring_pipeline::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "hiring-pipeline",
    about = "Simulate a hiring round: screen the roster, contact selected candidates, report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full simulation (default command)
    Run(RunArgs),
    /// Print the candidate roster without running the simulation
    Roster,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// Seed the generator so the run can be reproduced
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output format for the run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_simulation(args),
        Command::Roster => show_roster(),
    }
}
