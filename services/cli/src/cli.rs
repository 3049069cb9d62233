use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use clap::{Parser, Subcommand};
use prevention_ai::config::AppConfig;
use prevention_ai::error::AppError;
use prevention_ai::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Prevention Orchestrator",
    about = "Évaluation des risques professionnels et suivi de conformité en ligne de commande",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end demo: assessment, conformity report, advisory batch.
    Demo(DemoArgs),
    /// Assess obligations and conformity for a site profile.
    Assess(AssessArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    tracing::debug!(environment = ?config.environment, "configuration loaded");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Assess(args) => run_assess(args),
    }
}
