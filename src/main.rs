use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use token_topup::config::{DEFAULT_COMPANIES_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_USERS_FILE};
use token_topup::{run, RunConfig, RunOutcome, VERSION};

#[derive(Parser)]
#[command(name = "token-topup")]
#[command(about = "Apply company token top-ups to active users and write the report")]
#[command(version)]
struct Cli {
    /// Users JSON file
    #[arg(long, env = "TOPUP_USERS", default_value = DEFAULT_USERS_FILE)]
    users: PathBuf,

    /// Companies JSON file
    #[arg(long, env = "TOPUP_COMPANIES", default_value = DEFAULT_COMPANIES_FILE)]
    companies: PathBuf,

    /// Report output file
    #[arg(short, long, env = "TOPUP_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "token_topup=debug,info"
    } else {
        "token_topup=info,warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::new(cli.users, cli.companies, cli.output);

    info!("Starting token top-up v{}", VERSION);
    match run(&config) {
        Ok(RunOutcome::Written(summary)) => {
            info!("{}", summary.summary());
            info!("Report sha256: {}", summary.report_sha256);
            if let Ok(json) = serde_json::to_string(&summary) {
                debug!("Run summary: {}", json);
            }
            info!("Done");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Skipped { .. }) => {
            info!("Done, no report written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
