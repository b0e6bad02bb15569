mod args;
mod environment;
mod error;
mod output;
mod run;

use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info};

use crate::args::{ContextArgs, InputArgs};
use crate::error::{CliError, failure_message};

#[derive(Parser)]
#[command(name = "diff-status")]
#[command(version)]
#[command(
    about = "Mark required commit statuses successful when a pull request only touches exempt files",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(flatten)]
    context: ContextArgs,

    /// Log debug details (page fetches, status writes, uncovered files)
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    output::init_tracing(cli.json, level);

    match run::run(&cli.inputs, &cli.context).await {
        Ok(outcome) => {
            info!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(error: &CliError) {
    println!("{}", output::error_command(&failure_message(error)));

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
