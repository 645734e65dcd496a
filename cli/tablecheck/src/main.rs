use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tablecheck_core::report::{ConsoleReporter, Reporter};
use tablecheck_core::{CheckError, Mode, Schema, Validator};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tablecheck", version, about = "Check table catalog JSON records")]
struct Cli {
    /// JSON file holding one record or an array of records
    path: PathBuf,
    /// Schema file overriding the built-in key lists
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Check every record instead of stopping at the first failure
    #[arg(long)]
    all: bool,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!("init tracing: {e}"))
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<(), CheckError> {
    let schema = match &cli.schema {
        Some(p) => tablecheck_core::config::load::load_schema(p).inspect_err(|e| reporter.failure(e))?,
        None => Schema::default(),
    };
    let mode = if cli.all { Mode::CollectAll } else { Mode::FailFast };
    Validator::new(schema, reporter).with_mode(mode).check_file(&cli.path)
}

fn main() -> Result<ExitCode> {
    init_tracing()?;
    let reporter = ConsoleReporter::default();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!("argument error: {e}");
            reporter.failure(&CheckError::Usage {
                program: "tablecheck".into(),
            });
            return Ok(ExitCode::FAILURE);
        }
    };

    match run(&cli, &reporter) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
