use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod workflow;

#[derive(Debug, Parser)]
#[command(name = "dosage", version, about = "Rational concrete dosage calculator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a dosage from a YAML request file.
    Compute {
        #[arg(short, long, default_value = "dosage-app/request.yaml")]
        input: PathBuf,

        /// Write results.json, report.md and a copy of the request into a
        /// timestamped run directory under this path.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Calculation log (CSV). Defaults to <output-dir>/dosage_log.csv.
        #[arg(long)]
        log: Option<PathBuf>,

        /// Print the result record as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Write a request file filled with the default inputs.
    Template {
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "default")]
        label: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "dosage_app=debug,dosage_core=debug"
    } else {
        "dosage_app=info,dosage_core=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compute {
            input,
            output_dir,
            log,
            json,
        } => workflow::run_compute(&workflow::ComputeOptions {
            input,
            output_dir,
            log,
            json,
        }),
        Command::Template { output, label } => config::write_template(output.as_deref(), &label),
    }
}
