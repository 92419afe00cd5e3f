use crate::{config, report};
use anyhow::{Context, Result};
use dosage_core::{logger::CalculationLogger, DosageBuilder};
use dosage_schemas::{file_formats::DosageRequestFile, results::DosageResults};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ComputeOptions {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub json: bool,
}

/// Where one run's artifacts ended up.
#[derive(Debug, Default)]
pub struct RunArtifacts {
    pub run_dir: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

/// Loads, validates and doses one request, then prints and stores the result.
pub fn run_compute(options: &ComputeOptions) -> Result<()> {
    let request = config::load_request(&options.input)?;
    info!(label = %request.label, input = ?options.input, "request loaded");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let (results, artifacts) = dose_request(&request, options, &timestamp)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", report::render_text(&request.label, &request.inputs, &results));
    }

    if let Some(run_dir) = &artifacts.run_dir {
        info!(run_dir = ?run_dir, "run artifacts written");
    }
    Ok(())
}

/// Runs the engine and writes every requested artifact.
pub fn dose_request(
    request: &DosageRequestFile,
    options: &ComputeOptions,
    timestamp: &str,
) -> Result<(DosageResults, RunArtifacts)> {
    let engine = DosageBuilder::new()
        .with_inputs(request.inputs.clone())
        .build()
        .with_context(|| format!("Invalid inputs in request '{}'", request.label))?;

    let mut artifacts = RunArtifacts::default();
    artifacts.log_path = match (&options.log, &options.output_dir) {
        (Some(log), _) => Some(log.clone()),
        (None, Some(output_dir)) => {
            fs::create_dir_all(output_dir)
                .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
            Some(output_dir.join("dosage_log.csv"))
        }
        (None, None) => None,
    };

    // The log opens before the run directory exists.
    let mut logger = match &artifacts.log_path {
        Some(log_path) => Some(CalculationLogger::new(log_path)?),
        None => None,
    };

    if let Some(output_dir) = &options.output_dir {
        let run_dir = output_dir.join(run_dir_name(&request.label, timestamp));
        fs::create_dir_all(&run_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", run_dir))?;

        // Copy the request next to its results for traceability.
        fs::copy(&options.input, run_dir.join("request.yaml"))
            .with_context(|| format!("Failed to copy request {:?}", options.input))?;
        artifacts.run_dir = Some(run_dir);
    }

    let results = match logger.as_mut() {
        Some(logger) => {
            let results = engine.run_logged(&request.label, logger)?;
            info!(log = %logger.target(), "calculation logged");
            results
        }
        None => engine.run(),
    };

    if let Some(run_dir) = &artifacts.run_dir {
        write_run_files(run_dir, &request.label, &results)?;
    }

    Ok((results, artifacts))
}

fn write_run_files(run_dir: &Path, label: &str, results: &DosageResults) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(run_dir.join("results.json"), json)
        .with_context(|| format!("Failed to write results.json in {:?}", run_dir))?;
    fs::write(run_dir.join("report.md"), report::render_markdown(label, results))
        .with_context(|| format!("Failed to write report.md in {:?}", run_dir))?;
    Ok(())
}

/// `<label>_<timestamp>` with anything outside `[A-Za-z0-9-]` replaced by `_`.
fn run_dir_name(label: &str, timestamp: &str) -> String {
    let safe_label: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}_{}", safe_label, timestamp)
}
