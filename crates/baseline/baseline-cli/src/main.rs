//! `baseline-scan`: scan a JS/CSS tree and report Baseline feature usage.

mod args;
mod error;
mod output;

use std::process::ExitCode;

use baseline_analysis::classify::{Classifier, WebFeaturesRegistry};
use baseline_analysis::detectors::create_default_registry;
use baseline_analysis::report::{sink, ReportFilter, ReportFormat};
use baseline_analysis::scanner::{ScanOptions, Scanner};
use baseline_core::{BaselineConfig, BaselineErrorCode};
use clap::Parser;

use args::Cli;
use error::StartupError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    baseline_core::tracing::init(baseline_core::tracing::level_for(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[{}] {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), StartupError> {
    let config = BaselineConfig::load(&cli.root, cli.config.as_deref())?;

    let registry = match &config.registry.path {
        Some(path) => {
            let registry = WebFeaturesRegistry::load(path)?;
            tracing::info!(path = %path.display(), features = registry.len(), "loaded feature registry");
            registry
        }
        None => WebFeaturesRegistry::bundled(),
    };
    let classifier = Classifier::new(Box::new(registry));

    if cli.list_features {
        output::print_catalog(&create_default_registry(), &classifier);
        return Ok(());
    }

    if !cli.root.is_dir() {
        return Err(StartupError::InvalidRoot {
            path: cli.root.clone(),
        });
    }

    let options = ScanOptions {
        verbose: cli.verbose,
        ..Default::default()
    };
    let scanner = Scanner::new(config.scan, classifier, options);
    let outcome = scanner.scan(&cli.root);

    if outcome.no_files() {
        eprintln!("No files found in {}", cli.root.display());
        return Ok(());
    }

    let filter = cli
        .filter
        .as_deref()
        .map(ReportFilter::from_cli_value)
        .unwrap_or_default();
    let report = outcome.results.report(&filter);
    if report.is_empty() {
        eprintln!("No features detected");
    }

    let format = ReportFormat::from(cli.format);
    match &cli.output {
        Some(path) => match sink::write_report(path, &report, format) {
            Ok(()) => output::print_summary(&report, &outcome, Some(path)),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to write report");
                output::print_summary(&report, &outcome, None);
            }
        },
        None => match sink::render(&report, format) {
            Ok(rendered) => {
                print!("{rendered}");
                if !rendered.ends_with('\n') {
                    println!();
                }
            }
            Err(e) => tracing::error!(error = %e, "failed to render report"),
        },
    }
    Ok(())
}
