//! Console output.

use std::path::Path;

use baseline_analysis::classify::Classifier;
use baseline_analysis::detectors::MatcherRegistry;
use baseline_analysis::report::Report;
use baseline_analysis::scanner::ScanOutcome;

/// Summary table printed after a report has been written to a file.
pub fn print_summary(report: &Report, outcome: &ScanOutcome, written_to: Option<&Path>) {
    println!("{:<16} {:>6}", "Files scanned", outcome.files_scanned);
    if !outcome.failures.is_empty() {
        println!("{:<16} {:>6}", "Files skipped", outcome.failures.len());
    }
    println!("{:<16} {:>6}", "Baseline", report.summary.baseline);
    println!("{:<16} {:>6}", "Non-Baseline", report.summary.non_baseline);
    println!("{:<16} {:>6}", "Total", report.summary.total());
    if let Some(path) = written_to {
        println!();
        println!("Report written to {}", path.display());
    }
}

/// Every detection rule with the status its key currently classifies as.
pub fn print_catalog(matchers: &MatcherRegistry, classifier: &Classifier) {
    println!("{:<10} {:<26} {:<24} STATUS", "LANG", "FEATURE", "KEY");
    for rule in matchers.catalog() {
        println!(
            "{:<10} {:<26} {:<24} {}",
            rule.dialect.name(),
            rule.display_name,
            rule.feature_key,
            classifier.status_of(rule.feature_key)
        );
    }
}
