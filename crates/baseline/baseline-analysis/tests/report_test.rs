//! Report filtering and serialization properties.

use baseline_analysis::report::sink::{self, ReportFormat};
use baseline_analysis::report::{ReportFilter, ScanResults};
use baseline_core::{ClassifiedFeature, FileType, Occurrence, Status};
use proptest::prelude::*;

const NAMES: &[&str] = &["fetch", ":has", "gap", "subgrid", "WeakRef", "container queries"];

fn feature_strategy() -> impl Strategy<Value = ClassifiedFeature> {
    (
        0..NAMES.len(),
        "[a-z]{1,6}",
        prop_oneof![Just("js"), Just("css")],
        1u32..500,
        any::<bool>(),
    )
        .prop_map(|(name, stem, ext, line, baseline)| ClassifiedFeature {
            occurrence: Occurrence::new(NAMES[name], NAMES[name], line, format!("{stem}.{ext}")),
            status: if baseline {
                Status::Baseline
            } else {
                Status::NonBaseline
            },
        })
}

proptest! {
    #[test]
    fn css_filter_keeps_only_css_and_counts_match(
        features in proptest::collection::vec(feature_strategy(), 0..40)
    ) {
        let results: ScanResults = features.into_iter().collect();
        let report = results.report(&ReportFilter::all().with_file_type(FileType::Css));

        prop_assert!(report.features.iter().all(|f| f.file.ends_with(".css")));
        let expected = results
            .features()
            .iter()
            .filter(|f| f.file().ends_with(".css"))
            .count();
        prop_assert_eq!(report.features.len(), expected);
        prop_assert_eq!(report.summary.total(), expected);
        let baseline = report
            .features
            .iter()
            .filter(|f| f.status == Status::Baseline)
            .count();
        prop_assert_eq!(report.summary.baseline, baseline);
    }

    #[test]
    fn csv_and_json_exports_agree(
        features in proptest::collection::vec(feature_strategy(), 0..20),
        query in prop_oneof![Just("fetch"), Just("gap"), Just("js")],
    ) {
        let results: ScanResults = features.into_iter().collect();
        let report = results.report(&ReportFilter::from_cli_value(query));

        let json = sink::render(&report, ReportFormat::Json).unwrap();
        let csv = sink::render(&report, ReportFormat::Csv).unwrap();
        let from_json = sink::from_json(&json).unwrap().features;
        let from_csv = sink::from_csv(&csv).unwrap();
        prop_assert_eq!(from_json, from_csv);
    }
}

#[test]
fn written_report_can_be_read_back() {
    let results: ScanResults = vec![ClassifiedFeature {
        occurrence: Occurrence::new("fetch", "fetch", 3, "src/api.js".to_string()),
        status: Status::Baseline,
    }]
    .into_iter()
    .collect();
    let report = results.report(&ReportFilter::all());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    sink::write_report(&path, &report, ReportFormat::Csv).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "name,status,file,line\nfetch,baseline,src/api.js,3\n");
}
