//! End-to-end tests: reputation file -> distribution -> metrics -> chart.

use std::io::Write;

use repute_core::constants::DEFAULT_PRECISION;
use repute_core::error::{LoadError, MetricsError};
use repute_core::loader::load_reputations;
use repute_core::traits::DecentralizationMetrics;
use repute_core::types::{NakamotoResult, ReputationDistribution};
use repute_metrics::{gini, lorenz_curve, nakamoto, MetricsEngine};
use repute_tests::helpers::*;
use repute_viz::{render_analysis, write_analysis, RenderConfig};

fn write_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn crlf_file_full_pipeline() {
    let file = write_file(&file_body(&[10.0, 0.0, 0.0, 0.0], "\r\n"));
    let values = load_reputations(file.path()).unwrap();

    let engine = MetricsEngine::new();
    let dist = ReputationDistribution::new(values).unwrap();
    let report = engine.report(&dist, DEFAULT_PRECISION);

    assert_eq!(report.participants, 4);
    assert_eq!(report.gini, 0.75);
    assert_eq!(report.nakamoto, NakamotoResult { coefficient: 0.25, score: 1 });

    let curve = engine.lorenz_curve(&dist);
    let svg = render_analysis(&report, &curve, &RenderConfig::default()).unwrap();
    assert!(svg.contains("nakamoto_coefficient(0.25)"));
}

#[test]
fn lf_file_matches_crlf_file() {
    let values = heavy_tailed(200, 7);
    let lf = write_file(&file_body(&values, "\n"));
    let crlf = write_file(&file_body(&values, "\r\n"));
    assert_eq!(
        load_reputations(lf.path()).unwrap(),
        load_reputations(crlf.path()).unwrap()
    );
}

#[test]
fn file_values_match_in_memory_values() {
    let values = heavy_tailed(500, 42);
    let file = write_file(&file_body(&values, "\n"));
    let loaded = load_reputations(file.path()).unwrap();
    assert_eq!(gini(&loaded, 3).unwrap(), gini(&values, 3).unwrap());
    assert_eq!(nakamoto(&loaded, 3).unwrap(), nakamoto(&values, 3).unwrap());
}

#[test]
fn chart_written_to_disk() {
    let values = linear(20);
    let engine = MetricsEngine::new();
    let dist = ReputationDistribution::new(values).unwrap();
    let report = engine.report(&dist, 3);
    let curve = engine.lorenz_curve(&dist);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis.svg");
    let config = RenderConfig {
        title: "Linear DAO".to_string(),
        ..RenderConfig::default()
    };
    write_analysis(&path, &report, &curve, &config).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Linear DAO"));
    assert_eq!(svg.matches("<polyline").count(), 2);
}

#[test]
fn malformed_file_reports_line() {
    let file = write_file("1.0\r\n2.0\r\nthree\r\n");
    assert_eq!(
        load_reputations(file.path()),
        Err(LoadError::Parse {
            line: 3,
            content: "three".into()
        })
    );
}

#[test]
fn empty_file_is_empty_distribution() {
    let file = write_file("");
    let values = load_reputations(file.path()).unwrap();
    assert_eq!(gini(&values, 3), Err(MetricsError::EmptyDistribution));
}

#[test]
fn all_zero_file_is_division_by_zero() {
    let file = write_file("0\n0\n0\n");
    let values = load_reputations(file.path()).unwrap();
    assert_eq!(gini(&values, 3), Err(MetricsError::DivisionByZero));
    assert_eq!(nakamoto(&values, 3), Err(MetricsError::DivisionByZero));
    assert_eq!(lorenz_curve(&values), Err(MetricsError::DivisionByZero));
}

// --- concrete scenarios ---

#[test]
fn scenario_equal_four() {
    let values = [1.0, 1.0, 1.0, 1.0];
    assert_eq!(gini(&values, 3).unwrap(), 0.0);
    assert_eq!(
        nakamoto(&values, 3).unwrap(),
        NakamotoResult { coefficient: 0.5, score: 2 }
    );
}

#[test]
fn scenario_single_value() {
    let values = [7.0];
    assert_eq!(gini(&values, 3).unwrap(), 0.0);
    assert_eq!(
        nakamoto(&values, 3).unwrap(),
        NakamotoResult { coefficient: 1.0, score: 1 }
    );
    let curve = lorenz_curve(&values).unwrap();
    assert_eq!(curve.x, vec![0.0, 1.0]);
    assert_eq!(curve.y, vec![0.0, 1.0]);
}

#[test]
fn scenario_one_holds_all() {
    let values = single_holder(4, 10.0);
    assert_eq!(gini(&values, 3).unwrap(), 0.75);
    assert_eq!(
        nakamoto(&values, 3).unwrap(),
        NakamotoResult { coefficient: 0.25, score: 1 }
    );
}

#[test]
fn scenario_sort_invariance() {
    let a = gini(&[3.0, 1.0, 2.0], 3).unwrap();
    let b = gini(&[1.0, 2.0, 3.0], 3).unwrap();
    let c = gini(&[2.0, 3.0, 1.0], 3).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn integer_stakes_match_float_values() {
    let stakes: Vec<u64> = vec![1_000, 250, 250, 4_000, 0, 10];
    let floats: Vec<f64> = stakes.iter().map(|&s| s as f64).collect();
    let engine = MetricsEngine::new();
    let from_ints = ReputationDistribution::from_amounts(&stakes).unwrap();
    assert_eq!(engine.gini(&from_ints, 3), gini(&floats, 3).unwrap());
    assert_eq!(engine.nakamoto(&from_ints, 3), nakamoto(&floats, 3).unwrap());
}
