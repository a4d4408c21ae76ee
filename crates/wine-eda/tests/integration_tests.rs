//! Integration tests for the wine analysis pipeline.
//!
//! These tests exercise the real embedded dataset end-to-end: loading,
//! profiling invariants, chart output and the full pipeline run.

use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use wine_eda::dataset::{self, CLASS_NAMES, FEATURE_NAMES, TARGET_COLUMN};
use wine_eda::{charts, pipeline, profiler};

// ============================================================================
// Helper Functions
// ============================================================================

fn load() -> DataFrame {
    dataset::load().expect("embedded dataset should load")
}

fn raw_column(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .expect("column should exist")
        .as_materialized_series()
        .cast(&DataType::Float64)
        .expect("feature columns are numeric")
        .f64()
        .expect("cast produced f64")
        .into_no_null_iter()
        .collect()
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn test_load_yields_full_sample_table() {
    let df = load();
    assert_eq!(df.shape(), (178, 14));

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(&columns[..13], &FEATURE_NAMES);
    assert_eq!(columns[13], TARGET_COLUMN);
}

#[test]
fn test_load_target_has_exactly_three_classes() {
    let df = load();
    let balance = profiler::class_balance(&df).unwrap();

    let mut names: Vec<&str> = balance.classes.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, CLASS_NAMES);
}

#[test]
fn test_known_class_split() {
    let df = load();
    let balance = profiler::class_balance(&df).unwrap();

    let count_of = |class: &str| {
        balance
            .classes
            .iter()
            .find(|c| c.name == class)
            .map(|c| c.count)
            .unwrap_or(0)
    };
    assert_eq!(count_of("class_0"), 59);
    assert_eq!(count_of("class_1"), 71);
    assert_eq!(count_of("class_2"), 48);
}

// ============================================================================
// Profiler Tests
// ============================================================================

#[test]
fn test_class_counts_and_percentages_sum_up() {
    let df = load();
    let balance = profiler::class_balance(&df).unwrap();

    let count_sum: usize = balance.classes.iter().map(|c| c.count).sum();
    assert_eq!(count_sum, 178);

    let percentage_sum: f64 = balance.classes.iter().map(|c| c.percentage).sum();
    assert!((percentage_sum - 100.0).abs() < 0.1);
}

#[test]
fn test_class_balance_is_sorted_by_descending_count() {
    let df = load();
    let balance = profiler::class_balance(&df).unwrap();
    for pair in balance.classes.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[test]
fn test_feature_summary_invariants() {
    let df = load();
    let summaries = profiler::feature_summaries(&df).unwrap();
    assert_eq!(summaries.len(), 13);

    for summary in &summaries {
        let values = raw_column(&df, &summary.name);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(summary.range, max - min, "range of {}", summary.name);
        assert!(summary.std >= 0.0, "std of {}", summary.name);
        assert!(summary.mean >= min && summary.mean <= max);
        assert!(summary.median >= min && summary.median <= max);
    }
}

#[test]
fn test_first_six_features_follow_canonical_order() {
    let df = load();
    let names = profiler::feature_names(&df);
    assert_eq!(
        &names[..6],
        &[
            "alcohol",
            "malic_acid",
            "ash",
            "alcalinity_of_ash",
            "magnesium",
            "total_phenols",
        ]
    );
}

#[test]
fn test_correlation_matrix_is_symmetric_with_unit_diagonal() {
    let df = load();
    let matrix = profiler::correlation_matrix(&df).unwrap();
    assert_eq!(matrix.len(), 13);

    for i in 0..matrix.len() {
        assert!(
            (matrix.values[i][i] - 1.0).abs() < 1e-9,
            "diagonal at {i}"
        );
        for j in 0..matrix.len() {
            assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            assert!(matrix.values[i][j].abs() <= 1.0 + 1e-9);
        }
    }
}

// ============================================================================
// Renderer Tests
// ============================================================================

#[test]
fn test_each_renderer_writes_a_non_empty_file() {
    let df = load();
    let dir = tempfile::tempdir().unwrap();

    let balance = profiler::class_balance(&df).unwrap();
    let matrix = profiler::correlation_matrix(&df).unwrap();

    let target = dir.path().join(charts::TARGET_DISTRIBUTION_FILE);
    charts::class_distribution::render(&balance, &target).unwrap();

    let histograms = dir.path().join(charts::FEATURE_DISTRIBUTION_FILE);
    charts::feature_histograms::render(&df, &histograms).unwrap();

    let boxplots = dir.path().join(charts::FEATURES_BY_CLASS_FILE);
    charts::features_by_class::render(&df, &boxplots).unwrap();

    let heatmap = dir.path().join(charts::CORRELATION_MATRIX_FILE);
    charts::correlation_heatmap::render(&matrix, &heatmap).unwrap();

    for path in [&target, &histograms, &boxplots, &heatmap] {
        let metadata = fs::metadata(path).expect("chart file should exist");
        assert!(metadata.len() > 0, "{} is empty", path.display());
    }
}

#[test]
fn test_rendering_twice_overwrites_the_file() {
    let df = load();
    let dir = tempfile::tempdir().unwrap();
    let balance = profiler::class_balance(&df).unwrap();
    let path = dir.path().join(charts::TARGET_DISTRIBUTION_FILE);

    charts::class_distribution::render(&balance, &path).unwrap();
    let first_len = fs::metadata(&path).unwrap().len();

    charts::class_distribution::render(&balance, &path).unwrap();
    let second_len = fs::metadata(&path).unwrap().len();

    // Same input, same image: an appending writer would grow the file.
    assert_eq!(first_len, second_len);
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_full_pipeline_writes_exactly_four_images() {
    let df = load();
    let dir = tempfile::tempdir().unwrap();

    let images = pipeline::run(&df, dir.path()).unwrap();
    assert_eq!(images.len(), 4);

    for path in &images {
        let metadata = fs::metadata(path).expect("pipeline image should exist");
        assert!(metadata.len() > 0, "{} is empty", path.display());
    }

    let written: usize = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(written, 4);
}
