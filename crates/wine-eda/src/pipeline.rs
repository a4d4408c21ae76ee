//! Fixed-order execution of the analysis steps.
//!
//! The table is computed once by the loader; every reporter and renderer
//! receives it by shared reference, in the order the report sections appear
//! on the console. Any failing step aborts the whole run.

use crate::charts;
use crate::error::{Result, ResultExt};
use crate::{profiler, reporting};
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run every reporter and renderer over the loaded table and return the
/// paths of the chart images that were written to `output_dir`.
pub fn run(df: &DataFrame, output_dir: &Path) -> Result<Vec<PathBuf>> {
    reporting::print_overview(df);

    let balance = profiler::class_balance(df).context("analyzing the target column")?;
    reporting::print_class_balance(&balance);

    let summaries = profiler::feature_summaries(df).context("computing feature statistics")?;
    reporting::print_feature_summaries(&summaries);

    let mut images = Vec::new();

    let target_path = output_dir.join(charts::TARGET_DISTRIBUTION_FILE);
    info!("Rendering class distribution chart: {}", target_path.display());
    charts::class_distribution::render(&balance, &target_path)?;
    images.push(target_path);

    let histogram_path = output_dir.join(charts::FEATURE_DISTRIBUTION_FILE);
    info!("Rendering feature histograms: {}", histogram_path.display());
    charts::feature_histograms::render(df, &histogram_path)?;
    images.push(histogram_path);

    let boxplot_path = output_dir.join(charts::FEATURES_BY_CLASS_FILE);
    info!("Rendering per-class boxplots: {}", boxplot_path.display());
    charts::features_by_class::render(df, &boxplot_path)?;
    images.push(boxplot_path);

    let matrix = profiler::correlation_matrix(df).context("computing the correlation matrix")?;
    reporting::print_correlation_block(&matrix);

    let heatmap_path = output_dir.join(charts::CORRELATION_MATRIX_FILE);
    info!("Rendering correlation heatmap: {}", heatmap_path.display());
    charts::correlation_heatmap::render(&matrix, &heatmap_path)?;
    images.push(heatmap_path);

    reporting::print_completion();

    Ok(images)
}
