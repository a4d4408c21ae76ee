//! Static chart renderers built on plotters.
//!
//! Each renderer takes the read-only table (or a summary computed from it),
//! draws one PNG and overwrites any previous file at the target path. Pixel
//! sizes correspond to the original 150 DPI figure dimensions.

pub mod class_distribution;
pub mod correlation_heatmap;
pub mod feature_histograms;
pub mod features_by_class;

use crate::error::EdaError;
use std::path::Path;

/// Fixed output filenames, one per renderer.
pub const TARGET_DISTRIBUTION_FILE: &str = "02_wine_target_distribution.png";
pub const FEATURE_DISTRIBUTION_FILE: &str = "02_wine_features_distribution.png";
pub const FEATURES_BY_CLASS_FILE: &str = "02_wine_features_by_class.png";
pub const CORRELATION_MATRIX_FILE: &str = "02_wine_correlation_matrix.png";

/// Grid charts cover the first six feature columns of the table.
pub const GRID_FEATURES: usize = 6;

/// Bin count for the feature histograms.
pub const HISTOGRAM_BINS: usize = 20;

/// Internal result type for the drawing bodies; plotters backend errors are
/// type-parameterized, so they are boxed here and converted into
/// [`EdaError::ChartRender`] at the renderer boundary.
pub(crate) type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

pub(crate) fn render_error(path: &Path, reason: impl std::fmt::Display) -> EdaError {
    EdaError::ChartRender {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
