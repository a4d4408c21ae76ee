//! Wine Dataset Exploratory Analysis
//!
//! A one-shot exploratory-data-analysis pass over the classic Wine
//! classification dataset (178 samples, 13 numeric features, 3 classes),
//! built on Polars for the tabular work and plotters for the chart output.
//!
//! # Overview
//!
//! The pipeline is strictly linear:
//!
//! - **Loading**: the bundled dataset is parsed once into an immutable
//!   [`polars::frame::DataFrame`] with human-readable class labels
//! - **Profiling**: class balance, per-feature statistics and the pairwise
//!   correlation matrix are computed from the read-only table
//! - **Reporting**: the summaries are printed as fixed-format console tables
//! - **Rendering**: four PNG charts are written next to the binary
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let df = wine_eda::dataset::load()?;
//! let images = wine_eda::pipeline::run(&df, Path::new("."))?;
//! println!("wrote {} charts", images.len());
//! # Ok::<(), wine_eda::EdaError>(())
//! ```

pub mod charts;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod profiler;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use types::{ClassBalance, ClassCount, CorrelationMatrix, FeatureSummary};
