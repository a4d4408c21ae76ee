//! Loader for the bundled Wine dataset.
//!
//! The raw data (178 samples, 13 numeric measurements, 3 cultivars) ships
//! inside the crate and is parsed once at startup into a [`DataFrame`].
//! The integer class labels of the raw file are replaced with the
//! human-readable class names before the table is handed out.

use crate::error::{EdaError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;

/// Name of the categorical label column.
pub const TARGET_COLUMN: &str = "target";

/// The three wine classes, indexed by the raw integer label.
pub const CLASS_NAMES: [&str; 3] = ["class_0", "class_1", "class_2"];

/// Feature columns in the dataset's canonical metadata order.
///
/// Grid visualizations take "the first six features" from this ordering,
/// so it must stay in sync with the header of `data/wine.csv`.
pub const FEATURE_NAMES: [&str; 13] = [
    "alcohol",
    "malic_acid",
    "ash",
    "alcalinity_of_ash",
    "magnesium",
    "total_phenols",
    "flavanoids",
    "nonflavanoid_phenols",
    "proanthocyanins",
    "color_intensity",
    "hue",
    "od280/od315_of_diluted_wines",
    "proline",
];

const WINE_CSV: &str = include_str!("../data/wine.csv");

/// Parse the embedded dataset into the sample table.
///
/// The returned table has the 13 feature columns of [`FEATURE_NAMES`] plus
/// the [`TARGET_COLUMN`] holding class names. It is never mutated afterwards.
pub fn load() -> Result<DataFrame> {
    let cursor = Cursor::new(WINE_CSV.as_bytes());
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(cursor)
        .finish()?;
    map_target_labels(df)
}

/// Replace the raw integer labels with the class names of [`CLASS_NAMES`].
fn map_target_labels(mut df: DataFrame) -> Result<DataFrame> {
    let labels = df
        .column(TARGET_COLUMN)
        .map_err(|_| EdaError::ColumnNotFound(TARGET_COLUMN.to_string()))?
        .as_materialized_series()
        .cast(&DataType::Int64)?;

    let mut names: Vec<&str> = Vec::with_capacity(labels.len());
    for label in labels.i64()? {
        let label =
            label.ok_or_else(|| EdaError::MalformedDataset("null class label".to_string()))?;
        let name = usize::try_from(label)
            .ok()
            .and_then(|index| CLASS_NAMES.get(index).copied())
            .ok_or_else(|| {
                EdaError::MalformedDataset(format!("unknown class label '{label}'"))
            })?;
        names.push(name);
    }

    df.with_column(Series::new(TARGET_COLUMN.into(), names))?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_shape() {
        let df = load().unwrap();
        assert_eq!(df.shape(), (178, 14));
    }

    #[test]
    fn test_column_order_matches_feature_names() {
        let df = load().unwrap();
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(&columns[..13], &FEATURE_NAMES);
        assert_eq!(columns[13], TARGET_COLUMN);
    }

    #[test]
    fn test_target_labels_are_class_names() {
        let df = load().unwrap();
        let target = df.column(TARGET_COLUMN).unwrap().as_materialized_series();
        let target = target.str().unwrap();
        for value in target.into_iter().flatten() {
            assert!(CLASS_NAMES.contains(&value), "unexpected label {value}");
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let alcohol = Series::new("alcohol".into(), &[13.0f64, 12.5]);
        let target = Series::new(TARGET_COLUMN.into(), &[0i64, 7]);
        let df = DataFrame::new(vec![alcohol.into_column(), target.into_column()]).unwrap();
        let error = map_target_labels(df).unwrap_err();
        assert!(matches!(error, EdaError::MalformedDataset(_)));
    }
}
