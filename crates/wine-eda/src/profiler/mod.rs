//! Read-only profiling of the sample table.
//!
//! Every function here takes the loaded table by shared reference and
//! computes a summary without touching the data: class balance, per-feature
//! statistics, per-class feature splits and the correlation matrix.

mod statistics;

use crate::dataset::{CLASS_NAMES, TARGET_COLUMN};
use crate::error::{EdaError, Result};
use crate::types::{ClassBalance, ClassCount, CorrelationMatrix, FeatureSummary};
use polars::prelude::*;

pub(crate) use statistics::column_values;

/// Feature column names in their original table order (everything except
/// the target column).
pub fn feature_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .filter(|name| name.as_str() != TARGET_COLUMN)
        .map(|name| name.to_string())
        .collect()
}

/// Count and percentage of rows per class, ordered by descending count.
pub fn class_balance(df: &DataFrame) -> Result<ClassBalance> {
    let total = df.height();
    if total == 0 {
        return Err(EdaError::NoValidValues(TARGET_COLUMN.to_string()));
    }

    let target = df
        .column(TARGET_COLUMN)
        .map_err(|_| EdaError::ColumnNotFound(TARGET_COLUMN.to_string()))?
        .as_materialized_series();
    let target = target.str()?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in target.into_iter().flatten() {
        match counts.iter_mut().find(|(name, _)| name == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let classes = counts
        .into_iter()
        .map(|(name, count)| ClassCount {
            name,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    Ok(ClassBalance { total, classes })
}

/// Mean, median, sample standard deviation and range for every feature
/// column, in canonical column order.
pub fn feature_summaries(df: &DataFrame) -> Result<Vec<FeatureSummary>> {
    let mut summaries = Vec::new();
    for name in feature_names(df) {
        let values = column_values(df, &name)?;
        if values.is_empty() {
            return Err(EdaError::NoValidValues(name));
        }
        summaries.push(FeatureSummary {
            mean: statistics::mean(&values),
            median: statistics::median(&values),
            std: statistics::sample_std(&values),
            range: statistics::value_range(&values),
            name,
        });
    }
    Ok(summaries)
}

/// Full pairwise Pearson correlation matrix over the feature columns.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let names = feature_names(df);
    let columns = names
        .iter()
        .map(|name| column_values(df, name))
        .collect::<Result<Vec<_>>>()?;

    let n = names.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = statistics::pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { names, values })
}

/// One feature column split by class, in [`CLASS_NAMES`] order.
///
/// Classes absent from the table come back as empty groups; callers that
/// draw per-class distributions skip those.
pub fn values_by_class(df: &DataFrame, feature: &str) -> Result<Vec<(String, Vec<f64>)>> {
    let feature_series = df
        .column(feature)
        .map_err(|_| EdaError::ColumnNotFound(feature.to_string()))?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let feature_values = feature_series.f64()?;

    let target = df
        .column(TARGET_COLUMN)
        .map_err(|_| EdaError::ColumnNotFound(TARGET_COLUMN.to_string()))?
        .as_materialized_series();
    let target = target.str()?;

    let mut groups: Vec<(String, Vec<f64>)> = CLASS_NAMES
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();
    for (value, label) in feature_values.into_iter().zip(target.into_iter()) {
        if let (Some(value), Some(label)) = (value, label) {
            if let Some((_, bucket)) = groups.iter_mut().find(|(name, _)| name == label) {
                bucket.push(value);
            }
        }
    }

    Ok(groups)
}
