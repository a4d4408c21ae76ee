//! Histogram grid over the first six feature columns.

use crate::charts::{DrawResult, GRID_FEATURES, HISTOGRAM_BINS, render_error};
use crate::error::{EdaError, Result};
use crate::profiler;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 1800;

const BAR_FILL: RGBColor = RGBColor(144, 238, 144);

pub fn render(df: &DataFrame, path: &Path) -> Result<()> {
    draw(df, path).map_err(|e| render_error(path, e))
}

fn draw(df: &DataFrame, path: &Path) -> DrawResult {
    let features: Vec<String> = profiler::feature_names(df)
        .into_iter()
        .take(GRID_FEATURES)
        .collect();

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 2));

    for (panel, feature) in panels.iter().zip(&features) {
        let values = profiler::column_values(df, feature)?;
        if values.is_empty() {
            return Err(Box::new(EdaError::NoValidValues(feature.clone())));
        }
        let bins = bin_values(&values, HISTOGRAM_BINS);
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
        let x_lo = bins.first().map(|b| b.lower).unwrap_or(0.0);
        let x_hi = bins.last().map(|b| b.upper).unwrap_or(1.0);

        let mut chart = ChartBuilder::on(panel)
            .caption(format!("Гистограмма: {feature}"), ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, 0f64..(max_count as f64 * 1.1))?;

        chart
            .configure_mesh()
            .x_desc(feature.as_str())
            .y_desc("Частота")
            .label_style(("sans-serif", 18))
            .axis_desc_style(("sans-serif", 20))
            .draw()?;

        chart.draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                BAR_FILL.filled(),
            )
        }))?;
        chart.draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                BLACK.stroke_width(1),
            )
        }))?;
    }

    root.present()?;
    Ok(())
}

struct Bin {
    lower: f64,
    upper: f64,
    count: usize,
}

/// Split `values` into `bins` equal-width bins spanning [min, max].
///
/// Values on the top edge land in the last bin. A zero-width value range
/// collapses to a single bin around the constant value.
fn bin_values(values: &[f64], bins: usize) -> Vec<Bin> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bin {
            lower: min - 0.5,
            upper: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let mut index = ((value - min) / width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_values_counts_sum_to_input_len() {
        let values = [1.0, 1.5, 2.0, 2.5, 3.0, 10.0];
        let bins = bin_values(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn test_bin_values_top_edge_in_last_bin() {
        let values = [0.0, 10.0];
        let bins = bin_values(&values, 2);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn test_bin_values_constant_column() {
        let values = [3.0, 3.0, 3.0];
        let bins = bin_values(&values, 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }
}
