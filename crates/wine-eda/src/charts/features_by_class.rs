//! Boxplot grid: the first six features, each split by class.

use crate::charts::{DrawResult, GRID_FEATURES, render_error};
use crate::error::Result;
use crate::profiler;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

const WIDTH: u32 = 2100;
const HEIGHT: u32 = 2100;

const BOX_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

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
        let groups: Vec<(String, Vec<f64>)> = profiler::values_by_class(df, feature)?
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .collect();

        let boxes: Vec<(String, Quartiles)> = groups
            .into_iter()
            .map(|(name, values)| (name, Quartiles::new(&values)))
            .collect();
        let labels: Vec<String> = boxes.iter().map(|(name, _)| name.clone()).collect();
        let class_count = boxes.len();

        // Whiskers can extend past the raw data, so the axis range comes
        // from the quartile values themselves.
        let y_lo = boxes
            .iter()
            .flat_map(|(_, q)| q.values())
            .fold(f32::INFINITY, f32::min);
        let y_hi = boxes
            .iter()
            .flat_map(|(_, q)| q.values())
            .fold(f32::NEG_INFINITY, f32::max);
        let pad = ((y_hi - y_lo) * 0.05).max(0.5);

        let mut chart = ChartBuilder::on(panel)
            .caption(format!("Boxplot: {feature} по классам"), ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                -0.5f64..(class_count as f64 - 0.5),
                (y_lo - pad)..(y_hi + pad),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(class_count)
            .x_label_formatter(&|x| {
                let index = x.round();
                if index < 0.0 || (x - index).abs() > 0.3 {
                    return String::new();
                }
                labels.get(index as usize).cloned().unwrap_or_default()
            })
            .y_desc(feature.as_str())
            .label_style(("sans-serif", 18))
            .axis_desc_style(("sans-serif", 20))
            .draw()?;

        chart.draw_series(boxes.iter().enumerate().map(|(i, (_, quartiles))| {
            Boxplot::new_vertical(i as f64, quartiles)
                .width(60)
                .whisker_width(0.5)
                .style(BOX_COLORS[i % BOX_COLORS.len()].stroke_width(2))
        }))?;
    }

    root.present()?;
    Ok(())
}
