//! Heatmap of the full feature correlation matrix.

use crate::charts::{DrawResult, render_error};
use crate::error::Result;
use crate::types::CorrelationMatrix;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 1500;

// Endpoints of the diverging scale: blue for -1, red for +1.
const NEGATIVE: RGBColor = RGBColor(59, 76, 192);
const POSITIVE: RGBColor = RGBColor(180, 4, 38);
const NEUTRAL: RGBColor = RGBColor(221, 221, 221);

pub fn render(matrix: &CorrelationMatrix, path: &Path) -> Result<()> {
    draw(matrix, path).map_err(|e| render_error(path, e))
}

fn draw(matrix: &CorrelationMatrix, path: &Path) -> DrawResult {
    let n = matrix.len();
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Матрица корреляции признаков", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(230)
        .y_label_area_size(280)
        .build_cartesian_2d(
            -0.5f64..(n as f64 - 0.5),
            -0.5f64..(n as f64 - 0.5),
        )?;

    let x_names = matrix.names.clone();
    // Rows are drawn top-down, so the y axis labels run in reverse.
    let y_names: Vec<String> = matrix.names.iter().rev().cloned().collect();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|x| label_at(&x_names, *x))
        .y_label_formatter(&|y| label_at(&y_names, *y))
        .x_label_style(
            ("sans-serif", 18)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style(("sans-serif", 18))
        .draw()?;

    let mut cells = Vec::with_capacity(n * n);
    for (i, row) in matrix.values.iter().enumerate() {
        let y = (n - 1 - i) as f64;
        for (j, &value) in row.iter().enumerate() {
            cells.push(Rectangle::new(
                [
                    (j as f64 - 0.5, y - 0.5),
                    (j as f64 + 0.5, y + 0.5),
                ],
                diverging_color(value).filled(),
            ));
        }
    }
    chart.draw_series(cells)?;

    root.present()?;
    Ok(())
}

/// Axis label for a tick position, empty between cell centers.
fn label_at(names: &[String], position: f64) -> String {
    let index = position.round();
    if index < 0.0 || (position - index).abs() > 0.3 {
        return String::new();
    }
    names.get(index as usize).cloned().unwrap_or_default()
}

/// Map a correlation in [-1, 1] onto a blue-white-red diverging scale
/// centered at zero.
fn diverging_color(value: f64) -> RGBColor {
    let t = value.clamp(-1.0, 1.0);
    if t < 0.0 {
        lerp(NEUTRAL, NEGATIVE, -t)
    } else {
        lerp(NEUTRAL, POSITIVE, t)
    }
}

fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
