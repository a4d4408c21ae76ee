//! Bar and pie charts of the class distribution, side by side in one image.

use crate::charts::{DrawResult, render_error};
use crate::error::Result;
use crate::types::ClassBalance;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 750;

const BAR_FILL: RGBColor = RGBColor(135, 206, 235);
const PIE_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// Starting angle of the first pie wedge, in degrees.
const PIE_START_ANGLE: f64 = 90.0;

pub fn render(balance: &ClassBalance, path: &Path) -> Result<()> {
    draw(balance, path).map_err(|e| render_error(path, e))
}

fn draw(balance: &ClassBalance, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (bar_area, pie_area) = root.split_horizontally((WIDTH / 2) as i32);

    draw_bars(&bar_area, balance)?;
    draw_pie(&pie_area, balance)?;

    root.present()?;
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    balance: &ClassBalance,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let labels: Vec<String> = balance.classes.iter().map(|c| c.name.clone()).collect();
    let class_count = balance.classes.len();
    let max_count = balance.classes.iter().map(|c| c.count).max().unwrap_or(0);

    let mut chart = ChartBuilder::on(area)
        .caption("Распределение классов вин", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(
            -0.5f64..(class_count as f64 - 0.5),
            0f64..(max_count as f64 * 1.1),
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
        .x_desc("Класс")
        .y_desc("Количество")
        .label_style(("sans-serif", 22))
        .axis_desc_style(("sans-serif", 26))
        .draw()?;

    chart.draw_series(balance.classes.iter().enumerate().map(|(i, class)| {
        Rectangle::new(
            [
                (i as f64 - 0.35, 0.0),
                (i as f64 + 0.35, class.count as f64),
            ],
            BAR_FILL.filled(),
        )
    }))?;

    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    balance: &ClassBalance,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let area = area.titled("Процентное распределение классов", ("sans-serif", 36))?;

    let sizes: Vec<f64> = balance.classes.iter().map(|c| c.count as f64).collect();
    let labels: Vec<String> = balance
        .classes
        .iter()
        .map(|c| format!("{} ({:.1}%)", c.name, c.percentage))
        .collect();
    let colors: Vec<RGBColor> = (0..balance.classes.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let (width, height) = area.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(PIE_START_ANGLE);
    pie.label_style(("sans-serif", 24).into_font().color(&BLACK));
    area.draw(&pie)?;

    Ok(())
}
