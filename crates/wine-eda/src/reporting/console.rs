//! Fixed-format console tables.
//!
//! These functions use `println!` intentionally: this is the user-facing
//! output of the analysis and must always be visible regardless of the log
//! level, while step progress goes through `tracing`.

use crate::types::{ClassBalance, CorrelationMatrix, FeatureSummary};
use polars::prelude::*;

/// Number of feature columns shown in the console correlation preview.
pub(crate) const CORRELATION_PREVIEW: usize = 6;

const BANNER_WIDTH: usize = 60;

/// Opening banner plus table shape and the first rows.
pub fn print_overview(df: &DataFrame) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("EXPLORATORY DATA ANALYSIS - WINE DATASET");
    println!("{}", "=".repeat(BANNER_WIDTH));

    println!("\nДатасет загружен. Размер: ({}, {})", df.height(), df.width());
    println!("\nПервые 5 строк:");
    println!("{}", df.head(Some(5)));
}

/// Per-class counts and percentages, 2 decimal places.
pub fn print_class_balance(balance: &ClassBalance) {
    println!("\n=== АНАЛИЗ ЦЕЛЕВОЙ ПЕРЕМЕННОЙ ===");
    println!("Количество образцов по классам:");
    for class in &balance.classes {
        println!("{:<10} {:>6}", class.name, class.count);
    }
    println!("\nПроцентное соотношение:");
    for class in &balance.classes {
        println!("{:<10} {:>9.2}", class.name, class.percentage);
    }
}

/// Per-feature statistics table, 3 decimal places.
pub fn print_feature_summaries(summaries: &[FeatureSummary]) {
    println!("\n=== СТАТИСТИКА ПО ПРИЗНАКАМ ===");
    println!(
        "{:<30} {:>10} {:>10} {:>10} {:>10}",
        "", "mean", "median", "std", "range"
    );
    for summary in summaries {
        println!(
            "{:<30.30} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            summary.name, summary.mean, summary.median, summary.std, summary.range
        );
    }
}

/// Top-left block of the correlation matrix, 2 decimal places.
pub fn print_correlation_block(matrix: &CorrelationMatrix) {
    println!("\n=== МАТРИЦА КОРРЕЛЯЦИИ (первые 6 признаков) ===");
    let shown = matrix.len().min(CORRELATION_PREVIEW);

    print!("{:<30}", "");
    for name in &matrix.names[..shown] {
        print!(" {:>9.9}", name);
    }
    println!();

    for i in 0..shown {
        print!("{:<30.30}", matrix.names[i]);
        for j in 0..shown {
            print!(" {:>9.2}", matrix.values[i][j]);
        }
        println!();
    }
}

/// Closing banner.
pub fn print_completion() {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("Анализ завершен!");
    println!("{}", "=".repeat(BANNER_WIDTH));
}
