// File: crates/eventline-core/src/grid.rs
// Summary: Tick layout and label formatting for both axes.

use chrono::NaiveDateTime;

/// Ticks per axis, gridlines included.
pub const TICK_COUNT: usize = 6;

/// `count` evenly spaced values across [min, max], endpoints included.
pub fn tick_positions(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| min + step * i as f64).collect()
        }
    }
}

/// X tick label: MM/DD/YYYY.
pub fn format_date_tick(date: NaiveDateTime) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Y tick label: default numeric formatting, integers without a fraction.
pub fn format_value_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.2}")
    }
}
