// File: crates/eventline-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms derived from a dataset.

use chrono::{DateTime, NaiveDateTime};

use crate::grid::tick_positions;
use crate::record::Dataset;
use crate::types::RenderOptions;

/// Padding factors for the value domain: [min * PAD_LOW, max * PAD_HIGH].
/// Fixed by design and applied verbatim even for negative minima.
pub const PAD_LOW: f64 = 0.9;
pub const PAD_HIGH: f64 = 1.1;

/// Horizontal scale: linear in time over [min, max] -> [left_px, left_px + width_px].
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    left_px: f32,
    t_min: f64,
    t_max: f64,
    width_px: f32,
}

impl TimeScale {
    pub fn new(left_px: f32, min: NaiveDateTime, max: NaiveDateTime, width_px: f32) -> Self {
        Self { left_px, t_min: millis(min), t_max: millis(max), width_px }
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDateTime) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-9);
        self.left_px + (((millis(date) - self.t_min) / span) as f32) * self.width_px
    }

    /// `count` evenly spaced tick instants across the domain, endpoints included.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        tick_positions(self.t_min, self.t_max, count)
            .into_iter()
            .filter_map(|ms| DateTime::from_timestamp_millis(ms.round() as i64))
            .map(|dt| dt.naive_utc())
            .collect()
    }
}

/// Vertical scale: linear over the padded value domain, inverted so larger
/// values map to smaller pixel y.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    top_px: f32,
    bottom_px: f32,
    v_low: f64,
    v_high: f64,
}

impl ValueScale {
    /// Build from the raw value extent; applies the fixed padding factors.
    pub fn new_padded(top_px: f32, bottom_px: f32, v_min: f64, v_max: f64) -> Self {
        let v_low = v_min * PAD_LOW;
        let mut v_high = v_max * PAD_HIGH;
        if (v_high - v_low).abs() < 1e-9 {
            v_high = v_low + 1.0;
        }
        Self { top_px, bottom_px, v_low, v_high }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.v_high - self.v_low;
        self.bottom_px - (((v - self.v_low) / span) as f32) * (self.bottom_px - self.top_px)
    }

    /// Padded domain as (low, high).
    pub fn domain(&self) -> (f64, f64) { (self.v_low, self.v_high) }

    /// `count` evenly spaced tick values across the padded domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        tick_positions(self.v_low, self.v_high, count)
    }
}

/// Derive both scales from a dataset and the surface geometry.
/// Precondition: the dataset is non-empty; callers gate rendering on that.
pub fn build_scales(dataset: &Dataset, opts: &RenderOptions) -> (TimeScale, ValueScale) {
    debug_assert!(!dataset.is_empty(), "build_scales called with empty dataset");
    let (d_min, d_max) = dataset
        .date_extent()
        .unwrap_or((NaiveDateTime::default(), NaiveDateTime::default()));
    let (v_min, v_max) = dataset.value_extent().unwrap_or((0.0, 1.0));
    (
        TimeScale::new(opts.plot_left(), d_min, d_max, opts.plot_width()),
        ValueScale::new_padded(opts.plot_top(), opts.plot_bottom(), v_min, v_max),
    )
}

fn millis(date: NaiveDateTime) -> f64 {
    date.and_utc().timestamp_millis() as f64
}
