// File: crates/eventline-core/src/render.rs
// Summary: Pure frame renderer: gridlines, monotone line path, and axes as draw commands.

use crate::annotate;
use crate::curve::{monotone_cubic, CubicSegment};
use crate::grid::{format_date_tick, format_value_tick, TICK_COUNT};
use crate::record::Dataset;
use crate::scale::{build_scales, TimeScale, ValueScale};
use crate::theme::Theme;
use crate::types::{Point, RenderOptions, Rgba};

pub const LABEL_SIZE: f32 = 12.0;
const LINE_WIDTH: f32 = 2.0;
const TICK_LEN: f32 = 6.0;
const GRID_DASH: (f32, f32) = (3.0, 3.0);

/// Horizontal anchoring for text commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One drawing primitive. A frame is replayed onto a cleared surface, so
/// re-rendering can never accumulate stale primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f32,
        dash: Option<(f32, f32)>,
    },
    Path {
        start: Point,
        segments: Vec<CubicSegment>,
        color: Rgba,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    Text {
        pos: Point,
        text: String,
        color: Rgba,
        size: f32,
        anchor: Anchor,
        bold: bool,
    },
}

/// A complete rendered scene for one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    pub commands: Vec<DrawCmd>,
}

/// Render a dataset into a frame. Pure: equal inputs yield an equal frame.
/// Precondition: the dataset is non-empty (the session gates on this).
pub fn render_frame(dataset: &Dataset, opts: &RenderOptions, theme: &Theme) -> Frame {
    let (xs, ys) = build_scales(dataset, opts);
    let mut commands = Vec::new();
    push_gridlines(&mut commands, &ys, opts, theme);
    push_line_path(&mut commands, dataset, &xs, &ys, theme);
    push_axes(&mut commands, &xs, &ys, opts, theme);
    commands.extend(annotate::event_markers(dataset, &xs, &ys, theme));
    Frame {
        width: opts.width,
        height: opts.height,
        background: theme.background,
        commands,
    }
}

/// Full-width dashed horizontal gridline at each value tick.
fn push_gridlines(out: &mut Vec<DrawCmd>, ys: &ValueScale, opts: &RenderOptions, theme: &Theme) {
    for v in ys.ticks(TICK_COUNT) {
        let y = ys.to_px(v);
        out.push(DrawCmd::Line {
            from: Point::new(opts.plot_left(), y),
            to: Point::new(opts.plot_right(), y),
            color: theme.grid,
            width: 1.0,
            dash: Some(GRID_DASH),
        });
    }
}

/// One continuous monotone-cubic path through all records in dataset order.
fn push_line_path(
    out: &mut Vec<DrawCmd>,
    dataset: &Dataset,
    xs: &TimeScale,
    ys: &ValueScale,
    theme: &Theme,
) {
    let points: Vec<Point> = dataset
        .records()
        .iter()
        .map(|r| Point::new(xs.to_px(r.date), ys.to_px(r.value)))
        .collect();
    if points.len() < 2 {
        return;
    }
    out.push(DrawCmd::Path {
        start: points[0],
        segments: monotone_cubic(&points),
        color: theme.line_stroke,
        width: LINE_WIDTH,
    });
}

/// Axis baselines plus tick marks and labels: dates below, values to the left.
fn push_axes(
    out: &mut Vec<DrawCmd>,
    xs: &TimeScale,
    ys: &ValueScale,
    opts: &RenderOptions,
    theme: &Theme,
) {
    let (l, r) = (opts.plot_left(), opts.plot_right());
    let (t, b) = (opts.plot_top(), opts.plot_bottom());

    out.push(DrawCmd::Line {
        from: Point::new(l, b),
        to: Point::new(r, b),
        color: theme.axis_line,
        width: 1.0,
        dash: None,
    });
    out.push(DrawCmd::Line {
        from: Point::new(l, t),
        to: Point::new(l, b),
        color: theme.axis_line,
        width: 1.0,
        dash: None,
    });

    for date in xs.ticks(TICK_COUNT) {
        let x = xs.to_px(date);
        out.push(DrawCmd::Line {
            from: Point::new(x, b),
            to: Point::new(x, b + TICK_LEN),
            color: theme.axis_line,
            width: 1.0,
            dash: None,
        });
        out.push(DrawCmd::Text {
            pos: Point::new(x, b + TICK_LEN + LABEL_SIZE),
            text: format_date_tick(date),
            color: theme.tick_label,
            size: LABEL_SIZE,
            anchor: Anchor::Middle,
            bold: false,
        });
    }

    for v in ys.ticks(TICK_COUNT) {
        let y = ys.to_px(v);
        out.push(DrawCmd::Line {
            from: Point::new(l - TICK_LEN, y),
            to: Point::new(l, y),
            color: theme.axis_line,
            width: 1.0,
            dash: None,
        });
        out.push(DrawCmd::Text {
            pos: Point::new(l - TICK_LEN - 4.0, y + LABEL_SIZE * 0.35),
            text: format_value_tick(v),
            color: theme.tick_label,
            size: LABEL_SIZE,
            anchor: Anchor::End,
            bold: false,
        });
    }
}
