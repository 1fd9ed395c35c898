// File: crates/eventline-core/src/annotate.rs
// Summary: Event marker overlay: circles, dashed connectors, and staggered labels.

use crate::record::Dataset;
use crate::render::{Anchor, DrawCmd, LABEL_SIZE};
use crate::scale::{TimeScale, ValueScale};
use crate::theme::Theme;
use crate::types::Point;

pub const MARKER_RADIUS: f32 = 5.0;
/// Label offset above (even index) and below (odd index) the marker.
pub const OFFSET_EVEN: f32 = -15.0;
pub const OFFSET_ODD: f32 = 20.0;
const CONNECTOR_DASH: (f32, f32) = (2.0, 2.0);

/// Emit marker, connector, and label commands for every event-bearing record,
/// in dataset order. The index counts event-bearing records only; its parity
/// alternates labels above/below the marker. No overlap resolution beyond
/// that staggering.
pub fn event_markers(
    dataset: &Dataset,
    xs: &TimeScale,
    ys: &ValueScale,
    theme: &Theme,
) -> Vec<DrawCmd> {
    let mut out = Vec::new();
    for (i, rec) in dataset.event_records().enumerate() {
        let x = xs.to_px(rec.date);
        let y = ys.to_px(rec.value);
        let even = i % 2 == 0;
        let label_offset = if even { OFFSET_EVEN } else { OFFSET_ODD };
        // Connector stops short of the label by 5px, on the marker side.
        let trim = if even { 5.0 } else { -5.0 };

        out.push(DrawCmd::Circle {
            center: Point::new(x, y),
            radius: MARKER_RADIUS,
            color: theme.event,
        });
        out.push(DrawCmd::Line {
            from: Point::new(x, y),
            to: Point::new(x, y + label_offset + trim),
            color: theme.event,
            width: 1.0,
            dash: Some(CONNECTOR_DASH),
        });
        out.push(DrawCmd::Text {
            pos: Point::new(x, y + label_offset),
            text: rec.event.clone(),
            color: theme.event,
            size: LABEL_SIZE,
            anchor: Anchor::Middle,
            bold: true,
        });
    }
    out
}
