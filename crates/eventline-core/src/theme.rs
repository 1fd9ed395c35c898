// File: crates/eventline-core/src/theme.rs
// Summary: Color palettes for chart rendering.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub line_stroke: Rgba,
    pub event: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xfa, 0xfa, 0xfa),
            grid: Rgba::rgb(0xe0, 0xe0, 0xe0),
            axis_line: Rgba::rgb(0x33, 0x33, 0x33),
            tick_label: Rgba::rgb(0x33, 0x33, 0x33),
            line_stroke: Rgba::rgb(0x88, 0x84, 0xd8),
            event: Rgba::rgb(0xff, 0x00, 0x00),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(210, 210, 220),
            line_stroke: Rgba::rgb(136, 132, 216),
            event: Rgba::rgb(240, 80, 80),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
