// File: crates/eventline-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, colors, render geometry).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 60, 50, 50)
    }
}

/// A point in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

/// 8-bit RGBA color, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
}

/// Surface geometry for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl RenderOptions {
    /// Left edge of the plot rect.
    pub fn plot_left(&self) -> f32 { self.insets.left as f32 }
    /// Right edge of the plot rect.
    pub fn plot_right(&self) -> f32 { (self.width - self.insets.right as i32) as f32 }
    /// Top edge of the plot rect.
    pub fn plot_top(&self) -> f32 { self.insets.top as f32 }
    /// Bottom edge of the plot rect.
    pub fn plot_bottom(&self) -> f32 { (self.height - self.insets.bottom as i32) as f32 }
    /// Inner plot width.
    pub fn plot_width(&self) -> f32 { (self.width - self.insets.hsum() as i32) as f32 }
    /// Inner plot height.
    pub fn plot_height(&self) -> f32 { (self.height - self.insets.vsum() as i32) as f32 }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}
