// File: crates/eventline-core/src/lib.rs
// Summary: Core library entry point; exports the load -> normalize -> scale -> render pipeline.

pub mod annotate;
pub mod curve;
pub mod error;
pub mod grid;
pub mod loader;
pub mod record;
pub mod render;
pub mod scale;
pub mod session;
pub mod theme;
pub mod types;

pub use error::{LoadError, RowValidationError};
pub use loader::load_csv;
pub use record::{normalize, normalize_row, Dataset, RawRow, Record};
pub use render::{render_frame, Anchor, DrawCmd, Frame};
pub use scale::{build_scales, TimeScale, ValueScale};
pub use session::ChartSession;
pub use theme::Theme;
pub use types::{Insets, Point, RenderOptions, Rgba};
