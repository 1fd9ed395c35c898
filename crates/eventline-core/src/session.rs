// File: crates/eventline-core/src/session.rs
// Summary: Display-session state container: one async load, frame on demand.

use std::path::Path;

use crate::error::LoadError;
use crate::loader::load_csv;
use crate::record::Dataset;
use crate::render::{render_frame, Frame};
use crate::theme::Theme;
use crate::types::RenderOptions;

/// Owns the load result for one display session. The dataset is replaced
/// atomically on a successful load and left untouched on failure, so the
/// session either renders a complete chart or stays in its loading state.
pub struct ChartSession {
    opts: RenderOptions,
    theme: Theme,
    data: Option<Dataset>,
}

impl ChartSession {
    pub fn new(opts: RenderOptions, theme: Theme) -> Self {
        Self { opts, theme, data: None }
    }

    /// Fetch `path` and install the resulting dataset.
    pub async fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let dataset = load_csv(path).await?;
        self.data = Some(dataset);
        Ok(())
    }

    /// True until a load has succeeded.
    pub fn is_loading(&self) -> bool {
        self.data.is_none()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.as_ref()
    }

    /// Render the current dataset. None while loading or when every row was
    /// dropped; rendering is gated on non-empty data.
    pub fn frame(&self) -> Option<Frame> {
        let data = self.data.as_ref().filter(|d| !d.is_empty())?;
        Some(render_frame(data, &self.opts, &self.theme))
    }
}
