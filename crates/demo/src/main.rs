// File: crates/demo/src/main.rs
// Summary: Demo loads an event-annotated CSV time series and renders it to a PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eventline_core::{ChartSession, RenderOptions, Theme};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "data.csv".to_string());

    let mut session = ChartSession::new(RenderOptions::default(), Theme::default());
    session
        .load(&input)
        .await
        .with_context(|| format!("failed to load '{input}'"))?;

    match session.frame() {
        Some(frame) => {
            let out = out_name(Path::new(&input));
            eventline_render_skia::render_to_png(&frame, &out)?;
            tracing::info!("wrote {}", out.display());
        }
        None => tracing::warn!("no renderable rows in '{input}'; nothing drawn"),
    }
    Ok(())
}

/// Output path like target/out/<stem>.png.
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("{stem}.png"))
}
