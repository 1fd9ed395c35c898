// File: crates/eventline-render-skia/src/lib.rs
// Summary: Skia backend: replays a Frame onto a cleared raster surface and encodes PNG.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use eventline_core::render::{Anchor, DrawCmd, Frame};
use eventline_core::types::Rgba;

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f32, dash: Option<(f32, f32)>) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(c));
    if let Some((on, off)) = dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_skia(c));
    paint
}

/// Replay a frame onto a canvas. Clears to the frame background first, so
/// replaying the same frame repeatedly is pixel-identical.
pub fn draw_frame(canvas: &skia::Canvas, frame: &Frame) {
    canvas.clear(to_skia(frame.background));
    for cmd in &frame.commands {
        match cmd {
            DrawCmd::Line { from, to, color, width, dash } => {
                canvas.draw_line(
                    (from.x, from.y),
                    (to.x, to.y),
                    &stroke_paint(*color, *width, *dash),
                );
            }
            DrawCmd::Path { start, segments, color, width } => {
                let mut path = skia::Path::new();
                path.move_to((start.x, start.y));
                for s in segments {
                    path.cubic_to((s.c1.x, s.c1.y), (s.c2.x, s.c2.y), (s.to.x, s.to.y));
                }
                canvas.draw_path(&path, &stroke_paint(*color, *width, None));
            }
            DrawCmd::Circle { center, radius, color } => {
                canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*color));
            }
            DrawCmd::Text { pos, text, color, size, anchor, bold } => {
                let mut font = skia::Font::default();
                font.set_size(*size);
                if *bold {
                    font.set_embolden(true);
                }
                let paint = fill_paint(*color);
                let (advance, _) = font.measure_str(text.as_str(), Some(&paint));
                let x = match anchor {
                    Anchor::Start => pos.x,
                    Anchor::Middle => pos.x - advance * 0.5,
                    Anchor::End => pos.x - advance,
                };
                canvas.draw_str(text.as_str(), (x, pos.y), &font, &paint);
            }
        }
    }
}

/// Render a frame to a PNG at `output` using a CPU raster surface.
pub fn render_to_png(frame: &Frame, output: impl AsRef<Path>) -> Result<()> {
    let data = render_to_png_bytes(frame)?;
    if let Some(parent) = output.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, data)?;
    Ok(())
}

/// Render a frame to in-memory PNG bytes.
pub fn render_to_png_bytes(frame: &Frame) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((frame.width, frame.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    draw_frame(surface.canvas(), frame);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}
