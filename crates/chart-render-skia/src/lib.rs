// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless raster rendering of line series views using Skia CPU raster surfaces.

pub mod theme;

use anyhow::Result;
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{Marker, SeriesView};
use skia_safe as skia;
use tracing::debug;

pub use theme::{parse_css_color, Theme};

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { width: WIDTH as i32, height: HEIGHT as i32, theme: Theme::dark() }
    }
}

pub struct SkiaRenderer {
    pub options: RasterOptions,
}

impl SkiaRenderer {
    pub fn new(options: RasterOptions) -> Self {
        Self { options }
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_rgba8(&self, views: &[SeriesView]) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.options.width.max(1), self.options.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), views);

        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    pub fn render_png_bytes(&self, views: &[SeriesView]) -> Result<Vec<u8>> {
        let (w, h) = (self.options.width.max(1), self.options.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), views);

        let image = surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_png(&self, views: &[SeriesView], output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(views)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, views: &[SeriesView]) {
        let theme = &self.options.theme;
        canvas.clear(theme.background);
        for view in views {
            let drawn = draw_series(canvas, view, theme);
            debug!(series = %view.series_id, markers = drawn, "rasterized series");
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Returns the number of markers actually painted.
fn draw_series(canvas: &skia::Canvas, view: &SeriesView, theme: &Theme) -> usize {
    let color = parse_css_color(&view.path.stroke).unwrap_or(theme.line_stroke);

    let mut path = skia::Path::new();
    for segment in &view.path.segments {
        let mut points = segment.iter().filter(|p| p.is_finite());
        if let Some(first) = points.next() {
            path.move_to((first.x, first.y));
            for p in points {
                path.line_to((p.x, p.y));
            }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(view.path.stroke_width);
    stroke.set_stroke_cap(if view.path.line_cap == "round" { skia::paint::Cap::Round } else { skia::paint::Cap::Butt });
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);

    let mut drawn = 0;
    for marker in view.markers.iter().filter(|m| is_paintable(m)) {
        draw_marker(canvas, marker, theme);
        drawn += 1;
    }
    drawn
}

fn is_paintable(marker: &Marker) -> bool {
    !marker.hidden && marker.position.is_finite()
}

fn draw_marker(canvas: &skia::Canvas, marker: &Marker, theme: &Theme) {
    let center = (marker.position.x, marker.position.y);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(parse_css_color(&marker.color).unwrap_or(theme.line_stroke));
    canvas.draw_circle(center, marker.radius, &fill);

    let ring = if marker.active {
        Some(theme.active_ring)
    } else if marker.is_link() {
        Some(theme.link_ring)
    } else {
        None
    };
    if let Some(ring) = ring {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.5);
        paint.set_color(ring);
        canvas.draw_circle(center, marker.radius + 1.5, &paint);
    }
}
