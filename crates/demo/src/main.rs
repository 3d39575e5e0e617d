// File: crates/demo/src/main.rs
// Summary: Demo loads a time/value CSV (or a built-in three-point series) and writes SVG, PNG and JSON outputs.

mod input;

use anyhow::{Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{Datum, InvalidPointPolicy, PointId, Series, SeriesRenderer, SvgDocument, TimeScale, ValueScale};
use chart_render_skia::{theme, RasterOptions, SkiaRenderer};
use chrono::{TimeZone, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MARGIN: f32 = 40.0;

#[derive(Parser, Debug)]
#[command(name = "constellation-demo", about = "Render a line series with accessible point markers")]
struct Args {
    /// CSV with `time` and `value` columns; omit to use a built-in three-point series.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value = "s1")]
    series_id: String,
    /// CSS color for the line and markers.
    #[arg(long)]
    color: Option<String>,
    /// Point id to highlight, e.g. `s1-2`.
    #[arg(long)]
    active: Option<String>,
    /// Link URL per point; `{index}` is replaced with the datum index.
    #[arg(long)]
    link_template: Option<String>,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = WIDTH)]
    width: u32,
    #[arg(long, default_value_t = HEIGHT)]
    height: u32,
    /// Hide markers of invalid points instead of drawing them at a degenerate position.
    #[arg(long)]
    hide_invalid: bool,
    /// Raster theme: dark, light or high-contrast-dark.
    #[arg(long, default_value = "dark")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let (series, stem) = match &args.input {
        Some(path) => {
            let series = input::load_series_csv(path, &args.series_id)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string();
            (series, stem)
        }
        None => (builtin_series(&args.series_id), "scenario".to_string()),
    };
    if series.is_empty() {
        anyhow::bail!("no rows loaded; check headers and time column");
    }
    info!(series = %series.id, rows = series.len(), valid = series.valid_count(), "loaded series");

    let (w, h) = (args.width.max(1), args.height.max(1));
    let x = TimeScale::fit(&series.data, (MARGIN, w as f32 - MARGIN))?;
    let y = ValueScale::fit(&series.data, MARGIN, h as f32 - MARGIN);

    let template = args.link_template.clone();
    let mut renderer = SeriesRenderer::new(&series, &x, &y)
        .active_point(args.active.clone().map(PointId::from_raw))
        .tab_index(Some(0));
    if let Some(color) = &args.color {
        renderer = renderer.color(color.clone());
    }
    if let Some(template) = template {
        renderer = renderer.link_resolver(move |_, i| Some(template.replace("{index}", &i.to_string())));
    }
    if args.hide_invalid {
        renderer = renderer.invalid_points(InvalidPointPolicy::Hidden);
    }
    let view = renderer.render();

    std::fs::create_dir_all(&args.out_dir).with_context(|| format!("creating {}", args.out_dir.display()))?;
    let out = |ext: &str| args.out_dir.join(format!("{stem}.{ext}"));

    let mut doc = SvgDocument::new(w, h).with_title(format!("Series {}", series.id));
    doc.push(&view);
    let svg_path = out("svg");
    doc.write_to(&svg_path)?;
    println!("Wrote {}", svg_path.display());

    if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&args.theme)) {
        warn!(theme = %args.theme, "unknown theme, using dark");
    }
    let skia = SkiaRenderer::new(RasterOptions { width: w as i32, height: h as i32, theme: theme::find(&args.theme) });
    let png_path = out("png");
    skia.render_png(std::slice::from_ref(&view), &png_path)?;
    println!("Wrote {}", png_path.display());

    let json_path = out("json");
    let json = serde_json::to_string_pretty(&view.markers)?;
    std::fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
    println!("Wrote {}", json_path.display());

    for marker in &view.markers {
        println!("{}", marker.aria_label);
    }
    Ok(())
}

/// Three days with a gap in the middle.
fn builtin_series(id: &str) -> Series<()> {
    let day = |d: u32| Utc.with_ymd_and_hms(2021, 1, d, 0, 0, 0).single();
    let data = [(21, Some(5.0)), (22, Some(f64::NAN)), (23, Some(7.0))]
        .into_iter()
        .filter_map(|(d, y)| day(d).map(|x| Datum::new(x, y, ())))
        .collect();
    Series::with_data(id, data)
}
