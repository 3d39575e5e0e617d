// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small series to an SVG document.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Datum, PointId, Series, SeriesRenderer, SvgDocument, TimeScale, ValueScale};
use chrono::{TimeZone, Utc};

fn render_svg() -> String {
    let data = (0..6)
        .map(|i| {
            let x = Utc.with_ymd_and_hms(2021, 1, 18 + i, 0, 0, 0).unwrap();
            let y = if i == 3 { None } else { Some([1.0, 2.5, 2.0, 0.0, 3.5, 3.0][i as usize]) };
            Datum::new(x, y, ())
        })
        .collect();
    let series = Series::with_data("golden", data).with_color("#4080ff");
    let x = TimeScale::fit(&series.data, (20.0, 380.0)).unwrap();
    let y = ValueScale::new_linear(20.0, 180.0, 0.0, 4.0);

    let view = SeriesRenderer::new(&series, &x, &y)
        .active_point(Some(PointId::from_raw("golden-4")))
        .link_resolver(|_, i| (i == 5).then(|| "https://example.com/?point=5&series=golden".to_string()))
        .tab_index(Some(0))
        .render();

    let mut doc = SvgDocument::new(400, 200).with_background("#121214");
    doc.push(&view);
    doc.finish()
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

#[test]
fn golden_line_series_svg() {
    let svg = render_svg();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/line_series.svg");

    if bless_mode() {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered svg differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn svg_structure() {
    let svg = render_svg();
    assert!(svg.contains(r##"<rect width="400" height="200" fill="#121214"/>"##));
    assert!(svg.contains(r#"aria-hidden="true" pointer-events="none""#));
    assert!(svg.contains(r#"<g role="list" pointer-events="visiblePainted">"#));
    assert_eq!(svg.matches(r#"role="listitem""#).count(), 6);
    // one subpath before the gap at index 3, one after
    let d = svg.split(r#"<path d=""#).nth(1).and_then(|rest| rest.split('"').next()).unwrap();
    assert_eq!(d.matches('M').count(), 2);
    assert!(svg.contains(r#"id="golden-4" role="listitem" aria-label="Data point, Y value: 3.5, X value: 22 January Friday" data-active="true""#));
    assert!(svg.contains(r#"<a href="https://example.com/?point=5&amp;series=golden""#));
    assert!(svg.contains("click to view data point detail"));
    assert!(svg.contains(r#"aria-label="Data point, Y value: null, X value: 21 January Thursday""#));
}
