// File: crates/chart-core/tests/line_series.rs
// Purpose: Marker count, segmentation, identity, active point and label behavior of the series renderer.

use chart_core::{
    Datum, InvalidPointPolicy, PointId, PointerEvents, Series, SeriesRenderer, TimeScale, ValueScale,
};
use chrono::{DateTime, TimeZone, Utc};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, d, 0, 0, 0).unwrap()
}

fn scenario() -> Series<()> {
    Series::with_data(
        "s1",
        vec![
            Datum::point(day(21), 5.0),
            Datum::new(day(22), Some(f64::NAN), ()),
            Datum::point(day(23), 7.0),
        ],
    )
}

fn scales(series: &Series<()>) -> (TimeScale, ValueScale) {
    let x = TimeScale::fit(&series.data, (0.0, 200.0)).unwrap();
    let y = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
    (x, y)
}

#[test]
fn scenario_without_links() {
    let series = scenario();
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y).render();

    assert_eq!(view.markers.len(), 3);
    assert_eq!(view.path.segments.len(), 2);
    assert_eq!(view.path.segments[0].len(), 1);
    assert_eq!(view.path.segments[1].len(), 1);
    assert_eq!(view.markers[0].aria_label, "Data point, Y value: 5, X value: 21 January Thursday");
    assert_eq!(view.markers[1].aria_label, "Data point, Y value: NaN, X value: 22 January Friday");
    assert!(view.markers.iter().all(|m| !m.is_link()));
}

#[test]
fn scenario_with_link_on_last_point() {
    let series = scenario();
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y)
        .link_resolver(|_, index| (index == 2).then(|| "https://example.com/points/2".to_string()))
        .render();

    assert_eq!(
        view.markers[2].aria_label,
        "Link point, Y value: 7, X value: 23 January Saturday, click to view data point detail"
    );
    assert_eq!(view.markers[2].link_url.as_deref(), Some("https://example.com/points/2"));
    assert!(view.markers[0].aria_label.starts_with("Data point, Y value: 5"));
}

#[test]
fn adjacent_link_and_plain_labels_share_values() {
    let series = Series::with_data("s", vec![Datum::point(day(4), 3.5), Datum::point(day(5), 3.5)]);
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y)
        .link_resolver(|_, i| (i == 0).then(|| "/detail".to_string()))
        .render();

    let (a, b) = (&view.markers[0].aria_label, &view.markers[1].aria_label);
    assert!(a.starts_with("Link point"));
    assert!(b.starts_with("Data point"));
    assert!(a.contains("Y value: 3.5") && b.contains("Y value: 3.5"));
    assert!(a.contains("X value: 04 January Monday"));
    assert!(b.contains("X value: 05 January Tuesday"));
}

#[test]
fn one_marker_per_datum_regardless_of_validity() {
    let data = (1..=10)
        .map(|d| {
            let y = if d % 3 == 0 { None } else { Some(d as f64) };
            Datum::new(day(d), y, d)
        })
        .collect::<Vec<_>>();
    let series = Series::with_data("many", data);
    let x = TimeScale::fit(&series.data, (0.0, 100.0)).unwrap();
    let y = ValueScale::fit(&series.data, 0.0, 100.0);

    for policy in [InvalidPointPolicy::Degenerate, InvalidPointPolicy::Hidden] {
        let view = SeriesRenderer::new(&series, &x, &y).invalid_points(policy).render();
        assert_eq!(view.markers.len(), 10);
        // invalid at 3, 6, 9 => runs [1,2] [4,5] [7,8] [10]
        let lens: Vec<usize> = view.path.segments.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![2, 2, 2, 1]);
        let hidden = view.markers.iter().filter(|m| m.hidden).count();
        match policy {
            InvalidPointPolicy::Degenerate => assert_eq!(hidden, 0),
            InvalidPointPolicy::Hidden => assert_eq!(hidden, 3),
        }
    }
}

#[test]
fn segments_follow_dataset_order() {
    let series = Series::with_data(
        "o",
        vec![Datum::point(day(1), 0.0), Datum::point(day(2), 10.0), Datum::point(day(3), 5.0)],
    );
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y).render();
    let seg = &view.path.segments[0];
    assert_eq!(seg.len(), 3);
    assert!(seg.windows(2).all(|w| w[0].x < w[1].x));
    assert_eq!(view.path.d(), "M0,100L100,0L200,50");
}

#[test]
fn identity_is_deterministic() {
    let series = scenario();
    let (x, y) = scales(&series);
    let first = SeriesRenderer::new(&series, &x, &y).render();
    let second = SeriesRenderer::new(&series, &x, &y).color("red").render();
    let ids = |v: &chart_core::SeriesView| v.markers.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.markers[1].id, PointId::new(&series.id, 1));
    assert_eq!(first.markers[1].id.as_str(), "s1-1");
}

#[test]
fn active_point_correlation() {
    let series = scenario();
    let (x, y) = scales(&series);

    let view = SeriesRenderer::new(&series, &x, &y)
        .active_point(Some(PointId::from_raw("s1-2")))
        .render();
    assert_eq!(view.markers.iter().filter(|m| m.active).count(), 1);
    assert_eq!(view.active_marker().map(|m| m.index), Some(2));
    assert!(view.markers[2].radius > view.markers[0].radius);

    let view = SeriesRenderer::new(&series, &x, &y)
        .active_point(Some(PointId::from_raw("other-2")))
        .render();
    assert_eq!(view.markers.iter().filter(|m| m.active).count(), 0);
}

#[test]
fn empty_dataset_renders_nothing() {
    let series: Series<()> = Series::new("empty");
    let x = TimeScale::fit(&series.data, (0.0, 10.0)).unwrap();
    let y = ValueScale::fit(&series.data, 0.0, 10.0);
    let view = SeriesRenderer::new(&series, &x, &y).render();
    assert!(view.markers.is_empty());
    assert!(view.path.is_empty());
    assert_eq!(view.path.d(), "");
}

#[test]
fn all_invalid_keeps_markers_and_raw_labels() {
    let series = Series::with_data(
        "bad",
        vec![Datum::new(day(21), None, ()), Datum::new(day(22), Some(f64::NAN), ())],
    );
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y).render();
    assert!(view.path.is_empty());
    assert_eq!(view.markers.len(), 2);
    assert_eq!(view.markers[0].aria_label, "Data point, Y value: null, X value: 21 January Thursday");
    assert!(view.markers[1].position.y.is_nan());
    assert!(!view.markers[1].hidden);
}

#[test]
fn color_and_pointer_event_defaults() {
    let series = scenario();
    let (x, y) = scales(&series);

    let view = SeriesRenderer::new(&series, &x, &y).render();
    assert_eq!(view.path.stroke, "green");
    assert_eq!(view.group.pointer_events, PointerEvents::VisiblePainted);
    assert!(view.markers.iter().all(|m| m.color == "green"));

    let colored = series.clone().with_color("#ff8800");
    let view = SeriesRenderer::new(&colored, &x, &y).pointer_events(PointerEvents::None).render();
    assert_eq!(view.path.stroke, "#ff8800");
    assert_eq!(view.group.pointer_events, PointerEvents::None);

    let view = SeriesRenderer::new(&colored, &x, &y).color("blue").render();
    assert_eq!(view.path.stroke, "blue");
}

#[test]
fn closures_work_as_scales() {
    let series = scenario();
    let x = |t: DateTime<Utc>| (t.timestamp() - day(21).timestamp()) as f32 / 86_400.0 * 10.0;
    let y = |v: f64| 100.0 - v as f32;
    let view = SeriesRenderer::new(&series, &x, &y).render();
    assert_eq!(view.markers[2].position.x, 20.0);
    assert_eq!(view.markers[2].position.y, 93.0);
}

#[test]
fn payload_drives_link_resolution() {
    #[derive(Clone)]
    struct Commit {
        sha: &'static str,
    }
    let series = Series::with_data(
        "commits",
        vec![
            Datum::new(day(1), Some(1.0), Commit { sha: "abc" }),
            Datum::new(day(2), Some(2.0), Commit { sha: "" }),
        ],
    );
    let x = TimeScale::fit(&series.data, (0.0, 10.0)).unwrap();
    let y = ValueScale::fit(&series.data, 0.0, 10.0);
    let view = SeriesRenderer::new(&series, &x, &y)
        .link_resolver(|c: &Commit, _| (!c.sha.is_empty()).then(|| format!("/commit/{}", c.sha)))
        .render();
    assert_eq!(view.markers[0].link_url.as_deref(), Some("/commit/abc"));
    assert_eq!(view.markers[1].link_url, None);
}

#[test]
fn empty_link_url_reads_as_plain_point() {
    let series = scenario();
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y)
        .link_resolver(|_, index| Some(if index == 0 { String::new() } else { format!("/p/{index}") }))
        .render();

    assert!(!view.markers[0].is_link());
    assert_eq!(view.markers[0].link_url, None);
    assert!(view.markers[0].aria_label.starts_with("Data point, Y value: 5"));
    assert!(view.markers[2].aria_label.starts_with("Link point, Y value: 7"));
}

#[test]
fn marker_json_uses_plain_ids_and_nulls() {
    let mut series = scenario();
    series.push(Datum::new(day(24), None, ()));
    let (x, y) = scales(&series);
    let view = SeriesRenderer::new(&series, &x, &y).render();
    let json = serde_json::to_value(&view.markers).unwrap();

    assert_eq!(json[0]["id"], "s1-0");
    assert_eq!(json[0]["y_value"], 5.0);
    assert_eq!(json[0]["position"]["y"], 50.0);
    assert_eq!(json[1]["x_value"], "2021-01-22T00:00:00Z");
    assert!(json[1]["y_value"].is_null());
    assert!(json[1]["position"]["y"].is_null());
    assert!(json[3]["y_value"].is_null());
    assert!(json[3]["link_url"].is_null());

    let view_json = serde_json::to_value(&view).unwrap();
    assert_eq!(view_json["series_id"], "s1");
    assert_eq!(view_json["group"]["pointer_events"], "visiblePainted");
}
