// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus SVG component for a line series with accessible, clickable point markers (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Marker clicks call `stop_propagation` so the chart-level click handler does not
//   run a second time for the same point.

use chart_core::{Datum, PointId, PointerEvents, Series, SeriesRenderer, TimeScale, ValueScale};
use chrono::{Duration, TimeZone, Utc};

/// Sample series shown by the desktop demo: two weeks of daily values with a gap.
/// Each datum carries a record number.
pub fn demo_series() -> Series<u32> {
    let t0 = Utc.with_ymd_and_hms(2021, 1, 18, 0, 0, 0).single();
    let Some(t0) = t0 else { return Series::new("demo") };
    let data = (0..14)
        .map(|i| {
            let x = t0 + Duration::days(i);
            let y = if i == 5 || i == 6 { None } else { Some(((i as f64) * 0.7).sin() * 4.0 + 6.0) };
            Datum::new(x, y, 100 + i as u32)
        })
        .collect();
    Series::with_data("demo", data).with_color("#40a0ff")
}

/// Renderer configured from component props. A `None` color leaves the series
/// color (or the default) in charge.
pub fn series_renderer<'a, D>(
    series: &'a Series<D>,
    x_scale: &'a TimeScale,
    y_scale: &'a ValueScale,
    color: Option<String>,
    active_point: Option<PointId>,
    pointer_events: PointerEvents,
    tab_index: i32,
) -> SeriesRenderer<'a, D> {
    let renderer = SeriesRenderer::new(series, x_scale, y_scale)
        .active_point(active_point)
        .pointer_events(pointer_events)
        .tab_index(Some(tab_index));
    match color {
        Some(color) => renderer.color(color),
        None => renderer,
    }
}

/// Record detail page for the demo's payloads; every third record has one.
pub fn record_link(record: u32) -> Option<String> {
    (record % 3 == 0).then(|| format!("https://example.com/records/{record}"))
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::{Marker, PointEvent};
    use dioxus::prelude::*;

    #[derive(Props, Clone)]
    pub struct LineDataSeriesProps<D: Clone + 'static> {
        pub series: Series<D>,
        pub x_scale: TimeScale,
        pub y_scale: ValueScale,
        /// Overrides the series color; with neither set the line is drawn in the default color.
        #[props(!optional)]
        pub color: Option<String>,
        #[props(!optional)]
        pub active_point: Option<PointId>,
        /// Navigation target for `(datum payload, index)`; `None` for a plain data point.
        #[props(!optional)]
        pub link_url: Option<Callback<(D, usize), Option<String>>>,
        #[props(default)]
        pub on_datum_focus: EventHandler<PointEvent>,
        #[props(default)]
        pub on_datum_click: EventHandler<PointEvent>,
        #[props(default)]
        pub pointer_events: PointerEvents,
        #[props(default = 0)]
        pub tab_index: i32,
    }

    impl<D: Clone + 'static> PartialEq for LineDataSeriesProps<D> {
        fn eq(&self, _other: &Self) -> bool { false }
    }

    #[allow(non_snake_case)]
    pub fn LineDataSeries<D: Clone + 'static>(props: LineDataSeriesProps<D>) -> Element {
        let x_scale = props.x_scale;
        let y_scale = props.y_scale;
        let mut renderer = series_renderer(
            &props.series,
            &x_scale,
            &y_scale,
            props.color.clone(),
            props.active_point.clone(),
            props.pointer_events,
            props.tab_index,
        );
        if let Some(resolve) = props.link_url {
            renderer = renderer.link_resolver(move |datum: &D, index| resolve.call((datum.clone(), index)));
        }

        let view = renderer.render();
        let glyphs: Vec<(Marker, PointEvent)> =
            view.markers.iter().map(|m| (m.clone(), renderer.point_event(m))).collect();
        let pointer_events = view.group.pointer_events.as_str();
        let d = view.path.d();
        let stroke = view.path.stroke.clone();
        let stroke_width = view.path.stroke_width.to_string();
        let line_cap = view.path.line_cap.clone();

        rsx! {
            g { "tabindex": props.tab_index.to_string(), "pointer-events": pointer_events,
                path {
                    "d": d,
                    "fill": "none",
                    "stroke": stroke,
                    "stroke-width": stroke_width,
                    "stroke-linecap": line_cap,
                    "aria-hidden": "true",
                    "pointer-events": "none",
                }
                g { "role": "list", "pointer-events": pointer_events,
                    for (marker, event) in glyphs {
                        PointGlyph {
                            key: "{marker.id}",
                            marker: marker.clone(),
                            event,
                            on_focus: props.on_datum_focus,
                            on_click: props.on_datum_click,
                        }
                    }
                }
            }
        }
    }

    #[component]
    fn PointGlyph(
        marker: Marker,
        event: PointEvent,
        on_focus: EventHandler<PointEvent>,
        on_click: EventHandler<PointEvent>,
    ) -> Element {
        let focus_event = event.clone();
        let visibility = if marker.hidden { "hidden" } else { "visible" };
        let ring = if marker.active { "white" } else { "none" };
        let cursor = if marker.is_link() { "cursor: pointer" } else { "cursor: default" };

        rsx! {
            circle {
                "id": marker.id.to_string(),
                "cx": marker.position.x.to_string(),
                "cy": marker.position.y.to_string(),
                "r": marker.radius.to_string(),
                "fill": marker.color.clone(),
                "stroke": ring,
                "visibility": visibility,
                "style": cursor,
                "role": "listitem",
                "aria-label": marker.aria_label.clone(),
                "tabindex": marker.tab_index.unwrap_or(0).to_string(),
                "data-active": marker.active.to_string(),
                onfocus: move |_| on_focus.call(focus_event.clone()),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_click.call(event.clone());
                },
            }
        }
    }

    /// Desktop window with one series, a chart-level click handler and lifted active-point state.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let series = use_hook(super::demo_series);
            let mut active = use_signal(|| Option::<PointId>::None);
            let mut status = use_signal(|| String::from("Focus or click a point"));

            let x = match TimeScale::fit(&series.data, (40.0, 760.0)) {
                Ok(x) => x,
                Err(e) => return rsx! { p { "{e}" } },
            };
            let y = ValueScale::fit(&series.data, 40.0, 360.0);
            let links = Callback::new(|(record, _index): (u32, usize)| super::record_link(record));

            rsx! {
                div { style: "font-family: sans-serif; background: #121214; color: #ddd; padding: 12px;",
                    svg {
                        "width": "800",
                        "height": "400",
                        "viewBox": "0 0 800 400",
                        onclick: move |_| {
                            let id = active.read().as_ref().map(|id| id.to_string());
                            tracing::info!(active = ?id, "chart content click");
                            status.set(match id {
                                Some(id) => format!("Chart click with active point {id}"),
                                None => "Chart click".to_string(),
                            });
                        },
                        LineDataSeries {
                            series: series.clone(),
                            x_scale: x,
                            y_scale: y,
                            color: None,
                            active_point: active(),
                            link_url: Some(links),
                            on_datum_focus: move |e: PointEvent| active.set(Some(e.id)),
                            on_datum_click: move |e: PointEvent| {
                                tracing::info!(point = %e.id, link = ?e.link_url, "point click");
                                status.set(format!("Point {} clicked (link: {:?})", e.id, e.link_url));
                            },
                        }
                    }
                    p { "{status}" }
                }
            }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Constellation line series"));
        dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
