// File: crates/chart-core/src/interaction.rs
// Summary: Event routing between point markers and the chart content that contains them.

use tracing::trace;

use crate::point::PointEvent;
use crate::render::{Marker, SeriesRenderer, SeriesView};

/// Whether an event may continue to ancestor handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        self == Propagation::Stop
    }
}

/// What a pointer or keyboard event landed on inside the chart content.
#[derive(Clone, Copy, Debug)]
pub enum Target<'v> {
    Marker(&'v Marker),
    /// Empty plot area; the chart falls back to the currently active point.
    Background,
}

type ContentHandler<'a> = Box<dyn Fn(Option<&PointEvent>) + 'a>;

/// Chart-level container with its own click and focus handlers.
///
/// Events aimed at a marker go to the series renderer first; the container handler
/// runs only if the marker let the event propagate.
#[derive(Default)]
pub struct ChartContent<'a> {
    on_click: Option<ContentHandler<'a>>,
    on_focus: Option<ContentHandler<'a>>,
}

impl<'a> ChartContent<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, handler: impl Fn(Option<&PointEvent>) + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn on_focus(mut self, handler: impl Fn(Option<&PointEvent>) + 'a) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn dispatch_click<D>(
        &self,
        renderer: &SeriesRenderer<'_, D>,
        view: &SeriesView,
        target: Target<'_>,
    ) -> Propagation {
        if let Target::Marker(marker) = target {
            if renderer.click(marker).is_stopped() {
                trace!(point = %marker.id, "click stopped at marker");
                return Propagation::Stop;
            }
        }
        Self::bubble(&self.on_click, renderer, view);
        Propagation::Continue
    }

    pub fn dispatch_focus<D>(
        &self,
        renderer: &SeriesRenderer<'_, D>,
        view: &SeriesView,
        target: Target<'_>,
    ) -> Propagation {
        if let Target::Marker(marker) = target {
            if renderer.focus(marker).is_stopped() {
                return Propagation::Stop;
            }
        }
        Self::bubble(&self.on_focus, renderer, view);
        Propagation::Continue
    }

    fn bubble<D>(handler: &Option<ContentHandler<'a>>, renderer: &SeriesRenderer<'_, D>, view: &SeriesView) {
        let Some(handler) = handler else { return };
        let event = view.active_marker().map(|m| renderer.point_event(m));
        trace!(active = event.is_some(), "event reached chart content");
        handler(event.as_ref());
    }
}
