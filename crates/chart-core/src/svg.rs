// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of rendered series views (group, aria-hidden path, marker list).

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::render::{LinePath, Marker, SeriesView};
use crate::types::{HEIGHT, WIDTH};

impl SeriesView {
    /// `<g>` fragment for this series.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let pe = self.group.pointer_events.as_str();

        out.push_str("<g");
        if let Some(tab) = self.group.tab_index {
            let _ = write!(out, r#" tabindex="{tab}""#);
        }
        let _ = write!(out, r#" pointer-events="{pe}" data-series="{}">"#, escape_xml(self.series_id.as_str()));

        let _ = write!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}" aria-hidden="true" pointer-events="{}"/>"#,
            self.path.d(),
            escape_xml(&self.path.stroke),
            self.path.stroke_width,
            escape_xml(&self.path.line_cap),
            LinePath::POINTER_EVENTS.as_str(),
        );

        let _ = write!(out, r#"<g role="{}" pointer-events="{pe}">"#, SeriesView::MARKER_LIST_ROLE);
        for marker in &self.markers {
            write_marker(&mut out, marker);
        }
        out.push_str("</g></g>");
        out
    }
}

fn write_marker(out: &mut String, m: &Marker) {
    let mut a11y = format!(
        r#" id="{}" role="{}" aria-label="{}" data-active="{}""#,
        escape_xml(m.id.as_str()),
        Marker::ROLE,
        escape_xml(&m.aria_label),
        m.active,
    );
    if let Some(tab) = m.tab_index {
        let _ = write!(a11y, r#" tabindex="{tab}""#);
    }
    if m.hidden {
        a11y.push_str(r#" visibility="hidden""#);
    }
    let stroke = if m.active { "white" } else { "none" };
    let circle = format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{stroke}""#,
        m.position.x,
        m.position.y,
        m.radius,
        escape_xml(&m.color),
    );

    match &m.link_url {
        Some(url) => {
            let _ = write!(out, r#"<a href="{}" target="_blank" rel="noopener"{a11y}>{circle}/></a>"#, escape_xml(url));
        }
        None => {
            let _ = write!(out, "{circle}{a11y}/>");
        }
    }
}

/// Standalone SVG document wrapping one or more series.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub background: Option<String>,
    pub title: Option<String>,
    body: String,
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, title: None, body: String::new() }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, view: &SeriesView) {
        self.body.push_str(&view.to_svg());
    }

    pub fn finish(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if let Some(title) = &self.title {
            let _ = write!(svg, "<title>{}</title>", escape_xml(title));
        }
        if let Some(bg) = &self.background {
            let _ = write!(svg, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, escape_xml(bg));
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.finish())?;
        Ok(())
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"a<b & "c"'"#), "a&lt;b &amp; &quot;c&quot;&apos;");
    }

    #[test]
    fn empty_document() {
        let doc = SvgDocument::new(10, 20).with_title("t & t");
        let svg = doc.finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20""#));
        assert!(svg.contains("<title>t &amp; t</title>"));
        assert!(svg.ends_with("</svg>"));
    }
}
