//! Presentation attributes and their removal before upload.

use serde::Serialize;

use super::{Figure, Layout, Trace, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub dash: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_LINE_COLOR.into(),
            width: DEFAULT_LINE_WIDTH,
            dash: "solid".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub color: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "DejaVu Sans".into(),
            size: 10.0,
            color: "#000000".into(),
        }
    }
}

/// Per-axis decoration, flattened into the axis object on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisStyle {
    pub showgrid: bool,
    pub zeroline: bool,
    pub showline: bool,
    pub linecolor: String,
    pub ticks: String,
    pub mirror: String,
    pub tickfont: Font,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            showgrid: false,
            zeroline: false,
            showline: true,
            linecolor: "#000000".into(),
            ticks: "inside".into(),
            mirror: "ticks".into(),
            tickfont: Font::default(),
        }
    }
}

impl Trace {
    pub fn strip_style(&mut self) {
        self.line = None;
        self.opacity = None;
    }

    pub fn is_styled(&self) -> bool {
        self.line.is_some() || self.opacity.is_some()
    }
}

impl Layout {
    /// Remove fonts, backgrounds and axis decoration. Size, margins, ranges and
    /// anchors are layout information and stay.
    pub fn strip_style(&mut self) {
        self.font = None;
        self.paper_bgcolor = None;
        self.plot_bgcolor = None;
        self.xaxis1.style = None;
        self.yaxis1.style = None;
    }

    pub fn is_styled(&self) -> bool {
        self.font.is_some()
            || self.paper_bgcolor.is_some()
            || self.plot_bgcolor.is_some()
            || self.xaxis1.style.is_some()
            || self.yaxis1.style.is_some()
    }
}

impl Figure {
    /// Strip every presentation attribute so the hosting service falls back to
    /// its own default look.
    pub fn strip_style(&mut self) {
        for trace in &mut self.data {
            trace.strip_style();
        }
        self.layout.strip_style();
    }

    pub fn is_styled(&self) -> bool {
        self.layout.is_styled() || self.data.iter().any(Trace::is_styled)
    }
}
