//! Explicit chart description shared by local rendering and publishing.
//!
//! A [`Figure`] is built once by the plot step and handed by reference to the
//! consumers that need it, so there is no ambient "current figure". The serde
//! layout follows the JSON the hosted service accepts: `data` is the trace
//! array, `layout` the figure-level settings.

pub mod render;
pub mod style;

use serde::Serialize;

use crate::math::stats::StatsHelper;
use crate::prelude::{StageError, StageResult};

pub use style::{AxisStyle, Font, LineStyle};

/// Line colour of the first series in matplotlib's default cycle.
pub const DEFAULT_LINE_COLOR: &str = "#1F77B4";
/// Default line width in points.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
/// Default figure size in pixels (6.4 x 4.8 inches at 100 dpi).
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);

/// The top level container for all the plot elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub xaxis: String,
    pub yaxis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
    pub pad: u32,
}

impl Default for Margin {
    fn default() -> Self {
        // Matplotlib's subplot params (0.125, 0.9, 0.88, 0.11) on a 640x480 canvas.
        Self {
            l: 80,
            r: 63,
            t: 57,
            b: 52,
            pad: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub domain: [f64; 2],
    pub anchor: String,
    pub side: String,
    #[serde(flatten)]
    pub style: Option<AxisStyle>,
}

impl Axis {
    fn new(range: [f64; 2], anchor: &str, side: &str) -> Self {
        Self {
            range,
            domain: [0.0, 1.0],
            anchor: anchor.into(),
            side: side.into(),
            style: Some(AxisStyle::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub autosize: bool,
    pub margin: Margin,
    pub hovermode: String,
    pub showlegend: bool,
    pub xaxis1: Axis,
    pub yaxis1: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
}

impl Layout {
    /// Pixel size used when rendering locally.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(DEFAULT_SIZE.0),
            self.height.unwrap_or(DEFAULT_SIZE.1),
        )
    }
}

impl Figure {
    /// Plot `y` versus `x` as a single line series.
    ///
    /// Both series must be non-empty and of equal length. Axis ranges are
    /// autoscaled with a 5% margin around the data.
    pub fn line(x: &[f64], y: &[f64]) -> StageResult<Self> {
        if x.len() != y.len() {
            return Err(StageError::ShapeMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let (x_min, x_max) = StatsHelper::extent(x)
            .ok_or_else(|| StageError::InvalidInput("cannot plot an empty series".into()))?;
        let (y_min, y_max) = StatsHelper::extent(y)
            .ok_or_else(|| StageError::InvalidInput("cannot plot an empty series".into()))?;

        let trace = Trace {
            kind: "scatter".into(),
            mode: "lines".into(),
            name: "_line0".into(),
            x: x.to_vec(),
            y: y.to_vec(),
            xaxis: "x1".into(),
            yaxis: "y1".into(),
            line: Some(LineStyle::default()),
            opacity: Some(1.0),
        };

        let layout = Layout {
            width: Some(DEFAULT_SIZE.0),
            height: Some(DEFAULT_SIZE.1),
            autosize: false,
            margin: Margin::default(),
            hovermode: "closest".into(),
            showlegend: false,
            xaxis1: Axis::new(StatsHelper::padded_range(x_min, x_max), "y1", "bottom"),
            yaxis1: Axis::new(StatsHelper::padded_range(y_min, y_max), "x1", "left"),
            font: Some(Font::default()),
            paper_bgcolor: Some("#FFFFFF".into()),
            plot_bgcolor: Some("#FFFFFF".into()),
        };

        Ok(Self {
            data: vec![trace],
            layout,
        })
    }

    pub fn series_count(&self) -> usize {
        self.data.len()
    }

    /// Drop the fixed pixel size and let the viewer size the chart.
    pub fn resize(&mut self) {
        self.layout.width = None;
        self.layout.height = None;
        self.layout.autosize = true;
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
