use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::telemetry::log::LogManager;

const FALLBACK_RGB: RGBColor = RGBColor(0x1F, 0x77, 0xB4);

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("figure has no series to draw")]
    Empty,
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

fn backend_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Render `figure` to `path`. `.svg` selects the SVG backend, anything else
/// is written as a bitmap. The backend is flushed and dropped before return.
pub fn to_file(figure: &Figure, path: &Path) -> Result<(), RenderError> {
    if figure.data.is_empty() {
        return Err(RenderError::Empty);
    }
    let logger = LogManager::new("render");
    let size = figure.layout.pixel_size();
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(figure, &root)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(figure, &root)?;
    }
    logger.record(&format!("figure written to {}", path.display()));
    Ok(())
}

fn draw<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let [x_lo, x_hi] = figure.layout.xaxis1.range;
    let [y_lo, y_hi] = figure.layout.yaxis1.range;
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .draw()
        .map_err(backend_error)?;

    for trace in &figure.data {
        let (color, width) = match &trace.line {
            Some(line) => (
                parse_hex_color(&line.color).unwrap_or(FALLBACK_RGB),
                line.width.round().max(1.0) as u32,
            ),
            None => (FALLBACK_RGB, 1),
        };
        let points = trace.x.iter().copied().zip(trace.y.iter().copied());
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(width)))
            .map_err(backend_error)?;
    }

    root.present().map_err(backend_error)?;
    Ok(())
}

/// Parse `#RRGGBB` into a plotters colour.
pub fn parse_hex_color(value: &str) -> Option<RGBColor> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
