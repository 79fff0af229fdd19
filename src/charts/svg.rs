//! Tier-1 chart backend: plotters with the SVG string backend.
//!
//! Draws geometry only (bars, line, pie wedges); titles, axis labels and
//! legends are supplied by the surrounding HTML, so no font support is
//! needed in the plotters build.

use plotters::prelude::*;

use super::render::Series;
use super::{ChartError, ChartKind, palette_color};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

/// Draw the series as an inline SVG fragment.
pub fn draw(kind: ChartKind, series: &Series) -> Result<String, ChartError> {
    if series.points.is_empty() {
        return Err(ChartError("empty series".to_string()));
    }
    if series.max_value() <= 0.0 {
        return Err(ChartError("no positive values to scale against".to_string()));
    }

    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(stringify)?;

        match kind {
            ChartKind::Bar => draw_bars(&root, series)?,
            ChartKind::Line => draw_line(&root, series)?,
            ChartKind::Pie => draw_pie(&root, series)?,
            // Gauge results are shown as a metric card, never drawn here.
            ChartKind::Gauge => {
                return Err(ChartError("gauge has no svg representation".to_string()));
            }
        }

        root.present().map_err(stringify)?;
    }
    Ok(buf)
}

fn stringify<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError(e.to_string())
}

fn draw_bars(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    series: &Series,
) -> Result<(), ChartError> {
    let n = series.points.len() as f64;
    let y_max = series.max_value() * 1.1;

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .build_cartesian_2d(0f64..n, 0f64..y_max)
        .map_err(stringify)?;

    let color = hex_color(palette_color(0));
    for (i, point) in series.points.iter().enumerate() {
        let x = i as f64;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x + 0.15, 0.0), (x + 0.85, point.value.max(0.0))],
                color.filled(),
            )))
            .map_err(stringify)?;
    }
    Ok(())
}

fn draw_line(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    series: &Series,
) -> Result<(), ChartError> {
    let n = series.points.len() as f64;
    let y_max = series.max_value() * 1.1;

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .build_cartesian_2d(0f64..n, 0f64..y_max)
        .map_err(stringify)?;

    let color = hex_color(palette_color(0));
    let coords: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64 + 0.5, p.value.max(0.0)))
        .collect();

    chart
        .draw_series(LineSeries::new(coords.iter().copied(), color.stroke_width(3)))
        .map_err(stringify)?;
    chart
        .draw_series(coords.iter().map(|&xy| Circle::new(xy, 4, color.filled())))
        .map_err(stringify)?;
    Ok(())
}

/// Pie wedges as filled polygons approximating circle sectors, drawn in
/// pixel coordinates on the root area.
fn draw_pie(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    series: &Series,
) -> Result<(), ChartError> {
    let total = series.total();
    if total <= 0.0 {
        return Err(ChartError("pie needs a positive total".to_string()));
    }

    let center = (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);
    let radius = (HEIGHT as f64 / 2.0) - 20.0;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, point) in series.points.iter().enumerate() {
        let sweep = point.value.max(0.0) / total * std::f64::consts::TAU;
        let end = start + sweep;

        let mut vertices = vec![(center.0 as i32, center.1 as i32)];
        let steps = ((sweep.to_degrees().ceil() as usize).max(2)).min(360);
        for step in 0..=steps {
            let angle = start + sweep * step as f64 / steps as f64;
            vertices.push((
                (center.0 + radius * angle.cos()) as i32,
                (center.1 + radius * angle.sin()) as i32,
            ));
        }

        root.draw(&Polygon::new(vertices, hex_color(palette_color(i)).filled()))
            .map_err(stringify)?;
        start = end;
    }
    Ok(())
}

/// Parse a `#rrggbb` palette entry; unparseable input maps to grey.
fn hex_color(hex: &str) -> RGBColor {
    let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or(""), 16);
    match (parse(1..3), parse(3..5), parse(5..7)) {
        (Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => RGBColor(128, 128, 128),
    }
}
