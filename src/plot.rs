//! Curve comparison chart.
//!
//! Sampling is kept separate from rendering so the series content can be
//! checked without a drawing backend. The renderer writes an SVG file; the
//! original investigation popped an interactive window, which has no place in
//! a pipeline run.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::curves::{f, g};
use crate::error::{PlotError, Result};

pub const SAMPLE_COUNT: usize = 50;
pub const DOMAIN_START: f64 = -0.25;
pub const DOMAIN_END: f64 = 1.25;

/// One labeled sampled curve.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Sample both curves over the fixed comparison domain.
pub fn sample_curves() -> Vec<Series> {
    let xs = linspace(DOMAIN_START, DOMAIN_END, SAMPLE_COUNT);
    vec![
        Series {
            label: "f",
            points: xs.iter().map(|&x| (x, f(x))).collect(),
        },
        Series {
            label: "g",
            points: xs.iter().map(|&x| (x, g(x))).collect(),
        },
    ]
}

/// Render the sampled series to `path` as a gridded, labeled SVG chart.
pub fn render(series: &[Series], path: &Path) -> Result<()> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in series {
        if s.points.is_empty() {
            return Err(PlotError::EmptySeries(s.label.to_string()).into());
        }
        for &(_, y) in &s.points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let y_pad = 0.05 * (y_max - y_min).max(f64::EPSILON);

    let root = SVGBackend::new(path, (640, 360)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(DOMAIN_START..DOMAIN_END, (y_min - y_pad)..(y_max + y_pad))
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    let palette = [&BLUE, &RED, &GREEN];
    for (s, color) in series.iter().zip(palette.iter().cycle()) {
        let color = **color;
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color))
            .map_err(|e| PlotError::Backend(e.to_string()))?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| PlotError::Backend(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Backend(e.to_string()))?;
    info!("[PLOT] wrote comparison chart to {}", path.display());
    Ok(())
}
