//! Static trajectory chart: the final-result scene as an SVG file.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::core::ballistics::sample_trajectory;
use crate::core::window::AxisWindow;
use crate::error::ModelError;
use crate::report::KinematicsReport;

const VELOCITY_COLOR: RGBColor = RGBColor(230, 190, 20);
const VX_COLOR: RGBColor = RGBColor(0, 128, 128);
const VY_COLOR: RGBColor = RGBColor(240, 140, 20);
const PATH_COLOR: RGBColor = RGBColor(54, 123, 245);
const MARKER_COLOR: RGBColor = RGBColor(200, 40, 40);

/// Length of the full launch velocity arrow, as a fraction of window height.
const VECTOR_SCREEN_FRACTION: f64 = 0.35;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub caption: String,
    pub window: AxisWindow,
    pub path: Vec<(f64, f64)>,
    pub launch: (f64, f64),
    pub apex: (f64, f64),
    pub landing: (f64, f64),
    pub velocity: Arrow,
    pub vx: Arrow,
    pub vy: Arrow,
}

impl ChartLayout {
    pub fn build(report: &KinematicsReport, samples: usize) -> Result<Self, ChartError> {
        let params = report.params;
        let path = sample_trajectory(params, samples)?;

        let launch = (0.0, params.initial_height_m);
        let (raw_x, raw_y) = extents(path.iter().copied().chain([launch]));
        let path_window = AxisWindow::fit_extents(raw_x, raw_y);

        let speed = params.initial_speed_mps.abs().max(f64::EPSILON);
        let scale = (path_window.y_span() * VECTOR_SCREEN_FRACTION) / speed;
        let v = report.launch_velocity;
        let tip = (launch.0 + v.vx * scale, launch.1 + v.vy * scale);

        // Refit so arrows pointing backward or below ground stay on the chart.
        let (raw_x, raw_y) = extents(path.iter().copied().chain([launch, tip]));
        let window = AxisWindow::fit_extents(raw_x, raw_y);

        Ok(Self {
            caption: format!(
                "{}: t = {:.2} s, R = {:.2} m",
                report.title, report.flight_time_s, report.range_m
            ),
            window,
            path,
            launch,
            apex: (v.vx * report.time_to_apex_s, report.max_height_m),
            landing: (report.range_m, 0.0),
            velocity: Arrow { from: launch, to: tip },
            vx: Arrow {
                from: launch,
                to: (tip.0, launch.1),
            },
            vy: Arrow {
                from: launch,
                to: (launch.0, tip.1),
            },
        })
    }
}

/// `((min_x, max_x), (min_y, max_y))` over the given points.
fn extents(points: impl IntoIterator<Item = (f64, f64)>) -> ((f64, f64), (f64, f64)) {
    points.into_iter().fold(
        ((0.0f64, 0.0f64), (0.0f64, 0.0f64)),
        |((min_x, max_x), (min_y, max_y)), (x, y)| {
            ((min_x.min(x), max_x.max(x)), (min_y.min(y), max_y.max(y)))
        },
    )
}

pub fn render_svg(layout: &ChartLayout, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    draw(layout, path, size).map_err(|err| ChartError::Drawing(err.to_string()))?;
    info!(path = %path.display(), "wrote trajectory chart");
    Ok(())
}

fn draw(
    layout: &ChartLayout,
    path: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let window = layout.window;
    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(window.min_x..window.max_x, window.min_y..window.max_y)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .light_line_style(RGBColor(227, 231, 236))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            layout.path.iter().copied(),
            PATH_COLOR.stroke_width(3),
        ))?
        .label("trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PATH_COLOR));

    for (arrow, color, label) in [
        (layout.velocity, VELOCITY_COLOR, "v0"),
        (layout.vx, VX_COLOR, "v0x"),
        (layout.vy, VY_COLOR, "v0y"),
    ] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![arrow.from, arrow.to],
                color.stroke_width(2),
            )))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart.draw_series([
        Circle::new(layout.launch, 5, GREEN.filled()),
        Circle::new(layout.apex, 4, PATH_COLOR.filled()),
        Circle::new(layout.landing, 5, MARKER_COLOR.filled()),
    ])?;
    chart.draw_series(std::iter::once(Text::new(
        format!("{:.2} m", layout.landing.0),
        layout.landing,
        ("sans-serif", 16).into_font(),
    )))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
