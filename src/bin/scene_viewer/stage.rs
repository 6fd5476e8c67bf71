use macroquad::prelude::*;

use javelin_kinematics::chart::{Arrow, ChartLayout};
use javelin_kinematics::core::ballistics::{height_at, position_at};
use javelin_kinematics::core::window::lerp_point;
use javelin_kinematics::report::KinematicsReport;

use crate::constants::{
    ATHLETE_COLOR, PATH_COLOR, TEXT_COLOR, TRAJECTORY_SAMPLES, VELOCITY_COLOR, VX_COLOR, VY_COLOR,
};
use crate::render::{Viewport, draw_arrow, draw_dashed, draw_label_at, draw_marker, draw_path};
use crate::scenes::{Motion, Scene, staged};

fn faded(color: Color) -> Color {
    Color::new(color.r, color.g, color.b, 0.3)
}

fn sample_until(t_end: f64, f: impl Fn(f64) -> (f64, f64)) -> Vec<(f64, f64)> {
    (0..=TRAJECTORY_SAMPLES)
        .map(|i| f(t_end * i as f64 / TRAJECTORY_SAMPLES as f64))
        .collect()
}

pub(crate) fn draw_stage(
    view: &Viewport,
    report: &KinematicsReport,
    layout: &ChartLayout,
    scene: Scene,
    progress: f32,
    font: Option<&Font>,
) {
    match scene {
        Scene::Setup => draw_setup(view, report, layout, progress, font),
        Scene::Decomposition => draw_decomposition(view, report, layout, progress, font),
        _ => draw_flight(view, report, layout, scene.motion(), progress, font),
    }
}

fn draw_athlete(view: &Viewport, layout: &ChartLayout, progress: f32) {
    let pole = Arrow {
        from: (0.0, 0.0),
        to: layout.launch,
    };
    let grown = staged(progress, 0.0, 0.3) as f64;
    let top = lerp_point(pole.from, pole.to, grown);
    draw_path(view, &[pole.from, top], 6.0, ATHLETE_COLOR);
    if grown >= 1.0 {
        draw_marker(view, layout.launch, 6.0, YELLOW, DARKGRAY);
    }
}

fn draw_setup(
    view: &Viewport,
    report: &KinematicsReport,
    layout: &ChartLayout,
    progress: f32,
    font: Option<&Font>,
) {
    draw_athlete(view, layout, progress);
    if progress >= 0.3 {
        draw_label_at(
            view,
            (0.0, layout.launch.1 * 0.5),
            vec2(-96.0, 0.0),
            &format!("h0 = {:.2} m", report.params.initial_height_m),
            TEXT_COLOR,
            font,
        );
        draw_dashed(view, layout.launch, layout.vx.to, DARKGRAY);
    }

    draw_arrow(view, layout.velocity, staged(progress, 0.4, 0.8), VELOCITY_COLOR);
    if progress >= 0.8 {
        draw_label_at(
            view,
            layout.launch,
            vec2(24.0, -8.0),
            &format!("θ = {:.0}°", report.angle_deg),
            TEXT_COLOR,
            font,
        );
        draw_label_at(
            view,
            layout.velocity.to,
            vec2(8.0, -12.0),
            &format!("|v0| = {:.2} m/s", report.params.initial_speed_mps),
            VELOCITY_COLOR,
            font,
        );
    }
}

fn draw_decomposition(
    view: &Viewport,
    report: &KinematicsReport,
    layout: &ChartLayout,
    progress: f32,
    font: Option<&Font>,
) {
    draw_athlete(view, layout, 1.0);
    draw_arrow(view, layout.velocity, 1.0, VELOCITY_COLOR);

    let vx_progress = staged(progress, 0.0, 0.45);
    let vy_progress = staged(progress, 0.45, 0.9);
    draw_arrow(view, layout.vx, vx_progress, VX_COLOR);
    draw_arrow(view, layout.vy, vy_progress, VY_COLOR);

    if vx_progress >= 1.0 {
        draw_dashed(view, layout.velocity.to, layout.vx.to, VX_COLOR);
        draw_label_at(
            view,
            layout.vx.to,
            vec2(-40.0, 26.0),
            &format!("v0x = {:.3} m/s", report.launch_velocity.vx),
            VX_COLOR,
            font,
        );
    }
    if vy_progress >= 1.0 {
        draw_dashed(view, layout.velocity.to, layout.vy.to, VY_COLOR);
        draw_label_at(
            view,
            layout.vy.to,
            vec2(-150.0, 0.0),
            &format!("v0y = {:.3} m/s", report.launch_velocity.vy),
            VY_COLOR,
            font,
        );
    }
}

fn draw_flight(
    view: &Viewport,
    report: &KinematicsReport,
    layout: &ChartLayout,
    motion: Motion,
    progress: f32,
    font: Option<&Font>,
) {
    let params = report.params;
    let t = report.flight_time_s * progress as f64;
    draw_athlete(view, layout, 1.0);

    match motion {
        Motion::VerticalOnly => {
            draw_arrow(view, layout.vy, 1.0, faded(VY_COLOR));
            let trail = sample_until(t, |s| (0.0, height_at(params, s)));
            draw_path(view, &trail, 3.0, VY_COLOR);
            let dot = (0.0, height_at(params, t));
            draw_marker(view, dot, 7.0, RED, MAROON);
            draw_label_at(view, dot, vec2(16.0, 6.0), &format!("t = {t:.2} s"), TEXT_COLOR, font);
            if t >= report.time_to_apex_s {
                draw_label_at(
                    view,
                    (0.0, report.max_height_m),
                    vec2(16.0, -14.0),
                    &format!("y max = {:.3} m", report.max_height_m),
                    VY_COLOR,
                    font,
                );
            }
        }
        Motion::HorizontalOnly => {
            draw_arrow(view, layout.vx, 1.0, faded(VX_COLOR));
            let x = report.launch_velocity.vx * t;
            draw_path(view, &[(0.0, 0.0), (x, 0.0)], 4.0, VX_COLOR);
            draw_marker(view, (x, 0.0), 7.0, RED, MAROON);
            draw_label_at(
                view,
                (x, 0.0),
                vec2(-30.0, -18.0),
                &format!("x = {x:.2} m"),
                TEXT_COLOR,
                font,
            );
        }
        Motion::Full => {
            draw_path(view, &layout.path, 1.5, faded(PATH_COLOR));
            let trail = sample_until(t, |s| position_at(params, s));
            draw_path(view, &trail, 3.0, PATH_COLOR);
            if t >= report.time_to_apex_s {
                draw_marker(view, layout.apex, 4.0, PATH_COLOR, DARKBLUE);
            }
            draw_marker(view, position_at(params, t), 7.0, RED, MAROON);
            if progress >= 1.0 {
                draw_marker(view, layout.landing, 6.0, RED, MAROON);
                draw_label_at(
                    view,
                    layout.landing,
                    vec2(-40.0, -18.0),
                    &format!("R = {:.2} m", report.range_m),
                    TEXT_COLOR,
                    font,
                );
            }
        }
        Motion::None => {}
    }
}
