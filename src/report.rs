//! Evaluates a scenario once and narrates the derivation.

use std::fmt::Write as _;

use chrono::{Local, SecondsFormat};
use serde::Serialize;
use tracing::debug;

use crate::core::ballistics::{
    Impact, ProjectileParameters, VelocityComponents, discriminant, impact, max_height,
    time_to_apex, velocity_components,
};
use crate::error::ModelError;
use crate::scenario::Scenario;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KinematicsReport {
    pub scenario: String,
    pub title: String,
    pub params: ProjectileParameters,
    pub angle_deg: f64,
    pub launch_velocity: VelocityComponents,
    pub discriminant: f64,
    pub time_to_apex_s: f64,
    pub max_height_m: f64,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub impact: Impact,
    pub generated_at: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DerivationStep {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl KinematicsReport {
    pub fn compute(scenario: &Scenario) -> Result<Self, ModelError> {
        let params = scenario.params;
        let hit = impact(params)?;
        let report = Self {
            scenario: scenario.name.clone(),
            title: scenario.title.clone(),
            params,
            angle_deg: params.launch_angle.degrees(),
            launch_velocity: velocity_components(params),
            discriminant: discriminant(params),
            time_to_apex_s: time_to_apex(params)?,
            max_height_m: max_height(params)?,
            flight_time_s: hit.time_s,
            range_m: hit.range_m,
            impact: hit,
            generated_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };
        debug!(
            scenario = %report.scenario,
            flight_time_s = report.flight_time_s,
            range_m = report.range_m,
            "computed kinematics"
        );
        Ok(report)
    }

    /// One step per narrated scene: setup, decomposition, vertical motion,
    /// horizontal motion, result.
    pub fn derivation(&self) -> Vec<DerivationStep> {
        let p = self.params;
        let VelocityComponents { vx, vy } = self.launch_velocity;
        let half_g = 0.5 * p.gravity_mps2;

        vec![
            DerivationStep {
                title: "Problem setup",
                lines: vec![
                    format!("h0 = {:.2} m", p.initial_height_m),
                    format!("|v0| = {:.2} m/s", p.initial_speed_mps),
                    format!("θ = {:.2}°", self.angle_deg),
                    format!("g = {:.2} m/s²", p.gravity_mps2),
                ],
            },
            DerivationStep {
                title: "Velocity decomposition",
                lines: vec![
                    format!(
                        "v0x = |v0|·cos θ = {:.2}·cos({:.2}°) = {vx:.3} m/s",
                        p.initial_speed_mps, self.angle_deg
                    ),
                    format!(
                        "v0y = |v0|·sin θ = {:.2}·sin({:.2}°) = {vy:.3} m/s",
                        p.initial_speed_mps, self.angle_deg
                    ),
                ],
            },
            DerivationStep {
                title: "Vertical analysis",
                lines: vec![
                    "y(t) = h0 + v0y·t − ½·g·t²".to_string(),
                    format!(
                        "0 = {:.2} + {vy:.3}·t − {half_g:.3}·t²",
                        p.initial_height_m
                    ),
                    format!(
                        "t = (v0y + √(v0y² + 2·g·h0)) / g = ({vy:.3} + √{:.3}) / {:.2} = {:.3} s",
                        self.discriminant, p.gravity_mps2, self.flight_time_s
                    ),
                    format!(
                        "apex at t = {:.3} s, y = {:.3} m",
                        self.time_to_apex_s, self.max_height_m
                    ),
                ],
            },
            DerivationStep {
                title: "Horizontal analysis",
                lines: vec![
                    "x(t) = v0x·t".to_string(),
                    format!(
                        "R = {vx:.3}·{:.3} = {:.3} m",
                        self.flight_time_s, self.range_m
                    ),
                ],
            },
            DerivationStep {
                title: "Final result",
                lines: vec![
                    format!("Time of flight: {:.3} s", self.flight_time_s),
                    format!("Horizontal distance: {:.3} m", self.range_m),
                    format!(
                        "Impact: {:.3} m/s at {:.2}° below horizontal",
                        self.impact.speed_mps, self.impact.angle_below_horizontal_deg
                    ),
                ],
            },
        ]
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} [{}]", self.title, self.scenario);
        for (idx, step) in self.derivation().iter().enumerate() {
            let _ = writeln!(out, "\n{}. {}", idx + 1, step.title);
            for line in &step.lines {
                let _ = writeln!(out, "   {line}");
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
