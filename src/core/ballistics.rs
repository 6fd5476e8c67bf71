use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{InvalidReason, ModelError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Upper bound on trajectory sample counts; larger requests are clamped.
pub const MAX_SAMPLES: usize = 100_000;

/// Launch angle with its unit spelled out. Never converted implicitly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
}

impl Angle {
    pub fn radians(self) -> f64 {
        match self {
            Angle::Degrees(deg) => deg.to_radians(),
            Angle::Radians(rad) => rad,
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            Angle::Degrees(deg) => deg,
            Angle::Radians(rad) => rad.to_degrees(),
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Angle::Degrees(v) | Angle::Radians(v) => v.is_finite(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParameters {
    pub initial_height_m: f64,
    pub initial_speed_mps: f64,
    pub launch_angle: Angle,
    pub gravity_mps2: f64,
}

impl ProjectileParameters {
    pub fn new(
        initial_height_m: f64,
        initial_speed_mps: f64,
        launch_angle: Angle,
        gravity_mps2: f64,
    ) -> Self {
        Self {
            initial_height_m,
            initial_speed_mps,
            launch_angle,
            gravity_mps2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VelocityComponents {
    pub vx: f64,
    pub vy: f64,
}

impl VelocityComponents {
    pub fn speed(self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// State of the projectile at the moment it returns to ground level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Impact {
    pub time_s: f64,
    pub range_m: f64,
    pub velocity: VelocityComponents,
    pub speed_mps: f64,
    pub angle_below_horizontal_deg: f64,
}

pub fn velocity_components(params: ProjectileParameters) -> VelocityComponents {
    let theta = params.launch_angle.radians();
    VelocityComponents {
        vx: params.initial_speed_mps * theta.cos(),
        vy: params.initial_speed_mps * theta.sin(),
    }
}

pub fn velocity_at(params: ProjectileParameters, time_s: f64) -> VelocityComponents {
    let v0 = velocity_components(params);
    VelocityComponents {
        vx: v0.vx,
        vy: v0.vy - (params.gravity_mps2 * time_s),
    }
}

pub fn height_at(params: ProjectileParameters, time_s: f64) -> f64 {
    let VelocityComponents { vy, .. } = velocity_components(params);
    params.initial_height_m + (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s)
}

pub fn position_at(params: ProjectileParameters, time_s: f64) -> (f64, f64) {
    let VelocityComponents { vx, .. } = velocity_components(params);
    (vx * time_s, height_at(params, time_s))
}

fn check_inputs(params: ProjectileParameters) -> Result<(), ModelError> {
    let fields = [
        ("initial_height", params.initial_height_m),
        ("initial_speed", params.initial_speed_mps),
        ("gravity", params.gravity_mps2),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(InvalidReason::NonFinite { field }.into());
        }
    }
    if !params.launch_angle.is_finite() {
        return Err(InvalidReason::NonFinite {
            field: "launch_angle",
        }
        .into());
    }
    if params.gravity_mps2 <= 0.0 {
        return Err(InvalidReason::NonPositiveGravity {
            gravity: params.gravity_mps2,
        }
        .into());
    }

    if is_unusual_launch(params) {
        warn!(
            angle_deg = params.launch_angle.degrees(),
            speed_mps = params.initial_speed_mps,
            height_m = params.initial_height_m,
            "launch outside the usual physical range"
        );
    }
    Ok(())
}

/// Accepted but suspicious: angle outside `[0, 90]` degrees, negative speed
/// or release below ground.
fn is_unusual_launch(params: ProjectileParameters) -> bool {
    !(0.0..=90.0).contains(&params.launch_angle.degrees())
        || params.initial_speed_mps < 0.0
        || params.initial_height_m < 0.0
}

/// Discriminant of `h0 + vy*t - g*t^2/2 = 0`, i.e. `vy^2 + 2*g*h0`.
pub fn discriminant(params: ProjectileParameters) -> f64 {
    let VelocityComponents { vy, .. } = velocity_components(params);
    vy * vy + 2.0 * params.gravity_mps2 * params.initial_height_m
}

/// Positive root of the vertical position equation. The other root lies
/// before launch and is discarded.
pub fn flight_time(params: ProjectileParameters) -> Result<f64, ModelError> {
    check_inputs(params)?;

    let VelocityComponents { vy, .. } = velocity_components(params);
    let disc = discriminant(params);
    if disc < 0.0 {
        return Err(InvalidReason::NegativeDiscriminant { discriminant: disc }.into());
    }

    let t_land = (vy + disc.sqrt()) / params.gravity_mps2;
    if t_land < 0.0 {
        return Err(InvalidReason::NegativeFlightTime { time: t_land }.into());
    }
    Ok(t_land)
}

pub fn range(params: ProjectileParameters) -> Result<f64, ModelError> {
    let VelocityComponents { vx, .. } = velocity_components(params);
    Ok(vx * flight_time(params)?)
}

/// Time at which vertical velocity reaches zero. Launches aimed at or below
/// the horizontal peak at `t = 0`.
pub fn time_to_apex(params: ProjectileParameters) -> Result<f64, ModelError> {
    check_inputs(params)?;
    let VelocityComponents { vy, .. } = velocity_components(params);
    Ok(vy.max(0.0) / params.gravity_mps2)
}

pub fn max_height(params: ProjectileParameters) -> Result<f64, ModelError> {
    Ok(height_at(params, time_to_apex(params)?))
}

/// The impact angle is measured from the ground in the direction of travel,
/// so backward throws land at the same angle as their mirrored forward throw.
pub fn impact(params: ProjectileParameters) -> Result<Impact, ModelError> {
    let time_s = flight_time(params)?;
    let velocity = velocity_at(params, time_s);
    Ok(Impact {
        time_s,
        range_m: velocity.vx * time_s,
        velocity,
        speed_mps: velocity.speed(),
        angle_below_horizontal_deg: (-velocity.vy).atan2(velocity.vx.abs()).to_degrees(),
    })
}

/// `samples + 1` evenly spaced positions from launch to landing, with
/// `samples` clamped to `[2, MAX_SAMPLES]`.
pub fn sample_trajectory(
    params: ProjectileParameters,
    samples: usize,
) -> Result<Vec<(f64, f64)>, ModelError> {
    let time_of_flight_s = flight_time(params)?;
    let sample_count = samples.clamp(2, MAX_SAMPLES);
    Ok((0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            position_at(params, t)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn javelin_setup() -> ProjectileParameters {
        ProjectileParameters::new(1.75, 7.93, Angle::Degrees(45.0), 9.8)
    }

    fn record_throw() -> ProjectileParameters {
        ProjectileParameters::new(1.9, 29.361, Angle::Degrees(33.01), 9.8)
    }

    #[test]
    fn decomposes_javelin_setup() {
        let v = velocity_components(javelin_setup());
        assert_close(v.vx, 5.6074, 0.001);
        assert_close(v.vy, 5.6074, 0.001);
        assert_close(v.speed(), 7.93, 1e-9);
    }

    #[test]
    fn javelin_setup_flight_and_range() {
        let params = javelin_setup();
        let time = flight_time(params).expect("calculation should succeed");
        let distance = range(params).expect("calculation should succeed");

        assert_close(time, 1.3995, 0.001);
        assert_close(distance, 7.8477, 0.001);
    }

    #[test]
    fn record_throw_flight_and_range() {
        let params = record_throw();
        let v = velocity_components(params);
        assert_close(v.vx, 24.62, 0.01);
        assert_close(v.vy, 15.995, 0.001);

        let time = flight_time(params).expect("calculation should succeed");
        assert_close(time, 3.38, 0.005);
        assert_close(range(params).expect("calculation should succeed"), 83.2, 0.05);
    }

    #[test]
    fn lands_at_ground_level() {
        for params in [javelin_setup(), record_throw()] {
            let time = flight_time(params).expect("calculation should succeed");
            assert_close(height_at(params, time), 0.0, 1e-6);
        }
    }

    #[test]
    fn starts_at_launch_point() {
        let params = javelin_setup();
        assert_eq!(position_at(params, 0.0), (0.0, 1.75));
    }

    #[test]
    fn range_is_horizontal_speed_times_flight_time() {
        let params = record_throw();
        let v = velocity_components(params);
        let time = flight_time(params).expect("calculation should succeed");
        assert_eq!(range(params).expect("calculation should succeed"), v.vx * time);
        assert_eq!(position_at(params, time).0, v.vx * time);
    }

    #[test]
    fn symmetric_parabola_from_ground() {
        for angle in [15.0, 30.0, 45.0, 60.0, 75.0] {
            let params = ProjectileParameters::new(0.0, 10.0, Angle::Degrees(angle), 9.8);
            let v = velocity_components(params);
            let time = flight_time(params).expect("calculation should succeed");
            assert_close(time, 2.0 * v.vy / 9.8, 1e-12);
        }
    }

    #[test]
    fn computes_known_range_for_flat_ground() {
        let params = ProjectileParameters::new(0.0, 10.0, Angle::Degrees(45.0), 9.8);
        assert_close(flight_time(params).unwrap(), 1.4431, 0.001);
        assert_close(range(params).unwrap(), 10.2041, 0.001);
    }

    #[test]
    fn horizontal_launch_at_ground_is_zero_duration() {
        let params = ProjectileParameters::new(0.0, 10.0, Angle::Degrees(0.0), 9.8);
        assert_eq!(velocity_components(params).vy, 0.0);
        assert_eq!(flight_time(params).unwrap(), 0.0);
        assert_eq!(range(params).unwrap(), 0.0);
    }

    #[test]
    fn flight_time_is_non_negative_for_elevated_launches() {
        for height in [0.5, 1.75, 10.0, 100.0] {
            for angle in [-60.0, -10.0, 0.0, 10.0, 45.0, 89.0, 120.0] {
                let params = ProjectileParameters::new(height, 12.0, Angle::Degrees(angle), 9.81);
                let time = flight_time(params).expect("calculation should succeed");
                assert!(time >= 0.0, "height={height}, angle={angle}, time={time}");
            }
        }
    }

    #[test]
    fn radians_and_degrees_agree() {
        let deg = javelin_setup();
        let rad = ProjectileParameters {
            launch_angle: Angle::Radians(std::f64::consts::FRAC_PI_4),
            ..deg
        };
        assert_close(flight_time(deg).unwrap(), flight_time(rad).unwrap(), 1e-12);
        assert_close(Angle::Radians(std::f64::consts::PI).degrees(), 180.0, 1e-12);
    }

    #[test]
    fn rejects_non_positive_gravity() {
        for gravity in [0.0, -9.8] {
            let params = ProjectileParameters {
                gravity_mps2: gravity,
                ..javelin_setup()
            };
            let err = flight_time(params).expect_err("calculation should fail");
            assert_eq!(
                err,
                ModelError::InvalidParameters {
                    reason: InvalidReason::NonPositiveGravity { gravity }
                }
            );
            assert!(time_to_apex(params).is_err());
        }
    }

    #[test]
    fn rejects_impossible_landing_time() {
        let params = ProjectileParameters::new(-10.0, 1.0, Angle::Degrees(0.0), 9.8);
        let err = flight_time(params).expect_err("calculation should fail");
        assert!(matches!(
            err,
            ModelError::InvalidParameters {
                reason: InvalidReason::NegativeDiscriminant { .. }
            }
        ));
        assert!(err.to_string().contains("no real landing time"));
    }

    #[test]
    fn rejects_underground_downward_launch() {
        // Real roots exist but both lie before launch.
        let params = ProjectileParameters::new(-1.0, 20.0, Angle::Degrees(-45.0), 9.8);
        let err = range(params).expect_err("calculation should fail");
        assert!(matches!(
            err,
            ModelError::InvalidParameters {
                reason: InvalidReason::NegativeFlightTime { .. }
            }
        ));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let params = ProjectileParameters {
            initial_speed_mps: f64::NAN,
            ..javelin_setup()
        };
        assert_eq!(
            flight_time(params),
            Err(ModelError::InvalidParameters {
                reason: InvalidReason::NonFinite {
                    field: "initial_speed"
                }
            })
        );

        let params = ProjectileParameters {
            launch_angle: Angle::Degrees(f64::INFINITY),
            ..javelin_setup()
        };
        assert!(flight_time(params).is_err());
    }

    #[test]
    fn apex_of_javelin_setup() {
        let params = javelin_setup();
        assert_close(time_to_apex(params).unwrap(), 0.5722, 0.0005);
        assert_close(max_height(params).unwrap(), 3.3542, 0.0005);
        assert_close(velocity_at(params, time_to_apex(params).unwrap()).vy, 0.0, 1e-12);
    }

    #[test]
    fn downward_launch_peaks_at_release() {
        let params = ProjectileParameters::new(5.0, 10.0, Angle::Degrees(-20.0), 9.8);
        assert_eq!(time_to_apex(params).unwrap(), 0.0);
        assert_eq!(max_height(params).unwrap(), 5.0);
    }

    #[test]
    fn impact_speed_matches_energy_conservation() {
        let params = record_throw();
        let hit = impact(params).expect("calculation should succeed");
        let expected = (29.361f64.powi(2) + 2.0 * 9.8 * 1.9).sqrt();
        assert_close(hit.speed_mps, expected, 1e-9);
        assert_close(hit.range_m, range(params).unwrap(), 1e-12);
        assert!(hit.angle_below_horizontal_deg > 33.01);
        assert_close(hit.angle_below_horizontal_deg, 34.812, 0.001);
    }

    #[test]
    fn samples_span_launch_to_landing() {
        let params = javelin_setup();
        let points = sample_trajectory(params, 64).unwrap();
        assert_eq!(points.len(), 65);
        assert_eq!(points[0], (0.0, 1.75));
        let (last_x, last_y) = points[points.len() - 1];
        assert_close(last_x, range(params).unwrap(), 1e-9);
        assert_close(last_y, 0.0, 1e-6);

        assert_eq!(sample_trajectory(params, 0).unwrap().len(), 3);
    }

    #[test]
    fn oversized_sample_requests_are_clamped() {
        let points = sample_trajectory(javelin_setup(), usize::MAX).unwrap();
        assert_eq!(points.len(), MAX_SAMPLES + 1);
        assert_close(points[MAX_SAMPLES].1, 0.0, 1e-6);
    }

    #[test]
    fn backward_throw_lands_at_mirrored_angle() {
        let forward = ProjectileParameters::new(1.9, 29.361, Angle::Degrees(60.0), 9.8);
        let backward = ProjectileParameters {
            launch_angle: Angle::Degrees(120.0),
            ..forward
        };
        let ahead = impact(forward).unwrap();
        let behind = impact(backward).unwrap();
        assert!(behind.range_m < 0.0);
        assert_close(behind.range_m, -ahead.range_m, 1e-9);
        assert_close(
            behind.angle_below_horizontal_deg,
            ahead.angle_below_horizontal_deg,
            1e-9,
        );
        assert!((0.0..=90.0).contains(&behind.angle_below_horizontal_deg));
    }

    #[test]
    fn flags_unusual_launches() {
        assert!(!is_unusual_launch(javelin_setup()));
        assert!(!is_unusual_launch(record_throw()));
        let base = javelin_setup();
        let cases = [
            ProjectileParameters {
                initial_speed_mps: -7.93,
                ..base
            },
            ProjectileParameters {
                initial_height_m: -0.5,
                ..base
            },
            ProjectileParameters {
                launch_angle: Angle::Degrees(120.0),
                ..base
            },
            ProjectileParameters {
                launch_angle: Angle::Degrees(-5.0),
                ..base
            },
        ];
        for params in cases {
            assert!(is_unusual_launch(params), "{params:?}");
        }
    }
}
