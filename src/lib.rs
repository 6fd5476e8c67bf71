//! Closed-form kinematics of a javelin throw.
//!
//! [`core::ballistics`] holds the projectile model. The remaining modules
//! consume it: named scenarios, a narrated derivation report, and an SVG
//! trajectory chart.

pub mod chart;
pub mod core;
pub mod error;
pub mod report;
pub mod scenario;
