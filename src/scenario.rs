//! Named launch scenarios and the ways callers derive new ones.
//!
//! Presets are plain values. Overrides and JSON documents always produce a
//! fresh [`Scenario`]; nothing here is shared mutable state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::ballistics::{Angle, EARTH_GRAVITY_MPS2, ProjectileParameters};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{name}' (available: {available})")]
    UnknownScenario { name: String, available: String },

    #[error("could not read parameters file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameters document")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub title: String,
    pub params: ProjectileParameters,
}

impl Scenario {
    pub fn new(name: impl Into<String>, title: impl Into<String>, params: ProjectileParameters) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            params,
        }
    }

    pub fn javelin_setup() -> Self {
        Self::new(
            "javelin-setup",
            "Javelin throw: problem setup",
            ProjectileParameters::new(1.75, 7.93, Angle::Degrees(45.0), EARTH_GRAVITY_MPS2),
        )
    }

    pub fn record_throw() -> Self {
        Self::new(
            "record-throw",
            "Javelin throw: competition distance",
            ProjectileParameters::new(1.9, 29.361, Angle::Degrees(33.01), EARTH_GRAVITY_MPS2),
        )
    }

    pub fn ground_level_horizontal() -> Self {
        Self::new(
            "ground-level-horizontal",
            "Horizontal release at ground level",
            ProjectileParameters::new(0.0, 10.0, Angle::Degrees(0.0), EARTH_GRAVITY_MPS2),
        )
    }

    pub fn builtin() -> Vec<Self> {
        vec![
            Self::javelin_setup(),
            Self::record_throw(),
            Self::ground_level_horizontal(),
        ]
    }

    /// Case-insensitive lookup; `_` and `-` are interchangeable.
    pub fn find(name: &str) -> Result<Self, ScenarioError> {
        let wanted = normalize_name(name);
        let presets = Self::builtin();
        let available = presets
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        presets
            .into_iter()
            .find(|s| normalize_name(&s.name) == wanted)
            .ok_or_else(|| ScenarioError::UnknownScenario {
                name: name.to_string(),
                available,
            })
    }

    pub fn from_json_str(name: &str, json: &str) -> Result<Self, ScenarioError> {
        let document: ParametersDocument = serde_json::from_str(json)?;
        let title = document
            .title
            .unwrap_or_else(|| format!("Custom scenario: {name}"));
        Ok(Self::new(name, title, document.params))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        debug!(path = %path.display(), "loading parameters document");
        Self::from_json_str(&name, &json)
    }

    pub fn with_overrides(&self, overrides: ParameterOverrides) -> Self {
        if overrides.is_empty() {
            return self.clone();
        }
        Self {
            name: format!("{} (custom)", self.name),
            title: self.title.clone(),
            params: overrides.apply(self.params),
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

#[derive(Deserialize)]
struct ParametersDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(flatten)]
    params: ProjectileParameters,
}

/// Per-field replacements layered over a scenario's parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParameterOverrides {
    pub initial_height_m: Option<f64>,
    pub initial_speed_mps: Option<f64>,
    pub launch_angle: Option<Angle>,
    pub gravity_mps2: Option<f64>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, base: ProjectileParameters) -> ProjectileParameters {
        ProjectileParameters {
            initial_height_m: self.initial_height_m.unwrap_or(base.initial_height_m),
            initial_speed_mps: self.initial_speed_mps.unwrap_or(base.initial_speed_mps),
            launch_angle: self.launch_angle.unwrap_or(base.launch_angle),
            gravity_mps2: self.gravity_mps2.unwrap_or(base.gravity_mps2),
        }
    }
}
