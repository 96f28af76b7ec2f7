//! Locomotion domain: tuning, probe configuration, and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::locomotion::components::GameLayer;

/// On-disk tuning overrides. Missing or malformed files fall back to the
/// built-in defaults; the result is validated either way.
pub const TUNING_PATH: &str = "assets/tuning.ron";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub horizontal_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Constant descent speed while wall-sliding (stored positive).
    pub wall_slide_speed: f32,
    /// Total jump budget per airborne period, ground jump included.
    pub max_air_jumps: u8,
    /// Seconds of horizontal-input suppression after a wall jump.
    pub wall_jump_lockout: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            horizontal_speed: 6.0,
            jump_speed: 14.0,
            gravity: 20.0,
            wall_slide_speed: 2.0,
            max_air_jumps: 2,
            wall_jump_lockout: 0.5,
        }
    }
}

impl LocomotionTuning {
    /// Lockout duration converted to whole fixed steps.
    pub fn lockout_steps(&self, dt: f32) -> u32 {
        (self.wall_jump_lockout / dt).round() as u32
    }

    /// Check every construction invariant. Returns all violations, empty if
    /// the configuration is usable. Comparisons are written so NaN fails.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.horizontal_speed > 0.0) {
            errors.push(ConfigError {
                field: "horizontal_speed",
                message: "must be a positive number",
            });
        }
        if !(self.jump_speed > 0.0) {
            errors.push(ConfigError {
                field: "jump_speed",
                message: "must be a positive number",
            });
        }
        if !(self.gravity > 0.0) {
            errors.push(ConfigError {
                field: "gravity",
                message: "must be a positive number",
            });
        }
        if !(self.wall_slide_speed > 0.0) {
            errors.push(ConfigError {
                field: "wall_slide_speed",
                message: "must be a positive number",
            });
        }
        if self.max_air_jumps == 0 {
            errors.push(ConfigError {
                field: "max_air_jumps",
                message: "jump budget cannot be zero",
            });
        }
        if !(self.wall_jump_lockout >= 0.0) {
            errors.push(ConfigError {
                field: "wall_jump_lockout",
                message: "must be zero or positive",
            });
        }

        errors
    }
}

/// Which geometry categories each directional probe treats as solid,
/// supplied at construction and immutable afterwards. One-way platforms work
/// by appearing only in the downward mask.
#[derive(Resource, Debug, Clone)]
pub struct ProbeFilters {
    pub left: LayerMask,
    pub right: LayerMask,
    pub top: LayerMask,
    pub bottom: LayerMask,
}

impl Default for ProbeFilters {
    fn default() -> Self {
        Self {
            left: [GameLayer::Wall, GameLayer::Ground].into(),
            right: [GameLayer::Wall, GameLayer::Ground].into(),
            top: [GameLayer::Ground, GameLayer::Wall].into(),
            bottom: [GameLayer::Ground, GameLayer::Wall, GameLayer::Platform].into(),
        }
    }
}

impl ProbeFilters {
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, mask) in [
            ("probe.left", self.left),
            ("probe.right", self.right),
            ("probe.top", self.top),
            ("probe.bottom", self.bottom),
        ] {
            if mask == LayerMask::NONE {
                errors.push(ConfigError {
                    field,
                    message: "no collision layers selected",
                });
            }
        }

        errors
    }
}

/// A configuration invariant violation, collected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid tuning: {} {}", self.field, self.message)
    }
}

/// Error type for tuning file loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Load tuning overrides from a RON file.
pub fn load_tuning(path: &Path) -> Result<LocomotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron::Options::default()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Latest sampled input, written at render rate and consumed by the fixed
/// step. `axis_enabled` is the wall-jump lockout gate: while false the axis
/// reads as zero regardless of raw input.
#[derive(Resource, Debug)]
pub struct InputSnapshot {
    pub axis: f32,
    pub jump: bool,
    pub axis_enabled: bool,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            axis: 0.0,
            jump: false,
            axis_enabled: true,
        }
    }
}

/// Apply tuning overrides from disk, then reject any invalid configuration
/// before the first simulation step. An unusable configuration is fatal; the
/// simulation cannot run with it.
pub(crate) fn setup_tuning(mut tuning: ResMut<LocomotionTuning>, filters: Res<ProbeFilters>) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => *tuning = loaded,
        Err(err) => warn!("{}; using built-in defaults", err),
    }

    let mut errors = tuning.validate();
    errors.extend(filters.validate());
    if !errors.is_empty() {
        for err in &errors {
            error!("{}", err);
        }
        panic!("locomotion configuration rejected ({} error(s))", errors.len());
    }

    info!(
        "Locomotion tuning: speed={}, jump={}, gravity={}, slide={}, air_jumps={}, lockout={}s",
        tuning.horizontal_speed,
        tuning.jump_speed,
        tuning.gravity,
        tuning.wall_slide_speed,
        tuning.max_air_jumps,
        tuning.wall_jump_lockout
    );
}
