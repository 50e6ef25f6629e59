//! Viewport configuration and demo variant selection.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    INTERACTIVE_FOV, RADIUS_DISTANCE_SCALE, STATIC_FOV, STATIC_POINT_RADIUS, VERTICAL_FOV,
};
use crate::input::CameraAction;

/// Environment variable that overrides the compiled-in demo variant.
pub const DEMO_ENV_VAR: &str = "INSANITY_DEMO";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown demo variant `{0}` (expected `static` or `interactive`)")]
    UnknownVariant(String),
}

/// Which of the two demos to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DemoVariant {
    /// Fixed camera, FOV 150, constant circle size.
    Static,
    /// Keyboard-driven camera, FOV 180, distance-scaled circles, FPS title.
    #[default]
    Interactive,
}

impl DemoVariant {
    #[inline]
    pub fn accepts_camera_input(self) -> bool {
        matches!(self, DemoVariant::Interactive)
    }

    /// Drop actions this variant does not react to. Quit always passes; camera
    /// motion only reaches the interactive demo.
    #[inline]
    pub fn filter(self, action: CameraAction) -> Option<CameraAction> {
        (!action.is_camera_motion() || self.accepts_camera_input()).then_some(action)
    }

    #[inline]
    pub fn shows_fps(self) -> bool {
        matches!(self, DemoVariant::Interactive)
    }

    /// Resolve the variant from an optional override string, falling back to
    /// `default` when no override is present.
    pub fn resolve(override_value: Option<&str>, default: DemoVariant) -> Result<Self, ConfigError> {
        match override_value.map(str::trim) {
            None | Some("") => Ok(default),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for DemoVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(DemoVariant::Static),
            "interactive" => Ok(DemoVariant::Interactive),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for DemoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoVariant::Static => f.write_str("static"),
            DemoVariant::Interactive => f.write_str("interactive"),
        }
    }
}

/// How large a visible point is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusModel {
    Fixed(f64),
    /// `radius = k / distance`
    InverseDistance(f64),
}

impl RadiusModel {
    /// Radius for a point `distance` world units away. Callers must reject
    /// zero distances before asking.
    #[inline]
    pub fn radius_at(self, distance: f64) -> f64 {
        match self {
            RadiusModel::Fixed(r) => r,
            RadiusModel::InverseDistance(k) => k / distance,
        }
    }
}

/// Angular window of the viewport and the derived screen scale factors.
///
/// Both FOVs are full widths in degrees; a point is visible when it lies within
/// half of each on either side of the camera orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    pub horizontal_fov: f64,
    pub vertical_fov: f64,
    pub radius: RadiusModel,
}

impl ViewportConfig {
    pub fn for_variant(variant: DemoVariant) -> Self {
        match variant {
            DemoVariant::Static => Self {
                horizontal_fov: STATIC_FOV,
                vertical_fov: VERTICAL_FOV,
                radius: RadiusModel::Fixed(STATIC_POINT_RADIUS),
            },
            DemoVariant::Interactive => Self {
                horizontal_fov: INTERACTIVE_FOV,
                vertical_fov: VERTICAL_FOV,
                radius: RadiusModel::InverseDistance(RADIUS_DISTANCE_SCALE),
            },
        }
    }

    /// Screen units per degree of horizontal angle.
    #[inline]
    pub fn x_mult(&self) -> f64 {
        2.0 / self.horizontal_fov
    }

    /// Screen units per degree of vertical angle.
    #[inline]
    pub fn y_mult(&self) -> f64 {
        2.0 / self.vertical_fov
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::for_variant(DemoVariant::default())
    }
}
