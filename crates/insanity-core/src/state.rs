//! Camera state shared with the native frontend.
//!
//! These types avoid referencing platform-specific APIs. The frontend owns a
//! single `CameraState` value and replaces it with the result of
//! [`CameraState::apply`] whenever an input action arrives.

use glam::DVec3;

use crate::input::CameraAction;
use crate::projection::{validate_rotation, Angle};

/// Camera position in world space plus its (pitch, yaw) orientation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    pub position: DVec3,
    pub rotation: Angle,
}

impl CameraState {
    pub fn new(position: DVec3, rotation: Angle) -> Self {
        Self {
            position,
            rotation: validate_rotation(rotation),
        }
    }

    /// Next camera state after `action`. Rotations are renormalized right away
    /// so the orientation never drifts more than one step out of range.
    #[must_use]
    pub fn apply(self, action: CameraAction) -> Self {
        match action {
            CameraAction::Move(delta) => Self {
                position: self.position + delta,
                ..self
            },
            CameraAction::Rotate { pitch, yaw } => Self {
                rotation: validate_rotation(Angle::new(
                    self.rotation.pitch + pitch,
                    self.rotation.yaw + yaw,
                )),
                ..self
            },
            CameraAction::Quit => self,
        }
    }

    /// Canonical form used right before a frame's visibility test.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            rotation: validate_rotation(self.rotation),
            ..self
        }
    }
}
