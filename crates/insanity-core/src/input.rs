use glam::DVec3;

use crate::constants::{MOVE_STEP, PITCH_STEP, YAW_STEP};

/// Key name the frontend passes for the escape key.
pub const KEY_ESCAPE: &str = "Escape";
/// Key name the frontend passes for the space bar.
pub const KEY_SPACE: &str = " ";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraAction {
    Quit,
    Move(DVec3),
    Rotate { pitch: f64, yaw: f64 },
}

impl CameraAction {
    /// Whether the action changes the camera (as opposed to controlling the app).
    #[inline]
    pub fn is_camera_motion(&self) -> bool {
        !matches!(self, CameraAction::Quit)
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<CameraAction> {
    let action = match key {
        KEY_ESCAPE => CameraAction::Quit,
        KEY_SPACE => CameraAction::Move(DVec3::new(0.0, MOVE_STEP, 0.0)),
        "b" | "B" => CameraAction::Move(DVec3::new(0.0, -MOVE_STEP, 0.0)),
        "w" | "W" => CameraAction::Move(DVec3::new(MOVE_STEP, 0.0, 0.0)),
        "s" | "S" => CameraAction::Move(DVec3::new(-MOVE_STEP, 0.0, 0.0)),
        "d" | "D" => CameraAction::Move(DVec3::new(0.0, 0.0, MOVE_STEP)),
        "a" | "A" => CameraAction::Move(DVec3::new(0.0, 0.0, -MOVE_STEP)),
        "j" | "J" => CameraAction::Rotate {
            pitch: -PITCH_STEP,
            yaw: 0.0,
        },
        "l" | "L" => CameraAction::Rotate {
            pitch: PITCH_STEP,
            yaw: 0.0,
        },
        "i" | "I" => CameraAction::Rotate {
            pitch: 0.0,
            yaw: YAW_STEP,
        },
        "k" | "K" => CameraAction::Rotate {
            pitch: 0.0,
            yaw: -YAW_STEP,
        },
        _ => return None,
    };
    Some(action)
}
