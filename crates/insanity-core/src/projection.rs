//! Pitch/yaw point projection and viewport mapping.
//!
//! The projection is not a true spherical one. "Pitch" is the horizontal angle
//! `atan2(z, x)` around the Y axis and "yaw" is an L1-normalized elevation
//! proxy `90 * y / (|x| + |y| + |z|)`. Pitch is compared against the horizontal
//! FOV and mapped to screen X, yaw against the vertical FOV and mapped to
//! screen Y.

use glam::DVec3;
use smallvec::SmallVec;

use crate::config::ViewportConfig;
use crate::constants::DEGENERATE_EPSILON;
use crate::state::CameraState;

const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;

/// A (pitch, yaw) pair in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    pub pitch: f64,
    pub yaw: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle {
        pitch: 0.0,
        yaw: 0.0,
    };

    #[inline]
    pub const fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProjectionError {
    /// The point sits on (or numerically at) the camera position, so neither
    /// its direction nor its distance is defined.
    #[error("point {point:?} coincides with the camera")]
    Degenerate { point: [f64; 3] },
}

#[inline]
fn wrap_full_turn(angle: f64) -> f64 {
    let r = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if r >= FULL_TURN {
        0.0
    } else {
        r
    }
}

/// Bring a rotation back into its canonical ranges: pitch in [0, 360) and yaw
/// in [-180, 180).
///
/// Angles already in range are returned unchanged, so the function is
/// idempotent. Out-of-range angles are reduced with a Euclidean remainder and
/// may be any number of turns away.
pub fn validate_rotation(rotation: Angle) -> Angle {
    let pitch = if (0.0..FULL_TURN).contains(&rotation.pitch) {
        rotation.pitch
    } else {
        wrap_full_turn(rotation.pitch)
    };
    let yaw = if (-HALF_TURN..HALF_TURN).contains(&rotation.yaw) {
        rotation.yaw
    } else {
        let shifted = wrap_full_turn(rotation.yaw + HALF_TURN) - HALF_TURN;
        if shifted >= HALF_TURN {
            shifted - FULL_TURN
        } else {
            shifted
        }
    };
    Angle { pitch, yaw }
}

/// Shortest signed distance in degrees from `from` to `to` on the circle.
///
/// Positive when `to` is reached by increasing `from`, negative when reached by
/// decreasing it. The magnitude never exceeds 180; two angles exactly half a
/// turn apart resolve to -180.
pub fn angle_diff(from: f64, to: f64) -> f64 {
    let forward = wrap_full_turn(to - from);
    let backward = wrap_full_turn(from - to);
    if forward < backward {
        forward
    } else {
        -backward
    }
}

/// Project `point` as seen from `camera_position` into a (pitch, yaw) pair.
///
/// The camera-relative vector is first divided by its Chebyshev norm, which
/// makes the result independent of distance.
pub fn project_point(point: DVec3, camera_position: DVec3) -> Result<Angle, ProjectionError> {
    let relative = point - camera_position;
    let norm = relative.abs().max_element();
    if norm.is_nan() || norm <= DEGENERATE_EPSILON {
        return Err(ProjectionError::Degenerate {
            point: point.to_array(),
        });
    }
    let n = relative / norm;
    let pitch = n.z.atan2(n.x).to_degrees();
    let yaw = 90.0 * (n.y / n.abs().element_sum());
    Ok(Angle { pitch, yaw })
}

/// A visible point in normalized device coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl ScreenPoint {
    #[inline]
    pub fn instance(&self) -> CircleInstance {
        CircleInstance {
            center: [self.x as f32, self.y as f32],
            radius: self.radius as f32,
            _pad: 0.0,
        }
    }
}

/// Per-circle GPU instance layout consumed by `POINTS_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
}

/// Maps projected angles onto the viewport described by a [`ViewportConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Projector {
    pub config: ViewportConfig,
}

impl Projector {
    pub fn new(config: ViewportConfig) -> Self {
        Self { config }
    }

    /// Closed-interval test against half of each FOV.
    pub fn is_visible(&self, projection: Angle, camera_rotation: Angle) -> bool {
        angle_diff(projection.pitch, camera_rotation.pitch).abs()
            <= self.config.horizontal_fov / 2.0
            && angle_diff(projection.yaw, camera_rotation.yaw).abs()
                <= self.config.vertical_fov / 2.0
    }

    /// Offset of `projection` from the camera orientation, scaled so the edges
    /// of the FOV land on -1 and 1. Larger pitch is further right, larger yaw
    /// is further up.
    #[inline]
    pub fn screen_position(&self, projection: Angle, camera_rotation: Angle) -> (f64, f64) {
        (
            self.config.x_mult() * angle_diff(camera_rotation.pitch, projection.pitch),
            self.config.y_mult() * angle_diff(camera_rotation.yaw, projection.yaw),
        )
    }

    /// Project a single world point; `Ok(None)` when it falls outside the view.
    pub fn project(
        &self,
        point: DVec3,
        camera: &CameraState,
    ) -> Result<Option<ScreenPoint>, ProjectionError> {
        let projection = project_point(point, camera.position)?;
        let rotation = validate_rotation(camera.rotation);
        if !self.is_visible(projection, rotation) {
            return Ok(None);
        }
        let (x, y) = self.screen_position(projection, rotation);
        let distance = point.distance(camera.position);
        Ok(Some(ScreenPoint {
            x,
            y,
            radius: self.config.radius.radius_at(distance),
        }))
    }

    /// Project every point of the scene, dropping hidden and degenerate ones.
    pub fn project_scene(
        &self,
        camera: &CameraState,
        points: &[DVec3],
    ) -> SmallVec<[ScreenPoint; 8]> {
        let mut out = SmallVec::new();
        for &point in points {
            match self.project(point, camera) {
                Ok(Some(sp)) => out.push(sp),
                Ok(None) => {}
                Err(err) => log::debug!("[projector] skipping point: {err}"),
            }
        }
        out
    }
}
