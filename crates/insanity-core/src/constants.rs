use glam::DVec3;

// Shared projection/camera tuning constants used by the native frontend.

// Field of view (degrees)
pub const STATIC_FOV: f64 = 150.0; // horizontal window of the fixed-camera demo
pub const INTERACTIVE_FOV: f64 = 180.0; // horizontal window of the camera demo
pub const VERTICAL_FOV: f64 = 90.0; // shared by both demos

// Circle sizing (normalized device units)
pub const STATIC_POINT_RADIUS: f64 = 0.01;
pub const RADIUS_DISTANCE_SCALE: f64 = 0.05; // radius = k / distance, 0.01 at distance 5

// Points closer than this (Chebyshev norm) to the camera are not projected
pub const DEGENERATE_EPSILON: f64 = 1e-9;

// Interaction
pub const MOVE_STEP: f64 = 0.1; // world units per keypress
pub const PITCH_STEP: f64 = 10.0; // degrees per keypress
pub const YAW_STEP: f64 = 5.0; // degrees per keypress

// Timing
pub const FRAME_INTERVAL_MS: u64 = 16; // redraw timer period
pub const FPS_REPORT_INTERVAL_SEC: f64 = 1.0;

pub const WINDOW_TITLE: &str = "Insanity";

// Two rectangles at x = 6 and x = 4 forming a duct in front of the camera
pub const SCENE_POINTS: [[f64; 3]; 8] = [
    [6.0, 1.0, 1.0],
    [4.0, 1.0, 1.0],
    [6.0, 1.0, -1.0],
    [4.0, 1.0, -1.0],
    [6.0, -1.0, 1.0],
    [4.0, -1.0, 1.0],
    [6.0, -1.0, -1.0],
    [4.0, -1.0, -1.0],
];

#[inline]
pub fn scene_points() -> [DVec3; 8] {
    SCENE_POINTS.map(DVec3::from_array)
}
