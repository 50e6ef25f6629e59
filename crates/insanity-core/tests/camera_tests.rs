// Host-side tests for key mapping and camera state transitions.

use glam::DVec3;
use insanity_core::*;

fn press(camera: CameraState, keys: &str) -> CameraState {
    keys.chars().fold(camera, |cam, c| {
        let key = c.to_string();
        match action_for_key(&key) {
            Some(action) => cam.apply(action),
            None => cam,
        }
    })
}

fn press_as(variant: DemoVariant, camera: CameraState, key: &str) -> (CameraState, bool) {
    match action_for_key(key).and_then(|action| variant.filter(action)) {
        Some(CameraAction::Quit) => (camera, true),
        Some(action) => (camera.apply(action), false),
        None => (camera, false),
    }
}

#[test]
fn action_for_key_movement_keys() {
    assert_eq!(
        action_for_key(KEY_SPACE),
        Some(CameraAction::Move(DVec3::new(0.0, MOVE_STEP, 0.0)))
    );
    assert_eq!(
        action_for_key("b"),
        Some(CameraAction::Move(DVec3::new(0.0, -MOVE_STEP, 0.0)))
    );
    assert_eq!(
        action_for_key("w"),
        Some(CameraAction::Move(DVec3::new(MOVE_STEP, 0.0, 0.0)))
    );
    assert_eq!(
        action_for_key("s"),
        Some(CameraAction::Move(DVec3::new(-MOVE_STEP, 0.0, 0.0)))
    );
    assert_eq!(
        action_for_key("d"),
        Some(CameraAction::Move(DVec3::new(0.0, 0.0, MOVE_STEP)))
    );
    assert_eq!(
        action_for_key("a"),
        Some(CameraAction::Move(DVec3::new(0.0, 0.0, -MOVE_STEP)))
    );
}

#[test]
fn action_for_key_rotation_keys() {
    assert_eq!(
        action_for_key("j"),
        Some(CameraAction::Rotate {
            pitch: -10.0,
            yaw: 0.0
        })
    );
    assert_eq!(
        action_for_key("l"),
        Some(CameraAction::Rotate {
            pitch: 10.0,
            yaw: 0.0
        })
    );
    assert_eq!(
        action_for_key("i"),
        Some(CameraAction::Rotate {
            pitch: 0.0,
            yaw: 5.0
        })
    );
    assert_eq!(
        action_for_key("k"),
        Some(CameraAction::Rotate {
            pitch: 0.0,
            yaw: -5.0
        })
    );
}

#[test]
fn action_for_key_is_case_insensitive() {
    for key in ["w", "a", "s", "d", "b", "i", "j", "k", "l"] {
        assert_eq!(
            action_for_key(key),
            action_for_key(&key.to_uppercase()),
            "key {key}"
        );
    }
}

#[test]
fn action_for_key_escape_quits() {
    let action = action_for_key(KEY_ESCAPE).unwrap();
    assert_eq!(action, CameraAction::Quit);
    assert!(!action.is_camera_motion());
}

#[test]
fn action_for_key_unknown_keys() {
    for key in ["", "x", "q", "1", "Enter", "ww", "escape"] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn camera_moves_by_step_per_press() {
    let cam = press(CameraState::default(), "www d b");
    assert!((cam.position.x - 0.3).abs() < 1e-12);
    assert!((cam.position.y - 0.1).abs() < 1e-12);
    assert!((cam.position.z - 0.1).abs() < 1e-12);
    assert_eq!(cam.rotation, Angle::ZERO);
}

#[test]
fn opposite_moves_cancel() {
    let cam = press(CameraState::default(), "wsad b");
    assert!(cam.position.length() < 1e-12);
}

#[test]
fn rotation_wraps_after_each_press() {
    let cam = press(CameraState::default(), "j");
    assert_eq!(cam.rotation.pitch, 350.0);

    let cam = press(CameraState::default(), &"l".repeat(37));
    assert!((cam.rotation.pitch - 10.0).abs() < 1e-9);
    assert!((0.0..360.0).contains(&cam.rotation.pitch));

    let cam = press(CameraState::default(), &"i".repeat(36));
    assert_eq!(cam.rotation.yaw, -180.0);

    let cam = press(CameraState::default(), &"k".repeat(37));
    assert!((cam.rotation.yaw - 175.0).abs() < 1e-9);
}

#[test]
fn quit_leaves_camera_unchanged() {
    let cam = CameraState::new(DVec3::new(1.0, 2.0, 3.0), Angle::new(45.0, -10.0));
    assert_eq!(cam.apply(CameraAction::Quit), cam);
}

#[test]
fn camera_new_and_normalized_use_canonical_ranges() {
    let cam = CameraState::new(DVec3::ZERO, Angle::new(-30.0, 200.0));
    assert_eq!(cam.rotation.pitch, 330.0);
    assert_eq!(cam.rotation.yaw, -160.0);

    let raw = CameraState {
        position: DVec3::ZERO,
        rotation: Angle::new(725.0, -185.0),
    };
    let norm = raw.normalized();
    assert_eq!(norm.rotation.pitch, 5.0);
    assert_eq!(norm.rotation.yaw, 175.0);
    assert_eq!(norm.normalized(), norm);
}

#[test]
fn moving_toward_points_grows_their_radius() {
    let projector = Projector::new(ViewportConfig::for_variant(DemoVariant::Interactive));
    let point = DVec3::new(4.0, 0.0, 0.0);
    let before = projector
        .project(point, &CameraState::default())
        .unwrap()
        .unwrap();
    let after = projector
        .project(point, &press(CameraState::default(), "www"))
        .unwrap()
        .unwrap();
    assert!(after.radius > before.radius);
    assert_eq!(after.x, 0.0);
}

#[test]
fn turning_shifts_points_across_the_screen() {
    let projector = Projector::new(ViewportConfig::for_variant(DemoVariant::Interactive));
    let point = DVec3::new(4.0, 0.0, 0.0);
    let turned_right = press(CameraState::default(), "l");
    let sp = projector.project(point, &turned_right).unwrap().unwrap();
    assert!((sp.x - (-10.0 * 2.0 / INTERACTIVE_FOV)).abs() < 1e-12);
}

#[test]
fn static_variant_ignores_camera_keys() {
    let start = CameraState::default();
    for key in ["w", "l", KEY_SPACE, "i"] {
        let (cam, quit) = press_as(DemoVariant::Static, start, key);
        assert_eq!(cam, start, "key {key:?} moved the static camera");
        assert!(!quit);
    }
}

#[test]
fn escape_quits_in_both_variants() {
    for variant in [DemoVariant::Static, DemoVariant::Interactive] {
        let (cam, quit) = press_as(variant, CameraState::default(), KEY_ESCAPE);
        assert!(quit, "escape ignored in {variant}");
        assert_eq!(cam, CameraState::default());
    }
}

#[test]
fn interactive_variant_moves_on_space() {
    let (cam, quit) = press_as(DemoVariant::Interactive, CameraState::default(), KEY_SPACE);
    assert!(!quit);
    assert_eq!(cam.position, DVec3::new(0.0, MOVE_STEP, 0.0));
}
