//! Camera path tests driven by synthetic time values.

use approx::assert_relative_eq;
use orrery::camera::{CameraPath, PANEL_MARGIN, ViewportSize};
use orrery::time::AnimationClock;

/// The path written out longhand for an elapsed time in milliseconds.
fn closed_form(elapsed_ms: f64) -> (f64, f64, f64) {
    let t = elapsed_ms * 0.0003;
    let radius = 50.0 + 48.0 * (t * 0.225).sin();
    (
        radius * t.sin(),
        radius * t.cos(),
        20.0 + 19.5 * (t * 0.225).sin(),
    )
}

#[test]
fn test_path_matches_closed_form() {
    let path = CameraPath::default();
    for elapsed_secs in [0.0, 0.016, 1.0, 7.5, 60.0, 3600.0] {
        let pos = path.position_at(path.phase_at(elapsed_secs));
        let (x, y, z) = closed_form(elapsed_secs * 1000.0);
        assert_relative_eq!(pos.x as f64, x, epsilon = 1e-3);
        assert_relative_eq!(pos.y as f64, y, epsilon = 1e-3);
        assert_relative_eq!(pos.z as f64, z, epsilon = 1e-3);
    }
}

#[test]
fn test_one_lap_returns_to_start_direction() {
    let path = CameraPath::default();
    let lap_secs = std::f64::consts::TAU / (1000.0 * path.speed);

    let start = path.position_at(path.phase_at(0.0)).truncate().normalize();
    let after = path.position_at(path.phase_at(lap_secs)).truncate().normalize();
    assert!(start.distance(after) < 1e-4);
}

#[test]
fn test_height_stays_within_swing() {
    let path = CameraPath::default();
    for step in 0..2000 {
        let z = path.position_at(step as f64 * 0.05).z as f64;
        assert!(z >= path.base_height - path.height_swing - 1e-3);
        assert!(z <= path.base_height + path.height_swing + 1e-3);
    }
}

#[test]
fn test_paused_clock_freezes_camera() {
    let path = CameraPath::default();
    let mut clock = AnimationClock::default();
    clock.advance(4.0);
    let before = path.position_at(path.phase_at(clock.elapsed));

    clock.paused = true;
    clock.advance(10.0);
    let after = path.position_at(path.phase_at(clock.elapsed));

    assert_eq!(before, after);
}

#[test]
fn test_resize_updates_aspect_ratio() {
    let size = ViewportSize::for_window(1940.0, 1080.0, PANEL_MARGIN);
    assert_relative_eq!(size.aspect_ratio(), 1920.0 / 1080.0);
}
