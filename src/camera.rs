//! Camera system for the orbit viewer.
//!
//! The camera flies a fixed looping path around the Sun: it circles the
//! ecliptic pole while its distance and height breathe slowly in and out. The
//! path is a pure function of a phase value so it can be evaluated for any
//! synthetic time.

use bevy::{camera::Viewport, prelude::*, window::PrimaryWindow};

use crate::time::{AnimationClock, advance_clock};

/// Vertical field of view in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 75.0;

/// Near clipping plane in scene units (AU).
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane in scene units (AU).
pub const FAR_PLANE: f32 = 1000.0;

/// Logical pixels reserved on the right edge of the window.
pub const PANEL_MARGIN: f32 = 20.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Projection settings for the main camera.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Logical pixels cut from the window width before computing the aspect ratio.
    pub panel_margin: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            panel_margin: PANEL_MARGIN,
        }
    }
}

/// Parameters of the looping camera path.
///
/// At phase `t` the camera sits at
/// `(R·sin t, R·cos t, base_height + height_swing·sin(drift·t))` with
/// `R = base_radius + radius_swing·sin(drift·t)`.
#[derive(Resource, Clone, Debug)]
pub struct CameraPath {
    /// Phase advance per millisecond of elapsed time.
    pub speed: f64,
    pub base_radius: f64,
    pub radius_swing: f64,
    pub base_height: f64,
    pub height_swing: f64,
    /// Ratio between the breathing frequency and the circling frequency.
    pub drift: f64,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            speed: 0.0003,
            base_radius: 50.0,
            radius_swing: 48.0,
            base_height: 20.0,
            height_swing: 19.5,
            drift: 0.225,
        }
    }
}

impl CameraPath {
    /// Path phase after `elapsed_secs` seconds.
    pub fn phase_at(&self, elapsed_secs: f64) -> f64 {
        elapsed_secs * 1000.0 * self.speed
    }

    /// Camera position at the given phase.
    pub fn position_at(&self, phase: f64) -> Vec3 {
        let breathe = (phase * self.drift).sin();
        let radius = self.base_radius + self.radius_swing * breathe;

        Vec3::new(
            (radius * phase.sin()) as f32,
            (radius * phase.cos()) as f32,
            (self.base_height + self.height_swing * breathe) as f32,
        )
    }

    /// Camera transform at the given phase, aimed at the Sun with the ecliptic
    /// pole as up so the view never rolls.
    pub fn transform_at(&self, phase: f64) -> Transform {
        Transform::from_translation(self.position_at(phase)).looking_at(Vec3::ZERO, Vec3::Z)
    }
}

/// Current size of the 3D view in logical pixels.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    /// View size for a window, after removing the panel margin.
    pub fn for_window(window_width: f32, window_height: f32, panel_margin: f32) -> Self {
        Self {
            width: (window_width - panel_margin).max(1.0),
            height: window_height.max(1.0),
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Plugin providing camera functionality.
///
/// Expects the [`AnimationClock`] resource from `TimePlugin`.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraPath>()
            .init_resource::<ViewportSize>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (follow_camera_path.after(advance_clock), fit_viewport),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>, path: Res<CameraPath>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        path.transform_at(0.0),
        MainCamera,
    ));
}

/// Move the camera to its place on the path for the current animation time.
pub fn follow_camera_path(
    clock: Res<AnimationClock>,
    path: Res<CameraPath>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = path.transform_at(path.phase_at(clock.elapsed));
}

/// Keep the camera viewport and aspect ratio in step with the window size.
///
/// Only projection parameters change; orbit geometry is never touched.
pub fn fit_viewport(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    settings: Res<CameraSettings>,
    mut viewport: ResMut<ViewportSize>,
    mut camera_query: Query<(&mut Camera, &mut Projection), With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = ViewportSize::for_window(window.width(), window.height(), settings.panel_margin);
    if *viewport == size {
        return;
    }
    *viewport = size;
    debug!("Viewport resized to {}x{}", size.width, size.height);

    let Ok((mut camera, mut projection)) = camera_query.single_mut() else {
        return;
    };

    let scale = window.scale_factor();
    let physical_size = UVec2::new(
        ((size.width * scale) as u32).max(1),
        ((size.height * scale) as u32).max(1),
    );
    camera.viewport = Some(Viewport {
        physical_position: UVec2::ZERO,
        physical_size,
        ..default()
    });

    if let Projection::Perspective(ref mut perspective) = *projection {
        perspective.aspect_ratio = size.aspect_ratio();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_starts_above_positive_y() {
        let path = CameraPath::default();
        let pos = path.position_at(0.0);
        assert_relative_eq!(pos.x, 0.0);
        assert_relative_eq!(pos.y, 50.0);
        assert_relative_eq!(pos.z, 20.0);
    }

    #[test]
    fn test_phase_from_elapsed_time() {
        let path = CameraPath::default();
        assert_relative_eq!(path.phase_at(10.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_camera_looks_at_sun() {
        let path = CameraPath::default();
        for phase in [0.0, 0.7, 2.0, 5.5, 40.0] {
            let transform = path.transform_at(phase);
            let to_sun = (-transform.translation).normalize();
            assert!(
                transform.forward().dot(to_sun) > 0.9999,
                "camera at phase {} does not face the Sun",
                phase
            );
        }
    }

    #[test]
    fn test_camera_right_stays_in_ecliptic() {
        let path = CameraPath::default();
        for phase in [0.0, 1.3, 3.9, 17.0] {
            let transform = path.transform_at(phase);
            assert!(transform.right().z.abs() < 1e-5, "camera rolls at phase {}", phase);
            assert!(transform.up().z > 0.0);
        }
    }

    #[test]
    fn test_path_stays_outside_sun() {
        let path = CameraPath::default();
        let min_radius = path.base_radius - path.radius_swing;
        for step in 0..1000 {
            let pos = path.position_at(step as f64 * 0.1);
            let horizontal = pos.truncate().length() as f64;
            assert!(horizontal >= min_radius - 1e-3);
        }
    }

    #[test]
    fn test_viewport_removes_margin() {
        let size = ViewportSize::for_window(1300.0, 800.0, PANEL_MARGIN);
        assert_eq!(size.width, 1280.0);
        assert_eq!(size.height, 800.0);
        assert_relative_eq!(size.aspect_ratio(), 1.6);
    }

    #[test]
    fn test_viewport_never_collapses() {
        let size = ViewportSize::for_window(10.0, 0.0, PANEL_MARGIN);
        assert_eq!(size, ViewportSize { width: 1.0, height: 1.0 });
    }
}
