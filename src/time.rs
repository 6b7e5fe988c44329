//! Animation clock driving the camera path.
//!
//! The clock accumulates wall-clock time from Bevy's `Time` while running and
//! can be paused with the space bar. Systems that animate read the clock
//! rather than `Time`, so tests can set it directly.

use bevy::prelude::*;

/// Plugin providing clock advancement and its keyboard toggle.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .add_systems(Update, (toggle_pause, advance_clock).chain());
    }
}

/// Elapsed animation time.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct AnimationClock {
    /// Seconds of animation elapsed since startup.
    pub elapsed: f64,
    pub paused: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            paused: false,
        }
    }
}

impl AnimationClock {
    /// Advance by `delta_secs` unless paused.
    pub fn advance(&mut self, delta_secs: f64) {
        if !self.paused {
            self.elapsed += delta_secs;
        }
    }
}

/// Advance the animation clock by the frame delta.
pub fn advance_clock(mut clock: ResMut<AnimationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}

/// Space toggles the camera animation.
fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<AnimationClock>) {
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Camera {}", if clock.paused { "paused" } else { "running" });
    }
}
