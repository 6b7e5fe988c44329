//! Rendering systems for the orbit viewer.
//!
//! Spawns the static scene once at startup: the Sun, one line entity per
//! catalog orbit and the background. Nothing here runs per frame.

mod background;
pub mod bodies;
pub mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::SunPlugin;
use self::orbits::OrbitPathPlugin;

pub use self::orbits::{OrbitRenderSettings, orbit_mesh, spawn_orbits};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SunPlugin, BackgroundPlugin, OrbitPathPlugin));
    }
}
