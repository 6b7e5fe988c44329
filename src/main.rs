//! Orrery - Orbit Viewer
//!
//! A desktop application drawing the orbits of the planets and a few minor
//! bodies around the Sun, with a slowly circling camera and per-orbit toggles.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::render::RenderPlugin;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;
use orrery::visibility::VisibilityPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(VisibilityPlugin)
        .add_plugins((TimePlugin, CameraPlugin, RenderPlugin, UiPlugin))
        .run();
}
