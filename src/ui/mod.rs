//! UI module providing the egui-based orbit toggles.

pub mod icons;
pub mod orbit_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use orbit_panel::{PanelAction, apply_panel_actions};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                orbit_panel::orbit_panel_system
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
