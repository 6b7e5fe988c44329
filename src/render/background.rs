//! Background for the orbit viewer.

use bevy::prelude::*;

/// Plugin providing the empty-space backdrop.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK));
    }
}
