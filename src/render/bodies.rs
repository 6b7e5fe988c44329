//! Sun rendering and spawning.

use bevy::prelude::*;

use crate::catalog::SUN_COLOR;
use crate::types::{SUN_RADIUS_AU, hex_to_srgb};

/// Component marking the Sun entity.
#[derive(Component)]
pub struct Sun;

/// Plugin providing the Sun at the origin.
pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun);
    }
}

/// Spawn the Sun as a small unlit sphere at the focus of every orbit.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let [r, g, b] = hex_to_srgb(SUN_COLOR);
    let color = Color::srgb(r, g, b);

    let mesh = meshes.add(Sphere::new(SUN_RADIUS_AU as f32).mesh().uv(32, 32));
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 2.0,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Sun,
        Name::new("Sun"),
    ));

    info!("Spawned Sun (radius {} AU)", SUN_RADIUS_AU);
}
