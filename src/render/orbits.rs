//! Orbit path rendering as retained line meshes.
//!
//! Every catalog orbit is sampled once at startup and uploaded as its own
//! mesh entity. Solid orbits use a line strip through the samples; dashed
//! orbits are cut into a line list following the dash/gap pattern measured
//! along the curve.

use bevy::{asset::RenderAssetUsages, mesh::PrimitiveTopology, prelude::*};

use crate::catalog::{self, CatalogEntry, SOLAR_SYSTEM};
use crate::orbit::{OrbitCurve, dash_segments};
use crate::types::hex_to_srgb;
use crate::visibility::{OrbitPath, OrbitRegistry, OrbitToggles, visibility_for};

/// Plugin providing orbit path spawning.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRenderSettings>()
            .add_systems(Startup, spawn_orbits);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitRenderSettings {
    /// Number of segments per orbit (higher = smoother).
    pub segments: u32,
    /// Length of each dash along the curve, in AU.
    pub dash_size: f64,
    /// Length of each gap between dashes, in AU.
    pub gap_size: f64,
}

impl Default for OrbitRenderSettings {
    fn default() -> Self {
        Self {
            segments: 128,
            dash_size: 0.2,
            gap_size: 0.1,
        }
    }
}

/// Build the line mesh for one sampled orbit.
pub fn orbit_mesh(curve: &OrbitCurve, settings: &OrbitRenderSettings) -> Mesh {
    let (topology, positions): (_, Vec<[f32; 3]>) = if curve.dashed {
        let positions = dash_segments(&curve.points, settings.dash_size, settings.gap_size)
            .into_iter()
            .flatten()
            .map(|p| p.as_vec3().to_array())
            .collect();
        (PrimitiveTopology::LineList, positions)
    } else {
        let positions = curve.points.iter().map(|p| p.as_vec3().to_array()).collect();
        (PrimitiveTopology::LineStrip, positions)
    };

    Mesh::new(topology, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

fn orbit_material(entry: &CatalogEntry) -> StandardMaterial {
    let [r, g, b] = hex_to_srgb(entry.style.color);
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        unlit: true,
        ..default()
    }
}

/// Sample every catalog orbit and spawn it as a hidden-or-shown line entity.
///
/// Each orbit starts with the visibility of its own checkbox.
pub fn spawn_orbits(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<OrbitRenderSettings>,
    toggles: Res<OrbitToggles>,
    mut registry: ResMut<OrbitRegistry>,
) {
    if let Err(err) = catalog::validate(SOLAR_SYSTEM) {
        error!("Refusing to build orbits: {}", err);
        return;
    }

    for entry in SOLAR_SYSTEM {
        let curve = OrbitCurve::generate(&entry.elements, settings.segments, entry.style.dashed);

        let checked = toggles.is_checked(entry.key).unwrap_or_else(|err| {
            warn!("{}; showing orbit by default", err);
            true
        });

        let entity = commands
            .spawn((
                Mesh3d(meshes.add(orbit_mesh(&curve, &settings))),
                MeshMaterial3d(materials.add(orbit_material(entry))),
                Transform::IDENTITY,
                visibility_for(checked),
                OrbitPath { key: entry.key },
                Name::new(entry.label),
            ))
            .id();

        if registry.register(entry.key, entity).is_some() {
            warn!("Orbit {} registered twice", entry.key);
        }
    }

    info!(
        "Spawned {} orbits ({} segments each)",
        registry.len(),
        settings.segments
    );
}
