//! Per-orbit visibility toggles.
//!
//! Each orbit has a checkbox identified by its [`OrbitKey`]. The checkbox
//! state lives in [`OrbitToggles`]; [`OrbitRegistry`] maps keys to the spawned
//! orbit entities, and [`apply_orbit_visibility`] copies the state onto each
//! entity's `Visibility` once per frame.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog::{BodyKind, CatalogEntry, OrbitKey, SOLAR_SYSTEM};

/// Plugin providing checkbox state and its sync onto orbit entities.
pub struct VisibilityPlugin;

impl Plugin for VisibilityPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(OrbitToggles::from_catalog(SOLAR_SYSTEM))
            .init_resource::<OrbitRegistry>()
            .add_systems(Update, apply_orbit_visibility);
    }
}

/// Errors raised when toggling an orbit.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ToggleError {
    #[error("no checkbox for orbit {0}")]
    UnknownOrbit(OrbitKey),
}

/// One checkbox.
#[derive(Clone, Debug)]
pub struct OrbitToggle {
    pub key: OrbitKey,
    pub label: &'static str,
    pub kind: BodyKind,
    /// Packed `0xRRGGBB` color of the orbit, for the checkbox label
    pub color: u32,
    pub checked: bool,
}

/// Checkbox state for every orbit, in display order.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbitToggles {
    entries: Vec<OrbitToggle>,
}

impl OrbitToggles {
    /// One checked box per catalog entry.
    pub fn from_catalog(entries: &[CatalogEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|entry| OrbitToggle {
                    key: entry.key,
                    label: entry.label,
                    kind: entry.kind,
                    color: entry.style.color,
                    checked: true,
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitToggle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current state of one checkbox.
    pub fn is_checked(&self, key: OrbitKey) -> Result<bool, ToggleError> {
        self.entries
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.checked)
            .ok_or(ToggleError::UnknownOrbit(key))
    }

    /// Set one checkbox. Returns whether the state changed.
    pub fn set(&mut self, key: OrbitKey, checked: bool) -> Result<bool, ToggleError> {
        let toggle = self
            .entries
            .iter_mut()
            .find(|t| t.key == key)
            .ok_or(ToggleError::UnknownOrbit(key))?;

        let changed = toggle.checked != checked;
        toggle.checked = checked;
        Ok(changed)
    }

    /// Set every checkbox, optionally restricted to one group.
    pub fn set_all(&mut self, kind: Option<BodyKind>, checked: bool) {
        for toggle in &mut self.entries {
            if kind.is_none_or(|k| k == toggle.kind) {
                toggle.checked = checked;
            }
        }
    }
}

/// Marker component carried by every orbit line entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitPath {
    pub key: OrbitKey,
}

/// Explicit key to entity mapping for spawned orbits.
#[derive(Resource, Default, Debug)]
pub struct OrbitRegistry {
    entities: HashMap<OrbitKey, Entity>,
}

impl OrbitRegistry {
    /// Register an orbit entity, returning the entity it replaced.
    pub fn register(&mut self, key: OrbitKey, entity: Entity) -> Option<Entity> {
        self.entities.insert(key, entity)
    }

    pub fn get(&self, key: OrbitKey) -> Option<Entity> {
        self.entities.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Visibility an orbit entity should have for a checkbox state.
pub fn visibility_for(checked: bool) -> Visibility {
    if checked {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Copy checkbox state onto the registered orbit entities.
///
/// Only writes when the value differs so change detection stays quiet.
pub fn apply_orbit_visibility(
    toggles: Res<OrbitToggles>,
    registry: Res<OrbitRegistry>,
    mut orbits: Query<&mut Visibility, With<OrbitPath>>,
) {
    for toggle in toggles.iter() {
        let Some(entity) = registry.get(toggle.key) else {
            continue;
        };
        let Ok(mut visibility) = orbits.get_mut(entity) else {
            continue;
        };

        let desired = visibility_for(toggle.checked);
        if *visibility != desired {
            *visibility = desired;
            debug!(
                "Orbit {} {}",
                toggle.key,
                if toggle.checked { "shown" } else { "hidden" }
            );
        }
    }
}
