//! Floating panel with one checkbox per orbit.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::camera::PANEL_MARGIN;
use crate::catalog::{BodyKind, OrbitKey};
use crate::visibility::{OrbitToggle, OrbitToggles};

/// Colors for the panel chrome.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 230);
    pub const HEADING: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Something the user did in the panel this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelAction {
    /// A single checkbox changed.
    Toggle(OrbitKey, bool),
    /// A "show all"/"hide all" button, optionally limited to one group.
    SetAll(Option<BodyKind>, bool),
}

/// Apply panel actions to the checkbox state. Returns how many actions took effect.
pub fn apply_panel_actions(toggles: &mut OrbitToggles, actions: &[PanelAction]) -> usize {
    let mut applied = 0;

    for action in actions {
        match *action {
            PanelAction::Toggle(key, checked) => match toggles.set(key, checked) {
                Ok(_) => applied += 1,
                Err(err) => warn!("Ignoring checkbox change: {}", err),
            },
            PanelAction::SetAll(kind, checked) => {
                toggles.set_all(kind, checked);
                applied += 1;
            }
        }
    }

    applied
}

fn checkbox_label(toggle: &OrbitToggle) -> egui::RichText {
    let [_, r, g, b] = toggle.color.to_be_bytes();
    egui::RichText::new(toggle.label).color(egui::Color32::from_rgb(r, g, b))
}

fn group_icon(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Planet => icons::PLANET,
        BodyKind::MinorBody => icons::ASTEROID,
    }
}

/// System that renders the orbit checkbox panel.
pub fn orbit_panel_system(mut contexts: EguiContexts, mut toggles: ResMut<OrbitToggles>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut actions = Vec::new();

    egui::Window::new(format!("{} Orbits", icons::ORBIT))
        .anchor(egui::Align2::RIGHT_TOP, [-(PANEL_MARGIN + 8.0), 8.0])
        .resizable(false)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(format!("{} Show all", icons::SHOW)).clicked() {
                    actions.push(PanelAction::SetAll(None, true));
                }
                if ui.button(format!("{} Hide all", icons::HIDE)).clicked() {
                    actions.push(PanelAction::SetAll(None, false));
                }
            });

            for kind in [BodyKind::Planet, BodyKind::MinorBody] {
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {}", group_icon(kind), kind.heading()))
                            .color(colors::HEADING)
                            .strong(),
                    );
                    if ui.small_button(icons::SHOW).on_hover_text("Show group").clicked() {
                        actions.push(PanelAction::SetAll(Some(kind), true));
                    }
                    if ui.small_button(icons::HIDE).on_hover_text("Hide group").clicked() {
                        actions.push(PanelAction::SetAll(Some(kind), false));
                    }
                });

                for toggle in toggles.iter().filter(|t| t.kind == kind) {
                    let mut checked = toggle.checked;
                    if ui.checkbox(&mut checked, checkbox_label(toggle)).changed() {
                        actions.push(PanelAction::Toggle(toggle.key, checked));
                    }
                }
            }
        });

    if !actions.is_empty() {
        apply_panel_actions(&mut toggles, &actions);
    }
}
