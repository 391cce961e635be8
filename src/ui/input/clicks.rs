//! Klick-Events: Einzel-Toggle auf die Region unter dem Zeiger.

use super::{screen_pos_to_world, InputState, PointerGesture, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Einzel-Klicks im Viewport.
    pub(crate) fn handle_clicks(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };
        let Some(world_pos) = screen_pos_to_world(pointer_pos, ctx) else {
            return;
        };

        self.clicked(world_pos, modifiers, ctx.read_only, events);
    }

    // ── Purer Zustandsübergang ─────────────────────────────────────

    /// Einfacher Klick ohne Modifier und außerhalb einer Geste fordert den
    /// Einzel-Toggle an. Ctrl-Klicks gehören zur (ggf. verworfenen)
    /// Box-Geste, Shift-Klicks zum Pan; beide lösen keinen Toggle aus.
    pub(crate) fn clicked(
        &mut self,
        world_pos: Vec2,
        modifiers: egui::Modifiers,
        read_only: bool,
        events: &mut Vec<AppIntent>,
    ) {
        if read_only || modifiers.command || modifiers.shift {
            return;
        }
        if self.gesture != PointerGesture::Idle {
            return;
        }

        events.push(AppIntent::RegionToggleRequested { world_pos });
    }
}
