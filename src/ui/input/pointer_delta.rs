//! Pointer-Bewegung während aktiver Gesten: Kamera-Pan und Box-Update.

use super::{screen_pos_to_world, InputState, PointerGesture, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Maus-Bewegung für die aktive Geste.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if self.gesture == PointerGesture::Idle {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let world_pos = screen_pos_to_world(pointer_pos, ctx);
        self.pointer_moved(Vec2::new(pointer_pos.x, pointer_pos.y), world_pos, events);
    }

    // ── Purer Zustandsübergang ─────────────────────────────────────

    /// Bewegungs-Update: Pan emittiert das inkrementelle Bildschirm-Delta,
    /// Box-Selektion zieht die aktuelle Welt-Ecke nach.
    pub(crate) fn pointer_moved(
        &mut self,
        screen_pos: Vec2,
        world_pos: Option<Vec2>,
        events: &mut Vec<AppIntent>,
    ) {
        match &mut self.gesture {
            PointerGesture::Panning { last_screen } => {
                let delta = screen_pos - *last_screen;
                if delta != Vec2::ZERO {
                    events.push(AppIntent::CameraPan {
                        screen_delta: delta,
                    });
                    *last_screen = screen_pos;
                }
            }
            PointerGesture::BoxSelecting { current_world, .. } => {
                if let Some(world_pos) = world_pos {
                    *current_world = world_pos;
                }
            }
            PointerGesture::Idle => {}
        }
    }
}
