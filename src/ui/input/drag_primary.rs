//! Drag-Start/-Ende: Box-Selektion (Ctrl + Drag), Kamera-Pan (Shift/Mitteltaste).

use super::{screen_pos_to_world, InputState, PointerGesture, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Erkennt Drag-Beginn und bestimmt die Geste (Box-Selektion oder Pan).
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, modifiers: egui::Modifiers) {
        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung.
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());

        if ctx.response.drag_started_by(egui::PointerButton::Primary) {
            let Some(pointer_pos) = press_pos.or_else(|| ctx.response.interact_pointer_pos())
            else {
                return;
            };

            if modifiers.command {
                let world = screen_pos_to_world(pointer_pos, ctx);
                if let Some(world_pos) = world {
                    self.begin_box_select(world_pos, ctx.read_only);
                }
            } else if modifiers.shift {
                self.begin_pan(Vec2::new(pointer_pos.x, pointer_pos.y));
            }
            // Primär-Drag ohne Modifier ist keine Geste
        } else if ctx.response.drag_started_by(egui::PointerButton::Middle) {
            if let Some(pointer_pos) = press_pos.or_else(|| ctx.response.interact_pointer_pos()) {
                self.begin_pan(Vec2::new(pointer_pos.x, pointer_pos.y));
            }
        }
    }

    /// Beendet einen Drag und emittiert ggf. die finalisierte Box.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.drag_stopped_by(egui::PointerButton::Primary)
            || ctx.response.drag_stopped_by(egui::PointerButton::Middle)
        {
            self.end_gesture(ctx.options.box_select_min_drag_world, events);
        }
    }

    /// Verlässt der Zeiger die Oberfläche während einer Geste, verhält sich
    /// das wie Pointer-Up (kein hängender Gesten-Zustand).
    pub(crate) fn handle_pointer_left(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if self.gesture == PointerGesture::Idle {
            return;
        }

        let pointer_on_surface = ctx
            .ui
            .input(|i| i.pointer.latest_pos())
            .is_some_and(|pos| ctx.response.rect.contains(pos));

        if !pointer_on_surface {
            self.end_gesture(ctx.options.box_select_min_drag_world, events);
        }
    }

    // ── Pure Zustandsübergänge ─────────────────────────────────────

    /// Idle → BoxSelecting (nur wenn Klassifikation erlaubt ist).
    pub(crate) fn begin_box_select(&mut self, world_pos: Vec2, read_only: bool) {
        if read_only || self.gesture != PointerGesture::Idle {
            return;
        }
        self.gesture = PointerGesture::BoxSelecting {
            start_world: world_pos,
            current_world: world_pos,
        };
    }

    /// Idle → Panning.
    pub(crate) fn begin_pan(&mut self, screen_pos: Vec2) {
        if self.gesture != PointerGesture::Idle {
            return;
        }
        self.gesture = PointerGesture::Panning {
            last_screen: screen_pos,
        };
    }

    /// Beendet die aktive Geste (Pointer-Up oder Pointer-Leave).
    ///
    /// Eine Box-Selektion wird nur emittiert, wenn die Drag-Distanz in
    /// Welt-Einheiten über der Schwelle liegt; kürzere Drags werden als
    /// versehentlicher Klick verworfen.
    pub(crate) fn end_gesture(&mut self, min_drag_world: f32, events: &mut Vec<AppIntent>) {
        if let PointerGesture::BoxSelecting {
            start_world,
            current_world,
        } = self.gesture
        {
            if start_world.distance(current_world) > min_drag_world {
                events.push(AppIntent::RegionsBoxSelectRequested {
                    min: Vec2::new(
                        start_world.x.min(current_world.x),
                        start_world.y.min(current_world.y),
                    ),
                    max: Vec2::new(
                        start_world.x.max(current_world.x),
                        start_world.y.max(current_world.y),
                    ),
                });
            }
        }
        self.gesture = PointerGesture::Idle;
    }
}
