//! Scroll-Zoom auf Mausposition.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    /// Läuft unabhängig vom Gesten-Zustand (auch während Pan/Box-Selektion).
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let focus_world = ctx
            .response
            .hover_pos()
            .and_then(|pos| screen_pos_to_world(pos, ctx));
        self.wheel(scroll, focus_world, ctx.options, events);
    }

    // ── Pure Abbildung ─────────────────────────────────────────────

    /// Rad nach oben (wegschieben) zoomt heraus, Rad nach unten heran;
    /// ein Faktor pro Raste.
    pub(crate) fn wheel(
        &self,
        scroll_y: f32,
        focus_world: Option<Vec2>,
        options: &crate::shared::ViewerOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let factor = if scroll_y > 0.0 {
            options.wheel_zoom_out_step
        } else {
            options.wheel_zoom_in_step
        };
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}
