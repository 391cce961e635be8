//! Overlay-Painting der laufenden Box-Selektion.

use super::input::ViewportContext;
use glam::Vec2;

/// Halbtransparente Füllung des Auswahlrechtecks (Weiß).
const BOX_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(51, 51, 51, 51);
/// Strichlänge und Lücke der gestrichelten Kontur in Pixeln.
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

/// Zeichnet das Box-Selektion-Overlay: gefülltes Rechteck mit gestrichelter
/// weißer Kontur zwischen Start- und aktueller Ecke. Verschwindet mit dem
/// Übergang zurück zu Idle von selbst (immediate mode).
pub(super) fn draw_box_select_overlay(selection: Option<(Vec2, Vec2)>, ctx: &ViewportContext) {
    let Some((start_world, current_world)) = selection else {
        return;
    };
    let Some(bounds) = ctx.scene_bounds() else {
        return;
    };

    let viewport = Vec2::new(ctx.viewport_size[0], ctx.viewport_size[1]);
    let to_screen = |world: Vec2| {
        let s = ctx.camera.world_to_screen(world, viewport, &bounds);
        ctx.response.rect.min + egui::Vec2::new(s.x, s.y)
    };

    let a = to_screen(start_world);
    let b = to_screen(current_world);
    let rect = egui::Rect::from_two_pos(a, b).intersect(ctx.response.rect);

    let painter = ctx.ui.painter();
    painter.rect_filled(rect, 0.0, BOX_FILL);

    let stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(
        &corners,
        stroke,
        DASH_LENGTH,
        GAP_LENGTH,
    ));
}
