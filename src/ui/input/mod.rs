//! Viewport-Input-Handling: Maus-Events, Box-Selektion, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Klick-Events (Einzel-Toggle)
//! - `drag_primary` — Drag-Start/-Ende/-Abbruch (Box-Selektion, Kamera-Pan)
//! - `pointer_delta` — Pan/Box-Updates während aktiver Drags
//! - `zoom` — Scroll-Zoom auf Mausposition
//!
//! Die Zustandsübergänge selbst sind pure Methoden über einfachen Werten;
//! egui-Extraktion passiert ausschließlich in `collect_viewport_events`.
//! Damit ist die Gesten-Maschine ohne Rendering-Oberfläche testbar.

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;


use super::drag::draw_box_select_overlay;
use super::keyboard;
use crate::app::AppIntent;
use crate::core::{Camera2D, PlanScene, WorldBounds};
use crate::shared::ViewerOptions;
use glam::Vec2;

/// Expliziter Gesten-Zustand des Viewports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum PointerGesture {
    #[default]
    Idle,
    /// Kamera-Pan; merkt sich die letzte Bildschirmposition für
    /// inkrementelle Deltas (nicht kumulativ vom Start).
    Panning { last_screen: Vec2 },
    /// Box-Selektion in Welt-Koordinaten.
    BoxSelecting {
        start_world: Vec2,
        current_world: Vec2,
    },
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub scene: Option<&'a PlanScene>,
    pub hovered_region_id: Option<u64>,
    pub read_only: bool,
    pub options: &'a ViewerOptions,
}

impl ViewportContext<'_> {
    /// Szenen-Ausdehnung, falls eine Szene mit Bounds geladen ist.
    pub(crate) fn scene_bounds(&self) -> Option<WorldBounds> {
        self.scene.and_then(|s| s.bounds)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Gesten, Hover).
#[derive(Default)]
pub struct InputState {
    pub(crate) gesture: PointerGesture,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            gesture: PointerGesture::Idle,
        }
    }

    /// Gibt die aktive Box-Selektion zurück (für das Overlay).
    pub(crate) fn box_selection(&self) -> Option<(Vec2, Vec2)> {
        match self.gesture {
            PointerGesture::BoxSelecting {
                start_world,
                current_world,
            } => Some((start_world, current_world)),
            _ => None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        scene: Option<&PlanScene>,
        hovered_region_id: Option<u64>,
        read_only: bool,
        options: &ViewerOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            scene,
            hovered_region_id,
            read_only,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx, modifiers);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_pointer_left(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_hover(&ctx, &mut events);

        // Scroll-Zoom ist unabhängig vom Gesten-Zustand immer erlaubt
        self.handle_scroll_zoom(&ctx, &mut events);

        // Box-Selektion-Overlay (ausgelagert in drag.rs)
        draw_box_select_overlay(self.box_selection(), &ctx);

        events
    }

    /// Meldet Hover-Wechsel für die Status-Anzeige.
    fn handle_hover(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if self.gesture != PointerGesture::Idle {
            return;
        }

        let hovered = ctx
            .response
            .hover_pos()
            .and_then(|pos| screen_pos_to_world(pos, ctx))
            .and_then(|world| ctx.scene.and_then(|s| s.region_at(world)));

        if hovered != ctx.hovered_region_id {
            events.push(AppIntent::HoverChanged { region_id: hovered });
        }
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
/// `None`, wenn keine Szene mit Ausdehnung geladen ist.
pub(crate) fn screen_pos_to_world(pointer_pos: egui::Pos2, ctx: &ViewportContext) -> Option<Vec2> {
    let bounds = ctx.scene_bounds()?;
    let local = pointer_pos - ctx.response.rect.min;
    Some(ctx.camera.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(ctx.viewport_size[0], ctx.viewport_size[1]),
        &bounds,
    ))
}
