//! 2D-Kamera für Pan und Zoom über einer Plan-Szene.
//!
//! Alle Transformationen sind pure Funktionen über `(bounds, zoom, pan_offset)`,
//! damit sie ohne Rendering-Oberfläche testbar bleiben. Die Welt-Y-Achse zeigt
//! nach oben, die Bildschirm-Y-Achse nach unten; der Flip passiert ausschließlich
//! hier.

use super::WorldBounds;
use glam::Vec2;

/// 2D-Kamera mit Zoom-Faktor und additivem Pan-Offset.
///
/// `zoom = 1.0` entspricht der Bounding-Box-Einpassung der Szene;
/// `pan_offset` verschiebt das Sichtfenster relativ zum Szenen-Mittelpunkt.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Zoom-Faktor (1.0 = Szene füllt das Sichtfenster)
    pub zoom: f32,
    /// Verschiebung des Sichtfenster-Mittelpunkts in Welt-Einheiten
    pub pan_offset: Vec2,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 200.0;

    /// Erstellt eine Kamera im Standardzustand.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
        }
    }

    /// Setzt Zoom und Pan auf den Standardzustand zurück.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }

    /// Multipliziert den Zoom-Faktor, geklemmt auf [ZOOM_MIN, ZOOM_MAX].
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt und hält dabei den Welt-Punkt `anchor` an derselben
    /// Bildschirmposition (Zoom auf Mausposition).
    pub fn zoom_towards(&mut self, factor: f32, anchor: Vec2, bounds: &WorldBounds) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let scale = old_zoom / self.zoom;

        let old_center = bounds.center() + self.pan_offset;
        let new_center = anchor + (old_center - anchor) * scale;
        self.pan_offset = new_center - bounds.center();
    }

    /// Berechnet das aktuell sichtbare Welt-Rechteck.
    ///
    /// Breite = Szenen-Breite / zoom (Höhe analog), zentriert auf
    /// Szenen-Mittelpunkt + Pan-Offset.
    pub fn view_window(&self, bounds: &WorldBounds) -> WorldBounds {
        let half_w = bounds.width() / self.zoom / 2.0;
        let half_h = bounds.height() / self.zoom / 2.0;
        let center = bounds.center() + self.pan_offset;
        WorldBounds {
            min_x: center.x - half_w,
            min_y: center.y - half_h,
            max_x: center.x + half_w,
            max_y: center.y + half_h,
        }
    }

    /// Rechnet eine Bildschirmposition (Pixel, relativ zur Oberfläche) in
    /// Welt-Koordinaten um. Invertiert den Y-Flip des Renderers.
    pub fn screen_to_world(
        &self,
        screen_pos: Vec2,
        viewport_size: Vec2,
        bounds: &WorldBounds,
    ) -> Vec2 {
        let window = self.view_window(bounds);
        let vw = viewport_size.x.max(1.0);
        let vh = viewport_size.y.max(1.0);
        Vec2::new(
            window.min_x + (screen_pos.x / vw) * window.width(),
            window.max_y - (screen_pos.y / vh) * window.height(),
        )
    }

    /// Rechnet einen Welt-Punkt in Bildschirm-Pixel um (Umkehrung von
    /// `screen_to_world`).
    pub fn world_to_screen(
        &self,
        world_pos: Vec2,
        viewport_size: Vec2,
        bounds: &WorldBounds,
    ) -> Vec2 {
        let window = self.view_window(bounds);
        let ww = window.width().max(f32::EPSILON);
        let wh = window.height().max(f32::EPSILON);
        Vec2::new(
            (world_pos.x - window.min_x) / ww * viewport_size.x,
            (window.max_y - world_pos.y) / wh * viewport_size.y,
        )
    }

    /// Verschiebt die Kamera um ein Bildschirm-Pixel-Delta.
    ///
    /// Das Delta wird über das Verhältnis Sichtfenster/Pixel in Welt-Einheiten
    /// umgerechnet und mit negiertem Y (Achsen-Flip) auf `pan_offset` addiert.
    pub fn pan_by_screen(&mut self, screen_delta: Vec2, viewport_size: Vec2, bounds: &WorldBounds) {
        let window = self.view_window(bounds);
        let kx = window.width() / viewport_size.x.max(1.0);
        let ky = window.height() / viewport_size.y.max(1.0);
        self.pan_offset += Vec2::new(screen_delta.x * kx, -screen_delta.y * ky);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
