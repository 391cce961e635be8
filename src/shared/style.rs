//! Stil-Auflösung: Tag-Satz → Render-Stil einer Region.

use super::ViewerOptions;
use crate::core::RegionTags;

/// Aufgelöster Zeichen-Stil einer Region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    /// Füllfarbe inkl. Deckkraft (RGBA)
    pub fill: [f32; 4],
    /// Umrissfarbe (RGBA)
    pub stroke: [f32; 4],
    /// Umrissbreite in Pixeln
    pub stroke_width: f32,
}

/// Pure Stil-Funktion über den Tag-Flags einer Region.
///
/// Regel-Tabelle, erster Treffer gewinnt:
/// Site+Building → Violett, nur Site → Cyan, Building-Footprint → Orange,
/// Building-Obergeschoss → Gold, unklassifiziert → neutral.
pub fn style_for(tags: Option<&RegionTags>, options: &ViewerOptions) -> RegionStyle {
    let Some(tags) = tags else {
        return neutral_style(options);
    };

    match (tags.is_site, tags.is_building) {
        (true, true) => RegionStyle {
            fill: options.region_color_site_building,
            stroke: options.region_stroke_highlight,
            stroke_width: 2.0,
        },
        (true, false) => RegionStyle {
            fill: options.region_color_site,
            stroke: options.region_stroke_highlight,
            stroke_width: 1.0,
        },
        (false, true) => RegionStyle {
            fill: if tags.is_footprint {
                options.region_color_footprint
            } else {
                options.region_color_building
            },
            stroke: options.region_stroke_highlight,
            stroke_width: 1.0,
        },
        (false, false) => neutral_style(options),
    }
}

fn neutral_style(options: &ViewerOptions) -> RegionStyle {
    RegionStyle {
        fill: options.region_color_unclassified,
        stroke: options.region_stroke_neutral,
        stroke_width: 1.0,
    }
}
