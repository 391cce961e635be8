//! Klassifikations-Use-Cases: Klick-Toggle, Box-Anwendung, Containment.

mod containment;
mod helpers;
mod pick;
mod rect;

pub use helpers::clear_tags;
pub use pick::toggle_region_at;
pub use rect::classify_regions_in_rect;
