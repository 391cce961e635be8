//! Site-Containment: Grundstücks-Tag auf vollständig enthaltene Regionen ausweiten.

use crate::core::{PlanScene, TagMap};

/// Taggt alle Regionen als Site, die vollständig in der Parent-Region liegen.
///
/// Enthaltensein = Bounding-Box-Einschluss plus alle Eckpunkte innerhalb der
/// Parent-Kontur. Regionen, die den Rand schneiden, bleiben unberührt.
pub(super) fn apply_site_containment(scene: &PlanScene, tags: &mut TagMap, parent_id: u64) {
    let Some(parent) = scene.region(parent_id) else {
        return;
    };

    for region in &scene.regions {
        if region.id == parent_id {
            continue;
        }
        if !parent.bounding_box.contains_bounds(&region.bounding_box) {
            continue;
        }
        if region.points.iter().all(|p| parent.contains_point(*p)) {
            tags.entry(region.id).or_default().is_site = true;
        }
    }
}
