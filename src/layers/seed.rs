use super::{Layer, LayerId, LayerKind};

/// Total number of layers in the built-in demo project.
pub const SEED_LAYER_COUNT: usize = 90;

struct SeedRow {
    label: &'static str,
    kind: LayerKind,
    locked: bool,
    visible: bool,
    active: bool,
    opacity: u8,
}

const fn row(
    label: &'static str,
    kind: LayerKind,
    locked: bool,
    visible: bool,
    active: bool,
    opacity: u8,
) -> SeedRow {
    SeedRow {
        label,
        kind,
        locked,
        visible,
        active,
        opacity,
    }
}

const SITE_LAYERS: [SeedRow; 12] = [
    row("Drawing C", LayerKind::Drawing, false, false, false, 100),
    row("Other Drawing", LayerKind::Data, false, true, true, 100),
    row("Map", LayerKind::ProjectBoundary, false, false, true, 100),
    row("Drawing", LayerKind::Drawing, false, true, true, 100),
    row("Base map", LayerKind::Data, false, false, true, 100),
    row("Project layer", LayerKind::ProjectBoundary, false, true, true, 100),
    row("Site Plan", LayerKind::Drawing, true, false, false, 80),
    row("Survey Data", LayerKind::Data, false, true, true, 90),
    row("Topographic Map", LayerKind::ProjectBoundary, true, false, false, 70),
    row("Elevation Drawing", LayerKind::Drawing, false, true, true, 100),
    row("Geological Data", LayerKind::Data, false, false, true, 100),
    row("Boundary Map", LayerKind::ProjectBoundary, true, false, false, 60),
];

const GENERATED_CYCLE: [(LayerKind, &str); 3] = [
    (LayerKind::Drawing, "New Drawing"),
    (LayerKind::Data, "New Data"),
    (LayerKind::ProjectBoundary, "New Project Boundary"),
];

/// Demo project shown on first launch: `layer-0` through `layer-89`.
///
/// Locked site layers are also filtered. Generated layers alternate
/// visibility and cycle drawing, data and boundary kinds.
pub fn seed_layers() -> Vec<Layer> {
    let mut layers = Vec::with_capacity(SEED_LAYER_COUNT);
    for (index, seed) in SITE_LAYERS.iter().enumerate() {
        layers.push(Layer {
            locked: seed.locked,
            visible: seed.visible,
            filtered: seed.locked,
            active: seed.active,
            opacity: seed.opacity,
            ..Layer::new(seed_id(index), seed.label, seed.kind)
        });
    }
    for index in SITE_LAYERS.len()..SEED_LAYER_COUNT {
        let offset = index - SITE_LAYERS.len();
        let (kind, prefix) = GENERATED_CYCLE[offset % GENERATED_CYCLE.len()];
        let number = offset / GENERATED_CYCLE.len() + 1;
        layers.push(Layer {
            visible: index % 2 == 0,
            ..Layer::new(seed_id(index), format!("{prefix} {number}"), kind)
        });
    }
    layers
}

fn seed_id(index: usize) -> LayerId {
    LayerId::from_string(format!("layer-{index}"))
}
