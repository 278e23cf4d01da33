//! Pure gate layout solver.
//!
//! Derives a gate's bounding box and pin positions from its declared
//! input/output counts. Stateless and deterministic: callers re-solve
//! whenever a gate moves, so pin positions can never go stale.

use crate::config::LayoutConfig;
use crate::geometry::{Bounds, Vec2};
use crate::model::PinSide;
use smallvec::SmallVec;

/// Resolved geometry for one gate: its box plus the world position of
/// every pin, inputs on the left edge, outputs on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct GateLayout {
    pub bounds: Bounds,
    pub input_pins: SmallVec<[Vec2; 4]>,
    pub output_pins: SmallVec<[Vec2; 4]>,
}

impl GateLayout {
    /// Position of the pin at `index` on `side`, if it exists.
    pub fn pin(&self, side: PinSide, index: usize) -> Option<Vec2> {
        match side {
            PinSide::Input => self.input_pins.get(index).copied(),
            PinSide::Output => self.output_pins.get(index).copied(),
        }
    }
}

/// Solve the layout for a gate centered at `center`.
///
/// The gate's height is `max(n_inputs, n_outputs) * pin_spacing +
/// 2 * pin_margin`; a side with zero pins contributes no pins and affects
/// the height only through the max. The i-th of n pins on a side sits at
/// `top.y + pin_margin + (i+1) * (height - 2*pin_margin) / (n+1)`,
/// with 1-indexed spacing so pins never land on the gate's corners.
pub fn resolve_gate_layout(
    center: Vec2,
    n_inputs: usize,
    n_outputs: usize,
    config: &LayoutConfig,
) -> GateLayout {
    let height =
        n_inputs.max(n_outputs) as f32 * config.pin_spacing + 2.0 * config.pin_margin;
    let top_left = Vec2::new(
        center.x - config.gate_width / 2.0,
        center.y - height / 2.0,
    );
    let bounds = Bounds::new(top_left.x, top_left.y, config.gate_width, height);

    GateLayout {
        bounds,
        input_pins: side_pins(top_left.x, top_left.y, height, n_inputs, config),
        output_pins: side_pins(
            top_left.x + config.gate_width,
            top_left.y,
            height,
            n_outputs,
            config,
        ),
    }
}

/// Evenly distribute `count` pins along one vertical edge.
fn side_pins(
    edge_x: f32,
    top_y: f32,
    height: f32,
    count: usize,
    config: &LayoutConfig,
) -> SmallVec<[Vec2; 4]> {
    let span = height - 2.0 * config.pin_margin;
    (0..count)
        .map(|i| {
            let y = top_y + config.pin_margin + (i as f32 + 1.0) * span / (count as f32 + 1.0);
            Vec2::new(edge_x, y)
        })
        .collect()
}
