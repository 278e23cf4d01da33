//! Hit testing: world-space point → hovered gate or pin.
//!
//! Both queries walk the diagram's gates in insertion order and return
//! the first match, so results are deterministic when hit regions
//! overlap. An empty diagram yields `None`, a first-class answer, not an
//! error.

use crate::config::LayoutConfig;
use crate::geometry::Vec2;
use crate::id::GateId;
use crate::model::{Diagram, PinRef, PinSide};

/// Find the gate whose bounds, expanded by `hover_margin` per side so
/// near-edge hovering stays forgiving, contain `world`.
/// At most one gate is ever reported.
pub fn hovered_gate(world: Vec2, diagram: &Diagram, config: &LayoutConfig) -> Option<GateId> {
    diagram
        .gates()
        .find(|gate| gate.bounds.expand(config.hover_margin).contains(world))
        .map(|gate| gate.id)
}

/// Find the first pin within `pin_hit_radius` of `world`.
///
/// Within a gate, all input pins are tested before any output pin; this
/// ordering is the tie-break policy for overlapping pins and must be
/// preserved for determinism.
pub fn hovered_pin(world: Vec2, diagram: &Diagram, config: &LayoutConfig) -> Option<PinRef> {
    for gate in diagram.gates() {
        let layout = gate.layout(config);
        for (index, pos) in layout.input_pins.iter().enumerate() {
            if pos.distance(world) <= config.pin_hit_radius {
                log::trace!("pin hit: {}.in[{index}]", gate.id);
                return Some(PinRef::new(gate.id, PinSide::Input, index));
            }
        }
        for (index, pos) in layout.output_pins.iter().enumerate() {
            if pos.distance(world) <= config.pin_hit_radius {
                log::trace!("pin hit: {}.out[{index}]", gate.id);
                return Some(PinRef::new(gate.id, PinSide::Output, index));
            }
        }
    }
    None
}
