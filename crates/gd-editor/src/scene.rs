//! Per-frame scene snapshot for the external renderer.
//!
//! A renderer collaborator calls `Editor::scene()` once per frame and
//! paints what it gets back. Gate layouts, wire endpoints, and preview
//! geometry are all re-derived at snapshot time, so a renderer can
//! never observe positions from before the latest mutation.

use crate::editor::Editor;
use crate::state::EditorState;
use gd_core::{GateInstance, GateLayout, GateType, Vec2, Wire, resolve_gate_layout};

/// One gate to paint: the instance, its freshly resolved layout, and
/// whether the pointer is over it.
#[derive(Debug)]
pub struct GateSprite<'a> {
    pub gate: &'a GateInstance,
    pub layout: GateLayout,
    pub hovered: bool,
}

/// One committed wire with both endpoints resolved to world positions.
#[derive(Debug, Clone, PartialEq)]
pub struct WireSprite {
    pub wire: Wire,
    pub from: Vec2,
    pub to: Vec2,
}

/// The in-progress wire: source pin position to live cursor, world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WirePreview {
    pub from: Vec2,
    pub to: Vec2,
}

/// The reduced-opacity preview of the gate about to be placed, already
/// snapped to the same grid the placement itself will use.
#[derive(Debug)]
pub struct GhostSprite<'a> {
    pub gate_type: &'a GateType,
    pub layout: GateLayout,
}

/// Everything a renderer needs for one frame.
#[derive(Debug)]
pub struct Scene<'a> {
    /// Gates in insertion order.
    pub gates: Vec<GateSprite<'a>>,
    /// Committed wires in insertion order.
    pub wires: Vec<WireSprite>,
    pub wire_preview: Option<WirePreview>,
    pub ghost: Option<GhostSprite<'a>>,
    /// Viewport transform to apply before drawing world-space content.
    pub pan: Vec2,
    pub zoom: f32,
    pub canvas_size: Vec2,
}

impl Editor {
    /// Build the snapshot for the current frame.
    pub fn scene(&self) -> Scene<'_> {
        let gates = self
            .diagram
            .gates()
            .map(|gate| GateSprite {
                layout: gate.layout(&self.config),
                hovered: self.hovered_gate == Some(gate.id),
                gate,
            })
            .collect();

        let wires = self
            .diagram
            .wires()
            .filter_map(|wire| {
                let (from, to) = self.diagram.wire_endpoints(wire, &self.config)?;
                Some(WireSprite {
                    wire: *wire,
                    from,
                    to,
                })
            })
            .collect();

        let wire_preview = if let EditorState::Wiring { from, cursor } = self.state {
            self.diagram
                .get(from.gate)
                .and_then(|gate| gate.pin_position(from.side, from.index, &self.config))
                .map(|start| WirePreview {
                    from: start,
                    to: cursor,
                })
        } else {
            None
        };

        let show_ghost = self.state.is_idle()
            && self.hovered_gate.is_none()
            && self.hovered_pin.is_none();
        let ghost = show_ghost.then(|| {
            let center = self.cursor_world().snapped(self.config.grid_step);
            GhostSprite {
                gate_type: &self.selected_type,
                layout: resolve_gate_layout(
                    center,
                    self.selected_type.input_count(),
                    self.selected_type.output_count(),
                    &self.config,
                ),
            }
        });

        Scene {
            gates,
            wires,
            wire_preview,
            ghost,
            pan: self.viewport.pan(),
            zoom: self.viewport.zoom(),
            canvas_size: self.canvas_size,
        }
    }
}
