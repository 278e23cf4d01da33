//! Core diagram model: gate descriptors, placed instances, and wires.
//!
//! The diagram is a directed graph: placed gates are nodes, committed
//! wires are edges carrying the pin endpoints as their weight. An id index
//! gives O(1) lookup from `GateId` to graph index. Gates are never removed
//! in this engine, so graph indices ascend in insertion order and iteration
//! over them is the deterministic tie-break order used by hit testing.

use crate::config::LayoutConfig;
use crate::geometry::{Bounds, Vec2};
use crate::id::GateId;
use crate::layout::{GateLayout, resolve_gate_layout};
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

// ─── Pins ────────────────────────────────────────────────────────────────

/// Which side of a gate a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinSide {
    Input,
    Output,
}

/// Identity of a pin: the owning gate, the side, and the index within that
/// side's label list. Pins are derived from gate layout on demand, never
/// stored as entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub gate: GateId,
    pub side: PinSide,
    pub index: usize,
}

impl PinRef {
    pub const fn new(gate: GateId, side: PinSide, index: usize) -> Self {
        Self { gate, side, index }
    }
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            PinSide::Input => "in",
            PinSide::Output => "out",
        };
        write!(f, "{}.{}[{}]", self.gate, side, self.index)
    }
}

// ─── Gate types ──────────────────────────────────────────────────────────

/// Immutable descriptor of a gate kind: a display name plus ordered
/// input/output pin labels. Used both for the currently selected type to
/// place and embedded in every placed instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateType {
    pub kind: String,
    pub input_labels: SmallVec<[String; 2]>,
    pub output_labels: SmallVec<[String; 2]>,
}

impl GateType {
    pub fn new(kind: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            input_labels: inputs.iter().map(|s| s.to_string()).collect(),
            output_labels: outputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn input_count(&self) -> usize {
        self.input_labels.len()
    }

    pub fn output_count(&self) -> usize {
        self.output_labels.len()
    }

    // Standard two-input gates.
    pub fn and() -> Self {
        Self::new("AND", &["A", "B"], &["Q"])
    }

    pub fn or() -> Self {
        Self::new("OR", &["A", "B"], &["Q"])
    }

    pub fn nand() -> Self {
        Self::new("NAND", &["A", "B"], &["Q"])
    }

    pub fn nor() -> Self {
        Self::new("NOR", &["A", "B"], &["Q"])
    }

    pub fn xor() -> Self {
        Self::new("XOR", &["A", "B"], &["Q"])
    }

    pub fn not() -> Self {
        Self::new("NOT", &["A"], &["Q"])
    }

    /// Source terminal: no inputs, one output.
    pub fn input() -> Self {
        Self::new("IN", &[], &["Q"])
    }

    /// Sink terminal: one input, no outputs.
    pub fn output() -> Self {
        Self::new("OUT", &["A"], &[])
    }
}

// ─── Placed gates ────────────────────────────────────────────────────────

/// A gate placed on the canvas.
///
/// `bounds` caches the most recently resolved box; the model refreshes it
/// on placement and every move, so it is never stale, but the layout
/// solver output remains the authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateInstance {
    pub id: GateId,
    /// World-space center of the gate body.
    pub center: Vec2,
    pub gate_type: GateType,
    pub bounds: Bounds,
}

impl GateInstance {
    pub fn new(id: GateId, gate_type: GateType, center: Vec2, config: &LayoutConfig) -> Self {
        let bounds = resolve_gate_layout(
            center,
            gate_type.input_count(),
            gate_type.output_count(),
            config,
        )
        .bounds;
        Self {
            id,
            center,
            gate_type,
            bounds,
        }
    }

    /// Resolve this gate's current layout (box + pin positions).
    pub fn layout(&self, config: &LayoutConfig) -> GateLayout {
        resolve_gate_layout(
            self.center,
            self.gate_type.input_count(),
            self.gate_type.output_count(),
            config,
        )
    }

    /// World position of one of this gate's pins.
    pub fn pin_position(&self, side: PinSide, index: usize, config: &LayoutConfig) -> Option<Vec2> {
        self.layout(config).pin(side, index)
    }
}

// ─── Wires ───────────────────────────────────────────────────────────────

/// A committed wire between two pins on distinct gates.
///
/// Stored as the edge weight in the diagram graph. Endpoint world
/// positions are re-derived from the live gate layout every frame; a wire
/// never caches absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub from: PinRef,
    pub to: PinRef,
}

/// Why a wire was not created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Both endpoints are the same pin.
    SamePin,
    /// Both endpoints sit on the same gate instance.
    SameGate,
    /// An endpoint references a gate that is not in the diagram.
    UnknownGate(GateId),
    /// An endpoint's pin index is out of range for its side.
    NoSuchPin(PinRef),
    /// The identical wire already exists.
    Duplicate,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SamePin => write!(f, "wire endpoints are the same pin"),
            Self::SameGate => write!(f, "wire endpoints sit on the same gate"),
            Self::UnknownGate(id) => write!(f, "no gate {id} in the diagram"),
            Self::NoSuchPin(pin) => write!(f, "no pin {pin} on that gate"),
            Self::Duplicate => write!(f, "an identical wire already exists"),
        }
    }
}

impl std::error::Error for WireError {}

// ─── Diagram ─────────────────────────────────────────────────────────────

/// The mutable diagram: placed gates plus committed wires.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// Gates as nodes, wires as edges.
    graph: StableDiGraph<GateInstance, Wire>,
    /// Index from GateId → NodeIndex for fast lookup.
    id_index: HashMap<GateId, NodeIndex>,
}

impl Diagram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new gate of `gate_type` centered at `center`.
    /// Returns the fresh id; insertion order is preserved for iteration.
    pub fn add_gate(&mut self, gate_type: GateType, center: Vec2, config: &LayoutConfig) -> GateId {
        let id = GateId::fresh();
        let gate = GateInstance::new(id, gate_type, center, config);
        let idx = self.graph.add_node(gate);
        self.id_index.insert(id, idx);
        log::debug!("placed {id} at ({}, {})", center.x, center.y);
        id
    }

    /// Look up a gate by id.
    pub fn get(&self, id: GateId) -> Option<&GateInstance> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// Look up a gate mutably by id.
    pub fn get_mut(&mut self, id: GateId) -> Option<&mut GateInstance> {
        self.id_index
            .get(&id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    /// Get the graph index for a GateId.
    pub fn index_of(&self, id: GateId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    pub fn gate_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn wire_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Gates in insertion order.
    pub fn gates(&self) -> impl Iterator<Item = &GateInstance> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Move a gate to a new center, refreshing its cached bounds.
    /// Returns false if the id is unknown.
    pub fn move_gate(&mut self, id: GateId, center: Vec2, config: &LayoutConfig) -> bool {
        let Some(gate) = self.get_mut(id) else {
            return false;
        };
        gate.center = center;
        gate.bounds = resolve_gate_layout(
            center,
            gate.gate_type.input_count(),
            gate.gate_type.output_count(),
            config,
        )
        .bounds;
        true
    }

    /// Commit a wire between two pins.
    ///
    /// Rejected (and the diagram left untouched) when the endpoints are
    /// the same pin, sit on the same gate, reference an unknown gate or
    /// pin index, or duplicate an existing wire.
    pub fn connect(&mut self, from: PinRef, to: PinRef) -> Result<(), WireError> {
        if from == to {
            return Err(WireError::SamePin);
        }
        if from.gate == to.gate {
            return Err(WireError::SameGate);
        }

        for pin in [from, to] {
            let gate = self.get(pin.gate).ok_or(WireError::UnknownGate(pin.gate))?;
            let count = match pin.side {
                PinSide::Input => gate.gate_type.input_count(),
                PinSide::Output => gate.gate_type.output_count(),
            };
            if pin.index >= count {
                return Err(WireError::NoSuchPin(pin));
            }
        }

        let wire = Wire { from, to };
        if self.graph.edge_weights().any(|w| *w == wire) {
            return Err(WireError::Duplicate);
        }

        let from_idx = self
            .index_of(from.gate)
            .ok_or(WireError::UnknownGate(from.gate))?;
        let to_idx = self
            .index_of(to.gate)
            .ok_or(WireError::UnknownGate(to.gate))?;
        self.graph.add_edge(from_idx, to_idx, wire);
        log::debug!("wired {from} -> {to}");
        Ok(())
    }

    /// Committed wires in insertion order.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.graph.edge_weights()
    }

    /// Resolve a wire's endpoints against the current gate positions.
    /// `None` only if an endpoint no longer resolves to a live pin.
    pub fn wire_endpoints(&self, wire: &Wire, config: &LayoutConfig) -> Option<(Vec2, Vec2)> {
        let from = self
            .get(wire.from.gate)?
            .pin_position(wire.from.side, wire.from.index, config)?;
        let to = self
            .get(wire.to.gate)?
            .pin_position(wire.to.side, wire.to.index, config)?;
        Some((from, to))
    }
}
