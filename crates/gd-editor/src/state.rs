//! Interaction state machine.
//!
//! A single tagged union replaces independent dragging/panning/wiring
//! flags, so contradictory simultaneous modes are unrepresentable.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Wiring         (primary down on a pin)
//! Idle -> DraggingGate   (primary down on a gate body)
//! Idle -> Panning        (middle down)
//!
//! Wiring       -> Idle   (primary up - commits or abandons the wire)
//! DraggingGate -> Idle   (primary up - the gate stays where it is)
//! Panning      -> Idle   (middle up)
//! ```

use gd_core::{GateId, PinRef, Vec2};

/// The editor's current gesture. `Idle` is both the initial state and the
/// state returned to after every completed or abandoned gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorState {
    /// No gesture in progress.
    Idle,

    /// A gate body is being dragged.
    DraggingGate {
        gate: GateId,
        /// `gate.center - cursor_world` at press time, so the gate keeps
        /// its offset under the cursor instead of jumping to it.
        grab_offset: Vec2,
    },

    /// The canvas is being panned with the middle button.
    Panning {
        /// Last pointer position (screen space) for delta computation.
        last_screen: Vec2,
    },

    /// A wire drag is in progress. `cursor` is the unresolved "to"
    /// endpoint, tracked in world space on every pointer move.
    Wiring { from: PinRef, cursor: Vec2 },
}

impl Default for EditorState {
    fn default() -> Self {
        Self::Idle
    }
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingGate { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_wiring(&self) -> bool {
        matches!(self, Self::Wiring { .. })
    }

    /// The gate being dragged, if any.
    pub fn dragged_gate(&self) -> Option<GateId> {
        match self {
            Self::DraggingGate { gate, .. } => Some(*gate),
            _ => None,
        }
    }

    /// The pin a wire drag started from, if any.
    pub fn wiring_from(&self) -> Option<PinRef> {
        match self {
            Self::Wiring { from, .. } => Some(*from),
            _ => None,
        }
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_core::PinSide;

    #[test]
    fn default_state_is_idle() {
        let state = EditorState::default();
        assert!(state.is_idle());
        assert!(!state.is_dragging());
        assert!(!state.is_panning());
        assert!(!state.is_wiring());
    }

    #[test]
    fn exactly_one_mode_is_active() {
        let states = [
            EditorState::Idle,
            EditorState::DraggingGate {
                gate: GateId::intern("g"),
                grab_offset: Vec2::ZERO,
            },
            EditorState::Panning {
                last_screen: Vec2::ZERO,
            },
            EditorState::Wiring {
                from: PinRef::new(GateId::intern("g"), PinSide::Output, 0),
                cursor: Vec2::ZERO,
            },
        ];

        for state in states {
            let active = [state.is_dragging(), state.is_panning(), state.is_wiring()]
                .iter()
                .filter(|&&flag| flag)
                .count();
            assert!(active <= 1, "multiple modes active in {state:?}");
            assert_eq!(state.is_idle(), active == 0);
        }
    }

    #[test]
    fn payload_accessors() {
        let gate = GateId::intern("accessor_gate");
        let drag = EditorState::DraggingGate {
            gate,
            grab_offset: Vec2::new(4.0, 2.0),
        };
        assert_eq!(drag.dragged_gate(), Some(gate));
        assert_eq!(drag.wiring_from(), None);

        let pin = PinRef::new(gate, PinSide::Input, 1);
        let wiring = EditorState::Wiring {
            from: pin,
            cursor: Vec2::ZERO,
        };
        assert_eq!(wiring.wiring_from(), Some(pin));
        assert_eq!(wiring.dragged_gate(), None);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = EditorState::Panning {
            last_screen: Vec2::new(9.0, 9.0),
        };
        state.reset();
        assert!(state.is_idle());
    }
}
