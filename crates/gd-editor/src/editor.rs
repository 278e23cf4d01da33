//! The editor controller.
//!
//! Consumes normalized input events, maintains the derived hover state,
//! and drives the interaction state machine, mutating the diagram and
//! viewport as gestures complete. Every handler is synchronous and
//! total: invalid gestures are no-ops that settle back in `Idle`, never
//! errors surfaced to the host.

use crate::input::{InputEvent, PointerButton};
use crate::state::EditorState;
use gd_core::{
    Diagram, GateId, GateType, LayoutConfig, PinRef, Vec2, Viewport, hovered_gate, hovered_pin,
};

pub struct Editor {
    pub(crate) diagram: Diagram,
    pub(crate) viewport: Viewport,
    pub(crate) config: LayoutConfig,
    pub(crate) selected_type: GateType,
    pub(crate) state: EditorState,
    /// Derived hover state, recomputed from scratch on every pointer
    /// move. Kept on the controller, never written onto the gates.
    pub(crate) hovered_gate: Option<GateId>,
    pub(crate) hovered_pin: Option<PinRef>,
    /// Last pointer position, screen space. World positions always
    /// derive from this and the live viewport, never from a stale copy.
    pub(crate) cursor_screen: Vec2,
    pub(crate) canvas_size: Vec2,
}

impl Editor {
    /// A fresh editor placing gates of `selected_type`.
    #[must_use]
    pub fn new(selected_type: GateType) -> Self {
        Self::with_config(selected_type, LayoutConfig::default())
    }

    pub fn with_config(selected_type: GateType, config: LayoutConfig) -> Self {
        Self {
            diagram: Diagram::new(),
            viewport: Viewport::new(),
            config,
            selected_type,
            state: EditorState::Idle,
            hovered_gate: None,
            hovered_pin: None,
            // off-canvas until the first pointer move arrives
            cursor_screen: Vec2::new(-100.0, -100.0),
            canvas_size: Vec2::new(800.0, 600.0),
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn hovered_gate(&self) -> Option<GateId> {
        self.hovered_gate
    }

    pub fn hovered_pin(&self) -> Option<PinRef> {
        self.hovered_pin
    }

    pub fn selected_type(&self) -> &GateType {
        &self.selected_type
    }

    /// Swap which gate type subsequent placements (and the ghost
    /// preview) use.
    pub fn set_selected_type(&mut self, gate_type: GateType) {
        self.selected_type = gate_type;
    }

    /// The world position currently under the pointer.
    pub fn cursor_world(&self) -> Vec2 {
        self.viewport.screen_to_world(self.cursor_screen)
    }

    /// Feed one host event through the state machine.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => self.on_primary_down(pos),
            InputEvent::PointerUp {
                pos,
                button: PointerButton::Primary,
            } => self.on_primary_up(pos),
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Middle,
            } => self.on_middle_down(pos),
            InputEvent::PointerUp {
                button: PointerButton::Middle,
                ..
            } => self.on_middle_up(),
            // the context menu is suppressed host-side; nothing to do here
            InputEvent::PointerDown {
                button: PointerButton::Secondary,
                ..
            }
            | InputEvent::PointerUp {
                button: PointerButton::Secondary,
                ..
            } => {}
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos),
            InputEvent::Wheel { pos, delta_y } => self.on_wheel(pos, delta_y),
            InputEvent::Resize { width, height } => {
                self.canvas_size = Vec2::new(width, height);
            }
        }
    }

    fn on_primary_down(&mut self, pos: Vec2) {
        self.cursor_screen = pos;
        self.refresh_hover();

        // a gesture is already running; the press cannot start another
        if !self.state.is_idle() {
            return;
        }

        let world = self.cursor_world();
        if let Some(pin) = self.hovered_pin {
            self.state = EditorState::Wiring {
                from: pin,
                cursor: world,
            };
            log::debug!("wiring from {pin}");
        } else if let Some(gate_id) = self.hovered_gate {
            if let Some(gate) = self.diagram.get(gate_id) {
                self.state = EditorState::DraggingGate {
                    gate: gate_id,
                    grab_offset: gate.center - world,
                };
                log::debug!("dragging {gate_id}");
            }
        } else {
            let center = world.snapped(self.config.grid_step);
            self.diagram
                .add_gate(self.selected_type.clone(), center, &self.config);
            // the new gate now sits under the cursor
            self.refresh_hover();
        }
    }

    fn on_primary_up(&mut self, pos: Vec2) {
        self.cursor_screen = pos;
        self.refresh_hover();

        match self.state {
            EditorState::Wiring { from, .. } => {
                match self.hovered_pin {
                    Some(to) if to != from => {
                        if let Err(err) = self.diagram.connect(from, to) {
                            log::debug!("wire rejected: {err}");
                        }
                    }
                    // released over nothing, a gate body, or the source
                    // pin itself: the gesture simply produced no edge
                    _ => log::debug!("wire from {from} abandoned"),
                }
                self.state.reset();
            }
            EditorState::DraggingGate { gate, .. } => {
                log::debug!("released {gate}");
                self.state.reset();
            }
            _ => {}
        }
    }

    fn on_middle_down(&mut self, pos: Vec2) {
        self.cursor_screen = pos;
        if self.state.is_idle() {
            self.state = EditorState::Panning { last_screen: pos };
        }
    }

    fn on_middle_up(&mut self) {
        if self.state.is_panning() {
            self.state.reset();
        }
    }

    fn on_pointer_move(&mut self, pos: Vec2) {
        self.cursor_screen = pos;
        let world = self.viewport.screen_to_world(pos);

        match &mut self.state {
            EditorState::Idle => {}
            EditorState::DraggingGate { gate, grab_offset } => {
                let center = world + *grab_offset;
                let gate = *gate;
                self.diagram.move_gate(gate, center, &self.config);
            }
            EditorState::Panning { last_screen } => {
                let delta = pos - *last_screen;
                *last_screen = pos;
                self.viewport.pan_by(delta);
            }
            EditorState::Wiring { cursor, .. } => {
                *cursor = world;
            }
        }

        self.refresh_hover();
    }

    /// Wheel zoom is processed in every state and anchors on the event's
    /// own cursor position, never a stored one.
    fn on_wheel(&mut self, pos: Vec2, delta_y: f32) {
        self.cursor_screen = pos;
        self.viewport.zoom_at(pos, delta_y, &self.config);
        // the world point under the cursor changed with the transform
        self.refresh_hover();
    }

    /// Recompute both hover queries from the live cursor position.
    fn refresh_hover(&mut self) {
        let world = self.cursor_world();
        self.hovered_gate = hovered_gate(world, &self.diagram, &self.config);
        self.hovered_pin = hovered_pin(world, &self.diagram, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_to(editor: &mut Editor, x: f32, y: f32) {
        editor.handle_event(&InputEvent::PointerMove {
            pos: Vec2::new(x, y),
        });
    }

    #[test]
    fn secondary_button_is_inert() {
        let mut editor = Editor::new(GateType::and());
        editor.handle_event(&InputEvent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
            button: PointerButton::Secondary,
        });
        assert!(editor.state().is_idle());
        assert_eq!(editor.diagram().gate_count(), 0);
    }

    #[test]
    fn resize_updates_canvas_size_only() {
        let mut editor = Editor::new(GateType::and());
        let pan = editor.viewport().pan();
        editor.handle_event(&InputEvent::Resize {
            width: 1024.0,
            height: 768.0,
        });
        assert_eq!(editor.canvas_size, Vec2::new(1024.0, 768.0));
        assert_eq!(editor.viewport().pan(), pan);
        assert_eq!(editor.viewport().zoom(), 1.0);
    }

    #[test]
    fn selected_type_swap_changes_placement() {
        let mut editor = Editor::new(GateType::and());
        editor.set_selected_type(GateType::nor());
        move_to(&mut editor, 100.0, 100.0);
        editor.handle_event(&InputEvent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
            button: PointerButton::Primary,
        });
        let placed = editor.diagram().gates().next().unwrap();
        assert_eq!(placed.gate_type.kind, "NOR");
    }

    #[test]
    fn hover_is_recomputed_after_zoom() {
        let mut editor = Editor::new(GateType::and());
        move_to(&mut editor, 100.0, 100.0);
        editor.handle_event(&InputEvent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
            button: PointerButton::Primary,
        });
        editor.handle_event(&InputEvent::PointerUp {
            pos: Vec2::new(100.0, 100.0),
            button: PointerButton::Primary,
        });
        assert!(editor.hovered_gate().is_some());

        // zooming out from a far-away anchor slides the gate out from
        // under the (unmoved) cursor
        for _ in 0..10 {
            editor.handle_event(&InputEvent::Wheel {
                pos: Vec2::new(700.0, 500.0),
                delta_y: 1.0,
            });
        }
        move_to(&mut editor, 100.0, 100.0);
        let under_cursor = editor.cursor_world();
        let gate = editor.diagram().gates().next().unwrap();
        assert!(under_cursor.distance(gate.center) > 60.0);
        assert_eq!(editor.hovered_gate(), None);
    }
}
