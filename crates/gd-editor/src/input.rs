//! Input abstraction layer.
//!
//! Normalizes the host's pointer, wheel, and resize callbacks into a
//! unified `InputEvent` enum consumed by the editor controller. The host
//! owns the canvas element and forwards events here in arrival order.

use gd_core::Vec2;

/// Which pointer button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// A normalized input event from the host.
///
/// Positions are screen-space, relative to the canvas's visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed.
    PointerDown { pos: Vec2, button: PointerButton },

    /// Pointer button released.
    PointerUp { pos: Vec2, button: PointerButton },

    /// Pointer moved.
    PointerMove { pos: Vec2 },

    /// Wheel rotated over the canvas. Only the sign of `delta_y` matters:
    /// negative zooms in, positive zooms out.
    Wheel { pos: Vec2, delta_y: f32 },

    /// The canvas's displayed size changed. The host notifies
    /// synchronously; the engine never re-measures on a timer.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    /// Extract the screen position if this is a pointer or wheel event.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::PointerDown { pos, .. }
            | Self::PointerUp { pos, .. }
            | Self::PointerMove { pos }
            | Self::Wheel { pos, .. } => Some(*pos),
            Self::Resize { .. } => None,
        }
    }
}
