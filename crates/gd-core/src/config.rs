//! Shared layout and interaction constants.
//!
//! One `LayoutConfig` value is consumed by both the gate layout solver and
//! the hit tester, so the geometry used to place a pin and the geometry
//! used to hit it cannot drift apart.

use serde::{Deserialize, Serialize};

/// Tunable geometry and interaction constants, in world units unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed width of every gate body.
    pub gate_width: f32,
    /// Vertical space allotted per pin on a gate's taller side.
    pub pin_spacing: f32,
    /// Gap between the gate's top/bottom edges and the pin span.
    pub pin_margin: f32,
    /// Radius a renderer should draw a pin at.
    pub pin_radius: f32,
    /// Radius within which a pointer counts as hovering a pin.
    /// Larger than `pin_radius` so near-misses still connect.
    pub pin_hit_radius: f32,
    /// Outset applied per side to a gate's bounds when testing hover.
    pub hover_margin: f32,
    /// Placement snap granularity; applied to both the placed gate and
    /// the preview ghost.
    pub grid_step: f32,
    /// Zoom clamp range.
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Multiplicative zoom factor per wheel notch.
    pub zoom_step: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gate_width: 60.0,
            pin_spacing: 15.0,
            pin_margin: 6.75,
            pin_radius: 3.0,
            pin_hit_radius: 8.0,
            hover_margin: 7.5,
            grid_step: 10.0,
            zoom_min: 0.2,
            zoom_max: 5.0,
            zoom_step: 1.1,
        }
    }
}
