//! The canvas viewport: pan offset, clamped zoom, and the screen↔world
//! transform.
//!
//! `world = (screen - pan) / zoom`. The zoom factor is kept inside the
//! configured clamp range at all times, so every conversion uses a valid
//! pan/zoom pair.

use crate::config::LayoutConfig;
use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen-space pan offset.
    pan: Vec2,
    zoom: f32,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.zoom
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.pan
    }

    /// Pan by a raw screen-space delta (no zoom scaling).
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoom one step toward (`delta_y < 0`) or away from (`delta_y > 0`)
    /// the screen point `anchor`, keeping the world point under the
    /// anchor fixed on screen.
    ///
    /// The new zoom is clamped before the pan compensation is computed,
    /// so the compensation always uses the value actually applied.
    pub fn zoom_at(&mut self, anchor: Vec2, delta_y: f32, config: &LayoutConfig) {
        if delta_y == 0.0 {
            return;
        }
        let anchor_world = self.screen_to_world(anchor);
        let factor = if delta_y < 0.0 {
            config.zoom_step
        } else {
            1.0 / config.zoom_step
        };
        self.zoom = (self.zoom * factor).clamp(config.zoom_min, config.zoom_max);
        self.pan = anchor - anchor_world * self.zoom;
        log::trace!("zoom {} around ({}, {})", self.zoom, anchor.x, anchor.y);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
