pub mod config;
pub mod geometry;
pub mod hit;
pub mod id;
pub mod layout;
pub mod model;
pub mod viewport;

pub use config::LayoutConfig;
pub use geometry::{Bounds, Vec2};
pub use hit::{hovered_gate, hovered_pin};
pub use id::GateId;
pub use layout::{GateLayout, resolve_gate_layout};
pub use model::*;
pub use viewport::Viewport;

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;
