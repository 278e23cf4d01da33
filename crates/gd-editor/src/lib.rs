pub mod editor;
pub mod input;
pub mod scene;
pub mod state;

pub use editor::Editor;
pub use input::{InputEvent, PointerButton};
pub use scene::{GateSprite, GhostSprite, Scene, WirePreview, WireSprite};
pub use state::EditorState;
