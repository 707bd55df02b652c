//! Interaction layer for the Mockflow canvas.
//!
//! Input normalization, tools, keyboard shortcuts, the observable document
//! store, and the gesture state machine that ties them together.

pub mod controller;
pub mod input;
pub mod shortcuts;
pub mod store;
pub mod tools;

pub use controller::{CanvasController, Gesture, Response};
pub use input::{InputEvent, Modifiers, PointerButton};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use store::{DocumentStore, EditorState, SubscriptionId};
pub use tools::{DragKind, ToolKind};
