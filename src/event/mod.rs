//! Event system: named-notification emitter and host input events.

pub mod emitter;
pub mod input;

pub use emitter::{Emitter, ListenerId};
pub use input::{InputEvent, PointerAction, PointerButton, PointerEvent};
