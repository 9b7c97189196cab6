//! Resize handling: host signals, debounce, scene-graph dispatch.
//!
//! - **[`host`]**: host window and element abstractions, raw resize signals
//! - **[`event`]**: per-cycle size data, stop flag, per-node events
//! - **[`dispatch`]**: resizable-node traversal and delivery
//! - **[`manager`]**: debounce state machine tying it together

pub mod dispatch;
pub mod event;
pub mod host;
pub mod manager;

pub use dispatch::{dispatch_event, process_resizable, resizable_order};
pub use event::{ResizeData, ResizeEvent, ResizeHandler, StopSignal, RESIZE};
pub use host::{ClientBox, ElementBox, HeadlessHost, HostWindow, ResizeSignal, TerminalHost};
pub use manager::{ResizeConfig, ResizeManager, ResizeState, RESIZE_DONE_TIMEOUT};
