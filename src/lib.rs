//! # gilt-kit
//!
//! Scroll bar / slider controls and debounced resize propagation for a
//! retained scene graph.
//!
//! ## Core Systems
//!
//! - **[`widget`]**: [`Scrollable`](widget::Scrollable) control with a bounded, draggable thumb
//! - **[`resize`]**: host resize signals, debounce, traversal of resizable nodes
//! - **[`dom`]**: slotmap-backed scene graph with per-node notifications
//! - **[`theme`]**: skin lookup for track, progress and thumb visuals
//! - **[`event`]**: named-notification emitter and host input events
//! - **[`geometry`]**: Point, Size, Orientation primitives
//! - **[`testing`]**: headless Pilot and snapshot helpers

// Foundation
pub mod error;
pub mod geometry;

// Scene graph
pub mod dom;
pub mod event;

// Controls
pub mod theme;
pub mod widget;

// Resize propagation
pub mod resize;

// Headless harness
pub mod testing;

pub use error::{Error, Result};
