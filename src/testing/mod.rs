//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to programmatically drive a scene graph and its resize
//! manager without a real terminal. Use [`tree_to_string`] and
//! [`scrollable_to_string`] to capture state as plain text for
//! snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{Pilot, WidgetHandle};
pub use snapshot::{scrollable_to_string, skin_to_string, tree_to_string};
