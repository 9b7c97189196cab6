//! Controls: scroll bar / slider and its thumb.

pub mod scrollable;
pub mod thumb;

pub use scrollable::{Invalidation, Mode, Scrollable, DEFAULT_SCROLL_DELTA};
pub use thumb::{Thumb, DEFAULT_THUMB_SIZE};
