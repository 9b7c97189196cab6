//! The draggable indicator inside a scrollable control.

use crate::geometry::{Orientation, Point, Size};
use crate::theme::{skin_key, Skin, Theme};

/// Thumb size used when the theme does not provide a thumb skin.
pub const DEFAULT_THUMB_SIZE: Size = Size::new(20.0, 20.0);

/// Position, extent and skin of a thumb.
///
/// The owning control moves the thumb; the thumb only knows how to redraw
/// itself once it has been invalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    /// Position in the owning control's local space.
    pub position: Point,
    pub size: Size,
    invalid_track: bool,
    skin: Option<Skin>,
}

impl Thumb {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Point::ZERO,
            size: Size::new(width, height),
            invalid_track: true,
            skin: None,
        }
    }

    /// A thumb sized after the theme's `"{orientation}_thumb"` skin.
    pub fn from_theme(theme: &dyn Theme, orientation: Orientation) -> Self {
        let size = theme
            .from_skin(&skin_key(orientation, "thumb"))
            .map_or(DEFAULT_THUMB_SIZE, |skin| skin.size);
        Self::new(size.width, size.height)
    }

    /// Mark the thumb as needing a redraw.
    pub fn invalidate(&mut self) {
        self.invalid_track = true;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid_track
    }

    /// Installed skin, if the theme had one at the last redraw.
    pub fn skin(&self) -> Option<&Skin> {
        self.skin.as_ref()
    }

    /// Re-fetch the thumb skin and stretch it to the thumb's size.
    ///
    /// No-op until the thumb has been invalidated again.
    pub fn redraw(&mut self, theme: &dyn Theme, orientation: Orientation) {
        if !self.invalid_track {
            return;
        }
        if let Some(mut skin) = theme.from_skin(&skin_key(orientation, "thumb")) {
            skin.size = self.size;
            self.skin = Some(skin);
        }
        self.invalid_track = false;
    }
}
