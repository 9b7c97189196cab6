//! Scroll bar / slider control.
//!
//! [`Scrollable`] owns a [`Thumb`] that can be dragged or wheeled along one
//! axis. The thumb position on that axis is always kept inside
//! `[0, extent - thumb_extent]`; the other axis is never read or written by
//! the clamp. Track and progress skins come from a [`Theme`] and are only
//! (re)installed by [`Scrollable::redraw`], so several property changes in a
//! row cost a single skin update.

use std::fmt;
use std::rc::Rc;

use log::trace;

use super::thumb::Thumb;
use crate::event::input::{PointerAction, PointerButton, PointerEvent};
use crate::geometry::{Orientation, Point, Size};
use crate::theme::{skin_key, Skin, Theme};

/// Pixels moved per wheel tick of delta 1.
pub const DEFAULT_SCROLL_DELTA: f32 = 10.0;

// ---------------------------------------------------------------------------
// Mode / Invalidation
// ---------------------------------------------------------------------------

/// Interaction mode of the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Desktop,
    Mobile,
}

/// What a mutation marked as needing a redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "the control must be redrawn for the change to become visible"]
pub struct Invalidation {
    pub track: bool,
    pub thumb: bool,
}

impl Invalidation {
    pub const NONE: Invalidation = Invalidation {
        track: false,
        thumb: false,
    };

    pub fn is_empty(self) -> bool {
        !self.track && !self.thumb
    }
}

// ---------------------------------------------------------------------------
// Scrollable
// ---------------------------------------------------------------------------

type ThumbMovedHook = Box<dyn FnMut(f32, f32)>;

/// A draggable scroll bar or slider.
pub struct Scrollable {
    orientation: Orientation,
    mode: Mode,
    inverse: bool,
    scroll_delta: f32,
    size: Size,
    position: Point,
    thumb: Option<Thumb>,
    track_skin: Option<Skin>,
    progress_skin: Option<Skin>,
    drag_anchor: Option<Point>,
    invalid_track: bool,
    theme: Rc<dyn Theme>,
    thumb_moved: Option<ThumbMovedHook>,
}

impl Scrollable {
    /// Create a control with a thumb sized from the theme.
    pub fn new(orientation: Orientation, theme: Rc<dyn Theme>) -> Self {
        let thumb = Thumb::from_theme(theme.as_ref(), orientation);
        Self {
            orientation,
            mode: Mode::default(),
            inverse: false,
            scroll_delta: DEFAULT_SCROLL_DELTA,
            size: Size::ZERO,
            position: Point::ZERO,
            thumb: Some(thumb),
            track_skin: None,
            progress_skin: None,
            drag_anchor: None,
            invalid_track: true,
            theme,
            thumb_moved: None,
        }
    }

    /// Replace the default thumb (builder).
    pub fn with_thumb(mut self, thumb: Thumb) -> Self {
        self.thumb = Some(thumb);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scroll_delta(mut self, scroll_delta: f32) -> Self {
        self.scroll_delta = scroll_delta;
        self
    }

    /// Set the container extent (builder).
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the initial inverse flag without mirroring the thumb (builder).
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Place the container in its parent's space (builder).
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    // -- accessors -----------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    pub fn set_scroll_delta(&mut self, scroll_delta: f32) {
        self.scroll_delta = scroll_delta;
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }

    pub fn thumb(&self) -> Option<&Thumb> {
        self.thumb.as_ref()
    }

    /// Detach the thumb. Without one the control ignores input and redraws.
    pub fn take_thumb(&mut self) -> Option<Thumb> {
        self.thumb.take()
    }

    pub fn thumb_position(&self) -> Option<Point> {
        self.thumb.as_ref().map(|t| t.position)
    }

    pub fn track_skin(&self) -> Option<&Skin> {
        self.track_skin.as_ref()
    }

    pub fn progress_skin(&self) -> Option<&Skin> {
        self.progress_skin.as_ref()
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    /// Whether the track waits for the next [`redraw`](Self::redraw).
    pub fn needs_redraw(&self) -> bool {
        self.invalid_track
    }

    fn thumb_size(&self) -> Size {
        self.thumb.as_ref().map_or(Size::ZERO, |t| t.size)
    }

    /// Largest x the thumb can take.
    pub fn max_width(&self) -> f32 {
        self.size.width - self.thumb_size().width
    }

    /// Largest y the thumb can take.
    pub fn max_height(&self) -> f32 {
        self.size.height - self.thumb_size().height
    }

    fn max_extent(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal => self.max_width(),
            Orientation::Vertical => self.max_height(),
        }
    }

    /// Fraction of the range travelled on the active axis, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let max = self.max_extent();
        match self.thumb_position() {
            Some(pos) if max > 0.0 => pos.along(self.orientation) / max,
            _ => 0.0,
        }
    }

    // -- bounded axis ---------------------------------------------------------

    /// Move the thumb within its bounds.
    ///
    /// Only the coordinate on the active axis is considered. Returns `true`
    /// if the thumb actually moved; a NaN coordinate, a missing thumb or a
    /// clamped value equal to the current one leave everything untouched.
    pub fn move_thumb(&mut self, x: f32, y: f32) -> bool {
        let axis = self.orientation;
        let proposed = Point::new(x, y).along(axis);
        if proposed.is_nan() {
            return false;
        }
        let clamped = proposed.min(self.max_extent()).max(0.0);

        let Some(thumb) = self.thumb.as_mut() else {
            return false;
        };
        if clamped == thumb.position.along(axis) {
            return false;
        }
        thumb.position.set_along(axis, clamped);
        trace!("thumb moved to {clamped} on {axis} axis");
        self.refresh_progress_skin();
        true
    }

    /// Recompute the progress skin from the thumb position.
    ///
    /// The progress spans from the start to the thumb centre, or from the
    /// thumb centre to the far edge when inverse. Its cross-axis extent
    /// follows the track skin.
    pub fn refresh_progress_skin(&mut self) {
        let axis = self.orientation;
        let (Some(progress), Some(thumb)) = (self.progress_skin.as_mut(), self.thumb.as_ref()) else {
            return;
        };
        let progress_pos = thumb.position.along(axis) + thumb.size.along(axis) / 2.0;

        if self.inverse {
            progress.position.set_along(axis, progress_pos);
            progress
                .size
                .set_along(axis, self.size.along(axis) - progress_pos);
        } else {
            progress.position.set_along(axis, 0.0);
            progress.size.set_along(axis, progress_pos);
        }

        if let Some(track) = self.track_skin.as_ref() {
            let cross = axis.cross();
            progress.size.set_along(cross, track.size.along(cross));
        }
    }

    // -- pointer / wheel ------------------------------------------------------

    /// Record the drag anchor, in container-local coordinates.
    pub fn on_drag_start(&mut self, local: Point) {
        self.drag_anchor = Some(local);
    }

    /// Drag the thumb by the pointer's travel since the anchor.
    ///
    /// The anchor only follows the pointer when the thumb moved, so a thumb
    /// pinned at a bound does not drift away from the pointer.
    pub fn on_drag_move(&mut self, local: Point) -> bool {
        let (Some(anchor), Some(current)) = (self.drag_anchor, self.thumb_position()) else {
            return false;
        };
        let candidate = current + (local - anchor);
        if !self.move_thumb(candidate.x, candidate.y) {
            return false;
        }
        self.on_thumb_moved(candidate.x, candidate.y);
        self.drag_anchor = Some(local);
        true
    }

    pub fn on_drag_end(&mut self) {
        self.drag_anchor = None;
    }

    /// Scroll by `delta` wheel ticks; positive deltas move towards zero.
    pub fn on_wheel(&mut self, delta: f32) -> bool {
        let Some(current) = self.thumb_position() else {
            return false;
        };
        let step = delta * self.scroll_delta;
        let (x, y) = (current.x - step, current.y - step);
        if !self.move_thumb(x, y) {
            return false;
        }
        self.on_thumb_moved(x, y);
        true
    }

    /// Called after a drag or wheel moved the thumb, with the position that
    /// was scrolled to (before clamping). The coordinate on the inactive axis
    /// is meaningless.
    pub fn on_thumb_moved(&mut self, x: f32, y: f32) {
        if let Some(hook) = self.thumb_moved.as_mut() {
            hook(x, y);
        }
    }

    /// Install the thumb-moved hook, replacing any previous one.
    pub fn set_on_thumb_moved(&mut self, hook: impl FnMut(f32, f32) + 'static) {
        self.thumb_moved = Some(Box::new(hook));
    }

    /// Route a host pointer event to the drag and wheel handlers.
    ///
    /// Returns `true` if the event changed the control's state.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let local = event.local_position(self.position);
        match event.action {
            PointerAction::Down(PointerButton::Primary) => {
                self.on_drag_start(local);
                true
            }
            PointerAction::Up(_) => {
                let was_dragging = self.drag_anchor.is_some();
                self.on_drag_end();
                was_dragging
            }
            PointerAction::Drag(PointerButton::Primary) | PointerAction::Moved => {
                self.on_drag_move(local)
            }
            PointerAction::Wheel(delta) => self.on_wheel(delta),
            _ => false,
        }
    }

    // -- dimensions / invalidation --------------------------------------------

    fn invalidate(&mut self) -> Invalidation {
        self.invalid_track = true;
        let thumb = match self.thumb.as_mut() {
            Some(thumb) => {
                thumb.invalidate();
                true
            }
            None => false,
        };
        Invalidation { track: true, thumb }
    }

    /// Pull the thumb back inside a range that shrank.
    fn reclamp_thumb(&mut self) {
        if let Some(current) = self.thumb_position() {
            self.move_thumb(current.x, current.y);
        }
    }

    /// Set the container width; the thumb is clamped to the new range.
    pub fn set_width(&mut self, width: f32) -> Invalidation {
        self.size.width = width;
        self.reclamp_thumb();
        self.invalidate()
    }

    /// Set the container height; the thumb is clamped to the new range.
    pub fn set_height(&mut self, height: f32) -> Invalidation {
        self.size.height = height;
        self.reclamp_thumb();
        self.invalidate()
    }

    /// Flip the progress direction.
    ///
    /// The thumb box is mirrored within the track: its start moves to
    /// `max - position` on the active axis, so its far edge lands where
    /// `extent - position` puts it. Flipping twice restores the original
    /// coordinate. Setting the current value is a no-op.
    pub fn set_inverse(&mut self, inverse: bool) -> Invalidation {
        if inverse == self.inverse {
            return Invalidation::NONE;
        }
        self.inverse = inverse;

        if let Some(mut target) = self.thumb_position() {
            let axis = self.orientation;
            target.set_along(axis, self.max_extent() - target.along(axis));
            self.move_thumb(target.x, target.y);
        }
        self.invalidate()
    }

    // -- skins ---------------------------------------------------------------

    fn show_track(&mut self, skin: Skin) {
        if self.track_skin.as_ref().is_some_and(|s| s.key == skin.key) {
            return;
        }
        self.track_skin = Some(skin);
        if self.progress_skin.is_some() {
            self.refresh_progress_skin();
        }
    }

    fn show_progress(&mut self, mut skin: Skin) {
        if self.progress_skin.as_ref().is_some_and(|s| s.key == skin.key) {
            return;
        }
        skin.size = Size::ZERO;
        self.progress_skin = Some(skin);
        if self.track_skin.is_some() {
            self.refresh_progress_skin();
        }
    }

    /// Apply pending invalidations.
    ///
    /// Installs the orientation's progress and track skins, stretches the
    /// track along the primary axis and redraws an invalid thumb. Returns
    /// `true` if the track was redrawn; the track stays invalid while the
    /// theme has no track skin.
    pub fn redraw(&mut self) -> bool {
        let axis = self.orientation;
        if let Some(thumb) = self.thumb.as_mut() {
            thumb.redraw(self.theme.as_ref(), axis);
        }
        if !self.invalid_track || self.thumb.is_none() {
            return false;
        }

        if let Some(skin) = self.theme.from_skin(&skin_key(axis, "progress")) {
            self.show_progress(skin);
        }
        if let Some(skin) = self.theme.from_skin(&skin_key(axis, "track")) {
            self.show_track(skin);
        }

        let extent = self.size.along(axis);
        match self.track_skin.as_mut() {
            Some(track) => {
                track.size.set_along(axis, extent);
                self.invalid_track = false;
                trace!("redrew {axis} track at extent {extent}");
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Scrollable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollable")
            .field("orientation", &self.orientation)
            .field("mode", &self.mode)
            .field("inverse", &self.inverse)
            .field("scroll_delta", &self.scroll_delta)
            .field("size", &self.size)
            .field("thumb", &self.thumb)
            .field("track_skin", &self.track_skin)
            .field("progress_skin", &self.progress_skin)
            .field("drag_anchor", &self.drag_anchor)
            .field("invalid_track", &self.invalid_track)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
