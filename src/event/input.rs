//! Host input events, decoupled from crossterm.
//!
//! Only the input the controls in this crate react to is modelled: pointer
//! presses, drags and wheel ticks, plus host resize signals. Crossterm events
//! are converted via `From` so the rest of the crate never matches on
//! crossterm types directly.

use crate::geometry::Point;

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(PointerButton),
    Up(PointerButton),
    Drag(PointerButton),
    Moved,
    /// Wheel tick. Positive deltas scroll towards the start of the range.
    Wheel(f32),
}

/// A pointer event at a position in host (global) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point::new(x, y),
        }
    }

    /// Position relative to a container whose origin sits at `origin`.
    pub fn local_position(&self, origin: Point) -> Point {
        self.position - origin
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    /// The host window changed size.
    Resize { width: u16, height: u16 },
    /// Anything this crate does not react to (keys, focus, paste).
    Ignored,
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_button(b: crossterm::event::MouseButton) -> PointerButton {
    match b {
        crossterm::event::MouseButton::Left => PointerButton::Primary,
        crossterm::event::MouseButton::Right => PointerButton::Secondary,
        crossterm::event::MouseButton::Middle => PointerButton::Middle,
    }
}

impl From<crossterm::event::MouseEvent> for PointerEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;

        let action = match me.kind {
            MouseEventKind::Down(b) => PointerAction::Down(convert_button(b)),
            MouseEventKind::Up(b) => PointerAction::Up(convert_button(b)),
            MouseEventKind::Drag(b) => PointerAction::Drag(convert_button(b)),
            MouseEventKind::Moved => PointerAction::Moved,
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => PointerAction::Wheel(1.0),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => PointerAction::Wheel(-1.0),
        };
        PointerEvent::new(action, f32::from(me.column), f32::from(me.row))
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Mouse(me) => InputEvent::Pointer(me.into()),
            crossterm::event::Event::Resize(width, height) => InputEvent::Resize { width, height },
            _ => InputEvent::Ignored,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
