//! Host windowing: resize signals, viewport and element client boxes.
//!
//! The resize manager never talks to a window system directly. It is handed
//! a [`HostWindow`] at construction and, optionally, the [`ClientBox`] of the
//! element the application is mounted in.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::error::Result;
use crate::event::input::InputEvent;
use crate::geometry::Size;

// ---------------------------------------------------------------------------
// ResizeSignal
// ---------------------------------------------------------------------------

/// A raw resize notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeSignal {
    /// New size, when the host reports it with the signal.
    pub size: Option<Size>,
    default_prevented: bool,
}

impl ResizeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal carrying the host's new size.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Some(Size::new(width, height)),
            default_prevented: false,
        }
    }

    /// Ask the host to skip its own handling of this signal.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Extract a resize signal from a host input event.
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::Resize { width, height } => {
                Some(Self::sized(f32::from(width), f32::from(height)))
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// HostWindow
// ---------------------------------------------------------------------------

/// The window the toolkit runs in.
pub trait HostWindow {
    /// Current viewport size, used in fullscreen mode.
    fn viewport(&self) -> Size;

    /// Start delivering resize signals.
    fn attach_resize_listener(&mut self);

    /// Stop delivering resize signals.
    fn detach_resize_listener(&mut self);

    /// Whether a resize listener is attached.
    fn is_listening(&self) -> bool;

    /// Called for every signal before it is processed, so hosts that report
    /// the new size with the signal can cache it.
    fn observe(&mut self, _signal: &ResizeSignal) {}
}

/// In-memory host for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    viewport: Size,
    listening: bool,
}

impl HeadlessHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            listening: false,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }
}

impl HostWindow for HeadlessHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn attach_resize_listener(&mut self) {
        self.listening = true;
    }

    fn detach_resize_listener(&mut self) {
        self.listening = false;
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn observe(&mut self, signal: &ResizeSignal) {
        if let Some(size) = signal.size {
            self.viewport = size;
        }
    }
}

/// The terminal, via crossterm. The viewport is measured in cells.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    viewport: Size,
    listening: bool,
}

impl TerminalHost {
    /// Query the terminal's current size.
    pub fn new() -> Result<Self> {
        let viewport = Size::from(crossterm::terminal::size()?);
        Ok(Self {
            viewport,
            listening: false,
        })
    }
}

impl HostWindow for TerminalHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn attach_resize_listener(&mut self) {
        debug!("terminal resize listener attached");
        self.listening = true;
    }

    fn detach_resize_listener(&mut self) {
        debug!("terminal resize listener detached");
        self.listening = false;
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn observe(&mut self, signal: &ResizeSignal) {
        if let Some(size) = signal.size {
            self.viewport = size;
        }
    }
}

// ---------------------------------------------------------------------------
// ClientBox
// ---------------------------------------------------------------------------

/// An element with a measurable client area.
pub trait ClientBox {
    fn client_size(&self) -> Size;
}

impl ClientBox for Size {
    fn client_size(&self) -> Size {
        *self
    }
}

/// Shared handle to an element whose size the host updates in place.
#[derive(Debug, Clone, Default)]
pub struct ElementBox(Rc<Cell<Size>>);

impl ElementBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Rc::new(Cell::new(Size::new(width, height))))
    }

    pub fn set(&self, width: f32, height: f32) {
        self.0.set(Size::new(width, height));
    }
}

impl ClientBox for ElementBox {
    fn client_size(&self) -> Size {
        self.0.get()
    }
}
