//! Pilot: programmatic interaction with a headless scene.
//!
//! The `Pilot` owns a [`Dom`], a [`ResizeManager`] over a [`HeadlessHost`]
//! and a virtual clock. It provides methods to simulate host input (resize,
//! pointer presses, drags, wheel ticks), advance time past the debounce
//! window, and inspect what the scene received.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::time::Instant;

use crate::dom::{Dom, NodeData, NodeId};
use crate::error::Result;
use crate::event::input::{InputEvent, PointerAction, PointerButton, PointerEvent};
use crate::geometry::{Orientation, Size};
use crate::resize::dispatch::resizable_order;
use crate::resize::event::{ResizeEvent, RESIZE};
use crate::resize::host::{HeadlessHost, ResizeSignal};
use crate::resize::manager::{ResizeConfig, ResizeManager};
use crate::widget::Scrollable;

/// Shared handle to a control mounted in the pilot's scene.
pub type WidgetHandle = Rc<RefCell<Scrollable>>;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless scene driver for testing.
///
/// # Examples
///
/// ```ignore
/// use gilt_kit::testing::Pilot;
///
/// let mut pilot = Pilot::new(80, 24);
/// pilot.resize(120, 40);
/// assert!(pilot.settle());
/// ```
pub struct Pilot {
    dom: Dom,
    root: NodeId,
    manager: ResizeManager<HeadlessHost>,
    widgets: Vec<WidgetHandle>,
    now: Instant,
}

impl Pilot {
    /// Create a fullscreen, debounced scene with the given viewport size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, ResizeConfig::new().with_fullscreen(true))
    }

    /// Create a scene driven by a manager with `config`.
    pub fn with_config(width: u16, height: u16, config: ResizeConfig) -> Self {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        let host = HeadlessHost::new(f32::from(width), f32::from(height));
        Self {
            dom,
            root,
            manager: ResizeManager::new(host, Some(root), config),
            widgets: Vec::new(),
            now: Instant::now(),
        }
    }

    // ── Scene ────────────────────────────────────────────────────────

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn manager(&self) -> &ResizeManager<HeadlessHost> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ResizeManager<HeadlessHost> {
        &mut self.manager
    }

    /// Insert `data` under `parent`.
    pub fn add(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId> {
        self.dom.insert_child(parent, data)
    }

    /// Mount `widget` as a resizable node under `parent`.
    ///
    /// On every resize cycle the control's active-axis extent follows the
    /// new size and the control is redrawn. Pointer input is routed to it
    /// while the pointer is over it or dragging its thumb.
    pub fn mount(&mut self, parent: NodeId, name: &str, widget: WidgetHandle) -> Result<NodeId> {
        let (position, size) = {
            let w = widget.borrow();
            (w.position(), Size::new(w.width(), w.height()))
        };
        let data = NodeData::new(name)
            .resizable(true)
            .with_position(position.x, position.y)
            .with_size(size.width, size.height);
        let id = self.dom.insert_child(parent, data)?;

        let handle = widget.clone();
        self.dom.set_handler(id, RESIZE, move |event: &ResizeEvent| {
            let mut w = handle.borrow_mut();
            let invalid = match w.orientation() {
                Orientation::Horizontal => w.set_width(event.data.width),
                Orientation::Vertical => w.set_height(event.data.height),
            };
            if !invalid.is_empty() {
                w.redraw();
            }
        })?;
        self.widgets.push(widget);
        Ok(id)
    }

    /// Names of the resizable nodes in dispatch order.
    pub fn resizable_names(&self) -> Vec<String> {
        resizable_order(&self.dom, self.root)
            .into_iter()
            .filter_map(|id| self.dom.get(id).map(|n| n.name.clone()))
            .collect()
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Feed a host input event. Returns whether anything reacted.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Resize { .. } => match ResizeSignal::from_input(&event) {
                Some(mut signal) => self.manager.on_resize(&mut self.dom, &mut signal, self.now),
                None => false,
            },
            InputEvent::Pointer(pointer) => self.pointer(&pointer),
            InputEvent::Ignored => false,
        }
    }

    /// Simulate a host resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        self.handle_input(InputEvent::Resize { width, height })
    }

    /// Press the primary button at (x, y).
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.handle_input(InputEvent::Pointer(PointerEvent::new(
            PointerAction::Down(PointerButton::Primary),
            x,
            y,
        )))
    }

    /// Drag with the primary button held to (x, y).
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        self.handle_input(InputEvent::Pointer(PointerEvent::new(
            PointerAction::Drag(PointerButton::Primary),
            x,
            y,
        )))
    }

    /// Release the primary button at (x, y).
    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.handle_input(InputEvent::Pointer(PointerEvent::new(
            PointerAction::Up(PointerButton::Primary),
            x,
            y,
        )))
    }

    /// Scroll the wheel by `delta` ticks at (x, y).
    pub fn wheel(&mut self, x: f32, y: f32, delta: f32) -> bool {
        self.handle_input(InputEvent::Pointer(PointerEvent::new(PointerAction::Wheel(delta), x, y)))
    }

    fn pointer(&mut self, event: &PointerEvent) -> bool {
        let dragging = self.widgets.iter().find(|w| w.borrow().drag_anchor().is_some());
        let target = dragging
            .or_else(|| {
                self.widgets.iter().find(|w| {
                    let w = w.borrow();
                    Size::new(w.width(), w.height()).contains(event.local_position(w.position()))
                })
            })
            .cloned();
        match target {
            Some(widget) => widget.borrow_mut().handle_pointer(event),
            None => false,
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// The pilot's virtual clock.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock forward and run a cycle that became due.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.manager.poll(&mut self.dom, self.now)
    }

    /// Advance past the debounce window so a pending cycle runs.
    pub fn settle(&mut self) -> bool {
        let delay = self.manager.config().debounce_delay;
        self.advance(delay)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resize::event::ResizeData;
    use crate::resize::host::HostWindow;
    use crate::resize::manager::ResizeState;
    use crate::theme::SkinTheme;

    fn slider(width: f32) -> WidgetHandle {
        let theme = Rc::new(SkinTheme::slider_defaults());
        Rc::new(RefCell::new(
            Scrollable::new(Orientation::Horizontal, theme).with_size(width, 20.0),
        ))
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_creates_attached_manager() {
        let pilot = Pilot::new(80, 24);
        assert!(pilot.manager().host().is_listening());
        assert_eq!(pilot.manager().state(), ResizeState::Idle);
        assert_eq!(pilot.dom().len(), 1);
        assert_eq!(pilot.manager().root(), Some(pilot.root()));
    }

    #[test]
    fn with_config_preserves_settings() {
        let config = ResizeConfig::new()
            .with_fullscreen(true)
            .with_debounce_delay(Duration::from_millis(50));
        let pilot = Pilot::with_config(80, 24, config);
        assert_eq!(pilot.manager().config().debounce_delay, Duration::from_millis(50));
    }

    // ── Resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_waits_for_settle() {
        let mut pilot = Pilot::new(80, 24);
        assert!(pilot.resize(100, 30));
        assert_eq!(pilot.manager().state(), ResizeState::PendingDebounce);
        assert!(!pilot.advance(Duration::from_millis(199)));
        assert!(pilot.advance(Duration::from_millis(1)));
        assert_eq!(pilot.manager().last_size(), Some(ResizeData::new(100.0, 30.0)));
    }

    #[test]
    fn ignored_input_does_nothing() {
        let mut pilot = Pilot::new(80, 24);
        assert!(!pilot.handle_input(InputEvent::Ignored));
        assert!(!pilot.settle());
    }

    #[test]
    fn fixed_size_pilot_ignores_resize() {
        let mut pilot = Pilot::with_config(80, 24, ResizeConfig::new());
        assert!(!pilot.resize(100, 30));
        assert!(!pilot.settle());
        assert_eq!(pilot.manager().cycles(), 0);
    }

    #[test]
    fn resizable_names_in_dispatch_order() {
        let mut pilot = Pilot::new(80, 24);
        let root = pilot.root();
        pilot.add(root, NodeData::new("first").resizable(true)).unwrap();
        pilot.add(root, NodeData::new("plain")).unwrap();
        pilot.add(root, NodeData::new("last").resizable(true)).unwrap();
        assert_eq!(pilot.resizable_names(), vec!["last", "first"]);
    }

    // ── Mounted controls ─────────────────────────────────────────────

    #[test]
    fn mounted_control_follows_resize() {
        let mut pilot = Pilot::new(200, 20);
        let root = pilot.root();
        let bar = slider(200.0);
        pilot.mount(root, "bar", bar.clone()).unwrap();
        assert!(bar.borrow_mut().redraw());

        pilot.resize(120, 20);
        pilot.settle();
        let bar = bar.borrow();
        assert_eq!(bar.width(), 120.0);
        assert!(!bar.needs_redraw());
        assert_eq!(bar.track_skin().map(|s| s.width()), Some(120.0));
    }

    #[test]
    fn drag_routes_to_control_under_pointer() {
        let mut pilot = Pilot::new(200, 20);
        let root = pilot.root();
        let bar = slider(200.0);
        pilot.mount(root, "bar", bar.clone()).unwrap();
        bar.borrow_mut().redraw();

        assert!(pilot.press(5.0, 5.0));
        assert!(pilot.drag_to(45.0, 5.0));
        assert_eq!(bar.borrow().thumb_position().map(|p| p.x), Some(40.0));
        // Still routed while dragging outside the control.
        assert!(pilot.drag_to(55.0, 50.0));
        assert_eq!(bar.borrow().thumb_position().map(|p| p.x), Some(50.0));
        assert!(pilot.release(55.0, 50.0));
        assert!(bar.borrow().drag_anchor().is_none());
    }

    #[test]
    fn pointer_outside_controls_is_ignored() {
        let mut pilot = Pilot::new(200, 20);
        let root = pilot.root();
        pilot.mount(root, "bar", slider(200.0)).unwrap();
        assert!(!pilot.press(5.0, 80.0));
        assert!(!pilot.wheel(300.0, 5.0, 1.0));
    }

    #[test]
    fn wheel_scrolls_control() {
        let mut pilot = Pilot::new(200, 20);
        let root = pilot.root();
        let bar = slider(200.0);
        pilot.mount(root, "bar", bar.clone()).unwrap();
        bar.borrow_mut().move_thumb(50.0, 0.0);

        assert!(pilot.wheel(10.0, 10.0, 1.0));
        assert_eq!(bar.borrow().thumb_position().map(|p| p.x), Some(40.0));
    }
}
