//! Resize payloads: size data, cancellation flag, per-node event.
//!
//! One [`ResizeData`] is computed per dispatch cycle and never changes during
//! it. Each node receives its own [`ResizeEvent`] carrying that data, the
//! node as target, and a [`StopSignal`] shared by the whole cycle. Calling
//! [`ResizeEvent::stop_propagation`] suppresses every node visited *after*
//! the current one; nodes already notified are unaffected.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::NodeId;
use crate::geometry::Size;

/// Name of the resize notification, both per node and toolkit-wide.
pub const RESIZE: &str = "resize";

/// New host dimensions for one dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeData {
    pub width: f32,
    pub height: f32,
}

impl ResizeData {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for ResizeData {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Cycle-wide cancellation flag, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }

    /// Clear the flag at the start of a new cycle.
    pub fn reset(&self) {
        self.0.set(false);
    }
}

/// The event delivered to a node (or to toolkit-wide subscribers).
#[derive(Debug, Clone)]
pub struct ResizeEvent {
    /// Size data for the whole cycle.
    pub data: ResizeData,
    /// The node being notified. `None` for the toolkit-wide notification.
    pub target: Option<NodeId>,
    /// Event name, e.g. [`RESIZE`].
    pub name: &'static str,
    stop: StopSignal,
}

impl ResizeEvent {
    pub fn new(data: ResizeData, name: &'static str, stop: StopSignal) -> Self {
        Self {
            data,
            target: None,
            name,
            stop,
        }
    }

    /// Same cycle, retargeted at `node`.
    pub fn for_target(&self, node: NodeId) -> Self {
        Self {
            target: Some(node),
            ..self.clone()
        }
    }

    /// Suppress delivery to every node visited later in this cycle.
    pub fn stop_propagation(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

/// The resize-handler capability a node may expose under an event name.
///
/// Invoked after the node's generic listeners. Implemented for every
/// `FnMut(&ResizeEvent)` closure.
pub trait ResizeHandler {
    fn handle(&mut self, event: &ResizeEvent);
}

impl<F> ResizeHandler for F
where
    F: FnMut(&ResizeEvent),
{
    fn handle(&mut self, event: &ResizeEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_signal_is_shared_between_clones() {
        let stop = StopSignal::new();
        let event = ResizeEvent::new(ResizeData::new(80.0, 24.0), RESIZE, stop.clone());
        assert!(!stop.is_stopped());

        event.stop_propagation();
        assert!(stop.is_stopped());
        assert!(event.is_stopped());

        stop.reset();
        assert!(!event.is_stopped());
    }

    #[test]
    fn for_target_keeps_cycle_state() {
        let stop = StopSignal::new();
        let base = ResizeEvent::new(ResizeData::new(10.0, 20.0), RESIZE, stop);
        let mut sm = slotmap::SlotMap::<NodeId, ()>::with_key();
        let node = sm.insert(());

        let targeted = base.for_target(node);
        assert_eq!(targeted.target, Some(node));
        assert_eq!(targeted.data, base.data);

        targeted.stop_propagation();
        assert!(base.is_stopped());
    }

    #[test]
    fn closures_are_handlers() {
        let mut count = 0;
        {
            let mut handler = |_: &ResizeEvent| count += 1;
            let ev = ResizeEvent::new(ResizeData::default(), RESIZE, StopSignal::new());
            ResizeHandler::handle(&mut handler, &ev);
            ResizeHandler::handle(&mut handler, &ev);
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn resize_data_from_size() {
        let data = ResizeData::from(Size::new(640.0, 480.0));
        assert_eq!(data, ResizeData::new(640.0, 480.0));
        assert_eq!(data.size(), Size::new(640.0, 480.0));
    }
}
