//! Debounced resize propagation.
//!
//! [`ResizeManager`] listens to host resize signals, coalesces bursts of
//! them behind a single restartable timer and then runs one dispatch cycle:
//! measure, walk the scene graph from the render root notifying every
//! resizable node, emit a toolkit-wide `"resize"`.
//!
//! The manager is driven either synchronously ([`ResizeManager::on_resize`]
//! plus [`ResizeManager::poll`] from the host's event loop) or by awaiting
//! [`ResizeManager::run`] on a signal channel.

use std::future;
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

use super::dispatch::{dispatch_event, process_resizable};
use super::event::{ResizeData, ResizeEvent, StopSignal, RESIZE};
use super::host::{ClientBox, HostWindow, ResizeSignal};
use crate::dom::{Dom, NodeId};
use crate::event::emitter::{Emitter, ListenerId};

/// Quiet period after the last resize signal before a cycle runs.
pub const RESIZE_DONE_TIMEOUT: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// ResizeConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`ResizeManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Mark accepted signals as handled so the host skips its default action.
    pub auto_prevent_default: bool,
    /// Measure the host viewport instead of a mounted element.
    pub fullscreen: bool,
    /// Coalesce bursts of signals into one cycle.
    pub debounce: bool,
    /// Quiet period used when debouncing.
    pub debounce_delay: Duration,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            auto_prevent_default: true,
            fullscreen: false,
            debounce: true,
            debounce_delay: RESIZE_DONE_TIMEOUT,
        }
    }
}

impl ResizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_prevent_default(mut self, enabled: bool) -> Self {
        self.auto_prevent_default = enabled;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_debounce(mut self, enabled: bool) -> Self {
        self.debounce = enabled;
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }
}

// ---------------------------------------------------------------------------
// ResizeManager
// ---------------------------------------------------------------------------

/// Where the manager is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeState {
    Idle,
    PendingDebounce,
    Dispatching,
}

/// Routes host resize signals to the scene graph.
pub struct ResizeManager<H: HostWindow> {
    host: H,
    root: Option<NodeId>,
    config: ResizeConfig,
    element: Option<Box<dyn ClientBox>>,
    state: ResizeState,
    deadline: Option<Instant>,
    stop: StopSignal,
    size_data: Option<ResizeData>,
    emitter: Emitter<ResizeEvent>,
    cycles: u64,
}

impl<H: HostWindow> ResizeManager<H> {
    /// Create a manager for the scene rooted at `root` and attach to `host`.
    pub fn new(mut host: H, root: Option<NodeId>, config: ResizeConfig) -> Self {
        host.attach_resize_listener();
        Self {
            host,
            root,
            config,
            element: None,
            state: ResizeState::Idle,
            deadline: None,
            stop: StopSignal::new(),
            size_data: None,
            emitter: Emitter::new(),
            cycles: 0,
        }
    }

    /// Measure `element` instead of a fixed host (builder).
    pub fn with_element(mut self, element: impl ClientBox + 'static) -> Self {
        self.set_element(element);
        self
    }

    pub fn set_element(&mut self, element: impl ClientBox + 'static) {
        self.element = Some(Box::new(element));
    }

    pub fn clear_element(&mut self) {
        self.element = None;
    }

    /// Change the render root walked by each cycle.
    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    /// When the pending cycle fires, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Size data of the most recent cycle.
    pub fn last_size(&self) -> Option<ResizeData> {
        self.size_data
    }

    /// Number of completed dispatch cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Subscribe to toolkit-wide notifications (e.g. [`RESIZE`]).
    pub fn on(&mut self, name: impl Into<String>, listener: impl FnMut(&ResizeEvent) + 'static) -> ListenerId {
        self.emitter.on(name, listener)
    }

    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        self.emitter.off(name, id)
    }

    /// Handle a raw host resize signal received at `now`.
    ///
    /// Without an element or fullscreen mode the host is assumed to be fixed
    /// size and the signal is ignored. Returns whether it was accepted.
    pub fn on_resize(&mut self, dom: &mut Dom, signal: &mut ResizeSignal, now: Instant) -> bool {
        if !self.host.is_listening() {
            return false;
        }
        if self.element.is_none() && !self.config.fullscreen {
            debug!("resize ignored: no element and not fullscreen");
            return false;
        }
        self.host.observe(signal);
        if self.config.auto_prevent_default {
            signal.prevent_default();
        }

        if self.config.debounce {
            if self.deadline.is_some() {
                trace!("resize debounce restarted");
            }
            self.deadline = Some(now + self.config.debounce_delay);
            self.state = ResizeState::PendingDebounce;
        } else {
            self.dispatch(dom);
        }
        true
    }

    /// Run the pending cycle if its deadline has passed. Returns whether a
    /// cycle ran.
    pub fn poll(&mut self, dom: &mut Dom, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.dispatch(dom);
                true
            }
            _ => false,
        }
    }

    /// Run the pending cycle immediately, ignoring its deadline.
    pub fn flush(&mut self, dom: &mut Dom) -> bool {
        if self.deadline.take().is_none() {
            return false;
        }
        self.dispatch(dom);
        true
    }

    fn measure(&self) -> ResizeData {
        match (&self.element, self.config.fullscreen) {
            (Some(element), false) => element.client_size().into(),
            _ => self.host.viewport().into(),
        }
    }

    fn dispatch(&mut self, dom: &mut Dom) {
        self.state = ResizeState::Dispatching;
        self.stop.reset();

        let data = self.measure();
        self.size_data = Some(data);
        let event = ResizeEvent::new(data, RESIZE, self.stop.clone());

        let mut delivered = 0usize;
        process_resizable(dom, self.root, &mut |dom: &mut Dom, node: NodeId| {
            if dispatch_event(dom, node, RESIZE, &event) {
                delivered += 1;
            }
        });
        self.emitter.emit(RESIZE, &event);

        self.cycles += 1;
        self.state = ResizeState::Idle;
        debug!(
            "resize cycle {} dispatched {}x{} to {delivered} nodes{}",
            self.cycles,
            data.width,
            data.height,
            if event.is_stopped() { " (stopped)" } else { "" }
        );
    }

    /// Drive the manager from a signal channel until it closes.
    ///
    /// A cycle still pending when the channel closes is flushed. Returns the
    /// number of cycles dispatched by this call.
    pub async fn run(&mut self, dom: &mut Dom, signals: &mut UnboundedReceiver<ResizeSignal>) -> u64 {
        let start = self.cycles;
        loop {
            let deadline = self.deadline;
            tokio::select! {
                received = signals.recv() => match received {
                    Some(mut signal) => {
                        self.on_resize(dom, &mut signal, Instant::now());
                    }
                    None => {
                        self.flush(dom);
                        break;
                    }
                },
                _ = wait_until(deadline) => {
                    self.poll(dom, Instant::now());
                }
            }
        }
        self.cycles - start
    }

    /// Detach from the host and release everything the manager holds.
    ///
    /// Cancels a pending cycle. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.host.is_listening() {
            self.host.detach_resize_listener();
        }
        self.emitter.remove_all_listeners();
        self.root = None;
        self.size_data = None;
        self.element = None;
        self.deadline = None;
        self.state = ResizeState::Idle;
    }

    /// Tear down and hand the host back.
    pub fn into_host(mut self) -> H {
        self.destroy();
        self.host
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}

impl<H: HostWindow + std::fmt::Debug> std::fmt::Debug for ResizeManager<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeManager")
            .field("host", &self.host)
            .field("root", &self.root)
            .field("config", &self.config)
            .field("has_element", &self.element.is_some())
            .field("state", &self.state)
            .field("deadline", &self.deadline)
            .field("size_data", &self.size_data)
            .field("emitter", &self.emitter)
            .field("cycles", &self.cycles)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
