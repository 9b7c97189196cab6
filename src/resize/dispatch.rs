//! Resize traversal and per-node delivery.
//!
//! Unlike pointer hit-testing, a resize can affect any component, so every
//! visible node is checked independently: a non-resizable parent does not
//! hide resizable descendants. Invisible subtrees are skipped entirely.

use log::trace;

use super::event::ResizeEvent;
use crate::dom::{Dom, NodeId};

/// Depth-first walk calling `f` on every visible resizable node.
///
/// A node is handled before its children (pre-order) and children are
/// visited last-first. The callback may mutate the scene graph; a node's
/// children are read after its callback returns.
///
/// Returns `false` when `node` is absent, stale or invisible.
pub fn process_resizable<F>(dom: &mut Dom, node: Option<NodeId>, f: &mut F) -> bool
where
    F: FnMut(&mut Dom, NodeId),
{
    let Some(id) = node else {
        return false;
    };
    let Some(data) = dom.get(id) else {
        return false;
    };
    if !data.visible {
        return false;
    }

    if data.resizable {
        f(dom, id);
    }

    let children = dom.children(id).to_vec();
    for &child in children.iter().rev() {
        process_resizable(dom, Some(child), f);
    }
    true
}

/// The order in which [`process_resizable`] would visit resizable nodes.
pub fn resizable_order(dom: &Dom, root: NodeId) -> Vec<NodeId> {
    fn walk(dom: &Dom, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(data) = dom.get(id) else { return };
        if !data.visible {
            return;
        }
        if data.resizable {
            out.push(id);
        }
        for &child in dom.children(id).iter().rev() {
            walk(dom, child, out);
        }
    }

    let mut out = Vec::new();
    walk(dom, root, &mut out);
    out
}

/// Deliver `event` to `node` under `name`.
///
/// Does nothing once the cycle has been stopped. Otherwise the node's
/// listeners run first, then the node's own handler for `name`, if it has
/// one. Returns whether the event was delivered.
pub fn dispatch_event(dom: &mut Dom, node: NodeId, name: &str, event: &ResizeEvent) -> bool {
    if event.is_stopped() {
        trace!("{name} suppressed for {node:?}: propagation stopped");
        return false;
    }
    let event = event.for_target(node);
    let listeners = dom.emit(node, name, &event);
    let handled = dom.call_handler(node, name, &event);
    trace!("{name} delivered to {node:?} ({listeners} listeners, handler: {handled})");
    true
}

// ===========================================================================
// Tests
// ===========================================================================
