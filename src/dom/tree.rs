//! Scene-graph arena: insert, remove, children, per-node notifications.

use std::collections::{HashMap, VecDeque};

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::error::{Error, Result};
use crate::event::emitter::{Emitter, ListenerId};
use crate::resize::event::{ResizeEvent, ResizeHandler};

const EMPTY_CHILDREN: &[NodeId] = &[];

/// The scene graph, backed by a slotmap arena.
///
/// Parent/child relationships, listener emitters and named handlers all live
/// in secondary maps keyed by [`NodeId`], so removing a subtree drops
/// everything attached to it.
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    listeners: SecondaryMap<NodeId, Emitter<ResizeEvent>>,
    handlers: SecondaryMap<NodeId, HashMap<String, Box<dyn ResizeHandler>>>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty scene graph.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            listeners: SecondaryMap::new(),
            handlers: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless node. The first one inserted becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Append a node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId> {
        let index = self.children(parent).len();
        self.insert_child_at(parent, index, data)
    }

    /// Insert a node among `parent`'s children at `index` (clamped to the
    /// child count). Index 0 places it behind its siblings.
    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, data: NodeData) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::NodeNotFound(parent));
        }
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            let index = index.min(siblings.len());
            siblings.insert(index, id);
        }
        Ok(id)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed node's data, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut queue = VecDeque::from([id]);
        let mut removed = None;
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            self.listeners.remove(current);
            self.handlers.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }
        removed
    }

    /// The parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children in insertion order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The render root, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    // -- notifications -------------------------------------------------------

    /// Subscribe to the named notification on `id`.
    pub fn on(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        listener: impl FnMut(&ResizeEvent) + 'static,
    ) -> Result<ListenerId> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id));
        }
        let emitter = self
            .listeners
            .entry(id)
            .map(|e| e.or_default())
            .ok_or(Error::NodeNotFound(id))?;
        Ok(emitter.on(name, listener))
    }

    /// Unsubscribe a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: NodeId, name: &str, listener: ListenerId) -> bool {
        self.listeners
            .get_mut(id)
            .is_some_and(|emitter| emitter.off(name, listener))
    }

    /// Emit the named notification on `id`. Returns the number of listeners run.
    pub fn emit(&mut self, id: NodeId, name: &str, event: &ResizeEvent) -> usize {
        self.listeners
            .get_mut(id)
            .map_or(0, |emitter| emitter.emit(name, event))
    }

    /// Install the node's own handler for `name`, replacing any previous one.
    pub fn set_handler(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        handler: impl ResizeHandler + 'static,
    ) -> Result<()> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NodeNotFound(id));
        }
        let handlers = self
            .handlers
            .entry(id)
            .map(|e| e.or_default())
            .ok_or(Error::NodeNotFound(id))?;
        handlers.insert(name.into(), Box::new(handler));
        Ok(())
    }

    /// Remove the node's handler for `name`. Returns whether one was installed.
    pub fn clear_handler(&mut self, id: NodeId, name: &str) -> bool {
        self.handlers
            .get_mut(id)
            .is_some_and(|handlers| handlers.remove(name).is_some())
    }

    pub fn has_handler(&self, id: NodeId, name: &str) -> bool {
        self.handlers
            .get(id)
            .is_some_and(|handlers| handlers.contains_key(name))
    }

    /// Invoke the node's handler for `name`, if it exposes one.
    pub fn call_handler(&mut self, id: NodeId, name: &str, event: &ResizeEvent) -> bool {
        match self.handlers.get_mut(id).and_then(|h| h.get_mut(name)) {
            Some(handler) => {
                handler.handle(event);
                true
            }
            None => false,
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resize::event::{ResizeData, StopSignal, RESIZE};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("root"));
        let a = dom.insert_child(root, NodeData::new("a")).unwrap();
        let b = dom.insert_child(root, NodeData::new("b")).unwrap();
        let c = dom.insert_child(a, NodeData::new("c")).unwrap();
        let d = dom.insert_child(a, NodeData::new("d")).unwrap();
        (dom, root, a, b, c, d)
    }

    fn event() -> ResizeEvent {
        ResizeEvent::new(ResizeData::new(80.0, 24.0), RESIZE, StopSignal::new())
    }

    #[test]
    fn insert_sets_root_once() {
        let mut dom = Dom::new();
        let first = dom.insert(NodeData::new("first"));
        let _second = dom.insert(NodeData::new("second"));
        assert_eq!(dom.root(), Some(first));
    }

    #[test]
    fn children_and_parent() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
    }

    #[test]
    fn insert_child_at_front() {
        let (mut dom, root, a, b, ..) = build_tree();
        let skin = dom.insert_child_at(root, 0, NodeData::new("skin")).unwrap();
        assert_eq!(dom.children(root), &[skin, a, b]);

        let tail = dom.insert_child_at(root, 99, NodeData::new("tail")).unwrap();
        assert_eq!(dom.children(root).last(), Some(&tail));
    }

    #[test]
    fn insert_child_into_missing_parent() {
        let (mut dom, _root, a, ..) = build_tree();
        dom.remove(a);
        let err = dom.insert_child(a, NodeData::new("orphan")).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(id) if id == a));
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        let removed = dom.remove(a).unwrap();
        assert_eq!(removed.name, "a");
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.len(), 2);
        assert!(dom.remove(a).is_none());
    }

    #[test]
    fn remove_root_clears_root() {
        let (mut dom, root, ..) = build_tree();
        dom.remove(root);
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }

    #[test]
    fn get_mut_and_set_root() {
        let (mut dom, _root, a, ..) = build_tree();
        dom.get_mut(a).unwrap().visible = false;
        assert!(!dom.get(a).unwrap().visible);
        dom.set_root(a);
        assert_eq!(dom.root(), Some(a));
    }

    #[test]
    fn listeners_receive_emits() {
        let (mut dom, _root, a, ..) = build_tree();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let id = dom
            .on(a, RESIZE, move |ev| s.borrow_mut().push(ev.data.width))
            .unwrap();

        assert_eq!(dom.emit(a, RESIZE, &event()), 1);
        assert_eq!(*seen.borrow(), vec![80.0]);

        assert!(dom.off(a, RESIZE, id));
        assert_eq!(dom.emit(a, RESIZE, &event()), 0);
    }

    #[test]
    fn handlers_install_call_clear() {
        let (mut dom, _root, _a, b, ..) = build_tree();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        dom.set_handler(b, RESIZE, move |_: &ResizeEvent| *h.borrow_mut() += 1)
            .unwrap();

        assert!(dom.has_handler(b, RESIZE));
        assert!(dom.call_handler(b, RESIZE, &event()));
        assert!(!dom.call_handler(b, "orientation", &event()));
        assert_eq!(*hits.borrow(), 1);

        assert!(dom.clear_handler(b, RESIZE));
        assert!(!dom.call_handler(b, RESIZE, &event()));
    }

    #[test]
    fn subscriptions_on_missing_node_fail() {
        let (mut dom, _root, a, ..) = build_tree();
        dom.remove(a);
        assert!(dom.on(a, RESIZE, |_| {}).is_err());
        assert!(dom.set_handler(a, RESIZE, |_: &ResizeEvent| {}).is_err());
    }

    #[test]
    fn removing_node_drops_its_listeners() {
        let (mut dom, _root, a, _b, c, _d) = build_tree();
        dom.on(c, RESIZE, |_| {}).unwrap();
        dom.remove(a);
        assert_eq!(dom.emit(c, RESIZE, &event()), 0);
    }
}
