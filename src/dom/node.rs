//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::geometry::{Point, Size};

new_key_type! {
    /// Unique identifier for a scene-graph node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single scene-graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Display name, used in logs and test traces.
    pub name: String,
    /// Invisible nodes, and their whole subtree, are skipped by resize dispatch.
    pub visible: bool,
    /// Whether this node wants resize notifications.
    pub resizable: bool,
    /// Position in parent space.
    pub position: Point,
    /// Extent of the node.
    pub size: Size,
}

impl NodeData {
    /// Create a visible, non-resizable node at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            resizable: false,
            position: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// Set the resizable flag (builder).
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the visibility flag (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the position (builder).
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Set the size (builder).
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }
}
