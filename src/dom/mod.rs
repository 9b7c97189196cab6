//! Scene graph: slotmap-backed node tree with per-node notifications.

pub mod node;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
