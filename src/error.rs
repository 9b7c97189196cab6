//! Crate-wide error type.
//!
//! Geometry inputs never produce errors: the scrollable control fails soft and
//! reports "nothing moved" instead. Errors are reserved for host I/O and for
//! operations that address something that does not exist.

use crate::dom::NodeId;

/// Errors raised by host and scene-graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host terminal could not be queried.
    #[error("host I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A node id did not resolve in the scene graph (removed or never inserted).
    #[error("node {0:?} does not exist in the scene graph")]
    NodeNotFound(NodeId),

    /// A theme has no skin registered under the requested key.
    #[error("theme has no skin named `{0}`")]
    UnknownSkin(String),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
