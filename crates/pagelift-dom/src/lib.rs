//! Pagelift DOM
//!
//! Arena-based DOM tree for headless page enhancement: nodes are stored in
//! a flat vector and linked by `NodeId` indices instead of pointers.

mod classlist;
mod document;
mod events;
mod files;
mod node;
mod tree;

pub use classlist::TokenList;
pub use document::Document;
pub use events::{Event, EventAction, EventKind, ListenerRegistry};
pub use files::{FileSelections, SelectedFile};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this ID refers to a node
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node ID does not refer to a live node
    #[error("node not found")]
    NotFound,
    /// Operation requires an element node
    #[error("node is not an element")]
    NotAnElement,
    /// Reference node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
}
