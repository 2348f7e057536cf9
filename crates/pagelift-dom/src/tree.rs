//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a flat vector for the lifetime of the document; structural
//! operations rewrite sibling/child links and never move node data.

use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Root node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (including detached ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(Node::element(ElementData::new(name)))
    }

    /// Create a detached element node with prepared data
    pub fn create_element_with(&mut self, data: ElementData) -> NodeId {
        self.push(Node::element(data))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.push(Node {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: crate::NodeData::Doctype {
                name: name.to_string(),
                public_id: public_id.to_string(),
                system_id: system_id.to_string(),
            },
        })
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Unlink a node from its parent and siblings (the node stays allocated)
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let node = self.get(id).ok_or(DomError::NotFound)?;
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if prev.is_valid() {
            if let Some(prev_node) = self.get_mut(prev) {
                prev_node.next_sibling = next;
            }
        } else if parent.is_valid() {
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.first_child = next;
            }
        }

        if next.is_valid() {
            if let Some(next_node) = self.get_mut(next) {
                next_node.prev_sibling = prev;
            }
        } else if parent.is_valid() {
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.last_child = prev;
            }
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
        Ok(())
    }

    /// Append a node as the last child of a parent, reparenting if needed
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        self.detach(child)?;

        let old_last = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);
        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = old_last;
        }
        if old_last.is_valid() {
            if let Some(last_node) = self.get_mut(old_last) {
                last_node.next_sibling = child;
            }
        }
        if let Some(parent_node) = self.get_mut(parent) {
            if !parent_node.first_child.is_valid() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
        Ok(())
    }

    /// Insert a node immediately before a reference child
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: NodeId,
    ) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(new_child).is_none() {
            return Err(DomError::NotFound);
        }
        let Some(ref_node) = self.get(ref_child) else {
            return self.append_child(parent, new_child);
        };
        if ref_node.parent != parent {
            return Err(DomError::NotAChild);
        }

        // Detach first so the reference links read below are current
        self.detach(new_child)?;
        let prev = self
            .get(ref_child)
            .map(|n| n.prev_sibling)
            .unwrap_or(NodeId::NONE);

        if let Some(node) = self.get_mut(new_child) {
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = ref_child;
        }
        if let Some(ref_node) = self.get_mut(ref_child) {
            ref_node.prev_sibling = new_child;
        }
        if prev.is_valid() {
            if let Some(prev_node) = self.get_mut(prev) {
                prev_node.next_sibling = new_child;
            }
        } else if let Some(parent_node) = self.get_mut(parent) {
            parent_node.first_child = new_child;
        }
        Ok(())
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// Iterate over all descendants of a node in document order
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Get an attribute value from an element node
    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Set an attribute on an element node
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement)?
            .set_attr(name, value);
        Ok(())
    }

    /// Check if an element carries a class token
    pub fn has_class(&self, id: NodeId, token: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.classes.contains(token))
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.as_element()).map(|e| e.name.as_str())
    }

    /// Concatenated text of a node's descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for desc in self.descendants(id) {
            if let Some(text) = self.get(desc).and_then(|n| n.as_text()) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace a node's children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if self.get(id).is_none() {
            return Err(DomError::NotFound);
        }
        let children: Vec<NodeId> = self.children(id).collect();
        for child in children {
            self.detach(child)?;
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        self.next = self
            .tree
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Pre-order iterator over descendants
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children: Vec<NodeId> = self.tree.children(id).collect();
        for child in children.into_iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
