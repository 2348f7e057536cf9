//! Document - High-level document API
//!
//! Wraps the tree with the url, cached structural elements, the listener
//! registry, and per-control file-selection state.

use crate::{
    DomTree, Event, EventAction, EventKind, FileSelections, ListenerRegistry, NodeId, SelectedFile,
};

/// HTML Document
pub struct Document {
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Event listener bindings
    listeners: ListenerRegistry,
    /// Selected files per file control
    selections: FileSelections,
    /// Controls waiting for the host to open its file picker
    picker_requests: Vec<NodeId>,
}

impl Document {
    /// Create a new document with the basic html/head/body structure
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            listeners: ListenerRegistry::new(),
            selections: FileSelections::new(),
            picker_requests: Vec::new(),
        }
    }

    /// Create an empty document (no structure; callers parse into it)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            listeners: ListenerRegistry::new(),
            selections: FileSelections::new(),
            picker_requests: Vec::new(),
        }
    }

    /// Locate and cache html/head/body after external tree construction
    pub fn finalize(&mut self) {
        for id in self.tree.descendants(self.tree.root()) {
            match self.tree.tag_name(id) {
                Some("html") if !self.html_element.is_valid() => self.html_element = id,
                Some("head") if !self.head_element.is_valid() => self.head_element = id,
                Some("body") if !self.body_element.is_valid() => self.body_element = id,
                _ => {}
            }
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get element by ID attribute
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&node| self.tree.get_attr(node, "id") == Some(id))
    }

    /// All elements carrying a class token, in document order
    pub fn elements_with_class(&self, token: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .filter(|&node| self.tree.has_class(node, token))
            .collect()
    }

    /// All file-selection controls (`input` with `type="file"`), in document order
    pub fn file_inputs(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .filter(|&node| {
                self.tree.tag_name(node) == Some("input")
                    && self
                        .tree
                        .get_attr(node, "type")
                        .is_some_and(|t| t.eq_ignore_ascii_case("file"))
            })
            .collect()
    }

    /// Bind an action to a target/event pair
    pub fn add_listener(&mut self, target: NodeId, kind: EventKind, action: EventAction) {
        self.listeners.add(target, kind, action);
    }

    /// Access the listener registry
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Dispatch an event, running every action bound to its target
    pub fn dispatch(&mut self, event: Event) {
        let actions = self.listeners.actions(event.target, event.kind).to_vec();
        for action in actions {
            self.run_action(event.target, action);
        }
    }

    fn run_action(&mut self, target: NodeId, action: EventAction) {
        match action {
            EventAction::ForwardClick { to } => {
                self.dispatch(Event::click(to));
            }
            EventAction::RequestFilePicker => {
                tracing::debug!(control = target.0, "file picker requested");
                self.picker_requests.push(target);
            }
            EventAction::MirrorFileName { label, empty_text } => {
                let text = self
                    .selections
                    .first_name(target)
                    .map(str::to_owned)
                    .unwrap_or(empty_text);
                if let Err(err) = self.tree.set_text_content(label, &text) {
                    tracing::error!(%err, label = label.0, "failed to update file name label");
                }
            }
        }
    }

    /// Replace a control's selected files and fire its change event
    pub fn set_selected_files(&mut self, control: NodeId, files: Vec<SelectedFile>) {
        self.selections.set(control, files);
        self.dispatch(Event::change(control));
    }

    /// Current selection for a control
    pub fn selected_files(&self, control: NodeId) -> &[SelectedFile] {
        self.selections.get(control)
    }

    /// Drain controls whose picker the host should open
    pub fn take_picker_requests(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.picker_requests)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
