//! DOM Events
//!
//! Listener bindings are capability-typed actions rather than closures: a
//! binding names the one thing it is allowed to do to the tree, and lives
//! in a registry keyed by the control it is bound to.

use std::collections::HashMap;

use crate::NodeId;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    ContentLoaded,
}

/// Dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
}

impl Event {
    /// Create a click event
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    /// Create a change event
    pub fn change(target: NodeId) -> Self {
        Self {
            kind: EventKind::Change,
            target,
        }
    }

    /// Create a content-loaded event
    pub fn content_loaded(target: NodeId) -> Self {
        Self {
            kind: EventKind::ContentLoaded,
            target,
        }
    }
}

/// What a listener is allowed to do when its event fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    /// Re-dispatch the event as a click on another node
    /// (custom trigger button forwarding to the hidden control)
    ForwardClick { to: NodeId },
    /// Ask the host embedder to open its file picker for the target
    RequestFilePicker,
    /// Mirror the target control's first selected file name into a label,
    /// falling back to `empty_text` when the selection is empty
    MirrorFileName { label: NodeId, empty_text: String },
}

/// Listener registry keyed by (target, event kind)
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    handlers: HashMap<(NodeId, EventKind), Vec<EventAction>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action for a target/kind pair
    pub fn add(&mut self, target: NodeId, kind: EventKind, action: EventAction) {
        self.handlers.entry((target, kind)).or_default().push(action);
    }

    /// Actions bound to a target/kind pair
    pub fn actions(&self, target: NodeId, kind: EventKind) -> &[EventAction] {
        self.handlers
            .get(&(target, kind))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether any action is bound to a target/kind pair
    pub fn has(&self, target: NodeId, kind: EventKind) -> bool {
        !self.actions(target, kind).is_empty()
    }

    /// Drop every binding attached to a target
    pub fn remove_target(&mut self, target: NodeId) {
        self.handlers.retain(|(id, _), _| *id != target);
    }

    /// Total number of bindings
    pub fn len(&self) -> usize {
        self.handlers.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ListenerRegistry::new();
        let button = NodeId(3);
        let input = NodeId(4);

        registry.add(button, EventKind::Click, EventAction::ForwardClick { to: input });

        assert!(registry.has(button, EventKind::Click));
        assert!(!registry.has(button, EventKind::Change));
        assert_eq!(
            registry.actions(button, EventKind::Click),
            &[EventAction::ForwardClick { to: input }]
        );
    }

    #[test]
    fn test_remove_target_drops_all_bindings() {
        let mut registry = ListenerRegistry::new();
        let input = NodeId(7);
        registry.add(input, EventKind::Click, EventAction::RequestFilePicker);
        registry.add(
            input,
            EventKind::Change,
            EventAction::MirrorFileName {
                label: NodeId(8),
                empty_text: "No file selected".into(),
            },
        );

        registry.remove_target(input);
        assert!(registry.is_empty());
    }
}
