//! File-selection state
//!
//! File controls carry their selected files outside the attribute table,
//! the way a browser keeps `input.files` off the DOM proper.

use std::collections::HashMap;

use crate::NodeId;

/// One file chosen through a file-selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Per-control selected-file lists
#[derive(Debug, Default)]
pub struct FileSelections {
    by_control: HashMap<NodeId, Vec<SelectedFile>>,
}

impl FileSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a control's selection
    pub fn set(&mut self, control: NodeId, files: Vec<SelectedFile>) {
        self.by_control.insert(control, files);
    }

    /// Current selection for a control (empty if never set)
    pub fn get(&self, control: NodeId) -> &[SelectedFile] {
        self.by_control
            .get(&control)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Name of the first selected file, if any
    pub fn first_name(&self, control: NodeId) -> Option<&str> {
        self.get(control).first().map(|f| f.name.as_str())
    }

    /// Clear a control's selection
    pub fn clear(&mut self, control: NodeId) {
        self.by_control.remove(&control);
    }
}
