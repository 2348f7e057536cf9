//! File-input beautification
//!
//! Replaces the presentation of native file controls with a styled trigger
//! button and a filename label. The control itself stays in the tree and
//! operable; only its visibility and surrounding decoration change.

use pagelift_dom::{Document, DomResult, EventAction, EventKind, NodeId};

use crate::Enhancer;

/// Marker class on the wrapper; its presence on a control's parent means
/// the control is already beautified
pub const WRAPPER_CLASS: &str = "custom-file-wrapper";

/// Classes styling the trigger like the page's other action buttons
pub const BUTTON_CLASSES: &str = "action-btn edit-btn custom-file-button";

/// Class on the filename label
pub const NAME_DISPLAY_CLASS: &str = "file-name-display";

/// Presentation options for the synthesized widget
#[derive(Debug, Clone)]
pub struct BeautifyOptions {
    /// Trigger button label
    pub button_label: String,
    /// Label text while no file is selected
    pub empty_text: String,
}

impl Default for BeautifyOptions {
    fn default() -> Self {
        Self {
            button_label: "Choose File".to_string(),
            empty_text: "No file selected".to_string(),
        }
    }
}

/// Scans a document for file controls and wraps each in a custom widget
#[derive(Debug, Clone, Default)]
pub struct FileInputBeautifier {
    options: BeautifyOptions,
}

impl FileInputBeautifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BeautifyOptions) -> Self {
        Self { options }
    }

    /// Wrap every unwrapped file control in the document.
    ///
    /// Returns the number of controls wrapped by this pass. Safe to invoke
    /// repeatedly: already-wrapped controls are skipped via the marker
    /// class on their parent, and controls without a parent are left alone.
    pub fn beautify(&self, document: &mut Document) -> usize {
        let mut wrapped = 0;
        for input in document.file_inputs() {
            match self.wrap_control(document, input) {
                Ok(true) => wrapped += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::error!(%err, "skipping file control that could not be wrapped");
                }
            }
        }
        tracing::debug!(wrapped, "file input scan finished");
        wrapped
    }

    fn wrap_control(&self, document: &mut Document, input: NodeId) -> DomResult<bool> {
        let Some(parent) = document.tree().parent(input) else {
            // Detached control; nothing to decorate
            return Ok(false);
        };
        if document.tree().has_class(parent, WRAPPER_CLASS) {
            return Ok(false);
        }

        let tree = document.tree_mut();

        let wrapper = tree.create_element("div");
        tree.set_attr(wrapper, "class", WRAPPER_CLASS)?;

        let button = tree.create_element("button");
        tree.set_attr(button, "type", "button")?;
        tree.set_attr(button, "class", BUTTON_CLASSES)?;
        tree.set_text_content(button, &self.options.button_label)?;

        let label = tree.create_element("span");
        tree.set_attr(label, "class", NAME_DISPLAY_CLASS)?;
        tree.set_text_content(label, &self.options.empty_text)?;

        // Hide the original control but keep it functional
        tree.set_attr(input, "style", "display: none")?;

        tree.insert_before(parent, wrapper, input)?;
        tree.append_child(wrapper, button)?;
        tree.append_child(wrapper, label)?;
        tree.append_child(wrapper, input)?;

        document.add_listener(button, EventKind::Click, EventAction::ForwardClick { to: input });
        document.add_listener(input, EventKind::Click, EventAction::RequestFilePicker);
        document.add_listener(
            input,
            EventKind::Change,
            EventAction::MirrorFileName {
                label,
                empty_text: self.options.empty_text.clone(),
            },
        );

        Ok(true)
    }
}

impl Enhancer for FileInputBeautifier {
    fn name(&self) -> &'static str {
        "file-input-beautifier"
    }

    fn enhance(&self, document: &mut Document) {
        self.beautify(document);
    }
}
