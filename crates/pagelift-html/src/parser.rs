//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts the result into the arena
//! DOM. Simpler and more reliable than implementing TreeSink directly.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use pagelift_dom::{Document, DomTree, ElementData, NodeId};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .unwrap_or_default();

        let mut document = Document::empty(url);
        let root = document.tree().root();
        convert_node(&dom.document, document.tree_mut(), root);

        document.finalize();

        tracing::debug!("parsed {} nodes", document.tree().len());
        document
    }
}

/// Convert an RcDom node (and its subtree) into the arena tree
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, tree, parent);
            }
        }
        RcNodeData::Doctype {
            name,
            public_id,
            system_id,
        } => {
            let id = tree.create_doctype(name, public_id, system_id);
            let _ = tree.append_child(parent, id);
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Inter-tag whitespace carries no meaning for enhancement scans
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                let _ = tree.append_child(parent, id);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = tree.create_comment(&contents.to_string());
            let _ = tree.append_child(parent, id);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let mut elem = ElementData::new(name.local.as_ref());
            for attr in attrs.borrow().iter() {
                elem.set_attr(attr.name.local.as_ref(), &attr.value);
            }

            let id = tree.create_element_with(elem);
            let _ = tree.append_child(parent, id);

            for child in handle.children.borrow().iter() {
                convert_node(child, tree, id);
            }
        }
        RcNodeData::ProcessingInstruction { .. } => {}
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
