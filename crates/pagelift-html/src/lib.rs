//! Pagelift HTML Parser
//!
//! HTML5 parsing built on html5ever, producing pagelift-dom documents.

mod parser;

pub use parser::HtmlParser;

use pagelift_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
