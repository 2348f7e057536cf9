//! Pagelift Page Runtime
//!
//! Ties parsing and enhancement together: loading a page parses the HTML,
//! fires the content-loaded event, and runs every registered enhancer —
//! the moment enhancement scripts would run in a browser.

mod page;

pub use page::Page;
