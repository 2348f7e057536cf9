//! Pagelift Enhancers
//!
//! The two page enhancers that run on document load: file-input
//! beautification and timestamp formatting, plus the pure duration and
//! elapsed-time helpers the timestamp side exposes.

mod file_input;
mod time;
mod timers;

pub use file_input::{
    BeautifyOptions, FileInputBeautifier, BUTTON_CLASSES, NAME_DISPLAY_CLASS, WRAPPER_CLASS,
};
pub use time::{
    calculate_hours, format_duration, TimeFormatter, TimeStyle, FORMAT_ATTR, FORMAT_TIME_CLASS,
    TIME_ATTR,
};
pub use timers::{update_all_timers, START_ATTR, TIMER_CLASS};

use pagelift_dom::Document;

/// A scan pass over a document, run at page load and on demand afterwards.
///
/// Enhancers must be idempotent: running one twice over the same document
/// leaves the document as if it ran once.
pub trait Enhancer {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Scan the document and apply this enhancer's transformation
    fn enhance(&self, document: &mut Document);
}
