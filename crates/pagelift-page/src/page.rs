//! Page - a loaded document plus its enhancers

use pagelift_dom::{Document, Event, NodeId, SelectedFile};
use pagelift_enhance::{Enhancer, FileInputBeautifier, TimeFormatter};
use pagelift_html::HtmlParser;

/// A loaded page
pub struct Page {
    url: String,
    document: Document,
    enhancers: Vec<Box<dyn Enhancer>>,
}

impl Page {
    /// Create a page with the default enhancer set
    pub fn new(url: &str) -> Self {
        Self::with_enhancers(
            url,
            vec![
                Box::new(FileInputBeautifier::new()),
                Box::new(TimeFormatter::local()),
            ],
        )
    }

    /// Create a page with a custom enhancer set
    pub fn with_enhancers(url: &str, enhancers: Vec<Box<dyn Enhancer>>) -> Self {
        Self {
            url: url.to_string(),
            document: Document::new(url),
            enhancers,
        }
    }

    /// Page URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current document, mutably
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Parse HTML into a fresh document, fire content-loaded, and run
    /// every enhancer in registration order
    pub fn load(&mut self, html: &str) {
        self.document = HtmlParser::new().parse_with_url(html, &self.url);
        let root = self.document.tree().root();
        self.document.dispatch(Event::content_loaded(root));
        self.run_enhancers();
    }

    /// Re-run every enhancer over the current document.
    ///
    /// Enhancers are idempotent, so this is safe to call arbitrarily often
    /// (e.g. after the page adds elements dynamically).
    pub fn rescan(&mut self) {
        self.run_enhancers();
    }

    fn run_enhancers(&mut self) {
        for enhancer in &self.enhancers {
            tracing::debug!(enhancer = enhancer.name(), "running enhancer");
            enhancer.enhance(&mut self.document);
        }
    }

    /// Service a pending picker request the way a host file dialog would:
    /// set the control's selection and fire its change pipeline
    pub fn select_files(&mut self, control: NodeId, names: &[&str]) {
        let files = names.iter().copied().map(SelectedFile::new).collect();
        self.document.set_selected_files(control, files);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelift_enhance::{TimeFormatter, NAME_DISPLAY_CLASS, WRAPPER_CLASS};

    const PAGE: &str = r#"
        <html><body>
            <input type="file" name="photo">
            <span id="when" class="format-time" data-time="2025-03-15T14:30:00Z" data-format="full">x</span>
        </body></html>
    "#;

    fn utc_page() -> Page {
        Page::with_enhancers(
            "https://example.test/",
            vec![
                Box::new(FileInputBeautifier::new()),
                Box::new(TimeFormatter::utc()),
            ],
        )
    }

    #[test]
    fn test_load_runs_both_enhancers() {
        let mut page = utc_page();
        page.load(PAGE);

        let doc = page.document();
        assert_eq!(doc.elements_with_class(WRAPPER_CLASS).len(), 1);
        let when = doc.element_by_id("when").unwrap();
        assert_eq!(doc.tree().text_content(when), "15 Mar 2025, 14:30");
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let mut page = utc_page();
        page.load(PAGE);
        page.rescan();
        page.rescan();

        assert_eq!(page.document().elements_with_class(WRAPPER_CLASS).len(), 1);
    }

    #[test]
    fn test_picker_round_trip() {
        let mut page = utc_page();
        page.load(PAGE);

        let input = page.document().file_inputs()[0];
        let wrapper = page.document().tree().parent(input).unwrap();
        let button = page.document().tree().children(wrapper).next().unwrap();

        page.document_mut().dispatch(Event::click(button));
        let requests = page.document_mut().take_picker_requests();
        assert_eq!(requests, vec![input]);

        page.select_files(input, &["ladder.png"]);
        let label = page.document().elements_with_class(NAME_DISPLAY_CLASS)[0];
        assert_eq!(page.document().tree().text_content(label), "ladder.png");
    }
}
