//! Integration tests for pagelift-html
//!
//! Parsing edge cases and document structure recovery.

use pagelift_html::HtmlParser;

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.tree().len() >= 1, "even empty HTML should have a root");
}

#[test]
fn test_parse_builds_structure() {
    let html = r#"
        <html>
            <head><title>Jobs</title></head>
            <body>
                <div id="container">
                    <span class="format-time" data-time="2025-03-15T14:30:00Z">raw</span>
                    <input type="file" name="photo">
                </div>
            </body>
        </html>
    "#;
    let doc = HtmlParser::new().parse(html);

    assert!(doc.document_element().is_valid());
    assert!(doc.head().is_valid());
    assert!(doc.body().is_valid());
    assert!(doc.element_by_id("container").is_some());
    assert_eq!(doc.file_inputs().len(), 1);
    assert_eq!(doc.elements_with_class("format-time").len(), 1);
}

#[test]
fn test_parse_malformed_html_recovers() {
    let html = "<div><p>Unclosed paragraph<span>Unclosed span</div>";
    let doc = HtmlParser::new().parse(html);

    assert!(doc.tree().len() > 1);
    assert!(doc.body().is_valid());
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new().parse_with_url("<p>hi</p>", "https://example.test/jobs");
    assert_eq!(doc.url(), "https://example.test/jobs");
}

#[test]
fn test_fragment_gets_wrapped() {
    // html5ever wraps bare fragments in html/head/body
    let doc = HtmlParser::new().parse("<input type=\"file\">");
    let inputs = doc.file_inputs();
    assert_eq!(inputs.len(), 1);
    assert!(doc.tree().parent(inputs[0]).is_some());
}

#[test]
fn test_upper_case_type_attribute() {
    let doc = HtmlParser::new().parse(r#"<input type="FILE">"#);
    assert_eq!(doc.file_inputs().len(), 1);
}
