//! Byte-level decoders for the supported upload formats.

use scraper::{Html, Node};

use crate::errors::AppError;

/// Elements whose text never reaches the reader.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "meta", "link", "head", "title"];

/// UTF-8 with a leading BOM stripped; invalid sequences are replaced.
pub fn decode_plain(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn decode_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e:?}")))
}

/// Visible text nodes of an HTML document, one per line.
pub fn decode_html(bytes: &[u8]) -> String {
    let document = Html::parse_document(&String::from_utf8_lossy(bytes));

    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            let text = text.trim();
            (!hidden && !text.is_empty()).then(|| text.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strips_bom_and_replaces_invalid_bytes() {
        assert_eq!(decode_plain(b"\xEF\xBB\xBFhello"), "hello");
        assert_eq!(decode_plain(b"caf\xFF"), "caf\u{FFFD}");
    }

    #[test]
    fn test_html_keeps_visible_text_only() {
        let html = br#"<html><head><title>CV</title><style>p { color: red }</style></head>
            <body><h1>Jane Doe</h1><script>var x = 1;</script><p>Experience</p></body></html>"#;
        assert_eq!(decode_html(html), "Jane Doe\nExperience");
    }

    #[test]
    fn test_invalid_pdf_is_an_extraction_error() {
        assert!(matches!(
            decode_pdf(b"not a pdf"),
            Err(AppError::Extraction(_))
        ));
    }
}
