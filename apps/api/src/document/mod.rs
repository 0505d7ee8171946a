//! Document intake: turns an uploaded file into the normalized plain text
//! both engines expect, plus structural metadata.

pub mod decode;
pub mod structure;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub use structure::{extract_structure, normalize_text, DocumentMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Txt,
    Md,
    Pdf,
    Html,
}

impl DocumentFormat {
    pub const SUPPORTED: &'static [&'static str] = &["txt", "md", "pdf", "html", "htm"];

    /// Detects the format from the file extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(Self::Txt),
            "md" => Ok(Self::Md),
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            other => Err(AppError::UnsupportedFormat(format!(
                "'.{other}' is not supported. Allowed: {}",
                Self::SUPPORTED.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }
}

/// Normalized text and metadata decoded from one upload.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub format: DocumentFormat,
    pub metadata: DocumentMetadata,
}

pub fn extract_document(filename: &str, bytes: &[u8]) -> Result<ExtractedDocument, AppError> {
    let format = DocumentFormat::from_filename(filename)?;
    let raw = match format {
        DocumentFormat::Txt | DocumentFormat::Md => decode::decode_plain(bytes),
        DocumentFormat::Pdf => decode::decode_pdf(bytes)?,
        DocumentFormat::Html => decode::decode_html(bytes),
    };
    let text = normalize_text(&raw);
    let metadata = extract_structure(&text);

    Ok(ExtractedDocument {
        text,
        format,
        metadata,
    })
}

/// Rejects text with fewer than `min_chars` non-whitespace characters.
/// Both engines assume this precondition holds.
pub fn ensure_meaningful(text: &str, min_chars: usize, what: &str) -> Result<(), AppError> {
    let visible = text.chars().filter(|c| !c.is_whitespace()).count();
    if visible < min_chars {
        return Err(AppError::Validation(format!(
            "Could not extract meaningful text from the {what} (need at least {min_chars} characters)."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_filename("cv.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("cv.htm").unwrap(), DocumentFormat::Html);
        assert_eq!(DocumentFormat::from_filename("a.b.txt").unwrap(), DocumentFormat::Txt);
    }

    #[test]
    fn test_unsupported_formats_rejected() {
        assert!(matches!(
            DocumentFormat::from_filename("cv.docx"),
            Err(AppError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_filename("no_extension"),
            Err(AppError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extract_plain_text_document() {
        let doc = extract_document("cv.txt", b"Jane Doe\r\n\r\n\r\n\r\nExperience\r\n").unwrap();
        assert_eq!(doc.text, "Jane Doe\n\nExperience");
        assert_eq!(doc.format, DocumentFormat::Txt);
        assert_eq!(doc.metadata.total_lines, 3);
    }

    #[test]
    fn test_ensure_meaningful_counts_visible_chars() {
        assert!(ensure_meaningful("a b c d e f g h i j k l m n o p q r s", 20, "resume").is_err());
        assert!(ensure_meaningful("abcdefghijklmnopqrst", 20, "resume").is_ok());
    }
}
