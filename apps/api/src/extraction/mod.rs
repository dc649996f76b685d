//! Resume text extraction — turns the caller's base64 resume payload into plain text.
//!
//! Extraction is best-effort. A payload that is not base64, or not a PDF, comes back as
//! `ResumeText::Raw` holding the input unchanged, so the pipeline can treat it as text.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("payload is not a readable PDF: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    Panicked,
}

/// Outcome of resume extraction. Both variants are usable resume text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeText {
    /// Text pulled out of a decoded PDF, pages in order.
    Extracted(String),
    /// Extraction failed; the original payload, untouched.
    Raw(String),
}

impl ResumeText {
    pub fn into_text(self) -> String {
        match self {
            ResumeText::Extracted(text) | ResumeText::Raw(text) => text,
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, ResumeText::Extracted(_))
    }
}

/// Extracts resume text, falling back to the raw payload on any failure.
pub fn extract_resume_text(payload: &str) -> ResumeText {
    match extract_pdf_text(payload) {
        Ok(text) => {
            debug!("Extracted {} characters of resume text", text.chars().count());
            ResumeText::Extracted(text)
        }
        Err(e) => {
            debug!("Resume extraction fell back to raw text: {e}");
            ResumeText::Raw(payload.to_string())
        }
    }
}

/// Runs extraction on the blocking pool. A failed join degrades to the raw payload too.
pub async fn extract_resume_text_blocking(payload: String) -> ResumeText {
    let fallback = payload.clone();
    match tokio::task::spawn_blocking(move || extract_resume_text(&payload)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume extraction task failed: {e}");
            ResumeText::Raw(fallback)
        }
    }
}

/// Decodes a (possibly data-URI prefixed) base64 PDF and returns the text of every page.
pub fn extract_pdf_text(payload: &str) -> Result<String, ExtractionError> {
    let bytes = decode_payload(payload)?;

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .map_err(|_| ExtractionError::Panicked)?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    Ok(pages.join("\n").trim().to_string())
}

fn decode_payload(payload: &str) -> Result<Vec<u8>, ExtractionError> {
    let encoded = strip_data_uri_header(payload);
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

/// Drops everything up to and including the first comma, if there is one.
fn strip_data_uri_header(payload: &str) -> &str {
    payload
        .split_once(',')
        .map(|(_, rest)| rest)
        .unwrap_or(payload)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a one-page PDF that renders `text` in Courier.
    pub fn simple_pdf(text: &str) -> Vec<u8> {
        pdf_with_pages(&[text])
    }

    /// Builds a PDF with one page per entry, each rendering its text in Courier.
    pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(texts.len());
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through_unchanged() {
        let input = "Jane Doe\nSenior Engineer, 10 years of Python";
        assert_eq!(
            extract_resume_text(input),
            ResumeText::Raw(input.to_string())
        );
    }

    #[test]
    fn test_base64_of_non_pdf_passes_through_unchanged() {
        let input = STANDARD.encode("just some text, not a pdf");
        let result = extract_resume_text(&input);
        assert!(!result.is_extracted());
        assert_eq!(result.into_text(), input);
    }

    #[test]
    fn test_data_uri_fallback_keeps_header() {
        let input = "data:application/pdf;base64,!!!not-base64!!!";
        assert_eq!(extract_resume_text(input).into_text(), input);
    }

    #[test]
    fn test_empty_payload_falls_back() {
        assert_eq!(extract_resume_text(""), ResumeText::Raw(String::new()));
    }

    #[test]
    fn test_strip_data_uri_header() {
        assert_eq!(strip_data_uri_header("data:application/pdf;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_uri_header("QUJD"), "QUJD");
    }

    #[test]
    fn test_decode_ignores_line_breaks() {
        let bytes = decode_payload("QUJD\nREVG\r\n").unwrap();
        assert_eq!(bytes, b"ABCDEF");
    }

    #[test]
    fn test_decode_error_is_reported() {
        assert!(matches!(
            extract_pdf_text("@@@@"),
            Err(ExtractionError::Decode(_))
        ));
    }

    #[test]
    fn test_non_pdf_bytes_report_pdf_error() {
        let encoded = STANDARD.encode(b"%PDF-garbage that is not a document");
        assert!(extract_pdf_text(&encoded).is_err());
    }

    #[test]
    fn test_extracts_text_from_pdf() {
        let encoded = STANDARD.encode(fixtures::simple_pdf("Hello World"));
        let result = extract_resume_text(&encoded);
        assert!(result.is_extracted(), "expected extraction, got {result:?}");
        assert!(result.into_text().contains("Hello World"));
    }

    #[test]
    fn test_extracts_text_from_data_uri_pdf() {
        let encoded = format!(
            "data:application/pdf;base64,{}",
            STANDARD.encode(fixtures::simple_pdf("Jane Doe"))
        );
        let text = extract_pdf_text(&encoded).unwrap();
        assert!(text.contains("Jane Doe"));
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_pages_are_separated_by_newlines() {
        let encoded = STANDARD.encode(fixtures::pdf_with_pages(&["PageOne", "PageTwo"]));
        let text = extract_pdf_text(&encoded).unwrap();

        assert!(!text.contains("PageOnePageTwo"), "pages fused: {text:?}");
        let first = text.find("PageOne").unwrap();
        let second = text.find("PageTwo").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
    }

    #[tokio::test]
    async fn test_blocking_extraction_falls_back() {
        let result = extract_resume_text_blocking("plain resume".to_string()).await;
        assert_eq!(result, ResumeText::Raw("plain resume".to_string()));
    }
}
