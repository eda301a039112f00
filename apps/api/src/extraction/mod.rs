//! Resume document extraction — format detection and plain-text extraction for uploads.

pub mod docx;

use std::fmt;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const OCTET_STREAM_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            "text/plain" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Trusts a specific MIME type; falls back to the file extension only when the
    /// client sent no MIME type or the generic `application/octet-stream`.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let generic = match content_type {
            Some(mime) => {
                if let Some(format) = Self::from_mime_type(mime) {
                    return Some(format);
                }
                mime.trim().eq_ignore_ascii_case(OCTET_STREAM_MIME)
            }
            None => true,
        };

        if !generic {
            return None;
        }

        file_name
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext))
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::PlainText => write!(f, "text"),
        }
    }
}

/// Extracts plain text from an uploaded document. CPU-bound for PDF and DOCX;
/// call from a blocking context.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    // pdf-extract panics on some malformed documents instead of returning an error.
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(format!(
            "Failed to extract text from PDF: {e}"
        ))),
        Err(_) => Err(AppError::Extraction(
            "PDF parser aborted on a malformed document".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime_type() {
        assert_eq!(DocumentFormat::detect(Some(PDF_MIME), None), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::detect(Some(DOCX_MIME), None), Some(DocumentFormat::Docx));
        assert_eq!(
            DocumentFormat::detect(Some("text/plain; charset=utf-8"), None),
            Some(DocumentFormat::PlainText)
        );
    }

    #[test]
    fn test_specific_mime_wins_over_extension() {
        assert_eq!(
            DocumentFormat::detect(Some(PDF_MIME), Some("resume.docx")),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn test_octet_stream_falls_back_to_extension() {
        assert_eq!(
            DocumentFormat::detect(Some("application/octet-stream"), Some("Resume.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect(None, Some("cv.final.docx")),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_unsupported_formats() {
        assert_eq!(DocumentFormat::detect(Some("image/png"), Some("resume.pdf")), None);
        assert_eq!(DocumentFormat::detect(Some("application/msword"), None), None);
        assert_eq!(DocumentFormat::detect(None, Some("resume")), None);
        assert_eq!(DocumentFormat::detect(None, None), None);
    }

    #[test]
    fn test_plain_text_is_decoded_lossily() {
        let text = extract_text(DocumentFormat::PlainText, b"Rust \xFF engineer").unwrap();
        assert!(text.starts_with("Rust "));
        assert!(text.ends_with(" engineer"));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let err = extract_text(DocumentFormat::Pdf, b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DocumentFormat::Pdf.to_string(), "pdf");
        assert_eq!(DocumentFormat::Docx.to_string(), "docx");
        assert_eq!(DocumentFormat::PlainText.to_string(), "text");
    }
}
