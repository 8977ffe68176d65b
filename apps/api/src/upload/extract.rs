//! Text extraction for uploaded resumes: PDF, DOCX, and plain text.
//!
//! Returns `None` when a document yields no usable text. PDFs that cannot be
//! read fall back to a placeholder message asking for pasted text.

use bytes::Bytes;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::{info, warn};

pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT: &str = "text/plain";
pub const MARKDOWN: &str = "text/markdown";
const OCTET_STREAM: &str = "application/octet-stream";

pub const PDF_PLACEHOLDER: &str = "PDF content detected. Please paste the text content manually or use a DOCX file for automatic text extraction.";

/// A file part received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// Declared media type without parameters, falling back to the file
    /// extension when the client sent none or a generic binary type.
    pub fn media_type(&self) -> String {
        let declared = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_lowercase())
            .filter(|ct| !ct.is_empty() && ct != OCTET_STREAM);

        declared
            .or_else(|| self.file_name.as_deref().and_then(media_type_for_name))
            .unwrap_or_else(|| OCTET_STREAM.to_string())
    }
}

fn media_type_for_name(file_name: &str) -> Option<String> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())?;

    let media_type = match extension.as_str() {
        "pdf" => PDF,
        "docx" => DOCX,
        "txt" => PLAIN_TEXT,
        "md" => MARKDOWN,
        _ => return None,
    };
    Some(media_type.to_string())
}

/// Extracts text from an upload. Document parsing is CPU-bound and runs on
/// the blocking pool; a panicking parser is treated like a failed extraction.
pub async fn extract_text(upload: UploadedFile) -> Option<String> {
    let media_type = upload.media_type();
    info!(
        media_type = %media_type,
        bytes = upload.data.len(),
        "Extracting text from uploaded resume"
    );

    let blocking_type = media_type.clone();
    let data = upload.data;
    match tokio::task::spawn_blocking(move || extract_by_media_type(&blocking_type, &data)).await {
        Ok(text) => text,
        Err(e) => {
            warn!(media_type = %media_type, "Text extraction task failed: {e}");
            (media_type == PDF).then(|| PDF_PLACEHOLDER.to_string())
        }
    }
}

fn extract_by_media_type(media_type: &str, data: &[u8]) -> Option<String> {
    match media_type {
        PDF => Some(extract_pdf_text(data).unwrap_or_else(|| PDF_PLACEHOLDER.to_string())),
        DOCX => extract_docx_text(data),
        PLAIN_TEXT | MARKDOWN => match String::from_utf8(data.to_vec()) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Uploaded text file is not valid UTF-8: {e}");
                None
            }
        },
        other => {
            warn!(media_type = %other, "Unsupported resume media type");
            None
        }
    }
}

fn extract_pdf_text(data: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => non_blank(clean_extracted_text(&text)),
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            None
        }
    }
}

fn extract_docx_text(data: &[u8]) -> Option<String> {
    let docx = match docx_rs::read_docx(data) {
        Ok(docx) => docx,
        Err(e) => {
            warn!("DOCX extraction failed: {e}");
            return None;
        }
    };

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => paragraphs.push(paragraph_text(para)),
            DocumentChild::Table(table) => collect_table_text(table, &mut paragraphs),
            _ => {}
        }
    }

    non_blank(clean_extracted_text(&paragraphs.join("\n")))
}

/// Run text of a paragraph, including runs nested inside hyperlinks.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        push_paragraph_child(child, &mut text);
    }
    text
}

fn push_paragraph_child(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    out.push_str(&t.text);
                }
            }
        }
        ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                push_paragraph_child(nested, out);
            }
        }
        _ => {}
    }
}

/// One entry per cell paragraph, row by row. Nested tables are walked too.
#[allow(irrefutable_let_patterns)]
fn collect_table_text(table: &Table, out: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => out.push(paragraph_text(para)),
                    TableCellContent::Table(nested) => collect_table_text(nested, out),
                    _ => {}
                }
            }
        }
    }
}

fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}
