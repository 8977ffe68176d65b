// Upload handling: multipart form parsing and document text extraction.
// The analysis engine only ever sees the resolved plain text.

pub mod extract;
pub mod form;
