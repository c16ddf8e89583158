use lopdf::Document;
use tracing::warn;

use crate::errors::AppError;

/// Concatenates the text of every page, in page order, with no separator.
/// A page that yields no extractable text contributes nothing.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let doc = Document::load_mem(data)
        .map_err(|e| AppError::ExtractionFailed(format!("not a readable PDF: {e}")))?;

    let mut text = String::new();
    // get_pages is keyed by page number, so iteration is already in page order.
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("No extractable text on PDF page {page_num}: {e}"),
        }
    }

    Ok(text)
}
