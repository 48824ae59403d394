//! PDF text extraction.
//!
//! Uses pdf-extract as the primary parser and falls back to walking
//! content streams with lopdf for PDFs pdf-extract cannot handle.

use std::path::Path;

use lopdf::{Document, Object};
use tracing::warn;

/// Extract the text content of a PDF file.
pub fn extract_text(path: &Path) -> Result<String, String> {
    match pdf_extract::extract_text(path) {
        Ok(text) => Ok(text),
        Err(primary) => {
            warn!("pdf-extract failed ({}), trying lopdf fallback", primary);
            extract_text_via_lopdf(path)
                .map_err(|fallback| format!("{primary}; lopdf fallback: {fallback}"))
        }
    }
}

/// Walk every page's content stream and collect the text-showing
/// operators. Cruder than pdf-extract (no font decoding) but tolerant
/// of files with unusual structure.
fn extract_text_via_lopdf(path: &Path) -> Result<String, String> {
    let doc = Document::load(path).map_err(|e| e.to_string())?;
    let mut text = String::new();

    for (_page_num, page_id) in doc.get_pages() {
        let Ok(content) = doc.get_page_content(page_id) else {
            continue;
        };
        let operations = lopdf::content::Content::decode(&content)
            .map(|c| c.operations)
            .unwrap_or_default();

        for op in operations {
            match op.operator.as_str() {
                "Tj" | "'" | "\"" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        push_pdf_string(&mut text, bytes);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(parts)) = op.operands.first() {
                        for part in parts {
                            if let Object::String(bytes, _) = part {
                                push_pdf_string(&mut text, bytes);
                            }
                        }
                    }
                }
                "Td" | "TD" | "T*" => {
                    if !text.ends_with('\n') && !text.ends_with(' ') {
                        text.push(' ');
                    }
                }
                "ET" => {
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }

    Ok(text)
}

/// Decode a PDF string as UTF-8 when possible, Latin-1 otherwise.
fn push_pdf_string(out: &mut String, bytes: &[u8]) {
    match std::str::from_utf8(bytes) {
        Ok(s) => out.push_str(s),
        Err(_) => out.extend(bytes.iter().map(|&b| b as char)),
    }
}
