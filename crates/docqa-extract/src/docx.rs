//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive whose main content lives in
//! `word/document.xml`. Run text sits inside `<w:t>` elements; paragraph
//! ends map to newlines. No full XML parser is needed for that.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extract the text content of a DOCX file.
pub fn extract_text(path: &Path) -> Result<String, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| format!("not a DOCX archive: {e}"))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| "missing word/document.xml".to_string())?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;

    Ok(document_xml_text(&xml))
}

/// Pull run text out of WordprocessingML.
///
/// Text immediately follows a `<w:t>` (or `<w:t xml:space="preserve">`)
/// open tag and runs until the next tag; `</w:p>` closes a paragraph.
fn document_xml_text(xml: &str) -> String {
    let mut out = String::new();

    for segment in xml.split('<').skip(1) {
        let (tag, trailing) = segment.split_once('>').unwrap_or((segment, ""));
        let name = tag.split([' ', '/']).next().unwrap_or("");

        if name == "w:t" && !tag.ends_with('/') {
            out.push_str(&unescape_xml(trailing));
        } else if tag == "/w:p" && !out.ends_with('\n') && !out.is_empty() {
            out.push('\n');
        }
    }

    out
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
