//! Document loading: blobs to parsed [`Document`]s.
//!
//! Each blob is written to a named temporary file for the duration of
//! parsing only; the [`tempfile::NamedTempFile`] guard removes it on
//! every exit path, including parse failure. Parsing itself is blocking
//! work and runs on the blocking thread pool.

use std::io::Write;

use docqa_core::{Document, DocumentKind, ExtractedBlob, LoadError};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{docx, pdf};

/// Load every blob into one or more parsed documents.
///
/// Policy: the first unparseable blob aborts the whole batch. A failed
/// batch must never produce a queryable session, so partial results are
/// not returned.
pub async fn load_documents(blobs: &[ExtractedBlob]) -> Result<Vec<Document>, LoadError> {
    let mut documents = Vec::with_capacity(blobs.len());

    for blob in blobs {
        let source = blob.source.clone();
        let owned = blob.clone();
        let docs = tokio::task::spawn_blocking(move || parse_blob(&owned))
            .await
            .map_err(|e| LoadError::Parse {
                source_name: source,
                message: format!("parse task failed: {e}"),
            })??;
        documents.extend(docs);
    }

    debug!("loaded {} documents from {} blobs", documents.len(), blobs.len());
    Ok(documents)
}

fn parse_blob(blob: &ExtractedBlob) -> Result<Vec<Document>, LoadError> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(&blob.data)?;
    tmp.flush()?;

    let text = match blob.kind {
        DocumentKind::Pdf => pdf::extract_text(tmp.path()),
        DocumentKind::Docx => docx::extract_text(tmp.path()),
    }
    .map_err(|message| LoadError::Parse {
        source_name: blob.source.clone(),
        message,
    })?;

    debug!("parsed {} ({} chars)", blob.source, text.len());
    Ok(vec![Document::new(text, &blob.source)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write as _};
    use zip::write::FileOptions;

    fn docx_blob(source: &str, paragraphs: &[&str]) -> ExtractedBlob {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!("<w:document><w:body>{body}</w:body></w:document>");

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        drop(writer);

        ExtractedBlob {
            source: source.to_string(),
            kind: DocumentKind::Docx,
            data: cursor.into_inner(),
        }
    }

    #[tokio::test]
    async fn test_load_docx_blob() {
        let blob = docx_blob("letter.docx", &["Dear reader,", "Goodbye."]);
        let documents = load_documents(&[blob]).await.unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].text, "Dear reader,\nGoodbye.\n");
        assert_eq!(documents[0].source(), Some("letter.docx"));
    }

    #[tokio::test]
    async fn test_load_empty_batch() {
        let documents = load_documents(&[]).await.unwrap();
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_blob_aborts_batch() {
        let good = docx_blob("good.docx", &["fine"]);
        let bad = ExtractedBlob {
            source: "bad.pdf".to_string(),
            kind: DocumentKind::Pdf,
            data: b"this is not a pdf".to_vec(),
        };

        let result = load_documents(&[good, bad]).await;
        match result {
            Err(LoadError::Parse { source_name, .. }) => assert_eq!(source_name, "bad.pdf"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blob_order_preserved() {
        let blobs = vec![
            docx_blob("a.docx", &["first"]),
            docx_blob("b.docx", &["second"]),
        ];
        let documents = load_documents(&blobs).await.unwrap();

        assert_eq!(documents[0].source(), Some("a.docx"));
        assert_eq!(documents[1].source(), Some("b.docx"));
    }
}
