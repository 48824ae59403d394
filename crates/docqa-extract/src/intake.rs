//! Upload intake: flatten uploaded files into supported document blobs.
//!
//! ZIP archives are unpacked in memory and their entries filtered by
//! extension, exactly like directly uploaded files. This stage is a
//! filter, not a validator: unsupported files are skipped silently.

use std::io::{Cursor, Read};

use docqa_core::{DocumentKind, ExtractedBlob, RawFile};
use tracing::{debug, warn};

/// Extract supported document blobs from a batch of uploaded files.
///
/// Returns an empty vector (not an error) when nothing survives the
/// filter; the pipeline maps that to [`docqa_core::Error::NoValidFiles`].
#[must_use]
pub fn extract_documents(files: &[RawFile]) -> Vec<ExtractedBlob> {
    let mut blobs = Vec::new();

    for file in files {
        if is_zip(&file.name) {
            match unpack_archive(file) {
                Ok(mut entries) => blobs.append(&mut entries),
                Err(err) => {
                    warn!("skipping unreadable archive {}: {}", file.name, err);
                }
            }
        } else if let Some(kind) = DocumentKind::from_name(&file.name) {
            blobs.push(ExtractedBlob {
                source: file.name.clone(),
                kind,
                data: file.content.clone(),
            });
        } else {
            debug!("skipping unsupported file {}", file.name);
        }
    }

    blobs
}

fn is_zip(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".zip")
}

fn unpack_archive(file: &RawFile) -> Result<Vec<ExtractedBlob>, zip::result::ZipError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(&file.content))?;
    let mut blobs = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        let Some(kind) = DocumentKind::from_name(&name) else {
            debug!("skipping unsupported archive entry {}", name);
            continue;
        };

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        blobs.push(ExtractedBlob {
            source: name,
            kind,
            data,
        });
    }

    Ok(blobs)
}
