//! Fixed-size character chunking with overlap.
//!
//! Splitting is deterministic: the same document and configuration
//! always produce identical chunks. Chunks never exceed
//! `chunk_size` characters, and consecutive chunks from one document
//! share exactly `overlap` characters (the final chunk may be shorter).

use docqa_core::{Chunk, ChunkConfig, ChunkError, Document};
use tracing::debug;

/// Split documents into overlapping chunks, preserving document order.
///
/// `chunk_index` restarts at zero for each source document.
pub fn split_documents(
    documents: &[Document],
    config: &ChunkConfig,
) -> Result<Vec<Chunk>, ChunkError> {
    validate(config)?;

    let mut chunks = Vec::new();
    for document in documents {
        for (i, text) in split_text(&document.text, config).into_iter().enumerate() {
            chunks.push(Chunk {
                text,
                chunk_index: i as u32,
                metadata: document.metadata.clone(),
            });
        }
    }

    debug!("split {} documents into {} chunks", documents.len(), chunks.len());
    Ok(chunks)
}

fn validate(config: &ChunkConfig) -> Result<(), ChunkError> {
    if config.chunk_size == 0 {
        return Err(ChunkError::InvalidConfig(
            "chunk_size must be greater than zero".to_string(),
        ));
    }
    if config.overlap >= config.chunk_size {
        return Err(ChunkError::InvalidConfig(format!(
            "overlap ({}) must be smaller than chunk_size ({})",
            config.overlap, config.chunk_size
        )));
    }
    Ok(())
}

/// Split a single text into chunk strings.
///
/// Each chunk covers at most `chunk_size` characters. When a chunk does
/// not reach the end of the text, a break point is sought backwards from
/// the hard limit (paragraph, then line, then sentence boundary), and
/// the next chunk starts `overlap` characters before the chosen end.
pub fn split_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    if total == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut start = 0;

    loop {
        let hard_end = (start + config.chunk_size).min(total);
        let end = if hard_end < total {
            let preferred = break_point(&chars, start, hard_end);
            // A break too close to the start would stall the walk.
            if preferred > start + config.overlap {
                preferred
            } else {
                hard_end
            }
        } else {
            total
        };

        out.push(chars[start..end].iter().collect());
        if end >= total {
            break;
        }
        start = end - config.overlap;
    }

    out
}

/// Find a natural break position in `(start, limit]`, searching
/// backwards from the hard limit through the last quarter of the chunk.
fn break_point(chars: &[char], start: usize, limit: usize) -> usize {
    let floor = start + (limit - start) * 3 / 4;

    // Paragraph break
    for i in (floor..limit).rev() {
        if chars[i] == '\n' && i > 0 && chars[i - 1] == '\n' {
            return i + 1;
        }
    }

    // Line break
    for i in (floor..limit).rev() {
        if chars[i] == '\n' {
            return i + 1;
        }
    }

    // Sentence end
    for i in (floor..limit).rev() {
        if matches!(chars[i], '.' | '!' | '?') && i + 1 < limit && chars[i + 1].is_whitespace() {
            return i + 2;
        }
    }

    limit
}
