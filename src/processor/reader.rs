//! Event block reader for Nordic files
//!
//! A Nordic file is a sequence of events, each closed by a blank line. This
//! module splits a file into those blocks; it does not look at columns.

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// The lines of one event and where they start in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    /// 1-based line number of the block's first line
    pub first_line: usize,
    pub lines: Vec<String>,
}

/// Read a file and split it into event blocks
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, one
/// replacement char per bad byte in single-byte legacy encodings, so
/// column offsets stay intact.
pub fn read_event_blocks(path: &Path) -> Result<Vec<EventBlock>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let blocks = split_event_blocks(&text);

    debug!("Read {} event blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Split text into blank-line separated event blocks
pub fn split_event_blocks(text: &str) -> Vec<EventBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<EventBlock> = None;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        current
            .get_or_insert_with(|| EventBlock {
                first_line: index + 1,
                lines: Vec::new(),
            })
            .lines
            .push(line.to_string());
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
