//! Header/data boundary detection and line classification
//!
//! An event is a run of header lines followed by phase-pick data lines. The
//! data block starts at the first line (after the first) whose type marker is
//! blank. Header lines are classified by their marker; a header line whose
//! marker has no extractor is dropped and reported back as a [`DroppedLine`].

use super::line::FixedLine;
use crate::constants::markers;
use crate::models::HeaderType;
use serde::Serialize;

/// Classification of a single line by its type marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header(HeaderType),
    Data,
    /// A marker with no extractor, e.g. type 4, 7, E, H or I lines
    Unhandled(char),
}

/// Classify a line by its column-80 marker
pub fn classify_line(line: &FixedLine) -> LineKind {
    let marker = line.marker();
    if marker == markers::DATA {
        return LineKind::Data;
    }

    match HeaderType::from_marker(marker) {
        Some(header_type) => LineKind::Header(header_type),
        None => LineKind::Unhandled(marker),
    }
}

/// Index of the first data line
///
/// The scan starts at the second line, so the first line always belongs to
/// the header block. Returns `lines.len()` when no data line exists.
pub fn find_data_boundary(lines: &[FixedLine]) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.marker() == markers::DATA)
        .map(|(index, _)| index)
        .unwrap_or(lines.len())
}

/// A header-block line that was not turned into a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DroppedLine {
    /// Offset of the line within its event
    pub index: usize,
    pub marker: char,
}

/// Lines of one event split at the header/data boundary
#[derive(Debug)]
pub struct SplitEvent<'a> {
    /// Classified header lines in their original order
    pub headers: Vec<(HeaderType, &'a FixedLine)>,
    /// Phase-pick data lines in their original order
    pub data: &'a [FixedLine],
    pub dropped: Vec<DroppedLine>,
    pub boundary: usize,
}

/// Split an event into classified headers and data lines
pub fn split_event(lines: &[FixedLine]) -> SplitEvent<'_> {
    let boundary = find_data_boundary(lines);
    let mut headers = Vec::with_capacity(boundary);
    let mut dropped = Vec::new();

    for (index, line) in lines[..boundary].iter().enumerate() {
        match classify_line(line) {
            LineKind::Header(header_type) => headers.push((header_type, line)),
            LineKind::Data => dropped.push(DroppedLine {
                index,
                marker: markers::DATA,
            }),
            LineKind::Unhandled(marker) => dropped.push(DroppedLine { index, marker }),
        }
    }

    SplitEvent {
        headers,
        data: &lines[boundary..],
        dropped,
        boundary,
    }
}
