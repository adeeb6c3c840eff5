//! Fixed-column access to a single Nordic line

use crate::constants::{MARKER_OFFSET, markers};
use std::ops::Range;

/// A line addressed by 0-based char offsets
///
/// Ranges that run past the end of the line are clipped, so short lines read
/// as if they were padded with blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLine {
    chars: Vec<char>,
}

impl FixedLine {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Type marker in column 80; a line too short to have one reads as blank
    pub fn marker(&self) -> char {
        self.chars
            .get(MARKER_OFFSET)
            .copied()
            .unwrap_or(markers::DATA)
    }

    /// Untrimmed text of a column range
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Trimmed text of a column range
    pub fn field(&self, range: Range<usize>) -> String {
        self.slice(range).trim().to_string()
    }
}

impl From<&str> for FixedLine {
    fn from(line: &str) -> Self {
        FixedLine::new(line)
    }
}
