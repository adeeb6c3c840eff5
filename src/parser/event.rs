//! Event assembly
//!
//! Turns the lines of one event into a [`RawEvent`]: classified raw headers,
//! raw phase-pick records, the author id found in the comments, and the
//! locating program.

use super::classifier::{DroppedLine, split_event};
use super::line::FixedLine;
use super::raw::{RawHeader, RawPhaseData};
use crate::config::NordicConfig;
use crate::models::HeaderType;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Cheap gate before the positional author scan
static AUTHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.{3}\)").expect("author tag pattern is valid"));

/// An event after column extraction, before type coercion
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub headers: Vec<RawHeader>,
    pub phase_data: Vec<RawPhaseData>,
    pub author_id: String,
    pub locating_program: String,
    pub dropped: Vec<DroppedLine>,
}

impl RawEvent {
    /// Headers of one type, in line order
    pub fn headers_of(&self, header_type: HeaderType) -> impl Iterator<Item = &RawHeader> {
        self.headers
            .iter()
            .filter(move |header| header.header_type() == header_type)
    }

    /// Text of every comment header, in line order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().filter_map(|header| match header {
            RawHeader::Comment(comment) => Some(comment.text.as_str()),
            _ => None,
        })
    }
}

/// Assemble one event from its lines
pub fn assemble_event(lines: &[FixedLine], config: &NordicConfig) -> RawEvent {
    let split = split_event(lines);

    for dropped in &split.dropped {
        warn!(
            "Dropping header line {} with unhandled type marker '{}'",
            dropped.index, dropped.marker
        );
    }

    let headers: Vec<RawHeader> = split
        .headers
        .iter()
        .map(|(header_type, line)| RawHeader::extract(*header_type, line))
        .collect();

    let phase_data = split.data.iter().map(RawPhaseData::from_line).collect();

    let mut event = RawEvent {
        headers,
        phase_data,
        author_id: String::new(),
        locating_program: config.locating_program.trim().to_string(),
        dropped: split.dropped,
    };

    let author_id = extract_author_id(event.comments(), &config.default_author_id);
    event.author_id = author_id.trim().to_string();

    event
}

/// Find the analyst tag in comment text
///
/// A tag is any three chars between a '(' and a ')' four positions later.
/// Every position of every comment is examined and the last tag found wins.
pub fn extract_author_id<'a, I>(comments: I, default: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut author_id = default.to_string();

    for comment in comments {
        if !AUTHOR_TAG.is_match(comment) {
            continue;
        }

        let chars: Vec<char> = comment.chars().collect();
        for window in chars.windows(5) {
            if window[0] == '(' && window[4] == ')' {
                author_id = window[1..4].iter().collect();
            }
        }
    }

    author_id
}
