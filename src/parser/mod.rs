//! Nordic event parser
//!
//! Converts the lines of one Nordic event into a typed [`Event`].
//!
//! ## Architecture
//!
//! Parsing runs in two explicit stages so that column offsets and the null
//! policy can be tested separately:
//! - [`line`] - char-indexed access to fixed column ranges
//! - [`classifier`] - header/data boundary and type-marker classification
//! - [`raw`] - per-record column extraction into trimmed strings
//! - [`event`] - event assembly and author id extraction
//! - [`coercion`] - tolerant string to typed value conversion
//! - [`typed`] - coercion of raw records into the typed models
//!
//! ## Usage
//!
//! ```rust
//! use nordic_processor::config::NordicConfig;
//! use nordic_processor::parser::parse_event;
//!
//! let comment = format!("{:<79}3", " Felt widely (BER)");
//!
//! let parsed = parse_event(&[comment], &NordicConfig::default());
//! assert_eq!(parsed.event.author_id, "BER");
//! assert_eq!(parsed.event.comment_headers().len(), 1);
//! ```

pub mod classifier;
pub mod coercion;
pub mod event;
pub mod line;
pub mod raw;
pub mod typed;

#[cfg(test)]
pub mod tests;

pub use classifier::{DroppedLine, LineKind, classify_line, find_data_boundary, split_event};
pub use event::{RawEvent, assemble_event, extract_author_id};
pub use line::FixedLine;
pub use raw::{RawHeader, RawPhaseData};
pub use typed::build_event;

use crate::config::NordicConfig;
use crate::models::Event;
use tracing::debug;

/// A typed event together with the header lines that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub event: Event,
    pub dropped: Vec<DroppedLine>,
}

/// Parse the lines of one event
///
/// Never fails: blank or malformed fields become `None` and header lines
/// with an unhandled type marker are listed in [`ParsedEvent::dropped`].
pub fn parse_event<S: AsRef<str>>(lines: &[S], config: &NordicConfig) -> ParsedEvent {
    let fixed: Vec<FixedLine> = lines
        .iter()
        .map(|line| FixedLine::new(line.as_ref()))
        .collect();

    let raw = assemble_event(&fixed, config);
    let event = build_event(&raw);

    debug!(
        "Parsed event: {} headers, {} phase records, author '{}'",
        event.headers.total(),
        event.phase_data.len(),
        event.author_id
    );

    ParsedEvent {
        event,
        dropped: raw.dropped,
    }
}
