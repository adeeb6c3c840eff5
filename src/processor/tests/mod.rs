//! Tests for the processing pipeline
//!
//! Fixture files are assembled from the parser's line builders and written
//! to temporary directories.


use crate::parser::tests::{build_line, comment_line, error_line, main_line, phase_line};
use std::path::{Path, PathBuf};

/// Join events into file text, each event closed by a blank line
pub fn bulletin_text(events: &[Vec<String>]) -> String {
    let mut text = String::new();
    for event in events {
        for line in event {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

/// A complete, valid event with two phase picks
pub fn valid_event() -> Vec<String> {
    vec![
        main_line(),
        error_line(),
        comment_line(" Relocated by analyst (JHA)"),
        phase_line(),
        phase_line(),
    ]
}

/// An event whose error header has an out-of-range gap and a type-4 line
pub fn invalid_event() -> Vec<String> {
    vec![
        main_line(),
        build_line(&[(5, "400")], '5'),
        build_line(&[(1, "STATION LIST")], '4'),
        phase_line(),
    ]
}

pub fn write_bulletin(dir: &Path, name: &str, events: &[Vec<String>]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bulletin_text(events)).unwrap();
    path
}
