//! Tests for the Nordic event parser
//!
//! Fixture lines are built by writing field text at 0-based offsets into a
//! blank 80-char line, so every test states the columns it relies on.


use crate::constants::{LINE_WIDTH, MARKER_OFFSET};

/// Build an 80-char line with `fields` written at their offsets and `marker` in column 80
pub fn build_line(fields: &[(usize, &str)], marker: char) -> String {
    let mut chars = vec![' '; LINE_WIDTH];
    for (offset, text) in fields {
        for (i, c) in text.chars().enumerate() {
            chars[offset + i] = c;
        }
    }
    chars[MARKER_OFFSET] = marker;
    chars.into_iter().collect()
}

/// Main header: 1996-06-03 19:55 35.5, 60.123N 5.456E, 12 km, three magnitudes
pub fn main_line() -> String {
    build_line(
        &[
            (1, "1996"),
            (6, "06"),
            (8, "03"),
            (11, "19"),
            (13, "55"),
            (16, "35.5"),
            (20, "A"),
            (21, "L"),
            (22, "E"),
            (23, "60.123"),
            (31, "5.456"),
            (39, "12.0"),
            (43, "F"),
            (45, "BER"),
            (49, "12"),
            (51, "0.90"),
            (56, "3.1"),
            (59, "L"),
            (60, "BER"),
            (64, "2.9"),
            (67, "C"),
            (68, "BER"),
            (72, "3.3"),
            (75, "W"),
            (76, "NAO"),
        ],
        '1',
    )
}

/// Macroseismic header with both overlapping column pairs populated
pub fn macroseismic_line() -> String {
    build_line(
        &[
            (5, "Felt in Bergen"),
            (22, "F"),
            (23, "T"),
            (24, "Q"),
            (25, "C"),
            (26, "U"),
            (28, "5"),
            (29, "+"),
            (30, "MM"),
            (33, "60.400"),
            (42, "5.300"),
            (48, "3.5"),
            (52, "1.25"),
            (56, "2.500"),
            (62, "4"),
            (63, "3.250"),
            (69, "3"),
            (72, "BER"),
        ],
        '2',
    )
}

pub fn comment_line(text: &str) -> String {
    build_line(&[(1, text)], '3')
}

pub fn error_line() -> String {
    build_line(
        &[
            (5, "120"),
            (17, "0.5"),
            (25, "2.345"),
            (32, "3.456"),
            (40, "4.5"),
            (56, "0.2"),
        ],
        '5',
    )
}

pub fn waveform_line(text: &str) -> String {
    build_line(&[(1, text)], '6')
}

/// Phase pick for station BER with every column populated
pub fn phase_line() -> String {
    build_line(
        &[
            (1, "BER"),
            (6, "S"),
            (7, "Z"),
            (9, "I"),
            (10, "P"),
            (14, "1"),
            (16, "C"),
            (18, "19"),
            (20, "55"),
            (23, "42.12"),
            (31, "45"),
            (34, "123.4"),
            (41, "0.50"),
            (46, "275.0"),
            (52, "6.5"),
            (56, "12.0"),
            (61, "-5"),
            (63, "-0.12"),
            (69, "8"),
            (72, "123"),
            (76, "271"),
        ],
        ' ',
    )
}

/// Phase pick with only a station code and a phase
pub fn sparse_phase_line(station: &str, phase: &str) -> String {
    build_line(&[(1, station), (10, phase)], ' ')
}
