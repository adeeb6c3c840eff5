//! Constraint tables for comment, error and waveform headers
//!
//! Main, macroseismic and phase-data records carry no declared constraints
//! and are not checked.

use super::{ValidationSink, validate_float, validate_integer, validate_string};
use crate::constants::constraints::{
    DEPTH_ERROR, GAP, LATITUDE_ERROR, LONGITUDE_ERROR, MAGNITUDE_ERROR, MAX_TEXT_LENGTH,
    SECOND_ERROR,
};
use crate::models::{CommentHeader, ErrorHeader, Event, HeaderType, WaveformHeader};

pub fn validate_comment_header(header: &CommentHeader, sink: &mut dyn ValidationSink) -> bool {
    validate_string(
        header.text.as_deref(),
        "comment",
        0,
        MAX_TEXT_LENGTH,
        false,
        HeaderType::Comment,
        sink,
    )
}

/// Every field is checked even after a failure
pub fn validate_error_header(header: &ErrorHeader, sink: &mut dyn ValidationSink) -> bool {
    let header_type = HeaderType::Error;
    let mut valid = true;

    valid &= validate_integer(header.gap, "gap", GAP.0, GAP.1, true, header_type, sink);
    valid &= validate_float(
        header.second_error,
        "second error",
        SECOND_ERROR.0,
        SECOND_ERROR.1,
        true,
        header_type,
        sink,
    );
    valid &= validate_float(
        header.epicenter_latitude_error,
        "epicenter latitude error",
        LATITUDE_ERROR.0,
        LATITUDE_ERROR.1,
        true,
        header_type,
        sink,
    );
    valid &= validate_float(
        header.epicenter_longitude_error,
        "epicenter longitude error",
        LONGITUDE_ERROR.0,
        LONGITUDE_ERROR.1,
        true,
        header_type,
        sink,
    );
    valid &= validate_float(
        header.depth_error,
        "depth error",
        DEPTH_ERROR.0,
        DEPTH_ERROR.1,
        true,
        header_type,
        sink,
    );
    valid &= validate_float(
        header.magnitude_error,
        "magnitude error",
        MAGNITUDE_ERROR.0,
        MAGNITUDE_ERROR.1,
        true,
        header_type,
        sink,
    );

    valid
}

pub fn validate_waveform_header(header: &WaveformHeader, sink: &mut dyn ValidationSink) -> bool {
    validate_string(
        header.info.as_deref(),
        "waveform string",
        0,
        MAX_TEXT_LENGTH,
        false,
        HeaderType::Waveform,
        sink,
    )
}

/// Validate every checked header of an event
pub fn validate_event(event: &Event, sink: &mut dyn ValidationSink) -> bool {
    let mut valid = true;

    for header in event.comment_headers() {
        valid &= validate_comment_header(header, sink);
    }
    for header in event.error_headers() {
        valid &= validate_error_header(header, sink);
    }
    for header in event.waveform_headers() {
        valid &= validate_waveform_header(header, sink);
    }

    valid
}
