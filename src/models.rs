//! Core data structures for Nordic processing.
//!
//! Defines the typed header records, phase-pick records and the assembled
//! [`Event`]. Every field is nullable: a value is `None` when its source
//! columns were blank or could not be parsed.

use crate::constants::markers;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Header line types, discriminated by the marker in column 80
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HeaderType {
    Main,
    Macroseismic,
    Comment,
    Error,
    Waveform,
}

impl HeaderType {
    /// All header types in type-code order
    pub const ALL: [HeaderType; 5] = [
        HeaderType::Main,
        HeaderType::Macroseismic,
        HeaderType::Comment,
        HeaderType::Error,
        HeaderType::Waveform,
    ];

    /// Map a line type marker to its header type
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            markers::MAIN => Some(HeaderType::Main),
            markers::MACROSEISMIC => Some(HeaderType::Macroseismic),
            markers::COMMENT => Some(HeaderType::Comment),
            markers::ERROR => Some(HeaderType::Error),
            markers::WAVEFORM => Some(HeaderType::Waveform),
            _ => None,
        }
    }

    /// Numeric type code used by the Nordic format
    pub fn code(&self) -> u8 {
        match self {
            HeaderType::Main => 1,
            HeaderType::Macroseismic => 2,
            HeaderType::Comment => 3,
            HeaderType::Error => 5,
            HeaderType::Waveform => 6,
        }
    }
}

impl fmt::Display for HeaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderType::Main => "main",
            HeaderType::Macroseismic => "macroseismic",
            HeaderType::Comment => "comment",
            HeaderType::Error => "error",
            HeaderType::Waveform => "waveform",
        };
        write!(f, "{} (type {})", name, self.code())
    }
}

/// Main header: origin time, hypocenter and up to three magnitudes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MainHeader {
    pub date: Option<NaiveDate>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<f64>,
    pub location_model: Option<String>,
    pub distance_indicator: Option<String>,
    pub event_desc_id: Option<String>,
    pub epicenter_latitude: Option<f64>,
    pub epicenter_longitude: Option<f64>,
    pub depth: Option<f64>,
    pub depth_control: Option<String>,
    pub locating_indicator: Option<String>,
    pub epicenter_reporting_agency: Option<String>,
    pub stations_used: Option<i32>,
    pub rms_time_residuals: Option<f64>,
    pub magnitude_1: Option<f64>,
    pub type_of_magnitude_1: Option<String>,
    pub magnitude_reporting_agency_1: Option<String>,
    pub magnitude_2: Option<f64>,
    pub type_of_magnitude_2: Option<String>,
    pub magnitude_reporting_agency_2: Option<String>,
    pub magnitude_3: Option<f64>,
    pub type_of_magnitude_3: Option<String>,
    pub magnitude_reporting_agency_3: Option<String>,
}

/// Macroseismic header: felt effects and intensity information
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MacroseismicHeader {
    pub description: Option<String>,
    pub diastrophism_code: Option<String>,
    pub tsunami_code: Option<String>,
    pub seiche_code: Option<String>,
    pub cultural_effects: Option<String>,
    pub unusual_effects: Option<String>,
    pub maximum_observed_intensity: Option<i32>,
    pub maximum_intensity_qualifier: Option<String>,
    pub intensity_scale: Option<String>,
    pub macroseismic_latitude: Option<f64>,
    pub macroseismic_longitude: Option<f64>,
    pub macroseismic_magnitude: Option<f64>,
    pub type_of_magnitude: Option<String>,
    pub logarithm_of_radius: Option<f64>,
    pub logarithm_of_area_1: Option<f64>,
    pub bordering_intensity_1: Option<i32>,
    pub logarithm_of_area_2: Option<f64>,
    pub bordering_intensity_2: Option<i32>,
    pub quality_rank: Option<String>,
    pub reporting_agency: Option<String>,
}

/// Free-text comment header
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentHeader {
    pub text: Option<String>,
}

/// Error estimates for the main header's solution
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorHeader {
    pub gap: Option<i32>,
    pub second_error: Option<f64>,
    pub epicenter_latitude_error: Option<f64>,
    pub epicenter_longitude_error: Option<f64>,
    pub depth_error: Option<f64>,
    pub magnitude_error: Option<f64>,
}

/// Waveform file reference header
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WaveformHeader {
    pub info: Option<String>,
}

/// A typed header record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Header {
    Main(MainHeader),
    Macroseismic(MacroseismicHeader),
    Comment(CommentHeader),
    Error(ErrorHeader),
    Waveform(WaveformHeader),
}

impl Header {
    pub fn header_type(&self) -> HeaderType {
        match self {
            Header::Main(_) => HeaderType::Main,
            Header::Macroseismic(_) => HeaderType::Macroseismic,
            Header::Comment(_) => HeaderType::Comment,
            Header::Error(_) => HeaderType::Error,
            Header::Waveform(_) => HeaderType::Waveform,
        }
    }
}

/// One station's arrival reading
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseData {
    pub station_code: Option<String>,
    pub sp_instrument_type: Option<String>,
    pub sp_component: Option<String>,
    pub quality_indicator: Option<String>,
    pub phase_type: Option<String>,
    pub weight: Option<i32>,
    pub first_motion: Option<String>,
    pub time_info: Option<String>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<f64>,
    pub signal_duration: Option<i32>,
    pub max_amplitude: Option<f64>,
    pub max_amplitude_period: Option<f64>,
    pub back_azimuth: Option<f64>,
    pub apparent_velocity: Option<f64>,
    pub signal_to_noise: Option<f64>,
    pub azimuth_residual: Option<i32>,
    pub travel_time_residual: Option<f64>,
    pub location_weight: Option<i32>,
    pub epicenter_distance: Option<i32>,
    pub epicenter_to_station_azimuth: Option<i32>,
}

/// Headers of one event, grouped by type in line order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderBuckets {
    pub main: Vec<MainHeader>,
    pub macroseismic: Vec<MacroseismicHeader>,
    pub comment: Vec<CommentHeader>,
    pub error: Vec<ErrorHeader>,
    pub waveform: Vec<WaveformHeader>,
}

impl HeaderBuckets {
    /// Place a header in the bucket of its type
    pub fn push(&mut self, header: Header) {
        match header {
            Header::Main(h) => self.main.push(h),
            Header::Macroseismic(h) => self.macroseismic.push(h),
            Header::Comment(h) => self.comment.push(h),
            Header::Error(h) => self.error.push(h),
            Header::Waveform(h) => self.waveform.push(h),
        }
    }

    /// Number of headers held for a type
    pub fn count(&self, header_type: HeaderType) -> usize {
        match header_type {
            HeaderType::Main => self.main.len(),
            HeaderType::Macroseismic => self.macroseismic.len(),
            HeaderType::Comment => self.comment.len(),
            HeaderType::Error => self.error.len(),
            HeaderType::Waveform => self.waveform.len(),
        }
    }

    /// Total number of headers across all buckets
    pub fn total(&self) -> usize {
        HeaderType::ALL.iter().map(|t| self.count(*t)).sum()
    }
}

/// A fully typed Nordic event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub headers: HeaderBuckets,
    pub phase_data: Vec<PhaseData>,
    pub author_id: String,
    pub locating_program: String,
}

impl Event {
    pub fn main_headers(&self) -> &[MainHeader] {
        &self.headers.main
    }

    pub fn macroseismic_headers(&self) -> &[MacroseismicHeader] {
        &self.headers.macroseismic
    }

    pub fn comment_headers(&self) -> &[CommentHeader] {
        &self.headers.comment
    }

    pub fn error_headers(&self) -> &[ErrorHeader] {
        &self.headers.error
    }

    pub fn waveform_headers(&self) -> &[WaveformHeader] {
        &self.headers.waveform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_type_from_marker() {
        assert_eq!(HeaderType::from_marker('1'), Some(HeaderType::Main));
        assert_eq!(HeaderType::from_marker('2'), Some(HeaderType::Macroseismic));
        assert_eq!(HeaderType::from_marker('3'), Some(HeaderType::Comment));
        assert_eq!(HeaderType::from_marker('5'), Some(HeaderType::Error));
        assert_eq!(HeaderType::from_marker('6'), Some(HeaderType::Waveform));
        assert_eq!(HeaderType::from_marker('4'), None);
        assert_eq!(HeaderType::from_marker('7'), None);
        assert_eq!(HeaderType::from_marker(' '), None);
    }

    #[test]
    fn test_header_type_codes_round_trip_markers() {
        for header_type in HeaderType::ALL {
            let marker = char::from(b'0' + header_type.code());
            assert_eq!(HeaderType::from_marker(marker), Some(header_type));
        }
    }

    #[test]
    fn test_buckets_push_and_count() {
        let mut buckets = HeaderBuckets::default();
        buckets.push(Header::Comment(CommentHeader::default()));
        buckets.push(Header::Comment(CommentHeader::default()));
        buckets.push(Header::Error(ErrorHeader::default()));

        assert_eq!(buckets.count(HeaderType::Comment), 2);
        assert_eq!(buckets.count(HeaderType::Error), 1);
        assert_eq!(buckets.count(HeaderType::Main), 0);
        assert_eq!(buckets.total(), 3);
    }

    #[test]
    fn test_from_marker_uses_marker_constants() {
        assert_eq!(HeaderType::from_marker(markers::MAIN), Some(HeaderType::Main));
        assert_eq!(
            HeaderType::from_marker(markers::WAVEFORM),
            Some(HeaderType::Waveform)
        );
        assert_eq!(HeaderType::from_marker(markers::DATA), None);
    }

    #[test]
    fn test_header_type_display() {
        assert_eq!(HeaderType::Error.to_string(), "error (type 5)");
    }
}
