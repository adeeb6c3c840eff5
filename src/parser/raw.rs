//! Raw record extraction
//!
//! First parsing stage: every record kind copies its fixed column ranges out
//! of a line as trimmed strings. No type conversion happens here, so the
//! column layout can be checked independently of the null policy.

use super::line::FixedLine;
use crate::constants::{
    comment_columns, error_columns, macroseismic_columns, main_columns, phase_columns,
    waveform_columns,
};
use crate::models::HeaderType;

/// Main header fields as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMainHeader {
    pub date: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub location_model: String,
    pub distance_indicator: String,
    pub event_desc_id: String,
    pub epicenter_latitude: String,
    pub epicenter_longitude: String,
    pub depth: String,
    pub depth_control: String,
    pub locating_indicator: String,
    pub epicenter_reporting_agency: String,
    pub stations_used: String,
    pub rms_time_residuals: String,
    pub magnitude_1: String,
    pub type_of_magnitude_1: String,
    pub magnitude_reporting_agency_1: String,
    pub magnitude_2: String,
    pub type_of_magnitude_2: String,
    pub magnitude_reporting_agency_2: String,
    pub magnitude_3: String,
    pub type_of_magnitude_3: String,
    pub magnitude_reporting_agency_3: String,
}

impl RawMainHeader {
    pub fn from_line(line: &FixedLine) -> Self {
        use main_columns::*;

        // Date pieces are joined untrimmed; blanks inside are dealt with by to_date
        let date = format!(
            "{}-{}-{}",
            line.slice(YEAR),
            line.slice(MONTH),
            line.slice(DAY)
        );

        Self {
            date,
            hour: line.field(HOUR),
            minute: line.field(MINUTE),
            second: line.field(SECOND),
            location_model: line.field(LOCATION_MODEL),
            distance_indicator: line.field(DISTANCE_INDICATOR),
            event_desc_id: line.field(EVENT_DESC_ID),
            epicenter_latitude: line.field(LATITUDE),
            epicenter_longitude: line.field(LONGITUDE),
            depth: line.field(DEPTH),
            depth_control: line.field(DEPTH_CONTROL),
            locating_indicator: line.field(LOCATING_INDICATOR),
            epicenter_reporting_agency: line.field(REPORTING_AGENCY),
            stations_used: line.field(STATIONS_USED),
            rms_time_residuals: line.field(RMS_TIME_RESIDUALS),
            magnitude_1: line.field(MAGNITUDE_1),
            type_of_magnitude_1: line.field(MAGNITUDE_TYPE_1),
            magnitude_reporting_agency_1: line.field(MAGNITUDE_AGENCY_1),
            magnitude_2: line.field(MAGNITUDE_2),
            type_of_magnitude_2: line.field(MAGNITUDE_TYPE_2),
            magnitude_reporting_agency_2: line.field(MAGNITUDE_AGENCY_2),
            magnitude_3: line.field(MAGNITUDE_3),
            type_of_magnitude_3: line.field(MAGNITUDE_TYPE_3),
            magnitude_reporting_agency_3: line.field(MAGNITUDE_AGENCY_3),
        }
    }
}

/// Macroseismic header fields as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMacroseismicHeader {
    pub description: String,
    pub diastrophism_code: String,
    pub tsunami_code: String,
    pub seiche_code: String,
    pub cultural_effects: String,
    pub unusual_effects: String,
    pub maximum_observed_intensity: String,
    pub maximum_intensity_qualifier: String,
    pub intensity_scale: String,
    pub macroseismic_latitude: String,
    pub macroseismic_longitude: String,
    pub macroseismic_magnitude: String,
    pub type_of_magnitude: String,
    pub logarithm_of_radius: String,
    pub logarithm_of_area_1: String,
    pub bordering_intensity_1: String,
    pub logarithm_of_area_2: String,
    pub bordering_intensity_2: String,
    pub quality_rank: String,
    pub reporting_agency: String,
}

impl RawMacroseismicHeader {
    pub fn from_line(line: &FixedLine) -> Self {
        use macroseismic_columns::*;

        Self {
            description: line.field(DESCRIPTION),
            diastrophism_code: line.field(DIASTROPHISM_CODE),
            tsunami_code: line.field(TSUNAMI_CODE),
            seiche_code: line.field(SEICHE_CODE),
            cultural_effects: line.field(CULTURAL_EFFECTS),
            unusual_effects: line.field(UNUSUAL_EFFECTS),
            maximum_observed_intensity: line.field(MAXIMUM_OBSERVED_INTENSITY),
            maximum_intensity_qualifier: line.field(MAXIMUM_INTENSITY_QUALIFIER),
            intensity_scale: line.field(INTENSITY_SCALE),
            macroseismic_latitude: line.field(LATITUDE),
            macroseismic_longitude: line.field(LONGITUDE),
            macroseismic_magnitude: line.field(MAGNITUDE),
            type_of_magnitude: line.field(MAGNITUDE_TYPE),
            logarithm_of_radius: line.field(LOGARITHM_OF_RADIUS),
            logarithm_of_area_1: line.field(LOGARITHM_OF_AREA_1),
            bordering_intensity_1: line.field(BORDERING_INTENSITY_1),
            logarithm_of_area_2: line.field(LOGARITHM_OF_AREA_2),
            bordering_intensity_2: line.field(BORDERING_INTENSITY_2),
            quality_rank: line.field(QUALITY_RANK),
            reporting_agency: line.field(REPORTING_AGENCY),
        }
    }
}

/// Comment header text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCommentHeader {
    pub text: String,
}

impl RawCommentHeader {
    pub fn from_line(line: &FixedLine) -> Self {
        Self {
            text: line.field(comment_columns::TEXT),
        }
    }
}

/// Error header fields as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawErrorHeader {
    pub gap: String,
    pub second_error: String,
    pub epicenter_latitude_error: String,
    pub epicenter_longitude_error: String,
    pub depth_error: String,
    pub magnitude_error: String,
}

impl RawErrorHeader {
    pub fn from_line(line: &FixedLine) -> Self {
        use error_columns::*;

        Self {
            gap: line.field(GAP),
            second_error: line.field(SECOND_ERROR),
            epicenter_latitude_error: line.field(LATITUDE_ERROR),
            epicenter_longitude_error: line.field(LONGITUDE_ERROR),
            depth_error: line.field(DEPTH_ERROR),
            magnitude_error: line.field(MAGNITUDE_ERROR),
        }
    }
}

/// Waveform header text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWaveformHeader {
    pub info: String,
}

impl RawWaveformHeader {
    pub fn from_line(line: &FixedLine) -> Self {
        Self {
            info: line.field(waveform_columns::INFO),
        }
    }
}

/// A classified header line after column extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawHeader {
    Main(RawMainHeader),
    Macroseismic(RawMacroseismicHeader),
    Comment(RawCommentHeader),
    Error(RawErrorHeader),
    Waveform(RawWaveformHeader),
}

impl RawHeader {
    /// Run the extractor belonging to `header_type`
    pub fn extract(header_type: HeaderType, line: &FixedLine) -> Self {
        match header_type {
            HeaderType::Main => RawHeader::Main(RawMainHeader::from_line(line)),
            HeaderType::Macroseismic => {
                RawHeader::Macroseismic(RawMacroseismicHeader::from_line(line))
            }
            HeaderType::Comment => RawHeader::Comment(RawCommentHeader::from_line(line)),
            HeaderType::Error => RawHeader::Error(RawErrorHeader::from_line(line)),
            HeaderType::Waveform => RawHeader::Waveform(RawWaveformHeader::from_line(line)),
        }
    }

    pub fn header_type(&self) -> HeaderType {
        match self {
            RawHeader::Main(_) => HeaderType::Main,
            RawHeader::Macroseismic(_) => HeaderType::Macroseismic,
            RawHeader::Comment(_) => HeaderType::Comment,
            RawHeader::Error(_) => HeaderType::Error,
            RawHeader::Waveform(_) => HeaderType::Waveform,
        }
    }
}

/// Phase-pick data fields as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPhaseData {
    pub station_code: String,
    pub sp_instrument_type: String,
    pub sp_component: String,
    pub quality_indicator: String,
    pub phase_type: String,
    pub weight: String,
    pub first_motion: String,
    pub time_info: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub signal_duration: String,
    pub max_amplitude: String,
    pub max_amplitude_period: String,
    pub back_azimuth: String,
    pub apparent_velocity: String,
    pub signal_to_noise: String,
    pub azimuth_residual: String,
    pub travel_time_residual: String,
    pub location_weight: String,
    pub epicenter_distance: String,
    pub epicenter_to_station_azimuth: String,
}

impl RawPhaseData {
    pub fn from_line(line: &FixedLine) -> Self {
        use phase_columns::*;

        Self {
            station_code: line.field(STATION_CODE),
            sp_instrument_type: line.field(INSTRUMENT_TYPE),
            sp_component: line.field(COMPONENT),
            quality_indicator: line.field(QUALITY_INDICATOR),
            phase_type: line.field(PHASE_TYPE),
            weight: line.field(WEIGHT),
            first_motion: line.field(FIRST_MOTION),
            time_info: line.field(TIME_INFO),
            hour: line.field(HOUR),
            minute: line.field(MINUTE),
            second: line.field(SECOND),
            signal_duration: line.field(SIGNAL_DURATION),
            max_amplitude: line.field(MAX_AMPLITUDE),
            max_amplitude_period: line.field(MAX_AMPLITUDE_PERIOD),
            back_azimuth: line.field(BACK_AZIMUTH),
            apparent_velocity: line.field(APPARENT_VELOCITY),
            signal_to_noise: line.field(SIGNAL_TO_NOISE),
            azimuth_residual: line.field(AZIMUTH_RESIDUAL),
            travel_time_residual: line.field(TRAVEL_TIME_RESIDUAL),
            location_weight: line.field(LOCATION_WEIGHT),
            epicenter_distance: line.field(EPICENTER_DISTANCE),
            epicenter_to_station_azimuth: line.field(EPICENTER_TO_STATION_AZIMUTH),
        }
    }
}
