//! Typed record building
//!
//! Second parsing stage: every raw text field goes through the tolerant
//! coercion functions, in extraction order, producing the nullable typed
//! records in [`crate::models`].

use super::coercion::{to_date, to_float, to_int, to_string};
use super::event::RawEvent;
use super::raw::{
    RawCommentHeader, RawErrorHeader, RawHeader, RawMacroseismicHeader, RawMainHeader,
    RawPhaseData, RawWaveformHeader,
};
use crate::models::{
    CommentHeader, ErrorHeader, Event, Header, HeaderBuckets, MacroseismicHeader, MainHeader,
    PhaseData, WaveformHeader,
};

impl From<&RawMainHeader> for MainHeader {
    fn from(raw: &RawMainHeader) -> Self {
        Self {
            date: to_date(&raw.date),
            hour: to_int(&raw.hour),
            minute: to_int(&raw.minute),
            second: to_float(&raw.second),
            location_model: to_string(&raw.location_model),
            distance_indicator: to_string(&raw.distance_indicator),
            event_desc_id: to_string(&raw.event_desc_id),
            epicenter_latitude: to_float(&raw.epicenter_latitude),
            epicenter_longitude: to_float(&raw.epicenter_longitude),
            depth: to_float(&raw.depth),
            depth_control: to_string(&raw.depth_control),
            locating_indicator: to_string(&raw.locating_indicator),
            epicenter_reporting_agency: to_string(&raw.epicenter_reporting_agency),
            stations_used: to_int(&raw.stations_used),
            rms_time_residuals: to_float(&raw.rms_time_residuals),
            magnitude_1: to_float(&raw.magnitude_1),
            type_of_magnitude_1: to_string(&raw.type_of_magnitude_1),
            magnitude_reporting_agency_1: to_string(&raw.magnitude_reporting_agency_1),
            magnitude_2: to_float(&raw.magnitude_2),
            type_of_magnitude_2: to_string(&raw.type_of_magnitude_2),
            magnitude_reporting_agency_2: to_string(&raw.magnitude_reporting_agency_2),
            magnitude_3: to_float(&raw.magnitude_3),
            type_of_magnitude_3: to_string(&raw.type_of_magnitude_3),
            magnitude_reporting_agency_3: to_string(&raw.magnitude_reporting_agency_3),
        }
    }
}

impl From<&RawMacroseismicHeader> for MacroseismicHeader {
    fn from(raw: &RawMacroseismicHeader) -> Self {
        Self {
            description: to_string(&raw.description),
            diastrophism_code: to_string(&raw.diastrophism_code),
            tsunami_code: to_string(&raw.tsunami_code),
            seiche_code: to_string(&raw.seiche_code),
            cultural_effects: to_string(&raw.cultural_effects),
            unusual_effects: to_string(&raw.unusual_effects),
            maximum_observed_intensity: to_int(&raw.maximum_observed_intensity),
            maximum_intensity_qualifier: to_string(&raw.maximum_intensity_qualifier),
            intensity_scale: to_string(&raw.intensity_scale),
            macroseismic_latitude: to_float(&raw.macroseismic_latitude),
            macroseismic_longitude: to_float(&raw.macroseismic_longitude),
            macroseismic_magnitude: to_float(&raw.macroseismic_magnitude),
            type_of_magnitude: to_string(&raw.type_of_magnitude),
            logarithm_of_radius: to_float(&raw.logarithm_of_radius),
            logarithm_of_area_1: to_float(&raw.logarithm_of_area_1),
            bordering_intensity_1: to_int(&raw.bordering_intensity_1),
            logarithm_of_area_2: to_float(&raw.logarithm_of_area_2),
            bordering_intensity_2: to_int(&raw.bordering_intensity_2),
            quality_rank: to_string(&raw.quality_rank),
            reporting_agency: to_string(&raw.reporting_agency),
        }
    }
}

impl From<&RawCommentHeader> for CommentHeader {
    fn from(raw: &RawCommentHeader) -> Self {
        Self {
            text: to_string(&raw.text),
        }
    }
}

impl From<&RawErrorHeader> for ErrorHeader {
    fn from(raw: &RawErrorHeader) -> Self {
        Self {
            gap: to_int(&raw.gap),
            second_error: to_float(&raw.second_error),
            epicenter_latitude_error: to_float(&raw.epicenter_latitude_error),
            epicenter_longitude_error: to_float(&raw.epicenter_longitude_error),
            depth_error: to_float(&raw.depth_error),
            magnitude_error: to_float(&raw.magnitude_error),
        }
    }
}

impl From<&RawWaveformHeader> for WaveformHeader {
    fn from(raw: &RawWaveformHeader) -> Self {
        Self {
            info: to_string(&raw.info),
        }
    }
}

impl From<&RawHeader> for Header {
    fn from(raw: &RawHeader) -> Self {
        match raw {
            RawHeader::Main(h) => Header::Main(h.into()),
            RawHeader::Macroseismic(h) => Header::Macroseismic(h.into()),
            RawHeader::Comment(h) => Header::Comment(h.into()),
            RawHeader::Error(h) => Header::Error(h.into()),
            RawHeader::Waveform(h) => Header::Waveform(h.into()),
        }
    }
}

impl From<&RawPhaseData> for PhaseData {
    fn from(raw: &RawPhaseData) -> Self {
        Self {
            station_code: to_string(&raw.station_code),
            sp_instrument_type: to_string(&raw.sp_instrument_type),
            sp_component: to_string(&raw.sp_component),
            quality_indicator: to_string(&raw.quality_indicator),
            phase_type: to_string(&raw.phase_type),
            weight: to_int(&raw.weight),
            first_motion: to_string(&raw.first_motion),
            time_info: to_string(&raw.time_info),
            hour: to_int(&raw.hour),
            minute: to_int(&raw.minute),
            second: to_float(&raw.second),
            signal_duration: to_int(&raw.signal_duration),
            max_amplitude: to_float(&raw.max_amplitude),
            max_amplitude_period: to_float(&raw.max_amplitude_period),
            back_azimuth: to_float(&raw.back_azimuth),
            apparent_velocity: to_float(&raw.apparent_velocity),
            signal_to_noise: to_float(&raw.signal_to_noise),
            azimuth_residual: to_int(&raw.azimuth_residual),
            travel_time_residual: to_float(&raw.travel_time_residual),
            location_weight: to_int(&raw.location_weight),
            epicenter_distance: to_int(&raw.epicenter_distance),
            epicenter_to_station_azimuth: to_int(&raw.epicenter_to_station_azimuth),
        }
    }
}

/// Coerce a raw event into a typed [`Event`]
pub fn build_event(raw: &RawEvent) -> Event {
    let mut headers = HeaderBuckets::default();
    for header in &raw.headers {
        headers.push(Header::from(header));
    }

    Event {
        headers,
        phase_data: raw.phase_data.iter().map(PhaseData::from).collect(),
        author_id: raw.author_id.clone(),
        locating_program: raw.locating_program.clone(),
    }
}
