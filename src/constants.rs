//! Application constants for the Nordic processor
//!
//! This module contains the format-mandated column layout of Nordic bulletin
//! lines, the line type markers, and the default values used when a bulletin
//! does not carry the information itself.
//!
//! Column ranges are 0-based char offsets, end-exclusive. They are fixed by
//! the Nordic format and are deliberately not configurable.

use std::ops::Range;

// =============================================================================
// Line Layout
// =============================================================================

/// Width of a Nordic line in characters
pub const LINE_WIDTH: usize = 80;

/// Offset of the line type marker (column 80 in the 1-based format description)
pub const MARKER_OFFSET: usize = 79;

/// Line type markers found at [`MARKER_OFFSET`]
pub mod markers {
    /// Main header: origin time, hypocenter, magnitudes
    pub const MAIN: char = '1';

    /// Macroseismic header
    pub const MACROSEISMIC: char = '2';

    /// Free-text comment header
    pub const COMMENT: char = '3';

    /// Error estimate header
    pub const ERROR: char = '5';

    /// Waveform file reference header
    pub const WAVEFORM: char = '6';

    /// Phase-pick data line
    pub const DATA: char = ' ';
}

// =============================================================================
// Default Values
// =============================================================================

/// Author id used when no comment carries a parenthesised 3-char tag
pub const DEFAULT_AUTHOR_ID: &str = "---";

/// Locating program recorded for every event
pub const DEFAULT_LOCATING_PROGRAM: &str = "NOPROGRAM";

/// Default file patterns searched for when the input is a directory
pub const DEFAULT_FILE_PATTERNS: &[&str] = &["*.nor", "*.out", "*.S[0-9][0-9][0-9][0-9][0-9][0-9]"];

/// Suffix of the per-file event table written by the Parquet export
pub const EVENTS_FILE_SUFFIX: &str = "_events.parquet";

/// Suffix of the per-file phase table written by the Parquet export
pub const PHASES_FILE_SUFFIX: &str = "_phases.parquet";

// =============================================================================
// Column Layouts
// =============================================================================

/// Main header (type 1) columns
pub mod main_columns {
    use super::Range;

    // The date is assembled from three untrimmed pieces joined with '-'
    pub const YEAR: Range<usize> = 1..5;
    pub const MONTH: Range<usize> = 6..8;
    pub const DAY: Range<usize> = 8..10;

    pub const HOUR: Range<usize> = 11..13;
    pub const MINUTE: Range<usize> = 13..15;
    pub const SECOND: Range<usize> = 16..20;
    pub const LOCATION_MODEL: Range<usize> = 20..21;
    pub const DISTANCE_INDICATOR: Range<usize> = 21..22;
    pub const EVENT_DESC_ID: Range<usize> = 22..23;
    pub const LATITUDE: Range<usize> = 23..30;
    pub const LONGITUDE: Range<usize> = 30..38;
    pub const DEPTH: Range<usize> = 38..43;
    pub const DEPTH_CONTROL: Range<usize> = 43..44;
    pub const LOCATING_INDICATOR: Range<usize> = 44..45;
    pub const REPORTING_AGENCY: Range<usize> = 45..48;
    pub const STATIONS_USED: Range<usize> = 48..51;
    pub const RMS_TIME_RESIDUALS: Range<usize> = 51..55;
    pub const MAGNITUDE_1: Range<usize> = 56..59;
    pub const MAGNITUDE_TYPE_1: Range<usize> = 59..60;
    pub const MAGNITUDE_AGENCY_1: Range<usize> = 60..63;
    pub const MAGNITUDE_2: Range<usize> = 64..67;
    pub const MAGNITUDE_TYPE_2: Range<usize> = 67..68;
    pub const MAGNITUDE_AGENCY_2: Range<usize> = 68..71;
    pub const MAGNITUDE_3: Range<usize> = 72..75;
    pub const MAGNITUDE_TYPE_3: Range<usize> = 75..76;
    pub const MAGNITUDE_AGENCY_3: Range<usize> = 76..79;
}

/// Macroseismic header (type 2) columns
///
/// `MAGNITUDE_TYPE` overlaps `LOGARITHM_OF_RADIUS` and `QUALITY_RANK`
/// overlaps `REPORTING_AGENCY`. Both overlaps are part of the published
/// layout and are kept as-is.
pub mod macroseismic_columns {
    use super::Range;

    pub const DESCRIPTION: Range<usize> = 5..20;
    pub const DIASTROPHISM_CODE: Range<usize> = 22..23;
    pub const TSUNAMI_CODE: Range<usize> = 23..24;
    pub const SEICHE_CODE: Range<usize> = 24..25;
    pub const CULTURAL_EFFECTS: Range<usize> = 25..26;
    pub const UNUSUAL_EFFECTS: Range<usize> = 26..27;
    pub const MAXIMUM_OBSERVED_INTENSITY: Range<usize> = 27..29;
    pub const MAXIMUM_INTENSITY_QUALIFIER: Range<usize> = 29..30;
    pub const INTENSITY_SCALE: Range<usize> = 30..32;
    pub const LATITUDE: Range<usize> = 33..39;
    pub const LONGITUDE: Range<usize> = 40..47;
    pub const MAGNITUDE: Range<usize> = 48..51;
    pub const MAGNITUDE_TYPE: Range<usize> = 52..53;
    pub const LOGARITHM_OF_RADIUS: Range<usize> = 52..56;
    pub const LOGARITHM_OF_AREA_1: Range<usize> = 56..61;
    pub const BORDERING_INTENSITY_1: Range<usize> = 61..63;
    pub const LOGARITHM_OF_AREA_2: Range<usize> = 63..68;
    pub const BORDERING_INTENSITY_2: Range<usize> = 68..70;
    pub const QUALITY_RANK: Range<usize> = 72..73;
    pub const REPORTING_AGENCY: Range<usize> = 72..75;
}

/// Comment header (type 3) columns
pub mod comment_columns {
    use super::Range;

    pub const TEXT: Range<usize> = 1..79;
}

/// Error header (type 5) columns
pub mod error_columns {
    use super::Range;

    pub const GAP: Range<usize> = 5..8;
    pub const SECOND_ERROR: Range<usize> = 16..20;
    pub const LATITUDE_ERROR: Range<usize> = 24..30;
    pub const LONGITUDE_ERROR: Range<usize> = 31..38;
    pub const DEPTH_ERROR: Range<usize> = 40..43;
    pub const MAGNITUDE_ERROR: Range<usize> = 56..59;
}

/// Waveform header (type 6) columns
pub mod waveform_columns {
    use super::Range;

    pub const INFO: Range<usize> = 1..79;
}

/// Phase-pick data line columns
pub mod phase_columns {
    use super::Range;

    pub const STATION_CODE: Range<usize> = 1..5;
    pub const INSTRUMENT_TYPE: Range<usize> = 6..7;
    pub const COMPONENT: Range<usize> = 7..8;
    pub const QUALITY_INDICATOR: Range<usize> = 9..10;
    pub const PHASE_TYPE: Range<usize> = 10..14;
    pub const WEIGHT: Range<usize> = 14..15;
    pub const FIRST_MOTION: Range<usize> = 16..17;
    pub const TIME_INFO: Range<usize> = 17..18;
    pub const HOUR: Range<usize> = 18..20;
    pub const MINUTE: Range<usize> = 20..22;
    pub const SECOND: Range<usize> = 23..28;
    pub const SIGNAL_DURATION: Range<usize> = 29..33;
    pub const MAX_AMPLITUDE: Range<usize> = 34..40;
    pub const MAX_AMPLITUDE_PERIOD: Range<usize> = 41..45;
    pub const BACK_AZIMUTH: Range<usize> = 46..52;
    pub const APPARENT_VELOCITY: Range<usize> = 52..56;
    pub const SIGNAL_TO_NOISE: Range<usize> = 56..60;
    pub const AZIMUTH_RESIDUAL: Range<usize> = 60..63;
    pub const TRAVEL_TIME_RESIDUAL: Range<usize> = 63..68;
    pub const LOCATION_WEIGHT: Range<usize> = 68..70;
    pub const EPICENTER_DISTANCE: Range<usize> = 70..75;
    pub const EPICENTER_TO_STATION_AZIMUTH: Range<usize> = 76..79;
}

// =============================================================================
// Validation Constraints
// =============================================================================

/// Declared field constraints used by the header validators
pub mod constraints {
    /// Maximum trimmed length of comment and waveform text
    pub const MAX_TEXT_LENGTH: usize = 78;

    pub const GAP: (i32, i32) = (0, 360);
    pub const SECOND_ERROR: (f64, f64) = (0.0, 99.9);
    pub const LATITUDE_ERROR: (f64, f64) = (0.0, 99.99);
    pub const LONGITUDE_ERROR: (f64, f64) = (0.0, 99.99);
    pub const DEPTH_ERROR: (f64, f64) = (0.0, 999.9);
    pub const MAGNITUDE_ERROR: (f64, f64) = (0.0, 9.9);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_fit_before_marker() {
        let all = [
            main_columns::MAGNITUDE_AGENCY_3,
            macroseismic_columns::REPORTING_AGENCY,
            comment_columns::TEXT,
            error_columns::MAGNITUDE_ERROR,
            waveform_columns::INFO,
            phase_columns::EPICENTER_TO_STATION_AZIMUTH,
        ];
        for range in all {
            assert!(range.end <= MARKER_OFFSET, "{:?} overlaps the marker", range);
        }
    }

    #[test]
    fn test_default_author_id_is_three_chars() {
        assert_eq!(DEFAULT_AUTHOR_ID.chars().count(), 3);
    }
}
