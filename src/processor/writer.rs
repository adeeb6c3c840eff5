//! Parquet writing module for parsed Nordic events
//!
//! Each input file becomes two tables: one row per event with the first
//! main and error header flattened into columns, and one row per phase
//! pick keyed back to its event.

use crate::config::ParquetExportConfig;
use crate::constants::{EVENTS_FILE_SUFFIX, PHASES_FILE_SUFFIX};
use crate::error::{NordicError, Result};
use crate::models::{ErrorHeader, HeaderType, MainHeader, PhaseData};
use crate::processor::ProcessedEvent;

use polars::prelude::{Column, DataFrame, ParquetWriter, StatisticsOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths written for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub events_path: PathBuf,
    pub phases_path: PathBuf,
    pub event_rows: usize,
    pub phase_rows: usize,
}

/// Parquet writer for event and phase tables
#[derive(Debug)]
pub struct EventWriter {
    output_dir: PathBuf,
    config: ParquetExportConfig,
}

impl EventWriter {
    /// Create a new writer targeting a directory
    pub fn new(output_dir: PathBuf, config: ParquetExportConfig) -> Self {
        Self { output_dir, config }
    }

    /// Write the event and phase tables for one input file
    ///
    /// Nothing is written when there are no events.
    pub fn write_events(
        &self,
        stem: &str,
        events: &[ProcessedEvent],
    ) -> Result<Option<ExportedFiles>> {
        if events.is_empty() {
            debug!("No events for {}, skipping export", stem);
            return Ok(None);
        }

        std::fs::create_dir_all(&self.output_dir)?;

        let events_path = self.output_dir.join(format!("{}{}", stem, EVENTS_FILE_SUFFIX));
        let phases_path = self.output_dir.join(format!("{}{}", stem, PHASES_FILE_SUFFIX));

        let mut events_df = events_frame(events)?;
        let mut phases_df = phases_frame(events)?;

        // Both tables land under temporary names and are renamed together
        let events_tmp = temp_path(&events_path);
        let phases_tmp = temp_path(&phases_path);
        let written = self
            .write_dataframe(&mut events_df, &events_tmp)
            .and_then(|_| self.write_dataframe(&mut phases_df, &phases_tmp));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&events_tmp);
            let _ = std::fs::remove_file(&phases_tmp);
            return Err(e);
        }

        if let Err(e) = std::fs::rename(&events_tmp, &events_path) {
            let _ = std::fs::remove_file(&events_tmp);
            let _ = std::fs::remove_file(&phases_tmp);
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&phases_tmp, &phases_path) {
            let _ = std::fs::remove_file(&events_path);
            let _ = std::fs::remove_file(&phases_tmp);
            return Err(e.into());
        }

        debug!(
            "Wrote {} events and {} phase picks for {}",
            events_df.height(),
            phases_df.height(),
            stem
        );

        Ok(Some(ExportedFiles {
            events_path,
            phases_path,
            event_rows: events_df.height(),
            phase_rows: phases_df.height(),
        }))
    }

    fn write_dataframe(&self, df: &mut DataFrame, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let statistics = if self.config.enable_statistics {
            StatisticsOptions::full()
        } else {
            StatisticsOptions::empty()
        };

        ParquetWriter::new(file)
            .with_compression(self.config.compression_algorithm.to_polars_compression())
            .with_statistics(statistics)
            .finish(df)
            .map_err(|e| NordicError::ExportFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to write parquet: {}", e),
            })?;

        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn pluck<'a, H, T>(headers: &[Option<&'a H>], f: impl Fn(&'a H) -> Option<T>) -> Vec<Option<T>> {
    headers.iter().copied().map(|h| h.and_then(&f)).collect()
}

fn phase_values<'a, T>(
    phases: &[&'a PhaseData],
    f: impl Fn(&'a PhaseData) -> Option<T>,
) -> Vec<Option<T>> {
    phases.iter().copied().map(f).collect()
}

/// Build the one-row-per-event table
fn events_frame(events: &[ProcessedEvent]) -> Result<DataFrame> {
    let mains: Vec<Option<&MainHeader>> = events
        .iter()
        .map(|e| e.event.main_headers().first())
        .collect();
    let errors: Vec<Option<&ErrorHeader>> = events
        .iter()
        .map(|e| e.event.error_headers().first())
        .collect();
    let header_count = |header_type: HeaderType| -> Vec<u32> {
        events
            .iter()
            .map(|e| e.event.headers.count(header_type) as u32)
            .collect()
    };

    let df = DataFrame::new(vec![
        Column::new(
            "event_index".into(),
            events.iter().map(|e| e.index as u32).collect::<Vec<u32>>(),
        ),
        Column::new(
            "first_line".into(),
            events.iter().map(|e| e.first_line as u32).collect::<Vec<u32>>(),
        ),
        Column::new(
            "author_id".into(),
            events
                .iter()
                .map(|e| e.event.author_id.as_str())
                .collect::<Vec<&str>>(),
        ),
        Column::new(
            "locating_program".into(),
            events
                .iter()
                .map(|e| e.event.locating_program.as_str())
                .collect::<Vec<&str>>(),
        ),
        Column::new(
            "valid".into(),
            events.iter().map(|e| e.valid).collect::<Vec<Option<bool>>>(),
        ),
        Column::new("main_headers".into(), header_count(HeaderType::Main)),
        Column::new("macroseismic_headers".into(), header_count(HeaderType::Macroseismic)),
        Column::new("comment_headers".into(), header_count(HeaderType::Comment)),
        Column::new("error_headers".into(), header_count(HeaderType::Error)),
        Column::new("waveform_headers".into(), header_count(HeaderType::Waveform)),
        Column::new(
            "phase_records".into(),
            events
                .iter()
                .map(|e| e.event.phase_data.len() as u32)
                .collect::<Vec<u32>>(),
        ),
        Column::new(
            "dropped_lines".into(),
            events
                .iter()
                .map(|e| e.dropped.len() as u32)
                .collect::<Vec<u32>>(),
        ),
        Column::new("date".into(), pluck(&mains, |h| h.date)),
        Column::new("hour".into(), pluck(&mains, |h| h.hour)),
        Column::new("minute".into(), pluck(&mains, |h| h.minute)),
        Column::new("second".into(), pluck(&mains, |h| h.second)),
        Column::new(
            "location_model".into(),
            pluck(&mains, |h| h.location_model.as_deref()),
        ),
        Column::new(
            "distance_indicator".into(),
            pluck(&mains, |h| h.distance_indicator.as_deref()),
        ),
        Column::new(
            "event_desc_id".into(),
            pluck(&mains, |h| h.event_desc_id.as_deref()),
        ),
        Column::new(
            "epicenter_latitude".into(),
            pluck(&mains, |h| h.epicenter_latitude),
        ),
        Column::new(
            "epicenter_longitude".into(),
            pluck(&mains, |h| h.epicenter_longitude),
        ),
        Column::new("depth".into(), pluck(&mains, |h| h.depth)),
        Column::new(
            "epicenter_reporting_agency".into(),
            pluck(&mains, |h| h.epicenter_reporting_agency.as_deref()),
        ),
        Column::new("stations_used".into(), pluck(&mains, |h| h.stations_used)),
        Column::new(
            "rms_time_residuals".into(),
            pluck(&mains, |h| h.rms_time_residuals),
        ),
        Column::new("magnitude_1".into(), pluck(&mains, |h| h.magnitude_1)),
        Column::new(
            "type_of_magnitude_1".into(),
            pluck(&mains, |h| h.type_of_magnitude_1.as_deref()),
        ),
        Column::new(
            "magnitude_reporting_agency_1".into(),
            pluck(&mains, |h| h.magnitude_reporting_agency_1.as_deref()),
        ),
        Column::new("gap".into(), pluck(&errors, |h| h.gap)),
        Column::new("second_error".into(), pluck(&errors, |h| h.second_error)),
        Column::new(
            "epicenter_latitude_error".into(),
            pluck(&errors, |h| h.epicenter_latitude_error),
        ),
        Column::new(
            "epicenter_longitude_error".into(),
            pluck(&errors, |h| h.epicenter_longitude_error),
        ),
        Column::new("depth_error".into(), pluck(&errors, |h| h.depth_error)),
        Column::new(
            "magnitude_error".into(),
            pluck(&errors, |h| h.magnitude_error),
        ),
    ])?;

    Ok(df)
}

/// Build the one-row-per-phase-pick table
fn phases_frame(events: &[ProcessedEvent]) -> Result<DataFrame> {
    let (event_index, phases): (Vec<u32>, Vec<&PhaseData>) = events
        .iter()
        .flat_map(|e| e.event.phase_data.iter().map(|p| (e.index as u32, p)))
        .unzip();

    let df = DataFrame::new(vec![
        Column::new("event_index".into(), event_index),
        Column::new(
            "station_code".into(),
            phase_values(&phases, |p| p.station_code.as_deref()),
        ),
        Column::new(
            "sp_instrument_type".into(),
            phase_values(&phases, |p| p.sp_instrument_type.as_deref()),
        ),
        Column::new(
            "sp_component".into(),
            phase_values(&phases, |p| p.sp_component.as_deref()),
        ),
        Column::new(
            "quality_indicator".into(),
            phase_values(&phases, |p| p.quality_indicator.as_deref()),
        ),
        Column::new(
            "phase_type".into(),
            phase_values(&phases, |p| p.phase_type.as_deref()),
        ),
        Column::new("weight".into(), phase_values(&phases, |p| p.weight)),
        Column::new(
            "first_motion".into(),
            phase_values(&phases, |p| p.first_motion.as_deref()),
        ),
        Column::new(
            "time_info".into(),
            phase_values(&phases, |p| p.time_info.as_deref()),
        ),
        Column::new("hour".into(), phase_values(&phases, |p| p.hour)),
        Column::new("minute".into(), phase_values(&phases, |p| p.minute)),
        Column::new("second".into(), phase_values(&phases, |p| p.second)),
        Column::new(
            "signal_duration".into(),
            phase_values(&phases, |p| p.signal_duration),
        ),
        Column::new(
            "max_amplitude".into(),
            phase_values(&phases, |p| p.max_amplitude),
        ),
        Column::new(
            "max_amplitude_period".into(),
            phase_values(&phases, |p| p.max_amplitude_period),
        ),
        Column::new(
            "back_azimuth".into(),
            phase_values(&phases, |p| p.back_azimuth),
        ),
        Column::new(
            "apparent_velocity".into(),
            phase_values(&phases, |p| p.apparent_velocity),
        ),
        Column::new(
            "signal_to_noise".into(),
            phase_values(&phases, |p| p.signal_to_noise),
        ),
        Column::new(
            "azimuth_residual".into(),
            phase_values(&phases, |p| p.azimuth_residual),
        ),
        Column::new(
            "travel_time_residual".into(),
            phase_values(&phases, |p| p.travel_time_residual),
        ),
        Column::new(
            "location_weight".into(),
            phase_values(&phases, |p| p.location_weight),
        ),
        Column::new(
            "epicenter_distance".into(),
            phase_values(&phases, |p| p.epicenter_distance),
        ),
        Column::new(
            "epicenter_to_station_azimuth".into(),
            phase_values(&phases, |p| p.epicenter_to_station_azimuth),
        ),
    ])?;

    Ok(df)
}
