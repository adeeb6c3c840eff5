//! Integration tests for the Nordic parser and processor
//!
//! These tests drive the public API with a realistic multi-event bulletin:
//! an S-file style event with every header type, a bare comment-only
//! event and an event carrying unhandled type 4 and 7 lines.

use chrono::NaiveDate;
use nordic_processor::config::NordicConfig;
use nordic_processor::models::HeaderType;
use nordic_processor::parser::parse_event;
use nordic_processor::processor::NordicProcessor;
use nordic_processor::processor::discovery::FileDiscovery;
use nordic_processor::processor::reader::split_event_blocks;
use std::fs;
use tempfile::TempDir;

/// Place `text` at `offset` in a blank 80-char line ending in `marker`
fn line(fields: &[(usize, &str)], marker: char) -> String {
    let mut chars = vec![' '; 80];
    for (offset, text) in fields {
        for (i, c) in text.chars().enumerate() {
            chars[offset + i] = c;
        }
    }
    chars[79] = marker;
    chars.into_iter().collect()
}

fn bergen_event() -> Vec<String> {
    vec![
        line(
            &[
                (1, "2021"),
                (6, "11"),
                (8, "07"),
                (11, "04"),
                (13, "12"),
                (16, "33.1"),
                (21, "L"),
                (23, "60.412"),
                (31, "5.213"),
                (39, "15.2"),
                (45, "BER"),
                (49, "18"),
                (51, "0.6"),
                (56, "2.4"),
                (59, "L"),
                (60, "BER"),
            ],
            '1',
        ),
        line(&[(5, "Bergen area"), (28, "4"), (30, "MM")], '2'),
        line(&[(5, "90"), (17, "0.4"), (25, "1.2"), (32, "1.5"), (40, "3.1")], '5'),
        line(&[(1, "2021-11-07-0412-33.BER___018")], '6'),
        line(&[(1, "Felt in Bergen (ABC)")], '3'),
        line(&[(1, "Reviewed by (XYZ) on duty")], '3'),
        line(
            &[
                (1, "BER"),
                (6, "S"),
                (7, "Z"),
                (9, "I"),
                (10, "P"),
                (18, "04"),
                (20, "12"),
                (23, "36.25"),
                (70, "14.5"),
                (76, "210"),
            ],
            ' ',
        ),
        line(&[(1, "ASK"), (10, "S"), (18, "04"), (20, "12"), (23, "41.90")], ' '),
    ]
}

fn comment_only_event() -> Vec<String> {
    vec![line(&[(1, "Quarry blast, not relocated")], '3')]
}

fn unhandled_lines_event() -> Vec<String> {
    vec![
        line(&[(1, "2021"), (6, " 1"), (8, "15")], '1'),
        line(&[(1, "STAT SP IPHASW")], '7'),
        line(&[(1, "ACTION:UPD")], 'I'),
        line(&[(1, "KONO"), (10, "P")], ' '),
    ]
}

fn bulletin() -> String {
    [bergen_event(), comment_only_event(), unhandled_lines_event()]
        .iter()
        .map(|event| event.join("\n") + "\n\n")
        .collect()
}

#[test]
fn test_full_event_parse() {
    let parsed = parse_event(&bergen_event(), &NordicConfig::default());
    let event = parsed.event;

    assert!(parsed.dropped.is_empty());
    assert_eq!(event.headers.total(), 6);
    assert_eq!(event.phase_data.len(), 2);

    let main = &event.main_headers()[0];
    assert_eq!(main.date, NaiveDate::from_ymd_opt(2021, 11, 7));
    assert_eq!(main.hour, Some(4));
    assert_eq!(main.second, Some(33.1));
    assert_eq!(main.epicenter_latitude, Some(60.412));
    assert_eq!(main.epicenter_reporting_agency.as_deref(), Some("BER"));
    assert_eq!(main.magnitude_1, Some(2.4));
    assert_eq!(main.magnitude_2, None);

    assert_eq!(
        event.macroseismic_headers()[0].maximum_observed_intensity,
        Some(4)
    );
    assert_eq!(event.error_headers()[0].gap, Some(90));

    // Last comment carrying a tag wins
    assert_eq!(event.author_id, "XYZ");
    assert_eq!(event.locating_program, "NOPROGRAM");

    let first_pick = &event.phase_data[0];
    assert_eq!(first_pick.station_code.as_deref(), Some("BER"));
    assert_eq!(first_pick.second, Some(36.25));
    assert_eq!(first_pick.epicenter_distance, None);
    assert_eq!(first_pick.epicenter_to_station_azimuth, Some(210));
    assert_eq!(event.phase_data[1].phase_type.as_deref(), Some("S"));
}

#[test]
fn test_unhandled_header_lines_dropped() {
    let parsed = parse_event(&unhandled_lines_event(), &NordicConfig::default());

    assert_eq!(parsed.event.headers.total(), 1);
    assert_eq!(parsed.dropped.len(), 2);
    assert_eq!(parsed.dropped[0].marker, '7');
    assert_eq!(parsed.dropped[1].marker, 'I');
    assert_eq!(parsed.event.phase_data.len(), 1);
    // A space-padded month still yields a date
    assert_eq!(
        parsed.event.main_headers()[0].date,
        NaiveDate::from_ymd_opt(2021, 1, 15)
    );
}

#[test]
fn test_bulletin_split_into_events() {
    let blocks = split_event_blocks(&bulletin());

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].lines.len(), 8);
    assert_eq!(blocks[1].first_line, 10);
    assert_eq!(blocks[2].first_line, 12);
}

#[test]
fn test_directory_processing_and_export() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("bulletins");
    fs::create_dir_all(input_dir.join("2021")).unwrap();
    fs::write(input_dir.join("2021").join("collect.out"), bulletin()).unwrap();
    fs::write(input_dir.join("readme.txt"), "not a bulletin").unwrap();

    let config = NordicConfig::default().with_default_author_id("UNK");
    let files = FileDiscovery::new(input_dir.clone(), &config.file_patterns)
        .unwrap()
        .discover_files()
        .unwrap();
    assert_eq!(files.len(), 1);

    let output_dir = temp_dir.path().join("parquet");
    let processor = NordicProcessor::new(config)
        .with_input_root(input_dir)
        .with_output_dir(output_dir.clone());
    let stats = processor.process_files(&files, None, |_| {});

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_exported, 1);
    assert_eq!(stats.events_parsed, 3);
    assert_eq!(stats.events_invalid, 0);
    assert_eq!(stats.phase_records, 3);
    assert_eq!(stats.dropped_lines, 2);
    assert_eq!(stats.headers_by_type[&HeaderType::Comment], 3);

    assert!(output_dir.join("2021_collect.out_events.parquet").exists());
    assert!(output_dir.join("2021_collect.out_phases.parquet").exists());
}

#[test]
fn test_default_author_id_from_config() {
    let config = NordicConfig::default().with_default_author_id("UNK");
    let parsed = parse_event(&comment_only_event(), &config);
    assert_eq!(parsed.event.author_id, "UNK");
}
