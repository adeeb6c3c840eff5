//! Nordic Processor Library
//!
//! A Rust library for parsing Nordic-format seismic bulletins into typed
//! events and exporting them to Apache Parquet.
//!
//! This library provides tools for:
//! - Splitting bulletin files into events and classifying fixed-column lines
//! - Extracting header and phase-pick fields with a tolerant null policy
//! - Validating header fields against their declared constraints
//! - Writing event and phase tables to Parquet

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod validation;

// Re-export commonly used types
pub use config::NordicConfig;
pub use error::{NordicError, Result};
pub use models::{Event, Header, HeaderType, PhaseData};
pub use parser::{ParsedEvent, parse_event};
pub use processor::NordicProcessor;
