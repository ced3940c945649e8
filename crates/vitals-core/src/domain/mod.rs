//! Domain models for Smart Record vitals.
//!
//! Canonical definitions for the core entities:
//! - `VitalValue`: a vital field as entered (text, number, or missing)
//! - `ThresholdConfig`: reference-range bands and named presets
//! - `Severity`: the alert ladder
//! - `PatientSnapshot`: the read-only view the classifier consumes

pub mod error;
pub mod severity;
pub mod snapshot;
pub mod thresholds;
pub mod vital;

// Re-export main types and errors
pub use error::{ParseError, Result, VitalsError};
pub use severity::Severity;
pub use snapshot::{PatientSnapshot, VitalsSnapshot};
pub use thresholds::{
    BloodPressureBand, ThresholdBand, ThresholdConfig, ThresholdPreset, ViolatedBand,
};
pub use vital::{BloodPressure, VitalKind, VitalReading, VitalValue};
