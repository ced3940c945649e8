//! Smart Record Vitals Core
//!
//! Normalizes loosely-typed vitals input, classifies heart rate, blood
//! pressure and temperature against explicit threshold bands, and aggregates
//! per-patient alert severity. Pure and synchronous; no I/O outside
//! threshold file loading.

pub mod alerts;
pub mod classify;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod obs;
pub mod reporting;
pub mod telemetry;

pub use alerts::{
    evaluate_patient, priority_alerts, AlertPolicy, AlertResult, PatientAlert, SeverityCounts,
};
pub use classify::{
    abnormal_patients, count_abnormal, is_abnormal_blood_pressure, is_abnormal_heart_rate,
    is_abnormal_temperature, parse_heart_rate, parse_reading, parse_stored_blood_pressure,
    parse_stored_temperature,
};
pub use config::ThresholdSettings;
pub use domain::{
    BloodPressure, BloodPressureBand, ParseError, PatientSnapshot, Result, Severity,
    ThresholdBand, ThresholdConfig, ThresholdPreset, ViolatedBand, VitalKind, VitalReading,
    VitalValue, VitalsError, VitalsSnapshot,
};
pub use normalize::{
    format_date_of_birth, is_canonical_date_of_birth, normalize_blood_pressure,
    normalize_date_of_birth, normalize_temperature, normalize_with, parse_blood_pressure,
    parse_date_of_birth, parse_temperature, FallbackPolicy, NormalizedField,
};
pub use obs::CommandSpan;
pub use reporting::{
    abnormal_overview, abnormal_summary, render_handoff_summary, AbnormalOverview, SummaryRow,
};
pub use telemetry::init_tracing;

/// Smart Record version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
