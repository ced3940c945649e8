//! Structured observability hooks for record and alert events.
//!
//! This module provides:
//! - Command-scoped tracing spans via the `CommandSpan` RAII guard
//! - Emission functions for intake, updates, normalization fallbacks and
//!   alert evaluation
//!
//! Events are emitted at `info!` level unless noted; filter with `RUST_LOG`.

use tracing::{debug, info, warn};

use crate::alerts::SeverityCounts;
use crate::domain::ParseError;
use crate::normalize::NormalizedField;

/// RAII guard that enters a command-scoped span for the duration of a command.
///
/// ```ignore
/// let _span = CommandSpan::enter("alerts");
/// // tracing calls below carry command = "alerts"
/// ```
pub struct CommandSpan {
    _span: tracing::span::EnteredSpan,
}

impl CommandSpan {
    pub fn enter(command: &str) -> Self {
        let span = tracing::info_span!("smart_record.command", command = %command);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: patient added to the registry.
pub fn emit_patient_added(patient_id: &str, abnormal: bool) {
    info!(event = "patient.added", patient_id = %patient_id, abnormal = abnormal);
}

/// Emit event: vitals updated for an existing patient.
pub fn emit_vitals_updated(patient_id: &str, abnormal: bool) {
    info!(event = "patient.vitals_updated", patient_id = %patient_id, abnormal = abnormal);
}

/// Emit event (debug): a field failed to parse and was kept as entered.
pub fn emit_normalization_fallback(field: NormalizedField, input: &str, error: &ParseError) {
    debug!(
        event = "normalize.passthrough",
        field = field.as_str(),
        input = %input,
        error = %error,
    );
}

/// Emit event: alert pass finished.
pub fn emit_alerts_evaluated(patients: usize, counts: &SeverityCounts) {
    info!(
        event = "alerts.evaluated",
        patients = patients,
        critical = counts.critical,
        warning = counts.warning,
        info = counts.info,
    );
}

/// Emit event (warn): a data file could not be read and was treated as empty.
pub fn emit_store_recovered(file: &str, error: &dyn std::fmt::Display) {
    warn!(event = "store.recovered_empty", file = %file, error = %error);
}
