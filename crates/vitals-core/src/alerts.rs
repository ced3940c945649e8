//! Per-patient priority alerts.
//!
//! Each vital is checked against the wider `critical` bands first and the
//! `warning` (standard) bands second. The severity a hit produces depends on
//! the vital:
//!
//! | vital | outside critical band | outside warning band only |
//! |-------|-----------------------|---------------------------|
//! | HR    | critical              | warning                   |
//! | BP    | critical              | warning                   |
//! | Temp  | warning               | info                      |
//!
//! A patient's severity is the maximum over its hits; it can only rise during
//! a pass. Patients with no hits produce no entry at all.

use serde::{Deserialize, Serialize};

use crate::domain::{PatientSnapshot, Severity, ThresholdConfig, ViolatedBand, VitalKind};

/// The two band sets consulted during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub critical: ThresholdConfig,
    pub warning: ThresholdConfig,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            critical: ThresholdConfig::critical(),
            warning: ThresholdConfig::standard(),
        }
    }
}

/// One out-of-band vital for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertResult {
    pub vital: VitalKind,
    pub observed_value: String,
    pub severity: Severity,
    pub band_violated: ViolatedBand,
}

impl AlertResult {
    /// `"HR 135"`, `"BP 180/70"`, `"Temp 101.2"`.
    pub fn detail(&self) -> String {
        format!("{} {}", self.vital.label(), self.observed_value)
    }
}

/// Aggregated alert entry for a patient with at least one hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAlert {
    pub patient_id: String,
    pub name: String,
    pub severity: Severity,
    pub alerts: Vec<AlertResult>,
}

impl PatientAlert {
    /// Comma-joined details in check order (HR, BP, Temp).
    pub fn details(&self) -> String {
        self.alerts
            .iter()
            .map(AlertResult::detail)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Severity produced by a hit on the critical band, then the warning band.
fn escalation(kind: VitalKind) -> (Severity, Severity) {
    match kind {
        VitalKind::HeartRate | VitalKind::BloodPressure => (Severity::Critical, Severity::Warning),
        VitalKind::Temperature => (Severity::Warning, Severity::Info),
    }
}

fn band_for(kind: VitalKind, config: &ThresholdConfig) -> ViolatedBand {
    match kind {
        VitalKind::HeartRate => ViolatedBand::HeartRate(config.heart_rate),
        VitalKind::BloodPressure => ViolatedBand::BloodPressure(config.blood_pressure),
        VitalKind::Temperature => ViolatedBand::Temperature(config.temperature),
    }
}

fn check_vital<S: PatientSnapshot + ?Sized>(
    snapshot: &S,
    kind: VitalKind,
    policy: &AlertPolicy,
) -> Option<AlertResult> {
    let value = snapshot.vital(kind);
    let (on_critical, on_warning) = escalation(kind);

    let (severity, config) = if policy.critical.is_abnormal(kind, value) {
        (on_critical, &policy.critical)
    } else if policy.warning.is_abnormal(kind, value) {
        (on_warning, &policy.warning)
    } else {
        return None;
    };

    Some(AlertResult {
        vital: kind,
        observed_value: value.to_string(),
        severity,
        band_violated: band_for(kind, config),
    })
}

/// Evaluate one patient. `None` when every vital is in range.
pub fn evaluate_patient<S: PatientSnapshot + ?Sized>(
    snapshot: &S,
    policy: &AlertPolicy,
) -> Option<PatientAlert> {
    let mut severity = Severity::Normal;
    let mut alerts = Vec::new();

    for kind in VitalKind::ALL {
        if let Some(hit) = check_vital(snapshot, kind, policy) {
            severity = severity.escalate(hit.severity);
            alerts.push(hit);
        }
    }

    if alerts.is_empty() {
        return None;
    }

    Some(PatientAlert {
        patient_id: snapshot.patient_id().to_string(),
        name: snapshot.name().to_string(),
        severity,
        alerts,
    })
}

/// Evaluate every patient, keeping input order and skipping in-range patients.
pub fn priority_alerts<S: PatientSnapshot>(
    snapshots: &[S],
    policy: &AlertPolicy,
) -> Vec<PatientAlert> {
    snapshots
        .iter()
        .filter_map(|s| evaluate_patient(s, policy))
        .collect()
}

/// Patient counts per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn from_alerts(alerts: &[PatientAlert]) -> Self {
        let mut counts = Self::default();
        for a in alerts {
            match a.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
                Severity::Normal => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info
    }
}
