//! Abnormal-value summaries and the plain-text shift handoff.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PatientSnapshot, ThresholdConfig, VitalKind};

/// One row of the abnormal summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub patient_id: String,
    pub name: String,
    pub heart_rate: String,
    pub blood_pressure: String,
    pub heart_rate_abnormal: bool,
    pub blood_pressure_abnormal: bool,
}

impl SummaryRow {
    /// `"HR abnormal!, BP abnormal!"`, either half alone, or `"Normal"`.
    pub fn status(&self) -> String {
        let mut status = Vec::new();
        if self.heart_rate_abnormal {
            status.push("HR abnormal!");
        }
        if self.blood_pressure_abnormal {
            status.push("BP abnormal!");
        }
        if status.is_empty() {
            "Normal".to_string()
        } else {
            status.join(", ")
        }
    }
}

/// HR/BP status per patient, in input order.
pub fn abnormal_summary<S: PatientSnapshot>(
    snapshots: &[S],
    config: &ThresholdConfig,
) -> Vec<SummaryRow> {
    snapshots
        .iter()
        .map(|s| SummaryRow {
            patient_id: s.patient_id().to_string(),
            name: s.name().to_string(),
            heart_rate: s.heart_rate().to_string(),
            blood_pressure: s.blood_pressure().to_string(),
            heart_rate_abnormal: config.is_abnormal(VitalKind::HeartRate, s.heart_rate()),
            blood_pressure_abnormal: config
                .is_abnormal(VitalKind::BloodPressure, s.blood_pressure()),
        })
        .collect()
}

/// Number of patients with each vital out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbnormalOverview {
    pub heart_rate: usize,
    pub blood_pressure: usize,
    pub temperature: usize,
}

pub fn abnormal_overview<S: PatientSnapshot>(
    snapshots: &[S],
    config: &ThresholdConfig,
) -> AbnormalOverview {
    let mut overview = AbnormalOverview::default();
    for s in snapshots {
        if config.is_abnormal(VitalKind::HeartRate, s.heart_rate()) {
            overview.heart_rate += 1;
        }
        if config.is_abnormal(VitalKind::BloodPressure, s.blood_pressure()) {
            overview.blood_pressure += 1;
        }
        if config.is_abnormal(VitalKind::Temperature, s.temperature()) {
            overview.temperature += 1;
        }
    }
    overview
}

fn status_mark(abnormal: bool) -> &'static str {
    if abnormal {
        "⚠️"
    } else {
        "✅"
    }
}

/// Render the shift handoff text.
///
/// `open_tasks` maps patient id to the number of tasks not yet done.
pub fn render_handoff_summary<S: PatientSnapshot>(
    snapshots: &[S],
    open_tasks: &HashMap<String, usize>,
    config: &ThresholdConfig,
) -> String {
    if snapshots.is_empty() {
        return "No patients recorded yet.".to_string();
    }

    let mut out = String::new();
    out.push_str("Smart Record Handoff Summary\n");
    out.push_str(&"-".repeat(32));
    for s in snapshots {
        let hr = config.is_abnormal(VitalKind::HeartRate, s.heart_rate());
        let bp = config.is_abnormal(VitalKind::BloodPressure, s.blood_pressure());
        let temp = config.is_abnormal(VitalKind::Temperature, s.temperature());
        let diagnosis = s.diagnosis().filter(|d| !d.trim().is_empty()).unwrap_or("-");
        let outstanding = open_tasks.get(s.patient_id()).copied().unwrap_or(0);

        out.push('\n');
        out.push_str(&format!(
            "{} • {} ({})\n   HR {} {} | BP {} {} | Temp {} {}\n   Dx: {} • Tasks: {} open",
            s.patient_id(),
            s.name(),
            s.date_of_birth(),
            s.heart_rate(),
            status_mark(hr),
            s.blood_pressure(),
            status_mark(bp),
            s.temperature(),
            status_mark(temp),
            diagnosis,
            outstanding,
        ));
    }
    out
}
