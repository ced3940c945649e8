//! Patient record shapes: the live registry entry, intake and update forms,
//! per-patient history entries and the CSV log row.

use serde::{Deserialize, Serialize};
use vitals_core::{parse_heart_rate, parse_stored_blood_pressure, PatientSnapshot, VitalValue};

/// Header of the append-only patient log.
pub const LOG_HEADERS: [&str; 10] = [
    "patient_id",
    "name",
    "DOB",
    "HR",
    "BP",
    "Temp",
    "CC",
    "Diagnosis",
    "RN_AP",
    "Time",
];

/// A registered patient as stored in `patients.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub name: String,
    #[serde(rename = "DOB", default)]
    pub date_of_birth: String,
    #[serde(rename = "HR", default)]
    pub heart_rate: VitalValue,
    #[serde(rename = "BP", default)]
    pub blood_pressure: VitalValue,
    #[serde(rename = "Temp", default)]
    pub temperature: VitalValue,
    #[serde(rename = "CC", default)]
    pub chief_complaint: String,
    #[serde(rename = "Diagnosis", default)]
    pub diagnosis: String,
    #[serde(rename = "RN_AP", default)]
    pub recorded_by: String,
    #[serde(rename = "Time", default)]
    pub time: String,
}

impl PatientSnapshot for PatientRecord {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn heart_rate(&self) -> &VitalValue {
        &self.heart_rate
    }
    fn blood_pressure(&self) -> &VitalValue {
        &self.blood_pressure
    }
    fn temperature(&self) -> &VitalValue {
        &self.temperature
    }
    fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }
    fn diagnosis(&self) -> Option<&str> {
        Some(self.diagnosis.as_str()).filter(|d| !d.trim().is_empty())
    }
}

/// Raw intake fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub patient_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub heart_rate: String,
    pub blood_pressure: String,
    pub temperature: String,
    pub chief_complaint: String,
    pub diagnosis: String,
    pub recorded_by: String,
}

/// Partial vitals update. Blank or absent fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsUpdate {
    pub heart_rate: Option<String>,
    pub blood_pressure: Option<String>,
    pub temperature: Option<String>,
    pub diagnosis: Option<String>,
    pub recorded_by: Option<String>,
}

impl VitalsUpdate {
    /// True when no field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        [
            &self.heart_rate,
            &self.blood_pressure,
            &self.temperature,
            &self.diagnosis,
            &self.recorded_by,
        ]
        .iter()
        .all(|f| provided(f).is_none())
    }
}

/// A non-blank update value, trimmed.
pub(crate) fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// One point in a patient's vitals history (`history/<id>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Time", default)]
    pub time: String,
    #[serde(rename = "HR", default)]
    pub heart_rate: VitalValue,
    #[serde(rename = "BP", default)]
    pub blood_pressure: VitalValue,
    #[serde(rename = "Temp", default)]
    pub temperature: VitalValue,
    #[serde(rename = "Diagnosis", default)]
    pub diagnosis: String,
}

impl From<&PatientRecord> for HistoryEntry {
    fn from(p: &PatientRecord) -> Self {
        Self {
            time: p.time.clone(),
            heart_rate: p.heart_rate.clone(),
            blood_pressure: p.blood_pressure.clone(),
            temperature: p.temperature.clone(),
            diagnosis: p.diagnosis.clone(),
        }
    }
}

/// Flat string row of `patient_log.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct LogRow {
    patient_id: String,
    name: String,
    #[serde(rename = "DOB", default)]
    dob: String,
    #[serde(rename = "HR", default)]
    hr: String,
    #[serde(rename = "BP", default)]
    bp: String,
    #[serde(rename = "Temp", default)]
    temp: String,
    #[serde(rename = "CC", default)]
    cc: String,
    #[serde(rename = "Diagnosis", default)]
    diagnosis: String,
    #[serde(rename = "RN_AP", default)]
    rn_ap: String,
    #[serde(rename = "Time", default)]
    time: String,
}

impl From<&PatientRecord> for LogRow {
    fn from(p: &PatientRecord) -> Self {
        Self {
            patient_id: p.patient_id.clone(),
            name: p.name.clone(),
            dob: p.date_of_birth.clone(),
            hr: p.heart_rate.to_string(),
            bp: p.blood_pressure.to_string(),
            temp: p.temperature.to_string(),
            cc: p.chief_complaint.clone(),
            diagnosis: p.diagnosis.clone(),
            rn_ap: p.recorded_by.clone(),
            time: p.time.clone(),
        }
    }
}

impl From<LogRow> for PatientRecord {
    fn from(row: LogRow) -> Self {
        Self {
            heart_rate: VitalValue::from_field(&row.hr),
            blood_pressure: VitalValue::from_field(&row.bp),
            temperature: VitalValue::from_field(&row.temp),
            patient_id: row.patient_id,
            name: row.name,
            date_of_birth: row.dob,
            chief_complaint: row.cc,
            diagnosis: row.diagnosis,
            recorded_by: row.rn_ap,
            time: row.time,
        }
    }
}

/// One chartable point: label, HR, systolic, diastolic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub heart_rate: i64,
    pub systolic: i64,
    pub diastolic: i64,
}

/// Entries whose HR and BP both parse, in order.
///
/// The label is the entry's time, or `Entry {n}` (1-based position in the
/// full history) when no time was recorded.
pub fn trend_points(history: &[HistoryEntry]) -> Vec<TrendPoint> {
    history
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let heart_rate = parse_heart_rate(&entry.heart_rate).ok()?;
            let bp = parse_stored_blood_pressure(&entry.blood_pressure).ok()?;
            let label = if entry.time.trim().is_empty() {
                format!("Entry {}", idx + 1)
            } else {
                entry.time.clone()
            };
            Some(TrendPoint {
                label,
                heart_rate,
                systolic: bp.systolic,
                diastolic: bp.diastolic,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str, hr: &str, bp: &str) -> HistoryEntry {
        HistoryEntry {
            time: time.into(),
            heart_rate: VitalValue::from_field(hr),
            blood_pressure: VitalValue::from_field(bp),
            temperature: VitalValue::Missing,
            diagnosis: String::new(),
        }
    }

    #[test]
    fn test_trend_skips_unparseable_entries() {
        let history = vec![
            entry("08:00 AM", "72", "120/80"),
            entry("09:00 AM", "n/a", "120/80"),
            entry("", "88", "130/85"),
            entry("11:00 AM", "90", "pending"),
        ];
        let points = trend_points(&history);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "08:00 AM");
        assert_eq!(points[0].systolic, 120);
        assert_eq!(points[1].label, "Entry 3");
        assert_eq!(points[1].heart_rate, 88);
        assert_eq!(points[1].diastolic, 85);
    }

    #[test]
    fn test_record_json_uses_log_field_names() {
        let json = r#"{
            "patient_id": "P1", "name": "Ada", "DOB": "01/02/1990",
            "HR": 72, "BP": "120/80", "Temp": 98.6,
            "CC": "", "Diagnosis": "CHF", "RN_AP": "JD", "Time": "08:15 AM"
        }"#;
        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.heart_rate, VitalValue::Integer(72));
        assert_eq!(record.temperature, VitalValue::Float(98.6));
        assert_eq!(record.diagnosis(), Some("CHF"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["DOB"], "01/02/1990");
        assert_eq!(value["RN_AP"], "JD");
    }

    #[test]
    fn test_log_row_keeps_text_verbatim() {
        let row = LogRow {
            patient_id: "P1".into(),
            name: "Ada".into(),
            hr: "".into(),
            bp: "120/80".into(),
            temp: "warm".into(),
            ..LogRow::default()
        };
        let record = PatientRecord::from(row);
        assert_eq!(record.heart_rate, VitalValue::Missing);
        assert_eq!(record.temperature, VitalValue::Text("warm".into()));
        assert_eq!(record.diagnosis(), None);
    }

    #[test]
    fn test_blank_update_is_empty() {
        let update = VitalsUpdate {
            heart_rate: Some("  ".into()),
            ..VitalsUpdate::default()
        };
        assert!(update.is_empty());
        assert!(!VitalsUpdate {
            diagnosis: Some("sepsis".into()),
            ..VitalsUpdate::default()
        }
        .is_empty());
    }
}
