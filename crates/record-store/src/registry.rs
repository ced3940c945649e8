//! Patient registry: intake, vitals updates and history.
//!
//! Intake normalizes DOB, BP and temperature before anything is stored; the
//! DOB must then be a real `MM/DD/YYYY` date. Every add or update appends a
//! row to the patient log, an entry to the patient's history file and an
//! event to the timeline.

use chrono::Local;
use vitals_core::{
    is_canonical_date_of_birth, obs, FallbackPolicy, NormalizedField, ThresholdConfig,
    VitalValue,
};

use crate::error::StoreError;
use crate::patient::{provided, HistoryEntry, IntakeForm, PatientRecord, VitalsUpdate};
use crate::storage_traits::{RecordStore, StoreResult};
use crate::timeline::{log_event, EVENT_NEW_PATIENT, EVENT_VITALS_UPDATE};

/// Clock time stamped on each record write.
fn clock_stamp() -> String {
    Local::now().format("%I:%M %p").to_string()
}

fn normalize_field(field: NormalizedField, text: &str, policy: FallbackPolicy) -> StoreResult<String> {
    let parsed = field.canonicalize(text);
    if let (Err(e), FallbackPolicy::Passthrough) = (&parsed, policy) {
        obs::emit_normalization_fallback(field, text, e);
    }
    policy
        .apply(text, parsed)
        .map_err(|source| StoreError::Rejected { field, source })
}

/// Append to the log and the patient's history.
fn record_write(store: &dyn RecordStore, patient: &PatientRecord) -> StoreResult<()> {
    store.append_log(patient)?;
    let mut history = store.load_history(&patient.patient_id)?;
    history.push(HistoryEntry::from(patient));
    store.save_history(&patient.patient_id, &history)
}

pub fn list_patients(store: &dyn RecordStore) -> StoreResult<Vec<PatientRecord>> {
    store.load_patients()
}

pub fn find_patient(store: &dyn RecordStore, patient_id: &str) -> StoreResult<Option<PatientRecord>> {
    Ok(store
        .load_patients()?
        .into_iter()
        .find(|p| p.patient_id == patient_id))
}

/// Register a new patient.
///
/// Errors: `InvalidDateOfBirth` when the DOB does not normalize to a real
/// date, `DuplicatePatient` when the ID is taken, `Rejected` when `policy`
/// is [`FallbackPolicy::Reject`] and a field fails to parse.
pub fn add_patient(
    store: &dyn RecordStore,
    intake: &IntakeForm,
    policy: FallbackPolicy,
) -> StoreResult<PatientRecord> {
    let date_of_birth = normalize_field(NormalizedField::DateOfBirth, &intake.date_of_birth, policy)?;
    if !is_canonical_date_of_birth(&date_of_birth) {
        return Err(StoreError::InvalidDateOfBirth {
            value: intake.date_of_birth.trim().to_string(),
        });
    }
    let blood_pressure =
        normalize_field(NormalizedField::BloodPressure, &intake.blood_pressure, policy)?;
    let temperature = normalize_field(NormalizedField::Temperature, &intake.temperature, policy)?;

    let patient_id = intake.patient_id.trim();
    let mut patients = store.load_patients()?;
    if patients.iter().any(|p| p.patient_id == patient_id) {
        return Err(StoreError::DuplicatePatient {
            patient_id: patient_id.to_string(),
        });
    }

    let patient = PatientRecord {
        patient_id: patient_id.to_string(),
        name: intake.name.trim().to_string(),
        date_of_birth,
        heart_rate: VitalValue::from_field(intake.heart_rate.trim()),
        blood_pressure: VitalValue::from_field(&blood_pressure),
        temperature: VitalValue::from_field(&temperature),
        chief_complaint: intake.chief_complaint.trim().to_string(),
        diagnosis: intake.diagnosis.trim().to_string(),
        recorded_by: intake.recorded_by.trim().to_string(),
        time: clock_stamp(),
    };

    patients.push(patient.clone());
    store.save_patients(&patients)?;
    record_write(store, &patient)?;
    log_event(
        store,
        &patient.patient_id,
        EVENT_NEW_PATIENT,
        &format!(
            "{} added with HR {} / BP {} / Temp {}",
            patient.name, patient.heart_rate, patient.blood_pressure, patient.temperature
        ),
    )?;

    obs::emit_patient_added(
        &patient.patient_id,
        ThresholdConfig::standard().any_abnormal(&patient),
    );
    Ok(patient)
}

/// Merge non-blank `updates` into a patient's record.
///
/// Only the supplied BP and temperature are normalized under `policy`;
/// stored values are already canonical or were kept as entered.
pub fn update_vitals(
    store: &dyn RecordStore,
    patient_id: &str,
    updates: &VitalsUpdate,
    policy: FallbackPolicy,
) -> StoreResult<PatientRecord> {
    let mut patients = store.load_patients()?;
    let patient = patients
        .iter_mut()
        .find(|p| p.patient_id == patient_id)
        .ok_or_else(|| StoreError::PatientNotFound {
            patient_id: patient_id.to_string(),
        })?;

    if let Some(hr) = provided(&updates.heart_rate) {
        patient.heart_rate = VitalValue::from_field(hr);
    }
    if let Some(bp) = provided(&updates.blood_pressure) {
        let bp = normalize_field(NormalizedField::BloodPressure, bp, policy)?;
        patient.blood_pressure = VitalValue::from_field(&bp);
    }
    if let Some(temp) = provided(&updates.temperature) {
        let temp = normalize_field(NormalizedField::Temperature, temp, policy)?;
        patient.temperature = VitalValue::from_field(&temp);
    }
    if let Some(dx) = provided(&updates.diagnosis) {
        patient.diagnosis = dx.to_string();
    }
    if let Some(rn) = provided(&updates.recorded_by) {
        patient.recorded_by = rn.to_string();
    }
    patient.time = clock_stamp();

    let updated = patient.clone();
    store.save_patients(&patients)?;
    record_write(store, &updated)?;
    log_event(
        store,
        &updated.patient_id,
        EVENT_VITALS_UPDATE,
        &format!(
            "HR {}, BP {}, Temp {}, Dx {}",
            updated.heart_rate, updated.blood_pressure, updated.temperature, updated.diagnosis
        ),
    )?;

    obs::emit_vitals_updated(
        &updated.patient_id,
        ThresholdConfig::standard().any_abnormal(&updated),
    );
    Ok(updated)
}

/// The patient's history entries, oldest first.
///
/// Patients recorded before history files existed fall back to their rows
/// in the patient log.
pub fn patient_history(store: &dyn RecordStore, patient_id: &str) -> StoreResult<Vec<HistoryEntry>> {
    let history = store.load_history(patient_id)?;
    if !history.is_empty() {
        return Ok(history);
    }
    Ok(store
        .read_log()?
        .iter()
        .filter(|row| row.patient_id == patient_id)
        .map(HistoryEntry::from)
        .collect())
}
