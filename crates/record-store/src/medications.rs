//! Medication administration list, per patient.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage_traits::{RecordStore, StoreResult};
use crate::tasks::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub given: bool,
    #[serde(default)]
    pub last_updated: String,
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn add_medication(
    store: &dyn RecordStore,
    patient_id: &str,
    name: &str,
    dose: &str,
    schedule: &str,
    priority: Priority,
) -> StoreResult<MedicationEntry> {
    let mut meds = store.load_medications()?;
    let entry = MedicationEntry {
        name: name.to_string(),
        dose: dose.to_string(),
        schedule: schedule.to_string(),
        priority,
        given: false,
        last_updated: now_stamp(),
    };
    meds.entry(patient_id.to_string())
        .or_default()
        .push(entry.clone());
    store.save_medications(&meds)?;
    info!(event = "medication.added", patient_id = %patient_id, medication = %name);
    Ok(entry)
}

pub fn medications(store: &dyn RecordStore, patient_id: &str) -> StoreResult<Vec<MedicationEntry>> {
    Ok(store.load_medications()?.remove(patient_id).unwrap_or_default())
}

/// Flip the `given` flag of the entry at `index`. `None` when out of range.
pub fn toggle_given(
    store: &dyn RecordStore,
    patient_id: &str,
    index: usize,
) -> StoreResult<Option<MedicationEntry>> {
    let mut meds = store.load_medications()?;
    let Some(entry) = meds.get_mut(patient_id).and_then(|list| list.get_mut(index)) else {
        return Ok(None);
    };
    entry.given = !entry.given;
    entry.last_updated = now_stamp();
    let updated = entry.clone();
    store.save_medications(&meds)?;
    Ok(Some(updated))
}
