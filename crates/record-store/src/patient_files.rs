//! Per-patient care file: goals, discharge readiness, photo.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::storage_traits::{RecordStore, StoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFile {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub discharge_ready: bool,
    #[serde(default)]
    pub assigned_by: String,
    #[serde(default)]
    pub photo: String,
    /// Set when a photo is first attached; later changes keep it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_updated: Option<String>,
}

/// Apply `change` to the patient's file, creating it if needed, then save.
fn modify<F>(store: &dyn RecordStore, patient_id: &str, change: F) -> StoreResult<PatientFile>
where
    F: FnOnce(&mut PatientFile),
{
    let mut files = store.load_patient_files()?;
    let file = files.entry(patient_id.to_string()).or_default();
    change(file);
    let updated = file.clone();
    store.save_patient_files(&files)?;
    Ok(updated)
}

/// Return the patient's file, creating an empty one on first access.
pub fn ensure_record(store: &dyn RecordStore, patient_id: &str) -> StoreResult<PatientFile> {
    let files = store.load_patient_files()?;
    if let Some(file) = files.get(patient_id) {
        return Ok(file.clone());
    }
    modify(store, patient_id, |_| {})
}

/// Replace the goal list and record who set it.
pub fn update_goals(
    store: &dyn RecordStore,
    patient_id: &str,
    goals: Vec<String>,
    assigned_by: &str,
) -> StoreResult<PatientFile> {
    modify(store, patient_id, |file| {
        file.goals = goals;
        file.assigned_by = assigned_by.to_string();
    })
}

pub fn set_discharge_status(
    store: &dyn RecordStore,
    patient_id: &str,
    ready: bool,
) -> StoreResult<PatientFile> {
    modify(store, patient_id, |file| file.discharge_ready = ready)
}

pub fn set_photo(store: &dyn RecordStore, patient_id: &str, photo: &str) -> StoreResult<PatientFile> {
    modify(store, patient_id, |file| {
        file.photo = photo.to_string();
        if file.photo_updated.is_none() {
            file.photo_updated = Some(Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::MemoryRecordStore;

    #[test]
    fn test_ensure_creates_once() {
        let store = MemoryRecordStore::new();
        assert_eq!(ensure_record(&store, "P1").unwrap(), PatientFile::default());
        assert_eq!(store.load_patient_files().unwrap().len(), 1);

        set_discharge_status(&store, "P1", true).unwrap();
        assert!(ensure_record(&store, "P1").unwrap().discharge_ready);
    }

    #[test]
    fn test_goals_replace_previous() {
        let store = MemoryRecordStore::new();
        update_goals(&store, "P1", vec!["ambulate".into()], "RN A").unwrap();
        let file = update_goals(&store, "P1", vec!["pain < 4".into(), "eat".into()], "RN B")
            .unwrap();

        assert_eq!(file.goals, vec!["pain < 4", "eat"]);
        assert_eq!(file.assigned_by, "RN B");
    }

    #[test]
    fn test_photo_timestamp_set_once() {
        let store = MemoryRecordStore::new();
        let first = set_photo(&store, "P1", "a.png").unwrap();
        let stamp = first.photo_updated.clone();
        assert!(stamp.is_some());

        let mut files = store.load_patient_files().unwrap();
        files.get_mut("P1").unwrap().photo_updated = Some("2000-01-01T00:00:00".into());
        store.save_patient_files(&files).unwrap();

        let second = set_photo(&store, "P1", "b.png").unwrap();
        assert_eq!(second.photo, "b.png");
        assert_eq!(second.photo_updated.as_deref(), Some("2000-01-01T00:00:00"));
    }
}
