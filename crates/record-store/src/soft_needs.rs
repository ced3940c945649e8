//! Soft-needs notes: comfort cues and preferences, timestamped per patient.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::storage_traits::{RecordStore, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftNote {
    pub timestamp: String,
    pub note: String,
}

pub fn add_soft_note(store: &dyn RecordStore, patient_id: &str, note: &str) -> StoreResult<SoftNote> {
    let mut notes = store.load_soft_needs()?;
    let entry = SoftNote {
        timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        note: note.to_string(),
    };
    notes
        .entry(patient_id.to_string())
        .or_default()
        .push(entry.clone());
    store.save_soft_needs(&notes)?;
    Ok(entry)
}

pub fn soft_notes(store: &dyn RecordStore, patient_id: &str) -> StoreResult<Vec<SoftNote>> {
    Ok(store
        .load_soft_needs()?
        .remove(patient_id)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::MemoryRecordStore;

    #[test]
    fn test_notes_accumulate_per_patient() {
        let store = MemoryRecordStore::new();
        add_soft_note(&store, "P1", "prefers lights dimmed").unwrap();
        add_soft_note(&store, "P1", "daughter calls at 6pm").unwrap();
        add_soft_note(&store, "P2", "hard of hearing, left").unwrap();

        let notes = soft_notes(&store, "P1").unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].note, "daughter calls at 6pm");
        assert!(soft_notes(&store, "P3").unwrap().is_empty());
    }
}
