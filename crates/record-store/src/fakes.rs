//! In-memory fake for the record store (testing only)
//!
//! Provides `MemoryRecordStore`, which satisfies the `RecordStore` contract
//! without touching the filesystem.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::patient::{HistoryEntry, PatientRecord};
use crate::storage_traits::*;
use crate::tasks::CareTask;
use crate::timeline::TimelineEntry;

#[derive(Debug, Default)]
struct MemoryState {
    patients: Vec<PatientRecord>,
    log: Vec<PatientRecord>,
    history: HashMap<String, Vec<HistoryEntry>>,
    tasks: Vec<CareTask>,
    timeline: Vec<TimelineEntry>,
    patient_files: PatientFiles,
    soft_needs: SoftNeeds,
    medications: Medications,
}

/// In-memory record store backed by plain collections behind a `Mutex`.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    state: Mutex<MemoryState>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_patients(&self) -> StoreResult<Vec<PatientRecord>> {
        Ok(self.state.lock().unwrap().patients.clone())
    }

    fn save_patients(&self, patients: &[PatientRecord]) -> StoreResult<()> {
        self.state.lock().unwrap().patients = patients.to_vec();
        Ok(())
    }

    fn append_log(&self, patient: &PatientRecord) -> StoreResult<()> {
        self.state.lock().unwrap().log.push(patient.clone());
        Ok(())
    }

    fn read_log(&self) -> StoreResult<Vec<PatientRecord>> {
        Ok(self.state.lock().unwrap().log.clone())
    }

    fn load_history(&self, patient_id: &str) -> StoreResult<Vec<HistoryEntry>> {
        let state = self.state.lock().unwrap();
        Ok(state.history.get(patient_id).cloned().unwrap_or_default())
    }

    fn save_history(&self, patient_id: &str, history: &[HistoryEntry]) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .history
            .insert(patient_id.to_string(), history.to_vec());
        Ok(())
    }

    fn load_tasks(&self) -> StoreResult<Vec<CareTask>> {
        Ok(self.state.lock().unwrap().tasks.clone())
    }

    fn save_tasks(&self, tasks: &[CareTask]) -> StoreResult<()> {
        self.state.lock().unwrap().tasks = tasks.to_vec();
        Ok(())
    }

    fn load_timeline(&self) -> StoreResult<Vec<TimelineEntry>> {
        Ok(self.state.lock().unwrap().timeline.clone())
    }

    fn save_timeline(&self, entries: &[TimelineEntry]) -> StoreResult<()> {
        self.state.lock().unwrap().timeline = entries.to_vec();
        Ok(())
    }

    fn load_patient_files(&self) -> StoreResult<PatientFiles> {
        Ok(self.state.lock().unwrap().patient_files.clone())
    }

    fn save_patient_files(&self, files: &PatientFiles) -> StoreResult<()> {
        self.state.lock().unwrap().patient_files = files.clone();
        Ok(())
    }

    fn load_soft_needs(&self) -> StoreResult<SoftNeeds> {
        Ok(self.state.lock().unwrap().soft_needs.clone())
    }

    fn save_soft_needs(&self, notes: &SoftNeeds) -> StoreResult<()> {
        self.state.lock().unwrap().soft_needs = notes.clone();
        Ok(())
    }

    fn load_medications(&self) -> StoreResult<Medications> {
        Ok(self.state.lock().unwrap().medications.clone())
    }

    fn save_medications(&self, meds: &Medications) -> StoreResult<()> {
        self.state.lock().unwrap().medications = meds.clone();
        Ok(())
    }
}
