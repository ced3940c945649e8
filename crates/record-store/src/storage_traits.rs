//! Storage trait definitions for Smart Record
//!
//! `RecordStore` is the single persistence seam: it loads and saves whole
//! collections and appends to the patient log. Every record operation in
//! this crate is written against `&dyn RecordStore`.
//!
//! Backends:
//! - [`FsRecordStore`](crate::FsRecordStore): JSON and CSV files under a data
//!   directory
//! - [`MemoryRecordStore`](crate::fakes::MemoryRecordStore): in-memory fake
//!   for tests
//!
//! Loads never fail on a missing or unreadable collection; they return it
//! empty. Saves replace the whole collection.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::medications::MedicationEntry;
use crate::patient::{HistoryEntry, PatientRecord};
use crate::patient_files::PatientFile;
use crate::soft_needs::SoftNote;
use crate::tasks::CareTask;
use crate::timeline::TimelineEntry;

/// Result type for storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Per-patient goals, discharge flag and photo, keyed by patient ID.
pub type PatientFiles = BTreeMap<String, PatientFile>;

/// Soft-needs notes keyed by patient ID.
pub type SoftNeeds = BTreeMap<String, Vec<SoftNote>>;

/// Medication lists keyed by patient ID.
pub type Medications = BTreeMap<String, Vec<MedicationEntry>>;

/// Whole-collection persistence for patient records and their side files.
pub trait RecordStore: Send + Sync {
    /// Registered patients, in registration order.
    fn load_patients(&self) -> StoreResult<Vec<PatientRecord>>;
    fn save_patients(&self, patients: &[PatientRecord]) -> StoreResult<()>;

    /// Append one row to the patient log.
    fn append_log(&self, patient: &PatientRecord) -> StoreResult<()>;
    /// Every row ever appended to the patient log, oldest first.
    fn read_log(&self) -> StoreResult<Vec<PatientRecord>>;

    fn load_history(&self, patient_id: &str) -> StoreResult<Vec<HistoryEntry>>;
    fn save_history(&self, patient_id: &str, history: &[HistoryEntry]) -> StoreResult<()>;

    fn load_tasks(&self) -> StoreResult<Vec<CareTask>>;
    fn save_tasks(&self, tasks: &[CareTask]) -> StoreResult<()>;

    fn load_timeline(&self) -> StoreResult<Vec<TimelineEntry>>;
    fn save_timeline(&self, entries: &[TimelineEntry]) -> StoreResult<()>;

    fn load_patient_files(&self) -> StoreResult<PatientFiles>;
    fn save_patient_files(&self, files: &PatientFiles) -> StoreResult<()>;

    fn load_soft_needs(&self) -> StoreResult<SoftNeeds>;
    fn save_soft_needs(&self, notes: &SoftNeeds) -> StoreResult<()>;

    fn load_medications(&self) -> StoreResult<Medications>;
    fn save_medications(&self, meds: &Medications) -> StoreResult<()>;
}
