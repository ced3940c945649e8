//! Record Store: flat-file persistence for Smart Record
//!
//! Patient records, their vitals history and the side files a ward keeps
//! alongside them: care tasks, the event timeline, goals and discharge
//! status, soft-needs notes and medications.
//!
//! ## Key Components
//!
//! - `RecordStore`: whole-collection load/save seam
//! - `FsRecordStore`: JSON and CSV files under a data directory
//! - `fakes::MemoryRecordStore`: in-memory fake for tests
//! - `registry`: intake, vitals updates, history

mod error;
pub mod export;
pub mod fakes;
mod fs;
pub mod medications;
mod patient;
pub mod patient_files;
pub mod registry;
pub mod soft_needs;
pub mod storage_traits;
pub mod tasks;
pub mod timeline;

pub use error::StoreError;
pub use export::{export_report, REPORT_HEADERS};
pub use fs::{FsRecordStore, StoreConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR};
pub use medications::{add_medication, medications, toggle_given, MedicationEntry};
pub use patient::{
    trend_points, HistoryEntry, IntakeForm, PatientRecord, TrendPoint, VitalsUpdate, LOG_HEADERS,
};
pub use patient_files::{
    ensure_record, set_discharge_status, set_photo, update_goals, PatientFile,
};
pub use registry::{add_patient, find_patient, list_patients, patient_history, update_vitals};
pub use soft_needs::{add_soft_note, soft_notes, SoftNote};
pub use storage_traits::{Medications, PatientFiles, RecordStore, SoftNeeds, StoreResult};
pub use tasks::{
    add_task, delete_task, open_task_counts, tasks_for_patient, toggle_task, CareTask, Priority,
    TaskStatus,
};
pub use timeline::{log_event, recent_events, TimelineEntry, DEFAULT_RECENT_LIMIT};
