//! Filesystem-backed record store.
//!
//! Layout under the data directory:
//!
//! ```text
//! patients.json          patient_log.csv      tasks.json
//! timeline.json          patient_files.json   soft_needs.json
//! medications.json       history/<patient_id>.json
//! ```

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use vitals_core::obs;

use crate::patient::{HistoryEntry, LogRow, PatientRecord, LOG_HEADERS};
use crate::storage_traits::*;
use crate::tasks::CareTask;
use crate::timeline::TimelineEntry;

const PATIENTS_FILE: &str = "patients.json";
const LOG_FILE: &str = "patient_log.csv";
const HISTORY_DIR: &str = "history";
const TASKS_FILE: &str = "tasks.json";
const TIMELINE_FILE: &str = "timeline.json";
const PATIENT_FILES_FILE: &str = "patient_files.json";
const SOFT_NEEDS_FILE: &str = "soft_needs.json";
const MEDICATIONS_FILE: &str = "medications.json";

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SMART_RECORD_DATA_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".smart-record";

/// Where the store keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read `SMART_RECORD_DATA_DIR`, falling back to `.smart-record`.
    pub fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        Self::new(data_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// JSON/CSV files under one data directory.
pub struct FsRecordStore {
    root: PathBuf,
}

impl FsRecordStore {
    /// Open a store rooted at `root`. Creates `root/history/` if needed.
    pub fn new(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join(HISTORY_DIR))?;
        Ok(Self { root })
    }

    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        Self::new(&config.data_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn history_path(&self, patient_id: &str) -> PathBuf {
        self.root
            .join(HISTORY_DIR)
            .join(format!("{}.json", file_stem(patient_id)))
    }

    /// Missing file → default. Unparseable file → default plus a warning.
    fn read_json<T: DeserializeOwned + Default>(&self, path: &Path) -> StoreResult<T> {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                obs::emit_store_recovered(&path.display().to_string(), &e);
                Ok(T::default())
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> StoreResult<()> {
        let dir = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir)?;

        // Atomic write: write to temp file in the same directory, then rename.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, value)?;
        tmp.write_all(b"\n")?;
        tmp.persist(path)?;
        Ok(())
    }
}

/// History file stem. Bytes outside `[A-Za-z0-9-]` (`_` included) become
/// `_XX` hex escapes, so distinct patient IDs never share a file.
fn file_stem(patient_id: &str) -> String {
    let mut stem = String::with_capacity(patient_id.len());
    for byte in patient_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    stem
}

impl RecordStore for FsRecordStore {
    fn load_patients(&self) -> StoreResult<Vec<PatientRecord>> {
        self.read_json(&self.root.join(PATIENTS_FILE))
    }

    fn save_patients(&self, patients: &[PatientRecord]) -> StoreResult<()> {
        self.write_json(&self.root.join(PATIENTS_FILE), patients)
    }

    fn append_log(&self, patient: &PatientRecord) -> StoreResult<()> {
        let path = self.root.join(LOG_FILE);
        let is_new = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_new {
            wtr.write_record(LOG_HEADERS)?;
        }
        wtr.serialize(LogRow::from(patient))?;
        wtr.flush()?;
        Ok(())
    }

    fn read_log(&self) -> StoreResult<Vec<PatientRecord>> {
        let path = self.root.join(LOG_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;

        let mut rows = Vec::new();
        for row in rdr.deserialize::<LogRow>() {
            match row {
                Ok(row) => rows.push(PatientRecord::from(row)),
                Err(e) => obs::emit_store_recovered(LOG_FILE, &e),
            }
        }
        Ok(rows)
    }

    fn load_history(&self, patient_id: &str) -> StoreResult<Vec<HistoryEntry>> {
        self.read_json(&self.history_path(patient_id))
    }

    fn save_history(&self, patient_id: &str, history: &[HistoryEntry]) -> StoreResult<()> {
        self.write_json(&self.history_path(patient_id), history)
    }

    fn load_tasks(&self) -> StoreResult<Vec<CareTask>> {
        self.read_json(&self.root.join(TASKS_FILE))
    }

    fn save_tasks(&self, tasks: &[CareTask]) -> StoreResult<()> {
        self.write_json(&self.root.join(TASKS_FILE), tasks)
    }

    fn load_timeline(&self) -> StoreResult<Vec<TimelineEntry>> {
        self.read_json(&self.root.join(TIMELINE_FILE))
    }

    fn save_timeline(&self, entries: &[TimelineEntry]) -> StoreResult<()> {
        self.write_json(&self.root.join(TIMELINE_FILE), entries)
    }

    fn load_patient_files(&self) -> StoreResult<PatientFiles> {
        self.read_json(&self.root.join(PATIENT_FILES_FILE))
    }

    fn save_patient_files(&self, files: &PatientFiles) -> StoreResult<()> {
        self.write_json(&self.root.join(PATIENT_FILES_FILE), files)
    }

    fn load_soft_needs(&self) -> StoreResult<SoftNeeds> {
        self.read_json(&self.root.join(SOFT_NEEDS_FILE))
    }

    fn save_soft_needs(&self, notes: &SoftNeeds) -> StoreResult<()> {
        self.write_json(&self.root.join(SOFT_NEEDS_FILE), notes)
    }

    fn load_medications(&self) -> StoreResult<Medications> {
        self.read_json(&self.root.join(MEDICATIONS_FILE))
    }

    fn save_medications(&self, meds: &Medications) -> StoreResult<()> {
        self.write_json(&self.root.join(MEDICATIONS_FILE), meds)
    }
}
