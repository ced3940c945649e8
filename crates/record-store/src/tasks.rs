//! Per-patient care tasks (`tasks.json`).

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::storage_traits::{RecordStore, StoreResult};

/// Urgency vocabulary shared by tasks and medications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "do now")]
    DoNow,
    #[default]
    #[serde(rename = "do soon")]
    DoSoon,
    #[serde(rename = "do later")]
    DoLater,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::DoNow => "do now",
            Priority::DoSoon => "do soon",
            Priority::DoLater => "do later",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Accepts `do now`, `do-now`, `now` and the like, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.strip_prefix("do ").unwrap_or(key.as_str()) {
            "now" => Ok(Priority::DoNow),
            "soon" => Ok(Priority::DoSoon),
            "later" => Ok(Priority::DoLater),
            _ => Err(format!(
                "unknown priority '{s}' (expected: do now, do soon, do later)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareTask {
    pub id: String,
    pub patient_id: String,
    pub description: String,
    #[serde(default)]
    pub due: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
}

impl CareTask {
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done
    }
}

/// Short task id: the first 8 characters of a v4 UUID.
fn short_id() -> String {
    let mut id = uuid::Uuid::new_v4().to_string();
    id.truncate(8);
    id
}

pub fn add_task(
    store: &dyn RecordStore,
    patient_id: &str,
    description: &str,
    due: &str,
    priority: Priority,
) -> StoreResult<CareTask> {
    let mut tasks = store.load_tasks()?;
    let task = CareTask {
        id: short_id(),
        patient_id: patient_id.to_string(),
        description: description.to_string(),
        due: due.to_string(),
        priority,
        status: TaskStatus::Pending,
    };
    tasks.push(task.clone());
    store.save_tasks(&tasks)?;
    info!(event = "task.added", task_id = %task.id, patient_id = %patient_id);
    Ok(task)
}

/// Flip a task between pending and done.
pub fn toggle_task(store: &dyn RecordStore, task_id: &str) -> StoreResult<CareTask> {
    let mut tasks = store.load_tasks()?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| StoreError::TaskNotFound {
            task_id: task_id.to_string(),
        })?;
    task.status = task.status.toggled();
    let updated = task.clone();
    store.save_tasks(&tasks)?;
    info!(event = "task.toggled", task_id = %task_id, status = updated.status.as_str());
    Ok(updated)
}

/// Remove a task. `false` when no task had this ID.
pub fn delete_task(store: &dyn RecordStore, task_id: &str) -> StoreResult<bool> {
    let mut tasks = store.load_tasks()?;
    let before = tasks.len();
    tasks.retain(|t| t.id != task_id);
    if tasks.len() == before {
        return Ok(false);
    }
    store.save_tasks(&tasks)?;
    info!(event = "task.deleted", task_id = %task_id);
    Ok(true)
}

pub fn tasks_for_patient(store: &dyn RecordStore, patient_id: &str) -> StoreResult<Vec<CareTask>> {
    Ok(store
        .load_tasks()?
        .into_iter()
        .filter(|t| t.patient_id == patient_id)
        .collect())
}

/// Count of not-done tasks per patient. Patients with none are absent.
pub fn open_task_counts(store: &dyn RecordStore) -> StoreResult<HashMap<String, usize>> {
    let mut counts = HashMap::new();
    for task in store.load_tasks()?.iter().filter(|t| t.is_open()) {
        *counts.entry(task.patient_id.clone()).or_insert(0) += 1;
    }
    Ok(counts)
}
