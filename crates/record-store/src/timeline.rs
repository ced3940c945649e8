//! Ward timeline (`timeline.json`): one entry per notable record event.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::storage_traits::{RecordStore, StoreResult};

/// Entries returned by [`recent_events`] when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 25;

pub const EVENT_NEW_PATIENT: &str = "New Patient";
pub const EVENT_VITALS_UPDATE: &str = "Vitals Update";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Local time, `%Y-%m-%d %H:%M`.
    pub timestamp: String,
    pub patient_id: String,
    pub event: String,
    pub description: String,
}

pub fn log_event(
    store: &dyn RecordStore,
    patient_id: &str,
    event: &str,
    description: &str,
) -> StoreResult<TimelineEntry> {
    let mut entries = store.load_timeline()?;
    let entry = TimelineEntry {
        timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        patient_id: patient_id.to_string(),
        event: event.to_string(),
        description: description.to_string(),
    };
    entries.push(entry.clone());
    store.save_timeline(&entries)?;
    Ok(entry)
}

/// Newest first, at most `limit` entries.
///
/// The sort is stable: entries sharing a minute stay in insertion order.
pub fn recent_events(store: &dyn RecordStore, limit: usize) -> StoreResult<Vec<TimelineEntry>> {
    let mut entries = store.load_timeline()?;
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::MemoryRecordStore;

    fn entry(ts: &str, desc: &str) -> TimelineEntry {
        TimelineEntry {
            timestamp: ts.into(),
            patient_id: "P1".into(),
            event: EVENT_VITALS_UPDATE.into(),
            description: desc.into(),
        }
    }

    #[test]
    fn test_recent_newest_first() {
        let store = MemoryRecordStore::new();
        store
            .save_timeline(&[
                entry("2024-03-01 09:00", "b"),
                entry("2024-02-28 23:59", "a"),
                entry("2024-03-01 09:00", "c"),
                entry("2024-03-02 07:30", "d"),
            ])
            .unwrap();

        let recent = recent_events(&store, DEFAULT_RECENT_LIMIT).unwrap();
        let order: Vec<&str> = recent.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["d", "b", "c", "a"]);

        assert_eq!(recent_events(&store, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_log_event_stamps_minutes() {
        let store = MemoryRecordStore::new();
        let logged = log_event(&store, "P1", EVENT_NEW_PATIENT, "Ada added").unwrap();

        assert_eq!(logged.timestamp.len(), "2024-03-01 09:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&logged.timestamp, "%Y-%m-%d %H:%M").is_ok());
        assert_eq!(store.load_timeline().unwrap(), vec![logged]);
    }
}
