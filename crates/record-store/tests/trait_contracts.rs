//! Contract tests for RecordStore backends.
//!
//! Each scenario runs against the filesystem store and the in-memory fake;
//! any conforming implementation must pass these.

use record_store::fakes::MemoryRecordStore;
use record_store::*;
use vitals_core::{FallbackPolicy, VitalValue};

fn intake(id: &str, hr: &str, bp: &str) -> IntakeForm {
    IntakeForm {
        patient_id: id.into(),
        name: format!("Patient {id}"),
        date_of_birth: "12-25-1980".into(),
        heart_rate: hr.into(),
        blood_pressure: bp.into(),
        temperature: "98.6".into(),
        chief_complaint: String::new(),
        diagnosis: "CHF".into(),
        recorded_by: "RN".into(),
    }
}

fn with_each_backend(scenario: impl Fn(&dyn RecordStore)) {
    let dir = tempfile::tempdir().unwrap();
    let fs_store = FsRecordStore::new(dir.path()).unwrap();
    scenario(&fs_store);
    scenario(&MemoryRecordStore::new());
}

// ===========================================================================
// Registry
// ===========================================================================

#[test]
fn registry_add_update_history() {
    with_each_backend(|store| {
        add_patient(store, &intake("P1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();
        add_patient(store, &intake("P2", "135", "118-76"), FallbackPolicy::Passthrough).unwrap();

        let update = VitalsUpdate {
            heart_rate: Some("80".into()),
            blood_pressure: Some("130 / 85".into()),
            ..VitalsUpdate::default()
        };
        update_vitals(store, "P1", &update, FallbackPolicy::Passthrough).unwrap();

        let patients = list_patients(store).unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].date_of_birth, "12/25/1980");
        assert_eq!(patients[0].blood_pressure, VitalValue::from("130/85"));
        assert_eq!(patients[1].blood_pressure, VitalValue::from("118/76"));

        let history = patient_history(store, "P1").unwrap();
        let points = trend_points(&history);
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].heart_rate, points[1].heart_rate), (72, 80));
        assert_eq!(points[1].systolic, 130);

        assert_eq!(store.read_log().unwrap().len(), 3);
        let recent = recent_events(store, DEFAULT_RECENT_LIMIT).unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert!(recent.iter().any(|e| e.event == "Vitals Update"));
    });
}

#[test]
fn registry_duplicate_rejected() {
    with_each_backend(|store| {
        add_patient(store, &intake("P1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();
        let err = add_patient(store, &intake("P1", "60", "110/70"), FallbackPolicy::Passthrough)
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicatePatient { .. }));
        assert_eq!(store.read_log().unwrap().len(), 1);
    });
}

// ===========================================================================
// Side files
// ===========================================================================

#[test]
fn tasks_and_counts() {
    with_each_backend(|store| {
        let a = add_task(store, "P1", "Recheck BP", "14:00", Priority::DoNow).unwrap();
        add_task(store, "P1", "Ambulate", "", Priority::default()).unwrap();
        toggle_task(store, &a.id).unwrap();

        assert_eq!(open_task_counts(store).unwrap().get("P1"), Some(&1));
        assert!(delete_task(store, &a.id).unwrap());
        assert_eq!(tasks_for_patient(store, "P1").unwrap().len(), 1);
    });
}

#[test]
fn files_notes_medications() {
    with_each_backend(|store| {
        update_goals(store, "P1", vec!["ambulate TID".into()], "Charge RN").unwrap();
        set_discharge_status(store, "P1", true).unwrap();
        let file = ensure_record(store, "P1").unwrap();
        assert!(file.discharge_ready);
        assert_eq!(file.goals, vec!["ambulate TID"]);

        add_soft_note(store, "P1", "likes tea at 3").unwrap();
        assert_eq!(soft_notes(store, "P1").unwrap()[0].note, "likes tea at 3");

        add_medication(store, "P1", "Lasix", "40 mg", "daily", Priority::DoNow).unwrap();
        assert!(toggle_given(store, "P1", 0).unwrap().unwrap().given);
        assert!(medications(store, "P1").unwrap()[0].given);
    });
}

// ===========================================================================
// Filesystem specifics
// ===========================================================================

#[test]
fn fs_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FsRecordStore::open(&StoreConfig::new(dir.path())).unwrap();
        add_patient(&store, &intake("P1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();
        add_task(&store, "P1", "Labs", "", Priority::DoSoon).unwrap();
    }

    let store = FsRecordStore::new(dir.path()).unwrap();
    let p = find_patient(&store, "P1").unwrap().unwrap();
    assert_eq!(p.name, "Patient P1");
    assert_eq!(tasks_for_patient(&store, "P1").unwrap().len(), 1);
    assert!(dir.path().join("history").join("P1.json").exists());

    let log = std::fs::read_to_string(dir.path().join("patient_log.csv")).unwrap();
    assert!(log.starts_with("patient_id,name,DOB,HR,BP,Temp,CC,Diagnosis,RN_AP,Time\n"));
}

#[test]
fn fs_histories_stay_separate_for_similar_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsRecordStore::new(dir.path()).unwrap();
    add_patient(&store, &intake("A.1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();
    add_patient(&store, &intake("A_1", "88", "130/85"), FallbackPolicy::Passthrough).unwrap();

    let dotted = patient_history(&store, "A.1").unwrap();
    let underscored = patient_history(&store, "A_1").unwrap();
    assert_eq!(dotted.len(), 1);
    assert_eq!(underscored.len(), 1);
    assert_eq!(dotted[0].heart_rate, VitalValue::from("72"));
    assert_eq!(underscored[0].heart_rate, VitalValue::from("88"));
}

#[test]
fn fs_corrupt_patients_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("patients.json"), "[{\"patient_id\": ").unwrap();
    let store = FsRecordStore::new(dir.path()).unwrap();

    assert!(list_patients(&store).unwrap().is_empty());
    add_patient(&store, &intake("P1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();
    assert_eq!(list_patients(&store).unwrap().len(), 1);
}

#[test]
fn export_report_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryRecordStore::new();
    add_patient(&store, &intake("P1", "72", "120/80"), FallbackPolicy::Passthrough).unwrap();

    let path = dir.path().join("report.csv");
    export_report(&list_patients(&store).unwrap(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "ID,Name,DOB,HR,BP,Temp\nP1,Patient P1,12/25/1980,72,120/80,98.6\n"
    );
}
