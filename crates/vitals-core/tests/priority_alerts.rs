use vitals_core::{
    priority_alerts, AlertPolicy, PatientAlert, Severity, ThresholdBand, ThresholdConfig,
    ThresholdSettings, ViolatedBand, VitalKind, VitalValue, VitalsSnapshot,
};

fn snapshot(id: &str, hr: impl Into<VitalValue>, bp: &str, temp: impl Into<VitalValue>) -> VitalsSnapshot {
    VitalsSnapshot::new(id, format!("Patient {id}"))
        .with_heart_rate(hr)
        .with_blood_pressure(bp)
        .with_temperature(temp)
}

fn find<'a>(alerts: &'a [PatientAlert], id: &str) -> Option<&'a PatientAlert> {
    alerts.iter().find(|a| a.patient_id == id)
}

// ── Severity aggregation ──────────────────────────────────────────────────

#[test]
fn critical_heart_rate_with_normal_bp() {
    let ward = vec![snapshot("P1", "135", "120/80", "98.6")];
    let alerts = priority_alerts(&ward, &AlertPolicy::default());

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert!(alerts[0].details().contains("HR 135"));
}

#[test]
fn warning_heart_rate_between_bands() {
    let ward = vec![snapshot("P1", "115", "120/80", "98.6")];
    let alerts = priority_alerts(&ward, &AlertPolicy::default());
    assert_eq!(alerts[0].severity, Severity::Warning);
}

#[test]
fn in_range_patients_are_absent() {
    let ward = vec![
        snapshot("OK1", "72", "120/80", "98.6"),
        snapshot("HOT", "72", "120/80", "100.6"),
        snapshot("OK2", 60i64, "110/70", 97.9f64),
    ];
    let alerts = priority_alerts(&ward, &AlertPolicy::default());

    assert_eq!(alerts.len(), 1);
    assert!(find(&alerts, "OK1").is_none());
    assert!(find(&alerts, "OK2").is_none());
    assert_eq!(find(&alerts, "HOT").map(|a| a.severity), Some(Severity::Info));
    assert!(alerts.iter().all(|a| a.severity != Severity::Normal));
}

#[test]
fn output_order_follows_input_order() {
    let ward = vec![
        snapshot("Z", "20", "120/80", "98.6"),
        snapshot("M", "72", "120/80", "98.6"),
        snapshot("A", "115", "120/80", "98.6"),
        snapshot("K", "72", "200/120", "98.6"),
    ];
    let ids: Vec<String> = priority_alerts(&ward, &AlertPolicy::default())
        .into_iter()
        .map(|a| a.patient_id)
        .collect();
    assert_eq!(ids, vec!["Z", "A", "K"]);
}

#[test]
fn classification_is_idempotent() {
    let ward = vec![
        snapshot("P1", "135", "180/70", "101.0"),
        snapshot("P2", "72", "120/80", "98.6"),
        snapshot("P3", "bad", "also bad", "n/a"),
    ];
    let policy = AlertPolicy::default();
    let first = priority_alerts(&ward, &policy);
    let second = priority_alerts(&ward, &policy);
    assert_eq!(first, second);
}

#[test]
fn alert_results_carry_violated_band() {
    let ward = vec![snapshot("P1", "72", "160/80", "103.5")];
    let alerts = priority_alerts(&ward, &AlertPolicy::default());
    let entry = &alerts[0];

    assert_eq!(entry.severity, Severity::Warning);
    assert_eq!(entry.alerts.len(), 2);

    let bp = &entry.alerts[0];
    assert_eq!(bp.vital, VitalKind::BloodPressure);
    assert_eq!(bp.observed_value, "160/80");
    assert_eq!(
        bp.band_violated,
        ViolatedBand::BloodPressure(ThresholdConfig::standard().blood_pressure)
    );

    let temp = &entry.alerts[1];
    assert_eq!(temp.vital, VitalKind::Temperature);
    assert_eq!(
        temp.band_violated,
        ViolatedBand::Temperature(ThresholdBand::new(94.0, 102.0))
    );
}

#[test]
fn custom_policy_from_settings() {
    let settings = ThresholdSettings::from_toml_str(
        r#"
        [critical.heart_rate]
        low = 50
        high = 100
        "#,
    )
    .expect("valid thresholds");

    let ward = vec![snapshot("P1", "105", "120/80", "98.6")];
    let alerts = priority_alerts(&ward, &settings.alert_policy());
    assert_eq!(alerts[0].severity, Severity::Critical);
}

#[test]
fn alerts_serialize_with_snake_case_labels() {
    let ward = vec![snapshot("P1", "135", "120/80", "98.6")];
    let alerts = priority_alerts(&ward, &AlertPolicy::default());
    let v = serde_json::to_value(&alerts).expect("serialize");

    assert_eq!(v[0]["severity"], "critical");
    assert_eq!(v[0]["alerts"][0]["vital"], "heart_rate");
    assert_eq!(v[0]["alerts"][0]["band_violated"]["vital"], "heart_rate");
    assert_eq!(v[0]["alerts"][0]["band_violated"]["high"], 130);
}
