//! Range classification for single vitals.
//!
//! Classification never fails: a value that is missing or does not parse is
//! reported as not abnormal, so downstream alert counts only include values
//! that were actually read. The strict `parse_*` helpers are exposed for
//! callers that want to see why a value was skipped.

use crate::domain::{
    BloodPressure, BloodPressureBand, ParseError, PatientSnapshot, ThresholdBand, ThresholdConfig,
    VitalKind, VitalReading, VitalValue,
};

/// Integer heart rate. Floats truncate toward zero; text must be a plain integer.
pub fn parse_heart_rate(value: &VitalValue) -> Result<i64, ParseError> {
    match value {
        VitalValue::Integer(n) => Ok(*n),
        VitalValue::Float(x) if x.is_finite() => Ok(x.trunc() as i64),
        VitalValue::Float(x) => Err(ParseError::InvalidNumber {
            input: x.to_string(),
        }),
        VitalValue::Text(s) => {
            let t = s.trim();
            if t.is_empty() {
                return Err(ParseError::Empty);
            }
            t.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                input: s.clone(),
            })
        }
        VitalValue::Missing => Err(ParseError::Empty),
    }
}

/// Stored `"S/D"` text. Exactly one `/`, both sides integers.
///
/// Unlike intake normalization this does not hunt for digit groups: a stored
/// value that was never normalized is not classified.
pub fn parse_stored_blood_pressure(value: &VitalValue) -> Result<BloodPressure, ParseError> {
    let text = match value {
        VitalValue::Text(s) => s,
        VitalValue::Missing => return Err(ParseError::Empty),
        other => {
            return Err(ParseError::MalformedBloodPressure {
                input: other.to_string(),
            })
        }
    };
    let malformed = || ParseError::MalformedBloodPressure {
        input: text.clone(),
    };
    let mut parts = text.split('/');
    let (Some(sys), Some(dia), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let systolic = sys.trim().parse::<i64>().map_err(|_| malformed())?;
    let diastolic = dia.trim().parse::<i64>().map_err(|_| malformed())?;
    Ok(BloodPressure::new(systolic, diastolic))
}

/// Temperature in °F. Text must be a bare number (no unit suffix).
pub fn parse_stored_temperature(value: &VitalValue) -> Result<f64, ParseError> {
    match value {
        VitalValue::Integer(n) => Ok(*n as f64),
        VitalValue::Float(x) => Ok(*x),
        VitalValue::Text(s) => {
            let t = s.trim();
            if t.is_empty() {
                return Err(ParseError::Empty);
            }
            t.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                input: s.clone(),
            })
        }
        VitalValue::Missing => Err(ParseError::Empty),
    }
}

/// Parse all three vitals from a snapshot, failing on the first bad field.
pub fn parse_reading<S: PatientSnapshot + ?Sized>(snapshot: &S) -> Result<VitalReading, ParseError> {
    let heart_rate = parse_heart_rate(snapshot.heart_rate())?;
    let bp = parse_stored_blood_pressure(snapshot.blood_pressure())?;
    let temperature = parse_stored_temperature(snapshot.temperature())?;
    Ok(VitalReading {
        heart_rate,
        systolic: bp.systolic,
        diastolic: bp.diastolic,
        temperature,
    })
}

pub fn is_abnormal_heart_rate(value: &VitalValue, band: &ThresholdBand<i64>) -> bool {
    parse_heart_rate(value)
        .map(|hr| band.is_outside(hr))
        .unwrap_or(false)
}

pub fn is_abnormal_blood_pressure(value: &VitalValue, band: &BloodPressureBand) -> bool {
    parse_stored_blood_pressure(value)
        .map(|bp| band.is_outside(bp.systolic, bp.diastolic))
        .unwrap_or(false)
}

pub fn is_abnormal_temperature(value: &VitalValue, band: &ThresholdBand<f64>) -> bool {
    parse_stored_temperature(value)
        .map(|t| band.is_outside(t))
        .unwrap_or(false)
}

impl ThresholdConfig {
    /// Classify `value` as `kind` against this config's band for it.
    pub fn is_abnormal(&self, kind: VitalKind, value: &VitalValue) -> bool {
        match kind {
            VitalKind::HeartRate => is_abnormal_heart_rate(value, &self.heart_rate),
            VitalKind::BloodPressure => is_abnormal_blood_pressure(value, &self.blood_pressure),
            VitalKind::Temperature => is_abnormal_temperature(value, &self.temperature),
        }
    }

    /// True if any of the snapshot's vitals is out of range.
    pub fn any_abnormal<S: PatientSnapshot + ?Sized>(&self, snapshot: &S) -> bool {
        VitalKind::ALL
            .iter()
            .any(|&kind| self.is_abnormal(kind, snapshot.vital(kind)))
    }
}

/// Patients whose `kind` vital is out of range, in input order.
pub fn abnormal_patients<'a, S: PatientSnapshot>(
    snapshots: &'a [S],
    kind: VitalKind,
    config: &ThresholdConfig,
) -> Vec<&'a S> {
    snapshots
        .iter()
        .filter(|s| config.is_abnormal(kind, s.vital(kind)))
        .collect()
}

pub fn count_abnormal<S: PatientSnapshot>(
    snapshots: &[S],
    kind: VitalKind,
    config: &ThresholdConfig,
) -> usize {
    snapshots
        .iter()
        .filter(|s| config.is_abnormal(kind, s.vital(kind)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VitalsSnapshot;

    fn standard() -> ThresholdConfig {
        ThresholdConfig::standard()
    }

    #[test]
    fn test_heart_rate_above_band() {
        assert!(is_abnormal_heart_rate(&"150".into(), &standard().heart_rate));
        assert!(is_abnormal_heart_rate(&"39".into(), &standard().heart_rate));
        assert!(!is_abnormal_heart_rate(&" 72 ".into(), &standard().heart_rate));
    }

    #[test]
    fn test_heart_rate_unparseable_is_not_abnormal() {
        let band = standard().heart_rate;
        assert!(!is_abnormal_heart_rate(&"not-a-number".into(), &band));
        assert!(!is_abnormal_heart_rate(&"98.5".into(), &band));
        assert!(!is_abnormal_heart_rate(&VitalValue::Missing, &band));
        assert!(!is_abnormal_heart_rate(&"".into(), &band));
    }

    #[test]
    fn test_heart_rate_numeric_values() {
        let band = standard().heart_rate;
        assert!(is_abnormal_heart_rate(&VitalValue::Integer(111), &band));
        assert!(!is_abnormal_heart_rate(&VitalValue::Float(110.9), &band));
        assert!(!is_abnormal_heart_rate(&VitalValue::Float(f64::NAN), &band));
    }

    #[test]
    fn test_blood_pressure_classification() {
        let band = standard().blood_pressure;
        assert!(is_abnormal_blood_pressure(&"180/70".into(), &band));
        assert!(!is_abnormal_blood_pressure(&"120/80".into(), &band));
        assert!(is_abnormal_blood_pressure(&"120/45".into(), &band));
        assert!(is_abnormal_blood_pressure(&"85/60".into(), &band));
        assert!(!is_abnormal_blood_pressure(&" 150 / 100 ".into(), &band));
    }

    #[test]
    fn test_blood_pressure_malformed_is_not_abnormal() {
        let band = standard().blood_pressure;
        assert!(!is_abnormal_blood_pressure(&"180".into(), &band));
        assert!(!is_abnormal_blood_pressure(&"180/70/60".into(), &band));
        assert!(!is_abnormal_blood_pressure(&"180 over 70".into(), &band));
        assert!(!is_abnormal_blood_pressure(&VitalValue::Integer(180), &band));
        assert!(!is_abnormal_blood_pressure(&VitalValue::Missing, &band));
    }

    #[test]
    fn test_systolic_below_diastolic_is_classified_as_is() {
        let band = standard().blood_pressure;
        assert!(!is_abnormal_blood_pressure(&"95/96".into(), &band));
    }

    #[test]
    fn test_temperature_classification() {
        let band = standard().temperature;
        assert!(is_abnormal_temperature(&"101.2".into(), &band));
        assert!(is_abnormal_temperature(&VitalValue::Float(94.9), &band));
        assert!(!is_abnormal_temperature(&VitalValue::Integer(98), &band));
        assert!(!is_abnormal_temperature(&"100.4".into(), &band));
        assert!(!is_abnormal_temperature(&"hot".into(), &band));
        assert!(!is_abnormal_temperature(&"101°F".into(), &band));
    }

    #[test]
    fn test_display_preset_flags_systolic_145() {
        let v: VitalValue = "145/80".into();
        assert!(ThresholdConfig::display().is_abnormal(VitalKind::BloodPressure, &v));
        assert!(!ThresholdConfig::standard().is_abnormal(VitalKind::BloodPressure, &v));
    }

    #[test]
    fn test_abnormal_patients_preserves_order() {
        let patients = vec![
            VitalsSnapshot::new("P3", "C").with_heart_rate("120"),
            VitalsSnapshot::new("P1", "A").with_heart_rate("80"),
            VitalsSnapshot::new("P2", "B").with_heart_rate("30"),
        ];
        let hits = abnormal_patients(&patients, VitalKind::HeartRate, &standard());
        let ids: Vec<&str> = hits.iter().map(|s| s.patient_id.as_str()).collect();
        assert_eq!(ids, vec!["P3", "P2"]);
        assert_eq!(count_abnormal(&patients, VitalKind::HeartRate, &standard()), 2);
    }

    #[test]
    fn test_parse_reading() {
        let s = VitalsSnapshot::new("P1", "A")
            .with_heart_rate("72")
            .with_blood_pressure("118/76")
            .with_temperature("98.6");
        let reading = parse_reading(&s).unwrap();
        assert_eq!(reading.heart_rate, 72);
        assert_eq!(reading.blood_pressure(), BloodPressure::new(118, 76));

        let bad = s.clone().with_blood_pressure("n/a");
        assert!(matches!(
            parse_reading(&bad),
            Err(ParseError::MalformedBloodPressure { .. })
        ));
    }
}
