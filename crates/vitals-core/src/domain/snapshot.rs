//! Read-only patient view consumed by the classifier.

use serde::{Deserialize, Serialize};

use super::vital::{VitalKind, VitalValue};

/// Read-only access to the fields the classifier needs.
///
/// Implemented by the record store's patient records; the classifier never
/// mutates what it is given.
pub trait PatientSnapshot {
    fn patient_id(&self) -> &str;
    fn name(&self) -> &str;
    fn heart_rate(&self) -> &VitalValue;
    fn blood_pressure(&self) -> &VitalValue;
    fn temperature(&self) -> &VitalValue;

    fn date_of_birth(&self) -> &str {
        ""
    }

    fn diagnosis(&self) -> Option<&str> {
        None
    }

    fn vital(&self, kind: VitalKind) -> &VitalValue {
        match kind {
            VitalKind::HeartRate => self.heart_rate(),
            VitalKind::BloodPressure => self.blood_pressure(),
            VitalKind::Temperature => self.temperature(),
        }
    }
}

impl<T: PatientSnapshot + ?Sized> PatientSnapshot for &T {
    fn patient_id(&self) -> &str {
        (**self).patient_id()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn heart_rate(&self) -> &VitalValue {
        (**self).heart_rate()
    }
    fn blood_pressure(&self) -> &VitalValue {
        (**self).blood_pressure()
    }
    fn temperature(&self) -> &VitalValue {
        (**self).temperature()
    }
    fn date_of_birth(&self) -> &str {
        (**self).date_of_birth()
    }
    fn diagnosis(&self) -> Option<&str> {
        (**self).diagnosis()
    }
}

/// Owned snapshot for callers without a record type of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsSnapshot {
    pub patient_id: String,
    pub name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub heart_rate: VitalValue,
    #[serde(default)]
    pub blood_pressure: VitalValue,
    #[serde(default)]
    pub temperature: VitalValue,
    #[serde(default)]
    pub diagnosis: Option<String>,
}

impl VitalsSnapshot {
    pub fn new(patient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_heart_rate(mut self, value: impl Into<VitalValue>) -> Self {
        self.heart_rate = value.into();
        self
    }

    pub fn with_blood_pressure(mut self, value: impl Into<VitalValue>) -> Self {
        self.blood_pressure = value.into();
        self
    }

    pub fn with_temperature(mut self, value: impl Into<VitalValue>) -> Self {
        self.temperature = value.into();
        self
    }

    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = dob.into();
        self
    }

    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = Some(diagnosis.into());
        self
    }
}

impl PatientSnapshot for VitalsSnapshot {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn heart_rate(&self) -> &VitalValue {
        &self.heart_rate
    }
    fn blood_pressure(&self) -> &VitalValue {
        &self.blood_pressure
    }
    fn temperature(&self) -> &VitalValue {
        &self.temperature
    }
    fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }
    fn diagnosis(&self) -> Option<&str> {
        self.diagnosis.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_vital_lookup() {
        let s = VitalsSnapshot::new("P1", "Ada")
            .with_heart_rate(72)
            .with_blood_pressure("120/80")
            .with_temperature(98.6);

        assert_eq!(s.vital(VitalKind::HeartRate), &VitalValue::Integer(72));
        assert_eq!(s.vital(VitalKind::BloodPressure).to_string(), "120/80");
        assert_eq!(s.vital(VitalKind::Temperature), &VitalValue::Float(98.6));
        assert_eq!(s.diagnosis(), None);
    }

    #[test]
    fn test_reference_forwarding() {
        let s = VitalsSnapshot::new("P2", "Grace").with_diagnosis("CHF");
        let r = &s;
        assert_eq!(PatientSnapshot::patient_id(&r), "P2");
        assert_eq!(PatientSnapshot::diagnosis(&r), Some("CHF"));
    }
}
