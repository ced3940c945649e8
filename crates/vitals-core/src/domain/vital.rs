//! Vital sign values as entered, and their canonical parsed forms.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The three vitals the classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Temperature,
}

impl VitalKind {
    pub const ALL: [VitalKind; 3] = [
        VitalKind::HeartRate,
        VitalKind::BloodPressure,
        VitalKind::Temperature,
    ];

    /// Short label used in alert details (`HR 135`).
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "HR",
            VitalKind::BloodPressure => "BP",
            VitalKind::Temperature => "Temp",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heart_rate",
            VitalKind::BloodPressure => "blood_pressure",
            VitalKind::Temperature => "temperature",
        }
    }
}

impl std::fmt::Display for VitalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vital field exactly as stored or typed: free text, a number, or nothing.
///
/// Serialized untagged so JSON records may carry either `"72"` or `72`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VitalValue {
    Integer(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl VitalValue {
    /// Build from a raw form/CSV field. Blank input becomes `Missing`.
    pub fn from_field(raw: &str) -> Self {
        if raw.trim().is_empty() {
            VitalValue::Missing
        } else {
            VitalValue::Text(raw.to_string())
        }
    }

    /// True for `Missing` and for blank text.
    pub fn is_missing(&self) -> bool {
        match self {
            VitalValue::Missing => true,
            VitalValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form, if the value is textual. Numbers are not coerced.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VitalValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Rendered form used in listings, alert details and exports.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            VitalValue::Text(s) => Cow::Borrowed(s.as_str()),
            VitalValue::Integer(n) => Cow::Owned(n.to_string()),
            VitalValue::Float(x) => Cow::Owned(format!("{:?}", x)),
            VitalValue::Missing => Cow::Borrowed(""),
        }
    }
}

impl std::fmt::Display for VitalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.display())
    }
}

impl From<&str> for VitalValue {
    fn from(s: &str) -> Self {
        VitalValue::Text(s.to_string())
    }
}

impl From<String> for VitalValue {
    fn from(s: String) -> Self {
        VitalValue::Text(s)
    }
}

impl From<i64> for VitalValue {
    fn from(n: i64) -> Self {
        VitalValue::Integer(n)
    }
}

impl From<f64> for VitalValue {
    fn from(x: f64) -> Self {
        VitalValue::Float(x)
    }
}

/// A parsed systolic/diastolic pair.
///
/// Systolic ≥ diastolic is deliberately not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: i64,
    pub diastolic: i64,
}

impl BloodPressure {
    pub fn new(systolic: i64, diastolic: i64) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// A fully parsed set of vitals (°F for temperature).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    pub heart_rate: i64,
    pub systolic: i64,
    pub diastolic: i64,
    pub temperature: f64,
}

impl VitalReading {
    pub fn blood_pressure(&self) -> BloodPressure {
        BloodPressure::new(self.systolic, self.diastolic)
    }
}
