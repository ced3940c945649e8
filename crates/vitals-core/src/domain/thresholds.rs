//! Reference-range bands and the named presets built from them.
//!
//! A value is in range when `low <= value <= high`. Presets:
//!
//! | preset     | HR     | systolic | diastolic | temp (°F)  |
//! |------------|--------|----------|-----------|------------|
//! | `standard` | 40–110 | 90–150   | 50–100    | 95.0–100.4 |
//! | `critical` | 45–130 | 85–170   | 45–110    | 94.0–102.0 |
//! | `display`  | 40–110 | 90–140   | 50–100    | 95.0–100.4 |

use serde::{Deserialize, Serialize};

use super::error::{Result, VitalsError};

/// Inclusive reference range for one vital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand<T> {
    pub low: T,
    pub high: T,
}

impl<T: PartialOrd + Copy> ThresholdBand<T> {
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// True when `value` falls strictly below `low` or strictly above `high`.
    pub fn is_outside(&self, value: T) -> bool {
        value < self.low || value > self.high
    }

    fn check(&self, vital: &str) -> Result<()>
    where
        T: std::fmt::Debug,
    {
        if self.low > self.high {
            return Err(VitalsError::InvalidBand {
                vital: vital.to_string(),
                low: format!("{:?}", self.low),
                high: format!("{:?}", self.high),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for ThresholdBand<i64> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl std::fmt::Display for ThresholdBand<f64> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}-{:.1}", self.low, self.high)
    }
}

/// Paired systolic/diastolic bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureBand {
    pub systolic: ThresholdBand<i64>,
    pub diastolic: ThresholdBand<i64>,
}

impl BloodPressureBand {
    pub const fn new(sys_low: i64, sys_high: i64, dias_low: i64, dias_high: i64) -> Self {
        Self {
            systolic: ThresholdBand::new(sys_low, sys_high),
            diastolic: ThresholdBand::new(dias_low, dias_high),
        }
    }

    pub fn is_outside(&self, systolic: i64, diastolic: i64) -> bool {
        self.systolic.is_outside(systolic) || self.diastolic.is_outside(diastolic)
    }
}

impl std::fmt::Display for BloodPressureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// The band that an alert was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "vital", rename_all = "snake_case")]
pub enum ViolatedBand {
    HeartRate(ThresholdBand<i64>),
    BloodPressure(BloodPressureBand),
    Temperature(ThresholdBand<f64>),
}

impl std::fmt::Display for ViolatedBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolatedBand::HeartRate(b) => b.fmt(f),
            ViolatedBand::BloodPressure(b) => b.fmt(f),
            ViolatedBand::Temperature(b) => b.fmt(f),
        }
    }
}

/// One complete set of bands, passed explicitly to every classifier call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub heart_rate: ThresholdBand<i64>,
    pub blood_pressure: BloodPressureBand,
    pub temperature: ThresholdBand<f64>,
}

impl ThresholdConfig {
    /// Default reference ranges used for abnormal counts and warnings.
    pub const fn standard() -> Self {
        Self {
            heart_rate: ThresholdBand::new(40, 110),
            blood_pressure: BloodPressureBand::new(90, 150, 50, 100),
            temperature: ThresholdBand::new(95.0, 100.4),
        }
    }

    /// Wider bands; a value outside these is treated as critical.
    pub const fn critical() -> Self {
        Self {
            heart_rate: ThresholdBand::new(45, 130),
            blood_pressure: BloodPressureBand::new(85, 170, 45, 110),
            temperature: ThresholdBand::new(94.0, 102.0),
        }
    }

    /// Listing highlight bands (systolic capped at 140).
    pub const fn display() -> Self {
        Self {
            heart_rate: ThresholdBand::new(40, 110),
            blood_pressure: BloodPressureBand::new(90, 140, 50, 100),
            temperature: ThresholdBand::new(95.0, 100.4),
        }
    }

    /// Reject bands whose `low` exceeds `high`.
    pub fn validate(&self) -> Result<()> {
        self.heart_rate.check("heart_rate")?;
        self.blood_pressure.systolic.check("systolic")?;
        self.blood_pressure.diastolic.check("diastolic")?;
        self.temperature.check("temperature")?;
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Names for the built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPreset {
    Standard,
    Critical,
    Display,
}

impl ThresholdPreset {
    pub fn config(self) -> ThresholdConfig {
        match self {
            ThresholdPreset::Standard => ThresholdConfig::standard(),
            ThresholdPreset::Critical => ThresholdConfig::critical(),
            ThresholdPreset::Display => ThresholdConfig::display(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdPreset::Standard => "standard",
            ThresholdPreset::Critical => "critical",
            ThresholdPreset::Display => "display",
        }
    }
}

impl std::str::FromStr for ThresholdPreset {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ThresholdPreset::Standard),
            "critical" | "strict" => Ok(ThresholdPreset::Critical),
            "display" => Ok(ThresholdPreset::Display),
            other => Err(VitalsError::UnknownPreset(other.to_string())),
        }
    }
}
