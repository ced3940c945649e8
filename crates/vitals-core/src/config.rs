//! Threshold overrides loaded from TOML.
//!
//! Every table is optional; anything omitted keeps its preset value.
//!
//! ```toml
//! [standard.heart_rate]
//! low = 40
//! high = 100
//!
//! [critical.blood_pressure.systolic]
//! low = 80
//! high = 180
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::alerts::AlertPolicy;
use crate::domain::{
    BloodPressureBand, Result, ThresholdBand, ThresholdConfig, ThresholdPreset,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BloodPressureOverride {
    systolic: Option<ThresholdBand<i64>>,
    diastolic: Option<ThresholdBand<i64>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverride {
    heart_rate: Option<ThresholdBand<i64>>,
    blood_pressure: Option<BloodPressureOverride>,
    temperature: Option<ThresholdBand<f64>>,
}

impl ConfigOverride {
    fn apply(self, mut base: ThresholdConfig) -> ThresholdConfig {
        if let Some(hr) = self.heart_rate {
            base.heart_rate = hr;
        }
        if let Some(bp) = self.blood_pressure {
            base.blood_pressure = BloodPressureBand {
                systolic: bp.systolic.unwrap_or(base.blood_pressure.systolic),
                diastolic: bp.diastolic.unwrap_or(base.blood_pressure.diastolic),
            };
        }
        if let Some(t) = self.temperature {
            base.temperature = t;
        }
        base
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdFile {
    standard: Option<ConfigOverride>,
    critical: Option<ConfigOverride>,
    display: Option<ConfigOverride>,
}

/// The three named band sets in effect for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSettings {
    pub standard: ThresholdConfig,
    pub critical: ThresholdConfig,
    pub display: ThresholdConfig,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            standard: ThresholdConfig::standard(),
            critical: ThresholdConfig::critical(),
            display: ThresholdConfig::display(),
        }
    }
}

impl ThresholdSettings {
    /// Parse overrides from TOML text and validate the result.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ThresholdFile = toml::from_str(text)?;
        let defaults = Self::default();
        let settings = Self {
            standard: file
                .standard
                .unwrap_or_default()
                .apply(defaults.standard),
            critical: file
                .critical
                .unwrap_or_default()
                .apply(defaults.critical),
            display: file.display.unwrap_or_default().apply(defaults.display),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load overrides from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(event = "thresholds.loaded", path = %path.display());
        Ok(settings)
    }

    /// Load from `path` when given, otherwise the built-in presets.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.standard.validate()?;
        self.critical.validate()?;
        self.display.validate()?;
        Ok(())
    }

    pub fn preset(&self, preset: ThresholdPreset) -> &ThresholdConfig {
        match preset {
            ThresholdPreset::Standard => &self.standard,
            ThresholdPreset::Critical => &self.critical,
            ThresholdPreset::Display => &self.display,
        }
    }

    /// Critical bands first, standard bands as the warning tier.
    pub fn alert_policy(&self) -> AlertPolicy {
        AlertPolicy {
            critical: self.critical,
            warning: self.standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VitalsError;

    #[test]
    fn empty_file_keeps_presets() {
        let settings = ThresholdSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ThresholdSettings::default());
        assert_eq!(settings.alert_policy(), AlertPolicy::default());
    }

    #[test]
    fn partial_override_merges() {
        let settings = ThresholdSettings::from_toml_str(
            r#"
            [standard.heart_rate]
            low = 50
            high = 100

            [critical.blood_pressure.systolic]
            low = 80
            high = 180

            [display.temperature]
            low = 96
            high = 100
            "#,
        )
        .unwrap();

        assert_eq!(settings.standard.heart_rate, ThresholdBand::new(50, 100));
        assert_eq!(
            settings.standard.blood_pressure,
            ThresholdConfig::standard().blood_pressure
        );
        assert_eq!(
            settings.critical.blood_pressure.systolic,
            ThresholdBand::new(80, 180)
        );
        assert_eq!(settings.critical.blood_pressure.diastolic.high, 110);
        assert_eq!(settings.display.temperature, ThresholdBand::new(96.0, 100.0));
    }

    #[test]
    fn inverted_band_rejected() {
        let err = ThresholdSettings::from_toml_str(
            r#"
            [standard.heart_rate]
            low = 120
            high = 40
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, VitalsError::InvalidBand { .. }));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ThresholdSettings::from_toml_str("[standard.spo2]\nlow = 90\nhigh = 100\n")
            .unwrap_err();
        assert!(matches!(err, VitalsError::ThresholdFile(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thresholds.toml");
        std::fs::write(&path, "[critical.heart_rate]\nlow = 40\nhigh = 140\n").unwrap();

        let settings = ThresholdSettings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings.critical.heart_rate.high, 140);
        assert_eq!(settings.preset(ThresholdPreset::Critical).heart_rate.low, 40);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            ThresholdSettings::load(&missing),
            Err(VitalsError::Io(_))
        ));
    }
}
