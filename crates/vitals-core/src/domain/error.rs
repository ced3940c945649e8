//! Error taxonomy for vitals parsing and threshold configuration.

/// Errors produced when free-text vitals cannot be parsed.
///
/// The lenient `normalize_*` and `is_abnormal_*` entry points never surface
/// these; callers that opt into strict handling receive them directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,

    #[error("expected at least {expected} digit groups in {input:?}, found {found}")]
    TooFewDigitGroups {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("digit group out of range in {input:?}")]
    DigitGroupOverflow { input: String },

    #[error("invalid calendar date: month {month}, day {day}, year {year}")]
    InvalidCalendarDate { month: u32, day: u32, year: i64 },

    #[error("not a number: {input:?}")]
    InvalidNumber { input: String },

    #[error("expected systolic/diastolic, got {input:?}")]
    MalformedBloodPressure { input: String },
}

/// Vitals domain errors.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid {vital} band: low {low} exceeds high {high}")]
    InvalidBand {
        vital: String,
        low: String,
        high: String,
    },

    #[error("unknown threshold preset: {0}")]
    UnknownPreset(String),

    #[error("threshold file error: {0}")]
    ThresholdFile(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vitals domain operations.
pub type Result<T> = std::result::Result<T, VitalsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::TooFewDigitGroups {
            input: "120".to_string(),
            expected: 2,
            found: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("at least 2 digit groups"));
        assert!(msg.contains("\"120\""));

        let err = ParseError::InvalidCalendarDate {
            month: 13,
            day: 1,
            year: 1999,
        };
        assert!(err.to_string().contains("month 13"));
    }

    #[test]
    fn test_invalid_band_error() {
        let err = VitalsError::InvalidBand {
            vital: "heart_rate".to_string(),
            low: "120".to_string(),
            high: "40".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("heart_rate"));
        assert!(msg.contains("120"));
        assert!(msg.contains("40"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: VitalsError = ParseError::Empty.into();
        assert!(err.to_string().contains("parse error"));
    }
}
