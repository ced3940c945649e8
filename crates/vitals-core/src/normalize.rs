//! Free-text vitals normalization.
//!
//! Every field has a strict `parse_*` form returning [`ParseError`] and a
//! lenient `normalize_*` form that never fails: when parsing fails it returns
//! the trimmed input unchanged. [`FallbackPolicy`] lets intake code choose
//! between the two explicitly.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{BloodPressure, ParseError};

/// Canonical date-of-birth format.
pub const DOB_FORMAT: &str = "%m/%d/%Y";

/// Two-digit years below this pivot map to 20xx, the rest to 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: i64 = 30;

fn digit_runs(text: &str) -> Vec<&str> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));
    re.find_iter(text).map(|m| m.as_str()).collect()
}

fn digit_value(run: &str, input: &str) -> Result<i64, ParseError> {
    run.parse::<i64>()
        .map_err(|_| ParseError::DigitGroupOverflow {
            input: input.to_string(),
        })
}

fn require_groups<'a>(input: &'a str, expected: usize) -> Result<Vec<&'a str>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let runs = digit_runs(input);
    if runs.len() < expected {
        return Err(ParseError::TooFewDigitGroups {
            input: input.to_string(),
            expected,
            found: runs.len(),
        });
    }
    Ok(runs)
}

fn or_passthrough(input: &str, parsed: Result<String, ParseError>) -> String {
    parsed.unwrap_or_else(|_| input.trim().to_string())
}

// ---------------------------------------------------------------------------
// Blood pressure
// ---------------------------------------------------------------------------

/// Take the first two digit runs as systolic/diastolic.
///
/// Any separator is accepted (`"120 / 80"`, `"120-80 mmHg"`). Values are not
/// checked for plausibility.
pub fn parse_blood_pressure(text: &str) -> Result<BloodPressure, ParseError> {
    let runs = require_groups(text, 2)?;
    Ok(BloodPressure::new(
        digit_value(runs[0], text)?,
        digit_value(runs[1], text)?,
    ))
}

/// `"S/D"`, or the trimmed input when fewer than two digit groups are present.
pub fn normalize_blood_pressure(text: &str) -> String {
    or_passthrough(text, parse_blood_pressure(text).map(|bp| bp.to_string()))
}

// ---------------------------------------------------------------------------
// Date of birth
// ---------------------------------------------------------------------------

/// Interpret the first three digit runs as month, day, year.
pub fn parse_date_of_birth(text: &str) -> Result<NaiveDate, ParseError> {
    let runs = require_groups(text, 3)?;
    let month = digit_value(runs[0], text)?;
    let day = digit_value(runs[1], text)?;
    let mut year = digit_value(runs[2], text)?;
    if year < 100 {
        year += if year < TWO_DIGIT_YEAR_PIVOT { 2000 } else { 1900 };
    }

    let invalid = || ParseError::InvalidCalendarDate {
        month: u32::try_from(month).unwrap_or(u32::MAX),
        day: u32::try_from(day).unwrap_or(u32::MAX),
        year,
    };
    if !(1..=9999).contains(&year) {
        return Err(invalid());
    }
    let (Ok(m), Ok(d)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(invalid());
    };
    NaiveDate::from_ymd_opt(year as i32, m, d).ok_or_else(invalid)
}

/// Render a date in the canonical `MM/DD/YYYY` form.
pub fn format_date_of_birth(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

/// `"MM/DD/YYYY"`, or the trimmed input when no valid date can be built.
pub fn normalize_date_of_birth(text: &str) -> String {
    or_passthrough(text, parse_date_of_birth(text).map(format_date_of_birth))
}

/// True when `text` is already a canonical `MM/DD/YYYY` date.
pub fn is_canonical_date_of_birth(text: &str) -> bool {
    NaiveDate::parse_from_str(text, DOB_FORMAT).is_ok()
}

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Strip `°` and `F`, then parse as °F.
pub fn parse_temperature(text: &str) -> Result<f64, ParseError> {
    let stripped = text.replace(['°', 'F'], "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return Err(ParseError::Empty);
    }
    stripped
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            input: text.to_string(),
        })
}

/// One decimal place, or the trimmed input when it does not parse.
pub fn normalize_temperature(text: &str) -> String {
    or_passthrough(text, parse_temperature(text).map(|t| format!("{:.1}", t)))
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// What to do when a field does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Keep the trimmed input text.
    #[default]
    Passthrough,
    /// Surface the parse error to the caller.
    Reject,
}

impl FallbackPolicy {
    /// Resolve a strict parse outcome under this policy.
    pub fn apply(
        self,
        input: &str,
        parsed: Result<String, ParseError>,
    ) -> Result<String, ParseError> {
        match (self, parsed) {
            (_, Ok(canonical)) => Ok(canonical),
            (FallbackPolicy::Passthrough, Err(_)) => Ok(input.trim().to_string()),
            (FallbackPolicy::Reject, Err(e)) => Err(e),
        }
    }
}

/// Fields that go through normalization at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedField {
    BloodPressure,
    DateOfBirth,
    Temperature,
}

impl NormalizedField {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizedField::BloodPressure => "blood_pressure",
            NormalizedField::DateOfBirth => "date_of_birth",
            NormalizedField::Temperature => "temperature",
        }
    }

    /// Strict canonical form of `text` for this field.
    pub fn canonicalize(self, text: &str) -> Result<String, ParseError> {
        match self {
            NormalizedField::BloodPressure => parse_blood_pressure(text).map(|bp| bp.to_string()),
            NormalizedField::DateOfBirth => parse_date_of_birth(text).map(format_date_of_birth),
            NormalizedField::Temperature => parse_temperature(text).map(|t| format!("{:.1}", t)),
        }
    }
}

/// Normalize `text` as `field`, resolving failures with `policy`.
pub fn normalize_with(
    field: NormalizedField,
    text: &str,
    policy: FallbackPolicy,
) -> Result<String, ParseError> {
    policy.apply(text, field.canonicalize(text))
}
