//! Error types for record-store

use thiserror::Error;
use vitals_core::{NormalizedField, ParseError};

/// Errors that can occur in the record persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error on write
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No patient with this ID
    #[error("patient not found: {patient_id}")]
    PatientNotFound { patient_id: String },

    /// A patient with this ID is already registered
    #[error("patient already exists: {patient_id}")]
    DuplicatePatient { patient_id: String },

    /// DOB did not normalize to a real `MM/DD/YYYY` date
    #[error("invalid date of birth '{value}': use MM/DD/YYYY")]
    InvalidDateOfBirth { value: String },

    /// Field refused under the reject fallback policy
    #[error("rejected {}: {source}", .field.as_str())]
    Rejected {
        field: NormalizedField,
        #[source]
        source: ParseError,
    },

    /// No task with this ID
    #[error("task not found: {task_id}")]
    TaskNotFound { task_id: String },
}

impl From<tempfile::PersistError> for StoreError {
    fn from(err: tempfile::PersistError) -> Self {
        StoreError::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record() {
        let err = StoreError::PatientNotFound {
            patient_id: "P9".into(),
        };
        assert_eq!(err.to_string(), "patient not found: P9");

        let err = StoreError::Rejected {
            field: NormalizedField::Temperature,
            source: ParseError::InvalidNumber {
                input: "warm".into(),
            },
        };
        assert!(err.to_string().starts_with("rejected temperature:"));
    }
}
