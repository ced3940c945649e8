//! CSV report export.

use std::path::Path;

use crate::patient::PatientRecord;
use crate::storage_traits::StoreResult;

pub const REPORT_HEADERS: [&str; 6] = ["ID", "Name", "DOB", "HR", "BP", "Temp"];

/// Write one row per patient, in order, to `path` (overwriting it).
pub fn export_report(patients: &[PatientRecord], path: &Path) -> StoreResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(REPORT_HEADERS)?;
    for p in patients {
        let (hr, bp, temp) = (
            p.heart_rate.display(),
            p.blood_pressure.display(),
            p.temperature.display(),
        );
        wtr.write_record([
            p.patient_id.as_str(),
            p.name.as_str(),
            p.date_of_birth.as_str(),
            hr.as_ref(),
            bp.as_ref(),
            temp.as_ref(),
        ])?;
    }
    wtr.flush()?;
    tracing::info!(event = "report.exported", path = %path.display(), rows = patients.len());
    Ok(())
}
