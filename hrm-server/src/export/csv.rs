//! Attendance CSV export

use crate::db::models::{AttendanceRecord, format_employee_id};
use crate::utils::{AppError, AppResult};

/// Render attendance records as a CSV file
///
/// Columns: EMP ID, Name, Date, Status, Note
pub fn attendance_csv(records: &[AttendanceRecord]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["EMP ID", "Name", "Date", "Status", "Note"])
        .map_err(|e| AppError::internal(format!("CSV write failed: {e}")))?;

    for record in records {
        writer
            .write_record([
                format_employee_id(record.employee_no).as_str(),
                record.full_name.as_str(),
                record.date.format("%Y-%m-%d").to_string().as_str(),
                record.status.as_str(),
                record.note.as_str(),
            ])
            .map_err(|e| AppError::internal(format!("CSV write failed: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::AttendanceStatus;
    use chrono::NaiveDate;

    fn record(no: i64, name: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: no,
            employee_id: no,
            employee_no: no,
            full_name: name.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status,
            note: String::new(),
        }
    }

    #[test]
    fn test_attendance_csv_layout() {
        let records = vec![
            record(1, "Alice Doe", "2025-01-06", AttendanceStatus::Present),
            record(2, "Bob Roe", "2025-01-06", AttendanceStatus::Absent),
        ];

        let bytes = attendance_csv(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "EMP ID,Name,Date,Status,Note");
        assert_eq!(lines[1], "EMP0001,Alice Doe,2025-01-06,Present,");
        assert_eq!(lines[2], "EMP0002,Bob Roe,2025-01-06,Absent,");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let bytes = attendance_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim(), "EMP ID,Name,Date,Status,Note");
    }
}
