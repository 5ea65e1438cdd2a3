//! Salary Excel export

use rust_xlsxwriter::{Format, Workbook};

use crate::db::models::{SalaryRecord, format_employee_id};
use crate::utils::{AppError, AppResult};

const HEADERS: [&str; 7] = [
    "EMP ID",
    "Name",
    "Month",
    "Base",
    "Bonus",
    "Deductions",
    "Total",
];

/// Render salary records as an xlsx workbook with a single "Salaries" sheet
///
/// Money cells are written as their canonical decimal strings, so the
/// amounts survive the trip without float rounding.
pub fn salary_workbook(records: &[SalaryRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Salaries")
        .map_err(|e| AppError::internal(format!("Workbook write failed: {e}")))?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &bold)
            .map_err(|e| AppError::internal(format!("Workbook write failed: {e}")))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = [
            format_employee_id(record.employee_no),
            record.full_name.clone(),
            record.month.clone(),
            record.base_salary.to_string(),
            record.bonus.to_string(),
            record.deductions.to_string(),
            record.total_salary.to_string(),
        ];
        for (col, value) in cells.iter().enumerate() {
            sheet
                .write(row, col as u16, value.as_str())
                .map_err(|e| AppError::internal(format!("Workbook write failed: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::internal(format!("Workbook save failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(no: i64, month: &str, base: &str, bonus: &str, deductions: &str) -> SalaryRecord {
        let base: rust_decimal::Decimal = base.parse().unwrap();
        let bonus: rust_decimal::Decimal = bonus.parse().unwrap();
        let deductions: rust_decimal::Decimal = deductions.parse().unwrap();
        SalaryRecord {
            id: no,
            employee_id: no,
            employee_no: no,
            full_name: format!("Employee {no}"),
            month: month.to_string(),
            base_salary: base,
            bonus,
            deductions,
            total_salary: base + bonus - deductions,
        }
    }

    #[test]
    fn test_workbook_is_valid_zip() {
        let records = vec![record(1, "2025-01", "50000", "2000", "500")];
        let bytes = salary_workbook(&records).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_workbook_renders() {
        let bytes = salary_workbook(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
