//! Salary PDF export

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::db::models::{SalaryRecord, format_employee_id};
use crate::utils::{AppError, AppResult};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_BOTTOM: f32 = 20.0;
const ROW_STEP: f32 = 7.0;

// Fixed column x positions (mm)
const COL_EMP: f32 = MARGIN_LEFT;
const COL_NAME: f32 = 40.0;
const COL_MONTH: f32 = 100.0;
const COL_TOTAL: f32 = 140.0;

/// Render salary records as a "Salary Report" PDF
///
/// Rows run top-down with fixed column positions; a new page starts when
/// the cursor would drop below the bottom margin.
pub fn salary_report(records: &[SalaryRecord]) -> AppResult<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new("Salary Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::internal(format!("PDF font error: {e}")))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::internal(format!("PDF font error: {e}")))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - 20.0;

    current.use_text("Salary Report", 18.0, Mm(MARGIN_LEFT), Mm(y), &font_bold);
    y -= 12.0;

    let write_header = |layer: &printpdf::PdfLayerReference, y: f32| {
        layer.use_text("EMP ID", 11.0, Mm(COL_EMP), Mm(y), &font_bold);
        layer.use_text("Name", 11.0, Mm(COL_NAME), Mm(y), &font_bold);
        layer.use_text("Month", 11.0, Mm(COL_MONTH), Mm(y), &font_bold);
        layer.use_text("Total", 11.0, Mm(COL_TOTAL), Mm(y), &font_bold);
    };

    write_header(&current, y);
    y -= ROW_STEP;

    for record in records {
        if y < MARGIN_BOTTOM {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - 20.0;
            write_header(&current, y);
            y -= ROW_STEP;
        }

        current.use_text(
            format_employee_id(record.employee_no),
            10.0,
            Mm(COL_EMP),
            Mm(y),
            &font,
        );
        current.use_text(record.full_name.as_str(), 10.0, Mm(COL_NAME), Mm(y), &font);
        current.use_text(record.month.as_str(), 10.0, Mm(COL_MONTH), Mm(y), &font);
        current.use_text(
            record.total_salary.to_string(),
            10.0,
            Mm(COL_TOTAL),
            Mm(y),
            &font,
        );
        y -= ROW_STEP;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::internal(format!("PDF save failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(no: i64) -> SalaryRecord {
        SalaryRecord {
            id: no,
            employee_id: no,
            employee_no: no,
            full_name: format!("Employee {no}"),
            month: "2025-01".to_string(),
            base_salary: "50000".parse().unwrap(),
            bonus: "0".parse().unwrap(),
            deductions: "0".parse().unwrap(),
            total_salary: "50000".parse().unwrap(),
        }
    }

    #[test]
    fn test_report_is_pdf() {
        let records: Vec<SalaryRecord> = (1..=3).map(record).collect();
        let bytes = salary_report(&records).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_long_report_paginates() {
        // enough rows to force a page break
        let records: Vec<SalaryRecord> = (1..=120).map(record).collect();
        let bytes = salary_report(&records).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
        assert!(bytes.len() > salary_report(&[record(1)]).unwrap().len());
    }
}
