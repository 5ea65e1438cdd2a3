//! Salary Model
//!
//! Money is held as [`rust_decimal::Decimal`] in code and canonical decimal
//! strings in storage, so totals never pick up float drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// total = base + bonus - deductions
pub fn compute_total(base: Decimal, bonus: Decimal, deductions: Decimal) -> Decimal {
    base + bonus - deductions
}

/// Salary row as stored (money columns are TEXT)
#[derive(Debug, Clone, FromRow)]
pub struct SalaryRow {
    pub id: i64,
    pub employee_id: i64,
    pub month: String,
    pub base_salary: String,
    pub bonus: String,
    pub deductions: String,
    pub total_salary: String,
}

/// Salary record with parsed money amounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    pub id: i64,
    pub employee_id: i64,
    pub month: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub total_salary: Decimal,
}

/// Salary joined with the employee for exports and dashboards
#[derive(Debug, Clone, Serialize)]
pub struct SalaryRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_no: i64,
    pub full_name: String,
    pub month: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub total_salary: Decimal,
}

/// Process salary payload; `total_salary` is always computed server-side
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SalaryCreate {
    #[validate(custom(function = "validate_month"))]
    pub month: String,
    pub base_salary: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
}

/// Months are "YYYY-MM" strings
pub fn validate_month(month: &str) -> Result<(), ValidationError> {
    let valid = month.len() == 7
        && chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("month").with_message("Month must be in YYYY-MM format".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_total_is_exact() {
        let total = compute_total(d("50000"), d("2000"), d("500"));
        assert_eq!(total, d("51500"));
    }

    #[test]
    fn test_total_keeps_cents() {
        let total = compute_total(d("1000.10"), d("0.20"), d("0.30"));
        assert_eq!(total, d("1000.00"));
    }

    #[test]
    fn test_month_validation() {
        assert!(validate_month("2025-01").is_ok());
        assert!(validate_month("2025-13").is_err());
        assert!(validate_month("2025-1").is_err());
        assert!(validate_month("January").is_err());
    }
}
