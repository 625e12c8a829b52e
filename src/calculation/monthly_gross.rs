//! Monthly gross normalization.
//!
//! Declared income may be monthly or yearly; every other rule works on a
//! monthly basic salary.

use rust_decimal::Decimal;

use crate::models::{AuditStep, IncomeType};

/// Months in a year, used to normalize yearly income.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of normalizing declared income to a monthly figure.
#[derive(Debug, Clone)]
pub struct MonthlyGrossResult {
    /// The monthly basic salary.
    pub monthly_gross: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts declared gross income to a monthly basic salary.
///
/// Yearly income is divided by [`MONTHS_PER_YEAR`]; monthly income is used as-is.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::normalize_monthly_gross;
/// use payshare_engine::models::IncomeType;
/// use rust_decimal::Decimal;
///
/// let result = normalize_monthly_gross(Decimal::from(360_000), IncomeType::Yearly, 1);
/// assert_eq!(result.monthly_gross, Decimal::from(30_000));
/// ```
pub fn normalize_monthly_gross(
    gross_income: Decimal,
    income_type: IncomeType,
    step_number: u32,
) -> MonthlyGrossResult {
    let (monthly_gross, income_type_str, reasoning) = match income_type {
        IncomeType::Monthly => (
            gross_income,
            "monthly",
            format!("Declared monthly income used as-is: {}", gross_income.normalize()),
        ),
        IncomeType::Yearly => {
            let monthly = gross_income / MONTHS_PER_YEAR;
            (
                monthly,
                "yearly",
                format!(
                    "Yearly income {} / {} months = {}",
                    gross_income.normalize(),
                    MONTHS_PER_YEAR,
                    monthly.normalize()
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_gross".to_string(),
        rule_name: "Monthly Gross".to_string(),
        legal_ref: None,
        input: serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "income_type": income_type_str
        }),
        output: serde_json::json!({
            "monthly_gross": monthly_gross.normalize().to_string()
        }),
        reasoning,
    };

    MonthlyGrossResult {
        monthly_gross,
        audit_step,
    }
}
