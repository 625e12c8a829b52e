//! Earner input model.
//!
//! This module defines the [`PersonInput`] record supplied by the presentation
//! layer for each wage earner.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the declared gross income is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// Gross income is a monthly figure.
    #[default]
    Monthly,
    /// Gross income is an annual figure and is divided by 12.
    Yearly,
}

/// One earner's declared income and policy toggles.
///
/// Every field has a zero/false default so that a partially filled form
/// deserializes with missing values coerced to zero.
///
/// # Example
///
/// ```
/// use payshare_engine::models::{IncomeType, PersonInput};
/// use rust_decimal::Decimal;
///
/// let input = PersonInput {
///     gross_income: Decimal::from(30_000),
///     apply_gov_benefits: true,
///     ..PersonInput::default()
/// };
/// assert_eq!(input.income_type, IncomeType::Monthly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonInput {
    /// Declared gross income, monthly or yearly per `income_type`.
    pub gross_income: Decimal,
    /// Whether `gross_income` is monthly or yearly.
    pub income_type: IncomeType,
    /// Monthly allowance subject to income tax.
    pub taxable_allowance: Decimal,
    /// Monthly allowance exempt from income tax.
    pub non_taxable_allowance: Decimal,
    /// Master switch for statutory contributions and withholding tax.
    pub apply_gov_benefits: bool,
    /// Whether night differential pay applies.
    pub apply_night_diff: bool,
    /// Night-shift hours worked per working day.
    pub night_diff_hours_per_day: Decimal,
    /// Night differential markup, in percent of the hourly rate.
    pub night_diff_rate: Decimal,
}
