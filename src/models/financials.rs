//! Computed per-earner financials.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One earner's monthly pay breakdown.
///
/// Always rebuilt from a [`PersonInput`](super::PersonInput); never mutated.
/// All amounts are monthly except `annual_taxable_income`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonFinancials {
    /// Basic monthly salary.
    pub monthly_gross: Decimal,
    /// Night differential pay.
    pub night_diff_pay: Decimal,
    /// Monthly taxable allowance.
    pub taxable_allowance: Decimal,
    /// Monthly non-taxable allowance.
    pub non_taxable_allowance: Decimal,
    /// Salary plus night differential plus both allowances.
    pub total_gross: Decimal,
    /// Social-insurance contribution.
    pub sss: Decimal,
    /// Health-insurance contribution.
    pub philhealth: Decimal,
    /// Housing-fund contribution.
    pub pagibig: Decimal,
    /// Sum of the three statutory contributions.
    pub total_contributions: Decimal,
    /// Monthly taxable income after contributions.
    pub taxable_income: Decimal,
    /// Annualised taxable income used for the bracket lookup.
    pub annual_taxable_income: Decimal,
    /// Monthly withholding tax.
    pub withholding_tax: Decimal,
    /// Contributions plus withholding tax.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_income: Decimal,
}

impl PersonFinancials {
    /// Returns true if `net_income == total_gross - total_deductions`.
    pub fn is_balanced(&self) -> bool {
        self.net_income == self.total_gross.saturating_sub(self.total_deductions)
    }
}
