//! Withholding tax calculation functionality.
//!
//! Annual income tax is computed from a progressive bracket table and
//! withheld in twelve equal monthly instalments.
//!
//! ## Bracket semantics
//!
//! A bracket covers `lower < income <= upper`. Income of exactly 250,000
//! therefore falls in the zero-rate bracket and 250,000.01 in the 15% bracket.
//! Zero or negative annual income matches no bracket and owes no tax.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, TaxTable};
use crate::models::AuditStep;

use super::MONTHS_PER_YEAR;

/// The result of a withholding tax calculation.
#[derive(Debug, Clone)]
pub struct WithholdingTaxResult {
    /// Zero-based index of the matched bracket, if any.
    pub bracket_index: Option<usize>,
    /// Annual tax owed on the annual taxable income.
    pub annual_tax: Decimal,
    /// Monthly withholding (zero when government benefits are off).
    pub withholding_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Finds the unique bracket with `lower < income <= upper`.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::find_bracket;
/// use payshare_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let (index, _) = find_bracket(config.tax_table(), Decimal::from(332_400)).unwrap();
/// assert_eq!(index, 1);
/// assert!(find_bracket(config.tax_table(), Decimal::ZERO).is_none());
/// ```
pub fn find_bracket(table: &TaxTable, annual_income: Decimal) -> Option<(usize, &TaxBracket)> {
    table
        .brackets
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.contains(annual_income))
}

/// Computes the annual tax owed: `base + (income - lower) * rate` for the
/// matching bracket, zero when no bracket matches.
pub fn annual_tax(table: &TaxTable, annual_income: Decimal) -> Decimal {
    match find_bracket(table, annual_income) {
        Some((_, bracket)) => (annual_income - bracket.lower)
            .saturating_mul(bracket.rate)
            .saturating_add(bracket.base),
        None => Decimal::ZERO,
    }
}

/// Calculates the monthly withholding tax from annual taxable income.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_withholding_tax;
/// use payshare_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let result = calculate_withholding_tax(Decimal::from(332_400), true, config.tax_table(), 6);
/// assert_eq!(result.annual_tax, Decimal::from(12_360));
/// assert_eq!(result.withholding_tax, Decimal::from(1_030));
/// ```
pub fn calculate_withholding_tax(
    annual_taxable_income: Decimal,
    apply_gov_benefits: bool,
    table: &TaxTable,
    step_number: u32,
) -> WithholdingTaxResult {
    let matched = find_bracket(table, annual_taxable_income);
    let annual_tax = annual_tax(table, annual_taxable_income);
    let withholding_tax = if apply_gov_benefits {
        annual_tax / MONTHS_PER_YEAR
    } else {
        Decimal::ZERO
    };

    let bracket_json = match matched {
        Some((index, bracket)) => serde_json::json!({
            "number": index + 1,
            "lower": bracket.lower.normalize().to_string(),
            "upper": bracket.upper.map(|u| u.normalize().to_string()),
            "rate": bracket.rate.normalize().to_string(),
            "base": bracket.base.normalize().to_string()
        }),
        None => serde_json::Value::Null,
    };

    let reasoning = match (apply_gov_benefits, matched) {
        (false, _) => "Government benefits not applied - no tax withheld".to_string(),
        (true, None) => format!(
            "Annual taxable income {} is not positive - no tax due",
            annual_taxable_income.normalize()
        ),
        (true, Some((index, bracket))) => format!(
            "Bracket {}: {} + ({} - {}) x {} = {} annual / {} = {} monthly",
            index + 1,
            bracket.base.normalize(),
            annual_taxable_income.normalize(),
            bracket.lower.normalize(),
            bracket.rate.normalize(),
            annual_tax.normalize(),
            MONTHS_PER_YEAR,
            withholding_tax.round_dp(2)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        legal_ref: Some(table.legal_ref.clone()),
        input: serde_json::json!({
            "annual_taxable_income": annual_taxable_income.normalize().to_string(),
            "apply_gov_benefits": apply_gov_benefits
        }),
        output: serde_json::json!({
            "bracket": bracket_json,
            "annual_tax": annual_tax.normalize().to_string(),
            "withholding_tax": withholding_tax.normalize().to_string()
        }),
        reasoning,
    };

    WithholdingTaxResult {
        bracket_index: matched.map(|(index, _)| index),
        annual_tax,
        withholding_tax,
        audit_step,
    }
}
