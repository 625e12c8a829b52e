//! One earner's take-home pay.
//!
//! Runs every rule in order and assembles [`PersonFinancials`]:
//!
//! 1. Monthly gross (yearly income / 12)
//! 2. Night differential
//! 3. SSS, PhilHealth and Pag-IBIG contributions
//! 4. Annual taxable income and withholding tax
//! 5. Deductions and net income

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{AuditStep, PersonFinancials, PersonInput};

use super::{
    MONTHS_PER_YEAR, calculate_health_insurance, calculate_housing_fund,
    calculate_night_differential, calculate_social_insurance, calculate_withholding_tax,
    normalize_monthly_gross,
};

/// The financials for one earner together with the audit steps behind them.
#[derive(Debug, Clone)]
pub struct PayCalculation {
    /// The computed financials.
    pub financials: PersonFinancials,
    /// One audit step per rule, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes one earner's monthly financials.
///
/// Total function: every input produces a result. Inputs are assumed already
/// coerced to numbers; negative amounts are carried through arithmetically.
/// Sums and products that would leave the `Decimal` range saturate at
/// `Decimal::MAX` / `Decimal::MIN` instead of panicking.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::compute;
/// use payshare_engine::config::StatutoryConfig;
/// use payshare_engine::models::PersonInput;
/// use rust_decimal::Decimal;
///
/// let input = PersonInput {
///     gross_income: Decimal::from(30_000),
///     apply_gov_benefits: true,
///     ..PersonInput::default()
/// };
///
/// let financials = compute(&input, &StatutoryConfig::default());
/// assert_eq!(financials.total_contributions, Decimal::from(2_300));
/// assert_eq!(financials.withholding_tax, Decimal::from(1_030));
/// assert_eq!(financials.net_income, Decimal::from(26_670));
/// ```
pub fn compute(input: &PersonInput, config: &StatutoryConfig) -> PersonFinancials {
    compute_with_audit(input, config).financials
}

/// Computes one earner's monthly financials and records an audit step for
/// every rule applied.
pub fn compute_with_audit(input: &PersonInput, config: &StatutoryConfig) -> PayCalculation {
    let mut audit_steps = Vec::with_capacity(7);
    let mut step_number: u32 = 1;

    let gross = normalize_monthly_gross(input.gross_income, input.income_type, step_number);
    let monthly_gross = gross.monthly_gross;
    audit_steps.push(gross.audit_step);
    step_number += 1;

    let night = calculate_night_differential(
        monthly_gross,
        input,
        config.work_schedule(),
        step_number,
    );
    let night_diff_pay = night.pay;
    audit_steps.push(night.audit_step);
    step_number += 1;

    let total_gross = monthly_gross
        .saturating_add(night_diff_pay)
        .saturating_add(input.taxable_allowance)
        .saturating_add(input.non_taxable_allowance);

    let sss = calculate_social_insurance(
        monthly_gross,
        input.apply_gov_benefits,
        config.social_insurance(),
        step_number,
    );
    audit_steps.push(sss.audit_step);
    step_number += 1;

    let philhealth = calculate_health_insurance(
        monthly_gross,
        input.apply_gov_benefits,
        config.health_insurance(),
        step_number,
    );
    audit_steps.push(philhealth.audit_step);
    step_number += 1;

    let pagibig = calculate_housing_fund(
        monthly_gross,
        input.apply_gov_benefits,
        config.housing_fund(),
        step_number,
    );
    audit_steps.push(pagibig.audit_step);
    step_number += 1;

    let total_contributions = sss
        .contribution
        .saturating_add(philhealth.contribution)
        .saturating_add(pagibig.contribution);

    // Non-taxable allowance is excluded from the tax base.
    let gross_taxable_income = monthly_gross
        .saturating_add(night_diff_pay)
        .saturating_add(input.taxable_allowance);
    let taxable_income = gross_taxable_income.saturating_sub(total_contributions);
    let annual_taxable_income = taxable_income.saturating_mul(MONTHS_PER_YEAR);

    let tax = calculate_withholding_tax(
        annual_taxable_income,
        input.apply_gov_benefits,
        config.tax_table(),
        step_number,
    );
    audit_steps.push(tax.audit_step);
    step_number += 1;

    let total_deductions = total_contributions.saturating_add(tax.withholding_tax);
    let net_income = total_gross.saturating_sub(total_deductions);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_income".to_string(),
        rule_name: "Net Income".to_string(),
        legal_ref: None,
        input: serde_json::json!({
            "total_gross": total_gross.normalize().to_string(),
            "total_contributions": total_contributions.normalize().to_string(),
            "withholding_tax": tax.withholding_tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.normalize().to_string(),
            "net_income": net_income.normalize().to_string()
        }),
        reasoning: format!(
            "{} gross - {} deductions = {} net",
            total_gross.round_dp(2),
            total_deductions.round_dp(2),
            net_income.round_dp(2)
        ),
    });

    PayCalculation {
        financials: PersonFinancials {
            monthly_gross,
            night_diff_pay,
            taxable_allowance: input.taxable_allowance,
            non_taxable_allowance: input.non_taxable_allowance,
            total_gross,
            sss: sss.contribution,
            philhealth: philhealth.contribution,
            pagibig: pagibig.contribution,
            total_contributions,
            taxable_income,
            annual_taxable_income,
            withholding_tax: tax.withholding_tax,
            total_deductions,
            net_income,
        },
        audit_steps,
    }
}
