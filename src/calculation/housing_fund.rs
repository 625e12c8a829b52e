//! Housing-fund (Pag-IBIG) contribution.

use rust_decimal::Decimal;

use crate::config::HousingFundConfig;
use crate::models::AuditStep;

/// The result of a Pag-IBIG contribution calculation.
#[derive(Debug, Clone)]
pub struct HousingFundResult {
    /// The capped salary base.
    pub salary_base: Decimal,
    /// The employee's monthly contribution.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's Pag-IBIG contribution.
///
/// `contribution = min(monthly_gross, salary_cap) * rate`, or zero when
/// government benefits are switched off or there is no salary.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_housing_fund;
/// use payshare_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let result = calculate_housing_fund(Decimal::from(30_000), true, config.housing_fund(), 5);
/// assert_eq!(result.contribution, Decimal::from(200));
/// ```
pub fn calculate_housing_fund(
    monthly_gross: Decimal,
    apply_gov_benefits: bool,
    config: &HousingFundConfig,
    step_number: u32,
) -> HousingFundResult {
    let applies = apply_gov_benefits && monthly_gross > Decimal::ZERO;
    let salary_base = if applies {
        monthly_gross.min(config.salary_cap)
    } else {
        Decimal::ZERO
    };
    let contribution = salary_base * config.rate;

    let reasoning = if applies {
        format!(
            "min({}, {} cap) x {} = {}",
            monthly_gross.normalize(),
            config.salary_cap.normalize(),
            config.rate.normalize(),
            contribution.normalize()
        )
    } else if apply_gov_benefits {
        "No basic salary - no Pag-IBIG contribution".to_string()
    } else {
        "Government benefits not applied - no Pag-IBIG contribution".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_fund".to_string(),
        rule_name: "Pag-IBIG Contribution".to_string(),
        legal_ref: Some(config.legal_ref.clone()),
        input: serde_json::json!({
            "monthly_gross": monthly_gross.normalize().to_string(),
            "apply_gov_benefits": apply_gov_benefits
        }),
        output: serde_json::json!({
            "salary_base": salary_base.normalize().to_string(),
            "pagibig": contribution.normalize().to_string(),
            "applied": applies
        }),
        reasoning,
    };

    HousingFundResult {
        salary_base,
        contribution,
        audit_step,
    }
}
