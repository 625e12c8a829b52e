//! Social-insurance (SSS) contribution.
//!
//! The employee share is a flat rate on basic salary up to a salary cap.
//! Allowances and night differential are excluded from the base.

use rust_decimal::Decimal;

use crate::config::SocialInsuranceConfig;
use crate::models::AuditStep;

/// The result of an SSS contribution calculation.
#[derive(Debug, Clone)]
pub struct SocialInsuranceResult {
    /// The salary base the rate was applied to.
    pub salary_base: Decimal,
    /// The employee's monthly contribution.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's SSS contribution.
///
/// `contribution = min(monthly_gross, salary_cap) * rate`, or zero when
/// government benefits are switched off or there is no salary.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_social_insurance;
/// use payshare_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let result = calculate_social_insurance(Decimal::from(40_000), true, config.social_insurance(), 3);
/// assert_eq!(result.contribution, Decimal::from(1_350));
/// ```
pub fn calculate_social_insurance(
    monthly_gross: Decimal,
    apply_gov_benefits: bool,
    config: &SocialInsuranceConfig,
    step_number: u32,
) -> SocialInsuranceResult {
    let input = serde_json::json!({
        "monthly_gross": monthly_gross.normalize().to_string(),
        "apply_gov_benefits": apply_gov_benefits
    });

    if !apply_gov_benefits || monthly_gross <= Decimal::ZERO {
        let reasoning = if apply_gov_benefits {
            "No basic salary - no SSS contribution".to_string()
        } else {
            "Government benefits not applied - no SSS contribution".to_string()
        };

        return SocialInsuranceResult {
            salary_base: Decimal::ZERO,
            contribution: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "social_insurance".to_string(),
                rule_name: "SSS Contribution".to_string(),
                legal_ref: Some(config.legal_ref.clone()),
                input,
                output: serde_json::json!({ "sss": "0", "applied": false }),
                reasoning,
            },
        };
    }

    let salary_base = monthly_gross.min(config.salary_cap);
    let contribution = salary_base * config.rate;
    let cap_applied = monthly_gross > config.salary_cap;

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_insurance".to_string(),
        rule_name: "SSS Contribution".to_string(),
        legal_ref: Some(config.legal_ref.clone()),
        input,
        output: serde_json::json!({
            "salary_base": salary_base.normalize().to_string(),
            "rate": config.rate.normalize().to_string(),
            "cap_applied": cap_applied,
            "sss": contribution.normalize().to_string(),
            "applied": true
        }),
        reasoning: format!(
            "min({}, {} cap) x {} = {}",
            monthly_gross.normalize(),
            config.salary_cap.normalize(),
            config.rate.normalize(),
            contribution.normalize()
        ),
    };

    SocialInsuranceResult {
        salary_base,
        contribution,
        audit_step,
    }
}
