//! Health-insurance (PhilHealth) premium.
//!
//! The premium is a rate on basic salary clamped between a floor and a
//! ceiling. The employee pays a fixed share of it; the employer pays the rest.

use rust_decimal::Decimal;

use crate::config::HealthInsuranceConfig;
use crate::models::AuditStep;

/// The result of a PhilHealth premium calculation.
#[derive(Debug, Clone)]
pub struct HealthInsuranceResult {
    /// The clamped salary base.
    pub salary_base: Decimal,
    /// The employee's monthly share of the premium.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's PhilHealth premium share.
///
/// `contribution = clamp(monthly_gross, floor, ceiling) * premium_rate * employee_share`.
/// Zero when government benefits are switched off or there is no salary;
/// the floor only lifts a real salary, it never creates a premium from nothing.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_health_insurance;
/// use payshare_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let result = calculate_health_insurance(Decimal::from(30_000), true, config.health_insurance(), 4);
/// assert_eq!(result.contribution, Decimal::from(750));
/// ```
pub fn calculate_health_insurance(
    monthly_gross: Decimal,
    apply_gov_benefits: bool,
    config: &HealthInsuranceConfig,
    step_number: u32,
) -> HealthInsuranceResult {
    let input = serde_json::json!({
        "monthly_gross": monthly_gross.normalize().to_string(),
        "apply_gov_benefits": apply_gov_benefits
    });

    if !apply_gov_benefits || monthly_gross <= Decimal::ZERO {
        let reasoning = if apply_gov_benefits {
            "No basic salary - no PhilHealth premium".to_string()
        } else {
            "Government benefits not applied - no PhilHealth premium".to_string()
        };

        return HealthInsuranceResult {
            salary_base: Decimal::ZERO,
            contribution: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "health_insurance".to_string(),
                rule_name: "PhilHealth Premium".to_string(),
                legal_ref: Some(config.legal_ref.clone()),
                input,
                output: serde_json::json!({ "philhealth": "0", "applied": false }),
                reasoning,
            },
        };
    }

    let salary_base = monthly_gross.clamp(config.salary_floor, config.salary_ceiling);
    let total_premium = salary_base * config.premium_rate;
    let contribution = total_premium * config.employee_share;

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_insurance".to_string(),
        rule_name: "PhilHealth Premium".to_string(),
        legal_ref: Some(config.legal_ref.clone()),
        input,
        output: serde_json::json!({
            "salary_base": salary_base.normalize().to_string(),
            "total_premium": total_premium.normalize().to_string(),
            "employee_share": config.employee_share.normalize().to_string(),
            "philhealth": contribution.normalize().to_string(),
            "applied": true
        }),
        reasoning: format!(
            "clamp({}, {}..{}) x {} premium x {} employee share = {}",
            monthly_gross.normalize(),
            config.salary_floor.normalize(),
            config.salary_ceiling.normalize(),
            config.premium_rate.normalize(),
            config.employee_share.normalize(),
            contribution.normalize()
        ),
    };

    HealthInsuranceResult {
        salary_base,
        contribution,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatutoryConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> HealthInsuranceConfig {
        StatutoryConfig::default().health_insurance().clone()
    }

    #[test]
    fn test_salary_within_band() {
        let result = calculate_health_insurance(dec("30000"), true, &config(), 1);

        assert_eq!(result.salary_base, dec("30000"));
        assert_eq!(result.contribution, dec("750"));
    }

    #[test]
    fn test_low_salary_uses_floor() {
        let result = calculate_health_insurance(dec("8000"), true, &config(), 1);

        assert_eq!(result.salary_base, dec("10000"));
        assert_eq!(result.contribution, dec("250"));
    }

    #[test]
    fn test_high_salary_uses_ceiling() {
        let result = calculate_health_insurance(dec("150000"), true, &config(), 1);

        assert_eq!(result.salary_base, dec("100000"));
        assert_eq!(result.contribution, dec("2500"));
    }

    #[test]
    fn test_benefits_off_is_zero() {
        let result = calculate_health_insurance(dec("30000"), false, &config(), 1);

        assert_eq!(result.contribution, Decimal::ZERO);
        assert_eq!(
            result.audit_step.output["applied"].as_bool().unwrap(),
            false
        );
    }

    #[test]
    fn test_zero_salary_is_zero_despite_floor() {
        let result = calculate_health_insurance(Decimal::ZERO, true, &config(), 1);

        assert_eq!(result.contribution, Decimal::ZERO);
        assert_eq!(result.salary_base, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_fields() {
        let result = calculate_health_insurance(dec("30000"), true, &config(), 5);

        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.rule_id, "health_insurance");
        assert_eq!(result.audit_step.legal_ref.as_deref(), Some("RA 11223"));
        assert_eq!(
            result.audit_step.output["total_premium"].as_str().unwrap(),
            "1500"
        );
        assert_eq!(
            result.audit_step.output["philhealth"].as_str().unwrap(),
            "750"
        );
    }
}
