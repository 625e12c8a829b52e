//! Night differential calculation functionality.
//!
//! Night differential is a percentage markup on the hourly-equivalent wage for
//! every night-shift hour. The hourly-equivalent wage assumes the configured
//! work pattern (22 days of 8 hours by default).

use rust_decimal::Decimal;

use crate::config::WorkSchedule;
use crate::models::{AuditStep, PersonInput};

/// Reference for the night shift differential rule.
pub const NIGHT_DIFFERENTIAL_REF: &str = "Labor Code Art. 86";

/// The result of a night differential calculation.
#[derive(Debug, Clone)]
pub struct NightDifferentialResult {
    /// Monthly salary divided over the working hours of the month.
    pub hourly_rate: Decimal,
    /// Night differential pay for the month (zero when not applied).
    pub pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly night differential pay.
///
/// `hourly = monthly_gross / days / hours`, and when night differential
/// applies, `pay = hourly * (rate / 100) * (night hours per day * days)`.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_night_differential;
/// use payshare_engine::config::StatutoryConfig;
/// use payshare_engine::models::PersonInput;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// let input = PersonInput {
///     apply_night_diff: true,
///     night_diff_hours_per_day: Decimal::from(8),
///     night_diff_rate: Decimal::from(10),
///     ..PersonInput::default()
/// };
///
/// let result = calculate_night_differential(Decimal::from(17_600), &input, config.work_schedule(), 2);
/// assert_eq!(result.hourly_rate, Decimal::from(100));
/// assert_eq!(result.pay, Decimal::from(1_760));
/// ```
pub fn calculate_night_differential(
    monthly_gross: Decimal,
    input: &PersonInput,
    schedule: &WorkSchedule,
    step_number: u32,
) -> NightDifferentialResult {
    let hourly_rate = monthly_gross / schedule.working_days_per_month / schedule.hours_per_day;

    if !input.apply_night_diff {
        let audit_step = AuditStep {
            step_number,
            rule_id: "night_differential".to_string(),
            rule_name: "Night Differential".to_string(),
            legal_ref: Some(NIGHT_DIFFERENTIAL_REF.to_string()),
            input: serde_json::json!({
                "monthly_gross": monthly_gross.normalize().to_string(),
                "apply_night_diff": false
            }),
            output: serde_json::json!({
                "night_diff_pay": "0",
                "applied": false
            }),
            reasoning: "Night differential not applied".to_string(),
        };

        return NightDifferentialResult {
            hourly_rate,
            pay: Decimal::ZERO,
            audit_step,
        };
    }

    let rate = input.night_diff_rate / Decimal::ONE_HUNDRED;
    let monthly_night_hours = input
        .night_diff_hours_per_day
        .saturating_mul(schedule.working_days_per_month);
    let pay = hourly_rate.saturating_mul(rate).saturating_mul(monthly_night_hours);

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_differential".to_string(),
        rule_name: "Night Differential".to_string(),
        legal_ref: Some(NIGHT_DIFFERENTIAL_REF.to_string()),
        input: serde_json::json!({
            "monthly_gross": monthly_gross.normalize().to_string(),
            "apply_night_diff": true,
            "night_diff_hours_per_day": input.night_diff_hours_per_day.normalize().to_string(),
            "night_diff_rate": input.night_diff_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.round_dp(4).normalize().to_string(),
            "monthly_night_hours": monthly_night_hours.normalize().to_string(),
            "night_diff_pay": pay.round_dp(4).normalize().to_string(),
            "applied": true
        }),
        reasoning: format!(
            "{} hourly x {}% x {} night hours = {}",
            hourly_rate.round_dp(2),
            input.night_diff_rate.normalize(),
            monthly_night_hours.normalize(),
            pay.round_dp(2)
        ),
    };

    NightDifferentialResult {
        hourly_rate,
        pay,
        audit_step,
    }
}
