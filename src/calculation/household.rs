//! Two-earner household calculation.
//!
//! Computes both earners' financials, then apportions the household's
//! expenses by their net incomes, flagging results that need attention.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{
    ApportionmentResult, Assignment, AuditWarning, Expense, Person, PersonInput,
};

use super::{PayCalculation, apportion, compute_with_audit};

/// The result of a household calculation.
#[derive(Debug, Clone)]
pub struct HouseholdResult {
    /// The first earner's pay calculation.
    pub person1: PayCalculation,
    /// The second earner's pay calculation.
    pub person2: PayCalculation,
    /// The expense apportionment based on both net incomes.
    pub apportionment: ApportionmentResult,
    /// Warnings about deficits or unallocated expenses.
    pub warnings: Vec<AuditWarning>,
}

/// Computes both earners' pay and apportions the expense list between them.
///
/// # Examples
///
/// ```
/// use payshare_engine::calculation::calculate_household;
/// use payshare_engine::config::StatutoryConfig;
/// use payshare_engine::models::{Assignment, Expense, PersonInput};
/// use rust_decimal::Decimal;
///
/// let earner = PersonInput {
///     gross_income: Decimal::from(30_000),
///     apply_gov_benefits: true,
///     ..PersonInput::default()
/// };
/// let expenses = vec![Expense::new("rent", "Rent", Decimal::from(20_000), Assignment::Equal)];
///
/// let result = calculate_household(&earner, &earner, &expenses, &StatutoryConfig::default());
/// assert_eq!(result.apportionment.person1.remaining, Decimal::from(16_670));
/// assert!(result.warnings.is_empty());
/// ```
pub fn calculate_household(
    person1: &PersonInput,
    person2: &PersonInput,
    expenses: &[Expense],
    config: &StatutoryConfig,
) -> HouseholdResult {
    let first = compute_with_audit(person1, config);
    let second = compute_with_audit(person2, config);

    let apportionment = apportion(
        expenses,
        first.financials.net_income,
        second.financials.net_income,
    );
    let warnings = household_warnings(&apportionment, expenses);

    HouseholdResult {
        person1: first,
        person2: second,
        apportionment,
        warnings,
    }
}

fn household_warnings(result: &ApportionmentResult, expenses: &[Expense]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    for (label, person) in [("person1", Person::First), ("person2", Person::Second)] {
        let share = result.share(person);
        if share.remaining < Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "EARNER_DEFICIT".to_string(),
                message: format!(
                    "{} is responsible for {} but nets {}, a shortfall of {}",
                    label,
                    share.total_responsibility.round_dp(2),
                    share.net_income.round_dp(2),
                    (-share.remaining).round_dp(2)
                ),
                severity: "medium".to_string(),
            });
        }
    }

    if result.household.household_remaining < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "HOUSEHOLD_DEFICIT".to_string(),
            message: format!(
                "Household expenses exceed combined net income by {}",
                (-result.household.household_remaining).round_dp(2)
            ),
            severity: "high".to_string(),
        });
    }

    let equitable_total = expenses
        .iter()
        .filter(|e| e.assigned_to == Assignment::Equitable)
        .fold(Decimal::ZERO, |total, e| total.saturating_add(e.amount));
    if result.household.household_net_income <= Decimal::ZERO && equitable_total > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "EQUITABLE_UNALLOCATED".to_string(),
            message: format!(
                "Household net income is not positive; {} of equitable expenses is assigned to neither earner",
                equitable_total.round_dp(2)
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn earner(gross: &str) -> PersonInput {
        PersonInput {
            gross_income: dec(gross),
            apply_gov_benefits: true,
            ..PersonInput::default()
        }
    }

    #[test]
    fn test_apportions_by_computed_net_incomes() {
        let config = StatutoryConfig::default();
        let expenses = vec![Expense::new("rent", "Rent", dec("18000"), Assignment::Equitable)];

        let result = calculate_household(&earner("30000"), &earner("15000"), &expenses, &config);

        assert_eq!(result.person1.financials.net_income, dec("26670"));
        assert_eq!(result.person2.financials.net_income, dec("13750"));
        assert_eq!(result.apportionment.person1.net_income, dec("26670"));
        assert_eq!(result.apportionment.household.household_net_income, dec("40420"));

        let tolerance = dec("0.000000001");
        assert!((result.apportionment.total_responsibility() - dec("18000")).abs() < tolerance);
        assert!(result.apportionment.person1.shared_contribution > result.apportionment.person2.shared_contribution);
    }

    #[test]
    fn test_audit_steps_are_kept_per_earner() {
        let config = StatutoryConfig::default();
        let result = calculate_household(&earner("30000"), &earner("0"), &[], &config);

        assert_eq!(result.person1.audit_steps.len(), 7);
        assert_eq!(result.person2.audit_steps.len(), 7);
    }

    #[test]
    fn test_no_expenses_remaining_equals_household_net() {
        let config = StatutoryConfig::default();
        let result = calculate_household(&earner("30000"), &earner("15000"), &[], &config);

        assert_eq!(
            result.apportionment.household.household_remaining,
            result.apportionment.household.household_net_income
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_earner_deficit_is_warned() {
        let config = StatutoryConfig::default();
        let expenses = vec![Expense::new(
            "loan",
            "Car loan",
            dec("20000"),
            Assignment::Fixed(Person::Second),
        )];

        let result = calculate_household(&earner("30000"), &earner("15000"), &expenses, &config);

        assert_eq!(result.apportionment.person2.remaining, dec("-6250"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "EARNER_DEFICIT");
        assert!(result.warnings[0].message.contains("6250"));
    }

    #[test]
    fn test_household_deficit_is_warned() {
        let config = StatutoryConfig::default();
        let expenses = vec![Expense::new("rent", "Rent", dec("50000"), Assignment::Equal)];

        let result = calculate_household(&earner("30000"), &earner("15000"), &expenses, &config);

        let codes: Vec<&str> = result.warnings.iter().map(|w| w.code.as_str()).collect();
        assert!(codes.contains(&"HOUSEHOLD_DEFICIT"));
        assert!(codes.contains(&"EARNER_DEFICIT"));
    }

    #[test]
    fn test_unallocated_equitable_expense_is_warned() {
        let config = StatutoryConfig::default();
        let expenses = vec![Expense::new("rent", "Rent", dec("10000"), Assignment::Equitable)];

        let result = calculate_household(&earner("0"), &earner("0"), &expenses, &config);

        assert_eq!(result.apportionment.total_responsibility(), Decimal::ZERO);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.code == "EQUITABLE_UNALLOCATED")
        );
    }
}
