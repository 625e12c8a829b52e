//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! default schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// A short code identifying the schedule (e.g., "PH-2024").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// The currency symbol used for display strings.
    pub currency_symbol: String,
}

/// The assumed working pattern used to derive an hourly-equivalent wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Working days in a month.
    pub working_days_per_month: Decimal,
    /// Working hours in a day.
    pub hours_per_day: Decimal,
}

/// Social-insurance (SSS) contribution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceConfig {
    /// Reference to the governing law or circular.
    pub legal_ref: String,
    /// Employee share of the contribution, as a fraction of salary.
    pub rate: Decimal,
    /// Maximum monthly salary credit the rate applies to.
    pub salary_cap: Decimal,
}

/// Health-insurance (PhilHealth) premium settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceConfig {
    /// Reference to the governing law or circular.
    pub legal_ref: String,
    /// Total premium rate, as a fraction of salary.
    pub premium_rate: Decimal,
    /// The employee's share of the total premium (0.5 = half).
    pub employee_share: Decimal,
    /// Minimum salary base for the premium.
    pub salary_floor: Decimal,
    /// Maximum salary base for the premium.
    pub salary_ceiling: Decimal,
}

/// Housing-fund (Pag-IBIG) contribution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingFundConfig {
    /// Reference to the governing law or circular.
    pub legal_ref: String,
    /// Employee contribution rate, as a fraction of salary.
    pub rate: Decimal,
    /// Maximum monthly compensation the rate applies to.
    pub salary_cap: Decimal,
}

/// A single progressive tax bracket.
///
/// A bracket covers annual taxable income in the half-open interval
/// `(lower, upper]`. The last bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive lower bound of the bracket.
    pub lower: Decimal,
    /// Inclusive upper bound, or `None` for the top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate applied to income above `lower`.
    pub rate: Decimal,
    /// Tax owed on all income up to `lower`.
    pub base: Decimal,
}

impl TaxBracket {
    /// Returns true if `lower < income <= upper`.
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.lower && self.upper.is_none_or(|upper| income <= upper)
    }

    /// Returns the tax owed at the top of this bracket, if it is bounded.
    pub fn tax_at_upper(&self) -> Option<Decimal> {
        self.upper
            .map(|upper| self.base + (upper - self.lower) * self.rate)
    }
}

/// The annual income tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    /// Reference to the governing law.
    pub legal_ref: String,
    /// Brackets ordered by ascending lower bound.
    pub brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Checks that the brackets form one contiguous, consistent schedule.
    ///
    /// The first bracket must start at zero, every bracket must start where
    /// the previous one ends, only the last bracket may be unbounded, and each
    /// precomputed base must equal the tax owed at the top of the bracket below.
    pub fn validate(&self) -> EngineResult<()> {
        let first = self.brackets.first().ok_or_else(|| EngineError::InvalidTaxTable {
            message: "at least one bracket is required".to_string(),
        })?;

        if first.lower != Decimal::ZERO {
            return Err(EngineError::InvalidTaxTable {
                message: format!("first bracket must start at 0, found {}", first.lower),
            });
        }

        for (index, pair) in self.brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            let number = index + 1;

            let Some(upper) = current.upper else {
                return Err(EngineError::InvalidTaxTable {
                    message: format!("bracket {} is unbounded but is not the last bracket", number),
                });
            };

            if upper <= current.lower {
                return Err(EngineError::InvalidTaxTable {
                    message: format!("bracket {} upper bound must exceed its lower bound", number),
                });
            }

            if next.lower != upper {
                return Err(EngineError::InvalidTaxTable {
                    message: format!(
                        "bracket {} starts at {} but bracket {} ends at {}",
                        number + 1,
                        next.lower,
                        number,
                        upper
                    ),
                });
            }

            let expected_base = current.base + (upper - current.lower) * current.rate;
            if next.base != expected_base {
                return Err(EngineError::InvalidTaxTable {
                    message: format!(
                        "bracket {} base {} does not match tax owed below it ({})",
                        number + 1,
                        next.base,
                        expected_base
                    ),
                });
            }
        }

        if self.brackets.last().is_some_and(|last| last.upper.is_some()) {
            return Err(EngineError::InvalidTaxTable {
                message: "last bracket must be unbounded".to_string(),
            });
        }

        if let Some(bracket) = self.brackets.iter().find(|b| b.rate < Decimal::ZERO) {
            return Err(EngineError::InvalidTaxTable {
                message: format!("bracket starting at {} has a negative rate", bracket.lower),
            });
        }

        Ok(())
    }
}

/// The contents of `statutory.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryFile {
    /// Schedule metadata.
    pub metadata: ScheduleMetadata,
    /// Working pattern for hourly-equivalent rates.
    pub work_schedule: WorkSchedule,
    /// SSS settings.
    pub social_insurance: SocialInsuranceConfig,
    /// PhilHealth settings.
    pub health_insurance: HealthInsuranceConfig,
    /// Pag-IBIG settings.
    pub housing_fund: HousingFundConfig,
}

/// The complete statutory configuration.
///
/// Aggregates the contribution settings and the tax table. The
/// [`Default`] implementation carries the built-in 2024 schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryConfig {
    metadata: ScheduleMetadata,
    work_schedule: WorkSchedule,
    social_insurance: SocialInsuranceConfig,
    health_insurance: HealthInsuranceConfig,
    housing_fund: HousingFundConfig,
    tax_table: TaxTable,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(file: StatutoryFile, tax_table: TaxTable) -> Self {
        Self {
            metadata: file.metadata,
            work_schedule: file.work_schedule,
            social_insurance: file.social_insurance,
            health_insurance: file.health_insurance,
            housing_fund: file.housing_fund,
            tax_table,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the working pattern.
    pub fn work_schedule(&self) -> &WorkSchedule {
        &self.work_schedule
    }

    /// Returns the SSS settings.
    pub fn social_insurance(&self) -> &SocialInsuranceConfig {
        &self.social_insurance
    }

    /// Returns the PhilHealth settings.
    pub fn health_insurance(&self) -> &HealthInsuranceConfig {
        &self.health_insurance
    }

    /// Returns the Pag-IBIG settings.
    pub fn housing_fund(&self) -> &HousingFundConfig {
        &self.housing_fund
    }

    /// Returns the annual tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Validates every section of the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("social_insurance.rate", self.social_insurance.rate)?;
        non_negative("social_insurance.salary_cap", self.social_insurance.salary_cap)?;
        non_negative("health_insurance.premium_rate", self.health_insurance.premium_rate)?;
        non_negative("health_insurance.employee_share", self.health_insurance.employee_share)?;
        non_negative("health_insurance.salary_floor", self.health_insurance.salary_floor)?;
        non_negative("housing_fund.rate", self.housing_fund.rate)?;
        non_negative("housing_fund.salary_cap", self.housing_fund.salary_cap)?;

        if self.health_insurance.salary_floor > self.health_insurance.salary_ceiling {
            return Err(EngineError::InvalidConfig {
                field: "health_insurance.salary_floor".to_string(),
                message: "must not exceed salary_ceiling".to_string(),
            });
        }

        positive(
            "work_schedule.working_days_per_month",
            self.work_schedule.working_days_per_month,
        )?;
        positive("work_schedule.hours_per_day", self.work_schedule.hours_per_day)?;

        self.tax_table.validate()
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must not be negative, found {}", value),
        });
    }
    Ok(())
}

fn positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be greater than zero, found {}", value),
        });
    }
    Ok(())
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        let bracket = |lower: i64, upper: Option<i64>, rate_pct: i64, base: i64| TaxBracket {
            lower: Decimal::from(lower),
            upper: upper.map(Decimal::from),
            rate: Decimal::new(rate_pct, 2),
            base: Decimal::from(base),
        };

        Self {
            metadata: ScheduleMetadata {
                code: "PH-2024".to_string(),
                name: "Philippine statutory payroll deductions".to_string(),
                version: "2024-01-01".to_string(),
                currency_symbol: "₱".to_string(),
            },
            work_schedule: WorkSchedule {
                working_days_per_month: Decimal::from(22),
                hours_per_day: Decimal::from(8),
            },
            social_insurance: SocialInsuranceConfig {
                legal_ref: "RA 11199".to_string(),
                rate: Decimal::new(45, 3),
                salary_cap: Decimal::from(30_000),
            },
            health_insurance: HealthInsuranceConfig {
                legal_ref: "RA 11223".to_string(),
                premium_rate: Decimal::new(5, 2),
                employee_share: Decimal::new(5, 1),
                salary_floor: Decimal::from(10_000),
                salary_ceiling: Decimal::from(100_000),
            },
            housing_fund: HousingFundConfig {
                legal_ref: "RA 9679".to_string(),
                rate: Decimal::new(2, 2),
                salary_cap: Decimal::from(10_000),
            },
            tax_table: TaxTable {
                legal_ref: "RA 10963".to_string(),
                brackets: vec![
                    bracket(0, Some(250_000), 0, 0),
                    bracket(250_000, Some(400_000), 15, 0),
                    bracket(400_000, Some(800_000), 20, 22_500),
                    bracket(800_000, Some(2_000_000), 25, 102_500),
                    bracket(2_000_000, Some(8_000_000), 30, 402_500),
                    bracket(8_000_000, None, 35, 2_202_500),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = StatutoryConfig::default();
        assert!(config.validate().is_ok(), "{:?}", config.validate().err());
    }

    #[test]
    fn test_default_rates_match_schedule() {
        let config = StatutoryConfig::default();
        assert_eq!(config.social_insurance().rate, dec("0.045"));
        assert_eq!(config.social_insurance().salary_cap, dec("30000"));
        assert_eq!(config.health_insurance().premium_rate, dec("0.05"));
        assert_eq!(config.health_insurance().employee_share, dec("0.5"));
        assert_eq!(config.housing_fund().rate, dec("0.02"));
        assert_eq!(config.tax_table().brackets.len(), 6);
        assert_eq!(config.tax_table().brackets[5].base, dec("2202500"));
    }

    #[test]
    fn test_bracket_contains_is_exclusive_below_inclusive_above() {
        let config = StatutoryConfig::default();
        let bracket = &config.tax_table().brackets[1];
        assert!(!bracket.contains(dec("250000")));
        assert!(bracket.contains(dec("250000.01")));
        assert!(bracket.contains(dec("400000")));
        assert!(!bracket.contains(dec("400000.01")));
    }

    #[test]
    fn test_unbounded_bracket_contains_large_income() {
        let config = StatutoryConfig::default();
        let top = config.tax_table().brackets.last().unwrap();
        assert!(top.contains(dec("1000000000")));
        assert_eq!(top.tax_at_upper(), None);
    }

    #[test]
    fn test_gap_between_brackets_is_rejected() {
        let mut table = StatutoryConfig::default().tax_table().clone();
        table.brackets[2].lower = dec("450000");

        match table.validate() {
            Err(EngineError::InvalidTaxTable { message }) => {
                assert!(message.contains("bracket 3 starts at 450000"), "{}", message);
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_inconsistent_base_is_rejected() {
        let mut table = StatutoryConfig::default().tax_table().clone();
        table.brackets[3].base = dec("100000");

        match table.validate() {
            Err(EngineError::InvalidTaxTable { message }) => {
                assert!(message.contains("does not match"), "{}", message);
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_bounded_last_bracket_is_rejected() {
        let mut table = StatutoryConfig::default().tax_table().clone();
        table.brackets[5].upper = Some(dec("9000000"));

        assert!(matches!(
            table.validate(),
            Err(EngineError::InvalidTaxTable { .. })
        ));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let table = TaxTable {
            legal_ref: "none".to_string(),
            brackets: vec![],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_floor_above_ceiling_is_rejected() {
        let mut config = StatutoryConfig::default();
        config.health_insurance.salary_floor = dec("200000");

        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "health_insurance.salary_floor");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_working_days_is_rejected() {
        let mut config = StatutoryConfig::default();
        config.work_schedule.working_days_per_month = Decimal::ZERO;

        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
